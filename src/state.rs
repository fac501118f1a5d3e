//! Page and form state, kept free of DOM access so it can be driven directly.

use crate::commands::{GenerationOutcome, PlayStyle, SensitivityRecord};
use crate::presets::{default_preset, Preset};

/// Shown for any failure that reaches the form, whatever the cause.
pub const CONNECTION_ERROR: &str = "Connection to Cobra Server failed. Verify API Key.";

/// Delay before a successful generation returns the form to idle.
pub const SUCCESS_RESET_MS: i32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Presets,
    Ai,
}

/// Everything the page shell owns. The current record is only ever replaced whole.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    pub current: SensitivityRecord,
    pub active_tab: ActiveTab,
    pub active_preset: &'static str,
    pub mobile_menu_open: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        let preset = default_preset();
        Self {
            current: preset.data,
            active_tab: ActiveTab::Presets,
            active_preset: preset.id,
            mobile_menu_open: false,
        }
    }
}

impl ShellState {
    pub fn select_preset(&mut self, preset: &'static Preset) {
        self.current = preset.data;
        self.active_preset = preset.id;
        self.active_tab = ActiveTab::Presets;
    }

    pub fn apply_generated(&mut self, record: SensitivityRecord) {
        self.current = record;
        self.active_tab = ActiveTab::Ai;
    }

    pub fn set_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Tab picked from the mobile dropdown; the dropdown closes.
    pub fn choose_tab_from_menu(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
        self.mobile_menu_open = false;
    }

    pub fn card_title(&self) -> &'static str {
        match self.active_tab {
            ActiveTab::Ai => "AI Generated Config",
            ActiveTab::Presets => "Active Configuration",
        }
    }

    pub fn tip(&self) -> &'static str {
        match self.active_tab {
            ActiveTab::Ai => {
                "AI settings are a baseline. Increase 'General' by +2 if you use a powder or finger sleeves."
            }
            ActiveTab::Presets => {
                "For 'King Cobra' settings, use a quick 'J' drag motion for maximum headshot rate."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub device_model: String,
    pub play_style: PlayStyle,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub device: String,
    pub play_style: PlayStyle,
    pub status: GenerationStatus,
    pub error: Option<&'static str>,
    /// The last delivered record came from the fallback, not the model.
    pub degraded: bool,
}

impl FormState {
    /// Start a request. Returns `None` for a blank device or while one is in flight.
    pub fn begin_submit(&mut self) -> Option<GenerationRequest> {
        if self.device.trim().is_empty() || self.status == GenerationStatus::Loading {
            return None;
        }
        self.status = GenerationStatus::Loading;
        self.error = None;
        self.degraded = false;
        Some(GenerationRequest {
            device_model: self.device.clone(),
            play_style: self.play_style,
        })
    }

    /// Record how the request settled; yields the record to hand to the shell.
    pub fn settle(
        &mut self,
        result: Result<GenerationOutcome, String>,
    ) -> Option<SensitivityRecord> {
        match result {
            Ok(outcome) => {
                self.status = GenerationStatus::Success;
                self.degraded = outcome.is_fallback();
                Some(outcome.record())
            }
            Err(_) => {
                self.status = GenerationStatus::Error;
                self.error = Some(CONNECTION_ERROR);
                None
            }
        }
    }

    /// Timer target. Errors stay visible until the next submit.
    pub fn reset_after_success(&mut self) {
        if self.status == GenerationStatus::Success {
            self.status = GenerationStatus::Idle;
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == GenerationStatus::Loading
    }
}
