use crate::commands::SensitivityRecord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub data: SensitivityRecord,
}

/// Built-in presets. The first one is the page's initial selection.
pub static PRESETS: [Preset; 3] = [
    Preset {
        id: "cobra-balanced",
        name: "Cobra Recruit (Balanced)",
        description: "Perfect stability for mid-range combat.",
        data: SensitivityRecord {
            general: 92.0,
            red_dot: 85.0,
            scope_2x: 75.0,
            scope_4x: 65.0,
            sniper_scope: 50.0,
            free_look: 65.0,
        },
    },
    Preset {
        id: "king-cobra",
        name: "King Cobra (One-Tap)",
        description: "Maximum speed for lethal drag headshots.",
        data: SensitivityRecord {
            general: 100.0,
            red_dot: 98.0,
            scope_2x: 92.0,
            scope_4x: 88.0,
            sniper_scope: 65.0,
            free_look: 80.0,
        },
    },
    Preset {
        id: "silent-viper",
        name: "Silent Viper (Sniper)",
        description: "Steady hands for long-range eliminations.",
        data: SensitivityRecord {
            general: 80.0,
            red_dot: 70.0,
            scope_2x: 60.0,
            scope_4x: 50.0,
            sniper_scope: 35.0,
            free_look: 55.0,
        },
    },
];

pub fn default_preset() -> &'static Preset {
    &PRESETS[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_ids_are_unique() {
        let mut ids: Vec<&str> = PRESETS.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), PRESETS.len());
    }

    #[test]
    fn test_default_is_cobra_balanced() {
        assert_eq!(default_preset().id, "cobra-balanced");
        assert_eq!(default_preset().data.general, 92.0);
    }

    #[test]
    fn test_king_cobra_values() {
        let king = PRESETS.iter().find(|p| p.id == "king-cobra").unwrap();
        assert_eq!(
            king.data,
            SensitivityRecord {
                general: 100.0,
                red_dot: 98.0,
                scope_2x: 92.0,
                scope_4x: 88.0,
                sniper_scope: 65.0,
                free_look: 80.0,
            }
        );
    }
}
