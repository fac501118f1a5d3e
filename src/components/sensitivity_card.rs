use leptos::prelude::*;

use crate::commands::SensitivityRecord;

/// Label and colour class of each bar, in display order.
const BAR_SPECS: [(&str, &str); 6] = [
    ("General", "tone-red"),
    ("Red Dot", "tone-orange"),
    ("2x Scope", "tone-yellow"),
    ("4x Scope", "tone-green"),
    ("Sniper Scope", "tone-blue"),
    ("Free Look", "tone-purple"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRow {
    pub label: &'static str,
    pub color: &'static str,
    pub value: f64,
}

impl BarRow {
    /// CSS width of the filled part. Out-of-range values are not clamped.
    pub fn fill_width(&self) -> String {
        format!("{}%", self.value)
    }

    pub fn value_text(&self) -> String {
        self.value.to_string()
    }
}

pub fn bar_rows(record: &SensitivityRecord) -> [BarRow; 6] {
    let values = [
        record.general,
        record.red_dot,
        record.scope_2x,
        record.scope_4x,
        record.sniper_scope,
        record.free_look,
    ];
    std::array::from_fn(|i| BarRow {
        label: BAR_SPECS[i].0,
        color: BAR_SPECS[i].1,
        value: values[i],
    })
}

#[component]
pub fn SensitivityCard(
    #[prop(into)] data: Signal<SensitivityRecord>,
    #[prop(optional, into)] title: Option<Signal<String>>,
) -> impl IntoView {
    // Bars are built once and updated in place so width transitions animate.
    let bars = (0..BAR_SPECS.len())
        .map(|i| {
            let (label, color) = BAR_SPECS[i];
            let row = move || bar_rows(&data.get())[i];
            view! {
                <div class="sensi-row">
                    <div class="sensi-row-head">
                        <span class="sensi-label">{label}</span>
                        <span class=format!("sensi-value {}", color)>{move || row().value_text()}</span>
                    </div>
                    <div class="sensi-track">
                        <div
                            class=format!("sensi-fill {}", color)
                            style:width=move || row().fill_width()
                        ></div>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="sensi-card">
            {title.map(|t| view! {
                <div class="sensi-card-header">
                    <span class="sensi-card-icon">"\u{26A1}"</span>
                    <h2 class="sensi-card-title">{move || t.get()}</h2>
                </div>
            })}
            <div class="sensi-grid">{bars}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::PRESETS;

    #[test]
    fn test_fill_fractions_match_values() {
        let record = SensitivityRecord {
            general: 50.0,
            red_dot: 0.0,
            scope_2x: 100.0,
            scope_4x: 25.0,
            sniper_scope: 12.5,
            free_look: 75.0,
        };
        let widths: Vec<String> = bar_rows(&record).iter().map(|r| r.fill_width()).collect();
        assert_eq!(widths, vec!["50%", "0%", "100%", "25%", "12.5%", "75%"]);
    }

    #[test]
    fn test_out_of_range_values_are_not_clamped() {
        let record = SensitivityRecord {
            general: 150.0,
            red_dot: -10.0,
            scope_2x: 100.0,
            scope_4x: 0.0,
            sniper_scope: 0.0,
            free_look: 0.0,
        };
        let rows = bar_rows(&record);
        assert_eq!(rows[0].fill_width(), "150%");
        assert_eq!(rows[1].fill_width(), "-10%");
        assert_eq!(rows[1].value_text(), "-10");
    }

    #[test]
    fn test_labels_and_colors_in_order() {
        let rows = bar_rows(&PRESETS[0].data);
        let labels: Vec<&str> = rows.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec!["General", "Red Dot", "2x Scope", "4x Scope", "Sniper Scope", "Free Look"]
        );
        let colors: Vec<&str> = rows.iter().map(|r| r.color).collect();
        assert_eq!(
            colors,
            vec!["tone-red", "tone-orange", "tone-yellow", "tone-green", "tone-blue", "tone-purple"]
        );
    }

    #[test]
    fn test_preset_values_render_exactly() {
        for preset in PRESETS.iter() {
            let rows = bar_rows(&preset.data);
            let d = preset.data;
            let expected = [
                d.general,
                d.red_dot,
                d.scope_2x,
                d.scope_4x,
                d.sniper_scope,
                d.free_look,
            ];
            for (row, value) in rows.iter().zip(expected) {
                assert_eq!(row.value, value, "{} / {}", preset.id, row.label);
                assert_eq!(row.value_text(), format!("{}", value));
            }
        }
    }

    #[test]
    fn test_integral_values_render_without_decimals() {
        let rows = bar_rows(&PRESETS[1].data);
        assert_eq!(rows[0].value_text(), "100");
        assert_eq!(rows[0].fill_width(), "100%");
    }
}
