use super::types::PlayStyle;

/// Wire names of the six record fields, in display order.
pub const SENSITIVITY_FIELDS: [(&str, &str); 6] = [
    ("general", "General sensitivity (0-100)"),
    ("redDot", "Red Dot sensitivity (0-100)"),
    ("scope2x", "2x Scope sensitivity (0-100)"),
    ("scope4x", "4x Scope sensitivity (0-100)"),
    ("sniperScope", "Sniper Scope sensitivity (0-100)"),
    ("freeLook", "Free Look sensitivity (0-100)"),
];

/// Return the Gemini response schema for a sensitivity record.
///
/// Gemini takes an OpenAPI-style subset with upper-case type names. Every
/// field is a NUMBER and every field is required.
pub fn sensitivity_response_schema() -> serde_json::Value {
    let mut properties = serde_json::Map::new();
    for (name, description) in SENSITIVITY_FIELDS {
        properties.insert(
            name.to_string(),
            serde_json::json!({ "type": "NUMBER", "description": description }),
        );
    }
    let required: Vec<&str> = SENSITIVITY_FIELDS.iter().map(|(name, _)| *name).collect();

    serde_json::json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required,
    })
}

/// Build the coaching prompt for a device and play style.
///
/// The device string is embedded verbatim.
pub fn build_prompt(device_model: &str, style: PlayStyle) -> String {
    format!(
        r#"Act as "TO COBRAS", a legendary Free Fire Esports Coach known for aggressive and precise settings.
Generate the optimal sensitivity settings for a player using the device: "{device}".
The player's playstyle is: "{style}".

Consider the device's touch sampling rate, screen size (PPI), and typical FPS limits.
Provide values between 0 and 100.

For 'General' sensitivity, prefer higher values (above 90) for modern devices to enable quick 360s."#,
        device = device_model,
        style = style.label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_requires_all_six_fields() {
        let schema = sensitivity_response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            vec!["general", "redDot", "scope2x", "scope4x", "sniperScope", "freeLook"]
        );
    }

    #[test]
    fn test_schema_fields_are_numbers_with_descriptions() {
        let schema = sensitivity_response_schema();
        assert_eq!(schema["type"], "OBJECT");
        let props = schema["properties"].as_object().unwrap();
        assert_eq!(props.len(), 6);
        for (name, prop) in props {
            assert_eq!(prop["type"], "NUMBER", "field {} should be NUMBER", name);
            let desc = prop["description"].as_str().unwrap();
            assert!(desc.contains("(0-100)"), "field {} description: {}", name, desc);
        }
    }

    #[test]
    fn test_prompt_embeds_device_and_full_style_label() {
        let prompt = build_prompt("POCO X3", PlayStyle::Rusher);
        assert!(prompt.contains("device: \"POCO X3\""));
        assert!(prompt.contains("playstyle is: \"Rusher (Aggressive)\""));
    }

    #[test]
    fn test_prompt_states_range_and_general_bias() {
        let prompt = build_prompt("iPhone 13", PlayStyle::Balanced);
        assert!(prompt.contains("between 0 and 100"));
        assert!(prompt.contains("above 90"));
        assert!(prompt.contains("touch sampling rate"));
    }

    #[test]
    fn test_prompt_keeps_device_verbatim() {
        let prompt = build_prompt("  Galaxy \"S23\" Ultra ", PlayStyle::Sniper);
        assert!(prompt.contains("  Galaxy \"S23\" Ultra "));
    }
}
