use serde_json::json;

/// Returns the JSON schema the model is constrained to for verdict replies
pub fn verdict_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "verdict": {
                "type": "string",
                "enum": ["SAFE", "CAUTION", "AVOID"]
            },
            "short_reason": { "type": "string" },
            "detailed_reason": { "type": "string" },
            "ui_theme": {
                "type": "string",
                "enum": ["green", "yellow", "red"]
            },
            "highlighted_ingredients": {
                "type": "array",
                "items": { "type": "string" }
            },
            "uncertainty_note": { "type": "string" }
        },
        "required": [
            "verdict", "short_reason", "detailed_reason",
            "ui_theme", "highlighted_ingredients", "uncertainty_note"
        ]
    })
}
