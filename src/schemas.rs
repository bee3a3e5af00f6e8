use serde_json::{Map, Value, json};
use std::sync::Arc;

pub fn generate_advice_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "transcript": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "speaker": {"type": "string"},
                        "text": {"type": "string"}
                    },
                    "required": ["speaker", "text"]
                }
            },
            "analysis_results": {"type": ["object", "null"]},
            "user_goals": {"type": ["array", "null"], "items": {"type": "string"}}
        },
        "required": ["transcript"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

pub fn generate_advice_output_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "key_insights": {"type": "array"},
            "prioritized_advice": {"type": "array"},
            "timeline": {"type": "object"},
            "resources": {"type": "array"},
            "visualization": {"type": "object"}
        },
        "required": ["key_insights", "prioritized_advice", "timeline", "resources", "visualization"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

pub fn advantage_increment_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "transcript": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "speaker": {"type": "string"},
                        "text": {"type": "string"}
                    },
                    "required": ["speaker", "text"]
                }
            },
            "historical_data": {
                "type": ["object", "null"],
                "properties": {
                    "experience": {"type": "array", "items": {"type": "object"}},
                    "skills": {"type": "array", "items": {"type": "string"}}
                }
            }
        },
        "required": ["transcript"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

pub fn record_progress_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "user_id": {"type": "string"},
            "action": {"type": "string", "enum": ["record", "stats"], "default": "record"},
            "transcriptions": {"type": "integer", "minimum": 0},
            "analyses": {"type": "integer", "minimum": 0},
            "duration_minutes": {"type": "integer", "minimum": 0}
        },
        "required": ["user_id"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

pub fn detailed_help_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "tool": {"type": "string"},
            "format": {"type": "string", "enum": ["full", "compact"], "default": "full"}
        },
        "required": ["tool"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}
