//! Label Template Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::label::LabelType;

/// Saved label template
///
/// `data` holds one label payload (`{ "labelText": ..., "quantity": ... }`)
/// and is opaque to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: i64,
    #[serde(rename = "type")]
    pub label_type: LabelType,
    pub name: String,
    pub data: Value,
    /// Creation time (millis)
    pub created_at: i64,
}

/// Create template payload
///
/// Every field is optional on the wire so a missing one is reported as
/// a required-field error instead of a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateCreate {
    #[serde(rename = "type")]
    pub label_type: Option<String>,
    pub name: Option<String>,
    pub data: Option<Value>,
}

/// Update template payload (type is immutable)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateUpdate {
    pub name: Option<String>,
    pub data: Option<Value>,
}

/// List filter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateQuery {
    #[serde(rename = "type")]
    pub label_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_wire_names() {
        let template = Template {
            id: 3,
            label_type: LabelType::Bin,
            name: "Scarves".to_string(),
            data: json!({ "labelText": "Scarves", "quantity": 2 }),
            created_at: 1_705_912_335_000,
        };

        let value = serde_json::to_value(&template).unwrap();
        assert_eq!(value["type"], "bin");
        assert_eq!(value["data"]["labelText"], "Scarves");
        assert_eq!(value["created_at"], 1_705_912_335_000_i64);
    }

    #[test]
    fn test_create_payload_tolerates_missing_fields() {
        let create: TemplateCreate = serde_json::from_value(json!({ "name": "x" })).unwrap();
        assert!(create.label_type.is_none());
        assert!(create.data.is_none());
        assert_eq!(create.name.as_deref(), Some("x"));
    }
}
