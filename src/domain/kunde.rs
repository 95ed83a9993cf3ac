use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type KundeId = u64;

/// A customer record. Read-only in this client.
///
/// Only the id is interpreted; every other attribute is backend-defined and
/// kept in server order for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kunde {
    pub id: KundeId,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Kunde {
    /// "Nachname, Vorname" when the backend sends those, otherwise the id.
    pub fn display_name(&self) -> String {
        let text = |key: &str| self.attributes.get(key).and_then(Value::as_str);
        match (text("nachname"), text("vorname")) {
            (Some(nachname), Some(vorname)) => format!("{nachname}, {vorname}"),
            (Some(nachname), None) => nachname.to_string(),
            _ => format!("Kunde {}", self.id),
        }
    }

    /// Attribute name/value pairs for display. Nested values are shown as JSON.
    pub fn attribute_lines(&self) -> Vec<(String, String)> {
        self.attributes
            .iter()
            .map(|(key, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    Value::Null => "-".to_string(),
                    other => other.to_string(),
                };
                (key.clone(), rendered)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kunde() -> Kunde {
        serde_json::from_value(json!({
            "id": 101,
            "nachname": "Alpha",
            "vorname": "Adriana",
            "adresse": {"plz": "76133"},
            "email": null
        }))
        .unwrap()
    }

    #[test]
    fn display_name_prefers_names() {
        assert_eq!(kunde().display_name(), "Alpha, Adriana");
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let kunde: Kunde = serde_json::from_value(json!({"id": 5})).unwrap();
        assert_eq!(kunde.display_name(), "Kunde 5");
    }

    #[test]
    fn attribute_lines_keep_server_order() {
        let lines = kunde().attribute_lines();
        let keys: Vec<_> = lines.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["nachname", "vorname", "adresse", "email"]);
        assert_eq!(lines[2].1, r#"{"plz":"76133"}"#);
        assert_eq!(lines[3].1, "-");
    }
}
