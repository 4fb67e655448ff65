//! Flavor Model

use serde::{Deserialize, Serialize};

/// Flavor entity (a sellable product variant)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flavor {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "disponible")]
    pub available: bool,
}

impl Flavor {
    /// Badge text for the availability column
    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Not available"
        }
    }
}

/// Create flavor payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorCreate {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "disponible", default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flavor_wire_names() {
        let flavor: Flavor = serde_json::from_str(
            r#"{"id":1,"nombre":"Vanilla","descripcion":"d","disponible":true}"#,
        )
        .unwrap();
        assert_eq!(flavor.id, 1);
        assert_eq!(flavor.name, "Vanilla");
        assert!(flavor.available);
        assert_eq!(flavor.availability_label(), "Available");
    }

    #[test]
    fn test_create_payload() {
        let payload = FlavorCreate {
            name: "Choco".into(),
            description: "Dark cocoa".into(),
            available: false,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"nombre":"Choco","descripcion":"Dark cocoa","disponible":false})
        );

        let parsed: FlavorCreate =
            serde_json::from_str(r#"{"nombre":"Mint","descripcion":"Fresh"}"#).unwrap();
        assert!(parsed.available);
    }
}
