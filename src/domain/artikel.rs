use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type ArtikelId = u64;

/// A catalog article as exchanged with the backend.
///
/// Fields the client does not know about (audit timestamps, links) are kept
/// in `extra` so that an update sends back exactly what was fetched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Artikel {
    /// Server-assigned id. `None` only for drafts that were never created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ArtikelId>,
    #[serde(default)]
    pub bezeichnung: String,
    #[serde(default)]
    pub preis: f64,
    /// Version marker used by the backend for optimistic locking.
    /// Forwarded as received; absent stays absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Decommissioned articles are no longer offered in the shop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ausgesondert: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Artikel {
    /// Build a draft for a create request.
    pub fn draft(bezeichnung: impl Into<String>, preis: f64) -> Self {
        Self {
            id: None,
            bezeichnung: bezeichnung.into(),
            preis,
            ..Self::default()
        }
    }

    pub fn is_ausgesondert(&self) -> bool {
        self.ausgesondert.unwrap_or(false)
    }

    /// Copy of this article with the user-editable fields replaced.
    ///
    /// Id, version and server-owned fields are carried over unchanged. The
    /// decommission flag is only written when it was received or set.
    pub fn with_changes(&self, bezeichnung: &str, preis: f64, ausgesondert: bool) -> Self {
        let ausgesondert = (self.ausgesondert.is_some() || ausgesondert).then_some(ausgesondert);
        Self {
            bezeichnung: bezeichnung.to_string(),
            preis,
            ausgesondert,
            ..self.clone()
        }
    }
}

/// Parse a price as typed into a form. Accepts a decimal comma.
pub fn parse_preis(input: &str) -> Option<f64> {
    let normalized = input.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Render a price for a form field without trailing noise.
pub fn format_preis(preis: f64) -> String {
    preis.to_string()
}
