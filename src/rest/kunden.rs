use reqwest::Method;

use crate::domain::{Kunde, KundeId};
use crate::rest::client::{decode_optional, ShopClient};
use crate::rest::error::RestError;

const RESOURCE: &str = "kunden";
const NACHNAME_QUERY_PARAM: &str = "nachname";

/// Read-only client for `/shop/rest/kunden`.
#[derive(Clone)]
pub struct KundenResource {
    client: ShopClient,
}

impl KundenResource {
    pub fn new(client: ShopClient) -> Self {
        Self { client }
    }

    /// `GET /kunden/{id}`
    pub async fn get(&self, id: KundeId) -> Result<Kunde, RestError> {
        let url = self.client.endpoint(&[RESOURCE, &id.to_string()]);
        self.client.get_json(&url).await
    }

    /// `GET /kunden`, optionally filtered by last name.
    pub async fn list(&self, nachname: Option<&str>) -> Result<Vec<Kunde>, RestError> {
        let mut url = self.client.endpoint(&[RESOURCE]);
        if let Some(filter) = nachname.filter(|f| !f.is_empty()) {
            url.query_pairs_mut().append_pair(NACHNAME_QUERY_PARAM, filter);
        }
        let response = self.client.send::<()>(Method::GET, &url, None).await?;
        Ok(decode_optional(&url, response).await?.unwrap_or_default())
    }
}
