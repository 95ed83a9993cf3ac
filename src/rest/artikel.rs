use reqwest::Method;

use crate::domain::{Artikel, ArtikelId};
use crate::rest::client::{decode_optional, location_id, ShopClient};
use crate::rest::error::RestError;

const RESOURCE: &str = "artikel";
const BEZEICHNUNG_QUERY_PARAM: &str = "bezeichnung";

/// Client for `/shop/rest/artikel`.
///
/// Every method sends exactly one request. Nothing is cached or retried.
#[derive(Clone)]
pub struct ArtikelResource {
    client: ShopClient,
}

impl ArtikelResource {
    pub fn new(client: ShopClient) -> Self {
        Self { client }
    }

    /// `GET /artikel/{id}`
    pub async fn get(&self, id: ArtikelId) -> Result<Artikel, RestError> {
        let url = self.client.endpoint(&[RESOURCE, &id.to_string()]);
        self.client.get_json(&url).await
    }

    /// `GET /artikel`, optionally filtered by description.
    pub async fn list(&self, bezeichnung: Option<&str>) -> Result<Vec<Artikel>, RestError> {
        let mut url = self.client.endpoint(&[RESOURCE]);
        if let Some(filter) = bezeichnung.filter(|f| !f.is_empty()) {
            url.query_pairs_mut()
                .append_pair(BEZEICHNUNG_QUERY_PARAM, filter);
        }
        let response = self.client.send::<()>(Method::GET, &url, None).await?;
        Ok(decode_optional(&url, response).await?.unwrap_or_default())
    }

    /// `POST /artikel` with a draft.
    ///
    /// A backend that answers `201 Created` with only a `Location` header
    /// yields the draft carrying the id from that header.
    pub async fn create(&self, draft: &Artikel) -> Result<Artikel, RestError> {
        let url = self.client.endpoint(&[RESOURCE]);
        let response = self.client.send(Method::POST, &url, Some(draft)).await?;
        let created_id = location_id(&response);

        match decode_optional::<Artikel>(&url, response).await? {
            Some(created) => {
                tracing::info!(id = ?created.id, "Article created");
                Ok(created)
            }
            None => {
                let id = created_id.ok_or_else(|| RestError::Decode {
                    url: url.to_string(),
                    message: "created article has neither a body nor a Location header"
                        .to_string(),
                })?;
                tracing::info!(id, "Article created");
                Ok(Artikel {
                    id: Some(id),
                    ..draft.clone()
                })
            }
        }
    }

    /// `PUT /artikel/{id}` with the full entity.
    ///
    /// An empty success body yields the entity that was sent.
    pub async fn update(&self, id: ArtikelId, artikel: &Artikel) -> Result<Artikel, RestError> {
        let url = self.client.endpoint(&[RESOURCE, &id.to_string()]);
        let response = self.client.send(Method::PUT, &url, Some(artikel)).await?;
        let updated = decode_optional::<Artikel>(&url, response)
            .await?
            .unwrap_or_else(|| artikel.clone());
        tracing::info!(id, version = ?updated.version, "Article updated");
        Ok(updated)
    }
}
