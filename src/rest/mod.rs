//! Typed clients for the shop REST backend.
//!
//! [`ShopClient`] owns the HTTP connection pool and the base URL; the
//! resource clients add the per-resource paths. [`ShopApi`] bundles both
//! resources and executes [`ApiRequest`] values.

mod artikel;
mod client;
mod error;
mod kunden;
mod request;

pub use artikel::ArtikelResource;
pub use client::ShopClient;
pub use error::RestError;
pub use kunden::KundenResource;
pub use request::{ApiRequest, ApiResponse};

use crate::config::BackendConfig;

/// All resource clients the UI talks to.
#[derive(Clone)]
pub struct ShopApi {
    artikel: ArtikelResource,
    kunden: KundenResource,
}

impl ShopApi {
    pub fn new(config: &BackendConfig) -> Result<Self, RestError> {
        Ok(Self::from_client(ShopClient::new(config)?))
    }

    pub fn from_client(client: ShopClient) -> Self {
        Self {
            artikel: ArtikelResource::new(client.clone()),
            kunden: KundenResource::new(client),
        }
    }

    /// Run one request to completion.
    pub async fn execute(&self, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::GetArtikel { id } => ApiResponse::ArtikelFound(self.artikel.get(id).await),
            ApiRequest::ListArtikel { bezeichnung } => {
                ApiResponse::ArtikelListed(self.artikel.list(bezeichnung.as_deref()).await)
            }
            ApiRequest::CreateArtikel { draft } => {
                ApiResponse::ArtikelCreated(self.artikel.create(&draft).await)
            }
            ApiRequest::UpdateArtikel { id, artikel } => {
                ApiResponse::ArtikelUpdated(self.artikel.update(id, &artikel).await)
            }
            ApiRequest::GetKunde { id } => ApiResponse::KundeFound(self.kunden.get(id).await),
            ApiRequest::ListKunden { nachname } => {
                ApiResponse::KundenListed(self.kunden.list(nachname.as_deref()).await)
            }
        }
    }
}
