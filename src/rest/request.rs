use crate::domain::{Artikel, ArtikelId, Kunde, KundeId};
use crate::rest::error::RestError;

/// A resource-client call described as data.
///
/// Controllers emit these; the executor turns each into exactly one HTTP
/// request.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    GetArtikel { id: ArtikelId },
    ListArtikel { bezeichnung: Option<String> },
    CreateArtikel { draft: Artikel },
    UpdateArtikel { id: ArtikelId, artikel: Artikel },
    GetKunde { id: KundeId },
    ListKunden { nachname: Option<String> },
}

impl ApiRequest {
    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            ApiRequest::GetArtikel { .. } => "get_artikel",
            ApiRequest::ListArtikel { .. } => "list_artikel",
            ApiRequest::CreateArtikel { .. } => "create_artikel",
            ApiRequest::UpdateArtikel { .. } => "update_artikel",
            ApiRequest::GetKunde { .. } => "get_kunde",
            ApiRequest::ListKunden { .. } => "list_kunden",
        }
    }
}

/// Outcome of an [`ApiRequest`], one variant per request kind.
#[derive(Debug)]
pub enum ApiResponse {
    ArtikelFound(Result<Artikel, RestError>),
    ArtikelListed(Result<Vec<Artikel>, RestError>),
    ArtikelCreated(Result<Artikel, RestError>),
    ArtikelUpdated(Result<Artikel, RestError>),
    KundeFound(Result<Kunde, RestError>),
    KundenListed(Result<Vec<Kunde>, RestError>),
}

impl ApiResponse {
    pub fn error(&self) -> Option<&RestError> {
        match self {
            ApiResponse::ArtikelFound(r)
            | ApiResponse::ArtikelCreated(r)
            | ApiResponse::ArtikelUpdated(r) => r.as_ref().err(),
            ApiResponse::ArtikelListed(r) => r.as_ref().err(),
            ApiResponse::KundeFound(r) => r.as_ref().err(),
            ApiResponse::KundenListed(r) => r.as_ref().err(),
        }
    }
}
