//! Entities exchanged with the shop backend.

mod artikel;
mod kunde;

pub use artikel::{format_preis, parse_preis, Artikel, ArtikelId};
pub use kunde::{Kunde, KundeId};
