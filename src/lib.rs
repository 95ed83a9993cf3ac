//! Terminal administration client for the shop's article and customer catalog.
//!
//! The crate is layered leaves first:
//!
//! - [`domain`]: `Artikel` and `Kunde` as they travel over the wire
//! - [`rest`]: typed resource clients for the `/shop/rest` backend
//! - [`router`]: immutable route table and navigation state
//! - [`ui`]: per-view MVI controllers, the request executor and the TUI shell

pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod rest;
pub mod router;
pub mod ui;
