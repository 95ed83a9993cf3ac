//! Terminal front end.
//!
//! One view is active at a time. Each view follows the MVI loop in [`mvi`];
//! [`app::App`] owns the router and the active view state and hands backend
//! calls to the [`executor`].

pub mod app;
pub mod article_create;
pub mod article_edit;
pub mod article_search;
pub mod controller;
pub mod customer_search;
pub mod events;
pub mod executor;
pub mod footer;
pub mod form;
pub mod header;
pub mod home;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod widgets;
