//! HTTP gateway for the shortlink service.
//!
//! Exposes the [`shortlink_core`] store over a small JSON API. Encode and
//! decode requests run through the admission gate and are answered with
//! `429 Too Many Requests` when it is full.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
