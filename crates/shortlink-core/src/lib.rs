//! Core types for the shortlink service.
//!
//! This crate provides the in-memory [`UrlStore`], the base-62 [`codec`]
//! behind its short codes, and the [`AdmissionGate`] used to bound how many
//! store operations run at once.

pub mod codec;
pub mod error;
pub mod gate;
pub mod generator;
pub mod settings;
pub mod shortcode;
pub mod store;

pub use error::{Result, ShortlinkError};
pub use gate::{AdmissionGate, GateOutcome, Permit};
pub use generator::SeqGenerator;
pub use settings::ShortlinkSettings;
pub use shortcode::ShortCode;
pub use store::UrlStore;
