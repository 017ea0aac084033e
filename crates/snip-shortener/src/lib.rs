//! URL shortener service implementation.
//!
//! This crate provides [`ShortenerService`], which derives short codes with
//! a [`Generator`](snip_generator::Generator) and persists mappings through a
//! [`Repository`](snip_core::Repository). Core types are re-exported from
//! `snip_core`.

pub mod service;

pub use service::ShortenerService;
pub use snip_core::{ShortCode, Shortener, ShortenerError, UrlMapping};
