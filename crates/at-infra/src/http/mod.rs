//! REST client for the Atmosphere backend.
//!
//! `ApiClient::request` is the whole protocol layer: bearer auth from local
//! storage, JSON bodies, lenient response parsing and error extraction. The
//! endpoint modules implement the `at-core` API ports on top of it.

mod admin;
mod auth;
mod client;
mod media;
mod portfolio;
mod posts;
mod profile;
mod reels;

pub use client::{ApiClient, ApiClientConfig};
pub use reqwest::Method;
