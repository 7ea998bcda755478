//! Async client for the jsonstore.io key-path JSON document store.
//!
//! Each caller owns a 64-character namespace token; every value lives at a
//! slash-separated path below it. The client exposes four calls, each a
//! single HTTP request:
//!
//! - [`JsonStore::get`] reads a value (optionally ordered or filtered remotely)
//! - [`JsonStore::set`] creates or overwrites a value
//! - [`JsonStore::chg`] merges into a value
//! - [`JsonStore::del`] deletes a value
//!
//! ```no_run
//! use jsonstore_client::{Config, GetOptions, JsonStore};
//! use serde_json::json;
//!
//! # async fn example() -> jsonstore_client::Result<()> {
//! // No token configured: one is requested from the store first
//! let store = JsonStore::connect(Config::new().with_path("app")).await?;
//!
//! store.set(&json!({"x": 1}), "n").await?;
//! let value = store.get(GetOptions::at("n")).await?;
//! assert_eq!(value, json!({"x": 1}));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
pub mod token;


pub use config::Config;
pub use error::{Result, StoreError};
pub use models::{DelOptions, Envelope, GetOptions};
pub use store::JsonStore;
