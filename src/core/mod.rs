//! Core components of the `hotlist` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`HotClient`] configuration bundle and its builder.
//! - The primary [`HotError`] type.
//! - The [`CanonicalItem`] model and the lenient raw wire shapes.
//! - The [`FetchStrategy`] seam the cascade iterates over.

/// The client (`HotClient`), builder, and configuration.
pub mod client;
/// The primary error type (`HotError`) for the crate.
pub mod error;
/// The canonical item model.
pub mod models;
/// Strategy trait and raw batch type.
pub mod services;
/// Raw payload shapes, deserialized leniently.
pub mod wire;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::HotClient`
pub use client::{BrowserOptions, HotClient, HotClientBuilder, RetryConfig};
pub use error::HotError;
pub use models::CanonicalItem;
pub use services::{FetchStrategy, RawBatch};
pub use wire::{RawApiItem, RawBrowserItem};
