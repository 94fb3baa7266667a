// Copyright (c) 2025 - Cowboy AI, Inc.

//! Transport adapters
//!
//! Concrete implementations of the [`Fetch`](crate::reader::Fetch) trait.

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::HttpFetcher;

pub mod memory;

pub use memory::InMemoryFetcher;
