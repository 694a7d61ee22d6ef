//! HTTP client layer for the shortener server.
//!
//! This layer translates the shorten operation into the server's HTTP
//! contract and maps transport-level failures into [`crate::ShortenError`].
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`client`] - The [`ShortenApi`] trait and its reqwest implementation

pub mod client;
pub mod dto;

pub use client::{HttpShortenApi, ShortenApi};

#[cfg(test)]
pub use client::MockShortenApi;
