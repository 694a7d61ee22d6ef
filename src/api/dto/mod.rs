//! Data Transfer Objects mirroring the server's wire contract.
//!
//! All DTOs use Serde for JSON serialization/deserialization.

pub mod shorten;

pub use shorten::{ShortenRequest, ShortenResponse};
