pub mod client;
pub mod dto;
pub mod error;

pub use client::{RaindropApi, RaindropClient, DEFAULT_API_BASE_URL};
pub use dto::{ApiEnvelope, Collection, Raindrop};
pub use error::RaindropApiError;
