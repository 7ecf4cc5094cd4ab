mod client;
mod credentials;
mod error;

pub use client::{ApiClient, ApiConfig};
pub use credentials::{CredentialStore, Credentials};
pub use error::ApiError;
