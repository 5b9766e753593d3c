//! # petfriends-qa
//!
//! Black-box functional test client for the PetFriends pet-management REST API.
//!
//! ## Key Features
//!
//! - **Thin Request Wrapping**: Every endpoint call returns the raw HTTP
//!   status plus a decoded body envelope, with no interpretation in between
//! - **Status Passthrough**: 403s, 400s, and 500s from the service are data
//!   for assertions, never client errors
//! - **Multipart Uploads**: Pet creation and photo attachment with MIME types
//!   guessed from the file extension
//! - **Environment Credentials**: Account secrets come from the environment
//!   and never live in the source tree
//!
//! ## Example
//!
//! ```rust,no_run
//! use petfriends_qa::{ApiConfig, PetFilter, PetFriends};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PetFriends::new(ApiConfig::default())?;
//!
//! let auth = client.get_api_key("user@example.com", "secret").await?;
//! assert_eq!(auth.status, 200);
//! let key = auth.body["key"].as_str().unwrap_or_default().to_string();
//!
//! let listing = client.get_list_of_pets(&key, PetFilter::MyPets).await?;
//! assert_eq!(listing.status, 200);
//! # Ok(())
//! # }
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod client;
pub mod config;
pub mod error;
pub mod response;
pub mod types;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use client::PetFriends;
pub use config::{ApiConfig, Credentials, TestAccounts, DEFAULT_BASE_URL};
pub use error::{ClientError, ClientResult};
pub use response::{ApiResponse, ResponseBody};
pub use types::{ApiKey, NewPet, Pet, PetFilter, PetList};
