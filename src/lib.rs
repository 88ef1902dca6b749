//! # petfriends
//!
//! Typed async client for the PetFriends pet-catalog REST API, plus the
//! contract test suite that exercises it (see `tests/`).
//!
//! ## Key Features
//!
//! - **Uniform results**: every call returns a `(status, body)` pair with the
//!   body tagged success or failure per endpoint
//! - **No hidden state**: clients are constructed explicitly and passed by
//!   parameter; no globals, no retries, no local persistence
//! - **Multipart uploads**: pet photos attached from local files
//! - **Service-side semantics**: 400/403/404 replies are data, not errors;
//!   the suite asserts on them directly
//!
//! ## Example
//!
//! ```rust,no_run
//! use petfriends::{Credentials, PetFilter, PetFriends, PetFriendsConfig};
//!
//! # async fn example() -> petfriends::ApiResult<()> {
//! let config = PetFriendsConfig::new(
//!     "https://petfriends.skillfactory.ru",
//!     Credentials::new("user@example.com", "secret"),
//! );
//!
//! let client = PetFriends::new(config)?;
//! let auth = client.authenticate().await?;
//! let key = auth.into_success().map(|k| k.key).unwrap_or_default();
//!
//! let listing = client.get_list_of_pets(&key, PetFilter::MyPets).await?;
//! println!("status: {}", listing.status);
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
pub mod types;

// Re-export main types
pub use client::PetFriends;
pub use config::{Credentials, PetFriendsConfig, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT};
pub use error::{ApiError, ApiResult, ErrorCategory};
pub use types::{ApiKey, ApiResponse, Pet, PetFilter, PetList, ResponseBody};
