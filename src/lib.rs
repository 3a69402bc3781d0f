//! PetFriends API client
//!
//! A thin async client for the PetFriends pet catalog service. Each call
//! sends one request and returns an [`ApiResponse`]: the HTTP status as-is
//! plus the body, parsed as JSON when possible and raw text otherwise.
//!
//! The CLI internals are exposed for testing purposes.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod model;
pub mod output;
pub mod response;
pub mod ua;

pub use client::PetFriendsClient;
pub use config::{ClientConfig, Settings};
pub use error::ClientError;
pub use model::{AuthKey, Pet, PetFilter, PetList};
pub use response::{ApiResponse, ResponseBody};
