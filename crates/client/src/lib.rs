//! Generated-style user API client stubs.
//!
//! Configuration, endpoint surfaces, and resource models for the user API,
//! shaped like generated client code: constructible types, plain field
//! access, no network I/O. Consumers use this crate to verify that client
//! symbols are wired and that set values round-trip unchanged.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod models;
pub mod users;

pub use config::{ApiClient, DEFAULT_BASE_PATH};
pub use error::{ClientError, ClientResult};
pub use models::{CreateUserRequest, User};
pub use users::UsersApi;
