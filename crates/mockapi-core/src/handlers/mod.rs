//! Endpoint handlers
//!
//! Handlers are plain functions from a request to a response. Failures are
//! turned into status codes here and never leave the handler.

pub mod login;
pub mod reachability;

pub use login::{login, SESSION_TOKEN, TEST_EMAIL, TEST_PASSWORD};
pub use reachability::reachability;
