//! mockapi-core: Mock login API for local development
//!
//! Serves two canned endpoints so a mobile client running in an emulator
//! can be pointed at a local machine:
//! - `GET /api/test` - reachability check
//! - `POST /api/login` - hardcoded-credential login
//!
//! Unknown paths answer 404 and methods other than GET and POST answer 501.
//! Connections are handled one at a time on a current-thread runtime.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod request;
pub mod response;
pub mod router;
pub mod server;

// Re-exports
pub use config::ServerConfig;
pub use error::{Error, Result};
pub use request::{Method, Request, RequestBuilder};
pub use response::{Response, ResponseBuilder, StatusCode};
pub use router::{Endpoint, Router};
pub use server::{App, Server};

// Middleware re-exports
pub use middleware::{AccessLog, Cors, Middleware, MiddlewareChain};

// Model re-exports
pub use models::{LoginData, LoginRequest, LoginResponse, ReachabilityResponse, User};
