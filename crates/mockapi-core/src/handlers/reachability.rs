//! Reachability check for `GET /api/test`
//!
//! Lets a client in an emulator confirm it can reach the host machine.

use crate::models::ReachabilityResponse;
use crate::{Request, Response, StatusCode};

pub const REACHABLE_MESSAGE: &str = "Serveur de test accessible";

/// Always answers 200 regardless of query string or headers
pub fn reachability(_req: &Request) -> Response {
    Response::json(
        StatusCode::OK,
        &ReachabilityResponse {
            message: REACHABLE_MESSAGE.to_string(),
            status: "ok".to_string(),
        },
    )
}
