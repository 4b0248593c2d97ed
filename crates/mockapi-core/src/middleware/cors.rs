//! CORS header for JSON responses
//!
//! The emulator and browser clients hit the mock from arbitrary origins, so
//! every JSON response carries `Access-Control-Allow-Origin`. Bare 404s are
//! left untouched.

use super::Middleware;
use crate::{Request, Response};

pub const ALLOW_ORIGIN_HEADER: &str = "Access-Control-Allow-Origin";

/// CORS middleware
pub struct Cors {
    allow_origin: String,
}

impl Cors {
    /// Allow a single origin
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            allow_origin: origin.into(),
        }
    }

    /// Allow any origin
    pub fn permissive() -> Self {
        Self::new("*")
    }
}

impl Middleware for Cors {
    fn after(&self, _req: &Request, res: &mut Response) {
        if res.is_json() && res.header(ALLOW_ORIGIN_HEADER).is_none() {
            res.headers
                .push((ALLOW_ORIGIN_HEADER.to_string(), self.allow_origin.clone()));
        }
    }
}
