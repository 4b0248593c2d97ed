//! Exact-path HTTP router
//!
//! Routes are organized by HTTP method, then looked up by exact path.
//! The mock API has no path parameters, so a map per method is enough.

use crate::Method;
use std::collections::HashMap;

/// Endpoints served by the mock API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /api/test`
    Reachability,
    /// `POST /api/login`
    Login,
}

/// Per-method exact-path router
#[derive(Debug)]
pub struct Router<T> {
    routes: HashMap<Method, HashMap<String, T>>,
}

impl<T: Clone> Router<T> {
    /// Create an empty router
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Add a route, replacing any previous value for the same method and path
    pub fn route(&mut self, method: Method, path: &str, value: T) -> &mut Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path.to_string(), value);
        self
    }

    /// Add a GET route
    pub fn get(&mut self, path: &str, value: T) -> &mut Self {
        self.route(Method::Get, path, value)
    }

    /// Add a POST route
    pub fn post(&mut self, path: &str, value: T) -> &mut Self {
        self.route(Method::Post, path, value)
    }

    /// Match a request
    pub fn match_route(&self, method: Method, path: &str) -> Option<T> {
        self.routes.get(&method)?.get(path).cloned()
    }
}

impl<T: Clone> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl Router<Endpoint> {
    /// The fixed route table of the mock API
    pub fn mock_api() -> Self {
        let mut router = Self::new();
        router
            .get("/api/test", Endpoint::Reachability)
            .post("/api/login", Endpoint::Login);
        router
    }
}
