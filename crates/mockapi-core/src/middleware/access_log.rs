//! One log line per handled request

use super::Middleware;
use crate::{Request, Response};

/// Logs `METHOD path[?query] -> status` at info level
#[derive(Default)]
pub struct AccessLog;

impl AccessLog {
    pub fn new() -> Self {
        Self
    }

    fn line(req: &Request, res: &Response) -> String {
        match &req.query {
            Some(query) => format!("{} {}?{} -> {}", req.method_str(), req.path, query, res.status),
            None => format!("{} {} -> {}", req.method_str(), req.path, res.status),
        }
    }
}

impl Middleware for AccessLog {
    fn after(&self, req: &Request, res: &mut Response) {
        log::info!("{}", Self::line(req, res));
        if let Some(agent) = req.header("user-agent") {
            log::debug!("user-agent: {}", agent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Method, RequestBuilder};

    #[test]
    fn test_line_includes_query() {
        let req = RequestBuilder::new(Method::Get, "/api/test?from=emulator").build();
        let res = Response::not_found();
        assert_eq!(AccessLog::line(&req, &res), "GET /api/test?from=emulator -> 404 Not Found");
    }

    #[test]
    fn test_line_without_query() {
        let req = Request::new(None, "/api/login");
        let res = Response::not_implemented();
        assert_eq!(AccessLog::line(&req, &res), "- /api/login -> 501 Not Implemented");
    }
}
