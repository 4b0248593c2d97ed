//! Middleware applied around every handler

pub mod access_log;
pub mod cors;

pub use access_log::AccessLog;
pub use cors::Cors;

use crate::{Request, Response};

/// Middleware trait - post-process the handler's response
pub trait Middleware: Send + Sync {
    fn after(&self, req: &Request, res: &mut Response);
}

/// Middleware chain
pub struct MiddlewareChain {
    middlewares: Vec<Box<dyn Middleware>>,
}

impl MiddlewareChain {
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new(),
        }
    }

    pub fn add<M: Middleware + 'static>(&mut self, middleware: M) -> &mut Self {
        self.middlewares.push(Box::new(middleware));
        self
    }

    /// Run after middlewares in reverse order
    pub fn run_after(&self, req: &Request, res: &mut Response) {
        for m in self.middlewares.iter().rev() {
            m.after(req, res);
        }
    }
}

impl Default for MiddlewareChain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Method, RequestBuilder};
    use std::sync::{Arc, Mutex};

    struct Record {
        name: &'static str,
        seen: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Middleware for Record {
        fn after(&self, _req: &Request, _res: &mut Response) {
            self.seen.lock().unwrap().push(self.name);
        }
    }

    #[test]
    fn test_after_runs_in_reverse() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut chain = MiddlewareChain::new();
        chain
            .add(Record { name: "first", seen: seen.clone() })
            .add(Record { name: "second", seen: seen.clone() });

        let req = RequestBuilder::new(Method::Get, "/").build();
        let mut res = Response::not_found();
        chain.run_after(&req, &mut res);

        assert_eq!(*seen.lock().unwrap(), vec!["second", "first"]);
    }
}
