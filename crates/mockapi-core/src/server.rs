//! Sequential HTTP server
//!
//! hyper on a current-thread tokio runtime with:
//! - One connection served at a time, to completion, before the next accept
//! - Keep-alive off, so each connection carries a single request
//! - SO_REUSEADDR so the mock can be restarted right away
//! - TCP_NODELAY on accepted streams

use crate::handlers;
use crate::{Endpoint, Method, Request, Response, Result, Router, ServerConfig};
use crate::{AccessLog, Cors, MiddlewareChain};
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::header::{HeaderName, HeaderValue};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};

/// Routing table plus middleware. Turns one request into one response.
pub struct App {
    router: Router<Endpoint>,
    middleware: MiddlewareChain,
}

impl App {
    /// The mock API: both endpoints, permissive CORS, access log
    pub fn new() -> Self {
        let mut middleware = MiddlewareChain::new();
        middleware.add(AccessLog::new()).add(Cors::permissive());
        Self {
            router: Router::mock_api(),
            middleware,
        }
    }

    /// Dispatch a request.
    ///
    /// - Methods other than GET and POST get a bare 501
    /// - Unknown paths under GET or POST get a bare 404
    pub fn handle(&self, req: Request) -> Response {
        let mut res = match req.method {
            None => Response::not_implemented(),
            Some(method) => match self.router.match_route(method, &req.path) {
                Some(Endpoint::Reachability) => handlers::reachability(&req),
                Some(Endpoint::Login) => handlers::login(&req),
                None => Response::not_found(),
            },
        };

        self.middleware.run_after(&req, &mut res);
        res
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Bound mock API server
pub struct Server {
    listener: TcpListener,
    app: Arc<App>,
}

impl Server {
    /// Bind the listening socket. Must be called inside a tokio runtime.
    pub async fn bind(config: &ServerConfig) -> Result<Self> {
        let addr = config.addr()?;
        let listener = TcpListener::from_std(create_listener(&addr)?)?;
        log::debug!("bound {}", addr);
        Ok(Self {
            listener,
            app: Arc::new(App::new()),
        })
    }

    /// Address actually bound (resolves port 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept and serve connections one after another until `shutdown`
    /// resolves. An in-flight connection is abandoned on shutdown.
    pub async fn run_until<F: Future>(self, shutdown: F) -> Result<()> {
        let addr = self.local_addr()?;
        log::info!("listening on http://{}", addr);

        let mut shutdown = std::pin::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                accepted = self.listener.accept() => {
                    let (stream, peer) = match accepted {
                        Ok(conn) => conn,
                        Err(e) => {
                            log::error!("accept failed: {}", e);
                            continue;
                        }
                    };

                    tokio::select! {
                        _ = &mut shutdown => break,
                        served = self.serve_connection(stream) => {
                            if let Err(e) = served {
                                log::warn!("connection from {} failed: {}", peer, e);
                            }
                        }
                    }
                }
            }
        }

        log::info!("stopped listening on {}", addr);
        Ok(())
    }

    async fn serve_connection(&self, stream: TcpStream) -> Result<()> {
        if let Err(e) = stream.set_nodelay(true) {
            log::debug!("TCP_NODELAY not set: {}", e);
        }

        let app = self.app.clone();
        let service = service_fn(move |req: hyper::Request<Incoming>| {
            let app = app.clone();
            async move {
                let request = from_hyper_request(req).await;
                Ok::<_, Infallible>(to_hyper_response(app.handle(request)))
            }
        });

        http1::Builder::new()
            .keep_alive(false)
            .serve_connection(TokioIo::new(stream), service)
            .await?;
        Ok(())
    }
}

/// Create a non-blocking listening socket with SO_REUSEADDR set
pub fn create_listener(addr: &SocketAddr) -> std::io::Result<std::net::TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // SO_REUSEADDR - allow binding to address in TIME_WAIT
    socket.set_reuse_address(true)?;

    socket.bind(&(*addr).into())?;
    socket.listen(128)?;

    // tokio requires the std listener to be non-blocking
    socket.set_nonblocking(true)?;

    Ok(socket.into())
}

/// Convert hyper request to our Request type, buffering the whole body.
///
/// A body that fails to arrive is treated as empty.
pub async fn from_hyper_request(req: hyper::Request<Incoming>) -> Request {
    let (parts, body) = req.into_parts();

    let method = parts.method.as_str().parse::<Method>().ok();
    let mut request = Request::new(method, parts.uri.path());
    request.query = parts.uri.query().map(|q| q.to_string());

    for (name, value) in &parts.headers {
        if let Ok(v) = value.to_str() {
            request.headers.push((name.to_string(), v.to_string()));
        }
    }

    request.body = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            log::warn!("failed to read request body: {}", e);
            Bytes::new()
        }
    };

    request
}

/// Convert our Response to hyper Response
pub fn to_hyper_response(res: Response) -> hyper::Response<Full<Bytes>> {
    let mut response = hyper::Response::new(Full::new(res.body));
    *response.status_mut() = hyper::StatusCode::from_u16(res.status.as_u16())
        .unwrap_or(hyper::StatusCode::INTERNAL_SERVER_ERROR);

    for (name, value) in &res.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                response.headers_mut().append(name, value);
            }
            _ => log::warn!("dropping invalid response header {:?}", name),
        }
    }

    response
}
