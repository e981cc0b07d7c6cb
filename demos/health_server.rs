//! demos/health_server.rs
//! Run: cargo run --example health_server -- <port> [mode]
//!
//! Modes: healthy (default), unhealthy, error, garbage, hang.
//! Then: DEPLOYED_HEALTH_URL=http://127.0.0.1:<port>/health cargo run

use hyper::{
    service::{make_service_fn, service_fn},
    Body, Request, Response, Server, StatusCode,
};
use std::{
    convert::Infallible,
    net::SocketAddr,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

#[derive(Debug, Clone, Copy)]
enum Mode {
    Healthy,
    Unhealthy,
    Error,
    Garbage,
    Hang,
}

impl std::str::FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "healthy" => Ok(Mode::Healthy),
            "unhealthy" => Ok(Mode::Unhealthy),
            "error" => Ok(Mode::Error),
            "garbage" => Ok(Mode::Garbage),
            "hang" => Ok(Mode::Hang),
            other => anyhow::bail!("unknown mode '{other}'"),
        }
    }
}

#[derive(Clone)]
struct ServerState {
    mode: Mode,
    req_counter: Arc<AtomicU64>,
}

fn json(status: StatusCode, body: &'static str) -> Response<Body> {
    let mut resp = Response::new(Body::from(body));
    *resp.status_mut() = status;
    resp.headers_mut().insert(
        hyper::header::CONTENT_TYPE,
        hyper::header::HeaderValue::from_static("application/json"),
    );
    resp
}

// ——————————————————————————————————————————
// Request handler
async fn handle(req: Request<Body>, state: ServerState) -> Result<Response<Body>, Infallible> {
    let n = state.req_counter.fetch_add(1, Ordering::SeqCst) + 1;
    println!("#{n} {} {} [{:?}]", req.method(), req.uri().path(), state.mode);

    if req.uri().path() != "/health" {
        return Ok(json(StatusCode::NOT_FOUND, r#"{"error":"Not Found"}"#));
    }

    let resp = match state.mode {
        Mode::Healthy => json(StatusCode::OK, r#"{"ok":true,"message":"API is running"}"#),
        Mode::Unhealthy => json(StatusCode::OK, r#"{"ok":false,"message":"Database unreachable"}"#),
        Mode::Error => json(StatusCode::SERVICE_UNAVAILABLE, r#"{"ok":true}"#),
        Mode::Garbage => {
            let mut resp = Response::new(Body::from("<html>maintenance</html>"));
            resp.headers_mut().insert(
                hyper::header::CONTENT_TYPE,
                hyper::header::HeaderValue::from_static("text/html"),
            );
            resp
        }
        Mode::Hang => std::future::pending::<Response<Body>>().await,
    };

    Ok(resp)
}

// ——————————————————————————————————————————
// Main
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let port: u16 = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "8001".into())
        .parse()?;
    let mode: Mode = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "healthy".into())
        .parse()?;

    let state = ServerState {
        mode,
        req_counter: Arc::new(AtomicU64::new(0)),
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let make_svc = make_service_fn(move |_conn| {
        let st = state.clone();
        async move { Ok::<_, Infallible>(service_fn(move |req| handle(req, st.clone()))) }
    });

    println!("Health endpoint on http://{addr}/health  [mode={mode:?}]");

    Server::bind(&addr).serve(make_svc).await?;
    Ok(())
}
