use std::net::{IpAddr, SocketAddr};
use std::time::Instant;

use axum::{
    body::Body, extract::connect_info::ConnectInfo, http::Request, middleware::Next,
    response::Response,
};

/// Logs one line on request entry and one on exit. Mounted outermost so the
/// elapsed time covers auth short-circuits and the fault boundary.
pub async fn request_logger(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let client = client_ip(&request);
    let start = Instant::now();

    tracing::info!("request {client} {method} {path}");

    let response = next.run(request).await;

    let elapsed = start.elapsed().as_millis();
    let status = response.status().as_u16();

    tracing::info!("response {status} {elapsed}ms {client} {path} {method}");

    response
}

fn client_ip(request: &Request<Body>) -> String {
    if let Some(ip) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(parse_x_forwarded_for)
    {
        return ip.to_string();
    }

    if let Some(ip) = request
        .headers()
        .get("x-real-ip")
        .and_then(|value| value.to_str().ok())
        .and_then(parse_ip_addr)
    {
        return ip.to_string();
    }

    if let Some(connect_info) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
        return connect_info.0.ip().to_string();
    }

    "unknown".to_string()
}

fn parse_x_forwarded_for(raw: &str) -> Option<IpAddr> {
    raw.split(',').map(str::trim).find_map(parse_ip_addr)
}

fn parse_ip_addr(raw: &str) -> Option<IpAddr> {
    raw.parse::<IpAddr>()
        .ok()
        .or_else(|| raw.parse::<SocketAddr>().ok().map(|addr| addr.ip()))
}
