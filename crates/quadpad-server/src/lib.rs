// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod protocol;
pub mod solver;

use anyhow::{Context, Result, anyhow};
use quadpad_app::SOLVE_PATH;
use tiny_http::{Header, Request, Response, Server};

pub use protocol::{create_response, error_response, parse_request};
pub use solver::{Solution, SolutionRoot, solve_quadratic};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    fn ok(body: String) -> Self {
        Self { status: 200, body }
    }

    fn error(status: u16, message: &str) -> Self {
        let body = error_response(message).unwrap_or_else(|_| format!("{{\"error\":{message:?}}}"));
        Self { status, body }
    }
}

/// Routes one request. Only `POST /calculate?quadratic` does work; every
/// failure still answers with a JSON error body.
pub fn route(method: &str, url: &str, body: &str) -> Reply {
    if method != "POST" {
        return Reply::error(405, &format!("use POST {SOLVE_PATH}"));
    }
    if url != SOLVE_PATH {
        return Reply::error(404, &format!("use POST {SOLVE_PATH}"));
    }

    let coefficients = match parse_request(body) {
        Ok(coefficients) => coefficients,
        Err(error) => {
            tracing::warn!(error = %format!("{error:#}"), "rejected solve request");
            return Reply::error(400, &format!("Invalid request: {error:#}"));
        }
    };

    let solution = solve_quadratic(coefficients);
    match create_response(&solution, None) {
        Ok(body) => Reply::ok(body),
        Err(error) => Reply::error(500, &format!("Server error: {error:#}")),
    }
}

pub struct SolverServer {
    server: Server,
}

impl SolverServer {
    pub fn bind(addr: &str) -> Result<Self> {
        let server = Server::http(addr)
            .map_err(|error| anyhow!("bind solver on {addr}: {error} -- pick another [server].listen"))?;
        Ok(Self { server })
    }

    pub fn local_addr(&self) -> String {
        self.server.server_addr().to_string()
    }

    pub fn serve_forever(&self) -> Result<()> {
        tracing::info!(addr = %self.local_addr(), "solver listening");
        for request in self.server.incoming_requests() {
            if let Err(error) = handle(request) {
                tracing::warn!(error = %format!("{error:#}"), "request handling failed");
            }
        }
        Ok(())
    }

    /// Answers exactly `count` requests, then returns.
    pub fn serve_requests(&self, count: usize) -> Result<()> {
        for _ in 0..count {
            let request = self.server.recv().context("receive request")?;
            handle(request)?;
        }
        Ok(())
    }
}

fn handle(mut request: Request) -> Result<()> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .context("read request body")?;

    let method = request.method().to_string();
    let url = request.url().to_owned();
    let reply = route(&method, &url, &body);
    tracing::info!(%method, %url, status = reply.status, "handled request");

    let response = Response::from_string(reply.body)
        .with_status_code(reply.status)
        .with_header(header("Content-Type", "application/json; charset=utf-8")?)
        .with_header(header("Access-Control-Allow-Origin", "*")?);
    request.respond(response).context("send response")
}

fn header(name: &str, value: &str) -> Result<Header> {
    Header::from_bytes(name, value).map_err(|()| anyhow!("invalid header {name}: {value}"))
}
