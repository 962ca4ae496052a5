// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use quadpad_app::{Coefficients, SOLVE_PATH, SolveOutcome, SolveRequest, SolveResponse};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    endpoint: Url,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            bail!("solver.base_url must not be empty");
        }

        let endpoint = Url::parse(&format!("{base_url}{SOLVE_PATH}"))
            .with_context(|| format!("invalid solver base_url {base_url:?}"))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            bail!(
                "solver.base_url {base_url:?} must use http or https, got {}",
                endpoint.scheme()
            );
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            endpoint,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends one solve request. The solver's own `error` field is not an
    /// `Err` here; only transport and decode failures are.
    pub fn solve(&self, coefficients: Coefficients) -> Result<SolveResponse> {
        tracing::debug!(endpoint = %self.endpoint, ?coefficients, "sending solve request");
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&SolveRequest::new(coefficients))
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        let body = response.text().context("read solve response")?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "solve response received");

        match serde_json::from_str::<SolveResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(_) if !status.is_success() => Err(clean_error_response(status, &body)),
            Err(error) => Err(error).context("decode solve response"),
        }
    }

    /// Round trip folded into the value the result area renders.
    pub fn solve_outcome(&self, coefficients: Coefficients) -> SolveOutcome {
        match self.solve(coefficients) {
            Ok(response) => response.into_outcome(),
            Err(error) => {
                tracing::warn!(error = %format!("{error:#}"), "solve request failed");
                SolveOutcome::Failed(format!("{error:#}"))
            }
        }
    }
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    anyhow!(
        "cannot reach {} -- start the solver with `quadpad --serve` ({})",
        base_url,
        error
    )
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    let trimmed = body.trim();
    if !trimmed.is_empty() && trimmed.len() < 100 && !trimmed.contains('<') {
        return anyhow!("server error ({}): {}", status.as_u16(), trimmed);
    }

    anyhow!("server returned {}", status.as_u16())
}
