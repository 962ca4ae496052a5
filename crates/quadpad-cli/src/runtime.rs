// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use quadpad_app::{Coefficients, SolveEvent, SolveOutcome};
use quadpad_client::Client;
use quadpad_tui::InternalEvent;
use std::sync::mpsc::Sender;
use std::thread;

pub struct ClientRuntime {
    client: Client,
}

impl ClientRuntime {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl quadpad_tui::SolveRuntime for ClientRuntime {
    fn solve(&mut self, coefficients: Coefficients) -> SolveOutcome {
        self.client.solve_outcome(coefficients)
    }

    fn spawn_solve(
        &mut self,
        request_id: u64,
        coefficients: Coefficients,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let client = self.client.clone();
        thread::Builder::new()
            .name(format!("solve-{request_id}"))
            .spawn(move || {
                let outcome = client.solve_outcome(coefficients);
                // The UI may have quit while the request was in flight.
                let _ = tx.send(InternalEvent::Solve(SolveEvent::Finished {
                    request_id,
                    outcome,
                }));
            })
            .context("spawn solve worker")?;
        Ok(())
    }
}
