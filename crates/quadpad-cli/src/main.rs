// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use anyhow::{Context, Result, anyhow, bail};
use config::Config;
use logging::LogTarget;
use quadpad_app::{Coefficients, SolveOutcome, render_outcome};
use quadpad_client::Client;
use quadpad_server::SolverServer;
use quadpad_tui::UiState;
use runtime::ClientRuntime;
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `quadpad --print-example-config` to generate a v1 template",
            options.config_path.display()
        )
    })?;

    let client = if options.needs_solver_client() {
        Some(build_client(&config, &options.config_path)?)
    } else {
        None
    };
    if options.check_only {
        return Ok(());
    }

    match (options.mode, client) {
        (Mode::Serve, _) => {
            logging::init(&config, LogTarget::Stderr)?;
            let server = SolverServer::bind(config.listen_addr())?;
            server.serve_forever()
        }
        (Mode::Solve(fields), Some(client)) => {
            logging::init(&config, LogTarget::Stderr)?;
            let [a, b, c] = &fields;
            let coefficients = Coefficients::parse_fields(a, b, c);
            tracing::info!(?coefficients, endpoint = %client.endpoint(), "one-shot solve");

            let outcome = client.solve_outcome(coefficients);
            if let SolveOutcome::Failed(message) = &outcome {
                bail!("{message}");
            }
            for line in render_outcome(&outcome, config.locale()) {
                println!("{line}");
            }
            Ok(())
        }
        (Mode::Tui, Some(client)) => {
            logging::init(&config, LogTarget::FileOnly)?;
            let mut state = UiState::new(config.locale());
            let mut runtime = ClientRuntime::new(client);
            quadpad_tui::run_app(&mut state, &mut runtime)
        }
        (Mode::Solve(_) | Mode::Tui, None) => bail!("solver client was not built"),
    }
}

fn build_client(config: &Config, config_path: &Path) -> Result<Client> {
    Client::new(config.solver_base_url(), config.solver_timeout()?).with_context(|| {
        format!(
            "invalid [solver] config in {}; fix base_url/timeout values",
            config_path.display()
        )
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Tui,
    Serve,
    Solve([String; 3]),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
    mode: Mode,
}

impl CliOptions {
    /// `--serve` answers requests itself and never talks to a solver.
    fn needs_solver_client(&self) -> bool {
        self.check_only || self.mode != Mode::Serve
    }
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_example: false,
        check_only: false,
        show_help: false,
        mode: Mode::Tui,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--serve" => {
                set_mode(&mut options, Mode::Serve)?;
            }
            "--solve" => {
                let mut coefficient = || {
                    iter.next()
                        .map(|value| value.as_ref().to_owned())
                        .ok_or_else(|| {
                            anyhow!("--solve requires three coefficients: --solve <a> <b> <c>")
                        })
                };
                let fields = [coefficient()?, coefficient()?, coefficient()?];
                set_mode(&mut options, Mode::Solve(fields))?;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn set_mode(options: &mut CliOptions, mode: Mode) -> Result<()> {
    if options.mode != Mode::Tui {
        bail!("--serve and --solve cannot be combined; pick one");
    }
    options.mode = mode;
    Ok(())
}

fn print_help() {
    println!("quadpad");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a v1 config template");
    println!("  --check                  Validate config and solver client settings");
    println!("  --serve                  Run the solver service on [server].listen");
    println!("  --solve <a> <b> <c>      Solve once against [solver].base_url and print the result");
    println!("  --help                   Show this help");
    println!();
    println!("Without a mode flag the keypad TUI starts.");
}
