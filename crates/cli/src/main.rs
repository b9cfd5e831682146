// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod render;
mod script;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::eyre::{Result, WrapErr};
use po_form::{
    FormStore, LogSink, PurchaseOrderSnapshot, SubmissionSink, SubmitOutcome, Transition,
};
use po_form_domain::StaticCatalog;
use render::FormView;
use script::Step;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Catalog used when `--catalog` is not given.
const DEMO_CATALOG: &str = include_str!("../data/catalog.json");

/// Purchase Order form - replays a script of user actions against the form
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON array of form actions.
    script: PathBuf,

    /// Path to a JSON reference catalog. If not provided, uses the bundled demo catalog.
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Print submitted purchase orders to stdout as JSON instead of rendering the form.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

/// Prints each submission to stdout as one JSON line.
#[derive(Debug, Clone, Copy, Default)]
struct JsonStdoutSink;

impl SubmissionSink for JsonStdoutSink {
    fn submit(&mut self, snapshot: &PurchaseOrderSnapshot) {
        match serde_json::to_string(snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => error!(po_number = %snapshot.po_number, "Failed to encode submission: {e}"),
        }
    }
}

fn load_catalog(path: Option<&Path>) -> Result<StaticCatalog> {
    let Some(path) = path else {
        info!("Using bundled demo catalog");
        return serde_json::from_str(DEMO_CATALOG).wrap_err("Bundled catalog is malformed");
    };

    info!("Loading catalog from: {}", path.display());
    let text: String = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read catalog {}", path.display()))?;
    serde_json::from_str(&text).wrap_err_with(|| format!("Malformed catalog {}", path.display()))
}

fn load_script(path: &Path) -> Result<Vec<Step>> {
    let text: String = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read script {}", path.display()))?;
    serde_json::from_str(&text).wrap_err_with(|| format!("Malformed script {}", path.display()))
}

/// Runs one step. Catalog rejections are logged and the replay continues.
fn run_step(
    store: &mut FormStore<StaticCatalog>,
    step: &Step,
    sink: &mut dyn SubmissionSink,
) -> Result<()> {
    match step {
        Step::Submit => match store.submit(sink) {
            SubmitOutcome::Accepted => info!("Purchase order saved"),
            SubmitOutcome::Rejected(errors) => {
                for (path, error) in errors.iter() {
                    info!(field = %path, "{error}");
                }
                info!(error_count = errors.len(), "Submit rejected");
            }
            SubmitOutcome::AlreadyLocked => warn!("Form is already saved"),
        },
        Step::Reset => store.reset(),
        Step::AddRosterTalent { job } => {
            let job_id = script::job_at(store.state(), *job)?;
            match store.add_first_roster_talent(job_id) {
                Ok(Some(_)) => {}
                Ok(None) => warn!(%job_id, "No selectable roster talent"),
                Err(e) => warn!(%job_id, "{e}"),
            }
        }
        step => {
            if let Some(command) = step.to_command(store.state())? {
                match store.apply(command) {
                    Ok(Transition::Ignored(reason)) => info!("Ignored: {reason}"),
                    Ok(_) => {}
                    Err(e) => warn!("{e}"),
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(args.verbosity.tracing_level_filter().to_string())
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    let catalog: StaticCatalog = load_catalog(args.catalog.as_deref())?;
    let steps: Vec<Step> = load_script(&args.script)?;
    info!(steps = steps.len(), "Replaying script");

    let mut store: FormStore<StaticCatalog> = FormStore::new(catalog);
    let mut json_sink: JsonStdoutSink = JsonStdoutSink;
    let mut log_sink: LogSink = LogSink;
    let sink: &mut dyn SubmissionSink = if args.json {
        &mut json_sink
    } else {
        &mut log_sink
    };

    for (index, step) in steps.iter().enumerate() {
        run_step(&mut store, step, sink).wrap_err_with(|| format!("Step {}", index + 1))?;
    }

    if !args.json {
        print!("{}", FormView::new(&store));
    }
    Ok(())
}
