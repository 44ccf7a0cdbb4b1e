use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

use canary_core::{CheckFilter, EngineContext, FilterSummary, LabelCatalog, Selection, is_healthy};
use canary_model::{Check, Label};
use canary_observe::{LoggerConfig, LoggerFormat, LoggerLevel, init_local_offset, init_logger};
use canary_prometheus::{Encoder, PrometheusMetrics, TextEncoder};

/// Filter a snapshot of canary checks the way the dashboard does.
#[derive(Debug, Parser)]
#[command(name = "canary-dash", version)]
struct Cli {
    /// JSON array of checks; `-` reads stdin.
    snapshot: PathBuf,

    /// Hide checks whose status history is all passing.
    #[arg(long)]
    hide_passing: bool,

    /// Show only checks carrying this label (repeatable, OR-ed).
    #[arg(long = "label", value_name = "KEY=VALUE")]
    labels: Vec<Label>,

    /// Print the view as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Print engine metrics in Prometheus text format after the view.
    #[arg(long)]
    metrics: bool,

    #[arg(long, env = "CANARY_LOG_FORMAT", default_value = "text")]
    log_format: LoggerFormat,

    #[arg(long, env = "CANARY_LOG_LEVEL", default_value = "warn")]
    log_level: LoggerLevel,
}

#[derive(Serialize)]
struct View<'a> {
    labels: &'a [Label],
    checks: &'a [&'a Check],
    hidden_passing: usize,
    hidden_by_label: usize,
}

fn main() -> anyhow::Result<()> {
    init_local_offset();
    let cli = Cli::parse();

    // 1) logger
    let cfg = LoggerConfig {
        format: cli.log_format,
        level: cli.log_level.clone(),
        ..Default::default()
    };
    init_logger(&cfg)?;

    // 2) snapshot
    let raw = read_snapshot(&cli.snapshot)?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", cli.snapshot.display()))?;

    // 3) engine
    let metrics = PrometheusMetrics::new()?;
    let ctx = EngineContext::default().with_metrics(Arc::new(metrics.clone()));

    let catalog = LabelCatalog::new().with_context(ctx.clone());
    let checks = catalog.decode_json(&value).unwrap_or_else(|| {
        warn!("snapshot is not a check list; showing an empty view");
        Vec::new()
    });
    let labels = catalog.extract(&checks);

    let selection: Selection = cli.labels.iter().cloned().collect();
    let summary = CheckFilter::new()
        .with_context(ctx)
        .apply(&checks, cli.hide_passing, selection.as_slice());
    info!(
        checks = checks.len(),
        visible = summary.visible(),
        labels = labels.len(),
        "view ready"
    );

    // 4) output
    if cli.json {
        let view = View {
            labels: &labels,
            checks: &summary.checks,
            hidden_passing: summary.hidden_passing,
            hidden_by_label: summary.hidden_by_label,
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_text(&labels, &selection, &summary);
    }

    if cli.metrics {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&metrics.gather(), &mut buffer)?;
        print!("{}", String::from_utf8(buffer)?);
    }
    Ok(())
}

fn read_snapshot(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw).context("read stdin")?;
        return Ok(raw);
    }
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

fn print_text(labels: &[Label], selection: &Selection, summary: &FilterSummary<'_>) {
    println!("labels:");
    for label in labels {
        let mark = if selection.contains(label) { 'x' } else { ' ' };
        println!("  [{mark}] {}", label.display_text());
    }

    println!(
        "checks ({} shown, {} passing hidden, {} filtered by label):",
        summary.visible(),
        summary.hidden_passing,
        summary.hidden_by_label
    );
    for check in &summary.checks {
        let health = match (&check.check_statuses, is_healthy(check)) {
            (None, _) => "unknown",
            (Some(_), true) => "healthy",
            (Some(_), false) => "failing",
        };
        let badges: Vec<String> = check
            .labels
            .as_ref()
            .map(|l| l.badges().collect())
            .unwrap_or_default();
        println!("  {:<8} {}  {}", health, check.description, badges.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parses_repeated_labels() {
        let cli = Cli::try_parse_from([
            "canary-dash",
            "checks.json",
            "--hide-passing",
            "--label",
            "env=prod",
            "--label",
            "debug=true",
        ])
        .unwrap();

        assert!(cli.hide_passing);
        assert_eq!(
            cli.labels,
            vec![Label::canary("env", "prod"), Label::canary("debug", "true")]
        );
    }

    #[test]
    fn rejects_malformed_label() {
        assert!(Cli::try_parse_from(["canary-dash", "checks.json", "--label", "env"]).is_err());
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(
            Cli::try_parse_from(["canary-dash", "-", "--log-format", "xml"]).is_err()
        );
    }
}
