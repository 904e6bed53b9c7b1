use std::path::PathBuf;

use anyhow::Context;

use restock_report::{load_snapshot, planning_config_from_env, render, ReportKind};

fn main() -> anyhow::Result<()> {
    restock_observability::init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .map(PathBuf::from)
        .context("usage: restock-report <snapshot.json> [overview|alerts|budget|autofill|lists]")?;
    let kind = match args.next() {
        Some(raw) => raw.parse::<ReportKind>()?,
        None => ReportKind::default(),
    };

    let config = planning_config_from_env();
    tracing::info!(
        ?kind,
        weeks_threshold = config.weeks_threshold,
        target_weeks = config.target_weeks,
        "starting report"
    );

    let snapshot = load_snapshot(&path)?;
    let report = render(kind, &snapshot, &config)?;

    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("failed to format report")?
    );
    Ok(())
}
