use anyhow::{Context, Result};
use tracing::info;

use datepick_core::scan_available_range;
use datepick_model::DateValue;

use crate::cli::{ReplayArgs, ReportFormatArg, ScanArgs};
use datepick_cli::replay::{ReplayReport, replay};
use datepick_cli::script::load_script;
use datepick_cli::summary::{ReportFormat, print_report, render_scan};

pub fn run_replay(args: &ReplayArgs) -> Result<ReplayReport> {
    let script = load_script(&args.script)?;
    info!(script = %args.script.display(), events = script.events.len(), "replaying session");
    let report = replay(&script);
    print_report(&report, report_format(args.format)).context("render report")?;
    Ok(report)
}

pub fn run_scan(args: &ScanArgs) -> Result<()> {
    let unavailable = args.unavailable.clone();
    let is_unavailable = move |date: &DateValue| unavailable.iter().any(|d| d.is_same_day(date));
    let predicate = (!args.unavailable.is_empty())
        .then_some(&is_unavailable as &dyn Fn(&DateValue) -> bool);
    let available =
        scan_available_range(Some(&args.anchor), &args.window, predicate, args.non_contiguous);
    println!("{}", render_scan(&args.anchor, &args.window, available.as_ref()));
    Ok(())
}

fn report_format(format: ReportFormatArg) -> ReportFormat {
    match format {
        ReportFormatArg::Table => ReportFormat::Table,
        ReportFormatArg::Json => ReportFormat::Json,
        ReportFormatArg::Plain => ReportFormat::Plain,
    }
}
