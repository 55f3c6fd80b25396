use std::fmt::{Display, Write as _};

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use datepick_model::{AvailableRange, DateRange, DateValue, ValidationState};

use crate::replay::{ReplayReport, Step};

/// How a replay report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
    Plain,
}

pub fn print_report(report: &ReplayReport, format: ReportFormat) -> serde_json::Result<()> {
    match format {
        ReportFormat::Table => println!("{}", render_table(report)),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        ReportFormat::Plain => print!("{}", render_plain(report)),
    }
    Ok(())
}

/// One line per step, without styling.
pub fn render_plain(report: &ReplayReport) -> String {
    let mut out = String::new();
    for step in &report.steps {
        let _ = writeln!(
            out,
            "#{} {}: anchor={} focus={} window={} available={} highlight={} value={} validation={}",
            step.index,
            step.event,
            or_dash(step.anchor.as_ref()),
            step.focused,
            step.window,
            or_dash(step.available.as_ref()),
            or_dash(step.highlighted.as_ref()),
            or_dash(step.value.as_ref()),
            or_dash(step.validation.as_ref()),
        );
    }
    let _ = writeln!(
        out,
        "value={} validation={} changes={}",
        or_dash(report.value.as_ref()),
        or_dash(report.validation.as_ref()),
        report.changes
    );
    out
}

pub fn render_table(report: &ReplayReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Event"),
        header_cell("Anchor"),
        header_cell("Focus"),
        header_cell("Window"),
        header_cell("Available"),
        header_cell("Highlight"),
        header_cell("Value"),
        header_cell("Validation"),
    ]);
    apply_report_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 8, CellAlignment::Center);
    for step in &report.steps {
        table.add_row(step_row(step));
    }
    table.add_row(vec![
        dim_cell("-"),
        Cell::new("FINAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        value_cell(report.value.as_ref()).add_attribute(Attribute::Bold),
        validation_cell(report.validation),
    ]);
    table
}

fn step_row(step: &Step) -> Vec<Cell> {
    vec![
        Cell::new(step.index),
        Cell::new(&step.event).fg(Color::Blue),
        optional_cell(step.anchor.as_ref()),
        Cell::new(step.focused),
        Cell::new(step.window),
        available_cell(step.available.as_ref()),
        optional_cell(step.highlighted.as_ref()),
        value_cell(step.value.as_ref()),
        validation_cell(step.validation),
    ]
}

pub fn render_scan(anchor: &DateValue, window: &DateRange, available: Option<&AvailableRange>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Anchor"),
        header_cell("Window"),
        header_cell("Start"),
        header_cell("End"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    let (start, end) = match available {
        Some(range) => (optional_cell(range.start.as_ref()), optional_cell(range.end.as_ref())),
        None => (dim_cell("unconstrained"), dim_cell("unconstrained")),
    };
    table.add_row(vec![Cell::new(anchor), Cell::new(window), start, end]);
    table
}

fn apply_report_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(180);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn optional_cell<T: Display>(value: Option<&T>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn available_cell(range: Option<&AvailableRange>) -> Cell {
    match range {
        Some(range) if *range != AvailableRange::default() => Cell::new(range).fg(Color::Yellow),
        Some(range) => Cell::new(range),
        None => dim_cell("-"),
    }
}

fn value_cell(value: Option<&DateRange>) -> Cell {
    match value {
        Some(value) => Cell::new(value).fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn validation_cell(state: Option<ValidationState>) -> Cell {
    match state {
        Some(ValidationState::Invalid) => Cell::new("INVALID")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Some(ValidationState::Valid) => Cell::new("valid").fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn or_dash<T: Display>(value: Option<&T>) -> String {
    value.map_or_else(|| "-".to_string(), ToString::to_string)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
