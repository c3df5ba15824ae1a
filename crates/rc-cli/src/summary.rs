use std::fmt::Write as _;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use rc_standards::VerifySummary;
use rc_validate::Issue;

use crate::types::CheckResult;

/// Plain-text report, one issue per line.
pub fn render_report(result: &CheckResult, diagnostics: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Document: {} ({} pages)",
        result.document.display(),
        result.page_count
    );
    let _ = writeln!(out, "Rules: {}", result.rules);
    let issues = &result.report.issues;
    if issues.is_empty() {
        let _ = writeln!(out, "Result: OK");
    } else {
        let _ = writeln!(out, "Result: FAILED ({} issues)", issues.len());
        for (index, issue) in issues.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", index + 1, issue.message());
        }
    }
    if diagnostics && !result.report.diagnostics.is_empty() {
        let _ = writeln!(out, "Diagnostics:");
        for diagnostic in &result.report.diagnostics {
            let _ = writeln!(out, "  [{}] {}", diagnostic.check.label(), diagnostic.message);
        }
    }
    out
}

pub fn print_report(result: &CheckResult, diagnostics: bool) {
    println!(
        "Document: {} ({} pages)",
        result.document.display(),
        result.page_count
    );
    println!("Rules: {}", result.rules);
    if result.report.is_valid() {
        println!("Result: OK");
    } else {
        let mut table = Table::new();
        table.set_header(vec![header_cell("#"), header_cell("Check"), header_cell("Message")]);
        apply_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Right);
        for (index, issue) in result.report.issues.iter().enumerate() {
            table.add_row(vec![
                Cell::new(index + 1),
                check_cell(issue),
                Cell::new(issue.message()),
            ]);
        }
        println!("{table}");
    }
    if diagnostics && !result.report.diagnostics.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Check"), header_cell("Diagnostic")]);
        apply_table_style(&mut table);
        for diagnostic in &result.report.diagnostics {
            table.add_row(vec![
                dim_cell(diagnostic.check.label()),
                Cell::new(&diagnostic.message),
            ]);
        }
        println!();
        println!("Diagnostics:");
        println!("{table}");
    }
}

pub fn print_report_json(result: &CheckResult) -> Result<()> {
    let json = serde_json::to_string_pretty(&result.report).context("serialize report")?;
    println!("{json}");
    Ok(())
}

pub fn print_verify_summary(summary: &VerifySummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rules directory"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        "Path".to_string(),
        summary.rules_dir.display().to_string(),
    ]);
    table.add_row(vec!["Pins".to_string(), summary.manifest_pins.to_string()]);
    table.add_row(vec!["Files".to_string(), summary.file_count.to_string()]);
    table.add_row(vec!["Categories".to_string(), summary.category_count.to_string()]);
    table.add_row(vec!["Variants".to_string(), summary.variant_count.to_string()]);
    table.add_row(vec!["Unified".to_string(), summary.unified_count.to_string()]);
    table.add_row(vec!["Token ratio".to_string(), summary.token_ratio.to_string()]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn check_cell(issue: &Issue) -> Cell {
    let cell = Cell::new(issue.check().label());
    if issue.is_structural() {
        cell.fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        cell.fg(Color::Yellow)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
