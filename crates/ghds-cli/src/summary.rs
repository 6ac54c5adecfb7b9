use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use ghds_cli::types::CheckResult;
use ghds_validate::CheckOutcome;

/// Failing row indices shown per check before eliding the rest.
const MAX_LISTED_ROWS: usize = 8;

pub fn print_summary(result: &CheckResult) {
    println!("Dataset: {}", result.dataset.display());
    println!("Records: {}", result.records);
    if let Some(path) = &result.report {
        println!("Report: {}", path.display());
    }
    if result.outcomes.is_empty() {
        println!("No checks were run.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Check"),
        header_cell("Column"),
        header_cell("Result"),
        header_cell("Failed"),
        header_cell("Rows"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);

    let mut total_failed = 0usize;
    for outcome in &result.outcomes {
        if !outcome.passed {
            total_failed += 1;
        }
        table.add_row(vec![
            Cell::new(outcome.kind),
            column_cell(&outcome.column),
            result_cell(outcome.passed),
            count_cell(outcome.failed_count()),
            rows_cell(outcome),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell(format!("{} checks", result.outcomes.len())),
        result_cell(result.passed()),
        count_cell(total_failed).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Fixed(18)),
        ColumnConstraint::UpperBoundary(Width::Fixed(18)),
        ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ColumnConstraint::UpperBoundary(Width::Percentage(50)),
    ]);
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

fn column_cell(column: &str) -> Cell {
    Cell::new(column)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn result_cell(passed: bool) -> Cell {
    if passed {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn rows_cell(outcome: &CheckOutcome) -> Cell {
    if outcome.failed_rows.is_empty() {
        return dim_cell("-");
    }
    dim_cell(format_rows(&outcome.failed_rows))
}

/// Zero-based row indices, elided past [`MAX_LISTED_ROWS`].
fn format_rows(rows: &[usize]) -> String {
    let mut listed = rows
        .iter()
        .take(MAX_LISTED_ROWS)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if rows.len() > MAX_LISTED_ROWS {
        listed.push_str(&format!(" (+{} more)", rows.len() - MAX_LISTED_ROWS));
    }
    listed
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
