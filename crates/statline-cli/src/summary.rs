use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::DataFrame;

use statline_cli::types::RunResult;
use statline_common::cell_text;
use statline_model::schema::column;
use statline_model::{COMBINED_SEASON, Tournaments};

pub fn print_summary(result: &RunResult) {
    println!("{}", tournaments_line(&result.tournaments));
    println!("{}", build_table(&result.table));
    match &result.written {
        Some(path) => println!("Saved: {}", path.display()),
        None => println!(
            "Dry run: {} rows from {} not written",
            result.table.height(),
            result.input.display()
        ),
    }
}

fn tournaments_line(tournaments: &Tournaments) -> String {
    format!("List of all tournaments: {tournaments}")
}

fn build_table(df: &DataFrame) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(
        df.get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str())),
    );

    let columns = df.get_columns();
    let season_idx = columns
        .iter()
        .position(|c| c.name().as_str() == column::SEASON);
    for row_idx in 0..df.height() {
        let values: Vec<String> = columns
            .iter()
            .map(|c| c.get(row_idx).map(cell_text).unwrap_or_default())
            .collect();
        let combined = season_idx.is_some_and(|idx| values[idx] == COMBINED_SEASON);
        table.add_row(values.into_iter().map(|value| {
            let cell = Cell::new(value);
            if combined {
                cell.add_attribute(Attribute::Bold)
            } else {
                cell
            }
        }));
    }

    for idx in 2..df.width() {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, idx: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(idx) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
