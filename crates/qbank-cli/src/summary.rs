use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use qbank_ingest::{ImportOutcome, SYNONYMS};
use qbank_model::{CanonicalField, QuestionRecord};

use qbank_cli::upload::UploadResponse;

pub fn print_response(response: &UploadResponse) {
    match serde_json::to_string_pretty(&response.body) {
        Ok(json) => println!("{json}"),
        Err(_) => println!("{}", response.body),
    }
    if !response.is_success() {
        eprintln!("status: {}", response.status);
    }
}

pub fn print_inspection(outcome: &ImportOutcome, preview_rows: usize) {
    println!("Format: {}", outcome.format);
    println!(
        "Rows: {} ({} normalized, {} failed)",
        outcome.total_rows(),
        outcome.records.len(),
        outcome.errors.len()
    );

    let mut bindings = Table::new();
    bindings.set_header(vec![header_cell("Field"), header_cell("Header")]);
    apply_table_style(&mut bindings);
    for field in CanonicalField::ALL {
        let header = match outcome.resolution.binding(field) {
            Some(header) => Cell::new(header).fg(Color::Green),
            None => dim_cell("-"),
        };
        bindings.add_row(vec![field_cell(field), header]);
    }
    println!("{bindings}");

    if outcome.records.is_empty() {
        return;
    }
    let mut preview = Table::new();
    preview.set_header(vec![
        header_cell("#"),
        header_cell("Text"),
        header_cell("Options"),
        header_cell("Answer"),
        header_cell("Subject"),
        header_cell("Exam"),
        header_cell("Difficulty"),
        header_cell("Marks"),
        header_cell("Time"),
    ]);
    apply_preview_style(&mut preview);
    align_column(&mut preview, 0, CellAlignment::Right);
    align_column(&mut preview, 7, CellAlignment::Right);
    align_column(&mut preview, 8, CellAlignment::Right);
    for (index, record) in outcome.records.iter().take(preview_rows).enumerate() {
        preview.add_row(record_row(index + 1, record));
    }
    println!();
    println!("Preview:");
    println!("{preview}");

    if !outcome.errors.is_empty() {
        eprintln!("Row errors:");
        for failure in &outcome.errors {
            eprintln!("- {}", failure.error);
        }
    }
}

pub fn print_fields() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Wire name"),
        header_cell("Matches headers containing"),
    ]);
    apply_table_style(&mut table);
    for (field, variants) in SYNONYMS {
        table.add_row(vec![
            field_cell(*field),
            Cell::new(field.as_str()),
            Cell::new(variants.join(", ")),
        ]);
    }
    println!("{table}");
}

fn record_row(number: usize, record: &QuestionRecord) -> Vec<Cell> {
    vec![
        dim_cell(number),
        Cell::new(&record.text),
        Cell::new(record.options.join(" | ")),
        Cell::new(&record.answer).fg(Color::Green),
        Cell::new(&record.subject),
        Cell::new(&record.exam),
        Cell::new(&record.difficulty),
        Cell::new(record.marks),
        Cell::new(format!("{}s", record.time_limit)),
    ]
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_preview_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
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

fn field_cell(field: CanonicalField) -> Cell {
    Cell::new(field)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
