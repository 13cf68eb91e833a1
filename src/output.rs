use crate::reports::CrossTable;
use crate::util::format_number;
use tabled::builder::Builder;
use tabled::settings::{object::Columns, Alignment, Modify, Style};

/// Render a cross-table with zip codes down the side and times across the top.
pub fn render_cross_table(table: &CrossTable) -> String {
    let mut builder = Builder::default();
    let mut header = vec![String::new()];
    header.extend(table.columns.iter().cloned());
    builder.push_record(header);
    for row in &table.rows {
        let mut record = vec![row.zip_code.clone()];
        record.extend(row.cells.iter().map(|cell| match cell {
            Some(v) => format_number(*v, 2),
            None => "N/A".to_string(),
        }));
        builder.push_record(record);
    }
    builder
        .build()
        .with(Style::blank())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}
