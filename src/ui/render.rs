//! Text rendering of grids and totals.

use crate::core::totals::Totals;
use crate::models::category::Category;
use crate::models::grid::{Grid, GridRow};
use crate::models::period::Period;
use crate::utils::fmt_hours;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

const DATE_WIDTH: usize = 10;
const HOURS_WIDTH: usize = 9;

fn grid_table() -> Table {
    let mut columns = vec![Column::left("Date", DATE_WIDTH)];
    columns.extend(
        Category::DISPLAY
            .iter()
            .map(|c| Column::right(c.to_db_str(), HOURS_WIDTH)),
    );
    columns.push(Column::right("Total", HOURS_WIDTH));
    Table::new(columns)
}

fn row_cells(row: &GridRow) -> Vec<String> {
    let mut cells = vec![row.label()];
    cells.extend(Category::DISPLAY.iter().map(|c| fmt_hours(row.get(*c))));
    cells.push(fmt_hours(row.total()));
    cells
}

/// All 14 rows.
pub fn render_grid(grid: &Grid) -> String {
    render_rows(grid.rows.iter())
}

/// Only days with hours (reviewer view).
pub fn render_non_zero(grid: &Grid) -> String {
    render_rows(grid.non_zero_rows().into_iter())
}

fn render_rows<'a>(rows: impl Iterator<Item = &'a GridRow>) -> String {
    let mut table = grid_table();
    for row in rows {
        table.add_row(row_cells(row));
    }
    table.render()
}

pub fn render_totals(totals: &Totals) -> String {
    let mut table = grid_table();
    let mut cells = vec!["Totals".to_string()];
    cells.extend(Category::DISPLAY.iter().map(|c| fmt_hours(totals.get(*c))));
    cells.push(fmt_hours(totals.total()));
    table.add_row(cells);
    table.render()
}

/// Period list with the current one marked.
pub fn render_periods(starts: &[NaiveDate], current: NaiveDate) -> String {
    let mut table = Table::new(vec![
        Column::left("", 2),
        Column::left("Week of", 12),
        Column::left("Through", 12),
    ]);
    for s in starts {
        let period = Period::new(*s);
        let marker = if *s == current { "▶" } else { "" };
        table.add_row(vec![
            marker.to_string(),
            period.start_str(),
            period.end_str(),
        ]);
    }
    table.render()
}
