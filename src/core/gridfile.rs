//! CSV files holding one period's grid: `Date,Regular,Sick,Vacation,Holiday`.
//!
//! `Date` is either a full `YYYY-MM-DD` date or the on-screen label
//! (`Wed 01/03`). Labels are matched against the days of the selected period,
//! so a period running from December into January resolves every row to the
//! right year.

use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::grid::Grid;
use crate::models::period::Period;
use crate::utils::date::parse_date;
use crate::utils::fmt_hours;
use chrono::NaiveDate;
use std::io::{Read, Write};
use std::path::Path;

/// Map a `Date` cell to a day of `period`.
pub fn resolve_row_date(cell: &str, period: &Period) -> AppResult<NaiveDate> {
    let cell = cell.trim();

    if let Some(d) = parse_date(cell) {
        if period.contains(d) {
            return Ok(d);
        }
        return Err(AppError::InvalidDate(format!("{cell} is outside {period}")));
    }

    let mut parts = cell.split_whitespace().rev();
    let month_day = parts.next().unwrap_or("");
    let weekday = parts.next();

    period
        .days()
        .into_iter()
        .find(|d| {
            d.format("%m/%d").to_string() == month_day
                && weekday.is_none_or(|w| d.format("%a").to_string().eq_ignore_ascii_case(w))
        })
        .ok_or_else(|| AppError::InvalidDate(format!("'{cell}' is not a day of {period}")))
}

/// Parse a grid file. Rows that are absent stay at 0.
pub fn parse_grid_csv<R: Read>(reader: R, period: Period) -> AppResult<Grid> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    // Column layout
    let mut date_col = None;
    let mut columns: Vec<(usize, Category)> = Vec::new();
    for (i, h) in rdr.headers()?.iter().enumerate() {
        if h.eq_ignore_ascii_case("date") {
            date_col = Some(i);
        } else {
            let category =
                Category::from_code(h).ok_or_else(|| AppError::InvalidCategory(h.to_string()))?;
            columns.push((i, category));
        }
    }
    let date_col = date_col.ok_or_else(|| AppError::InvalidDate("missing 'Date' column".into()))?;

    let mut grid = Grid::empty(period);
    for result in rdr.records() {
        let record = result?;
        let date = resolve_row_date(record.get(date_col).unwrap_or(""), &period)?;

        for (i, category) in &columns {
            let raw = record.get(*i).unwrap_or("");
            let hours = if raw.is_empty() {
                0.0
            } else {
                raw.parse::<f64>().map_err(|_| AppError::InvalidHours {
                    row: date.format("%a %m/%d").to_string(),
                    category: category.to_string(),
                    value: raw.to_string(),
                })?
            };
            grid.set(date, *category, hours);
        }
    }

    Ok(grid)
}

pub fn read_grid_csv(path: &Path, period: Period) -> AppResult<Grid> {
    let file = std::fs::File::open(path)?;
    parse_grid_csv(file, period)
}

pub fn write_grid_csv<W: Write>(grid: &Grid, writer: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["Date".to_string()];
    header.extend(Category::DISPLAY.iter().map(|c| c.to_string()));
    wtr.write_record(&header)?;

    for row in &grid.rows {
        let mut cells = vec![row.label()];
        cells.extend(Category::DISPLAY.iter().map(|c| fmt_hours(row.get(*c))));
        wtr.write_record(&cells)?;
    }

    wtr.flush()?;
    Ok(())
}
