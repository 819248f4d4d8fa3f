pub mod config;
pub mod export;
pub mod import;
pub mod init;
pub mod pay;
pub mod periods;
pub mod set;
pub mod show;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::context::Session;
use crate::core::grid::build_grid;
use crate::core::totals::{Totals, last_updated_for};
use crate::errors::AppResult;
use crate::models::record::TimeRecord;
use crate::store::{self, RecordStore};
use crate::ui::messages::{header, note};
use crate::ui::render::{render_grid, render_totals};
use crate::utils::date::format_pretty;
use crate::utils::hours2readable;

/// Open the store, load every record and resolve the session.
pub(crate) fn open_session(
    cli: &Cli,
    cfg: &Config,
    period: Option<&str>,
) -> AppResult<(Box<dyn RecordStore>, Vec<TimeRecord>, Session)> {
    let mut store = store::open(cfg)?;
    let records = store.load_all()?;
    let session = Session::new(
        cfg,
        cli.user.as_deref(),
        period,
        store::earliest_date(&records),
    )?;
    Ok((store, records, session))
}

/// Full 14-row grid, totals and last-updated line for one user.
pub(crate) fn print_user_grid(records: &[TimeRecord], user: &str, session: &Session) {
    let grid = build_grid(records, user, session.period);

    header(format!("Hours for {} ({})", user, session.period));
    print!("{}", render_grid(&grid));

    print_totals(&Totals::from_grid(&grid), session);
    print_last_updated(records, user);
}

pub(crate) fn print_totals(totals: &Totals, session: &Session) {
    println!(
        "\nBi-weekly Totals for the week of {} - {}",
        session.period.start_str(),
        session.period.end_str()
    );
    print!("{}", render_totals(totals));
    println!("Total hours: {}", hours2readable(totals.total()));
}

pub(crate) fn print_last_updated(records: &[TimeRecord], user: &str) {
    match last_updated_for(records, user) {
        Some(ts) => note(format!("Last updated: {}", format_pretty(&ts))),
        None => note("No previous updates"),
    }
}
