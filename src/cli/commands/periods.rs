use crate::cli::commands::open_session;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{header, note};
use crate::ui::render::render_periods;

/// Handle the `periods` command: list selectable period starts.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (_store, records, session) = open_session(cli, cfg, None)?;

    let calc = cfg.period_calculator();
    let starts = calc.list_period_starts(session.today, store::earliest_date(&records));
    let current = calc.current_period_start(&starts, session.today);

    header(format!("Pay periods (starting on {})", calc.anchor_weekday()));
    print!("{}", render_periods(&starts, current));
    note(format!("{} periods, ▶ marks the current one", starts.len()));

    Ok(())
}
