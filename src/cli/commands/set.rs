use crate::cli::commands::{open_session, print_user_grid};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::grid::build_grid;
use crate::core::save::SaveLogic;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_date;
use crate::utils::hours2readable;

/// Handle the `set` command: edit one day of the period and save the period.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        date,
        regular,
        holiday,
        sick,
        vacation,
    } = &cli.command
    {
        let day = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;

        let edits: Vec<(Category, f64)> = [
            (Category::Regular, *regular),
            (Category::Holiday, *holiday),
            (Category::Sick, *sick),
            (Category::Vacation, *vacation),
        ]
        .into_iter()
        .filter_map(|(c, h)| h.map(|h| (c, h)))
        .collect();

        if edits.is_empty() {
            warning("Nothing to set: pass at least one of --regular, --holiday, --sick, --vacation");
            return Ok(());
        }

        let (mut store, records, session) = open_session(cli, cfg, Some(date.as_str()))?;
        session.ensure_can_edit()?;

        // Start from what is stored so the rest of the period is kept
        let mut grid = build_grid(&records, &session.user, session.period);
        for (category, hours) in &edits {
            grid.set(day, *category, *hours);
        }

        let outcome = SaveLogic::apply(
            store.as_mut(),
            &session.user,
            &grid,
            session.now,
            &cfg.hour_rules(),
        )?;

        let summary: Vec<String> = edits
            .iter()
            .map(|(c, h)| format!("{} {}", c, hours2readable(*h)))
            .collect();
        success(format!(
            "Saved {} for {} on {} ({} records in period)",
            summary.join(", "),
            session.user,
            day.format("%m/%d/%Y"),
            outcome.written
        ));

        let reloaded = store.load_all()?;
        print_user_grid(&reloaded, &session.user, &session);
    }
    Ok(())
}
