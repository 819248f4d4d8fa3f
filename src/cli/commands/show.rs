use crate::cli::commands::{open_session, print_last_updated, print_totals, print_user_grid};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::context::Session;
use crate::core::grid::build_grid;
use crate::core::gridfile::write_grid_csv;
use crate::core::payment::{is_period_paid, latest_payment};
use crate::core::totals::Totals;
use crate::errors::AppResult;
use crate::models::record::TimeRecord;
use crate::ui::messages::{header, info, note, success, warning};
use crate::ui::render::render_non_zero;
use crate::utils::date::format_pretty;
use crate::utils::path::expand_tilde;
use std::fs::File;

/// Handle the `show` command.
///
/// Employees see their full grid. The reviewer sees every user's days with
/// hours plus the payment status of the period.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { period, csv } = &cli.command {
        let (_store, records, session) = open_session(cli, cfg, period.as_deref())?;

        if session.role.is_reviewer() {
            note(format!("Signed in as {} ({})", session.user, session.role.as_str()));
            for user in session.users_in_view(cfg) {
                let grid = build_grid(&records, &user, session.period);
                header(format!("{} ({})", user, session.period));

                if grid.is_empty() {
                    info(format!("No hours entered for {}", user));
                    continue;
                }

                print!("{}", render_non_zero(&grid));
                print_totals(&Totals::from_grid(&grid), &session);
                print_last_updated(&records, &user);
            }

            print_payment_status(&records, &cfg.users, &session);

            if csv.is_some() {
                warning("--csv writes a single user's grid; select an employee with --user");
            }
        } else {
            print_user_grid(&records, &session.user, &session);

            if let Some(file) = csv {
                let path = expand_tilde(file);
                let grid = build_grid(&records, &session.user, session.period);
                write_grid_csv(&grid, File::create(&path)?)?;
                success(format!("Grid written to {}", path.display()));
            }
        }
    }
    Ok(())
}

fn print_payment_status(records: &[TimeRecord], users: &[String], session: &Session) {
    println!();
    if is_period_paid(records, users, &session.period) {
        let when = latest_payment(records, users, &session.period)
            .map(|ts| format_pretty(&ts))
            .unwrap_or_default();
        success(format!(
            "All hours in this period have been entered for payment on {}",
            when
        ));
    } else {
        info("Hours in this period have not been entered for payment yet");
    }
}
