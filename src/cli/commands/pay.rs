use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::payment::{PaymentChange, PaymentLogic};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `pay` command (reviewer only).
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Pay { period, reset } = &cli.command {
        let (mut store, _records, session) = open_session(cli, cfg, period.as_deref())?;
        session.ensure_reviewer()?;

        let users = session.users_in_view(cfg);
        let change = if *reset {
            PaymentLogic::reset(store.as_mut(), &users, &session.period)?
        } else {
            PaymentLogic::enter(store.as_mut(), &users, &session.period, session.now)?
        };

        match (change, *reset) {
            (PaymentChange::Updated(n), false) => success(format!(
                "Period {} entered for payment ({} records)",
                session.period, n
            )),
            (PaymentChange::Updated(n), true) => success(format!(
                "Payment mark cleared for period {} ({} records)",
                session.period, n
            )),
            (PaymentChange::Unchanged, false) => {
                info(format!("Period {} is already entered for payment", session.period))
            }
            (PaymentChange::Unchanged, true) => {
                info(format!("Period {} is not entered for payment", session.period))
            }
            (PaymentChange::NothingToMark, _) => {
                warning(format!("No hours entered in period {}", session.period))
            }
        }
    }
    Ok(())
}
