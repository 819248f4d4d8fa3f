use crate::cli::commands::{open_session, print_user_grid};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::gridfile::read_grid_csv;
use crate::core::save::SaveLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

/// Handle the `import` command: save a whole period from a grid CSV file.
///
/// Days missing from the file count as zero, so the file replaces the
/// user's period completely.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, period } = &cli.command {
        let (mut store, _records, session) = open_session(cli, cfg, period.as_deref())?;
        session.ensure_can_edit()?;

        let path = expand_tilde(file);
        let grid = read_grid_csv(&path, session.period)?;

        let outcome = SaveLogic::apply(
            store.as_mut(),
            &session.user,
            &grid,
            session.now,
            &cfg.hour_rules(),
        )?;

        success(format!(
            "Imported {} for {}: {} records written, {} replaced",
            path.display(),
            session.user,
            outcome.written,
            outcome.replaced
        ));

        let reloaded = store.load_all()?;
        print_user_grid(&reloaded, &session.user, &session);
    }
    Ok(())
}
