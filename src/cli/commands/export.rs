use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let mut store = store::open(cfg)?;
        let count = ExportLogic::export(store.as_mut(), *format, file, range.as_deref(), *force)?;
        if count > 0 {
            info(format!("{} records exported as {}", count, format.as_str()));
        }
    }
    Ok(())
}
