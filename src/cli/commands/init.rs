use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the record store selected by the configuration or by --db / --docs
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_ref(), cli.docs.as_ref(), cli.test)?;

    println!("⚙️  Initializing rTimesheet…");
    println!("📄 Config file : {}", Config::config_file().display());

    // Opening the store creates it and applies pending migrations
    let mut store = store::open(&cfg)?;
    let existing = store.load_all()?.len();

    println!("🗄️  Store       : {}", store.describe());
    println!("👥 Users       : {} (reviewer: {})", cfg.users.join(", "), cfg.reviewer);

    success(format!(
        "rTimesheet initialization completed ({existing} existing records)"
    ));
    Ok(())
}
