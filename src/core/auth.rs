use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Environment variable read when `--password` is not given.
pub const PASSWORD_ENV: &str = "RTIMESHEET_PASSWORD";

/// Shared-password gate. An empty configured password disables it.
pub fn check_password(cfg: &Config, provided: Option<&str>) -> AppResult<()> {
    if cfg.password.is_empty() {
        return Ok(());
    }

    let from_env = std::env::var(PASSWORD_ENV).ok();
    match provided.or(from_env.as_deref()) {
        Some(pw) if pw == cfg.password => Ok(()),
        _ => Err(AppError::Unauthorized),
    }
}
