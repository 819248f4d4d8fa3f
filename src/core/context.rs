//! Request-scoped session: who is looking at which period, and when.
//!
//! Built once per command from the CLI arguments and the configuration and
//! passed down explicitly; nothing about the selection outlives the command.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::period::Period;
use crate::models::role::Role;
use crate::utils::date::parse_date;
use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone)]
pub struct Session {
    pub user: String,
    pub role: Role,
    pub period: Period,
    pub today: NaiveDate,
    pub now: NaiveDateTime,
}

impl Session {
    /// Resolve the selected user and period.
    ///
    /// `period` may be any date inside the wanted period; without it the
    /// current period is selected. `earliest` is the first stored record date.
    pub fn new(
        cfg: &Config,
        user: Option<&str>,
        period: Option<&str>,
        earliest: Option<NaiveDate>,
    ) -> AppResult<Self> {
        let now = cfg.clock.now();
        let today = now.date();
        Self::at(cfg, user, period, earliest, today, now)
    }

    /// Same as [`Session::new`] with an explicit clock.
    pub fn at(
        cfg: &Config,
        user: Option<&str>,
        period: Option<&str>,
        earliest: Option<NaiveDate>,
        today: NaiveDate,
        now: NaiveDateTime,
    ) -> AppResult<Self> {
        let user = user.unwrap_or(cfg.default_user.as_str()).to_string();
        if !cfg.is_known_user(&user) {
            return Err(AppError::UnknownUser(user));
        }

        let role = if user == cfg.reviewer {
            Role::Reviewer
        } else {
            Role::Employee
        };

        let calc = cfg.period_calculator();
        let period = match period {
            Some(raw) => {
                let d = parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?;
                calc.period_containing(d)
            }
            None => calc.current_period(today, earliest),
        };

        Ok(Self {
            user,
            role,
            period,
            today,
            now,
        })
    }

    /// Users whose hours this session shows: everyone for the reviewer.
    pub fn users_in_view(&self, cfg: &Config) -> Vec<String> {
        if self.role.is_reviewer() {
            cfg.users.clone()
        } else {
            vec![self.user.clone()]
        }
    }

    pub fn ensure_can_edit(&self) -> AppResult<()> {
        if self.role.is_reviewer() {
            return Err(AppError::ReadOnly(self.user.clone()));
        }
        Ok(())
    }

    pub fn ensure_reviewer(&self) -> AppResult<()> {
        if !self.role.is_reviewer() {
            return Err(AppError::NotReviewer(self.user.clone()));
        }
        Ok(())
    }
}
