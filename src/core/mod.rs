pub mod auth;
pub mod context;
pub mod grid;
pub mod gridfile;
pub mod payment;
pub mod period;
pub mod save;
pub mod totals;
