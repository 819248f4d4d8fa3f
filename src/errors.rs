//! Application error type shared by the store, core, cli and export layers.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // Record stores
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),
    #[error("Database migration error: {0}")]
    Migration(String),
    #[error("Document error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Record store error: {0}")]
    Store(String),

    // Input
    #[error("Invalid date format: {0}")]
    InvalidDate(String),
    #[error("Invalid hour category: {0}")]
    InvalidCategory(String),
    #[error("Invalid hours for {row} / {category}: {value}")]
    InvalidHours {
        row: String,
        category: String,
        value: String,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // Who may do what
    #[error("Unknown user: {0}")]
    UnknownUser(String),
    #[error("The reviewer view is read-only: {0} cannot enter hours")]
    ReadOnly(String),
    #[error("Only the reviewer can change payment state ({0} is not the reviewer)")]
    NotReviewer(String),
    #[error("Password incorrect")]
    Unauthorized,

    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),
    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
