use serde::{Deserialize, Serialize};
use std::fmt;

/// Hour categories tracked per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Regular,
    Holiday,
    Sick,
    Vacation,
}

impl Category {
    /// Column order used on screen and in grid files.
    pub const DISPLAY: [Category; 4] = [
        Category::Regular,
        Category::Sick,
        Category::Vacation,
        Category::Holiday,
    ];

    /// Position in a grid row.
    pub fn index(&self) -> usize {
        match self {
            Category::Regular => 0,
            Category::Holiday => 1,
            Category::Sick => 2,
            Category::Vacation => 3,
        }
    }

    /// Convert enum → stored string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Category::Regular => "Regular",
            Category::Holiday => "Holiday",
            Category::Sick => "Sick",
            Category::Vacation => "Vacation",
        }
    }

    /// Convert stored string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Regular" => Some(Category::Regular),
            "Holiday" => Some(Category::Holiday),
            "Sick" => Some(Category::Sick),
            "Vacation" => Some(Category::Vacation),
            _ => None,
        }
    }

    /// Helper: accept CLI / file input in any case, plus one-letter codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "regular" | "r" => Some(Category::Regular),
            "holiday" | "h" => Some(Category::Holiday),
            "sick" | "s" => Some(Category::Sick),
            "vacation" | "v" => Some(Category::Vacation),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
