use serde::Serialize;

/// What the selected user may do in a session.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Role {
    /// Enters their own hours.
    Employee,
    /// Views everyone, controls payment state, cannot enter hours.
    Reviewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Reviewer => "reviewer",
        }
    }

    pub fn is_reviewer(&self) -> bool {
        matches!(self, Role::Reviewer)
    }
}
