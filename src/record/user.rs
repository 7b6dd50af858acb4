//! User record

use std::fmt;

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique within a store (checked on insertion only)
    pub id: i32,

    pub name: String,

    pub description: String,

    pub age: i32,

    /// Whether the account is active
    pub active: bool,
}

impl User {
    /// Create a new user
    pub fn new(
        id: i32,
        name: impl Into<String>,
        description: impl Into<String>,
        age: i32,
        active: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            age,
            active,
        }
    }

    /// Status label used when rendering the user
    pub fn status(&self) -> &'static str {
        if self.active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Age: {}", self.age)?;
        write!(f, "Status: {}", self.status())
    }
}
