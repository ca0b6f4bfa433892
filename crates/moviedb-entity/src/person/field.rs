//! Queryable fields shared by directors and actors.

use std::fmt;
use std::str::FromStr;

use moviedb_core::AppError;

/// A person field that filters and sort keys may refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonField {
    Id,
    Name,
    ImageUrl,
    AwardIds,
    CreatedAt,
    UpdatedAt,
}

impl PersonField {
    /// Every queryable field.
    pub const ALL: [PersonField; 6] = [
        Self::Id,
        Self::Name,
        Self::ImageUrl,
        Self::AwardIds,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::ImageUrl => "imageUrl",
            Self::AwardIds => "awardIds",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
        }
    }

    /// Rust-side field name.
    pub fn snake_name(&self) -> &'static str {
        match self {
            Self::ImageUrl => "image_url",
            Self::AwardIds => "award_ids",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            other => other.as_str(),
        }
    }

    /// Look a field up by wire name or snake_case name.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == name || field.snake_name() == name)
    }
}

impl fmt::Display for PersonField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s.trim())
            .ok_or_else(|| AppError::validation(format!("Unknown person field: '{s}'")))
    }
}
