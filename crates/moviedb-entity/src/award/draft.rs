//! Write-side award input.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::kind::{AwardCategory, AwardTitle};

/// Data required to create or replace an award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAward {
    /// Awarding body.
    pub name: AwardTitle,
    /// Ceremony year.
    #[validate(range(min = 1888, max = 2030))]
    pub year: i32,
    /// Category.
    pub category: AwardCategory,
}

impl CreateAward {
    /// Build a draft.
    pub fn new(name: AwardTitle, year: i32, category: AwardCategory) -> Self {
        Self {
            name,
            year,
            category,
        }
    }
}
