//! Award record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use moviedb_core::traits::{Queryable, Record};
use moviedb_core::types::filter::FilterValue;
use moviedb_core::types::id::AwardId;

use super::draft::CreateAward;
use super::kind::{AwardCategory, AwardTitle};

/// An award. Movies, directors and actors point at awards by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    /// Store-assigned identifier.
    pub id: AwardId,
    /// Awarding body.
    pub name: AwardTitle,
    /// Ceremony year.
    pub year: i32,
    /// Category.
    pub category: AwardCategory,
    /// When the award was first persisted.
    pub created_at: DateTime<Utc>,
    /// When the award was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Queryable for Award {
    fn field_value(&self, field: &str) -> Option<FilterValue> {
        let value = match field {
            "id" => self.id.value().into(),
            "name" => self.name.as_str().into(),
            "year" => self.year.into(),
            "category" => self.category.as_str().into(),
            "createdAt" | "created_at" => self.created_at.timestamp_millis().into(),
            "updatedAt" | "updated_at" => self.updated_at.timestamp_millis().into(),
            _ => return None,
        };
        Some(value)
    }
}

impl Record for Award {
    type Id = AwardId;
    type Draft = CreateAward;

    const KIND: &'static str = "Award";

    fn id(&self) -> AwardId {
        self.id
    }

    fn from_draft(id: AwardId, draft: CreateAward, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            year: draft.year,
            category: draft.category,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_draft(&mut self, draft: CreateAward, now: DateTime<Utc>) {
        self.name = draft.name;
        self.year = draft.year;
        self.category = draft.category;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_values_use_canonical_names() {
        let award = Award::from_draft(
            AwardId(1),
            CreateAward::new(AwardTitle::PalmeDor, 2019, AwardCategory::BestPicture),
            Utc::now(),
        );
        assert_eq!(award.field_value("name"), Some(FilterValue::String("PALME_DOR".into())));
        assert_eq!(
            award.field_value("category"),
            Some(FilterValue::String("BEST_PICTURE".into()))
        );
        assert_eq!(award.field_value("year"), Some(FilterValue::Integer(2019)));
        assert_eq!(award.field_value("movies"), None);
    }
}
