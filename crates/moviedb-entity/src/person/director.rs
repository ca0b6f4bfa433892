//! Director record.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use moviedb_core::traits::{Queryable, Record};
use moviedb_core::types::filter::FilterValue;
use moviedb_core::types::id::{AwardId, DirectorId};

use super::draft::CreatePerson;
use super::field::PersonField;

/// A director. Movies point at directors through `Movie::director_ids`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Director {
    /// Store-assigned identifier.
    pub id: DirectorId,
    /// Full name.
    pub name: String,
    /// Portrait URL.
    pub image_url: Option<String>,
    /// Awards won.
    #[serde(default)]
    pub award_ids: BTreeSet<AwardId>,
    /// When the director was first persisted.
    pub created_at: DateTime<Utc>,
    /// When the director was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Director {
    /// Return the value of a field.
    pub fn field(&self, field: PersonField) -> FilterValue {
        match field {
            PersonField::Id => self.id.value().into(),
            PersonField::Name => self.name.as_str().into(),
            PersonField::ImageUrl => self.image_url.clone().into(),
            PersonField::AwardIds => {
                FilterValue::IntegerList(self.award_ids.iter().map(|id| id.value()).collect())
            }
            PersonField::CreatedAt => self.created_at.timestamp_millis().into(),
            PersonField::UpdatedAt => self.updated_at.timestamp_millis().into(),
        }
    }
}

impl Queryable for Director {
    fn field_value(&self, field: &str) -> Option<FilterValue> {
        PersonField::lookup(field).map(|f| self.field(f))
    }
}

impl Record for Director {
    type Id = DirectorId;
    type Draft = CreatePerson;

    const KIND: &'static str = "Director";

    fn id(&self) -> DirectorId {
        self.id
    }

    fn from_draft(id: DirectorId, draft: CreatePerson, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            image_url: draft.image_url,
            award_ids: draft.award_ids,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_draft(&mut self, draft: CreatePerson, now: DateTime<Utc>) {
        self.name = draft.name;
        self.image_url = draft.image_url;
        self.award_ids = draft.award_ids;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_values() {
        let director = Director::from_draft(
            DirectorId(4),
            CreatePerson::new("Christopher Nolan").with_awards([AwardId(2), AwardId(1)]),
            Utc::now(),
        );
        assert_eq!(director.field_value("id"), Some(FilterValue::Integer(4)));
        assert_eq!(
            director.field_value("name"),
            Some(FilterValue::String("Christopher Nolan".into()))
        );
        assert_eq!(
            director.field_value("award_ids"),
            Some(FilterValue::IntegerList(vec![1, 2]))
        );
        assert_eq!(director.field_value("imageUrl"), Some(FilterValue::Null));
        assert_eq!(director.field_value("title"), None);
    }
}
