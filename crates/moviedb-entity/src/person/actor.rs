//! Actor record.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use moviedb_core::traits::{Queryable, Record};
use moviedb_core::types::filter::FilterValue;
use moviedb_core::types::id::{ActorId, AwardId};

use super::draft::CreatePerson;
use super::field::PersonField;

/// An actor. Movies point at their cast through `Movie::actor_ids`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    /// Store-assigned identifier.
    pub id: ActorId,
    /// Full name.
    pub name: String,
    /// Portrait URL.
    pub image_url: Option<String>,
    /// Awards won.
    #[serde(default)]
    pub award_ids: BTreeSet<AwardId>,
    /// When the actor was first persisted.
    pub created_at: DateTime<Utc>,
    /// When the actor was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Actor {
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

impl Queryable for Actor {
    fn field_value(&self, field: &str) -> Option<FilterValue> {
        PersonField::lookup(field).map(|f| self.field(f))
    }
}

impl Record for Actor {
    type Id = ActorId;
    type Draft = CreatePerson;

    const KIND: &'static str = "Actor";

    fn id(&self) -> ActorId {
        self.id
    }

    fn from_draft(id: ActorId, draft: CreatePerson, now: DateTime<Utc>) -> Self {
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
    fn test_apply_draft_keeps_identity() {
        let created = Utc::now();
        let mut actor = Actor::from_draft(ActorId(1), CreatePerson::new("Amy Adams"), created);
        let later = created + chrono::Duration::seconds(1);
        actor.apply_draft(
            CreatePerson::new("Amy Adams").with_image_url("https://example.com/adams.jpg"),
            later,
        );
        assert_eq!(actor.id, ActorId(1));
        assert_eq!(actor.created_at, created);
        assert_eq!(actor.updated_at, later);
        assert!(actor.image_url.is_some());
    }
}
