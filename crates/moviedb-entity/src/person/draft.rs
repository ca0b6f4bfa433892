//! Write-side input for directors and actors.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use moviedb_core::types::id::AwardId;

use crate::validation::{validate_image_url, validate_not_blank};

/// Data required to create or replace a director or an actor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePerson {
    /// Full name.
    #[validate(
        length(min = 1, max = 255),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
    /// Portrait URL; empty or http(s).
    #[validate(custom(function = "validate_image_url"))]
    pub image_url: Option<String>,
    /// Awards won.
    #[serde(default)]
    pub award_ids: BTreeSet<AwardId>,
}

impl CreatePerson {
    /// Start a draft with only the name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the portrait URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set the awards won.
    pub fn with_awards(mut self, awards: impl IntoIterator<Item = AwardId>) -> Self {
        self.award_ids = awards.into_iter().collect();
        self
    }
}
