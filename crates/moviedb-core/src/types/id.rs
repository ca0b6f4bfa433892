//! Newtype wrappers around store-assigned `i64` sequence numbers.
//!
//! Using distinct types prevents accidentally passing an `ActorId` where a
//! `MovieId` is expected. Ids are handed out by the record store on first
//! persist and never change afterwards.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `i64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Create an identifier from a raw sequence value.
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Return the inner sequence value.
            pub fn value(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a movie.
    MovieId
);

define_id!(
    /// Unique identifier for a director.
    DirectorId
);

define_id!(
    /// Unique identifier for an actor.
    ActorId
);

define_id!(
    /// Unique identifier for an award.
    AwardId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_id_ordering_follows_sequence() {
        assert!(MovieId::new(1) < MovieId::new(2));
        assert_eq!(MovieId::from(7).value(), 7);
    }

    #[test]
    fn test_movie_id_from_str() {
        let id: MovieId = " 42 ".parse().expect("should parse");
        assert_eq!(id, MovieId(42));
        assert!("forty-two".parse::<MovieId>().is_err());
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&ActorId(3)).expect("serialize");
        assert_eq!(json, "3");
        let parsed: ActorId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, ActorId(3));
    }
}
