//! Movie genre tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use moviedb_core::AppError;

/// Genre tag attached to a movie.
///
/// Conversion to and from text always goes through [`GENRE_NAMES`]; serde
/// uses the same table, so an unknown token is rejected rather than
/// silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Biography,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Family,
    Fantasy,
    History,
    Horror,
    Musical,
    Mystery,
    Romance,
    ScienceFiction,
    Sport,
    Thriller,
    War,
    Western,
}

/// Canonical name of every genre.
pub const GENRE_NAMES: [(Genre, &str); 20] = [
    (Genre::Action, "ACTION"),
    (Genre::Adventure, "ADVENTURE"),
    (Genre::Animation, "ANIMATION"),
    (Genre::Biography, "BIOGRAPHY"),
    (Genre::Comedy, "COMEDY"),
    (Genre::Crime, "CRIME"),
    (Genre::Documentary, "DOCUMENTARY"),
    (Genre::Drama, "DRAMA"),
    (Genre::Family, "FAMILY"),
    (Genre::Fantasy, "FANTASY"),
    (Genre::History, "HISTORY"),
    (Genre::Horror, "HORROR"),
    (Genre::Musical, "MUSICAL"),
    (Genre::Mystery, "MYSTERY"),
    (Genre::Romance, "ROMANCE"),
    (Genre::ScienceFiction, "SCIENCE_FICTION"),
    (Genre::Sport, "SPORT"),
    (Genre::Thriller, "THRILLER"),
    (Genre::War, "WAR"),
    (Genre::Western, "WESTERN"),
];

/// Extra spellings accepted on input. Output always uses the canonical name.
const GENRE_ALIASES: [(&str, Genre); 2] = [
    ("SCI_FI", Genre::ScienceFiction),
    ("SCIFI", Genre::ScienceFiction),
];

impl Genre {
    /// Every genre, in table order.
    pub fn all() -> impl Iterator<Item = Genre> {
        GENRE_NAMES.iter().map(|(genre, _)| *genre)
    }

    /// Return the canonical name.
    pub fn as_str(&self) -> &'static str {
        GENRE_NAMES
            .iter()
            .find(|(genre, _)| genre == self)
            .map(|(_, name)| *name)
            .unwrap_or("UNKNOWN")
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_uppercase().replace(['-', ' '], "_");
        GENRE_NAMES
            .iter()
            .find(|(_, name)| *name == token)
            .map(|(genre, _)| *genre)
            .or_else(|| {
                GENRE_ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == token)
                    .map(|(_, genre)| *genre)
            })
            .ok_or_else(|| AppError::validation(format!("Unknown genre: '{s}'")))
    }
}

impl TryFrom<String> for Genre {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Genre> for String {
    fn from(genre: Genre) -> Self {
        genre.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_round_trip() {
        for genre in Genre::all() {
            assert_eq!(genre.as_str().parse::<Genre>().unwrap(), genre);
        }
        assert_eq!(Genre::all().count(), GENRE_NAMES.len());
    }

    #[test]
    fn test_from_str_is_lenient_about_case_and_aliases() {
        assert_eq!("drama".parse::<Genre>().unwrap(), Genre::Drama);
        assert_eq!("SCI_FI".parse::<Genre>().unwrap(), Genre::ScienceFiction);
        assert_eq!("science fiction".parse::<Genre>().unwrap(), Genre::ScienceFiction);
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        let err = "NOIR".parse::<Genre>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Genre::ScienceFiction).unwrap();
        assert_eq!(json, "\"SCIENCE_FICTION\"");
        let parsed: Genre = serde_json::from_str("\"sci_fi\"").unwrap();
        assert_eq!(parsed, Genre::ScienceFiction);
        assert!(serde_json::from_str::<Genre>("\"POLKA\"").is_err());
    }
}
