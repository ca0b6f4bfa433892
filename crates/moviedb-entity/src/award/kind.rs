//! Award titles and categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The ceremony or body handing out an award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AwardTitle {
    Oscar,
    GoldenGlobe,
    Bafta,
    Cannes,
    PalmeDor,
    Emmy,
    Grammy,
    Sag,
}

impl AwardTitle {
    /// Return the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oscar => "OSCAR",
            Self::GoldenGlobe => "GOLDEN_GLOBE",
            Self::Bafta => "BAFTA",
            Self::Cannes => "CANNES",
            Self::PalmeDor => "PALME_DOR",
            Self::Emmy => "EMMY",
            Self::Grammy => "GRAMMY",
            Self::Sag => "SAG",
        }
    }
}

impl fmt::Display for AwardTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The category an award was given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AwardCategory {
    BestPicture,
    BestDirector,
    BestActor,
    BestActress,
    BestScreenplay,
    BestMusic,
    BestDocumentary,
    BestForeignLanguageFilm,
}

impl AwardCategory {
    /// Return the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BestPicture => "BEST_PICTURE",
            Self::BestDirector => "BEST_DIRECTOR",
            Self::BestActor => "BEST_ACTOR",
            Self::BestActress => "BEST_ACTRESS",
            Self::BestScreenplay => "BEST_SCREENPLAY",
            Self::BestMusic => "BEST_MUSIC",
            Self::BestDocumentary => "BEST_DOCUMENTARY",
            Self::BestForeignLanguageFilm => "BEST_FOREIGN_LANGUAGE_FILM",
        }
    }
}

impl fmt::Display for AwardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_matches_as_str() {
        for title in [AwardTitle::GoldenGlobe, AwardTitle::PalmeDor, AwardTitle::Sag] {
            let json = serde_json::to_string(&title).unwrap();
            assert_eq!(json, format!("\"{}\"", title.as_str()));
        }
        let json = serde_json::to_string(&AwardCategory::BestForeignLanguageFilm).unwrap();
        assert_eq!(json, "\"BEST_FOREIGN_LANGUAGE_FILM\"");
        assert!(serde_json::from_str::<AwardTitle>("\"TONY\"").is_err());
    }
}
