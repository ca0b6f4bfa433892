//! Movie domain entities.

pub mod draft;
pub mod field;
pub mod genre;
pub mod model;

pub use draft::CreateMovie;
pub use field::MovieField;
pub use genre::{GENRE_NAMES, Genre};
pub use model::Movie;
