//! Award entities.

pub mod draft;
pub mod kind;
pub mod model;

pub use draft::CreateAward;
pub use kind::{AwardCategory, AwardTitle};
pub use model::Award;
