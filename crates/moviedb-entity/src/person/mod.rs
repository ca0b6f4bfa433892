//! Directors and actors.
//!
//! Both kinds of person share one draft and one field table; they live in
//! separate stores and carry separate id types.

pub mod actor;
pub mod director;
pub mod draft;
pub mod field;

pub use actor::Actor;
pub use director::Director;
pub use draft::CreatePerson;
pub use field::PersonField;
