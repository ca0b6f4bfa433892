//! Movie services: criteria, paging, queries, catalog writes, projection.

pub mod catalog;
pub mod criteria;
pub mod paging;
pub mod projection;
pub mod query;

pub use catalog::MovieCatalogService;
pub use criteria::{MovieCriteria, YearRange};
pub use paging::{PageParams, PageResolver};
pub use projection::MovieView;
pub use query::MovieQueryService;
