//! Cross-cutting pieces shared by every router: the error taxonomy, the
//! pagination envelope and the request extractors.

pub mod error;
pub mod extractors;
pub mod pagination;

pub use error::ApiError;
pub use extractors::Payload;
pub use pagination::{DataResponse, Metadados, PagedResponse, Pagination, MAX_RESULTS};
