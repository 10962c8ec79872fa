//! Question service.
//!
//! Each operation takes the store handle explicitly, runs its queries,
//! paginates where the endpoint is paged and returns plain domain values.
//! HTTP shaping lives in `crate::api`.
//!
//! - `error`: Service error taxonomy (not found / unprocessable / store)
//! - `pagination`: Fixed-size page slicing
//! - `questions`: Listing, create, delete, search, per-category listing
//! - `quiz`: Random unseen question selection

mod error;
pub mod pagination;
mod questions;
mod quiz;


pub use error::{ServiceError, ServiceResult};
pub use pagination::{DEFAULT_PAGE, QUESTIONS_PER_PAGE, paginate, parse_page};
pub use questions::*;
pub use quiz::*;
