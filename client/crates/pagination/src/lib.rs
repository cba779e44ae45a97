//! Page-number pagination primitives for the popular movies client.
//!
//! Catalogue endpoints number their pages from one and report the total page
//! and result counts alongside each page of items. This crate owns that
//! envelope shape ([`Page`]), the validated request parameter
//! ([`PageNumber`]), and the offset slicing used by in-memory fixtures
//! ([`paginate`]).

mod offset;
mod page;
mod page_number;

pub use offset::paginate;
pub use page::Page;
pub use page_number::{PageNumber, PageNumberError};
