//! Folder retrieval: filtering, token pagination and iteration
//!
//! Every call re-reads the data source and re-runs the filter; no cursor
//! into the source is kept between calls. Pagination state lives entirely in
//! the opaque token the caller passes back.

mod filter;
mod iter;
mod pagination;
mod service;
mod token;

pub use pagination::{DEFAULT_PAGE_SIZE, Page, PageRequest};
pub use service::FolderService;
pub use token::{decode_token, encode_token};
