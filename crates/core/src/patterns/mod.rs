//! Wildcard URL patterns

pub mod block_list;
pub mod url_pattern;

pub use block_list::BlockList;
pub use url_pattern::{PRIMARY_ALIAS, UrlPattern, resolve_alias};
