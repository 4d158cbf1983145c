//! Page fetching: the HTTP client seam and the fetched-page type.

pub mod client;
pub mod page;
