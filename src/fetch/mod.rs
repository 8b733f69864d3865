//! HTTP fetching with observed redirects.
//!
//! This module provides:
//! - Resolution of `Location` header values into the next URL
//! - A redirect-following loop that records every hop it takes

mod redirects;
mod url;

// Re-export public API
pub use redirects::{follow_redirects, is_followed_redirect, FinalResponse, RedirectTrace};
pub use url::resolve_location;
