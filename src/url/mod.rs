//! URL handling module for SVG-Sweep
//!
//! Links scraped from a page are turned into absolute, fetchable URL strings
//! by [`canonicalize`], relative to the final URL of the page they came from.

mod canonicalize;

pub use canonicalize::{canonicalize, origin_and_path};
