//! Configuration module for SVG-Sweep
//!
//! Every setting has a built-in default, so a crawl can run without any file.
//! A TOML file may override any subset of them.
//!
//! # Example
//!
//! ```no_run
//! use svg_sweep::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sweep.toml")).unwrap();
//! println!("Expansion budget: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, FailurePolicy, OutputConfig, UserAgentConfig, DEFAULT_MAX_DEPTH,
    DEFAULT_REPORT_PATH, DEFAULT_START_URL, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
