use serde::Deserialize;

/// Page the crawl starts from when none is configured
pub const DEFAULT_START_URL: &str = "https://www.google.com/search?q=svg";

/// User-Agent header sent with every request when none is configured
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/109.0";

/// Expansion budget shared by the whole crawl
pub const DEFAULT_MAX_DEPTH: u32 = 10;

/// Where the aggregated report is written
pub const DEFAULT_REPORT_PATH: &str = "all_svgs.html";

/// Main configuration structure for SVG-Sweep
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// What the engine does when a page cannot be fetched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the whole crawl on the first failure
    #[default]
    Abort,
    /// Log the failure and continue with the next URL
    Skip,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CrawlerConfig {
    /// First page to fetch
    #[serde(default = "default_start_url")]
    pub start_url: String,

    /// Number of expansion steps shared across the whole crawl
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,

    /// Behavior on fetch failures
    #[serde(default)]
    pub on_fetch_error: FailurePolicy,

    /// Never fetch the same URL twice in one run
    #[serde(default)]
    pub skip_visited: bool,

    /// Drop anchors that carry no `href` instead of following the origin root
    #[serde(default)]
    pub skip_missing_href: bool,

    /// Per-request timeout in seconds (no timeout when unset)
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            start_url: default_start_url(),
            max_depth: default_max_depth(),
            on_fetch_error: FailurePolicy::default(),
            skip_visited: false,
            skip_missing_href: false,
            request_timeout_secs: None,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Full User-Agent header value
    #[serde(default = "default_user_agent")]
    pub value: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            value: default_user_agent(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the aggregated SVG report
    #[serde(default = "default_report_path", rename = "report-path")]
    pub report_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: default_report_path(),
        }
    }
}

fn default_start_url() -> String {
    DEFAULT_START_URL.to_string()
}

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_report_path() -> String {
    DEFAULT_REPORT_PATH.to_string()
}
