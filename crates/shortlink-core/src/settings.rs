use std::num::NonZeroUsize;
use typed_builder::TypedBuilder;

pub const DEFAULT_BASE_URL: &str = "http://short.est/";
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 10;

/// Configures the store and the admission gate.
///
/// ```
/// use shortlink_core::ShortlinkSettings;
///
/// let settings = ShortlinkSettings::builder().base_url("https://sho.rt").build();
/// assert_eq!(settings.base_url, "https://sho.rt/");
/// assert_eq!(settings.max_concurrent_requests.get(), 10);
/// ```
#[derive(Debug, Clone, TypedBuilder)]
pub struct ShortlinkSettings {
    /// Prefix of every externally visible short link. Always ends with `/`.
    #[builder(
        default = DEFAULT_BASE_URL.to_string(),
        setter(transform = |base_url: &str| normalize_base_url(base_url))
    )]
    pub base_url: String,
    /// Maximum number of operations admitted at the same time.
    #[builder(default = default_max_concurrent_requests())]
    pub max_concurrent_requests: NonZeroUsize,
}

impl Default for ShortlinkSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Trims whitespace and guarantees a single trailing `/`, so a code can be
/// appended directly and stripped again on decode.
pub fn normalize_base_url(base_url: &str) -> String {
    format!("{}/", base_url.trim().trim_end_matches('/'))
}

fn default_max_concurrent_requests() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_MAX_CONCURRENT_REQUESTS).unwrap_or(NonZeroUsize::MIN)
}
