use crate::error::{Result, ShortlinkError};
use crate::generator::SeqGenerator;
use crate::settings::{normalize_base_url, DEFAULT_BASE_URL};
use crate::shortcode::ShortCode;
use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, trace};

/// In-memory bidirectional mapping between long URLs and short codes.
///
/// Reads go straight to the sharded maps. Minting a new code and clearing
/// the store are serialized by the generator lock, which closes the race
/// where two callers encode the same URL for the first time.
///
/// Entries are published forward-then-reverse and cleared
/// reverse-then-forward, so a reverse entry is never visible without its
/// forward entry.
#[derive(Debug)]
pub struct UrlStore {
    forward: DashMap<ShortCode, String>,
    reverse: DashMap<String, ShortCode>,
    generator: Mutex<SeqGenerator>,
    base_url: String,
}

impl UrlStore {
    /// Creates an empty store using the default base URL.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates an empty store whose short links start with `base_url`.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            forward: DashMap::new(),
            reverse: DashMap::new(),
            generator: Mutex::new(SeqGenerator::new()),
            base_url: normalize_base_url(base_url),
        }
    }

    /// The prefix used for short links and stripped on decode.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the short code for `raw_url`, minting one on first use.
    ///
    /// The URL is trimmed before lookup, so whitespace variants share a code.
    pub fn encode(&self, raw_url: &str) -> Result<ShortCode> {
        let url = raw_url.trim();
        if url.is_empty() {
            return Err(ShortlinkError::InvalidInput(
                "URL cannot be empty".to_string(),
            ));
        }

        if !is_valid_url(url) {
            return Err(ShortlinkError::InvalidInput(format!(
                "invalid URL format: {}",
                url
            )));
        }

        if let Some(code) = self.reverse.get(url) {
            trace!(code = %code.value(), "url already shortened");
            return Ok(code.value().clone());
        }

        let mut generator = self.generator.lock();

        // Another caller may have minted this URL while we waited for the lock.
        if let Some(code) = self.reverse.get(url) {
            return Ok(code.value().clone());
        }

        let code = generator.generate();
        self.forward.insert(code.clone(), url.to_owned());
        self.reverse.insert(url.to_owned(), code.clone());
        debug!(code = %code, "minted short code");

        Ok(code)
    }

    /// Resolves a short link, a foreign URL ending in a code, or a bare code
    /// to the stored long URL.
    pub fn decode(&self, raw_code: &str) -> Result<String> {
        let input = raw_code.trim();
        if input.is_empty() {
            return Err(ShortlinkError::InvalidInput(
                "short URL cannot be empty".to_string(),
            ));
        }

        let code = self.extract_code(input).ok_or_else(|| {
            ShortlinkError::NotFound(format!("invalid short URL format: {}", input))
        })?;

        self.forward
            .get(&ShortCode::new_unchecked(code))
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ShortlinkError::NotFound(input.to_string()))
    }

    /// Builds the externally visible short link for `code`.
    pub fn short_url(&self, code: &ShortCode) -> String {
        code.to_url(&self.base_url)
    }

    /// Number of stored mappings.
    pub fn size(&self) -> usize {
        self.forward.len()
    }

    /// Removes every mapping. The counter keeps going, so codes issued before
    /// the clear are never handed out again.
    pub fn clear(&self) {
        let generator = self.generator.lock();
        let removed = self.forward.len();
        self.reverse.clear();
        self.forward.clear();
        debug!(removed, next_id = generator.peek(), "cleared url store");
    }

    fn extract_code<'a>(&self, input: &'a str) -> Option<&'a str> {
        let code = if let Some(rest) = input.strip_prefix(self.base_url.as_str()) {
            rest
        } else if input.starts_with("http://") || input.starts_with("https://") {
            input.rsplit_once('/').map(|(_, last)| last)?
        } else {
            input
        };

        (!code.is_empty()).then_some(code)
    }
}

impl Default for UrlStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal URL shape check: `^https?://.+\..+$`, case-insensitive scheme.
///
/// Deliberately loose. It accepts some malformed URLs and rejects valid ones
/// without a dot after the scheme, such as `http://localhost/`.
fn is_valid_url(url: &str) -> bool {
    let Some((scheme, rest)) = url.split_once("://") else {
        return false;
    };

    if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
        return false;
    }

    if rest.chars().any(is_line_terminator) {
        return false;
    }

    // At least one character on each side of some dot.
    rest.char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < rest.len())
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}
