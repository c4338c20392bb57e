use crate::shortcode::ShortCode;

/// Sequential short code generator.
///
/// Produces base-62 codes from a counter that starts at 1 and only moves
/// forward. It is not synchronized on its own; the owner decides how
/// concurrent callers are serialized.
#[derive(Debug, Clone)]
pub struct SeqGenerator {
    next: u64,
}

impl SeqGenerator {
    /// Creates a generator whose first code encodes 1.
    pub fn new() -> Self {
        Self::with_offset(1)
    }

    /// Creates a generator starting from a specific counter value.
    pub fn with_offset(offset: u64) -> Self {
        Self { next: offset }
    }

    /// Returns the counter value the next call to [`generate`](Self::generate) will use.
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Consumes the current counter value and returns its code.
    ///
    /// # Panics
    ///
    /// Panics once the counter has issued `u64::MAX`; wrapping around would
    /// hand out codes that are already in use.
    pub fn generate(&mut self) -> ShortCode {
        let id = self.next;
        self.next = id.checked_add(1).expect("short code counter exhausted");
        ShortCode::from_id(id)
    }
}

impl Default for SeqGenerator {
    fn default() -> Self {
        Self::new()
    }
}
