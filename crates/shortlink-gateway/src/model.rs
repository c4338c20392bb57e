mod stats;
mod url;

pub use stats::StatsResponse;
pub use url::{DecodeRequest, DecodeResponse, EncodeRequest, EncodeResponse};

/// Milliseconds since the Unix epoch, stamped on every response body.
fn now_millis() -> i64 {
    jiff::Timestamp::now().as_millisecond()
}
