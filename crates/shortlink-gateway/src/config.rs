use clap::Parser;
use shortlink_core::settings::DEFAULT_BASE_URL;
use shortlink_core::ShortlinkSettings;
use std::net::SocketAddr;
use std::num::NonZeroUsize;

pub const LISTEN_ADDR_ENV: &str = "SHORTLINK_LISTEN_ADDR";
pub const BASE_URL_ENV: &str = "SHORTLINK_BASE_URL";
pub const MAX_CONCURRENT_REQUESTS_ENV: &str = "SHORTLINK_MAX_CONCURRENT_REQUESTS";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Parser)]
#[command(name = "shortlink-gateway")]
pub struct Cli {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Prefix prepended to short codes in returned links.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Requests beyond this many in flight are answered with 429.
    #[arg(
        long,
        env = MAX_CONCURRENT_REQUESTS_ENV,
        default_value_t = ShortlinkSettings::default().max_concurrent_requests,
    )]
    pub max_concurrent_requests: NonZeroUsize,
}

impl Cli {
    pub fn settings(&self) -> ShortlinkSettings {
        ShortlinkSettings::builder()
            .base_url(&self.base_url)
            .max_concurrent_requests(self.max_concurrent_requests)
            .build()
    }
}
