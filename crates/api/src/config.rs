//! Site configuration, read once from the environment at startup.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const BIND_ADDR_VAR: &str = "MUSEE_BIND_ADDR";
pub const SSE_KEEPALIVE_VAR: &str = "MUSEE_SSE_KEEPALIVE_SECS";
pub const NOTIFICATION_BUFFER_VAR: &str = "MUSEE_NOTIFICATION_BUFFER";
pub const SESSION_IDLE_VAR: &str = "MUSEE_SESSION_IDLE_SECS";
pub const MAX_SESSIONS_VAR: &str = "MUSEE_MAX_SESSIONS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub bind_addr: SocketAddr,
    /// Interval between SSE keep-alive comments.
    pub sse_keepalive: Duration,
    /// Capacity of the notification broadcast channel. Slow subscribers
    /// lose the oldest notices beyond this.
    pub notification_buffer: usize,
    /// A session untouched for longer than this is discarded.
    pub session_idle_ttl: Duration,
    pub max_sessions: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            sse_keepalive: Duration::from_secs(15),
            notification_buffer: 256,
            session_idle_ttl: Duration::from_secs(30 * 60),
            max_sessions: 10_000,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparsable values are logged and replaced
    /// by their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let session_idle_secs = positive_or(
            &lookup,
            SESSION_IDLE_VAR,
            defaults.session_idle_ttl.as_secs(),
        );

        Self {
            bind_addr: parse_or(&lookup, BIND_ADDR_VAR, defaults.bind_addr),
            sse_keepalive: Duration::from_secs(parse_or(
                &lookup,
                SSE_KEEPALIVE_VAR,
                defaults.sse_keepalive.as_secs(),
            )),
            notification_buffer: positive_or(
                &lookup,
                NOTIFICATION_BUFFER_VAR,
                defaults.notification_buffer,
            ),
            session_idle_ttl: Duration::from_secs(session_idle_secs),
            max_sessions: positive_or(&lookup, MAX_SESSIONS_VAR, defaults.max_sessions),
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(var = key, value = %raw, default = %default, "unparsable value; using default");
                default
            }
        },
    }
}

/// Like [`parse_or`], but zero also falls back to the default.
fn positive_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display + PartialEq + Default + Copy,
{
    let value = parse_or(lookup, key, default);
    if value == T::default() {
        tracing::warn!(var = key, default = %default, "must be positive; using default");
        return default;
    }
    value
}
