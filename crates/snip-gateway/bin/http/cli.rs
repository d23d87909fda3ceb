use clap::builder::TypedValueParser;
use clap::{Parser, ValueEnum};
use snip_core::DEFAULT_MAX_ATTEMPTS;
use snip_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "SNIP_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "SNIP_PUBLIC_BASE_URL";
pub const MAX_ATTEMPTS_ENV: &str = "SNIP_MAX_ATTEMPTS";
pub const SWEEP_INTERVAL_ENV: &str = "SNIP_SWEEP_INTERVAL_SECS";
pub const LOG_FORMAT_ENV: &str = "SNIP_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Text => write!(f, "text"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "snip", about = "A minimal in-memory URL shortener")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Base of every returned `short_url`; derived from the `Host` header when unset.
    #[arg(long, env = PUBLIC_BASE_URL_ENV)]
    pub public_base_url: Option<String>,

    /// Random candidates tried before code generation gives up.
    #[arg(
        long,
        env = MAX_ATTEMPTS_ENV,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from),
    )]
    pub max_attempts: usize,

    /// Interval of the background sweep of expired links; disabled when unset.
    #[arg(long, env = SWEEP_INTERVAL_ENV, value_parser = clap::value_parser!(u64).range(1..))]
    pub sweep_interval_secs: Option<u64>,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = CLI::try_parse_from(["snip"]).unwrap();
        assert_eq!(cli.listen_addr, DEFAULT_LISTEN_ADDR.parse().unwrap());
        assert_eq!(cli.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(cli.sweep_interval_secs, None);
        assert_eq!(cli.public_base_url, None);
        assert_eq!(cli.log_format, LogFormatArg::Text);
    }

    #[test]
    fn zero_attempts_rejected() {
        assert!(CLI::try_parse_from(["snip", "--max-attempts", "0"]).is_err());
    }

    #[test]
    fn explicit_values() {
        let cli = CLI::try_parse_from([
            "snip",
            "--listen-addr",
            "0.0.0.0:9000",
            "--public-base-url",
            "https://sn.ip",
            "--sweep-interval-secs",
            "60",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.listen_addr.port(), 9000);
        assert_eq!(cli.public_base_url.as_deref(), Some("https://sn.ip"));
        assert_eq!(cli.sweep_interval_secs, Some(60));
        assert_eq!(LogFormat::from(cli.log_format), LogFormat::Json);
    }
}
