use clap::{Parser, ValueEnum};
use snip_gateway::telemetry::LogFormat;
use snip_storage::DEFAULT_REGION;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "SNIP_LISTEN_ADDR";
pub const TABLE_NAME_ENV: &str = "DYNAMODB_TABLE_NAME";
pub const DOMAIN_NAME_ENV: &str = "DOMAIN_NAME";
pub const REGION_ENV: &str = "AWS_REGION";
pub const DYNAMODB_ENDPOINT_URL_ENV: &str = "DYNAMODB_ENDPOINT_URL";
pub const STORAGE_BACKEND_ENV: &str = "SNIP_STORAGE_BACKEND";
pub const READ_TIMEOUT_ENV: &str = "SNIP_READ_TIMEOUT_SECS";
pub const WRITE_TIMEOUT_ENV: &str = "SNIP_WRITE_TIMEOUT_SECS";
pub const LOG_FORMAT_ENV: &str = "SNIP_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "dynamodb")]
    DynamoDb,
    #[value(name = "in-memory")]
    InMemory,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::DynamoDb => write!(f, "dynamodb"),
            StorageBackendArg::InMemory => write!(f, "in-memory"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
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
#[command(name = "snip-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Table holding the short code to URL mappings.
    #[arg(long, env = TABLE_NAME_ENV)]
    pub table_name: String,

    /// Public domain used to build the returned short URLs.
    #[arg(long, env = DOMAIN_NAME_ENV)]
    pub domain_name: String,

    #[arg(long, env = REGION_ENV, default_value = DEFAULT_REGION)]
    pub region: String,

    #[arg(long, env = DYNAMODB_ENDPOINT_URL_ENV)]
    pub dynamodb_endpoint_url: Option<String>,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::DynamoDb
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = READ_TIMEOUT_ENV, default_value_t = 5)]
    pub read_timeout_secs: u64,

    #[arg(long, env = WRITE_TIMEOUT_ENV, default_value_t = 10)]
    pub write_timeout_secs: u64,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CLI, clap::Error> {
        CLI::try_parse_from(std::iter::once("snip-gateway").chain(args.iter().copied()))
    }

    #[test]
    fn required_values_and_defaults() {
        let cli = parse(&["--table-name", "mappings", "--domain-name", "sn.ip"]).unwrap();

        assert_eq!(cli.table_name, "mappings");
        assert_eq!(cli.domain_name, "sn.ip");
        assert_eq!(cli.listen_addr.port(), 8080);
        assert_eq!(cli.storage, StorageBackendArg::DynamoDb);
        assert_eq!(cli.read_timeout_secs, 5);
        assert_eq!(cli.write_timeout_secs, 10);
        assert_eq!(cli.dynamodb_endpoint_url, None);
    }

    #[test]
    fn missing_domain_name_is_an_error() {
        assert!(parse(&["--table-name", "mappings"]).is_err());
    }

    #[test]
    fn missing_table_name_is_an_error() {
        assert!(parse(&["--domain-name", "sn.ip"]).is_err());
    }

    #[test]
    fn storage_backend_can_be_selected() {
        let cli = parse(&[
            "--table-name",
            "mappings",
            "--domain-name",
            "sn.ip",
            "--storage",
            "in-memory",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.storage, StorageBackendArg::InMemory);
        assert_eq!(cli.log_format, LogFormatArg::Json);
    }
}
