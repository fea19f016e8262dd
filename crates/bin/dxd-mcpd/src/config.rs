use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4030";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Parser, Debug)]
#[command(name = "dxd-mcpd", version, about = "Dxd MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "DXD_GRAPHQL_ENDPOINT")]
    graphql_endpoint: String,

    #[arg(long, env = "DXD_TOKEN_URL")]
    token_url: Option<String>,

    #[arg(long, env = "DXD_CLIENT_ID")]
    client_id: Option<String>,

    #[arg(long, env = "DXD_CLIENT_SECRET")]
    client_secret: Option<String>,

    #[arg(long, env = "DXD_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,

    #[arg(
        long = "stdio",
        env = "DXD_ENABLE_STDIO",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long,
        env = "DXD_MCP_SERVE",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    mcp_serve: bool,

    #[arg(
        long,
        env = "DXD_REQUEST_TIMEOUT_SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS
    )]
    request_timeout_secs: u64,
}

/// OAuth2 client-credentials settings for the outbound transport.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub token_url: String,
    pub client_id: String,
    pub client_secret: String,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Clone, Debug)]
pub struct DxdConfig {
    pub graphql_endpoint: String,
    pub credentials: Option<Credentials>,
    pub mcp_http_addr: SocketAddr,
    pub enable_stdio: bool,
    pub mcp_serve: bool,
    pub request_timeout: Duration,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingSetting(&'static str),
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSetting(name) => write!(f, "missing required setting: {name}"),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl DxdConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for DxdConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.graphql_endpoint.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "DXD_GRAPHQL_ENDPOINT",
                value: args.graphql_endpoint,
            });
        }

        let token_url = args.token_url.filter(|value| !value.trim().is_empty());
        let client_id = args.client_id.filter(|value| !value.trim().is_empty());
        let client_secret = args.client_secret.filter(|value| !value.trim().is_empty());

        // Credentials are all-or-none; a partial set is a misconfiguration,
        // not an anonymous deployment.
        let credentials = match (token_url, client_id, client_secret) {
            (Some(token_url), Some(client_id), Some(client_secret)) => Some(Credentials {
                token_url,
                client_id,
                client_secret,
            }),
            (None, None, None) => None,
            (None, _, _) => return Err(ConfigError::MissingSetting("DXD_TOKEN_URL")),
            (_, None, _) => return Err(ConfigError::MissingSetting("DXD_CLIENT_ID")),
            (_, _, None) => return Err(ConfigError::MissingSetting("DXD_CLIENT_SECRET")),
        };

        Ok(Self {
            graphql_endpoint: args.graphql_endpoint,
            credentials,
            mcp_http_addr: args.mcp_http_addr,
            enable_stdio: args.enable_stdio,
            mcp_serve: args.mcp_serve,
            request_timeout: Duration::from_secs(args.request_timeout_secs),
        })
    }
}
