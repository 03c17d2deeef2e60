use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4030";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "scad-mcpd", version, about = "OpenSCAD MCP daemon.")]
struct CliArgs {
    /// Directory the file tools operate in. Defaults to the process working
    /// directory.
    #[arg(long, env = "SCAD_WORKDIR")]
    workdir: Option<PathBuf>,

    #[arg(
        long = "stdio",
        env = "SCAD_ENABLE_STDIO",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long,
        env = "SCAD_HTTP_SERVE",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    http_serve: bool,

    #[arg(long, env = "SCAD_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,

    #[arg(long, env = "SCAD_LOG", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Clone)]
pub struct ScadConfig {
    pub workdir: Option<PathBuf>,
    pub enable_stdio: bool,
    pub http_serve: bool,
    pub mcp_http_addr: SocketAddr,
    pub log_filter: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSetting { name: &'static str, value: String },
    NoTransportEnabled,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
            Self::NoTransportEnabled => {
                write!(f, "no transport enabled: pass --stdio or --http-serve")
            }
        }
    }
}

impl Error for ConfigError {}

impl ScadConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for ScadConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if !args.enable_stdio && !args.http_serve {
            return Err(ConfigError::NoTransportEnabled);
        }

        if let Some(workdir) = &args.workdir {
            if workdir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidSetting {
                    name: "SCAD_WORKDIR",
                    value: workdir.display().to_string(),
                });
            }
        }

        let log_filter = if args.log_filter.trim().is_empty() {
            DEFAULT_LOG_FILTER.to_string()
        } else {
            args.log_filter
        };

        Ok(Self {
            workdir: args.workdir,
            enable_stdio: args.enable_stdio,
            http_serve: args.http_serve,
            mcp_http_addr: args.mcp_http_addr,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            workdir: None,
            enable_stdio: true,
            http_serve: false,
            mcp_http_addr: DEFAULT_MCP_HTTP_ADDR.parse().expect("valid MCP addr"),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    #[test]
    fn rejects_configuration_with_no_transport() {
        let mut args = base_args();
        args.enable_stdio = false;
        args.http_serve = false;

        assert!(matches!(
            ScadConfig::try_from(args),
            Err(ConfigError::NoTransportEnabled)
        ));
    }

    #[test]
    fn rejects_blank_workdir() {
        let mut args = base_args();
        args.workdir = Some(PathBuf::new());

        assert!(matches!(
            ScadConfig::try_from(args),
            Err(ConfigError::InvalidSetting { name: "SCAD_WORKDIR", .. })
        ));
    }

    #[test]
    fn blank_log_filter_falls_back_to_default() {
        let mut args = base_args();
        args.log_filter = "   ".to_string();

        let config = ScadConfig::try_from(args).expect("config should parse");
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
