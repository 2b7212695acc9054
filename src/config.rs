//! Process configuration
//!
//! Every setting can come from a command-line flag or from the environment
//! (a `.env` file is loaded before parsing). The API key has no default, so
//! startup fails when it is missing.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

use crate::cors::CorsPolicy;
use crate::llm::claude::{ClaudeModel, DEFAULT_BASE_URL};
use crate::llm::{LlmError, Model, ProviderSettings};

#[derive(Debug, Clone, Parser)]
#[command(name = "therapist-gateway", version)]
#[command(about = "Persona chat gateway in front of the Anthropic Messages API")]
pub struct ServerConfig {
    /// Anthropic API key
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub anthropic_api_key: String,

    /// Address or hostname to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5001)]
    pub port: u16,

    /// Verbose logging for this crate
    #[arg(
        long,
        env = "DEBUG",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true"
    )]
    pub debug: bool,

    /// Comma-separated browser origins, or `*` for any
    #[arg(long, env = "ALLOWED_ORIGINS")]
    pub allowed_origins: Option<String>,

    /// Upstream model id
    #[arg(long, env = "ANTHROPIC_MODEL", default_value = "claude-3-5-haiku-20241022")]
    pub model: String,

    /// Upstream API origin
    #[arg(long, env = "ANTHROPIC_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub anthropic_base_url: String,

    /// Upper bound on one upstream call, in seconds
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 60)]
    pub upstream_timeout_secs: u64,
}

impl ServerConfig {
    /// Resolve `host:port` to the first matching address
    pub fn socket_addr(&self) -> io::Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("{} resolves to no address", self.host),
                )
            })
    }

    pub fn cors_policy(&self) -> CorsPolicy {
        match &self.allowed_origins {
            Some(origins) if !origins.trim().is_empty() => CorsPolicy::parse(origins),
            _ => CorsPolicy::default(),
        }
    }

    pub fn upstream_model(&self) -> Result<Model, LlmError> {
        Ok(Model::Claude(self.model.parse::<ClaudeModel>()?))
    }

    pub fn provider_settings(&self) -> ProviderSettings {
        ProviderSettings {
            api_key: self.anthropic_api_key.clone(),
            base_url: self.anthropic_base_url.clone(),
            timeout: Duration::from_secs(self.upstream_timeout_secs),
        }
    }
}
