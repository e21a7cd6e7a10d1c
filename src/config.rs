//! Process configuration from flags and environment variables.

use std::net::SocketAddr;

use clap::{Parser, ValueEnum};

use crate::problem::Environment;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "posts-pipeline", version, about = "Filter vs. pipeline request validation for a posts API")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "POSTS_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// `development` exposes internal error details in problem responses.
    #[arg(long, env = "APP_ENVIRONMENT", default_value = "production")]
    pub environment: Environment,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Config {
    pub fn load() -> Self {
        Self::parse()
    }
}
