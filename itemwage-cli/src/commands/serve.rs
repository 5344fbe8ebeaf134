//! HTTP server command
//!
//! Resolves configuration once, opens the item store and runs the server
//! until Ctrl+C / SIGTERM.

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use itemwage_core::ItemwageConfig;
use itemwage_server::db::{create_pool_with_options, migrations};
use itemwage_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// TOML config file (wage constants, server, database)
    #[arg(long, short = 'c', env = "ITEMWAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Host to bind to (default: 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (default: 8000)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Database URL (overrides config)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Build the effective config: file (or defaults), then flag overrides.
pub fn resolve_config(args: &ServeArgs) -> Result<ItemwageConfig> {
    let mut config = match &args.config {
        Some(path) => ItemwageConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ItemwageConfig::default(),
    };

    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(url) = &args.database_url {
        config.database.url = url.clone();
    }

    Ok(config)
}

fn bind_addr(host: &str, port: u16) -> Result<SocketAddr> {
    (host, port)
        .to_socket_addrs()
        .with_context(|| format!("Invalid bind address {}:{}", host, port))?
        .next()
        .with_context(|| format!("No address found for {}:{}", host, port))
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let bind_addr = bind_addr(&config.server.host, config.server.port)?;

    tracing::info!(
        database = %config.database.url,
        "Starting itemwage server on {}",
        bind_addr
    );

    let pool = create_pool_with_options(&config.database.url, config.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to prepare items table")?;

    let server_config = ServerConfig {
        bind_addr,
        cors_permissive: config.server.cors_permissive,
        wage: config.wage,
    };

    // Run server (blocks until shutdown)
    run_server(pool, server_config)
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemwage_core::ExperiencePolicy;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args(config: Option<PathBuf>) -> ServeArgs {
        ServeArgs {
            config,
            host: None,
            port: None,
            database_url: None,
        }
    }

    #[test]
    fn defaults_without_file() {
        let config = resolve_config(&args(None)).unwrap();
        assert_eq!(config, ItemwageConfig::default());
    }

    #[test]
    fn flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[wage]\nexperience_policy = \"reject\"\n[server]\nport = 9000"
        )
        .unwrap();

        let mut serve_args = args(Some(file.path().to_path_buf()));
        serve_args.port = Some(9001);
        serve_args.host = Some("127.0.0.1".to_string());

        let config = resolve_config(&serve_args).unwrap();
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.wage.experience_policy, ExperiencePolicy::Reject);
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = resolve_config(&args(Some(PathBuf::from("/nonexistent/itemwage.toml"))))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn bind_addr_parses_ip_hosts() {
        let addr = bind_addr("0.0.0.0", 8000).unwrap();
        assert_eq!(addr, SocketAddr::from(([0, 0, 0, 0], 8000)));
    }
}
