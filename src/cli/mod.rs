//! CLI module for the user CRUD API

pub mod serve;

use clap::{Parser, Subcommand};

/// User CRUD API - in-memory user management over HTTP
#[derive(Parser)]
#[command(name = "user-crud-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "user-crud-api",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "3000",
        ])
        .unwrap();

        let Command::Serve(args) = cli.command;
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(3000));
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["user-crud-api", "serve"]).unwrap();

        let Command::Serve(args) = cli.command;
        assert!(args.host.is_none());
        assert!(args.port.is_none());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["user-crud-api"]).is_err());
    }
}
