use clap::Parser;
use std::path::PathBuf;

/// Command line arguments for the event pipeline server
#[derive(Parser, Debug, Clone)]
#[command(name = "eventpipe-server", about = "Event ingestion and processing service")]
pub struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the server bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_args_defaults() {
        let actual = Args::parse_from(["eventpipe-server"]);
        assert_eq!(actual.config, None);
        assert_eq!(actual.host, None);
        assert_eq!(actual.port, None);
        assert_eq!(actual.log_level, None);
    }

    #[test]
    fn test_args_overrides() {
        let actual = Args::parse_from([
            "eventpipe-server",
            "--config",
            "eventpipe.toml",
            "--host",
            "127.0.0.1",
            "--port",
            "9090",
            "--log-level",
            "debug",
        ]);
        assert_eq!(actual.config, Some(PathBuf::from("eventpipe.toml")));
        assert_eq!(actual.host, Some("127.0.0.1".to_string()));
        assert_eq!(actual.port, Some(9090));
        assert_eq!(actual.log_level, Some("debug".to_string()));
    }
}
