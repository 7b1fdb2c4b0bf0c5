use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Terminal storefront for redeeming Dicoding rewards.
#[derive(Debug, Parser)]
#[command(name = "jetreward", version, about)]
pub struct Cli {
    /// Config file (default: <config_dir>/jetreward/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Route to open after start, e.g. "cart" or "detailreward/3"
    #[arg(long, value_name = "ROUTE")]
    pub open: Option<String>,

    /// Write logs to this file instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Make every reward fetch fail with this message
    #[arg(long, value_name = "MESSAGE")]
    pub fail_fetch: Option<String>,

    /// Offer "save to outbox" in the share chooser, writing to this file
    #[arg(long, value_name = "PATH")]
    pub outbox: Option<PathBuf>,
}

impl Cli {
    /// Fold command-line overrides into a loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if let Some(message) = &self.fail_fetch {
            config.data.fail_with = Some(message.clone());
        }
        if let Some(path) = &self.outbox {
            config.share.outbox = Some(path.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let cli = Cli::try_parse_from(["jetreward"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.open.is_none());
    }

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::try_parse_from([
            "jetreward",
            "--fail-fetch",
            "offline",
            "--outbox",
            "/tmp/outbox.jsonl",
            "--log-file",
            "/tmp/jetreward.log",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.data.fail_with.as_deref(), Some("offline"));
        assert_eq!(config.share.outbox, Some(PathBuf::from("/tmp/outbox.jsonl")));
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/jetreward.log")));
    }

    #[test]
    fn open_takes_a_route() {
        let cli = Cli::try_parse_from(["jetreward", "--open", "detailreward/2"]).unwrap();
        assert_eq!(cli.open.as_deref(), Some("detailreward/2"));
    }
}
