//! CLI definitions for Pictora.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ImageApiConfig;

/// Pictora image CLI
#[derive(Parser, Debug)]
#[command(name = "pictora", version, about = "Pictora: turn text into an image")]
pub struct Cli {
    /// Message locale (en, zh-CN). Defaults to PICTORA_LOCALE / LANG.
    #[arg(long, global = true)]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an image from text
    Generate(GenerateArgs),
    /// Show the resolved image API configuration
    Config(ConfigArgs),
}

/// Endpoint overrides shared by every subcommand.
#[derive(Parser, Debug, Default)]
pub struct EndpointArgs {
    /// Base URL of the chat-completions API
    #[arg(long)]
    pub base_url: Option<String>,

    /// API key sent as a Bearer token
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Model name
    #[arg(short, long)]
    pub model: Option<String>,

    /// Config file (defaults to ~/.pictora/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl EndpointArgs {
    /// Flags layered over env and the config file.
    pub fn resolve(&self) -> crate::error::Result<ImageApiConfig> {
        let path = self
            .config
            .clone()
            .unwrap_or_else(ImageApiConfig::default_path);
        let flags = ImageApiConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            model_name: self.model.clone(),
        };
        Ok(flags
            .merge(ImageApiConfig::from_env())
            .merge(ImageApiConfig::from_file(&path)?))
    }
}

/// Arguments for `pictora generate`.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub endpoint: EndpointArgs,

    /// Write the decoded image here instead of printing the data URI
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Give up after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Text to illustrate (read from stdin when omitted)
    pub content: Option<String>,
}

/// Arguments for `pictora config`.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub endpoint: EndpointArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_with_defaults() {
        let cli = Cli::try_parse_from(["pictora", "generate"]).unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert!(args.content.is_none());
                assert!(args.output.is_none());
                assert!(args.timeout_secs.is_none());
                assert!(args.endpoint.base_url.is_none());
                assert!(args.endpoint.api_key.is_none());
                assert!(args.endpoint.model.is_none());
            }
            other => panic!("expected Generate, got {other:?}"),
        }
        assert!(cli.locale.is_none());
    }

    #[test]
    fn parse_generate_with_all_options() {
        let cli = Cli::try_parse_from([
            "pictora",
            "generate",
            "--base-url",
            "https://api.example.com/v1",
            "-k",
            "sk-test",
            "-m",
            "img-model",
            "-o",
            "out.png",
            "--timeout-secs",
            "90",
            "--locale",
            "zh-CN",
            "A lighthouse at dusk",
        ])
        .unwrap();
        assert_eq!(cli.locale.as_deref(), Some("zh-CN"));
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.endpoint.base_url.as_deref(), Some("https://api.example.com/v1"));
                assert_eq!(args.endpoint.api_key.as_deref(), Some("sk-test"));
                assert_eq!(args.endpoint.model.as_deref(), Some("img-model"));
                assert_eq!(args.output, Some(PathBuf::from("out.png")));
                assert_eq!(args.timeout_secs, Some(90));
                assert_eq!(args.content.as_deref(), Some("A lighthouse at dusk"));
            }
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn parse_config_subcommand() {
        let cli = Cli::try_parse_from(["pictora", "config", "--config", "/tmp/p.toml"]).unwrap();
        match cli.command {
            Commands::Config(args) => {
                assert_eq!(args.endpoint.config, Some(PathBuf::from("/tmp/p.toml")));
            }
            other => panic!("expected Config, got {other:?}"),
        }
    }

    #[test]
    fn parse_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["pictora"]).is_err());
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[image_api]\nbase_url = \"https://file.example\"\napi_key = \"file-key\"\nmodel_name = \"file-model\"\n",
        )
        .unwrap();

        let args = EndpointArgs {
            base_url: Some("https://flag.example".to_string()),
            model: Some("flag-model".to_string()),
            config: Some(path),
            ..Default::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://flag.example"));
        assert_eq!(config.model_name.as_deref(), Some("flag-model"));
        assert!(config.api_key.is_some());
    }
}
