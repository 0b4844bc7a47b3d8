//! Command-line argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// MinuteTaker - AI-powered meeting transcription and minutes
#[derive(Parser, Debug)]
#[command(name = "minute-taker")]
#[command(version)]
#[command(about = "AI-powered meeting transcription and minutes using OpenAI")]
#[command(long_about = None)]
pub struct Cli {
    /// Meeting recordings to process, in upload order (soft limit 25MB per file)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Export the assembled minutes to a Markdown document
    #[arg(short = 'e', long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Also produce an abstract summary per file
    #[arg(long)]
    pub file_summaries: bool,

    /// Chat completion model for extraction
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Speech-to-text model for transcription
    #[arg(long, value_name = "MODEL")]
    pub stt_model: Option<String>,

    /// API base URL (any OpenAI-compatible endpoint)
    #[arg(long, value_name = "URL", env = "MINUTE_TAKER_API_BASE")]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect and edit the stored configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions under the `config` subcommand.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a fresh config file with defaults
    Init,
    /// Store a value under a key
    Set { key: String, value: String },
    /// Print the stored value of a key
    Get { key: String },
    /// Print every key with its stored value
    List,
    /// Print the config file location
    Path,
}

/// Settings for a processing run after config merging.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub files: Vec<PathBuf>,
    pub export: Option<PathBuf>,
    pub file_summaries: bool,
    pub chat_model: String,
    pub transcription_model: String,
    pub api_base: String,
}

/// Keys accepted by `config set` and `config get`.
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "chat_model",
    "transcription_model",
    "api_base",
    "export_path",
    "file_summaries",
];

pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn bare_invocation_parses_with_no_files() {
        let cli = Cli::parse_from(["minute-taker"]);
        assert!(cli.files.is_empty());
        assert!(cli.export.is_none());
        assert!(!cli.file_summaries);
        assert!(cli.model.is_none());
        assert!(cli.stt_model.is_none());
    }

    #[test]
    fn positional_files_keep_their_order() {
        let cli = Cli::parse_from(["minute-taker", "a.mp3", "b.wav", "c.mp4"]);
        assert_eq!(
            cli.files,
            vec![
                PathBuf::from("a.mp3"),
                PathBuf::from("b.wav"),
                PathBuf::from("c.mp4")
            ]
        );
    }

    #[test]
    fn export_flag_takes_a_path() {
        let cli = Cli::parse_from(["minute-taker", "a.mp3", "-e", "minutes.md"]);
        assert_eq!(cli.export, Some(PathBuf::from("minutes.md")));
    }

    #[test]
    fn file_summaries_flag_defaults_off() {
        let cli = Cli::parse_from(["minute-taker", "a.mp3", "--file-summaries"]);
        assert!(cli.file_summaries);
    }

    #[test]
    fn model_overrides_parse() {
        let cli = Cli::parse_from([
            "minute-taker",
            "a.mp3",
            "-m",
            "gpt-4o",
            "--stt-model",
            "gpt-4o-transcribe",
        ]);
        assert_eq!(cli.model.as_deref(), Some("gpt-4o"));
        assert_eq!(cli.stt_model.as_deref(), Some("gpt-4o-transcribe"));
    }

    #[test]
    fn api_base_override_parses() {
        let cli =
            Cli::parse_from(["minute-taker", "a.mp3", "--api-base", "http://localhost:1/v1"]);
        assert_eq!(cli.api_base.as_deref(), Some("http://localhost:1/v1"));
    }

    #[test]
    fn config_init_action_parses() {
        let cli = Cli::parse_from(["minute-taker", "config", "init"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Init
            })
        ));
    }

    #[test]
    fn config_set_action_carries_key_and_value() {
        let cli = Cli::parse_from(["minute-taker", "config", "set", "chat_model", "gpt-4o"]);
        match cli.command {
            Some(Commands::Config {
                action: ConfigAction::Set { key, value },
            }) => {
                assert_eq!(key, "chat_model");
                assert_eq!(value, "gpt-4o");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn config_key_allowlist() {
        for key in VALID_CONFIG_KEYS {
            assert!(is_valid_config_key(key));
        }
        assert!(!is_valid_config_key("invalid_key"));
        assert!(!is_valid_config_key(""));
    }

    #[test]
    fn clap_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
