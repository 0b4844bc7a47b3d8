//! MinuteTaker CLI entry point

use std::process::ExitCode;

use clap::Parser;

use minute_taker::cli::{
    app::{load_merged_config, run_process, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, ProcessOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use minute_taker::domain::config::AppConfig;
use minute_taker::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    if cli.files.is_empty() {
        presenter.error("No input files. Pass at least one audio/video recording to process.");
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        api_key: None, // API key comes from env/file only
        chat_model: cli.model.clone(),
        transcription_model: cli.stt_model.clone(),
        api_base: cli.api_base.clone(),
        export_path: cli
            .export
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned()),
        file_summaries: if cli.file_summaries { Some(true) } else { None },
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let options = ProcessOptions {
        files: cli.files,
        export: config.export_path.as_deref().map(Into::into),
        file_summaries: config.file_summaries_or_default(),
        chat_model: config.chat_model_or_default().to_string(),
        transcription_model: config.transcription_model_or_default().to_string(),
        api_base: config.api_base_or_default().to_string(),
    };

    run_process(options).await
}
