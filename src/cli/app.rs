//! Main app runner for a processing run

use std::env;
use std::process::ExitCode;

use colored::*;
use thiserror::Error;
use tokio::fs;

use crate::application::ports::{ConfigStore, ExportError, MinutesExporter};
use crate::application::{ProcessCallbacks, ProcessError, ProcessFilesUseCase, ProcessInput};
use crate::domain::config::AppConfig;
use crate::domain::media::UploadedMedia;
use crate::domain::minutes::{section_title, TranscriptRecord};
use crate::domain::run::{InvalidStateTransition, RunSession};
use crate::infrastructure::{ChatExtractor, MarkdownExporter, WhisperTranscriber, XdgConfigStore};

use super::args::ProcessOptions;
use super::presenter::Presenter;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Errors from the end-to-end run
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error(transparent)]
    State(#[from] InvalidStateTransition),
}

/// Run the full processing pipeline
pub async fn run_process(options: ProcessOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    let Some(api_key) = resolve_api_key().await else {
        presenter.error(
            "Missing API key. Set OPENAI_API_KEY or run 'minute-taker config set api_key <key>'",
        );
        return ExitCode::from(EXIT_ERROR);
    };

    let mut session = RunSession::new();

    match execute_run(&options, &api_key, &mut session, &mut presenter).await {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            // Surface one generic error; the session stays reusable
            let _ = session.fail();
            presenter.error(&format!("Error: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Drive one run through its states: upload, process, display, export
async fn execute_run(
    options: &ProcessOptions,
    api_key: &str,
    session: &mut RunSession,
    presenter: &mut Presenter,
) -> Result<(), RunError> {
    session.begin_upload()?;

    presenter.begin_step("Reading uploads...");
    let mut files = Vec::with_capacity(options.files.len());
    for path in &options.files {
        presenter.step_update(&format!("Reading {}...", path.display()));

        let data = match fs::read(path).await {
            Ok(data) => data,
            Err(e) => {
                presenter.end_step_err("Upload failed");
                return Err(RunError::ReadFailed {
                    path: path.display().to_string(),
                    message: e.to_string(),
                });
            }
        };

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        files.push(UploadedMedia::new(filename, data));
    }
    presenter.end_step_ok(&format!("Read {} file(s)", files.len()));

    for media in &files {
        if media.exceeds_soft_limit() {
            presenter.warn(&format!(
                "{} is {} (over the 25MB upload limit); the API may reject it",
                media.filename(),
                media.human_readable_size()
            ));
        }
    }

    session.begin_processing()?;

    let transcriber = WhisperTranscriber::with_model(api_key, &options.transcription_model)
        .with_base_url(&options.api_base);
    let extractor =
        ChatExtractor::with_model(api_key, &options.chat_model).with_base_url(&options.api_base);
    let use_case = ProcessFilesUseCase::new(transcriber, extractor);

    let input = ProcessInput {
        files,
        per_file_summaries: options.file_summaries,
    };

    // Display transcripts and summaries as soon as they are available
    let callbacks = ProcessCallbacks {
        on_file_start: Some(Box::new(|name: &str| {
            eprintln!("{} Transcribing {}...", "⠋".cyan(), name);
        })),
        on_transcript: Some(Box::new(|record: &TranscriptRecord| {
            println!(
                "{}",
                format!("Transcript for {}:", record.filename()).cyan().bold()
            );
            println!("{}\n", record.text());
        })),
        on_file_summary: Some(Box::new(|name: &str, summary: &str| {
            println!("{}", format!("Summary for {}:", name).cyan().bold());
            println!("{}\n", summary);
        })),
        on_assembly_start: Some(Box::new(|| {
            eprintln!("{} Assembling minutes...", "⠋".cyan());
        })),
    };

    let output = use_case.execute(input, callbacks).await?;

    session.complete()?;

    // Display the assembled minutes
    for (field_name, text) in output.minutes.sections() {
        presenter.section(&format!("{}:", section_title(field_name)), text);
    }

    // Export if requested
    if let Some(ref destination) = options.export {
        let exporter = MarkdownExporter::new();
        exporter.export(&output.minutes, destination).await?;
        presenter.success(&format!("Minutes exported to {}", destination.display()));
    }

    Ok(())
}

/// Environment variable wins over the config file.
async fn resolve_api_key() -> Option<String> {
    if let Some(key) = env_api_key() {
        return Some(key);
    }

    let store = XdgConfigStore::new();
    match store.load().await {
        Ok(config) => config.api_key,
        Err(_) => None,
    }
}

fn env_api_key() -> Option<String> {
    env::var("OPENAI_API_KEY").ok().filter(|key| !key.is_empty())
}

/// Precedence, lowest to highest: defaults, config file, environment, CLI flags.
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());
    let env_config = AppConfig {
        api_key: env_api_key(),
        ..AppConfig::empty()
    };

    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
