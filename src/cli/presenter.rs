//! Terminal output formatting

use std::time::Duration;

use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

const SPINNER_TICK: Duration = Duration::from_millis(80);

/// Formats terminal output for a run.
///
/// Status and progress go to stderr so that transcripts, minutes, and
/// config values on stdout stay pipeable.
#[derive(Default)]
pub struct Presenter {
    step: Option<ProgressBar>,
}

impl Presenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin an animated step line on stderr.
    pub fn begin_step(&mut self, message: &str) {
        let bar = ProgressBar::new_spinner().with_message(message.to_string());
        let style = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}");
        if let Ok(style) = style {
            bar.set_style(style);
        }
        bar.enable_steady_tick(SPINNER_TICK);
        self.step = Some(bar);
    }

    /// Replace the message on the active step line.
    pub fn step_update(&self, message: &str) {
        if let Some(bar) = &self.step {
            bar.set_message(message.to_string());
        }
    }

    /// Finish the active step line with a success mark.
    pub fn end_step_ok(&mut self, message: &str) {
        self.end_step("✓".green(), message);
    }

    /// Finish the active step line with a failure mark.
    pub fn end_step_err(&mut self, message: &str) {
        self.end_step("✗".red(), message);
    }

    fn end_step(&mut self, mark: ColoredString, message: &str) {
        if let Some(bar) = self.step.take() {
            bar.finish_with_message(format!("{} {}", mark, message));
        }
    }

    pub fn success(&self, message: &str) {
        self.status("✓".green(), message);
    }

    pub fn warn(&self, message: &str) {
        self.status("⚠".yellow(), message);
    }

    pub fn error(&self, message: &str) {
        self.status("✗".red(), message);
    }

    fn status(&self, mark: ColoredString, message: &str) {
        eprintln!("{} {}", mark, message);
    }

    /// Plain line on stdout (transcripts, config values).
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Titled block on stdout: heading, body, trailing blank line.
    pub fn section(&self, title: &str, text: &str) {
        println!("{}", title.cyan().bold());
        println!("{}", text);
        println!();
    }

    /// `key: value` line on stdout (config list).
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}
