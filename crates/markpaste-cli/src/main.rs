// Command-line transport for the markpaste engine.
//
// Reads markdown from a file or stdin, assembles conversion options from
// the config file plus command-line overrides, and writes the HTML to
// stdout or a file. Warnings go to stderr one per line so the HTML stream
// stays clean; `--stats` adds a JSON statistics record on stderr.

use anyhow::{Context, Result};
use clap::Parser;
use markpaste_config::Config;
use markpaste_engine::{ConversionOptions, convert};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "markpaste", version, about = "Convert markdown to comment-ready HTML")]
struct Cli {
    /// Input markdown file; reads stdin when absent or `-`.
    input: Option<PathBuf>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print conversion statistics as JSON on stderr.
    #[arg(long)]
    stats: bool,

    /// Skip the output whitelist filter.
    #[arg(long)]
    no_sanitize: bool,

    /// Keep @mentions and ISSUE-123 tokens as literal text.
    #[arg(long)]
    preserve_jira_links: bool,

    /// Maximum list/blockquote nesting depth.
    #[arg(long)]
    max_nesting: Option<usize>,

    /// Maximum accepted input size in bytes.
    #[arg(long)]
    max_input_length: Option<usize>,

    /// Config file path (default: ~/.config/markpaste/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let markdown = read_input(cli.input.as_deref())?;
    let options = build_options(&cli)?;

    let result = convert(&markdown, &options).context("conversion failed")?;

    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }
    if cli.stats {
        eprintln!("{}", serde_json::to_string_pretty(&result.stats)?);
    }

    match &cli.output {
        Some(path) => std::fs::write(path, &result.html)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", result.html),
    }
    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            std::fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Defaults, then config file overrides, then command-line overrides.
fn build_options(cli: &Cli) -> Result<ConversionOptions> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    let mut options = ConversionOptions::default();
    if let Some(config) = config {
        config.apply(&mut options);
    }

    if cli.no_sanitize {
        options.sanitize_html = false;
    }
    if cli.preserve_jira_links {
        options.preserve_jira_links = true;
    }
    if let Some(v) = cli.max_nesting {
        options.max_nesting_level = v;
    }
    if let Some(v) = cli.max_input_length {
        options.max_input_length = v;
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("markpaste").chain(args.iter().copied()))
    }

    #[test]
    fn flags_override_defaults() {
        // Point at a missing config file so the user's real one is ignored.
        let c = cli(&[
            "--config",
            "/nonexistent/markpaste.toml",
            "--no-sanitize",
            "--preserve-jira-links",
            "--max-nesting",
            "3",
        ]);
        let opts = build_options(&c).unwrap();
        assert!(!opts.sanitize_html);
        assert!(opts.preserve_jira_links);
        assert_eq!(opts.max_nesting_level, 3);
    }

    #[test]
    fn config_file_feeds_options() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_input_length = 42\n").unwrap();

        let c = cli(&["--config", path.to_str().unwrap()]);
        let opts = build_options(&c).unwrap();
        assert_eq!(opts.max_input_length, 42);
    }

    #[test]
    fn cli_flag_beats_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_nesting_level = 4\n").unwrap();

        let c = cli(&["--config", path.to_str().unwrap(), "--max-nesting", "7"]);
        let opts = build_options(&c).unwrap();
        assert_eq!(opts.max_nesting_level, 7);
    }
}
