//! `inline-notes`: replaces links in a markdown note with the notes they
//! point at.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use inline_notes_config::Config;
use log::LevelFilter;

mod commands;

use commands::{Session, Write};

#[derive(Parser, Debug)]
#[command(name = "inline-notes")]
#[command(about = "Inline linked markdown notes into the notes that reference them")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Notes folder (vault root); defaults to `notes_path` from the config file
    #[arg(long, global = true)]
    notes: Option<PathBuf>,

    /// Config file to use instead of ~/.config/inline-notes/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the resulting note instead of writing it back
    #[arg(long, global = true)]
    dry_run: bool,

    /// Raise the log level (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Inline the link under a cursor position
    Cursor {
        /// Note path or name, resolved from the vault root
        note: String,
        /// Cursor line, 1-based
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        line: u64,
        /// Cursor column in characters, 1-based
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        col: u64,
    },
    /// Inline every link in a note once
    All {
        note: String,
        /// Prefix the provenance tags with a backslash
        #[arg(long)]
        escape_tags: bool,
    },
    /// Inline links, then the links the inlined notes bring in
    Recursive {
        note: String,
        /// Maximum number of passes
        #[arg(long)]
        max_iterations: Option<usize>,
    },
    /// List the links in a note and whether they resolve
    Links { note: String },
    /// Show or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Print the active configuration
    Show,
    /// Write a config file pointing at a notes folder
    Init {
        notes_path: PathBuf,
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn init_logging(verbose: u8) {
    env_logger::Builder::from_default_env()
        .filter_level(log_level(verbose))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from_path(&config_path)
        .with_context(|| format!("Failed to load config file {}", config_path.display()))?;

    let dry_run = cli.dry_run;
    let notes = cli.notes;
    let open_session = |config: Option<Config>| -> Result<Session> {
        let notes_path = match (notes, &config) {
            (Some(path), _) => path,
            (None, Some(config)) => config.notes_path.clone(),
            (None, None) => bail!(
                "No notes folder given. Pass --notes <PATH> or create {} with `inline-notes config init <PATH>`",
                config_path.display()
            ),
        };
        let settings = config.map(|c| c.inline).unwrap_or_default();
        let write = if dry_run { Write::Stdout } else { Write::InPlace };
        Session::open(&notes_path, settings, write)
            .with_context(|| format!("Notes path '{}' is invalid", notes_path.display()))
    };

    let output = match cli.command {
        Commands::Config { command } => return run_config(&command, config, &config_path),
        Commands::Cursor { note, line, col } => {
            open_session(config)?.cursor(&note, line as usize, col as usize)?
        }
        Commands::All { note, escape_tags } => open_session(config)?.all(&note, escape_tags)?,
        Commands::Recursive {
            note,
            max_iterations,
        } => open_session(config)?.recursive(&note, max_iterations)?,
        Commands::Links { note } => open_session(config)?.links(&note)?,
    };
    print!("{output}");
    Ok(())
}

fn run_config(
    command: &ConfigCommands,
    config: Option<Config>,
    config_path: &Path,
) -> Result<()> {
    match command {
        ConfigCommands::Show => match config {
            Some(config) => {
                println!("# {}", config_path.display());
                print!("{}", config.to_toml()?);
            }
            None => println!("No config file at {}", config_path.display()),
        },
        ConfigCommands::Init { notes_path, force } => {
            if config.is_some() && !force {
                bail!(
                    "Config file {} already exists; pass --force to overwrite",
                    config_path.display()
                );
            }
            Config::new(notes_path.clone())
                .save_to_path(config_path)
                .with_context(|| format!("Failed to write {}", config_path.display()))?;
            println!("Wrote {}", config_path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_cursor_arguments() {
        let cli = Cli::try_parse_from([
            "inline-notes",
            "cursor",
            "daily",
            "--line",
            "3",
            "--col",
            "12",
        ])
        .unwrap();

        match cli.command {
            Commands::Cursor { note, line, col } => {
                assert_eq!(note, "daily");
                assert_eq!(line, 3);
                assert_eq!(col, 12);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cursor_rejects_zero_line() {
        let result = Cli::try_parse_from([
            "inline-notes",
            "cursor",
            "daily",
            "--line",
            "0",
            "--col",
            "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "inline-notes",
            "all",
            "daily.md",
            "--escape-tags",
            "--notes",
            "/tmp/vault",
            "--dry-run",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.notes, Some(PathBuf::from("/tmp/vault")));
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Commands::All {
                escape_tags: true,
                ..
            }
        ));
    }

    #[test]
    fn test_recursive_max_iterations_is_optional() {
        let cli = Cli::try_parse_from(["inline-notes", "recursive", "daily"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Recursive {
                max_iterations: None,
                ..
            }
        ));

        let cli = Cli::try_parse_from([
            "inline-notes",
            "recursive",
            "daily",
            "--max-iterations",
            "0",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Recursive {
                max_iterations: Some(0),
                ..
            }
        ));
    }

    #[test]
    fn test_config_init_arguments() {
        let cli =
            Cli::try_parse_from(["inline-notes", "config", "init", "~/notes", "--force"]).unwrap();
        match cli.command {
            Commands::Config {
                command: ConfigCommands::Init { notes_path, force },
            } => {
                assert_eq!(notes_path, PathBuf::from("~/notes"));
                assert!(force);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["inline-notes"]).is_err());
    }

    #[rstest]
    #[case(0, LevelFilter::Warn)]
    #[case(1, LevelFilter::Info)]
    #[case(2, LevelFilter::Debug)]
    #[case(5, LevelFilter::Debug)]
    fn test_log_level(#[case] verbose: u8, #[case] expected: LevelFilter) {
        assert_eq!(log_level(verbose), expected);
    }
}
