//! Hua Dict - Main entrypoint.
//!
//! Loads configuration, initializes logging, builds a dictionary from a word
//! list and answers a single query against it.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use hua_dict_lib::config::{self, ConfigLoader, HuaConfig};
use hua_dict_lib::error::{report_error, ErrorContext, HuaError};
use hua_dict_lib::loader::build_dictionary;
use hua_dict_lib::logging::init_logging;
use tracing::info;

/// Command line arguments for Hua Dict.
#[derive(Parser, Debug)]
#[clap(name = "Hua Dict", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print dictionary statistics
    Stats {
        /// Word list to load (defaults to dictionary.word_list)
        #[clap(short, long, value_parser)]
        words: Option<PathBuf>,

        /// Print statistics as JSON
        #[clap(long)]
        json: bool,
    },

    /// Look up a word and print its frequency
    Lookup {
        /// Word list to load (defaults to dictionary.word_list)
        #[clap(short, long, value_parser)]
        words: Option<PathBuf>,

        /// Word to look up
        word: String,
    },

    /// Print the best completion of a prefix
    Complete {
        /// Word list to load (defaults to dictionary.word_list)
        #[clap(short, long, value_parser)]
        words: Option<PathBuf>,

        /// Prefix to complete
        prefix: String,
    },

    /// Print the trie distance between two words
    Distance {
        /// Word list to load (defaults to dictionary.word_list)
        #[clap(short, long, value_parser)]
        words: Option<PathBuf>,

        /// First word
        first: String,

        /// Second word
        second: String,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX)
        .load()
        .context("Failed to load configuration")?;
    init_logging(&config.log)?;
    hua_dict_lib::init(config);

    let global = config::get_global_config().context("Global configuration not initialized")?;
    if let Err(e) = run(args.command, global.get()) {
        report_error(ErrorContext::new(e, "cli"));
        std::process::exit(1);
    }
    Ok(())
}

fn run(command: Command, config: &HuaConfig) -> Result<(), HuaError> {
    match command {
        Command::Stats { words, json } => {
            let (trie, report) = build_dictionary(&config.dictionary, words.as_deref())?;
            let stats = trie.stats();
            if json {
                let out = serde_json::json!({ "load": report, "stats": stats });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("nodes:          {}", stats.nodes);
                println!("distinct words: {}", stats.distinct_words);
                println!("total words:    {}", stats.total_words);
                println!("most common:    {}", stats.most_common);
            }
        }
        Command::Lookup { words, word } => {
            let (trie, _) = build_dictionary(&config.dictionary, words.as_deref())?;
            match trie.lookup(&word) {
                Some(_) => println!("{word}: found (frequency {})", trie.frequency(&word)),
                None => println!("{word}: not found"),
            }
        }
        Command::Complete { words, prefix } => {
            let (trie, _) = build_dictionary(&config.dictionary, words.as_deref())?;
            match trie.best_completion(&prefix) {
                Some(completion) => println!(
                    "{prefix}{} (frequency {})",
                    completion.suffix, completion.frequency
                ),
                None => println!("{prefix}: no completion"),
            }
        }
        Command::Distance {
            words,
            first,
            second,
        } => {
            let (trie, _) = build_dictionary(&config.dictionary, words.as_deref())?;
            match trie.word_distance(&first, &second) {
                Some(distance) => println!("{distance}"),
                None => println!("{first} and {second} are not both in the dictionary"),
            }
        }
        Command::Validate => {
            info!("Configuration validated successfully");
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&HuaConfig::default())
                .map_err(|e| HuaError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
        }
    }
    Ok(())
}
