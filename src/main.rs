use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use wordoverlap::config::{CompareOptions, Config};
use wordoverlap::corpus::stoplist::Stoplist;
use wordoverlap::output::json::{counts_to_json, ranking_to_json};
use wordoverlap::output::terminal;
use wordoverlap::pipeline;
use wordoverlap::similarity::WeightingMode;

/// wordoverlap: score how much the vocabularies of text documents overlap.
///
/// Every pair of input documents gets a Jaccard score computed over their
/// word counts; pairs are reported best first.
#[derive(Parser)]
#[command(name = "wordoverlap", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank every pair of documents by word overlap
    Compare {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Use binary weights (vocabulary presence only; default: count weighting)
        #[arg(short, long)]
        binary: bool,

        /// Report the top N pairs; 0 or negative reports all (default: 20)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        top: Option<i64>,

        /// Print JSON instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// Show the most frequent terms of each document
    Counts {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Terms to show per document
        #[arg(short = 'n', long, default_value = "20")]
        top: usize,

        /// Print JSON instead of the text listing
        #[arg(long)]
        json: bool,
    },
}

/// Options shared by every command that loads documents.
#[derive(Args)]
struct CorpusArgs {
    /// Input text files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Stoplist file, one term per line
    #[arg(short, long, value_name = "FILE")]
    stoplist: Option<PathBuf>,

    /// Also exclude the built-in English stop words
    #[arg(long)]
    english_stoplist: bool,

    /// Apply English (Snowball/Porter2) stemming (default: no stemming)
    #[arg(short = 'p', long)]
    stem: bool,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordoverlap=warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Compare {
            corpus,
            binary,
            top,
            json,
        } => {
            let options = CompareOptions {
                stoplist: build_stoplist(&corpus, &config)?,
                use_stemming: corpus.stem,
                mode: if binary {
                    WeightingMode::Binary
                } else {
                    WeightingMode::Weighted
                },
                top_k: top.unwrap_or(config.top_n),
            };
            info!(files = corpus.files.len(), mode = ?options.mode, "Comparing documents");

            let pairs = pipeline::compare(&corpus.files, &options)?;

            if json {
                println!("{}", ranking_to_json(&pairs)?);
            } else {
                terminal::display_ranking(&pairs);
            }
        }

        Commands::Counts { corpus, top, json } => {
            let options = CompareOptions {
                stoplist: build_stoplist(&corpus, &config)?,
                use_stemming: corpus.stem,
                ..CompareOptions::default()
            };

            let documents = pipeline::load_documents(&corpus.files, &options)?;

            if json {
                println!("{}", counts_to_json(&documents, top)?);
            } else {
                terminal::display_counts(&documents, top);
            }
        }
    }

    Ok(())
}

/// Combine the stoplist file (flag, else config) with the built-in English
/// list when requested.
fn build_stoplist(corpus: &CorpusArgs, config: &Config) -> Result<Stoplist> {
    let path: Option<&Path> = corpus
        .stoplist
        .as_deref()
        .or(config.stoplist_path.as_deref());

    let mut stoplist = match path {
        Some(p) => Stoplist::from_file(p)
            .with_context(|| format!("Failed to load stoplist {}", p.display()))?,
        None => Stoplist::empty(),
    };

    if corpus.english_stoplist {
        stoplist = stoplist.merge(Stoplist::english());
    }

    Ok(stoplist)
}
