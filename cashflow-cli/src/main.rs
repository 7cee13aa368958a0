use anyhow::{Context, Result};
use cashflow_core::{CategoryClassifier, Vocab};
use cashflow_ingest::Processor;
use cashflow_pipeline::{Pipeline, process_path, retrain};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "cashflow", version, about = "Normalize bank CSV exports into one categorized schema")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert one bank export into the canonical CSV layout
    Run {
        /// Source CSV exported from the bank
        input: PathBuf,

        /// Destination CSV (overwritten)
        output: PathBuf,

        /// Source format: revolut, intesa or vivid
        #[arg(long)]
        processor: String,

        /// Keyword → category JSON (default: from config, then assets/vocab.json)
        #[arg(long)]
        vocab_path: Option<PathBuf>,

        /// Learn keywords from categories the export already carries and save the vocab
        #[arg(long, default_value_t = false)]
        retrain: bool,
    },

    /// Print the category a description would get
    Classify {
        description: String,

        #[arg(long)]
        vocab_path: Option<PathBuf>,
    },

    /// Write a default config file (~/.cashflow/config.toml or $CASHFLOW_CONFIG)
    InitConfig,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            input,
            output,
            processor,
            vocab_path,
            retrain,
        } => {
            let cfg = config::load_config()?;
            run(&cfg, &input, &output, &processor, vocab_path, retrain)?;
        }

        Command::Classify {
            description,
            vocab_path,
        } => {
            let cfg = config::load_config()?;
            let vocab_path = vocab_path.unwrap_or(cfg.vocab.path);
            let classifier = CategoryClassifier::new(load_vocab(&vocab_path)?);
            println!("{}", classifier.classify(&description));
        }

        Command::InitConfig => {
            config::init_config()?;
        }
    }

    Ok(())
}

fn run(
    cfg: &Config,
    input: &Path,
    output: &Path,
    processor: &str,
    vocab_path: Option<PathBuf>,
    retrain_vocab: bool,
) -> Result<()> {
    let processor: Processor = processor.parse()?;
    let vocab_path = vocab_path.unwrap_or_else(|| cfg.vocab.path.clone());

    let mut classifier = CategoryClassifier::new(load_vocab(&vocab_path)?);

    let table = {
        let pipeline = Pipeline::new(processor, &classifier).with_budget(cfg.pipeline.budget.as_str());
        process_path(&pipeline, input, output)
            .with_context(|| format!("processing {} as {}", input.display(), processor))?
    };

    println!(
        "Wrote {} transactions from {} to {}",
        table.len(),
        input.display(),
        output.display()
    );

    if retrain_vocab {
        let learned = retrain(&mut classifier, &table);
        if learned > 0 {
            classifier
                .vocab()
                .save_json(&vocab_path)
                .with_context(|| format!("saving vocab {}", vocab_path.display()))?;
        }
        info!(learned, path = %vocab_path.display(), "retrain finished");
        println!("Learned {} new keywords", learned);
    }

    Ok(())
}

fn load_vocab(path: &Path) -> Result<Vocab> {
    Vocab::from_json(path).with_context(|| format!("loading vocab {}", path.display()))
}
