use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use casefix::{
    HumanReport, MachineReport, NormalizerConfig, PipelineResult, SAMPLE_DOCUMENT,
    process_with_config, read_document, write_final_text,
};

#[derive(Parser)]
#[command(name = "casefix")]
#[command(author, version, about = "Sentence-case text normalizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a document and print or write the result
    Process {
        /// Input document, or - for stdin
        #[arg(short, long)]
        input: PathBuf,

        /// Write the final text here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for the human-readable report
        #[arg(long)]
        report: Option<PathBuf>,

        /// Output file for the machine-readable report (JSON)
        #[arg(long)]
        json: Option<PathBuf>,

        #[command(flatten)]
        settings: Settings,
    },

    /// Print the report and stage diagnostics without writing files
    Analyze {
        /// Input document, or - for stdin
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        settings: Settings,
    },

    /// Run on the built-in homework text
    Sample {
        #[command(flatten)]
        settings: Settings,
    },
}

#[derive(clap::Args)]
struct Settings {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sentence delimiter characters, e.g. ".!?:"
    #[arg(long)]
    delimiters: Option<String>,

    /// Separator placed before the extra sentence
    #[arg(long)]
    separator: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            output,
            report,
            json,
            settings,
        } => {
            setup_logging(settings.verbose);
            let config = load_config(&settings)?;
            process_document(&input, output, report, json, &config)
        }
        Commands::Analyze { input, settings } => {
            setup_logging(settings.verbose);
            let config = load_config(&settings)?;
            let text = read_document(&input).context("Failed to load input document")?;
            analyze_document(&text, &config);
            Ok(())
        }
        Commands::Sample { settings } => {
            setup_logging(settings.verbose);
            let config = load_config(&settings)?;
            analyze_document(SAMPLE_DOCUMENT, &config);
            Ok(())
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn load_config(settings: &Settings) -> Result<NormalizerConfig> {
    let mut config = match &settings.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            NormalizerConfig::from_json_file(path)?
        }
        None => NormalizerConfig::default(),
    };

    if let Some(delimiters) = &settings.delimiters {
        config.delimiters = delimiters.chars().collect();
    }
    if let Some(separator) = &settings.separator {
        config.paragraph_separator = separator.clone();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn process_document(
    input: &Path,
    output: Option<PathBuf>,
    report: Option<PathBuf>,
    json: Option<PathBuf>,
    config: &NormalizerConfig,
) -> Result<()> {
    info!("Loading document from {:?}", input);
    let text = read_document(input).context("Failed to load input document")?;

    let result = process_with_config(&text, config);

    match output {
        Some(path) => {
            write_final_text(&result, &path)?;
            info!("Final text written to {:?}", path);
        }
        None => println!("{}", result.output.final_text),
    }

    if let Some(path) = report {
        HumanReport::new(&result).write_file(&path)?;
        info!("Report written to {:?}", path);
    }

    if let Some(path) = json {
        MachineReport::from_result(&result).write_json(&path)?;
        info!("JSON report written to {:?}", path);
    }

    Ok(())
}

fn analyze_document(text: &str, config: &NormalizerConfig) {
    let result: PipelineResult = process_with_config(text, config);
    let report = HumanReport::new(&result);

    println!("{}", report.format());
    println!("Diagnostics");
    println!("-----------");
    print!("{}", report.format_details());
}
