use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use legible::export::{CsvWriter, JsonWriter, RecordWriter, TableWriter};
use legible::extract::ExtractorSet;
use legible::lexicon::{HunspellLexicon, Lexicon, WordListLexicon};
use legible::pipeline::{evaluate_folder, EvalConfig};
use legible::repair::RepairConfig;
use legible::{LegibilityScorer, Repairer};

#[derive(Parser, Debug)]
#[command(name = "legible")]
#[command(version, about = "English legibility assessment for OCR-extracted documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score every recognized document in a folder
    Check {
        /// Input folder of .txt / .pdf documents
        input: PathBuf,

        /// Output format for the result batch
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Run the OCR repair pass before scoring
        #[arg(short, long)]
        repair: bool,

        /// Save extracted text into this folder
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Word-list lexicon: one form per line
        #[arg(short, long)]
        wordlist: Option<PathBuf>,

        /// Hunspell affix file (use together with --dic)
        #[arg(long)]
        aff: Option<PathBuf>,

        /// Hunspell dictionary file (use together with --aff)
        #[arg(long)]
        dic: Option<PathBuf>,

        /// Running-header title to strip during repair
        #[arg(short, long)]
        boilerplate: Option<String>,
    },

    /// Score a single already-extracted text file
    Score {
        /// Input text file (UTF-8)
        input: PathBuf,

        /// Word-list lexicon: one form per line
        #[arg(short, long)]
        wordlist: Option<PathBuf>,

        /// Hunspell affix file (use together with --dic)
        #[arg(long)]
        aff: Option<PathBuf>,

        /// Hunspell dictionary file (use together with --aff)
        #[arg(long)]
        dic: Option<PathBuf>,

        /// Run the OCR repair pass before scoring
        #[arg(short, long)]
        repair: bool,
    },

    /// Print the repaired form of a text file
    Repair {
        /// Input text file (UTF-8)
        input: PathBuf,

        /// Running-header title to strip
        #[arg(short, long)]
        boilerplate: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Format {
    Table,
    Csv,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            input,
            format,
            repair,
            save,
            wordlist,
            aff,
            dic,
            boilerplate,
        } => check(input, format, repair, save, wordlist, aff, dic, boilerplate),
        Commands::Score {
            input,
            wordlist,
            aff,
            dic,
            repair,
        } => score(input, wordlist, aff, dic, repair),
        Commands::Repair { input, boilerplate } => repair_file(input, boilerplate),
    }
}

fn load_lexicon(
    wordlist: Option<PathBuf>,
    aff: Option<PathBuf>,
    dic: Option<PathBuf>,
) -> Result<Box<dyn Lexicon>> {
    match (wordlist, aff, dic) {
        (Some(path), None, None) => Ok(Box::new(WordListLexicon::load(&path)?)),
        (None, Some(aff), Some(dic)) => Ok(Box::new(HunspellLexicon::load(&aff, &dic)?)),
        (None, None, None) => {
            anyhow::bail!("no lexicon configured: pass --wordlist or --aff/--dic")
        }
        _ => anyhow::bail!("pass either --wordlist or both --aff and --dic, not a mix"),
    }
}

#[allow(clippy::too_many_arguments)]
fn check(
    input: PathBuf,
    format: Format,
    repair: bool,
    save: Option<PathBuf>,
    wordlist: Option<PathBuf>,
    aff: Option<PathBuf>,
    dic: Option<PathBuf>,
    boilerplate: Option<String>,
) -> Result<()> {
    if !input.is_dir() {
        anyhow::bail!("input is not a folder: {}", input.display());
    }

    let lexicon = load_lexicon(wordlist, aff, dic)?;
    let extractors = ExtractorSet::with_defaults();

    let mut config = EvalConfig::new(input);
    config.repair = repair;
    config.repair_config = RepairConfig {
        boilerplate_title: boilerplate,
    };
    config.save_dir = save;

    let records = evaluate_folder(&config, lexicon.as_ref(), &extractors)?;

    let writer: Box<dyn RecordWriter> = match format {
        Format::Table => Box::new(TableWriter::new()),
        Format::Csv => Box::new(CsvWriter::new()),
        Format::Json => Box::new(JsonWriter::new()),
    };
    print!("{}", writer.render(&records)?);

    Ok(())
}

fn score(
    input: PathBuf,
    wordlist: Option<PathBuf>,
    aff: Option<PathBuf>,
    dic: Option<PathBuf>,
    repair: bool,
) -> Result<()> {
    let lexicon = load_lexicon(wordlist, aff, dic)?;
    let text = fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let text = if repair {
        Repairer::new(&RepairConfig::default()).repair(&text)
    } else {
        text
    };

    let scorer = LegibilityScorer::new();
    println!("{:.3}", scorer.score(&text, lexicon.as_ref()));
    Ok(())
}

fn repair_file(input: PathBuf, boilerplate: Option<String>) -> Result<()> {
    let text = fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let repairer = Repairer::new(&RepairConfig {
        boilerplate_title: boilerplate,
    });
    println!("{}", repairer.repair(&text));
    Ok(())
}
