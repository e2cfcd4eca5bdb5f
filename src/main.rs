//! quizpair command-line front end
//!
//! Reads questions from a workbook, pairs them, appends one slide per pairing
//! to a copy of the template and writes the answer key next to the deck.
//!
//! Exit code 0 on success, 1 on any validation or processing error.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use quizpair::ooxml::pptx::QuestionDeck;
use quizpair::ooxml::xlsx::{QuestionWorkbook, ReadOptions};
use quizpair::pairing::{DEFAULT_MAX_ATTEMPTS, DEFAULT_SEED, PairingConfig, PairingEngine, SeededRandom};
use quizpair::quiz::{AnswerKeyWriter, Labels, Language, QuestionSource, QuizRenderer, answer_key_path};

/// Build a two-group quiz deck from a question spreadsheet
#[derive(Parser, Debug)]
#[command(name = "quizpair")]
#[command(version)]
#[command(about = "Build a two-group quiz deck from a question spreadsheet")]
struct Cli {
    /// PowerPoint template (.pptx) providing the slide layout
    input_template: PathBuf,

    /// Name of the slide layout inside the template
    slide_name: String,

    /// Question workbook (.xlsx): questions in column A, answers in column B
    question_input: PathBuf,

    /// Output deck (.pptx); the answer key is written to <output>.txt
    output: PathBuf,

    /// Seed for the shuffle; the same seed rebuilds the same deck
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Shuffle-and-repair attempts before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Accept pairings whose first group-A question reappears second in group B
    #[arg(long)]
    no_first_pair_gate: bool,

    /// Worksheet to read (default: the first one)
    #[arg(long)]
    sheet: Option<String>,

    /// Leading sheet rows to ignore, e.g. 1 for a header row
    #[arg(long, default_value_t = 0)]
    skip_rows: usize,

    /// Language of slide titles and answer key headings
    #[arg(long, value_enum, default_value_t = Language::En)]
    language: Language,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    if let Err(message) = validate(&cli) {
        eprintln!("{}", message);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        },
    }
}

/// Path checks done before any file is read.
fn validate(cli: &Cli) -> Result<(), &'static str> {
    if !has_extension(&cli.input_template, ".pptx") {
        return Err("The input template is not a .pptx file...");
    }
    if !has_extension(&cli.output, ".pptx") {
        return Err("The output path is not a .pptx file...");
    }
    if !has_extension(&cli.question_input, ".xlsx") {
        return Err("The question template is not a .xlsx file...");
    }
    if !cli.input_template.exists() {
        return Err("The input template does not exist...");
    }
    if !cli.question_input.exists() {
        return Err("The question template does not exist...");
    }
    Ok(())
}

fn has_extension(path: &Path, suffix: &str) -> bool {
    path.to_string_lossy().ends_with(suffix)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = ReadOptions {
        sheet: cli.sheet.clone(),
        skip_rows: cli.skip_rows,
    };
    let questions = QuestionWorkbook::open(&cli.question_input)
        .and_then(|workbook| workbook.with_options(options).questions())
        .with_context(|| format!("reading questions from {}", cli.question_input.display()))?;
    info!(count = questions.len(), "read questions");

    let engine = PairingEngine::new(PairingConfig {
        max_attempts: cli.max_attempts,
        first_pair_gate: !cli.no_first_pair_gate,
    });
    let pairing = engine
        .pair(&questions, &mut SeededRandom::new(cli.seed))
        .with_context(|| format!("pairing {} questions with seed {}", questions.len(), cli.seed))?;

    let labels = Labels::new(cli.language);

    let mut deck = QuestionDeck::open(&cli.input_template, &cli.slide_name)
        .with_context(|| format!("opening template {}", cli.input_template.display()))?;
    deck.render(&pairing, &labels)?;
    deck.save(&cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    let key_path = answer_key_path(&cli.output);
    let file = File::create(&key_path)
        .with_context(|| format!("creating {}", key_path.display()))?;
    AnswerKeyWriter::new(BufWriter::new(file))
        .render(&pairing, &labels)
        .with_context(|| format!("writing {}", key_path.display()))?;

    info!(
        slides = deck.slides_added().len(),
        attempts = pairing.attempts(),
        deck = %cli.output.display(),
        answer_key = %key_path.display(),
        "quiz written"
    );
    Ok(())
}
