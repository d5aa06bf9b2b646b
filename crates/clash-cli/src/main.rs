//! Cipher Clash Binary
//!
//! Command-line interface for generating and checking cipher puzzles.
//!
//! ## Usage
//!
//! ```bash
//! cipher-clash --seed 7 generate --difficulty hard
//! cipher-clash encode --variant caesar --params '{"variant":"caesar","shift":3}' "Hello"
//! cipher-clash verify --puzzle puzzle.json "hello world"
//! cipher-clash challenge --difficulty medium "Meet at noon"
//! ```

use clap::{Parser, Subcommand};
use clash_cipher::{decode, encode, CipherParams, CipherVariant};
use clash_core::Difficulty;
use clash_puzzle::keygen::generate_scaled_params;
use clash_puzzle::{EngineConfig, PhraseBank, Puzzle, PuzzleAssembler, Verifier};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Cipher Clash - classical cipher puzzle engine
#[derive(Parser, Debug)]
#[command(name = "cipher-clash")]
#[command(version)]
#[command(about = "Generate, solve and score classical cipher puzzles", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// RNG seed, overrides the configuration file
    #[arg(short = 's', long, global = true)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, global = true, default_value = "warn")]
    log_level: String,

    /// Generate sample configuration file
    #[arg(long)]
    generate_config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a puzzle and print it as JSON
    Generate {
        /// Difficulty tier
        #[arg(short = 'd', long, default_value = "medium")]
        difficulty: Difficulty,

        /// Cipher family (random from the tier when omitted)
        #[arg(short = 'v', long)]
        variant: Option<CipherVariant>,

        /// Plaintext (drawn from the phrase bank when omitted)
        #[arg(short = 'p', long)]
        phrase: Option<String>,

        /// JSON phrase bank
        #[arg(long)]
        phrases: Option<PathBuf>,
    },

    /// Encode text with explicit or generated parameters
    Encode {
        #[arg(short = 'v', long)]
        variant: CipherVariant,

        /// Parameters as JSON, generated for --difficulty when omitted
        #[arg(long)]
        params: Option<String>,

        #[arg(short = 'd', long, default_value = "medium")]
        difficulty: Difficulty,

        text: String,
    },

    /// Decode text with explicit parameters
    Decode {
        #[arg(short = 'v', long)]
        variant: CipherVariant,

        /// Parameters as JSON, optional for parameterless families
        #[arg(long)]
        params: Option<String>,

        text: String,
    },

    /// Score an answer against a puzzle JSON file
    Verify {
        #[arg(long)]
        puzzle: PathBuf,

        answer: String,
    },

    /// Build a multi-step challenge and print it as JSON
    Challenge {
        #[arg(short = 'd', long, default_value = "medium")]
        difficulty: Difficulty,

        /// Hidden message (drawn from the phrase bank when omitted)
        message: Option<String>,

        /// JSON phrase bank
        #[arg(long)]
        phrases: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    if let Some(path) = args.generate_config {
        EngineConfig::default().save_to_file(&path)?;
        println!("Generated sample configuration at: {}", path.display());
        return Ok(());
    }

    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        EngineConfig::load_from_file(config_path)?
    } else {
        EngineConfig::builder().log_level(&args.log_level).build()?
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    let Some(command) = args.command else {
        return Err("no command given, see --help".into());
    };

    match command {
        Command::Generate {
            difficulty,
            variant,
            phrase,
            phrases,
        } => {
            let bank = load_bank(phrases.as_deref(), &config)?;
            let mut assembler = PuzzleAssembler::new(config);
            let puzzle = match phrase {
                Some(phrase) => assembler.generate(&phrase, variant, difficulty)?,
                None => assembler.generate_from(&bank, variant, difficulty)?,
            };
            println!("{}", serde_json::to_string_pretty(&puzzle)?);
        }

        Command::Encode {
            variant,
            params,
            difficulty,
            text,
        } => {
            let params = match params {
                Some(json) => serde_json::from_str(&json)?,
                None => {
                    let mut rng = match config.seed {
                        Some(seed) => StdRng::seed_from_u64(seed),
                        None => StdRng::from_entropy(),
                    };
                    let complexity = config.tier(difficulty).complexity;
                    generate_scaled_params(variant, difficulty, complexity, &mut rng)?
                }
            };
            let (ciphertext, hint) = encode(&text, variant, &params)?;
            let output = serde_json::json!({
                "ciphertext": ciphertext,
                "hint": hint,
                "params": params,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Command::Decode {
            variant,
            params,
            text,
        } => {
            let params = parse_params(variant, params.as_deref())?;
            println!("{}", decode(&text, variant, &params)?);
        }

        Command::Verify { puzzle, answer } => {
            let content = std::fs::read_to_string(&puzzle)?;
            let puzzle: Puzzle = serde_json::from_str(&content)?;
            let verifier = Verifier::from_config(&config);
            let verdict = verifier.verify(&puzzle, &answer);
            debug!(
                "Similarity {:.3} for {} puzzle (threshold {:.2})",
                verdict.similarity,
                puzzle.variant(),
                verifier.threshold()
            );
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }

        Command::Challenge {
            difficulty,
            message,
            phrases,
        } => {
            let bank = load_bank(phrases.as_deref(), &config)?;
            let mut assembler = PuzzleAssembler::new(config);
            let challenge = match message {
                Some(message) => assembler.challenge(&message, difficulty)?,
                None => assembler.challenge_from(&bank, difficulty)?,
            };
            debug!("Challenge hides {} chars", challenge.message().chars().count());
            println!("{}", serde_json::to_string_pretty(&challenge)?);
        }
    }

    Ok(())
}

/// Phrase bank from `--phrases`, the configured path, or the built-in list
fn load_bank(
    path: Option<&Path>,
    config: &EngineConfig,
) -> Result<PhraseBank, Box<dyn std::error::Error>> {
    match path.or(config.phrase_bank_path.as_deref()) {
        Some(path) => {
            info!("Loading phrase bank from: {}", path.display());
            Ok(PhraseBank::load_from_file(path)?)
        }
        None => Ok(PhraseBank::default()),
    }
}

fn parse_params(
    variant: CipherVariant,
    json: Option<&str>,
) -> Result<CipherParams, Box<dyn std::error::Error>> {
    match json {
        Some(json) => Ok(serde_json::from_str(json)?),
        None => CipherParams::stateless(variant)
            .ok_or_else(|| format!("{} needs --params", variant).into()),
    }
}
