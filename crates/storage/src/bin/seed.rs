use std::fmt;

use quiz_core::model::AppSettings;
use storage::json::{DEFAULT_QUESTIONS_DIR, DEFAULT_SETTINGS_FILE};
use storage::repository::{CategoryRepository, SettingsRepository};
use storage::{JsonRepository, seed_default_categories, seed_if_missing};

#[derive(Debug, Clone)]
struct Args {
    questions_dir: String,
    settings_path: String,
    force: bool,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDir { raw: String },
    InvalidSettingsPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDir { raw } => write!(f, "invalid --dir value: {raw}"),
            ArgsError::InvalidSettingsPath { raw } => {
                write!(f, "invalid --settings value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut questions_dir = std::env::var("QUIZ_QUESTIONS_DIR")
            .unwrap_or_else(|_| DEFAULT_QUESTIONS_DIR.into());
        let mut settings_path = std::env::var("QUIZ_SETTINGS_FILE")
            .unwrap_or_else(|_| DEFAULT_SETTINGS_FILE.into());
        let mut force = false;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--dir" => {
                    let value = require_value(&mut args, "--dir")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDir { raw: value });
                    }
                    questions_dir = value;
                }
                "--settings" => {
                    let value = require_value(&mut args, "--settings")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidSettingsPath { raw: value });
                    }
                    settings_path = value;
                }
                "--force" => force = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            questions_dir,
            settings_path,
            force,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --dir <path>         Category directory (default: {DEFAULT_QUESTIONS_DIR})");
    eprintln!("  --settings <path>    Settings file (default: {DEFAULT_SETTINGS_FILE})");
    eprintln!("  --force              Overwrite existing category files");
    eprintln!("  -h, --help           Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!("  QUIZ_QUESTIONS_DIR, QUIZ_SETTINGS_FILE");
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let repo = JsonRepository::new(&args.questions_dir, &args.settings_path);

    let seeded = if args.force {
        seed_default_categories(&repo).await?;
        true
    } else {
        seed_if_missing(&repo).await?
    };

    if repo.load_settings().await.ok().flatten().is_none() {
        repo.save_settings(&AppSettings::default()).await?;
    }

    let count = repo.load_all().await?.len();
    if seeded {
        println!(
            "Seeded default categories; {count} categories now in {}",
            args.questions_dir
        );
    } else {
        println!(
            "Categories already present; {count} categories in {}",
            args.questions_dir
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
