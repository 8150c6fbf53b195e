mod error;

use clap::{Parser, Subcommand, ValueEnum};
use ej_case::Case;
use ej_mixing::{SampleOutcome, SweepResult, run_sweep};
use error::AppResult;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ej-cli")]
#[command(about = "Ejectorflow CLI - Constant-area ejector mixing analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate case file syntax and values
    Validate {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Print the default case as YAML
    Defaults,
    /// Run a secondary-pressure sweep and report thrust augmentation
    Sweep {
        /// Path to the case YAML file (reference case when omitted)
        case_path: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value = "plain")]
        format: Format,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// One line per sample, matching the reference trace
    Plain,
    /// ps,status,tarsub,tarsup
    Csv,
    /// Full sample reports
    Json,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Defaults => cmd_defaults(),
        Commands::Sweep {
            case_path,
            format,
            output,
        } => cmd_sweep(case_path.as_deref(), format, output.as_deref()),
    }
}

fn cmd_validate(case_path: &Path) -> AppResult<()> {
    println!("Validating case: {}", case_path.display());
    ej_case::load_yaml(case_path)?;
    println!("✓ Case is valid");
    Ok(())
}

fn cmd_defaults() -> AppResult<()> {
    print!("{}", serde_yaml::to_string(&Case::default())?);
    Ok(())
}

fn cmd_sweep(case_path: Option<&Path>, format: Format, output: Option<&Path>) -> AppResult<()> {
    let case = match case_path {
        Some(path) => ej_case::load_yaml(path)?,
        None => Case::default(),
    };

    let result = run_sweep(&case.gas, &case.inlet, &case.sweep)?;

    let rendered = match format {
        Format::Plain => render_plain(&result),
        Format::Csv => render_csv(&result),
        Format::Json => {
            let mut text = serde_json::to_string_pretty(&result)?;
            text.push('\n');
            text
        }
    };

    if let Some(path) = output {
        std::fs::write(path, rendered)?;
        println!(
            "✓ Wrote {} samples to {}",
            result.reports.len(),
            path.display()
        );
    } else {
        print!("{}", rendered);
    }

    Ok(())
}

/// One line per sample: `imaginary solution`, the subsonic thrust
/// augmentation ratio, or both ratios separated by a space.
fn render_plain(result: &SweepResult) -> String {
    let mut out = String::new();
    for report in &result.reports {
        match &report.outcome {
            SampleOutcome::Imaginary => out.push_str("imaginary solution"),
            SampleOutcome::SubsonicOnly { subsonic, .. } => {
                out.push_str(&format!("{}", subsonic.tar));
            }
            SampleOutcome::Both {
                subsonic,
                supersonic,
            } => {
                out.push_str(&format!("{} {}", subsonic.tar, supersonic.tar));
            }
        }
        out.push('\n');
    }
    out
}

fn render_csv(result: &SweepResult) -> String {
    let mut csv = String::from("ps,status,tarsub,tarsup\n");
    for report in &result.reports {
        let (tarsub, tarsup) = match &report.outcome {
            SampleOutcome::Imaginary => (String::new(), String::new()),
            SampleOutcome::SubsonicOnly { subsonic, .. } => {
                (subsonic.tar.to_string(), String::new())
            }
            SampleOutcome::Both {
                subsonic,
                supersonic,
            } => (subsonic.tar.to_string(), supersonic.tar.to_string()),
        };
        csv.push_str(&format!(
            "{},{},{},{}\n",
            report.ps,
            report.outcome.label(),
            tarsub,
            tarsup
        ));
    }
    csv
}
