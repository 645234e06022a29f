use clap::Parser;
use conlang_gen::{Report, ReportConfig};
use tracing_subscriber::EnvFilter;

/// Generate a toy language with glossed sentences and learner exercises
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for reproducible output
    #[arg(long, help = "Seed for the random generator (random if omitted)")]
    seed: Option<u64>,

    /// Append the answer key
    #[arg(long, help = "Print the answer key after the exercises")]
    answers: bool,

    /// Emit JSON instead of text
    #[arg(long, help = "Print the report as JSON")]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(rand::random);
    let report = Report::from_seed(&ReportConfig::default(), seed)?;

    let mut stdout = std::io::stdout().lock();
    if cli.json {
        report.write_json(&mut stdout)?;
    } else {
        report.write_text(&mut stdout, cli.answers)?;
    }

    Ok(())
}
