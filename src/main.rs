use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use autover::git::Git2TagSource;
use autover::{ui, VersionDeducer};

#[derive(clap::Parser)]
#[command(
    name = "autover",
    about = "Deduce the next semantic version from existing git tags"
)]
struct Args {
    #[arg(
        short,
        long,
        default_value = ".",
        help = "Project directory containing the git repository"
    )]
    dir: PathBuf,

    #[arg(
        short,
        long,
        help = "Custom spec file path (defaults to <dir>/version.properties)"
    )]
    spec_file: Option<PathBuf>,

    #[arg(
        short,
        long,
        default_value = "unspecified",
        help = "Version currently declared by the build"
    )]
    project_version: String,

    #[arg(long, help = "Emit the result as JSON")]
    json: bool,

    #[arg(long, help = "Show how the version was deduced")]
    explain: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("autover {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Logging goes to stderr; stdout carries only the deduction result.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let deducer = match build_deducer(&args) {
        Ok(deducer) => deducer,
        Err(e) => {
            ui::display_error(&format!("Cannot prepare deduction: {}", e));
            std::process::exit(1);
        }
    };

    let deducted = deducer.deduce_version(&args.project_version);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&deducted)?);
    } else {
        ui::display_deducted(&deducted);
        if args.explain {
            ui::display_diagnostics(&deducted.diagnostics);
        }
    }

    Ok(())
}

fn build_deducer(args: &Args) -> autover::Result<VersionDeducer<Git2TagSource>> {
    match &args.spec_file {
        Some(path) => {
            let source = Git2TagSource::open(&args.dir)?;
            let spec_content = fs::read_to_string(path)?;
            Ok(VersionDeducer::new(source, spec_content))
        }
        None => VersionDeducer::from_dir(&args.dir),
    }
}
