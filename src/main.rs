//! RCQL CLI - Parse and display RCQL task blocks

use clap::Parser;
use rcql::cli::Args;
use rcql::{format_output, load_file, OutputFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| args.default_log_filter().into()))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> rcql::Result<()> {
    let document = load_file(&args.file)?;

    let output = format_output(&document, &args.output_format());
    match args.output_format() {
        OutputFormat::Human => print!("{}", output),
        OutputFormat::Json => println!("{}", output),
    }

    if args.verbose {
        eprintln!("\n--- Parsed {} task block(s) from {} ---", document.len(), args.file.display());
    }

    Ok(())
}
