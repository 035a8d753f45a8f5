use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;
use vigenere_breaker::cli::{Cli, OutputFormat};
use vigenere_breaker::progress::AnalysisEvent;
use vigenere_breaker::text::normalize;
use vigenere_breaker::{codec, output, AnalysisConfig, Cryptanalyst};

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(io::stderr)
            .init();
    }
}

/// Ciphertext from `-f PATH`, or all of stdin
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read ciphertext from stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, format!("{}\n", rendered))
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", rendered).context("failed to write to stdout")
        }
    }
}

/// Config file (if any) with explicit flags layered on top
fn load_config(args: &Cli) -> Result<AnalysisConfig> {
    let base = match &args.config {
        Some(path) => AnalysisConfig::from_file(path)
            .with_context(|| format!("invalid configuration file {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    Ok(args.apply_overrides(base))
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let input = read_input(args.file.as_deref())?;

    // Codec utility modes bypass analysis entirely
    if let Some(key) = &args.encrypt {
        let ciphertext = codec::encrypt(input.trim_end(), &normalize(key));
        return write_output(args.output.as_deref(), &ciphertext);
    }
    if let Some(key) = &args.decrypt {
        let plaintext = codec::decrypt(input.trim_end(), &normalize(key));
        return write_output(args.output.as_deref(), &plaintext);
    }

    let config = load_config(&args)?;
    let analyst = Cryptanalyst::new(config);

    let print_event = |event: &AnalysisEvent| eprintln!("{}", event);
    let sink: Option<&(dyn Fn(&AnalysisEvent) + Sync)> = if args.verbose {
        Some(&print_event)
    } else {
        None
    };

    let report = analyst
        .analyze_with_progress(input.trim_end(), sink)
        .context("cryptanalysis failed")?;

    if report.timed_out {
        eprintln!("warning: time budget exhausted, reporting best key found so far");
    }

    let rendered = match args.format {
        OutputFormat::Text => output::render_text(&report, args.key_only),
        OutputFormat::Json => output::render_json(&report).context("failed to encode report")?,
    };
    write_output(args.output.as_deref(), &rendered)
}
