mod cli;

use anyhow::{Context, Result};
use beoparse::{default_output_path, write_file, Document, Extractor, OutputFormat, Vocabulary};
use clap::Parser;
use cli::Cli;
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(cli::log_filter(cli.verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let vocabulary = match &cli.vocabulary {
        Some(path) => Vocabulary::load(path)
            .with_context(|| format!("Failed to load vocabulary from {}", path.display()))?,
        None => Vocabulary::default(),
    };

    if cli.dump_vocabulary {
        println!("{}", vocabulary.to_json_pretty()?);
        return Ok(());
    }

    let extractor = Extractor::new(vocabulary).context("Failed to compile vocabulary")?;

    let inputs = cli::collect_inputs(&cli.inputs)?;
    cli::check_output_target(cli.output.as_deref(), &inputs)?;

    let format = OutputFormat::from(cli.format);
    let mut total_records = 0;

    for input in &inputs {
        let started = Instant::now();

        let document = Document::load(input)
            .with_context(|| format!("Failed to read {}", input.display()))?;
        let (sink, summary) = extractor.extract_with_summary(&document);

        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(input, format));
        write_file(
            &output,
            format,
            &input.display().to_string(),
            sink.records(),
            summary,
        )
        .with_context(|| format!("Failed to write {}", output.display()))?;

        if sink.is_empty() {
            println!(
                "⚠ {}: no event records found; the text does not look like an event order",
                input.display()
            );
        }
        println!(
            "✓ {} -> {} ({} records, {} pages, {} lines) [{:.2}s]",
            input.display(),
            output.display(),
            sink.len(),
            document.page_count(),
            summary.lines,
            started.elapsed().as_secs_f64()
        );

        total_records += sink.len();
    }

    if inputs.len() > 1 {
        println!("\n{} files, {} records total", inputs.len(), total_records);
    }

    Ok(())
}
