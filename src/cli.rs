use anyhow::{bail, Context, Result};
use beoparse::OutputFormat;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(name = "beoparse", version, about = "Extract event schedules from banquet event order text")]
pub struct Cli {
    /// Extracted text files, or directories to search for *.txt files
    #[arg(required_unless_present = "dump_vocabulary")]
    pub inputs: Vec<PathBuf>,

    /// Output file (only with a single input); defaults to <input>_parsed.<ext>
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// JSON file overriding some or all vocabulary tables
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,

    /// Print the effective vocabulary as JSON and exit
    #[arg(long)]
    pub dump_vocabulary: bool,

    /// Log classification decisions
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => OutputFormat::Csv,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Log filter for the run
///
/// `-v` always means debug. Otherwise `rust_log` (the `RUST_LOG` value) is
/// used as given, falling back to warn when it is unset or empty.
pub fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

/// Expand directories into the *.txt files beneath them, in name order
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();

    for path in paths {
        if !path.is_dir() {
            inputs.push(path.clone());
            continue;
        }

        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry.with_context(|| format!("Failed to walk {}", path.display()))?;
            if entry.file_type().is_file() && is_text_file(entry.path()) {
                inputs.push(entry.into_path());
            }
        }
    }

    Ok(inputs)
}

/// `--output` names one file, so it cannot take several inputs
pub fn check_output_target(output: Option<&Path>, inputs: &[PathBuf]) -> Result<()> {
    if inputs.is_empty() {
        bail!("No input files found");
    }
    if output.is_some() && inputs.len() > 1 {
        bail!(
            "--output can only be used with a single input file ({} found)",
            inputs.len()
        );
    }
    Ok(())
}

pub fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_rust_log_level_is_honoured() {
        let filter = log_filter(false, Some("debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = log_filter(false, Some("trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_log_level_defaults_to_warn() {
        assert_eq!(log_filter(false, None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(false, Some("")).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_verbose_forces_debug() {
        assert_eq!(log_filter(true, None).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(
            log_filter(true, Some("error")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn test_directory_walk_is_sorted_and_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("week2")).unwrap();
        fs::write(root.join("b.txt"), "").unwrap();
        fs::write(root.join("a.TXT"), "").unwrap();
        fs::write(root.join("notes.csv"), "").unwrap();
        fs::write(root.join("week2").join("c.txt"), "").unwrap();

        let inputs = collect_inputs(&[root.to_path_buf()]).unwrap();
        assert_eq!(
            inputs,
            vec![
                root.join("a.TXT"),
                root.join("b.txt"),
                root.join("week2").join("c.txt"),
            ]
        );
    }

    #[test]
    fn test_file_inputs_pass_through() {
        let inputs = collect_inputs(&[PathBuf::from("orders/missing.pdf.txt"), PathBuf::from("x")])
            .unwrap();
        assert_eq!(
            inputs,
            vec![PathBuf::from("orders/missing.pdf.txt"), PathBuf::from("x")]
        );
    }

    #[test]
    fn test_text_file_extension() {
        assert!(is_text_file(Path::new("beo.txt")));
        assert!(is_text_file(Path::new("BEO.Txt")));
        assert!(!is_text_file(Path::new("beo_parsed.csv")));
        assert!(!is_text_file(Path::new("txt")));
    }

    #[test]
    fn test_output_with_several_inputs_rejected() {
        let inputs = vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")];
        assert!(check_output_target(Some(Path::new("out.csv")), &inputs).is_err());
        assert!(check_output_target(None, &inputs).is_ok());
        assert!(check_output_target(Some(Path::new("out.csv")), &inputs[..1]).is_ok());
        assert!(check_output_target(None, &[]).is_err());
    }

    #[test]
    fn test_dump_vocabulary_needs_no_inputs() {
        let cli = Cli::try_parse_from(["beoparse", "--dump-vocabulary"]).unwrap();
        assert!(cli.dump_vocabulary);
        assert!(cli.inputs.is_empty());

        assert!(Cli::try_parse_from(["beoparse"]).is_err());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "beoparse", "-f", "json", "-o", "out.json", "-v", "week1.txt",
        ])
        .unwrap();
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert!(cli.verbose);
        assert_eq!(cli.inputs, vec![PathBuf::from("week1.txt")]);
        assert_eq!(OutputFormat::from(cli.format), OutputFormat::Json);
    }
}
