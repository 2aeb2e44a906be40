//! Amplitude Amplification CLI
//!
//! Runs the inversion-about-the-mean kernel and prints the marked
//! amplitude after every cycle, one value per line.
//!
//! With no arguments it performs the demonstration run: N = 16,
//! 20 cycles, marked index 3.
//!
//! # Exit codes
//! - 0: success
//! - 1: invalid input, unreadable config, or output failure

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use amplify_core::{IterationLoop, Reporter, WriteReporter};
use amplify_types::{AmplifyConfig, AmplifyError, AmplifyResult};

/// Inversion-about-the-mean amplification simulator
#[derive(Parser, Debug)]
#[command(name = "amplify")]
#[command(version)]
#[command(about = "Simulate inversion-about-the-mean amplification and print the marked amplitude per cycle")]
struct Cli {
    /// Number of amplitudes N
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    size: Option<i64>,

    /// Number of diffusion + oracle cycles
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    iterations: Option<i64>,

    /// Index flipped by the oracle
    #[arg(short = 'm', long, allow_negative_numbers = true)]
    marked_index: Option<i64>,

    /// JSON config file; command-line values override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the trajectory as JSON instead of one value per line
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Defaults, then the config file, then explicit flags.
    fn resolve_config(&self) -> AmplifyResult<AmplifyConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    AmplifyError::Config(format!("cannot read {}: {e}", path.display()))
                })?;
                AmplifyConfig::from_json(&text)?
            }
            None => AmplifyConfig::default(),
        };
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(marked_index) = self.marked_index {
            config.marked_index = marked_index;
        }
        Ok(config)
    }
}

/// Run the configured simulation and write the trajectory to `out`.
fn run<W: Write>(cli: &Cli, mut out: W) -> AmplifyResult<()> {
    let config = cli.resolve_config()?;
    let trajectory = IterationLoop::from_config(&config)?.run()?;

    if cli.json {
        serde_json::to_writer_pretty(&mut out, &trajectory).map_err(io::Error::from)?;
        writeln!(out)?;
        out.flush()?;
    } else {
        WriteReporter::new(out).emit(&trajectory)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr so stdout carries only the trajectory.
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    match run(&cli, io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amplify_types::Trajectory;

    #[test]
    fn test_no_args_is_demo_run() {
        let cli = Cli::try_parse_from(["amplify"]).unwrap();
        assert_eq!(cli.resolve_config().unwrap(), AmplifyConfig::default());
        assert!(!cli.json);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from(["amplify", "-n", "4", "-k", "3", "-m", "0"]).unwrap();
        assert_eq!(cli.resolve_config().unwrap(), AmplifyConfig::new(4, 3, 0));
    }

    #[test]
    fn test_negative_values_parse_and_fail_validation() {
        let cli = Cli::try_parse_from(["amplify", "--size", "-2"]).unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.size, -2);
        assert!(matches!(
            IterationLoop::from_config(&config),
            Err(AmplifyError::InvalidSize { size: -2 })
        ));
    }

    #[test]
    fn test_config_file_then_flag_override() {
        let path = std::env::temp_dir()
            .join(format!("amplify-cli-test-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"size": 8, "iterations": 5, "marked_index": 7}"#).unwrap();
        let cli = Cli::try_parse_from([
            "amplify",
            "--config",
            path.to_str().unwrap(),
            "--iterations",
            "2",
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config, AmplifyConfig::new(8, 2, 7));
    }

    #[test]
    fn test_missing_config_file() {
        let cli =
            Cli::try_parse_from(["amplify", "--config", "/nonexistent/amplify.json"]).unwrap();
        assert!(matches!(cli.resolve_config(), Err(AmplifyError::Config(_))));
    }

    #[test]
    fn test_plain_output_one_value_per_line() {
        let cli = Cli::try_parse_from(["amplify", "-n", "4", "-k", "3", "-m", "0"]).unwrap();
        let mut out = Vec::new();
        run(&cli, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "-0.5\n-1\n-0.5\n");
    }

    #[test]
    fn test_json_output_decodes_to_trajectory() {
        let cli = Cli::try_parse_from(["amplify", "-n", "16", "-k", "1", "-m", "3", "--json"])
            .unwrap();
        let mut out = Vec::new();
        run(&cli, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        let trajectory: Trajectory = serde_json::from_str(&text).unwrap();
        assert_eq!(trajectory.size, 16);
        assert_eq!(trajectory.marked_index, 3);
        assert_eq!(trajectory.amplitudes, vec![-0.25]);
    }

    #[test]
    fn test_invalid_input_writes_nothing() {
        let cli = Cli::try_parse_from(["amplify", "-n", "4", "-m", "4"]).unwrap();
        let mut out = Vec::new();
        assert!(matches!(
            run(&cli, &mut out),
            Err(AmplifyError::InvalidIndex { index: 4, size: 4 })
        ));
        assert!(out.is_empty());
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_json_write_failure_is_io_error() {
        let cli = Cli::try_parse_from(["amplify", "-k", "2", "--json"]).unwrap();
        assert!(matches!(run(&cli, ClosedPipe), Err(AmplifyError::Io(_))));
    }

    #[test]
    fn test_plain_write_failure_is_io_error() {
        let cli = Cli::try_parse_from(["amplify", "-k", "2"]).unwrap();
        assert!(matches!(run(&cli, ClosedPipe), Err(AmplifyError::Io(_))));
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["amplify", "-vv", "--json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
    }
}
