//! rscodec binary - encode, corrupt and repair files with Reed-Solomon parity

use anyhow::{Context, Result};
use rscodec::corruption::CorruptionConfig;
use rscodec::file_ops::default_output_path;
use rscodec::parse_args;
use rscodec::pipeline::{self, CodecConfig, PipelineSummary};
use rscodec::reporters::{CodecReporter, ConsoleCodecReporter, SilentCodecReporter};
use std::path::{Path, PathBuf};
use std::process;

fn output_path(matches: &clap::ArgMatches, input: &Path, default_stem: &str) -> PathBuf {
    matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output_path(input, default_stem))
}

fn run<R: CodecReporter>(command: &str, matches: &clap::ArgMatches, reporter: &R) -> Result<PipelineSummary> {
    let input = PathBuf::from(
        matches
            .get_one::<String>("input")
            .context("Input file is required")?,
    );

    match command {
        "encode" => {
            let config = CodecConfig::from_args(matches)?;
            let output = output_path(matches, &input, "Encoded_File");
            pipeline::encode_file(&input, &output, &config, reporter)
                .with_context(|| format!("Failed to encode {}", input.display()))
        }
        "corrupt" => {
            let ecc: usize = matches
                .get_one::<String>("ecc")
                .context("ECC symbols are required")?
                .parse()
                .context("ECC symbols must be a number")?;
            let errors = matches.get_one::<usize>("errors").copied().unwrap_or(ecc / 2);
            let corruption = CorruptionConfig::new(errors, matches.get_one::<u64>("seed").copied());
            let output = output_path(matches, &input, "Corrupted_File");
            pipeline::corrupt_file(&input, &output, &corruption, reporter)
                .with_context(|| format!("Failed to corrupt {}", input.display()))
        }
        "decode" => {
            let config = CodecConfig::from_args(matches)?;
            let output = output_path(matches, &input, "Decoded_File");
            pipeline::decode_file(&input, &output, &config, reporter)
                .with_context(|| format!("Failed to decode {}", input.display()))
        }
        other => anyhow::bail!("Unknown command: {}", other),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = parse_args();
    let (command, sub_matches) = matches.subcommand().context("A command is required")?;

    let quiet = sub_matches.get_flag("quiet");
    let summary = if quiet {
        run(command, sub_matches, &SilentCodecReporter::new())
    } else if sub_matches.get_flag("verbose") {
        run(command, sub_matches, &ConsoleCodecReporter::verbose())
    } else {
        run(command, sub_matches, &ConsoleCodecReporter::new())
    };

    match summary {
        Ok(summary) if summary.is_success() => Ok(()),
        Ok(_) => process::exit(1),
        Err(e) => {
            if !quiet {
                eprintln!("Error: {:#}", e);
            }
            process::exit(1);
        }
    }
}
