use clap::{Arg, ArgAction, Command};
use std::fs;

fn existing_file(input: &str) -> Result<String, String> {
    let path = fs::canonicalize(input).map_err(|_| "Failed to resolve input path")?;
    if path.is_file() {
        Ok(path.to_string_lossy().to_string())
    } else {
        Err(String::from("Input file does not exist"))
    }
}

fn codec_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("input")
                .help("Input file")
                .required(true)
                .index(1)
                .value_parser(existing_file),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file (default: next to the input)")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("ecc")
                .short('e')
                .long("ecc")
                .help("Parity symbols per 255-byte block; corrects half as many errors")
                .value_name("SYMBOLS")
                .default_value("10"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Quiet mode - minimal output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("List every repaired or failed block")
                .action(ArgAction::SetTrue),
        )
}

fn parallel_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("primitive")
                .short('p')
                .long("primitive")
                .help("Primitive polynomial: 285 (QR codes) or 301 (Data Matrix)")
                .value_name("POLY")
                .value_parser(["285", "301"])
                .default_value("285"),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .help("Number of CPU threads for computation (0 = auto-detect)")
                .value_name("N")
                .default_value("0"),
        )
        .arg(
            Arg::new("no-parallel")
                .long("no-parallel")
                .help("Disable all parallel processing")
                .action(ArgAction::SetTrue),
        )
}

/// Command-line definition for the `rscodec` binary
pub fn build_cli() -> Command {
    Command::new("rscodec")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reed-Solomon GF(2^8) file encoder, corrupter and repairer")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .subcommand(parallel_args(codec_args(
            Command::new("encode")
                .visible_alias("e")
                .about("Append parity to every block of a file"),
        )))
        .subcommand(
            codec_args(
                Command::new("corrupt")
                    .visible_alias("c")
                    .about("Damage symbols in every block of an encoded file"),
            )
            .arg(
                Arg::new("errors")
                    .short('n')
                    .long("errors")
                    .help("Symbols to damage per block (default: ECC / 2)")
                    .value_name("COUNT")
                    .value_parser(clap::value_parser!(usize)),
            )
            .arg(
                Arg::new("seed")
                    .short('s')
                    .long("seed")
                    .help("Random seed for reproducible damage")
                    .value_name("SEED")
                    .value_parser(clap::value_parser!(u64)),
            ),
        )
        .subcommand(parallel_args(codec_args(
            Command::new("decode")
                .visible_alias("d")
                .about("Repair and strip parity from an encoded file"),
        )))
}

pub fn parse_args() -> clap::ArgMatches {
    build_cli().get_matches()
}
