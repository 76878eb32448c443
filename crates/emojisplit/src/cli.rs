// crates/emojisplit/src/cli.rs

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};
use marker_index::DEFAULT_WILDCARD;

use crate::config::parse_marker;

/// Command-line definition for the `emojisplit` binary.
pub fn build_cli() -> Command {
    Command::new("emojisplit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Split up a template config file based on sections delineated by emojis.")
        .arg(
            Arg::new("emoji")
                .long("emoji")
                .num_args(1)
                .value_parser(parse_marker)
                .help("Marker whose sections are kept (defaults to the wildcard)"),
        )
        .arg(
            Arg::new("split")
                .long("split")
                .help("Produce an outfile for every emoji in the index")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("index")
                .long("index")
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .help("Path to the emoji index (defaults to $EMOJISPLIT_INDEX, then ~/.config/emojisplit/emoji.index)"),
        )
        .arg(
            Arg::new("wildcard")
                .long("wildcard")
                .num_args(1)
                .default_value(DEFAULT_WILDCARD)
                .value_parser(parse_marker)
                .help("Marker that matches every selection"),
        )
        .arg(
            Arg::new("write_empty")
                .long("write-empty")
                .help("Write output files even when nothing was kept")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("FILE")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("File template to process"),
        )
}
