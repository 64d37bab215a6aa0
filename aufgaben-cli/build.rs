use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the transforms from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &[
    "token-json",
    "token-simple",
    "cst-treeviz",
    "cst-text",
    "ir-json",
    "domain-json",
    "domain-compact",
];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("aufgaben")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lower parsed exercise descriptions to typed JSON")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("sentence-order")
                .long("sentence-order")
                .value_parser(["grouped", "source"]),
        )
        .subcommand(
            Command::new("inspect")
                .arg(
                    Arg::new("path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("output").index(2).value_hint(ValueHint::FilePath))
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_hint(ValueHint::Other),
                )
                .arg(Arg::new("indent").long("indent")),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "aufgaben", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "aufgaben", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "aufgaben", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
