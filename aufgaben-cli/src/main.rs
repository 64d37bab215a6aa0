// Command-line interface for aufgaben
//
// This binary turns parsed exercise descriptions into the published JSON
// document, and offers views on the intermediate stages for debugging.
//
// The grammar front end is a separate tool. Its output (tokens, syntax tree and
// any syntax diagnostics, serialized as JSON) is the input of every command here.
//
// Converting:
//
// The output format can be given with --to, is otherwise detected from the output
// file extension, and falls back to the configured default.
// Usage:
//  aufgaben <input> [<output>] [--to <format>]            - Convert (default)
//  aufgaben convert <input> [<output>] [--to <format>]    - Same as above (explicit)
//  aufgaben inspect <input> [<transform>]                 - Execute a transform (defaults to "cst-treeviz")
//  aufgaben --list-transforms                             - List available transforms
//
// Without an output path the result is written to stdout. Nothing is written
// when any stage fails; the process exits with status 1 and the error on stderr.
//
// Extra Parameters:
//
// Transform-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the transform.
// Example:
//  aufgaben inspect quiz.cst.json --extra-show-tokens

use aufgaben_cli::transforms;

use aufgaben_config::{AufgabenConfig, Loader};
use aufgaben_core::formats::json::JsonRules;
use aufgaben_core::publish::{publish, PublishArtifact, PublishSpec};
use aufgaben_core::{compile, FormatRegistry, LoweringOptions};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["inspect", "convert", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));
            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("aufgaben")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lower parsed exercise descriptions to typed JSON")
        .long_about(
            "aufgaben converts the syntax tree of an exercise description into the JSON\n\
            document consumed by the exercise player.\n\n\
            Commands:\n  \
            - convert: Lower, convert and serialize (default)\n  \
            - inspect: View intermediate stages (tokens, tree, IR)\n\n\
            Examples:\n  \
            aufgaben quiz.cst.json out/quiz.json        # Write pretty JSON\n  \
            aufgaben quiz.cst.json --to json-compact    # Single line to stdout\n  \
            aufgaben inspect quiz.cst.json ir-json      # View the IR",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an aufgaben.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("sentence-order")
                .long("sentence-order")
                .help("Order of plain and annotated sentences in composite tasks")
                .value_parser(["grouped", "source"])
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect intermediate stages of the pipeline")
                .arg(
                    Arg::new("path")
                        .help("Path to the parsed source (JSON)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format). Defaults to 'cst-treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a parsed source to the published JSON (default command)")
                .arg(
                    Arg::new("input")
                        .help("Path to the parsed source (JSON)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .help("Output file path (defaults to stdout). Missing directories are created")
                        .index(2)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output format (detected from the output extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("indent")
                        .long("indent")
                        .help("Spaces per nesting level of pretty JSON")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, extra_params) = parse_extra_args(&args);

    // Try normal parsing first; if the first arg looks like a file, inject "convert"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let config = load_cli_config(&matches);
    init_logging(&config.logging.filter);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let path = required(sub_matches, "path");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or("cst-treeviz");
            handle_inspect_command(path, transform, &extra_params, &config);
        }
        Some(("convert", sub_matches)) => {
            let input = required(sub_matches, "input");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let registry = FormatRegistry::default();

            let format = match sub_matches.get_one::<String>("to") {
                Some(to) => to.clone(),
                None => output
                    .and_then(|path| registry.detect_format_from_filename(path))
                    .unwrap_or_else(|| config.output.format.clone()),
            };
            handle_convert_command(input, output, &format, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    match matches.get_one::<String>(name) {
        Some(value) => value,
        None => {
            eprintln!("Error: missing argument <{name}>");
            std::process::exit(2);
        }
    }
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &AufgabenConfig,
) {
    let source = read_input(path);
    let options = LoweringOptions::from(&config.lowering);
    let rules = JsonRules::from(&config.output);

    let output = transforms::execute_transform(&source, transform, extra_params, &options, &rules)
        .unwrap_or_else(|e| {
            eprintln!("Execution error: {e}");
            std::process::exit(1);
        });

    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    output: Option<&str>,
    format: &str,
    config: &AufgabenConfig,
) {
    let registry = FormatRegistry::default();
    if let Err(e) = registry.get(format) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_input(input);
    let parsed = transforms::parse_source(&source).unwrap_or_else(|e| {
        eprintln!("Error reading '{input}': {e}");
        std::process::exit(1);
    });

    let options = LoweringOptions::from(&config.lowering);
    let program = compile(&parsed, &options).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let mut spec = PublishSpec::new(&program, format).with_rules(JsonRules::from(&config.output));
    if let Some(path) = output {
        spec = spec.with_output_path(path);
    }

    match publish(spec) {
        Ok(result) => match result.artifact {
            PublishArtifact::InMemory(text) => println!("{text}"),
            PublishArtifact::File(path) => {
                tracing::info!(path = %path.display(), tasks = program.tasks.len(), "conversion finished");
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    println!("Stages:");
    println!("  token   - Token stream handed over by the front end");
    println!("  cst     - Concrete syntax tree");
    println!("  ir      - Intermediate representation (lowered tasks)");
    println!("  domain  - Published domain tree\n");

    println!("Available transform combinations:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }

    println!("\nConversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        println!("  {format_name}");
    }
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn load_cli_config(matches: &ArgMatches) -> AufgabenConfig {
    let mut loader = Loader::new().with_optional_file("aufgaben.toml");
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(order) = matches.get_one::<String>("sentence-order") {
        loader = apply_override(loader, "lowering.sentence_order", order.as_str());
    }
    if let Some(Some(indent)) = matches
        .subcommand_matches("convert")
        .map(|sub| sub.get_one::<usize>("indent"))
    {
        loader = apply_override(loader, "output.indent_width", *indent as i64);
    }

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_override<I>(loader: Loader, key: &str, value: I) -> Loader
where
    I: Into<config::ValueKind>,
{
    loader.set_override(key, value).unwrap_or_else(|err| {
        eprintln!("Invalid setting for {key}: {err}");
        std::process::exit(1);
    })
}

/// Logs go to stderr so stdout stays clean for converted output.
/// `RUST_LOG` wins over the configured filter.
fn init_logging(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
