//! markyp command-line tool
//!
//! Reads markup files through the markyp parser and writes them back out in
//! canonical form, or just checks that they parse.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use clap::{Parser, Subcommand};
use markyp::{Markup, PropertyValue, Variant};

/// markyp markup reformatter
#[derive(Parser)]
#[command(name = "markyp")]
#[command(version)]
#[command(about = "Parse markup into element trees and render it back", long_about = None)]
struct Cli {
    /// Print debug logs (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a file and render it back
    #[command(visible_alias = "r")]
    Reformat {
        /// Input file
        input: String,
        /// Output file (default: stdout)
        output: Option<String>,

        /// Register the core element variants under their own names
        #[arg(long)]
        core: bool,

        /// Register a variant under a tag, e.g. `p=StringElement`
        #[arg(long = "rule", value_name = "TAG=VARIANT", value_parser = parse_rule)]
        rules: Vec<(String, Variant)>,

        /// Add a property to every element, e.g. `data-checked` or `lang=en`
        #[arg(long = "mark", value_name = "KEY[=VALUE]", value_parser = parse_mark)]
        marks: Vec<(String, PropertyValue)>,
    },

    /// Parse a file and report its element count
    #[command(visible_alias = "c")]
    Check {
        /// Input file
        input: String,
    },
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Reformat {
            input,
            output,
            core,
            rules,
            marks,
        } => build_parser(core, rules, marks)
            .and_then(|parser| run_reformat(&parser, &input, output.as_deref())),
        Commands::Check { input } => run_check(&input),
    };

    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

/// Parses a `TAG=VARIANT` rule argument.
fn parse_rule(arg: &str) -> Result<(String, Variant), String> {
    let (tag, name) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected TAG=VARIANT, got {:?}", arg))?;
    let variant = Variant::from_type_name(name).ok_or_else(|| {
        let known: Vec<&str> = Variant::ALL.iter().map(|v| v.type_name()).collect();
        format!("unknown variant {:?}, expected one of: {}", name, known.join(", "))
    })?;
    Ok((tag.to_string(), variant))
}

/// Parses a `KEY[=VALUE]` mark argument. Without a value the mark is a flag.
fn parse_mark(arg: &str) -> Result<(String, PropertyValue), String> {
    let (key, value) = match arg.split_once('=') {
        Some((key, value)) => (key, PropertyValue::from(value)),
        None => (arg, PropertyValue::Flag),
    };
    if key.is_empty() {
        return Err(format!("missing property name in {:?}", arg));
    }
    Ok((key.to_string(), value))
}

/// Builds the parser for the `reformat` command.
fn build_parser(
    core: bool,
    rules: Vec<(String, Variant)>,
    marks: Vec<(String, PropertyValue)>,
) -> Result<markyp::Parser, Box<dyn std::error::Error>> {
    let mut parser = markyp::Parser::new();
    if core {
        parser.add_rules(Variant::CORE.map(Variant::factory))?;
    }
    parser.add_rules(
        rules
            .into_iter()
            .map(|(tag, variant)| (tag.clone(), variant.factory().named(tag))),
    )?;

    log::debug!("{} rule(s) registered", parser.rule_count());

    if !marks.is_empty() {
        parser.set_converter(move |factory, children, mut properties| {
            for (key, value) in &marks {
                properties.insert(key.clone(), value.clone());
            }
            (factory, children, properties)
        });
    }
    Ok(parser)
}

/// Parses the input and writes its markup to the output.
fn run_reformat(
    parser: &markyp::Parser,
    input_path: &str,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Parsing: {}", input_path);
    let element = parser.parse_file(input_path)?;

    let mut output: Box<dyn Write> = match output_path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout()),
    };
    writeln!(output, "{}", element.markup())?;
    output.flush()?;

    eprintln!("Reformat complete.");
    Ok(())
}

/// Parses the input with the any-tag fallback only.
fn run_check(input_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let element = markyp::Parser::new().parse_file(input_path)?;
    println!("{}: {} elements", input_path, count_elements(&*element));
    Ok(())
}

/// Counts an element and all its descendant elements.
fn count_elements(element: &dyn Markup) -> usize {
    1 + element
        .child_nodes()
        .unwrap_or_default()
        .iter()
        .filter_map(|node| node.as_element())
        .map(count_elements)
        .sum::<usize>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_rule() {
        assert_eq!(
            parse_rule("p=StringElement").unwrap(),
            ("p".to_string(), Variant::String)
        );
        assert!(parse_rule("p").is_err());
        assert!(parse_rule("p=Paragraph").is_err());
    }

    #[test]
    fn test_parse_mark() {
        assert_eq!(
            parse_mark("lang=en").unwrap(),
            ("lang".to_string(), PropertyValue::from("en"))
        );
        assert_eq!(
            parse_mark("hidden").unwrap(),
            ("hidden".to_string(), PropertyValue::Flag)
        );
        assert!(parse_mark("=x").is_err());
    }

    #[test]
    fn test_reformat_with_rules_and_marks() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.xml");
        let output = dir.path().join("out.xml");
        fs::write(&input, "<doc><p>a &amp; b</p><br/></doc>").unwrap();

        let parser = build_parser(
            false,
            vec![
                ("p".to_string(), Variant::String),
                ("br".to_string(), Variant::Standalone),
            ],
            vec![("seen".to_string(), PropertyValue::Flag)],
        )
        .unwrap();
        run_reformat(
            &parser,
            input.to_str().unwrap(),
            Some(output.to_str().unwrap()),
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "<doc seen>\n<p seen>a &amp; b</p>\n<br seen>\n</doc>\n"
        );
    }

    #[test]
    fn test_invalid_rule_tag() {
        let result = build_parser(false, vec![("a b".to_string(), Variant::Element)], Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_count_elements() {
        let parser = markyp::Parser::new();
        let element = parser
            .parse_str("<a><b><c/></b><d>text</d></a>")
            .unwrap();
        assert_eq!(count_elements(&*element), 4);
    }

    #[test]
    fn test_check_missing_file() {
        assert!(run_check("/no/such/file.xml").is_err());
    }
}
