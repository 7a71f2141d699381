mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use json_schema_to_graphql::{ConvertOptions, FallbackType, JsonSchema, SchemaConverter};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "json-schema-to-graphql", version)]
#[command(about = "Convert a JSON Schema definition to a GraphQL type definition", long_about = None)]
struct Cli {
    /// Input JSON Schema file (use '-' for stdin)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Custom type name for the generated GraphQL type
    #[arg(short, long, value_name = "NAME")]
    type_name: Option<String>,

    /// JSON file with conversion options (fallbackTypes, arraysNullable, descriptions)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Scalar to use for an unsupported field path, e.g. `collections[]=string`
    #[arg(short, long = "fallback", value_name = "PATH=TYPE", value_parser = parse_fallback)]
    fallbacks: Vec<(String, FallbackType)>,

    /// Leave list items nullable (`[String]` instead of `[String!]`)
    #[arg(long)]
    arrays_nullable: bool,

    /// Render JSON Schema descriptions as GraphQL descriptions
    #[arg(long)]
    descriptions: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_fallback(value: &str) -> std::result::Result<(String, FallbackType), String> {
    let (path, type_name) = value
        .rsplit_once('=')
        .ok_or_else(|| format!("expected PATH=TYPE, got `{value}`"))?;
    if path.is_empty() {
        return Err(format!("missing field path in `{value}`"));
    }
    Ok((path.to_string(), type_name.parse()?))
}

fn load_options(cli: &Cli) -> Result<ConvertOptions> {
    let mut options = match &cli.config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => ConvertOptions::default(),
    };

    // Flags extend the config file; they never switch a setting off.
    for (path, fallback) in &cli.fallbacks {
        options.fallback_types.insert(path.clone(), *fallback);
    }
    options.arrays_nullable |= cli.arrays_nullable;
    options.descriptions |= cli.descriptions;

    Ok(options)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Read input
    let input_content = if cli.input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        buffer
    } else {
        fs::read_to_string(&cli.input).with_context(|| format!("Failed to read {}", cli.input))?
    };

    let options = load_options(&cli)?;
    tracing::debug!(?options, "loaded options");

    // Convert schema
    let schema: JsonSchema =
        serde_json::from_str(&input_content).context("Failed to parse JSON Schema")?;
    let converter = SchemaConverter::new(options);
    let graphql = match &cli.type_name {
        Some(type_name) => converter.convert_with_name(&schema, type_name)?,
        None => converter.convert(&schema)?,
    };

    // Write output
    if let Some(output_path) = cli.output {
        fs::write(&output_path, graphql)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
    } else {
        println!("{}", graphql);
    }

    Ok(())
}
