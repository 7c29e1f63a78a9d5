use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use diam_proto::{
    generate, load_dictionaries, render_schema, resolve_interfaces, schema_to_json, GenerateError,
    GeneratorConfig, NumberingPolicy, RenderOptions,
};

#[derive(Parser)]
#[command(name = "diam2proto")]
#[command(about = "Generate protobuf messages from Diameter dictionaries", long_about = None)]
struct Cli {
    /// Dictionary folders or files to load (repeatable, comma separated)
    #[arg(short = 'd', long = "dict", value_delimiter = ',', default_value = "./dict")]
    dicts: Vec<PathBuf>,

    /// Comma separated interfaces from [gx, gy, rx, sh, sy], or application ids
    #[arg(long, default_value = "gx,gy")]
    intf: String,

    /// Field number format: seq or avpcode
    #[arg(long = "number-format", alias = "numberFormat", default_value = "seq", value_parser = parse_numbering)]
    number_format: NumberingPolicy,

    /// Append the AVP code to each field as a comment
    #[arg(long)]
    annotate: bool,

    /// Emit the proto3 syntax line and well-known-type imports
    #[arg(long)]
    header: bool,

    /// Package name for the header (implies --header)
    #[arg(long)]
    package: Option<String>,

    /// Print the generated message trees as JSON instead of .proto text
    #[arg(long)]
    json: bool,

    /// Output file (if omitted, prints to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_numbering(value: &str) -> Result<NumberingPolicy, String> {
    value.parse().map_err(|e: GenerateError| e.to_string())
}

fn main() -> Result<(), GenerateError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let applications = resolve_interfaces(&cli.intf)?;
    let config = GeneratorConfig::new(applications)
        .with_numbering(cli.number_format)
        .with_annotations(cli.annotate);
    let options = RenderOptions {
        header:  cli.header || cli.package.is_some(),
        package: cli.package.clone(),
    };

    let dict = load_dictionaries(&cli.dicts)?;
    let schema = generate(&dict, &config)?;
    let text = if cli.json {
        schema_to_json(&schema)?
    } else {
        render_schema(&schema, &options)
    };

    if let Some(out_path) = &cli.output {
        fs::write(out_path, &text)?;
        info!("Generated {} definitions into {}", schema.definitions.len(), out_path.display());
    } else {
        print!("{}", text);
    }
    Ok(())
}
