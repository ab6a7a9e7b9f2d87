use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use design_dna::analysis::{PixelSource, RawCssData, SemanticAnalysis};
use design_dna::types::SourceType;
use design_dna::{AnalysisPipeline, AppError, Configuration};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Source {
    Url,
    Image,
}

impl From<Source> for SourceType {
    fn from(source: Source) -> Self {
        match source {
            Source::Url => SourceType::Url,
            Source::Image => SourceType::Image,
        }
    }
}

/// Extract a design profile (palette, typography, spacing, effects) from a
/// screenshot and an optional CSS aggregate.
#[derive(Parser, Debug)]
#[command(name = "design-dna")]
#[command(about = "Turn a screenshot into a structured design profile and token exports")]
struct Args {
    /// Configuration file (TOML, JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Screenshot or uploaded image to sample colors from
    #[arg(short, long)]
    image: PathBuf,

    /// Computed-style aggregate scraped from the page (JSON)
    #[arg(long)]
    css: Option<PathBuf>,

    /// Raw JSON answer of the vision model; missing or unreadable means unavailable
    #[arg(long)]
    ai: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Source::Url)]
    source_type: Source,

    /// Page URL or file name the profile describes (defaults to the image path)
    #[arg(long)]
    source_value: Option<String>,

    #[arg(long)]
    screenshot_url: Option<String>,

    /// Include CSS, SCSS, Tailwind, design-token and ASE exports
    #[arg(long)]
    exports: bool,

    #[arg(long)]
    pretty: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_semantic(path: Option<&PathBuf>, source_type: SourceType) -> SemanticAnalysis {
    let Some(path) = path else {
        return SemanticAnalysis::partial();
    };
    match fs::read_to_string(path) {
        Ok(text) => SemanticAnalysis::from_json_str(&text, source_type),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "AI result unavailable");
            SemanticAnalysis::partial()
        }
    }
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    init_logging();

    let configuration = Configuration::load(args.config.as_deref())?;
    let source_type = SourceType::from(args.source_type);

    let pixels = fs::read(&args.image)?;
    let semantic = read_semantic(args.ai.as_ref(), source_type);
    let source_value = args
        .source_value
        .unwrap_or_else(|| args.image.display().to_string());

    let mut builder = AnalysisPipeline::builder(configuration)
        .pixel_source(PixelSource::Encoded(pixels))
        .semantic(semantic)
        .source_type(source_type)
        .source_value(source_value);

    if let Some(path) = &args.css {
        let css: RawCssData = serde_json::from_str(&fs::read_to_string(path)?)?;
        builder = builder.css_data(css);
    }
    if let Some(url) = args.screenshot_url {
        builder = builder.screenshot_url(url);
    }

    let pipeline = builder.build()?;
    let rendered = if args.exports {
        render(&pipeline.run_with_exports()?, args.pretty)?
    } else {
        render(&pipeline.run(), args.pretty)?
    };
    println!("{rendered}");
    info!("Done");
    Ok(())
}
