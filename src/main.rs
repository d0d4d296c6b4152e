use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use customcolour::config::CmapConfig;
use customcolour::{default_registry, BlendLocation, BlendSpec, Color, Gradient, Registry};
use log::{debug, info};
use std::path::PathBuf;

/// customcolour - custom colormaps and colormap transformations
#[derive(Parser, Debug, Clone)]
#[command(name = "customcolour")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0", global = true)]
    debug: u8,

    /// Gradient config file (defaults to the user config directory)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// List registered gradient names
    List,
    /// Print the samples of a gradient, optionally transformed
    Show(ShowArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct ShowArgs {
    /// Gradient name (e.g. jet, viridis_r, wiridis)
    name: String,

    /// Convert to grayscale
    #[arg(long = "grayscale", conflicts_with_all = ["invert", "add"])]
    grayscale: bool,

    /// Invert the RGB channels
    #[arg(long = "invert", conflicts_with = "add")]
    invert: bool,

    /// Blend a color in: white, black, r,g,b[,a] or #rrggbb[aa]
    #[arg(long = "add", value_name = "COLOR", value_parser = parse_color)]
    add: Option<Color>,

    /// Blend location: start, end, mid or a fraction in 0..=1
    #[arg(long = "loc", value_name = "LOC", default_value = "start")]
    loc: BlendLocation,

    /// Number of transition samples
    #[arg(long = "nblend", value_name = "N", default_value_t = customcolour::DEFAULT_NBLEND)]
    nblend: usize,

    /// Number of samples in the output
    #[arg(long = "ncolor", value_name = "N")]
    ncolor: Option<usize>,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Csv,
    Json,
    /// One `#rrggbbaa` line per sample
    Hex,
}

/// Parse a color argument: "white", "black", "r,g,b[,a]" or "#rrggbb[aa]"
fn parse_color(s: &str) -> Result<Color, String> {
    let s = s.trim();
    match s.to_ascii_lowercase().as_str() {
        "white" | "w" => return Ok(Color::WHITE),
        "black" | "k" => return Ok(Color::BLACK),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix('#') {
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(format!("Expected #rrggbb or #rrggbbaa, got: {}", s));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| format!("Invalid hex color {}: {}", s, e))
        };
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        return Ok(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, a));
    }

    let parts = s
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<f64>()
                .map_err(|e| format!("Invalid channel '{}': {}", p.trim(), e))
        })
        .collect::<Result<Vec<f64>, String>>()?;
    let color = match parts.as_slice() {
        [r, g, b] => Color::rgb(*r, *g, *b),
        [r, g, b, a] => Color::new(*r, *g, *b, *a),
        _ => return Err(format!("Expected format: r,g,b[,a] (e.g., 1,1,0,1), got: {}", s)),
    };
    if color.to_array().iter().any(|c| !(0.0..=1.0).contains(c)) {
        return Err(format!("Color channels must be within 0..=1, got: {}", s));
    }
    Ok(color)
}

fn build_registry(config_path: Option<&PathBuf>) -> Result<Registry> {
    let mut registry = default_registry().context("Failed to build default gradients")?;
    let config = match config_path {
        Some(path) => CmapConfig::load_from_path(path)?,
        None => CmapConfig::load()?,
    };
    let added = config.apply(&mut registry)?;
    debug!("Registry holds {} gradients ({} from config)", registry.len(), added);
    Ok(registry)
}

fn transform(registry: &Registry, args: &ShowArgs) -> Result<Gradient> {
    let spec = BlendSpec::new(args.nblend, args.loc, args.ncolor);
    let gradient = if args.grayscale {
        registry.grayscale(&args.name, args.ncolor)?
    } else if args.invert {
        registry.invert(&args.name, args.ncolor)?
    } else if let Some(color) = args.add {
        if color == Color::WHITE {
            registry.add_white(&args.name, &spec)?
        } else if color == Color::BLACK {
            registry.add_black(&args.name, &spec)?
        } else {
            registry.add_rgba(&args.name, color, &spec)?
        }
    } else {
        match args.ncolor {
            Some(0) => bail!("--ncolor must be at least 1"),
            Some(n) => {
                let source = registry.resolve(&args.name)?;
                Gradient::from_samples(source.name(), source.sample(n))?
            }
            None => registry.resolve(&args.name)?.clone(),
        }
    };
    Ok(gradient)
}

fn hex_color(color: &Color) -> String {
    let (r, g, b, a) = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
}

fn print_gradient(gradient: &Gradient, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(gradient)?);
        }
        OutputFormat::Csv => {
            println!("# {} ({} samples)", gradient.name(), gradient.len());
            println!("index,r,g,b,a");
            for (i, c) in gradient.samples().iter().enumerate() {
                println!("{},{:.6},{:.6},{:.6},{:.6}", i, c.r, c.g, c.b, c.a);
            }
        }
        OutputFormat::Hex => {
            for c in gradient.samples() {
                println!("{}", hex_color(c));
            }
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let registry = build_registry(cli.config.as_ref())?;

    match &cli.command {
        Command::List => {
            for name in registry.names() {
                println!("{}", name);
            }
        }
        Command::Show(args) => {
            let gradient = transform(&registry, args)?;
            info!("Built '{}' with {} samples", gradient.name(), gradient.len());
            print_gradient(&gradient, args.format)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger with verbosity based on -d/--debug flag
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting customcolour v{}", env!("CARGO_PKG_VERSION"));

    run(&cli)
}
