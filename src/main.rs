use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use qrmint::{render, Charset, ECLevel, EncodeOptions, MaskPattern, Version};

#[derive(Parser)]
#[command(name = "qrmint", about = "Encode text into a QR Code symbol")]
struct Cli {
    /// Text to encode
    text: String,

    /// Error correction level: L, M, Q or H
    #[arg(short, long, default_value = "M")]
    level: ECLevel,

    /// Fixed version 1-10, smallest fitting version when omitted
    #[arg(short, long, value_parser = parse_version)]
    version: Option<Version>,

    /// Data mask pattern 0-7
    #[arg(short, long, default_value = "0", value_parser = parse_mask)]
    mask: MaskPattern,

    /// Text to bytes policy: latin1, latin1-lossy or utf8
    #[arg(short, long, default_value = "latin1")]
    charset: Charset,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Quiet zone in modules
    #[arg(long, default_value_t = 4)]
    margin: usize,

    /// Pixels per module for svg output
    #[arg(long, default_value_t = 4)]
    scale: usize,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Svg,
    DataUri,
}

fn parse_version(s: &str) -> Result<Version, String> {
    let v = s.parse::<usize>().map_err(|e| e.to_string())?;
    Version::new(v).map_err(|e| e.to_string())
}

fn parse_mask(s: &str) -> Result<MaskPattern, String> {
    let m = s.parse::<u8>().map_err(|e| e.to_string())?;
    MaskPattern::new(m).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for the symbol
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_writer(io::stderr).with_env_filter(filter).with_target(false).init();

    let opts = EncodeOptions {
        ec_level: cli.level,
        version: cli.version,
        mask: cli.mask,
        charset: cli.charset,
    };
    let qr = qrmint::encode(&cli.text, &opts).context("Failed to encode text")?;
    info!(version = *qr.version(), size = qr.size(), "Encoded symbol");

    let svg_opts = render::SvgOptions { margin: cli.margin, scale: cli.scale };
    let out = match cli.format {
        Format::Text => render::to_str(&qr, cli.margin),
        Format::Svg => render::svg(&qr, svg_opts),
        Format::DataUri => render::svg_data_uri(&qr, svg_opts),
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, out).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Wrote output");
        }
        None => println!("{out}"),
    }

    Ok(())
}
