//! dxtc CLI - Command-line tool for decoding DXT1/DXT3 textures.
//!
//! This is the main entry point for the dxtc command-line application.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use dxtc::prelude::*;

/// dxtc - DXT1/DXT3 texture decoder
#[derive(Parser)]
#[command(name = "dxtc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a DDS file or raw DXT payload to PNG
    Decode {
        /// Input file
        #[arg(short, long, env = "DXTC_INPUT")]
        input: PathBuf,

        /// Output PNG file
        #[arg(short, long, env = "DXTC_OUTPUT")]
        output: PathBuf,

        /// Treat the input as a raw payload of this format (dxt1, dxt3)
        #[arg(short, long, requires_all = ["width", "height"])]
        format: Option<BlockFormat>,

        /// Width in pixels (raw input only)
        #[arg(long)]
        width: Option<u32>,

        /// Height in pixels (raw input only)
        #[arg(long)]
        height: Option<u32>,
    },

    /// Show header information for a DDS file
    Info {
        /// Input DDS file
        #[arg(short, long, env = "DXTC_INPUT")]
        input: PathBuf,
    },

    /// Decode every matching DDS file in a directory to PNG
    Batch {
        /// Input directory
        #[arg(short, long, env = "DXTC_INPUT")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, env = "DXTC_OUTPUT")]
        output: PathBuf,

        /// File pattern (glob-style, relative to the input directory)
        #[arg(short, long, default_value = "**/*.dds")]
        pattern: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Decode {
            input,
            output,
            format,
            width,
            height,
        } => {
            let raw = match (format, width, height) {
                (Some(format), Some(width), Some(height)) => Some((format, width, height)),
                _ => None,
            };
            cmd_decode(&input, &output, raw)?;
        }
        Commands::Info { input } => {
            cmd_info(&input)?;
        }
        Commands::Batch {
            input,
            output,
            pattern,
        } => {
            cmd_batch(&input, &output, &pattern)?;
        }
    }

    Ok(())
}

fn cmd_decode(input: &Path, output: &Path, raw: Option<(BlockFormat, u32, u32)>) -> Result<()> {
    println!("Decoding: {} -> {}", input.display(), output.display());

    let start = Instant::now();
    let data = fs::read(input).context("Failed to read input file")?;

    let image = match raw {
        Some((format, width, height)) => {
            let needed = format
                .compressed_size(width, height)
                .with_context(|| format!("{width}x{height} {format} payload size overflows"))?;
            if data.len() < needed {
                anyhow::bail!(
                    "Input has {} bytes, {width}x{height} {format} needs {needed}",
                    data.len()
                );
            }
            let pixels = decompress(format, &data, width, height)
                .with_context(|| format!("Failed to decode {format} payload"))?;
            DecodedImage {
                width,
                height,
                format,
                pixels,
            }
        }
        None => decode_dds(&data).context("Failed to decode DDS file")?,
    };

    write_png(&image, output)?;

    println!(
        "Decoded {}x{} {} in {:?}",
        image.width,
        image.height,
        image.format,
        start.elapsed()
    );

    Ok(())
}

fn cmd_info(input: &Path) -> Result<()> {
    let data = fs::read(input).context("Failed to read input file")?;
    let file = DdsFile::parse(&data).context("Failed to parse DDS header")?;

    let header = file.header();
    let four_cc = header.pixel_format.four_cc;

    println!("File:       {}", input.display());
    println!("Dimensions: {}x{}", file.width(), file.height());
    println!("Format:     {} (FourCC {})", file.format(), four_cc);
    if let Some(dx10) = file.dx10_header() {
        let dxgi_format = dx10.dxgi_format;
        println!("DXGI:       {}", dxgi_format);
    }
    println!("Mip levels: {}", header.mip_levels());
    println!(
        "Surface:    {} bytes ({} bytes payload)",
        file.surface_len(),
        file.payload().len()
    );

    Ok(())
}

fn cmd_batch(input: &Path, output: &Path, pattern: &str) -> Result<()> {
    let full_pattern = input.join(pattern);
    let files: Vec<PathBuf> = glob::glob(&full_pattern.to_string_lossy())
        .context("Invalid file pattern")?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable path: {}", e);
                None
            }
        })
        .collect();

    println!("Decoding {} files to {}...", files.len(), output.display());

    fs::create_dir_all(output)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let start = Instant::now();
    let errors = AtomicUsize::new(0);

    files.par_iter().for_each(|path| {
        let relative = path.strip_prefix(input).unwrap_or(path);
        let output_path = output.join(relative).with_extension("png");

        if let Err(e) = decode_file(path, &output_path) {
            pb.suspend(|| eprintln!("Error decoding {}: {:#}", path.display(), e));
            errors.fetch_add(1, Ordering::Relaxed);
        }

        pb.inc(1);
    });

    pb.finish_with_message("Done");

    let errors = errors.into_inner();
    println!(
        "Decoded {} files in {:?} ({} errors)",
        files.len() - errors,
        start.elapsed(),
        errors
    );

    Ok(())
}

fn decode_file(input: &Path, output: &Path) -> Result<()> {
    let data = fs::read(input).context("Failed to read input file")?;
    let image = decode_dds(&data).context("Failed to decode DDS file")?;

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    write_png(&image, output)?;

    debug!(path = %output.display(), width = image.width, height = image.height, "wrote PNG");
    Ok(())
}

fn write_png(image: &DecodedImage, output: &Path) -> Result<()> {
    let buffer = image::RgbaImage::from_raw(image.width, image.height, image.pixels.clone())
        .context("Decoded buffer does not match image dimensions")?;
    buffer
        .save_with_format(output, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}
