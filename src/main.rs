use clap::Parser;
use image::ImageReader;
use std::path::PathBuf;

use cardframe::{DetectionConfig, FrameDetector, ResizeSpec, render};

#[derive(Parser)]
#[command(name = "cardframe")]
#[command(about = "Locate the corner points of a bordered answer sheet in an image")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Adaptive threshold window size (odd)
    #[arg(long, default_value_t = 51)]
    block_size: u32,

    /// Adaptive threshold bias
    #[arg(long, default_value_t = 10)]
    c: i32,

    /// Morphological closing kernel size (odd)
    #[arg(long, default_value_t = 5)]
    morph_kernel: u32,

    /// Polygon approximation tolerance as a fraction of the perimeter
    #[arg(long, default_value_t = 0.02)]
    epsilon_factor: f64,

    /// Minimum candidate area as a fraction of the image area
    #[arg(long, default_value_t = 0.1)]
    min_area_ratio: f64,

    /// Resize input to this width before detection (aspect preserved
    /// unless --resize-height is also given)
    #[arg(long, value_name = "PX")]
    resize_width: Option<u32>,

    /// Resize input to this height before detection
    #[arg(long, value_name = "PX")]
    resize_height: Option<u32>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Save intermediate images to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Print the detected corners as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if args.verbose {
        println!("Loading image: {:?}", args.image_path);
    }

    let img = ImageReader::open(&args.image_path)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;

    if args.verbose {
        println!("Image loaded: {}x{}", img.width(), img.height());
    }

    let config = DetectionConfig::default()
        .with_block_size(args.block_size)
        .with_c(args.c)
        .with_morph_kernel(args.morph_kernel)
        .with_epsilon_factor(args.epsilon_factor)
        .with_min_area_ratio(args.min_area_ratio);
    let resize = ResizeSpec::from_targets(args.resize_width, args.resize_height);

    let detector = FrameDetector::new().with_config(config).with_resize(resize);

    if args.verbose {
        println!("Running detection...");
    }
    let stages = detector.detect_with_stages(&img)?;

    if let Some(debug_dir) = &args.debug_out {
        ensure_empty_dir(debug_dir)?;
        stages.gray.save(debug_dir.join("1_gray.png"))?;
        stages.binary.save(debug_dir.join("2_binary.png"))?;
        stages.closed.save(debug_dir.join("3_closed.png"))?;
        let resized = cardframe::detection::preprocessing::resize(&img, resize)?;
        render::draw_polygon(&resized, &stages.polygon).save(debug_dir.join("4_result.png"))?;
        if args.verbose {
            println!("Debug images saved to {}", debug_dir.display());
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stages.polygon)?);
    } else {
        println!("Detected {} corners:", stages.polygon.len());
        for (i, p) in stages.polygon.points.iter().enumerate() {
            println!("  {}: ({}, {})", i + 1, p.x, p.y);
        }
    }

    Ok(())
}

/// The debug directory must be empty or non-existent.
fn ensure_empty_dir(dir: &PathBuf) -> anyhow::Result<()> {
    if dir.exists() {
        let entries = std::fs::read_dir(dir)?;
        if entries.count() > 0 {
            return Err(anyhow::anyhow!(
                "Debug directory is not empty: {}",
                dir.display()
            ));
        }
    } else {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}
