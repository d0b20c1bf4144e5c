//! Command-line size selection
//!
//! Runs a candidate list through the library's selectors, e.g.:
//!
//! `camfit --target 1280x720 320x240 640x480 800x600 1280x720`

use camfit::{best_by_area, best_by_aspect, closest_by_dimensions, Size, Target};
use clap::{Parser, ValueEnum};
use std::process;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Nearest pixel area
    Area,
    /// Nearest height within the aspect-ratio tolerance
    Aspect,
    /// Nearest width and height
    Dimensions,
}

impl Strategy {
    fn name(self) -> &'static str {
        match self {
            Strategy::Area => "area",
            Strategy::Aspect => "aspect",
            Strategy::Dimensions => "dimensions",
        }
    }
}

/// Select the best-fit capture size from a candidate list
#[derive(Parser)]
#[command(name = "camfit")]
#[command(version)]
#[command(about = "Select the best-fit capture size from a candidate list", long_about = None)]
struct Args {
    /// Target size as WIDTHxHEIGHT
    #[arg(short, long, value_parser = parse_size)]
    target: Size,

    /// Selection strategy
    #[arg(long, value_enum, default_value_t = Strategy::Area)]
    by: Strategy,

    /// Only print the chosen size
    #[arg(short, long)]
    quiet: bool,

    /// Candidate sizes as WIDTHxHEIGHT
    #[arg(value_parser = parse_size, required = true)]
    sizes: Vec<Size>,
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("bad size {s:?}, expected WIDTHxHEIGHT"))?;
    let width: u32 = w.parse().map_err(|_| format!("bad width in {s:?}"))?;
    let height: u32 = h.parse().map_err(|_| format!("bad height in {s:?}"))?;
    if width == 0 || height == 0 {
        return Err(format!("size {s:?} has a zero dimension"));
    }
    Ok(Size::new(width, height))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let target = match Target::new(args.target.width, args.target.height) {
        Ok(target) => target,
        Err(err) => {
            eprintln!("camfit: {err}");
            process::exit(2);
        }
    };

    let chosen = match args.by {
        Strategy::Area => best_by_area(&args.sizes, target).ok(),
        Strategy::Aspect => best_by_aspect(&args.sizes, target),
        Strategy::Dimensions => closest_by_dimensions(&args.sizes, target),
    };

    match chosen {
        Some(size) if args.quiet => println!("{size}"),
        Some(size) => println!("{size} (target {}, by {})", args.target, args.by.name()),
        None => {
            eprintln!("camfit: no candidate matched");
            process::exit(1);
        }
    }
}
