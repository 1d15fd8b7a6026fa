use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glyph_cutout::ufo::{self, CUTOUT_LAYER};
use glyph_cutout::Winding;

#[derive(Parser)]
#[command(name = "glyph-cutout", about = "Bounding box cut-outs for the glyphs of a UFO font")]
struct Cli {
    /// UFO font path (the cut-out layer is written back into it)
    input: PathBuf,

    /// Glyph name to process (repeatable; all glyphs if omitted)
    #[arg(short, long = "glyph")]
    glyphs: Vec<String>,

    /// Layer the cut-out rectangles are drawn into
    #[arg(long, default_value = CUTOUT_LAYER)]
    layer: String,

    /// Winding of filled contours (cw: FontForge/TrueType, ccw: UFO/CFF)
    #[arg(long, value_enum, default_value = "cw")]
    outer: Outer,

    /// Compute only; do not write the layer or save the font
    #[arg(long)]
    dry_run: bool,

    /// Print the cutOut* anchors read back from the layer as JSON
    #[arg(long)]
    anchors: bool,

    /// Report anchors in staff spaces instead of font units
    #[arg(long, requires = "anchors")]
    staff_spaces: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Outer {
    Cw,
    Ccw,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut font = ufo::load(&cli.input)?;
    let winding = match cli.outer {
        Outer::Cw => Winding::Clockwise,
        Outer::Ccw => Winding::CounterClockwise,
    };
    let config = ufo::config_for_font(&font)?.with_outer_winding(winding);

    eprintln!();
    eprintln!(
        "  glyph-cutout \u{00b7} {}  (upm {})",
        cli.input.display(),
        config.units_per_em,
    );
    eprintln!();

    let names = (!cli.glyphs.is_empty()).then_some(cli.glyphs.as_slice());
    let results = ufo::compute(&font, names, &config)?;
    let total: usize = results.iter().map(|r| r.rects.len()).sum();
    eprintln!("  Compute     {} glyphs \u{2192} {} cut-outs", results.len(), total);

    if !cli.dry_run {
        ufo::write_layer(&mut font, &cli.layer, &results)?;
        ufo::save(&font, &cli.input)?;
        eprintln!("  Layer       '{}'", cli.layer);
    }

    if cli.anchors {
        let mut tables = ufo::read_layer_anchors(&font, &cli.layer, &config)?;
        if cli.staff_spaces {
            for table in tables.values_mut() {
                *table = table.in_staff_spaces(config.units_per_em);
            }
        }
        println!("{}", serde_json::to_string_pretty(&tables)?);
    }

    eprintln!();
    eprintln!("  \u{2713} {}", cli.input.display());
    eprintln!();

    Ok(())
}
