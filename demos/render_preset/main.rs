//! Preset renderer: loads a preset book, generates one curve and prints a
//! summary of the buffers a renderer would upload.
//!
//! Usage:
//! ```text
//! cargo run --example render_preset -- demos/presets.json              # every preset
//! cargo run --example render_preset -- demos/presets.json -p drift     # one preset
//! cargo run --example render_preset -- demos/presets.json -p rose -n 8 # print 8 vertices
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use curvework::pattern::{GenerateCurve, GeneratorConfig, DEFAULT_CAPACITY};
use curvework::preset::PresetBook;

#[derive(Parser, Debug)]
#[command(about = "Generate pattern curves from a JSON preset book")]
struct Args {
    /// Preset book (JSON object of name -> parameters)
    book: PathBuf,

    /// Only render this preset
    #[arg(short, long)]
    preset: Option<String>,

    /// Vertex buffer capacity
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Number of leading vertices to print per preset
    #[arg(short = 'n', long, default_value_t = 0)]
    show: usize,
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for curvework.
    // Override with RUST_LOG (e.g. RUST_LOG=curvework=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("curvework=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    let file = File::open(&args.book)
        .with_context(|| format!("opening {}", args.book.display()))?;
    let book = PresetBook::from_reader(BufReader::new(file))?;

    let names: Vec<String> = match &args.preset {
        Some(name) => vec![name.clone()],
        None => book.names().map(str::to_owned).collect(),
    };

    let config = GeneratorConfig {
        capacity: args.capacity,
    };
    for name in &names {
        let params = book.get(name)?;
        let curve = GenerateCurve::new(params)
            .with_config(config)
            .execute()
            .with_context(|| format!("generating {name}"))?;

        println!(
            "{name}: {} vertices, {} loop boundaries, {} floats per buffer{}",
            curve.draw_count(),
            curve.loop_boundaries(),
            curve.position_buffer().len(),
            if curve.truncated() { " (truncated)" } else { "" },
        );
        if let Some(aabb) = curve.bounding_box() {
            let size = aabb.size();
            println!(
                "  bounds: center ({:.3}, {:.3}) size {:.3} x {:.3}",
                aabb.center().x,
                aabb.center().y,
                size.x,
                size.y
            );
        }
        for (i, p) in curve.vertices().iter().take(args.show).enumerate() {
            println!("  [{i}] {:.5} {:.5} {:.5}", p.x, p.y, p.z);
        }
    }
    Ok(())
}
