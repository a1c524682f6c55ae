//! Compare two texts (or the built-in samples) and print both segment lists.
//!
//! ```text
//! RUST_LOG=variant_diff=debug cargo run --example compare -- a.txt b.txt [config.yaml]
//! ```

use std::env;
use std::error::Error;
use std::fs;

use tracing_subscriber::EnvFilter;
use variant_diff::{DiffConfig, DiffEngine, Segment, Tag};

const SAMPLE_A: &str = "【職務経歴】\n株式会社サンプル にて Rust で 決済基盤 を 開発 (2019-2023)。";
const SAMPLE_B: &str = "【職務経歴】\n株式会社サンプル にて Go で 決済基盤 を 設計・開発 (2019-2024)。";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (a, b) = match args.as_slice() {
        [a, b, ..] => (fs::read_to_string(a)?, fs::read_to_string(b)?),
        _ => (SAMPLE_A.to_string(), SAMPLE_B.to_string()),
    };
    let config = match args.get(2) {
        Some(path) => DiffConfig::from_file(path)?,
        None => DiffConfig::default(),
    };

    let engine = DiffEngine::new(config)?;
    let comparison = engine.compare(&a, &b)?;

    println!("A: {}", render(&comparison.segments.segments_a));
    println!("B: {}", render(&comparison.segments.segments_b));
    println!("difference rate: {}%", comparison.difference_rate);
    println!("{}", serde_json::to_string_pretty(&comparison)?);

    Ok(())
}

fn render(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment.tag {
            Tag::Same => segment.text.clone(),
            Tag::Different => format!("[{}]", segment.text),
        })
        .collect()
}
