use std::env;
use std::fs;

use log::info;
use serde::Deserialize;

use rs_grams_core::model::{
    digraphs, extract_text, frequencies_text, most_common, positions_text, repeat_positions_text, repeats_with,
    RepeatConfig, Window,
};

const SAMPLE: &str = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOGTHEEND";

/// Settings read from the optional JSON file given as second argument.
///
/// Example: `{ "window": { "length": 3, "cut": 1 }, "repeats": { "minimum": 3 }, "top": 5 }`
#[derive(Deserialize, Default)]
struct DemoConfig {
    #[serde(default)]
    window: Window,
    #[serde(default)]
    repeats: RepeatConfig,
    #[serde(default = "default_top")]
    top: usize,
}

fn default_top() -> usize { 10 }

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=trace shows the extraction diagnostics of the core library
    env_logger::init();

    // Text to analyse, built-in sample by default
    let text = env::args().nth(1).unwrap_or_else(|| SAMPLE.to_owned());

    let config: DemoConfig = match env::args().nth(2) {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => DemoConfig { top: default_top(), ..Default::default() },
    };
    config.repeats.validate()?;
    info!("Analysing {} code points with {:?}", text.chars().count(), config.window);

    let (length, cut) = (config.window.length(), config.window.cut());

    // Windows in extraction order
    let ngrams = extract_text(&text, length, cut)?;
    println!("{} n-grams (length {}, cut {}): {:?}", ngrams.len(), length, cut, ngrams);

    // Most frequent n-grams
    let frequencies = frequencies_text(&text, length, cut)?;
    for (ngram, occurrence) in most_common(&frequencies, config.top) {
        println!("{}: {}", ngram, occurrence);
    }

    // Indices are counted in extracted windows, not in characters
    let positions = positions_text(&text, length, cut)?;
    let mut keys: Vec<&String> = positions.keys().collect();
    keys.sort();
    for key in keys.into_iter().take(config.top) {
        println!("{} at {:?}", key, positions[key]);
    }

    // The named-length helpers work on any slice
    let chars: Vec<char> = text.chars().collect();
    println!("{} digraphs, {} tiled", digraphs(&chars, 0).len(), digraphs(&chars, 1).len());

    // Sequences seen more than once
    let repeats = repeats_with(&chars, &config.repeats)?;
    println!("{} repeated sequences for lengths {:?}", repeats.len(), config.repeats.lengths());
    let offsets = repeat_positions_text(&text, config.repeats.minimum, config.repeats.maximum)?;
    let mut repeated: Vec<(&String, &Vec<usize>)> = offsets.iter().collect();
    repeated.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()).then_with(|| a.0.cmp(b.0)));
    for (ngram, starts) in repeated.into_iter().take(config.top) {
        println!("repeat {} at offsets {:?}", ngram, starts);
    }

    Ok(())
}
