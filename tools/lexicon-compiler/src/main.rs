use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, ensure, Result};
use clap::Parser;
use isl_protocol::Lexicon;
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use rkyv::AlignedVec;

#[derive(Parser)]
#[command(author, version, about = "Compiles a JSON lexicon to a binary archive")]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,
}

/// Rejects lexicons the gloss pipeline could never match against: it
/// compares lowercase stems, and needs interrogatives to survive filtering.
fn validate(lexicon: &Lexicon) -> Result<()> {
    ensure!(!lexicon.past_marker.trim().is_empty(), "past marker is empty");
    ensure!(!lexicon.future_marker.trim().is_empty(), "future marker is empty");

    for word in lexicon.stopwords.iter().chain(&lexicon.question_words) {
        ensure!(
            !word.is_empty() && *word == word.to_lowercase(),
            "entry {:?} must be a non-empty lowercase word",
            word
        );
    }
    if let Some(word) = lexicon.question_words.iter().find(|w| lexicon.stopwords.contains(*w)) {
        return Err(anyhow!("question word {:?} is also a stopword", word));
    }
    Ok(())
}

fn compile(lexicon: &Lexicon) -> Result<AlignedVec> {
    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(lexicon)
        .map_err(|e| anyhow!("failed to serialize lexicon: {:?}", e))?;
    Ok(serializer.into_serializer().into_inner())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("Reading JSON from {:?}...", cli.input);
    let input_data = fs::read_to_string(&cli.input)?;
    let lexicon: Lexicon = serde_json::from_str(&input_data)?;
    validate(&lexicon)?;

    println!(
        "Compiling lexicon version {} with {} stopwords and {} question words...",
        lexicon.version,
        lexicon.stopwords.len(),
        lexicon.question_words.len()
    );
    let bytes = compile(&lexicon)?;

    fs::write(&cli.output, &bytes)?;
    println!("Binary written to {:?} ({} bytes)", cli.output, bytes.len());
    Ok(())
}
