use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use isl_corenlp::CoreNlpConfig;
use isl_protocol::Lexicon;

#[derive(Debug, Clone, Parser)]
#[command(name = "isl", version)]
#[command(about = "Translate English sentences into Indian Sign Language gloss")]
pub struct Config {
    /// CoreNLP server URL
    #[arg(long, env = "ISL_CORENLP_URL", default_value = isl_corenlp::DEFAULT_URL)]
    pub url: String,

    /// Per-request timeout for the CoreNLP server, in seconds
    #[arg(long, env = "ISL_CORENLP_TIMEOUT", default_value = "30")]
    pub timeout_secs: u64,

    /// Compiled lexicon archive (see lexicon-compiler); built-in English otherwise
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Directory of sign clips; prints the playlist for each gloss
    #[arg(long, value_name = "DIR")]
    pub clips: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Translate this sentence and exit instead of prompting
    #[arg(short, long)]
    pub text: Option<String>,

    /// Also print the tense and the reordered, pruned tree
    #[arg(long)]
    pub show_tree: bool,
}

impl Config {
    pub fn corenlp(&self) -> CoreNlpConfig {
        CoreNlpConfig {
            url: self.url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..Default::default()
        }
    }

    pub fn load_lexicon(&self) -> Result<Lexicon> {
        let Some(path) = &self.lexicon else {
            return Ok(Lexicon::english());
        };
        let bytes = fs::read(path).with_context(|| format!("failed to read lexicon {:?}", path))?;
        Lexicon::from_archive_bytes(&bytes).with_context(|| format!("failed to load lexicon {:?}", path))
    }
}
