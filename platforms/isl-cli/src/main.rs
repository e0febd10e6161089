mod config;
mod playlist;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use config::Config;
use isl_corenlp::CoreNlpClient;
use isl_gloss::{ConstituencyParser, IslConverter, PosTagger};
use log::{error, info};
use playlist::{ClipKind, ClipLibrary};

struct Session<'a, P, T> {
    converter: IslConverter<P, T>,
    clips: Option<ClipLibrary>,
    show_tree: bool,
    out: io::StdoutLock<'a>,
}

impl<P: ConstituencyParser, T: PosTagger> Session<'_, P, T> {
    fn translate(&mut self, sentence: &str) -> Result<()> {
        let report = self.converter.convert_detailed(sentence)?;

        if self.show_tree {
            writeln!(self.out, "Tense: {}", report.tense)?;
            writeln!(self.out, "Tree: {}", report.tree)?;
        }
        writeln!(self.out, "Indian Sign Language Text: {}", report.gloss)?;

        if let Some(clips) = &self.clips {
            for clip in clips.plan(&report.gloss) {
                let kind = match clip.kind {
                    ClipKind::Word => "word",
                    ClipKind::Letter => "letter",
                };
                let missing = if clip.present { "" } else { " (missing)" };
                writeln!(self.out, "  {} {}{}", kind, clip.path.display(), missing)?;
            }
        }
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let Some(line) = lines.next() else {
                return Ok(());
            };
            if let Err(err) = self.translate(&line?) {
                error!("{:#}", err);
                writeln!(self.out, "error: {:#}", err)?;
            }
        }
    }
}

fn main() -> Result<()> {
    let config = Config::parse();

    // RUST_LOG, when set, overrides --log-level
    env_logger::Builder::new()
        .filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .parse_default_env()
        .init();
    info!("Configuration: {:?}", config);

    let lexicon = config.load_lexicon()?;
    let client = CoreNlpClient::new(config.corenlp())?;

    let mut session = Session {
        converter: IslConverter::with_lexicon(&client, &client, &lexicon),
        clips: config.clips.as_ref().map(ClipLibrary::new),
        show_tree: config.show_tree,
        out: io::stdout().lock(),
    };

    match &config.text {
        Some(text) => session.translate(text),
        None => session.prompt(),
    }
}
