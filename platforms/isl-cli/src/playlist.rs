use std::path::{Path, PathBuf};

use isl_protocol::GlossSequence;
use log::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipKind {
    /// One clip for the whole gloss token.
    Word,
    /// One letter of a fingerspelled token.
    Letter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clip {
    pub path: PathBuf,
    pub kind: ClipKind,
    pub present: bool,
}

/// A directory of `<name>.mp4` sign clips.
pub struct ClipLibrary {
    root: PathBuf,
}

impl ClipLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn clip_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.mp4", name))
    }

    /// A token with its own clip plays that clip; any other token is
    /// fingerspelled one character at a time. Missing letter clips stay in
    /// the plan, marked absent.
    pub fn plan(&self, gloss: &GlossSequence) -> Vec<Clip> {
        let mut playlist = Vec::new();
        for token in gloss.tokens() {
            let word = self.clip_path(token);
            if word.is_file() {
                playlist.push(Clip { path: word, kind: ClipKind::Word, present: true });
                continue;
            }

            for letter in token.chars() {
                let path = self.clip_path(&letter.to_string());
                let present = path.is_file();
                if !present {
                    warn!("no clip for {:?}", path);
                }
                playlist.push(Clip { path, kind: ClipKind::Letter, present });
            }
        }
        playlist
    }
}
