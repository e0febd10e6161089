use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use crate::pos::PosTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Tense {
    Past = 0,
    Present = 1,
    Future = 2,
    Unknown = 3,
}

impl Tense {
    /// Tense signalled by a single verb tag.
    ///
    /// `MD` and `VBP` both count as future: modals are treated as "will"-class
    /// auxiliaries, which over-reports future for "can", "must", "eat", ...
    pub const fn from_verb_tag(tag: PosTag) -> Option<Tense> {
        match tag {
            PosTag::VBD => Some(Tense::Past),
            PosTag::VB | PosTag::VBZ => Some(Tense::Present),
            PosTag::MD | PosTag::VBP => Some(Tense::Future),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Tense::Past => "past",
            Tense::Present => "present",
            Tense::Future => "future",
            Tense::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
