use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Word-level Penn Treebank tags.
///
/// Phrase labels (`NP`, `VP`, `S`, ...) and punctuation tags are not
/// represented here; `PosTag::from_label` returns `None` for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum PosTag {
    CC = 0,
    CD = 1,
    DT = 2,
    EX = 3,
    FW = 4,
    IN = 5,
    JJ = 6,
    JJR = 7,
    JJS = 8,
    LS = 9,
    MD = 10,
    NN = 11,
    NNS = 12,
    NNP = 13,
    NNPS = 14,
    PDT = 15,
    POS = 16,
    PRP = 17,
    PrpPossessive = 18, // PRP$
    RB = 19,
    RBR = 20,
    RBS = 21,
    RP = 22,
    SYM = 23,
    TO = 24,
    UH = 25,
    VB = 26,
    VBD = 27,
    VBG = 28,
    VBN = 29,
    VBP = 30,
    VBZ = 31,
    WDT = 32,
    WP = 33,
    WpPossessive = 34, // WP$
    WRB = 35,
}

impl PosTag {
    pub const ALL: [PosTag; 36] = [
        PosTag::CC, PosTag::CD, PosTag::DT, PosTag::EX, PosTag::FW, PosTag::IN,
        PosTag::JJ, PosTag::JJR, PosTag::JJS, PosTag::LS, PosTag::MD, PosTag::NN,
        PosTag::NNS, PosTag::NNP, PosTag::NNPS, PosTag::PDT, PosTag::POS, PosTag::PRP,
        PosTag::PrpPossessive, PosTag::RB, PosTag::RBR, PosTag::RBS, PosTag::RP, PosTag::SYM,
        PosTag::TO, PosTag::UH, PosTag::VB, PosTag::VBD, PosTag::VBG, PosTag::VBN,
        PosTag::VBP, PosTag::VBZ, PosTag::WDT, PosTag::WP, PosTag::WpPossessive, PosTag::WRB,
    ];

    /// Resolve a tree label or tagger tag. Case-sensitive, as emitted by Penn-style parsers.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| tag.as_str() == label)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PosTag::CC => "CC",
            PosTag::CD => "CD",
            PosTag::DT => "DT",
            PosTag::EX => "EX",
            PosTag::FW => "FW",
            PosTag::IN => "IN",
            PosTag::JJ => "JJ",
            PosTag::JJR => "JJR",
            PosTag::JJS => "JJS",
            PosTag::LS => "LS",
            PosTag::MD => "MD",
            PosTag::NN => "NN",
            PosTag::NNS => "NNS",
            PosTag::NNP => "NNP",
            PosTag::NNPS => "NNPS",
            PosTag::PDT => "PDT",
            PosTag::POS => "POS",
            PosTag::PRP => "PRP",
            PosTag::PrpPossessive => "PRP$",
            PosTag::RB => "RB",
            PosTag::RBR => "RBR",
            PosTag::RBS => "RBS",
            PosTag::RP => "RP",
            PosTag::SYM => "SYM",
            PosTag::TO => "TO",
            PosTag::UH => "UH",
            PosTag::VB => "VB",
            PosTag::VBD => "VBD",
            PosTag::VBG => "VBG",
            PosTag::VBN => "VBN",
            PosTag::VBP => "VBP",
            PosTag::VBZ => "VBZ",
            PosTag::WDT => "WDT",
            PosTag::WP => "WP",
            PosTag::WpPossessive => "WP$",
            PosTag::WRB => "WRB",
        }
    }

    /// Single-bit set holding this tag.
    pub const fn flag(self) -> TagSet {
        TagSet::from_bits_retain(1u64 << (self as u8))
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// A set of word-level tags, one bit per `PosTag` discriminant.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct TagSet: u64 {
        const CC = 1 << 0;
        const CD = 1 << 1;
        const DT = 1 << 2;
        const EX = 1 << 3;
        const FW = 1 << 4;
        const IN = 1 << 5;
        const JJ = 1 << 6;
        const JJR = 1 << 7;
        const JJS = 1 << 8;
        const LS = 1 << 9;
        const MD = 1 << 10;
        const NN = 1 << 11;
        const NNS = 1 << 12;
        const NNP = 1 << 13;
        const NNPS = 1 << 14;
        const PDT = 1 << 15;
        const POS = 1 << 16;
        const PRP = 1 << 17;
        const PRP_POSSESSIVE = 1 << 18;
        const RB = 1 << 19;
        const RBR = 1 << 20;
        const RBS = 1 << 21;
        const RP = 1 << 22;
        const SYM = 1 << 23;
        const TO = 1 << 24;
        const UH = 1 << 25;
        const VB = 1 << 26;
        const VBD = 1 << 27;
        const VBG = 1 << 28;
        const VBN = 1 << 29;
        const VBP = 1 << 30;
        const VBZ = 1 << 31;
        const WDT = 1 << 32;
        const WP = 1 << 33;
        const WP_POSSESSIVE = 1 << 34;
        const WRB = 1 << 35;

        // Composite sets
        const VERB_FORMS = Self::VB.bits() | Self::VBD.bits() | Self::VBG.bits()
            | Self::VBN.bits() | Self::VBP.bits() | Self::VBZ.bits();

        /// Constituents carrying no sign of their own in a gloss.
        const UNWANTED = Self::TO.bits() | Self::POS.bits() | Self::MD.bits() | Self::FW.bits()
            | Self::CC.bits() | Self::DT.bits() | Self::JJR.bits() | Self::JJS.bits()
            | Self::NNS.bits() | Self::NNPS.bits() | Self::RP.bits() | Self::SYM.bits()
            | Self::UH.bits() | Self::VERB_FORMS.bits() | Self::PDT.bits()
            | Self::PRP_POSSESSIVE.bits() | Self::PRP.bits();
    }
}

impl TagSet {
    /// True when `label` names a word-level tag inside this set.
    /// Phrase labels and unknown tags are never members.
    pub fn contains_label(&self, label: &str) -> bool {
        PosTag::from_label(label).map_or(false, |tag| self.contains(tag.flag()))
    }
}
