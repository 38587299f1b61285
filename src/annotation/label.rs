use super::token::Morphology;
use std::fmt;

/// Coarse categories shown in simple mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimpleCategory {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Conjunction,
    Interjection,
    Determiner,
}

impl SimpleCategory {
    /// Collapse a universal POS code into its simple category.
    pub fn from_pos(pos: &str) -> Option<Self> {
        let category = match pos {
            "NOUN" | "PROPN" => Self::Noun,
            "VERB" | "AUX" => Self::Verb,
            "ADJ" => Self::Adjective,
            "ADV" => Self::Adverb,
            "PRON" => Self::Pronoun,
            "ADP" => Self::Preposition,
            "CCONJ" | "SCONJ" => Self::Conjunction,
            "INTJ" => Self::Interjection,
            "DET" => Self::Determiner,
            _ => return None,
        };
        Some(category)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Noun => "Noun",
            Self::Verb => "Verb",
            Self::Adjective => "Adjective",
            Self::Adverb => "Adverb",
            Self::Pronoun => "Pronoun",
            Self::Preposition => "Preposition",
            Self::Conjunction => "Conjunction",
            Self::Interjection => "Interjection",
            Self::Determiner => "Determiner",
        }
    }
}

/// One classified aspect of a token.
///
/// `Display` yields the label string users see in tooltips and the legend,
/// e.g. `NamedEntity.GPE` or `Morph.Number=Sing.Person=3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    Category(SimpleCategory),
    PartOfSpeech(String),
    NamedEntity(String),
    Negation,
    Morphology(Morphology),
    Shape(String),
}

impl Label {
    /// Raw POS-code labels are the only ones the pro legend lists.
    pub fn is_part_of_speech(&self) -> bool {
        matches!(self, Label::PartOfSpeech(_))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Category(category) => f.write_str(category.name()),
            Label::PartOfSpeech(code) => f.write_str(code),
            Label::NamedEntity(kind) => write!(f, "NamedEntity.{}", kind),
            Label::Negation => f.write_str("Negation"),
            Label::Morphology(morph) => {
                f.write_str("Morph")?;
                for (feature, value) in morph.entries() {
                    write!(f, ".{}={}", feature, value)?;
                }
                Ok(())
            }
            Label::Shape(shape) => write!(f, "Shape.{}", shape),
        }
    }
}
