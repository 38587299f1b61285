use super::label::{Label, SimpleCategory};
use super::token::Token;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Display granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Simple,
    Pro,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Simple, Mode::Pro];

    /// The per-mode behavior bundle, selected once per render.
    pub fn strategy(self) -> &'static dyn ModeStrategy {
        match self {
            Mode::Simple => &SimpleStrategy,
            Mode::Pro => &ProStrategy,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Simple => Mode::Pro,
            Mode::Pro => Mode::Simple,
        }
    }

    /// Capitalized name for the mode selector.
    pub fn title(self) -> &'static str {
        match self {
            Mode::Simple => "Simple",
            Mode::Pro => "Pro",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Simple => f.write_str("simple"),
            Mode::Pro => f.write_str("pro"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown highlighting mode '{0}' (expected 'simple' or 'pro')")]
pub struct ModeParseError(pub String);

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Mode::Simple),
            "pro" => Ok(Mode::Pro),
            other => Err(ModeParseError(other.to_string())),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Mode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Mode-dependent pieces of the pipeline.
pub trait ModeStrategy: Sync {
    fn mode(&self) -> Mode;

    /// Ordered labels for one token.
    fn labels(&self, token: &Token) -> Vec<Label>;

    /// Human-readable text for tooltips and the legend.
    fn format(&self, label: &Label) -> String;

    /// Whether a label earns a legend entry.
    fn in_legend(&self, label: &Label) -> bool;
}

pub struct SimpleStrategy;

impl ModeStrategy for SimpleStrategy {
    fn mode(&self) -> Mode {
        Mode::Simple
    }

    fn labels(&self, token: &Token) -> Vec<Label> {
        SimpleCategory::from_pos(&token.pos)
            .map(Label::Category)
            .into_iter()
            .collect()
    }

    fn format(&self, label: &Label) -> String {
        label.to_string()
    }

    fn in_legend(&self, _label: &Label) -> bool {
        true
    }
}

pub struct ProStrategy;

impl ModeStrategy for ProStrategy {
    fn mode(&self) -> Mode {
        Mode::Pro
    }

    fn labels(&self, token: &Token) -> Vec<Label> {
        let mut labels = Vec::new();

        if !token.pos.is_empty() {
            labels.push(Label::PartOfSpeech(token.pos.clone()));
        }
        if let Some(kind) = token.entity() {
            labels.push(Label::NamedEntity(kind.to_string()));
        }
        if token.is_negation() {
            labels.push(Label::Negation);
        }
        if !token.morphology.is_empty() {
            labels.push(Label::Morphology(token.morphology.clone()));
        }
        if token.has_notable_shape() {
            labels.push(Label::Shape(token.shape.clone()));
        }

        labels
    }

    fn format(&self, label: &Label) -> String {
        match label {
            Label::PartOfSpeech(code) => pos_full_name(code)
                .map(str::to_string)
                .unwrap_or_else(|| code.clone()),
            other => other.to_string(),
        }
    }

    fn in_legend(&self, label: &Label) -> bool {
        label.is_part_of_speech()
    }
}

/// Full names for universal POS codes.
pub fn pos_full_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "NOUN" => "Noun",
        "PROPN" => "Proper Noun",
        "VERB" => "Verb",
        "AUX" => "Auxiliary Verb",
        "PART" => "Participle",
        "DET" => "Article",
        "PRON" => "Pronoun",
        "ADP" => "Preposition",
        "ADV" => "Adverb",
        "CCONJ" => "Coordinating Conjunction",
        "SCONJ" => "Subordinating Conjunction",
        "ADJ" => "Adjective",
        "NUM" => "Number",
        "INTJ" => "Interjection",
        "PUNCT" => "Punctuation",
        "SYM" => "Symbol",
        "X" => "Unknown",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_default_is_simple() {
        assert_eq!(Mode::default(), Mode::Simple);
    }

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!("simple".parse::<Mode>(), Ok(Mode::Simple));
        assert_eq!(" PRO ".parse::<Mode>(), Ok(Mode::Pro));
        assert!("expert".parse::<Mode>().is_err());
        assert_eq!(Mode::Pro.to_string(), "pro");
        assert_eq!(Mode::Pro.title(), "Pro");
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(Mode::Simple.toggled(), Mode::Pro);
        assert_eq!(Mode::Simple.toggled().toggled(), Mode::Simple);
    }

    #[test]
    fn test_strategy_matches_mode() {
        for mode in Mode::ALL {
            assert_eq!(mode.strategy().mode(), mode);
        }
    }

    #[test]
    fn test_pos_full_names() {
        assert_eq!(pos_full_name("PROPN"), Some("Proper Noun"));
        assert_eq!(pos_full_name("DET"), Some("Article"));
        assert_eq!(pos_full_name("X"), Some("Unknown"));
        assert_eq!(pos_full_name("SPACE"), None);
    }

    #[test]
    fn test_mode_deserializes_from_string() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            mode: Mode,
        }
        let w: Wrapper = serde_json::from_str(r#"{"mode": "pro"}"#).unwrap();
        assert_eq!(w.mode, Mode::Pro);
    }
}
