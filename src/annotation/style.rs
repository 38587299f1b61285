//! Label to style resolution.
//!
//! Each matching label contributes one `StyleFragment`. A fragment prints as
//! the utility classes of the web highlighter it mirrors, so a combined
//! descriptor reads like `text-emerald-700 dark:text-emerald-400 underline ...`,
//! and folds into a terminal `Style` through the theme palette.

use super::label::{Label, SimpleCategory};
use crate::ui::theme;
use ratatui::style::{Modifier, Style};
use std::fmt;

/// Palette families used by the highlighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hue {
    Emerald,
    Violet,
    Red,
    Amber,
    Sky,
    Orange,
    Yellow,
    Green,
    Lime,
    Cyan,
    Teal,
    Zinc,
    Indigo,
    Neutral,
    Purple,
    Pink,
}

impl Hue {
    pub fn name(self) -> &'static str {
        match self {
            Hue::Emerald => "emerald",
            Hue::Violet => "violet",
            Hue::Red => "red",
            Hue::Amber => "amber",
            Hue::Sky => "sky",
            Hue::Orange => "orange",
            Hue::Yellow => "yellow",
            Hue::Green => "green",
            Hue::Lime => "lime",
            Hue::Cyan => "cyan",
            Hue::Teal => "teal",
            Hue::Zinc => "zinc",
            Hue::Indigo => "indigo",
            Hue::Neutral => "neutral",
            Hue::Purple => "purple",
            Hue::Pink => "pink",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleFragment {
    pub hue: Hue,
    /// Light-background shade; the dark variant is always 400.
    pub shade: u16,
    pub italic: bool,
    pub underline: bool,
    pub bold: bool,
}

impl StyleFragment {
    const fn text(hue: Hue) -> Self {
        Self {
            hue,
            shade: 700,
            italic: false,
            underline: false,
            bold: false,
        }
    }

    const fn shade(self, shade: u16) -> Self {
        Self { shade, ..self }
    }

    const fn italic(self) -> Self {
        Self {
            italic: true,
            ..self
        }
    }

    const fn underline(self) -> Self {
        Self {
            underline: true,
            ..self
        }
    }

    const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub fn to_style(self) -> Style {
        let mut style = Style::default().fg(theme::hue_color(self.hue));
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underline {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }
}

impl fmt::Display for StyleFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hue = self.hue.name();
        write!(f, "text-{}-{} dark:text-{}-400", hue, self.shade, hue)?;
        if self.italic {
            f.write_str(" italic")?;
        }
        if self.underline {
            write!(f, " underline decoration-{}-400", hue)?;
        }
        if self.bold {
            f.write_str(" font-bold")?;
        }
        Ok(())
    }
}

const NOUN: StyleFragment = StyleFragment::text(Hue::Emerald);
const PROPER_NOUN: StyleFragment = StyleFragment::text(Hue::Emerald).underline();
const VERB: StyleFragment = StyleFragment::text(Hue::Violet).italic();
const ADJECTIVE: StyleFragment = StyleFragment::text(Hue::Red);
const ADVERB: StyleFragment = StyleFragment::text(Hue::Amber).italic();
const PRONOUN: StyleFragment = StyleFragment::text(Hue::Sky);
const PREPOSITION: StyleFragment = StyleFragment::text(Hue::Orange);
const CONJUNCTION: StyleFragment = StyleFragment::text(Hue::Yellow);
const INTERJECTION: StyleFragment = StyleFragment::text(Hue::Green);
const DETERMINER: StyleFragment = StyleFragment::text(Hue::Lime);
const PARTICLE: StyleFragment = StyleFragment::text(Hue::Cyan);
const NUMBER: StyleFragment = StyleFragment::text(Hue::Teal);
const PUNCTUATION: StyleFragment = StyleFragment::text(Hue::Zinc).shade(600);
const SYMBOL: StyleFragment = StyleFragment::text(Hue::Indigo);
const UNKNOWN: StyleFragment = StyleFragment::text(Hue::Neutral);

pub const NAMED_ENTITY: StyleFragment = StyleFragment::text(Hue::Orange).underline();
pub const NEGATION: StyleFragment = StyleFragment::text(Hue::Red).bold();
pub const MORPH: StyleFragment = StyleFragment::text(Hue::Purple);
pub const SHAPE: StyleFragment = StyleFragment::text(Hue::Pink);

fn category_style(category: SimpleCategory) -> StyleFragment {
    match category {
        SimpleCategory::Noun => NOUN,
        SimpleCategory::Verb => VERB,
        SimpleCategory::Adjective => ADJECTIVE,
        SimpleCategory::Adverb => ADVERB,
        SimpleCategory::Pronoun => PRONOUN,
        SimpleCategory::Preposition => PREPOSITION,
        SimpleCategory::Conjunction => CONJUNCTION,
        SimpleCategory::Interjection => INTERJECTION,
        SimpleCategory::Determiner => DETERMINER,
    }
}

fn pos_style(code: &str) -> Option<StyleFragment> {
    let fragment = match code {
        "NOUN" => NOUN,
        "PROPN" => PROPER_NOUN,
        "VERB" | "AUX" => VERB,
        "PART" => PARTICLE,
        "DET" => DETERMINER,
        "PRON" => PRONOUN,
        "ADP" => PREPOSITION,
        "ADV" => ADVERB,
        "CCONJ" | "SCONJ" => CONJUNCTION,
        "ADJ" => ADJECTIVE,
        "NUM" => NUMBER,
        "INTJ" => INTERJECTION,
        "PUNCT" => PUNCTUATION,
        "SYM" => SYMBOL,
        "X" => UNKNOWN,
        _ => return None,
    };
    Some(fragment)
}

/// Style for a single label, if any rule matches.
pub fn label_style(label: &Label) -> Option<StyleFragment> {
    match label {
        Label::NamedEntity(_) => Some(NAMED_ENTITY),
        Label::Negation => Some(NEGATION),
        Label::Morphology(_) => Some(MORPH),
        Label::Shape(_) => Some(SHAPE),
        Label::Category(category) => Some(category_style(*category)),
        Label::PartOfSpeech(code) => pos_style(code),
    }
}

/// Combined style for a token: one fragment per matching label, in label order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDescriptor(Vec<StyleFragment>);

impl StyleDescriptor {
    pub fn fragments(&self) -> &[StyleFragment] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fold into a terminal style over `base`.
    pub fn to_style(&self, base: Style) -> Style {
        self.0
            .iter()
            .fold(base, |style, fragment| style.patch(fragment.to_style()))
    }
}

impl fmt::Display for StyleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, fragment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", fragment)?;
        }
        Ok(())
    }
}

/// Resolve a token's labels into its combined style.
///
/// Repeated fragments are kept; a token labelled twice with the same style
/// carries that fragment twice.
pub fn resolve_style(labels: &[Label]) -> StyleDescriptor {
    StyleDescriptor(labels.iter().filter_map(label_style).collect())
}
