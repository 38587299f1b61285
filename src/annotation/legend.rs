use super::label::Label;
use super::mode::Mode;
use super::style::{resolve_style, StyleDescriptor};
use super::token::ProcessedToken;
use std::collections::HashSet;

/// Distinct legend categories in first-seen order.
pub fn aggregate_categories(tokens: &[ProcessedToken], mode: Mode) -> Vec<Label> {
    let strategy = mode.strategy();
    let mut seen = HashSet::new();
    let mut categories = Vec::new();

    for label in tokens.iter().flat_map(|t| t.labels.iter()) {
        if strategy.in_legend(label) && seen.insert(label) {
            categories.push(label.clone());
        }
    }

    categories
}

/// A legend row ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: Label,
    pub name: String,
    pub style: StyleDescriptor,
}

pub fn legend_entries(tokens: &[ProcessedToken], mode: Mode) -> Vec<LegendEntry> {
    let strategy = mode.strategy();
    aggregate_categories(tokens, mode)
        .into_iter()
        .map(|label| LegendEntry {
            name: strategy.format(&label),
            style: resolve_style(std::slice::from_ref(&label)),
            label,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::label::SimpleCategory;
    use crate::annotation::token::Morphology;

    fn processed(text: &str, labels: Vec<Label>) -> ProcessedToken {
        ProcessedToken {
            token: text.to_string(),
            start: 0,
            end: text.len(),
            labels,
        }
    }

    #[test]
    fn test_simple_legend_dedupes_in_first_seen_order() {
        let tokens = vec![
            processed("The", vec![Label::Category(SimpleCategory::Determiner)]),
            processed("cat", vec![Label::Category(SimpleCategory::Noun)]),
            processed(".", vec![]),
            processed("A", vec![Label::Category(SimpleCategory::Determiner)]),
            processed("runs", vec![Label::Category(SimpleCategory::Verb)]),
        ];
        let names: Vec<String> = aggregate_categories(&tokens, Mode::Simple)
            .iter()
            .map(Label::to_string)
            .collect();
        assert_eq!(names, vec!["Determiner", "Noun", "Verb"]);
    }

    #[test]
    fn test_pro_legend_only_lists_pos_codes() {
        let tokens = vec![
            processed(
                "Paris",
                vec![
                    Label::PartOfSpeech("PROPN".into()),
                    Label::NamedEntity("GPE".into()),
                ],
            ),
            processed(
                "not",
                vec![
                    Label::PartOfSpeech("PART".into()),
                    Label::Negation,
                    Label::Morphology(Morphology::new(vec![("Polarity".into(), "Neg".into())])),
                ],
            ),
            processed(
                "3",
                vec![Label::PartOfSpeech("NUM".into()), Label::Shape("d".into())],
            ),
        ];
        let names: Vec<String> = aggregate_categories(&tokens, Mode::Pro)
            .iter()
            .map(Label::to_string)
            .collect();
        assert_eq!(names, vec!["PROPN", "PART", "NUM"]);
    }

    #[test]
    fn test_empty_tokens_empty_legend() {
        assert!(aggregate_categories(&[], Mode::Pro).is_empty());
        assert!(legend_entries(&[], Mode::Simple).is_empty());
    }

    #[test]
    fn test_legend_entries_formatted_and_styled() {
        let tokens = vec![processed("Paris", vec![Label::PartOfSpeech("PROPN".into())])];
        let entries = legend_entries(&tokens, Mode::Pro);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Proper Noun");
        assert_eq!(entries[0].style.fragments().len(), 1);
    }
}
