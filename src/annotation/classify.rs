use super::mode::Mode;
use super::token::{ProcessedToken, Token};

/// Derive labels for every token, preserving length and order.
pub fn classify(tokens: &[Token], mode: Mode) -> Vec<ProcessedToken> {
    let strategy = mode.strategy();
    tokens
        .iter()
        .map(|token| ProcessedToken {
            token: token.text.clone(),
            start: token.start,
            end: token.end,
            labels: strategy.labels(token),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::label::{Label, SimpleCategory};
    use crate::annotation::token::Morphology;

    fn token(text: &str, pos: &str, start: usize) -> Token {
        Token {
            text: text.to_string(),
            start,
            end: start + text.len(),
            pos: pos.to_string(),
            is_alpha: true,
            ..Token::default()
        }
    }

    #[test]
    fn test_simple_mode_determiner() {
        let processed = classify(&[token("The", "DET", 0)], Mode::Simple);
        assert_eq!(
            processed[0].labels,
            vec![Label::Category(SimpleCategory::Determiner)]
        );
        assert_eq!(processed[0].label_strings(), vec!["Determiner"]);
    }

    #[test]
    fn test_simple_mode_ignores_everything_but_pos() {
        let mut t = token("not", "PART", 0);
        t.dep = "neg".to_string();
        t.is_entity = true;
        t.entity_type = Some("ORG".to_string());
        t.morphology = Morphology::new(vec![("Polarity".into(), "Neg".into())]);
        let processed = classify(&[t], Mode::Simple);
        assert!(processed[0].labels.is_empty());
    }

    #[test]
    fn test_pro_mode_entity() {
        let mut t = token("Paris", "PROPN", 0);
        t.is_entity = true;
        t.entity_type = Some("GPE".to_string());
        let processed = classify(&[t], Mode::Pro);
        assert_eq!(processed[0].label_strings(), vec!["PROPN", "NamedEntity.GPE"]);
    }

    #[test]
    fn test_pro_mode_full_label_order() {
        let t = Token {
            text: "n't".to_string(),
            start: 2,
            end: 5,
            pos: "PART".to_string(),
            dep: "neg".to_string(),
            shape: "x'x".to_string(),
            is_entity: true,
            entity_type: Some("X".to_string()),
            morphology: Morphology::new(vec![("Polarity".into(), "Neg".into())]),
            ..Token::default()
        };
        let processed = classify(&[t], Mode::Pro);
        assert_eq!(
            processed[0].label_strings(),
            vec![
                "PART",
                "NamedEntity.X",
                "Negation",
                "Morph.Polarity=Neg",
                "Shape.x'x"
            ]
        );
    }

    #[test]
    fn test_pro_mode_skips_absent_sources() {
        let mut t = token("42", "NUM", 0);
        t.is_alpha = false;
        t.shape = "dd".to_string();
        let processed = classify(&[t], Mode::Pro);
        assert_eq!(processed[0].label_strings(), vec!["NUM", "Shape.dd"]);
    }

    #[test]
    fn test_pro_mode_punctuation_has_no_shape() {
        let mut t = token("!", "PUNCT", 3);
        t.is_alpha = false;
        t.is_punct = true;
        t.shape = "!".to_string();
        let processed = classify(&[t], Mode::Pro);
        assert_eq!(processed[0].label_strings(), vec!["PUNCT"]);
    }

    #[test]
    fn test_empty_pos_yields_no_pos_label() {
        let t = token("hm", "", 0);
        assert!(classify(&[t.clone()], Mode::Simple)[0].labels.is_empty());
        assert!(classify(&[t], Mode::Pro)[0].labels.is_empty());
    }

    #[test]
    fn test_classify_preserves_offsets_and_order() {
        let tokens = vec![token("Run", "VERB", 0), token("fast", "ADV", 4)];
        let processed = classify(&tokens, Mode::Simple);
        assert_eq!(processed.len(), 2);
        assert_eq!((processed[1].token.as_str(), processed[1].start, processed[1].end), ("fast", 4, 8));
    }
}
