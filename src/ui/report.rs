//! Plain-text output for `--print`.

use crate::annotation::{reconstruct_text, LegendEntry, RenderFragment};
use unicode_width::UnicodeWidthStr;

/// Reconstructed sentence, legend, then one row per token with its tooltip.
pub fn format_report(fragments: &[RenderFragment], legend: &[LegendEntry]) -> String {
    let names: Vec<&str> = legend.iter().map(|e| e.name.as_str()).collect();
    let mut out = format!(
        "{}\n\nParts of Speech: {}\n\n",
        reconstruct_text(fragments),
        names.join(", ")
    );

    // Whitespace tokens are shown escaped to keep one row per token.
    let cells: Vec<String> = fragments
        .iter()
        .map(|f| f.text.replace('\n', "\\n"))
        .collect();
    let column = cells.iter().map(|c| c.width()).max().unwrap_or(0);
    for (cell, fragment) in cells.iter().zip(fragments) {
        out.push_str(&format!(
            "{}{}  {}\n",
            cell,
            " ".repeat(column - cell.width()),
            fragment.tooltip.replace('\n', " | ")
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{assemble, classify, legend_entries, Mode, Token};

    fn tokens() -> Vec<Token> {
        vec![
            Token {
                text: "Paris".to_string(),
                start: 0,
                end: 5,
                pos: "PROPN".to_string(),
                is_alpha: true,
                is_entity: true,
                entity_type: Some("GPE".to_string()),
                ..Token::default()
            },
            Token {
                text: "!".to_string(),
                start: 5,
                end: 6,
                pos: "PUNCT".to_string(),
                is_punct: true,
                ..Token::default()
            },
        ]
    }

    #[test]
    fn test_report_layout() {
        let processed = classify(&tokens(), Mode::Pro);
        let report = format_report(
            &assemble(&processed, Mode::Pro),
            &legend_entries(&processed, Mode::Pro),
        );
        let expected = "Paris!\n\nParts of Speech: Proper Noun, Punctuation\n\nParis  Proper Noun | NamedEntity.GPE\n!      Punctuation\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_newline_token_stays_on_one_row() {
        let tokens = vec![
            Token {
                text: "Hi".to_string(),
                start: 0,
                end: 2,
                pos: "INTJ".to_string(),
                ..Token::default()
            },
            Token {
                text: "\n".to_string(),
                start: 2,
                end: 3,
                pos: "SPACE".to_string(),
                ..Token::default()
            },
        ];
        let processed = classify(&tokens, Mode::Simple);
        let report = format_report(&assemble(&processed, Mode::Simple), &[]);
        let (_, rows) = report.split_once("Parts of Speech: \n\n").unwrap();
        let rows: Vec<&str> = rows.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[1].starts_with("\\n"));
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(format_report(&[], &[]), "\n\nParts of Speech: \n\n");
    }
}
