use super::format::tooltip;
use super::mode::Mode;
use super::style::{resolve_style, StyleDescriptor};
use super::token::ProcessedToken;

/// One displayable token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFragment {
    pub text: String,
    pub style: StyleDescriptor,
    pub tooltip: String,
    /// Screen-reader description: `text (label, label)`.
    pub description: String,
    pub trailing_space: bool,
}

/// Walk classified tokens into display fragments.
///
/// A single space follows a token when the original text had a gap before
/// the next one. Runs of whitespace collapse, so this is not a byte-exact
/// reconstruction.
pub fn assemble(tokens: &[ProcessedToken], mode: Mode) -> Vec<RenderFragment> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let trailing_space = tokens
                .get(i + 1)
                .map_or(false, |next| token.end < next.start);
            RenderFragment {
                text: token.token.clone(),
                style: resolve_style(&token.labels),
                tooltip: tooltip(&token.token, &token.labels, mode),
                description: format!("{} ({})", token.token, token.label_strings().join(", ")),
                trailing_space,
            }
        })
        .collect()
}

/// Flowing text as rendered: fragments joined by their single spaces.
pub fn reconstruct_text(fragments: &[RenderFragment]) -> String {
    let mut text = String::new();
    for fragment in fragments {
        text.push_str(&fragment.text);
        if fragment.trailing_space {
            text.push(' ');
        }
    }
    text
}
