use super::label::Label;
use super::mode::Mode;

/// Human-readable text for a label in the given mode.
pub fn format_label(label: &Label, mode: Mode) -> String {
    mode.strategy().format(label)
}

/// Tooltip text: formatted labels one per line, or the token itself when unlabelled.
pub fn tooltip(token_text: &str, labels: &[Label], mode: Mode) -> String {
    if labels.is_empty() {
        return token_text.to_string();
    }
    let strategy = mode.strategy();
    labels
        .iter()
        .map(|label| strategy.format(label))
        .collect::<Vec<_>>()
        .join("\n")
}
