use crate::annotation::{LegendEntry, Mode, RenderFragment};
use crate::app::{AppMode, Status};
use crate::ui::theme::colors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

fn panel(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(colors::dimmed()))
}

fn base_style() -> Style {
    Style::default().fg(colors::text()).bg(colors::background())
}

/// Highlighted tokens as flowing text, the selected one reversed.
///
/// Line breaks inside a token (whitespace tokens such as `"\n\n"`) start a
/// new line each, so paragraph breaks survive.
pub fn highlighted_lines(fragments: &[RenderFragment], selected: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans = Vec::new();
    for (i, fragment) in fragments.iter().enumerate() {
        let mut style = fragment.style.to_style(Style::default().fg(colors::text()));
        if selected == Some(i) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        for (n, piece) in fragment.text.split('\n').enumerate() {
            if n > 0 {
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
            if !piece.is_empty() {
                spans.push(Span::styled(piece.to_string(), style));
            }
        }
        if fragment.trailing_space && !fragment.text.ends_with('\n') {
            spans.push(Span::raw(" "));
        }
    }
    lines.push(Line::from(spans));
    lines
}

pub fn render_highlighted_text(
    fragments: &[RenderFragment],
    selected: Option<usize>,
) -> Paragraph<'static> {
    Paragraph::new(Text::from(highlighted_lines(fragments, selected)))
        .block(panel("Highlighted Text"))
        .style(base_style())
        .wrap(Wrap { trim: false })
}

pub fn legend_lines(entries: &[LegendEntry]) -> Vec<Line<'static>> {
    entries
        .iter()
        .map(|entry| {
            let style = entry.style.to_style(Style::default().fg(colors::text()));
            Line::from(vec![
                Span::styled("● ", style),
                Span::styled(entry.name.clone(), style),
            ])
        })
        .collect()
}

/// Columns the legend needs, borders included.
pub fn legend_width(entries: &[LegendEntry]) -> u16 {
    let widest = entries
        .iter()
        .map(|e| e.name.width())
        .max()
        .unwrap_or(0)
        .max("Parts of Speech".width());
    (widest + 4).min(u16::MAX as usize) as u16
}

pub fn render_legend(entries: &[LegendEntry]) -> Paragraph<'static> {
    Paragraph::new(legend_lines(entries))
        .block(panel("Parts of Speech"))
        .style(base_style())
}

/// Tooltip of the selected token.
pub fn render_details(fragment: Option<&RenderFragment>) -> Paragraph<'static> {
    let text = match fragment {
        Some(fragment) => {
            let mut lines = vec![Line::from(Span::styled(
                fragment.description.clone(),
                Style::default().fg(colors::dimmed()),
            ))];
            lines.extend(fragment.tooltip.lines().map(|l| Line::from(l.to_string())));
            Text::from(lines)
        }
        None => Text::from(""),
    };

    Paragraph::new(text)
        .block(panel("Details"))
        .style(base_style())
        .wrap(Wrap { trim: false })
}

pub fn render_input(input: &str, app_mode: AppMode, loading: bool) -> Paragraph<'static> {
    let title = if loading {
        "Highlighting..."
    } else {
        "Enter text to syntax highlight"
    };

    let mut spans = vec![Span::raw(input.to_string())];
    if app_mode == AppMode::Editing {
        spans.push(Span::styled("▏", Style::default().fg(colors::accent())));
    }

    let border = if app_mode == AppMode::Editing {
        colors::accent()
    } else {
        colors::dimmed()
    };

    Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border)),
        )
        .style(base_style())
        .wrap(Wrap { trim: false })
}

/// Mode selector, interaction mode and the current status message.
///
/// When idle, the counts from the last analysis are shown instead.
pub fn render_status_line(
    app_mode: AppMode,
    mode: Mode,
    status: &Status,
    summary: (usize, usize, usize),
) -> Line<'static> {
    let mut spans = Vec::new();
    for m in Mode::ALL {
        let style = if m == mode {
            Style::default()
                .fg(colors::background())
                .bg(colors::accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::dimmed())
        };
        spans.push(Span::styled(format!(" {} ", m.title()), style));
    }

    spans.push(Span::styled(
        format!("  [{}]  ", app_mode.label()),
        Style::default().fg(colors::dimmed()),
    ));

    match status {
        Status::Loading => spans.push(Span::styled(
            "Highlighting...",
            Style::default().fg(colors::accent()),
        )),
        Status::Error(msg) => spans.push(Span::styled(
            msg.clone(),
            Style::default().fg(colors::error()),
        )),
        Status::Notice(msg) => spans.push(Span::styled(
            msg.clone(),
            Style::default().fg(colors::text()),
        )),
        Status::Idle if summary.0 > 0 => {
            let (tokens, entities, sentences) = summary;
            spans.push(Span::styled(
                format!(
                    "{} tokens, {} entities, {} sentences",
                    tokens, entities, sentences
                ),
                Style::default().fg(colors::dimmed()),
            ));
        }
        Status::Idle => {}
    }

    Line::from(spans).alignment(Alignment::Left)
}

const HELP: &[&str] = &[
    "Editing",
    "  Enter        analyze the text (or run a command)",
    "  Tab          toggle Simple / Pro",
    "  Esc          browse the highlighted tokens",
    "",
    "Browsing",
    "  ←/→  h/l     select token",
    "  Tab  m       toggle Simple / Pro",
    "  e  Enter     edit text",
    "  r            analyze again",
    "  ?            help      q  quit",
    "",
    "Commands",
    "  :simple  :pro  :mode  :analyze  :clear  :q  :h",
    "  @file.txt    load text from a file",
    "  @@           load text from the clipboard",
];

pub fn render_help() -> Paragraph<'static> {
    let lines: Vec<Line<'static>> = HELP.iter().map(|l| Line::from(*l)).collect();
    Paragraph::new(lines).block(panel("Help")).style(base_style())
}
