use crate::app::App;
use crate::quiz::MIN_WORDS;
use crate::ui::utils::{centered_column, hex_to_rgb, main_area};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Enter the text you want to practice...";

pub fn draw(f: &mut Frame, app: &App) {
    let area = centered_column(main_area(f), 80);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let text_color = hex_to_rgb(&app.theme.text);
    let sub_color = hex_to_rgb(&app.theme.sub);
    let main_color = hex_to_rgb(&app.theme.main);

    let block = Block::default()
        .title(" Text ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(hex_to_rgb(&app.theme.sub_alt)));
    let inner = block.inner(chunks[0]);
    f.render_widget(block, chunks[0]);

    let lines = if app.text.is_empty() {
        vec![Line::from(vec![
            Span::styled("█", Style::default().fg(hex_to_rgb(&app.theme.caret))),
            Span::styled(PLACEHOLDER, Style::default().fg(sub_color).add_modifier(Modifier::ITALIC)),
        ])]
    } else {
        editor_lines(app, inner.width as usize, inner.height as usize)
    };
    f.render_widget(Paragraph::new(lines), inner);

    let count = app.word_count();
    let status = if app.can_start() {
        Line::from(vec![
            Span::styled(format!("{} words", count), Style::default().fg(text_color)),
            Span::styled(" | ctrl+s to start", Style::default().fg(main_color)),
        ])
    } else {
        Line::from(Span::styled(
            format!("{} words | at least {} needed to start", count, MIN_WORDS),
            Style::default().fg(sub_color),
        ))
    };
    f.render_widget(Paragraph::new(status), chunks[1]);

    if let Some(msg) = &app.message {
        f.render_widget(
            Paragraph::new(msg.as_str()).style(Style::default().fg(hex_to_rgb(&app.theme.error))),
            chunks[2],
        );
    }
}

/// Wraps the buffer to `width` and keeps the last `height` rows so the
/// caret stays visible.
fn editor_lines(app: &App, width: usize, height: usize) -> Vec<Line<'static>> {
    let width = width.saturating_sub(1).max(1);
    let text_style = Style::default().fg(hex_to_rgb(&app.theme.text));

    let mut rows: Vec<String> = Vec::new();
    for raw_line in app.text.split('\n') {
        if raw_line.is_empty() {
            rows.push(String::new());
            continue;
        }
        let options = textwrap::Options::new(width).break_words(true);
        rows.extend(textwrap::wrap(raw_line, options).into_iter().map(|c| c.into_owned()));
    }

    let skip = rows.len().saturating_sub(height);
    let last = rows.len().saturating_sub(1);
    rows.into_iter()
        .enumerate()
        .skip(skip)
        .map(|(i, row)| {
            let mut spans = vec![Span::styled(row, text_style)];
            if i == last {
                spans.push(Span::styled("█", Style::default().fg(hex_to_rgb(&app.theme.caret))));
            }
            Line::from(spans)
        })
        .collect()
}
