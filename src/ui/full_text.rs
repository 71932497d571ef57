use crate::app::App;
use crate::quiz::Session;
use crate::ui::utils::hex_to_rgb;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// The whole text, with the sentence being quizzed highlighted.
pub fn draw(f: &mut Frame, app: &App, session: &Session, area: Rect) {
    let current = session.current_sentence_index();
    let sub_color = hex_to_rgb(&app.theme.sub);

    let mut spans = Vec::with_capacity(session.sentences().len() * 2);
    for (i, sentence) in session.sentences().iter().enumerate() {
        let text = sentence.join(" ");
        if i == current {
            spans.push(Span::styled(
                text,
                Style::default()
                    .fg(hex_to_rgb(&app.theme.text))
                    .bg(hex_to_rgb(&app.theme.sub_alt)),
            ));
        } else {
            spans.push(Span::styled(text, Style::default().fg(sub_color)));
        }
        spans.push(Span::raw(" "));
    }

    let block = Block::default()
        .title(" Full Text ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(hex_to_rgb(&app.theme.sub_alt)));
    let inner = block.inner(area);

    let scroll = scroll_offset(session, current, inner.width as usize, inner.height as usize);
    f.render_widget(
        Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: true })
            .scroll((scroll, 0)),
        area,
    );
}

/// Rows to scroll so the highlighted sentence starts inside the view.
fn scroll_offset(session: &Session, current: usize, width: usize, height: usize) -> u16 {
    if width == 0 || height == 0 {
        return 0;
    }
    let before: Vec<String> = session
        .sentences()
        .iter()
        .take(current + 1)
        .map(|s| s.join(" "))
        .collect();
    let rows = textwrap::wrap(&before.join(" "), width).len();
    // keep the current sentence's last row about two thirds down
    let target = height * 2 / 3;
    u16::try_from(rows.saturating_sub(target.max(1))).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::start_quiz;

    #[test]
    fn short_text_needs_no_scroll() {
        let session = start_quiz("Hi there. How are you? I am fine.").unwrap();
        assert_eq!(scroll_offset(&session, 1, 40, 10), 0);
    }

    #[test]
    fn long_text_scrolls_toward_current_sentence() {
        let text = "Word word word word word. ".repeat(20);
        let session = start_quiz(&text).unwrap();
        assert!(scroll_offset(&session, 19, 10, 6) > 0);
        assert_eq!(scroll_offset(&session, 0, 10, 6), 0);
    }

    #[test]
    fn huge_offset_saturates() {
        let text = "a. ".repeat(70_000);
        let session = start_quiz(&text).unwrap();
        let last = session.sentences().len() - 1;
        assert_eq!(scroll_offset(&session, last, 1, 3), u16::MAX);
    }
}
