use crate::app::App;
use crate::config::Theme;
use crate::models::{AppState, QuizMode, WordStatus};
use crate::quiz::Session;
use crate::ui::full_text;
use crate::ui::results;
use crate::ui::utils::{centered_column, hex_to_rgb, main_area};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const COMPLETION_HEIGHT: u16 = 6;

pub fn draw(f: &mut Frame, app: &App) {
    let Some(session) = &app.session else { return };
    let area = centered_column(main_area(f), 90);

    let (cards_area, side_area) = if session.quiz_mode() == QuizMode::ShowFullText {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Length(1), Constraint::Fill(1)])
            .split(area);
        (cols[0], Some(cols[2]))
    } else {
        (area, None)
    };

    let cards_area = if app.state == AppState::Finished {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(COMPLETION_HEIGHT)])
            .split(cards_area);
        results::draw(f, app, session, rows[1]);
        rows[0]
    } else {
        cards_area
    };

    draw_sentences(f, app, session, cards_area);

    if let Some(side) = side_area {
        full_text::draw(f, app, session, side);
    }
}

struct Card<'a> {
    lines: Vec<Line<'a>>,
    current: bool,
}

fn draw_sentences(f: &mut Frame, app: &App, session: &Session, area: Rect) {
    // borders plus one column of padding each side
    let inner_width = area.width.saturating_sub(4).max(1) as usize;
    let current = session.current_sentence_index();

    let mut cards = Vec::new();
    let mut input_shown = false;
    for (index, (start, words)) in session.visible_sentences().into_iter().enumerate() {
        let mut chips = Vec::new();
        for (offset, word) in words.iter().enumerate() {
            if let Some(chip) = word_chip(&app.theme, word, session.word_status(start + offset)) {
                chips.push(chip);
            }
        }
        if session.shows_input_in(index) {
            chips.extend(input_chips(&app.theme, session));
            input_shown = true;
        }
        cards.push(Card {
            lines: pack_chips(chips, inner_width),
            current: index == current,
        });
    }

    // the input has no sentence to live in, e.g. past text dropped by a
    // strict split
    if !input_shown && !session.is_complete() {
        cards.push(Card {
            lines: pack_chips(input_chips(&app.theme, session), inner_width),
            current: true,
        });
    }

    // keep the newest cards on screen
    let mut used = 0u16;
    let mut first = cards.len();
    while first > 0 {
        let h = cards[first - 1].lines.len() as u16 + 2;
        if used + h > area.height && first < cards.len() {
            break;
        }
        used += h;
        first -= 1;
    }

    let mut y = area.y;
    for card in cards.into_iter().skip(first) {
        let height = (card.lines.len() as u16 + 2).min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let border_color = if card.current { &app.theme.main } else { &app.theme.sub_alt };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(hex_to_rgb(border_color)));
        let rect = Rect::new(area.x, y, area.width, height);
        let inner = block.inner(rect);
        f.render_widget(block, rect);
        f.render_widget(
            Paragraph::new(card.lines),
            Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height),
        );
        y += height;
    }
}

fn word_chip<'a>(theme: &Theme, word: &'a str, status: WordStatus) -> Option<Span<'a>> {
    let style = match status {
        WordStatus::Initial => Style::default()
            .fg(hex_to_rgb(&theme.text))
            .bg(hex_to_rgb(&theme.sub_alt)),
        WordStatus::Correct => Style::default()
            .fg(hex_to_rgb(&theme.bg))
            .bg(hex_to_rgb(&theme.correct)),
        WordStatus::Incorrect => Style::default()
            .fg(hex_to_rgb(&theme.text))
            .bg(hex_to_rgb(&theme.error)),
        WordStatus::Current | WordStatus::Hidden => return None,
    };
    Some(Span::styled(format!(" {} ", word), style))
}

fn input_chips<'a>(theme: &Theme, session: &Session) -> Vec<Span<'a>> {
    let input = session.user_input();
    let field = if input.is_empty() {
        Span::styled(
            format!("{}▏", session.current_hint().unwrap_or_default()),
            Style::default().fg(hex_to_rgb(&theme.sub)).add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(
            format!("{}▏", input),
            Style::default().fg(hex_to_rgb(&theme.main)).add_modifier(Modifier::UNDERLINED),
        )
    };

    let check_style = if session.can_submit() {
        Style::default().fg(hex_to_rgb(&theme.main)).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(hex_to_rgb(&theme.sub_alt))
    };
    vec![field, Span::styled("[check]", check_style)]
}

/// Lays chips out left to right, starting a new line when the next one
/// would overflow `width`. Chips wider than a line get a line of their own.
pub(crate) fn pack_chips(chips: Vec<Span<'_>>, width: usize) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span> = Vec::new();
    let mut used = 0;

    for chip in chips {
        let w = chip.width();
        let gap = usize::from(!current.is_empty());
        if !current.is_empty() && used + gap + w > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        if !current.is_empty() {
            current.push(Span::raw(" "));
            used += 1;
        }
        used += w;
        current.push(chip);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths(lines: &[Line]) -> Vec<usize> {
        lines.iter().map(Line::width).collect()
    }

    #[test]
    fn chips_wrap_at_width() {
        let chips = vec![Span::raw("aaaa"), Span::raw("bbb"), Span::raw("cc")];
        let lines = pack_chips(chips, 8);
        assert_eq!(widths(&lines), vec![8, 2]);
    }

    #[test]
    fn oversized_chip_gets_own_line() {
        let chips = vec![Span::raw("a"), Span::raw("0123456789"), Span::raw("b")];
        let lines = pack_chips(chips, 5);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn empty_input_still_has_a_line() {
        assert_eq!(pack_chips(Vec::new(), 10).len(), 1);
    }

    #[test]
    fn hidden_words_have_no_chip() {
        let theme = Theme::default();
        assert!(word_chip(&theme, "fox", WordStatus::Hidden).is_none());
        assert!(word_chip(&theme, "fox", WordStatus::Current).is_none());
        let chip = word_chip(&theme, "fox", WordStatus::Correct).unwrap();
        assert_eq!(chip.content, " fox ");
    }
}
