use ratatui::style::Color;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use crate::app::App;
use crate::models::AppState;

pub fn hex_to_rgb(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);
        Color::Rgb(r, g, b)
    } else {
        Color::White
    }
}

/// Horizontally centred column taking `percent` of the width.
pub fn centered_column(area: Rect, percent: u16) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Percentage(percent),
            Constraint::Fill(1),
        ])
        .split(area)[1]
}

/// A fixed-size box in the middle of `area`, clamped to fit.
pub fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Everything between the header row and the guess status and footer rows.
pub fn main_area(f: &Frame) -> Rect {
    Rect::new(0, 2, f.area().width, f.area().height.saturating_sub(4))
}

pub fn render_header(f: &mut Frame, app: &App) {
    let mut header_spans = Vec::new();

    header_spans.push(Span::styled(
        "wordquiz",
        Style::default()
            .fg(hex_to_rgb(&app.theme.main))
            .add_modifier(Modifier::BOLD),
    ));

    if let Some(session) = &app.session {
        let done = session.current_index().min(session.words().len());
        header_spans.push(Span::styled(
            format!(
                " | {}/{} words | mode: {}",
                done,
                session.words().len(),
                session.quiz_mode().label()
            ),
            Style::default().fg(hex_to_rgb(&app.theme.sub)),
        ));
    }

    let header_row_area = Rect::new(0, 1, f.area().width, 1);
    let area = centered_column(header_row_area, 82);

    f.render_widget(Paragraph::new(Line::from(header_spans)), area);
}

pub fn render_footer(f: &mut Frame, app: &App) {
    if f.area().height == 0 {
        return;
    }
    let help = if app.settings_open {
        "up/down: choose | enter: apply | esc: close"
    } else {
        match app.state {
            AppState::Editing => "ctrl+s / f5: start quiz | ctrl+u: clear | esc: quit",
            AppState::Quiz => "enter: check | ctrl+o: settings | ctrl+n: new text | esc: quit",
            AppState::Finished => "tab: retry | ctrl+n: new text | ctrl+o: settings | esc: quit",
        }
    };

    let footer = Paragraph::new(help)
        .style(Style::default().fg(hex_to_rgb(&app.theme.sub)))
        .alignment(Alignment::Center);
    f.render_widget(footer, Rect::new(0, f.area().height - 1, f.area().width, 1));

    if app.settings_open || f.area().height < 2 {
        return;
    }
    if let Some((label, correct)) = result_label(app.last_result) {
        let color = if correct { &app.theme.correct } else { &app.theme.error };
        let status = Paragraph::new(label)
            .style(Style::default().fg(hex_to_rgb(color)).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(status, Rect::new(0, f.area().height - 2, f.area().width, 1));
    }
}

/// Footer text for the latest guess, with whether it was right.
pub fn result_label(last_result: Option<bool>) -> Option<(&'static str, bool)> {
    match last_result {
        Some(true) => Some(("✓ correct", true)),
        Some(false) => Some(("✗ incorrect", false)),
        None => None,
    }
}
