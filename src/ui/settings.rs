use crate::app::App;
use crate::models::QuizMode;
use crate::ui::utils::{centered_box, hex_to_rgb};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let area = centered_box(f.area(), 34, 8);
    let main_color = hex_to_rgb(&app.theme.main);
    let text_color = hex_to_rgb(&app.theme.text);

    let block = Block::default()
        .title(" Settings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(main_color))
        .style(Style::default().bg(hex_to_rgb(&app.theme.bg)));

    let mut lines = vec![
        Line::from(Span::styled(
            "Quiz Mode",
            Style::default().fg(hex_to_rgb(&app.theme.sub)).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    let active = app.mode();
    for (i, mode) in QuizMode::ALL.iter().enumerate() {
        let marker = if *mode == active { "(•)" } else { "( )" };
        let style = if i == app.settings_cursor {
            Style::default().fg(main_color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(text_color)
        };
        lines.push(Line::from(Span::styled(format!(" {} {}", marker, mode.label()), style)));
    }

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}
