use crate::app::App;
use crate::quiz::Session;
use crate::ui::utils::hex_to_rgb;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, session: &Session, area: Rect) {
    let summary = session.summary();

    let sub_color = hex_to_rgb(&app.theme.sub);
    let main_color = hex_to_rgb(&app.theme.main);
    let correct_color = hex_to_rgb(&app.theme.correct);

    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(correct_color));

    let mut lines = vec![
        Line::from(Span::styled(
            "Quiz completed!",
            Style::default().fg(correct_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("correct ", Style::default().fg(sub_color)),
            Span::styled(
                format!("{}/{}", summary.correct, summary.attempted),
                Style::default().fg(main_color),
            ),
            Span::styled("  accuracy ", Style::default().fg(sub_color)),
            Span::styled(format!("{:.0}%", summary.accuracy), Style::default().fg(main_color)),
        ]),
    ];

    if !session.user_input().is_empty() {
        lines.push(Line::from(vec![
            Span::styled("last guess ", Style::default().fg(sub_color)),
            Span::styled(session.user_input(), Style::default().fg(hex_to_rgb(&app.theme.text))),
        ]));
    }

    f.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Center),
        area,
    );
}
