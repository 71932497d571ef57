pub mod full_text;
pub mod input;
pub mod quiz;
pub mod results;
pub mod settings;
pub mod utils;

use crate::app::App;
use crate::models::AppState;
use crate::ui::utils::{hex_to_rgb, render_footer, render_header};
use ratatui::{
    style::Style,
    widgets::Block,
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let bg_color = hex_to_rgb(&app.theme.bg);
    f.render_widget(
        Block::default().style(Style::default().bg(bg_color)),
        f.area(),
    );

    render_header(f, app);

    match app.state {
        AppState::Editing => input::draw(f, app),
        AppState::Quiz | AppState::Finished => quiz::draw(f, app),
    }

    if app.settings_open {
        settings::draw(f, app);
    }

    render_footer(f, app);
}
