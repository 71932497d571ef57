use crate::config::{QuizSettings, Theme};
use crate::models::{AppState, QuizMode, QuizSummary, SentenceSplit};
use crate::quiz::{self, QuizError, Session, MIN_WORDS};
use crate::utils::strings;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info};

pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub theme: Theme,

    /// Text being typed on the editing screen. Kept between quizzes.
    pub text: String,
    pub session: Option<Session>,

    pub split: SentenceSplit,
    pub default_mode: QuizMode,

    pub settings_open: bool,
    pub settings_cursor: usize,

    /// Status line shown under the editor or the quiz.
    pub message: Option<String>,
    /// Result of the most recent guess, for the footer.
    pub last_result: Option<bool>,
}

impl App {
    pub fn new(theme: Theme, settings: QuizSettings) -> Self {
        Self {
            should_quit: false,
            state: AppState::Editing,
            theme,
            text: String::new(),
            session: None,
            split: settings.split,
            default_mode: settings.mode,
            settings_open: false,
            settings_cursor: 0,
            message: None,
            last_result: None,
        }
    }

    pub fn quit(&mut self) { self.should_quit = true; }

    pub fn word_count(&self) -> usize {
        strings::split_words(&self.text).len()
    }

    pub fn can_start(&self) -> bool {
        self.word_count() >= MIN_WORDS
    }

    pub fn mode(&self) -> QuizMode {
        self.session
            .as_ref()
            .map_or(self.default_mode, Session::quiz_mode)
    }

    pub fn summary(&self) -> Option<QuizSummary> {
        self.session.as_ref().map(Session::summary)
    }

    /// Starts a quiz over the current text. On failure the app stays on the
    /// editing screen and shows why.
    pub fn start_quiz(&mut self) -> Result<(), QuizError> {
        match quiz::start_quiz_with(&self.text, self.split) {
            Ok(mut session) => {
                session.set_mode(self.default_mode);
                self.session = Some(session);
                self.state = AppState::Quiz;
                self.message = None;
                self.last_result = None;
                Ok(())
            }
            Err(e) => {
                debug!("quiz not started: {e}");
                self.state = AppState::Editing;
                self.message = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Same text, fresh answers.
    pub fn restart_quiz(&mut self) {
        if let Some(session) = &self.session {
            info!("restarting quiz");
            self.session = Some(session.restarted());
            self.state = AppState::Quiz;
            self.last_result = None;
            self.message = None;
        }
    }

    /// Back to the editor, keeping the text.
    pub fn edit_text(&mut self) {
        if let Some(session) = self.session.take() {
            self.default_mode = session.quiz_mode();
        }
        self.settings_open = false;
        self.state = AppState::Editing;
        self.message = None;
        self.last_result = None;
    }

    pub fn on_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('q') if ctrl => return self.quit(),
            KeyCode::Char('c') if ctrl => return self.quit(),
            KeyCode::Esc => {
                if self.settings_open {
                    self.close_settings();
                } else {
                    self.quit();
                }
                return;
            }
            _ => {}
        }

        if self.settings_open {
            self.on_settings_key(key.code);
            return;
        }

        match self.state {
            AppState::Editing => match key.code {
                KeyCode::Char('s') if ctrl => { let _ = self.start_quiz(); }
                KeyCode::F(5) => { let _ = self.start_quiz(); }
                KeyCode::Enter => self.text.push('\n'),
                KeyCode::Tab => self.text.push(' '),
                KeyCode::Backspace => { self.text.pop(); }
                KeyCode::Char('u') if ctrl => self.text.clear(),
                KeyCode::Char(c) if !ctrl => self.text.push(c),
                _ => {}
            },
            AppState::Quiz => match key.code {
                KeyCode::Char('o') if ctrl => self.open_settings(),
                KeyCode::F(2) => self.open_settings(),
                KeyCode::Char('n') if ctrl => self.edit_text(),
                KeyCode::Enter => self.on_submit(),
                KeyCode::Backspace => self.on_backspace(),
                KeyCode::Char(c) if !ctrl => self.on_char(c),
                _ => {}
            },
            AppState::Finished => match key.code {
                KeyCode::Tab => self.restart_quiz(),
                KeyCode::Char('n') if ctrl => self.edit_text(),
                KeyCode::Char('o') if ctrl => self.open_settings(),
                KeyCode::F(2) => self.open_settings(),
                _ => {}
            },
        }
    }

    pub fn on_paste(&mut self, data: &str) {
        match self.state {
            AppState::Editing => self.text.push_str(data),
            AppState::Quiz => {
                // a guess is a single word
                let word = data.split_whitespace().next().unwrap_or("");
                for c in word.chars() {
                    self.on_char(c);
                }
            }
            AppState::Finished => {}
        }
    }

    fn on_char(&mut self, c: char) {
        if c == ' ' {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.push_char(c);
        }
    }

    fn on_backspace(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.pop_char();
        }
    }

    /// Sends the pending guess. Blank input is ignored here, like the
    /// disabled "Check" button it stands in for.
    pub fn on_submit(&mut self) {
        let Some(session) = self.session.as_mut() else { return };
        if !session.can_submit() {
            return;
        }
        self.last_result = session.submit();
        if session.is_complete() {
            info!("quiz finished");
            self.state = AppState::Finished;
        }
    }

    pub fn open_settings(&mut self) {
        self.settings_open = true;
        self.settings_cursor = QuizMode::ALL
            .iter()
            .position(|m| *m == self.mode())
            .unwrap_or(0);
    }

    pub fn close_settings(&mut self) { self.settings_open = false; }

    fn on_settings_key(&mut self, code: KeyCode) {
        let count = QuizMode::ALL.len();
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.settings_cursor = (self.settings_cursor + count - 1) % count;
                self.apply_settings();
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.settings_cursor = (self.settings_cursor + 1) % count;
                self.apply_settings();
            }
            KeyCode::Enter => {
                self.apply_settings();
                self.close_settings();
            }
            _ => {}
        }
    }

    fn apply_settings(&mut self) {
        let mode = QuizMode::ALL[self.settings_cursor];
        debug!("quiz mode set to {:?}", mode);
        self.default_mode = mode;
        if let Some(session) = self.session.as_mut() {
            session.set_mode(mode);
        }
    }
}
