use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use wordquiz::app::App;
use wordquiz::config::AppConfig;
use wordquiz::models::{QuizMode, SentenceSplit};
use wordquiz::ui;

#[derive(Parser, Debug)]
#[command(name = "wordquiz")]
#[command(version)]
#[command(about = "Guess the next word of your own text, one word at a time", long_about = None)]
// disable the default flags so i can customize them manually below
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
#[command(help_template = "\
{name} {version}
{about-section}
{usage-heading} {usage}

{all-args}
")]
struct Cli {
    /// Text file to quiz on ("-" reads stdin). Starts the quiz right away
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Quiz mode: "default" or "full-text"
    #[arg(short, long, value_enum)]
    mode: Option<QuizMode>,

    /// Sentence split: "aligned" or "strict"
    #[arg(short, long, value_enum)]
    split: Option<SentenceSplit>,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,

    // explicitly move these to a "Flags" heading
    /// Print the quiz summary as JSON on exit
    #[arg(long, default_value_t = false, help_heading = "Flags")]
    summary: bool,

    /// Print help
    #[arg(short, long, action = ArgAction::Help, help_heading = "Flags")]
    help: Option<bool>,

    /// Print version
    #[arg(short = 'V', long, action = ArgAction::Version, help_heading = "Flags")]
    version: Option<bool>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("could not open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("could not read text from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        init_logging(path)?;
    }

    let mut app_config = AppConfig::load().unwrap_or_else(|e| {
        warn!("config load failed, using defaults: {e:#}");
        eprintln!(
            "Warning: Failed to load config, using defaults. Error: {:#}",
            e
        );
        AppConfig::default()
    });
    if let Some(mode) = cli.mode {
        app_config.quiz.mode = mode;
    }
    if let Some(split) = cli.split {
        app_config.quiz.split = split;
    }

    let preload = cli.file.as_deref().map(read_text).transpose()?;

    let mut app = App::new(app_config.theme, app_config.quiz);
    if let Some(text) = preload {
        app.text = text;
        // too short stays on the editor with the error shown
        let _ = app.start_quiz();
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    if cli.summary {
        if let Some(summary) = app.summary() {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    info!("exiting");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(std::time::Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) => app.on_key_event(key),
                Event::Paste(data) => app.on_paste(&data),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
