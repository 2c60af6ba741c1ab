use anyhow::Context;
use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use github_lookup::app::{App, Effect, Message, SearchParams};
use github_lookup::cli::Cli;
use github_lookup::github::GitHubClient;
use github_lookup::ui;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::path::Path;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let client = GitHubClient::new(cli.api_url.clone(), cli.token.clone())
        .context("Failed to build GitHub client")?;

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, client, SearchParams::new(cli.category, cli.query)).await;
    restore_terminal()?;
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    client: GitHubClient,
    params: SearchParams,
) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::channel::<Message>(32);
    spawn_input_thread(tx.clone());

    // The initial mount issues the first fetch with the default parameters
    let (mut app, initial) = App::new(params);
    run_effect(initial, client.clone(), tx.clone());

    terminal.draw(|frame| ui::draw(frame, &app))?;

    while let Some(message) = rx.recv().await {
        if let Some(effect) = app.update(message) {
            run_effect(effect, client.clone(), tx.clone());
        }
        if app.should_quit {
            break;
        }
        terminal.draw(|frame| ui::draw(frame, &app))?;
    }

    Ok(())
}

/// Spawns the fetch a search asked for. The result comes back through the
/// message channel tagged with its request id.
fn run_effect(effect: Effect, client: GitHubClient, tx: mpsc::Sender<Message>) {
    match effect {
        Effect::Fetch { params, request_id } => {
            tracing::info!(request_id, query = %params.query, "issuing fetch");
            tokio::spawn(async move {
                let result = client.fetch(&params).await;
                let _ = tx.send(Message::FetchDone { request_id, result }).await;
            });
        }
    }
}

/// Reads terminal events on a dedicated thread so the async loop only ever
/// blocks on the message channel.
fn spawn_input_thread(tx: mpsc::Sender<Message>) {
    std::thread::spawn(move || loop {
        match crossterm::event::read() {
            Ok(Event::Key(key)) => {
                if let Some(message) = map_key(key) {
                    if tx.blocking_send(message).is_err() {
                        break;
                    }
                }
            }
            Ok(_) => {}
            Err(_) => break,
        }
    });
}

fn map_key(key: KeyEvent) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Esc => Some(Message::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Message::Quit),
        KeyCode::Enter => Some(Message::Submit),
        KeyCode::Tab => Some(Message::ToggleCategory),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Char(c) => Some(Message::InsertChar(c)),
        _ => None,
    }
}

/// Diagnostics go to a file when one is configured; the alternate screen
/// owns stdout.
fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<()> {
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
