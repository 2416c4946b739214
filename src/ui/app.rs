//! Chat run loop: terminal setup, event handling, draw.
//!
//! Key events are read on a dedicated thread so the loop keeps drawing the
//! thinking indicator and picking up replies while the terminal is idle.

use std::io;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc as tokio_mpsc;

use crate::config::Config;
use crate::events::AppEvent;
use crate::responder::Responder;
use crate::ui::conversation::{ConversationAction, ConversationManager};

const TICK: Duration = Duration::from_millis(16);

/// Run the chat UI until the user leaves. Must be called inside a tokio runtime.
pub async fn run(config: &Config) -> Result<()> {
    let (responder, mut event_rx) = Responder::new(config.thinking_delay());
    let mut manager = ConversationManager::new(config, responder);
    manager.start();

    tracing::info!(
        language = manager.session().language().code,
        delay_ms = config.thinking_delay_ms,
        "chat started"
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut manager, &mut event_rx).await;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    disable_raw_mode()?;

    tracing::info!(messages = manager.session().log().len(), "chat ended");
    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    manager: &mut ConversationManager,
    event_rx: &mut tokio_mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    let (key_tx, key_rx) = mpsc::channel();
    std::thread::spawn(move || {
        loop {
            if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                if let Ok(ev) = event::read() {
                    if key_tx.send(ev).is_err() {
                        break;
                    }
                }
            }
        }
    });

    loop {
        while let Ok(event) = event_rx.try_recv() {
            if manager.handle_event(event) == ConversationAction::Exit {
                return Ok(());
            }
        }

        terminal.draw(|f| f.render_widget(&*manager, f.size()))?;

        while let Ok(ev) = key_rx.try_recv() {
            if let Event::Key(key) = ev {
                if manager.handle_key(key) == ConversationAction::Exit {
                    return Ok(());
                }
            }
        }

        tokio::time::sleep(TICK).await;
    }
}
