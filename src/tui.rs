#![cfg(feature = "tui")]

use anyhow::Context;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use genie::config::Config;
use genie::select::{PlatformForm, PlatformSelection};
use genie::stream::{self, StreamingAdapter};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Terminal;
use std::io;
use tokio::sync::mpsc;

pub async fn run_tui(cfg: Option<&Config>) -> anyhow::Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alt screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let (ev_tx, mut ev_rx) = mpsc::unbounded_channel::<Event>();
    std::thread::spawn(move || {
        loop {
            match crossterm::event::read() {
                Ok(ev) => {
                    if ev_tx.send(ev).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });

    let (sel_tx, mut sel_rx) = mpsc::unbounded_channel::<PlatformSelection>();
    let mut form = PlatformForm::new(move |sel| {
        let _ = sel_tx.send(sel);
    });

    let mut active: Option<Box<dyn StreamingAdapter>> = None;
    let mut status =
        "Up/Down picks a platform, type a stream key, Enter connects, Esc quits.".to_string();

    let mut ticker = tokio::time::interval(std::time::Duration::from_millis(33));

    let res = loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = draw(&mut terminal, &form, &status, active.as_deref()) {
                    break Err(e);
                }
            }
            Some(ev) = ev_rx.recv() => {
                match ev {
                    Event::Key(key) => {
                        if handle_key(key, &mut form) {
                            break Ok(());
                        }
                    }
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
            Some(sel) = sel_rx.recv() => {
                connect(cfg, sel, &mut active, &mut status).await;
            }
        }
    };

    if let Some(mut adapter) = active.take() {
        let _ = adapter.stop().await;
    }

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

/// Returns true when the UI should exit.
fn handle_key<F: FnMut(PlatformSelection)>(key: KeyEvent, form: &mut PlatformForm<F>) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Up => form.select_prev(),
        KeyCode::Down => form.select_next(),
        KeyCode::Char(c) => form.push_key_char(c),
        KeyCode::Backspace => form.pop_key_char(),
        KeyCode::Enter => form.submit(),
        _ => {}
    }

    false
}

/// Tear down any live session, then bring up the one the form confirmed.
async fn connect(
    cfg: Option<&Config>,
    sel: PlatformSelection,
    active: &mut Option<Box<dyn StreamingAdapter>>,
    status: &mut String,
) {
    if let Some(mut old) = active.take() {
        if let Err(e) = old.stop().await {
            *status = format!("stop failed: {e}");
            return;
        }
    }

    let mut adapter = match stream::build_adapter(sel.platform) {
        Ok(a) => a,
        Err(e) => {
            *status = e.to_string();
            return;
        }
    };

    let adapter_cfg = cfg
        .and_then(|c| c.stream.get(&sel.platform).cloned())
        .unwrap_or_default();

    if let Err(e) = adapter.initialize(&adapter_cfg).await {
        *status = format!("initialize failed: {e}");
        return;
    }
    if let Err(e) = adapter.start(sel.stream_key.as_deref()).await {
        *status = format!("start failed: {e}");
        return;
    }

    *status = format!("Connected to {}.", sel.platform.label());
    *active = Some(adapter);
}

fn draw<F: FnMut(PlatformSelection)>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    form: &PlatformForm<F>,
    status: &str,
    active: Option<&dyn StreamingAdapter>,
) -> anyhow::Result<()> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(f.area());

        let items: Vec<ListItem> = form
            .choices()
            .iter()
            .map(|p| ListItem::new(p.label()))
            .collect();
        let mut state = ListState::default();
        state.select(Some(form.selected_index()));
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("platform"))
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[0], &mut state);

        let key_w = Paragraph::new(form.stream_key().to_string())
            .block(Block::default().borders(Borders::ALL).title("stream key / token"));
        f.render_widget(key_w, chunks[1]);

        let line = match active {
            Some(a) if a.is_connected() => format!("[live: {}] {status}", a.platform().label()),
            _ => status.to_string(),
        };
        let status_w =
            Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("status"));
        f.render_widget(status_w, chunks[2]);

        let x = chunks[1].x + 1 + form.stream_key().chars().count() as u16;
        let y = chunks[1].y + 1;
        f.set_cursor_position((x.min(chunks[1].x + chunks[1].width.saturating_sub(2)), y));
    })?;
    Ok(())
}
