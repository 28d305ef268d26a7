//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode,
//!   mouse capture).
//! - Drive a single event loop over terminal input, a notice ticker and the
//!   data-source tasks started by `cmd`.
//! - Apply shell effects (open/close the sidebar, quit) and hand the rest to
//!   `cmd::run_from_effects`.
//!
//! Input comes from a dedicated OS thread that blocks on
//! `crossterm::event::read()` and forwards events over a channel, keeping
//! blocking reads off the async workers.
use std::{io::Stdout, sync::Arc, thread, time::Duration};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::{StreamExt, stream::FuturesUnordered};
use jobdeck_api::NavigationSource;
use jobdeck_types::{Effect, ExecOutcome, Msg};
use jobdeck_util::Settings;
use ratatui::{Terminal, prelude::CrosstermBackend};
use tokio::{
    signal,
    sync::mpsc,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::app::App;
use crate::cmd;
use crate::ui::components::component::Component;
use crate::ui::main_component::MainView;
use crate::ui::theme;

/// Notice expiry is checked at this rate.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

type Backend = CrosstermBackend<Stdout>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

/// Spawns the input thread. The channel closes when reading fails or the
/// receiver is dropped.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!(%error, "failed to read terminal event");
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<Backend>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    // Pick up the areas recorded by the previous frame.
    app.rebuild_focus();
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        _ => Vec::new(),
    }
}

/// Applies shell effects in place and starts data-source calls for the rest.
fn process_effects(app: &mut App, mut effects: Vec<Effect>, pending_execs: &mut FuturesUnordered<JoinHandle<ExecOutcome>>) -> LoopControl {
    let shell_effects: Vec<Effect> = effects
        .extract_if(.., |effect| matches!(effect, Effect::OpenSidebar | Effect::CloseSidebar | Effect::Quit))
        .collect();

    for effect in shell_effects {
        match effect {
            Effect::OpenSidebar => app.open_sidebar(),
            Effect::CloseSidebar => app.close_sidebar(),
            Effect::Quit => return LoopControl::Exit,
            _ => {}
        }
    }

    if !effects.is_empty() {
        pending_execs.extend(cmd::run_from_effects(app, effects).pending);
    }
    LoopControl::Continue
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop and restores the terminal on the way out, including after errors.
pub async fn run_app(settings: Settings, source: Arc<dyn NavigationSource>) -> Result<()> {
    info!(source = %source.describe(), page_size = settings.page_size, "starting jobdeck");
    let mut app = App::new(settings, source, theme::load());
    let mut main_view = MainView::default();
    if let Ok((width, height)) = crossterm::terminal::size() {
        app.update(&Msg::Resize(width, height));
    }

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app, &mut main_view).await;
    cleanup_terminal(&mut terminal)?;
    info!("jobdeck stopped");
    result
}

async fn event_loop(terminal: &mut Terminal<Backend>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut pending_execs: FuturesUnordered<JoinHandle<ExecOutcome>> = FuturesUnordered::new();
    // The menu is fetched once per mount.
    let mut effects: Vec<Effect> = vec![Effect::LoadNavigation];

    let mut ticker = time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(terminal, app, main_view)?;

    loop {
        if !effects.is_empty() && process_effects(app, std::mem::take(&mut effects), &mut pending_execs) == LoopControl::Exit {
            break;
        }

        let mut needs_render = false;
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                match maybe_event {
                    Some(Event::Key(key_event))
                        if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) => break,
                    Some(event) => effects.extend(handle_input_event(app, main_view, event)),
                    // Input channel closed; shut down cleanly.
                    None => break,
                }
                needs_render = true;
            }

            _ = ticker.tick() => {
                let had_notice = app.notice.is_some();
                effects.extend(main_view.handle_message(app, Msg::Tick));
                needs_render = had_notice != app.notice.is_some();
            }

            Some(joined) = pending_execs.next(), if !pending_execs.is_empty() => {
                match joined {
                    Ok(outcome) => {
                        debug!(?outcome, "data source call completed");
                        effects.extend(main_view.handle_message(app, Msg::ExecCompleted(outcome)));
                    }
                    Err(error) => warn!(%error, "data source task failed"),
                }
                needs_render = true;
            }

            _ = signal::ctrl_c() => break,
        }

        if needs_render {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;

    #[tokio::test]
    async fn shell_effects_are_applied_in_place() {
        let mut app = test_app();
        app.update(&Msg::Resize(80, 24));
        let mut pending = FuturesUnordered::new();

        let control = process_effects(&mut app, vec![Effect::OpenSidebar], &mut pending);
        assert_eq!(control, LoopControl::Continue);
        assert!(app.is_overlay_open());
        assert!(pending.is_empty());

        process_effects(&mut app, vec![Effect::CloseSidebar, Effect::LoadNavigation], &mut pending);
        assert!(!app.is_overlay_open());
        assert_eq!(pending.len(), 1);

        assert_eq!(process_effects(&mut app, vec![Effect::Quit], &mut pending), LoopControl::Exit);
    }
}
