use crate::chat::ChatClient;
use crate::ui::app::{App, AppOptions, ChatRequest};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

const TICK_RATE: Duration = Duration::from_millis(250);
/// Redraw cadence while a fade is running.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Run the TUI until the user quits or a shutdown signal arrives.
///
/// Chat requests are spawned on `runtime`; their answers come back through
/// the event channel so the app is only ever touched from this loop.
pub fn run(options: AppOptions, chat: Arc<dyn ChatClient>, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(options, Instant::now());
    let events = EventHandler::new(TICK_RATE);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app, Instant::now()))?;
        if app.should_quit() {
            break;
        }

        let timeout = if app.is_animating(Instant::now()) {
            FRAME_INTERVAL
        } else {
            TICK_RATE
        };

        match events.next(timeout) {
            Ok(event) => {
                if let Some(request) = handle_event(&mut app, event, Instant::now()) {
                    spawn_chat_request(&runtime, Arc::clone(&chat), request, events.sender());
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Dropping the app unmounts every carousel before the terminal is restored
    drop(app);
    drop(guard);
    Ok(())
}

/// Apply one event to the app. Returns a chat request to dispatch, if any.
pub fn handle_event(app: &mut App, event: AppEvent, now: Instant) -> Option<ChatRequest> {
    match event {
        AppEvent::Key(key) => match handle_key(app, key, now) {
            InputAction::SendChat(request) => return Some(request),
            InputAction::None => {}
        },
        AppEvent::Tick => app.on_tick(now),
        AppEvent::Resize(cols, rows) => app.on_resize(cols, rows),
        AppEvent::ChatReply { request_id, reply } => app.on_chat_reply(request_id, reply),
        AppEvent::Shutdown => {
            tracing::info!("Shutdown signal received");
            app.request_quit();
        }
        AppEvent::InputFailed(reason) => {
            tracing::error!(%reason, "Terminal input lost, exiting");
            app.request_quit();
        }
    }
    None
}

fn spawn_chat_request(
    runtime: &Handle,
    chat: Arc<dyn ChatClient>,
    request: ChatRequest,
    tx: Sender<AppEvent>,
) {
    tracing::debug!(request_id = request.request_id, "Dispatching chat request");
    runtime.spawn(async move {
        let reply = chat.send_message(&request.message, &request.context).await;
        let _ = tx.send(AppEvent::ChatReply {
            request_id: request.request_id,
            reply,
        });
    });
}
