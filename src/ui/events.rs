use crossterm::event::{self, Event, KeyEvent};
use signal_hook::consts::{SIGINT, SIGTERM};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// Answer to a chat question, tagged with the request it belongs to.
    ChatReply { request_id: u64, reply: String },
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
    /// The terminal stopped delivering events; no further ticks will follow.
    InputFailed(String),
}

/// Where the input thread reads terminal events from.
pub trait EventSource: Send + 'static {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

/// The real terminal.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        for signal in [SIGTERM, SIGINT] {
            if let Err(err) = signal_hook::flag::register(signal, Arc::clone(&shutdown)) {
                tracing::warn!(signal, error = %err, "Failed to register signal handler");
            }
        }
        Self::with_source(CrosstermEvents, tick_rate, shutdown)
    }

    /// Start the input thread on an arbitrary event source.
    pub fn with_source<S: EventSource>(
        source: S,
        tick_rate: Duration,
        shutdown: Arc<AtomicBool>,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        thread::spawn(move || pump_events(source, &event_tx, tick_rate, &shutdown));
        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Forward terminal events and ticks to `tx` until shutdown, a closed
/// channel or a source error. Every exit caused by the source or a signal
/// sends a final event so the receiver never waits on a dead thread.
fn pump_events<S: EventSource>(
    mut source: S,
    tx: &Sender<AppEvent>,
    tick_rate: Duration,
    shutdown: &AtomicBool,
) {
    let mut last_tick = Instant::now();
    loop {
        if shutdown.load(Ordering::Relaxed) {
            let _ = tx.send(AppEvent::Shutdown);
            return;
        }

        // Short poll so the shutdown flag is checked often
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        let forwarded = match source.poll(timeout) {
            Ok(true) => match source.read() {
                Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)).is_ok(),
                Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)).is_ok(),
                Ok(_) => true,
                Err(err) => {
                    tracing::error!(error = %err, "Failed to read terminal event");
                    let _ = tx.send(AppEvent::InputFailed(err.to_string()));
                    return;
                }
            },
            Ok(false) => true,
            Err(err) => {
                tracing::error!(error = %err, "Failed to poll terminal events");
                let _ = tx.send(AppEvent::InputFailed(err.to_string()));
                return;
            }
        };
        if !forwarded {
            return;
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
