//! Headless host - single-threaded event loop driving the dispatcher
//!
//! Messages arrive as JSON text on a channel fed from any thread. The loop
//! renders them one at a time and fires toast expiry timers in between,
//! sleeping on the channel until whichever comes first.

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::core::config::HudConfig;
use crate::core::dispatcher::{Dispatch, Dispatcher};
use crate::core::document::{Document, Node};
use crate::core::elements::{HudElements, MissingElement};
use crate::core::timers::TimerQueue;
use crate::core::ui::UiRegion;

/// Inbound queue depth before senders block
const INBOUND_CAPACITY: usize = 128;

// =============================================================================
// HOST HANDLE
// =============================================================================

/// Sending side of the host's inbound queue (cheap to clone, `Send`)
#[derive(Debug, Clone)]
pub struct HostHandle {
    tx: Sender<String>,
}

impl HostHandle {
    /// Queue a raw JSON message. Returns false once the host has stopped.
    pub fn post(&self, raw: impl Into<String>) -> bool {
        self.tx.send(raw.into()).is_ok()
    }
}

/// Create the inbound queue: a handle for the game side, a receiver for the host
pub fn inbound_channel() -> (HostHandle, Receiver<String>) {
    let (tx, rx) = bounded(INBOUND_CAPACITY);
    (HostHandle { tx }, rx)
}

// =============================================================================
// HOST
// =============================================================================

/// Counters reported when the loop exits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostStats {
    pub rendered: usize,
    pub ignored: usize,
    pub malformed: usize,
    pub expired: usize,
}

pub struct HudHost<R> {
    dispatcher: Dispatcher<R, Rc<TimerQueue>>,
    timers: Rc<TimerQueue>,
    inbound: Receiver<String>,
    started: Instant,
}

impl HudHost<Node> {
    /// Host rendering into a fresh headless HUD page.
    ///
    /// Must be called on the thread that will run the loop.
    pub fn headless(
        config: &HudConfig,
        inbound: Receiver<String>,
    ) -> Result<(Self, Document), MissingElement> {
        let doc = Document::hud_page(&config.elements);
        let elements = HudElements::resolve(&config.elements, |id| doc.get_element_by_id(id))?;
        Ok((Self::new(elements, config, inbound), doc))
    }
}

impl<R: UiRegion + 'static> HudHost<R> {
    pub fn new(elements: HudElements<R>, config: &HudConfig, inbound: Receiver<String>) -> Self {
        let timers = Rc::new(TimerQueue::new());
        Self {
            dispatcher: Dispatcher::new(elements, Rc::clone(&timers), config),
            timers,
            inbound,
            started: Instant::now(),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<R, Rc<TimerQueue>> {
        &self.dispatcher
    }

    /// Run until every `HostHandle` is dropped.
    ///
    /// Toasts still on screen at that point are left in place; their timers
    /// are dropped with the loop.
    pub fn run(&self) -> HostStats {
        info!("[host] Event loop started");
        let mut stats = HostStats::default();

        loop {
            let received = match self.timers.next_deadline() {
                Some(deadline) => self.inbound.recv_deadline(self.started + deadline),
                None => self.inbound.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };

            // Timers first: anything due expired before this message arrived
            stats.expired += self.timers.advance_to(self.started.elapsed());

            match received {
                Ok(raw) => match self.dispatcher.dispatch_json(&raw) {
                    Ok(Dispatch::Rendered { .. }) => stats.rendered += 1,
                    Ok(Dispatch::Ignored) => stats.ignored += 1,
                    Err(e) => {
                        warn!(error = %e, "[host] Dropping malformed message");
                        stats.malformed += 1;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        debug!(pending = self.timers.pending(), "[host] Dropping pending timers");
        info!(
            rendered = stats.rendered,
            ignored = stats.ignored,
            malformed = stats.malformed,
            expired = stats.expired,
            "[host] Event loop stopped"
        );
        stats
    }
}

// =============================================================================
// TESTS
// =============================================================================
