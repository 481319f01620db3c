//! Blocking key wait with cooperative cancellation.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::error::RenderError;

/// How often the key wait re-checks its cancel token.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Shared flag that interrupts a blocking key wait.
///
/// Clones share the flag, so a Ctrl-C handler can hold one clone while the
/// waiting code holds another.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// `Err(Cancelled)` once the token has been tripped.
    pub fn check(&self) -> Result<(), RenderError> {
        if self.is_cancelled() {
            Err(RenderError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// A key that ended a wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Ctrl-C arrives as a key in raw mode and means "cancel".
    pub fn is_interrupt(&self) -> bool {
        self.code == KeyCode::Char('c') && self.modifiers.contains(KeyModifiers::CONTROL)
    }
}

/// Source of key presses. The only blocking collaborator of this crate.
pub trait KeySource {
    /// Block until a key is pressed or `cancel` trips.
    fn wait_key(&mut self, cancel: &CancelToken) -> Result<KeyPress, RenderError>;
}

/// Reads keys from the real terminal through crossterm.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self, RenderError> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::warn!(error = %e, "failed to leave raw mode");
        }
    }
}

impl KeySource for CrosstermKeys {
    fn wait_key(&mut self, cancel: &CancelToken) -> Result<KeyPress, RenderError> {
        let _raw = RawModeGuard::enable()?;
        loop {
            cancel.check()?;
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let press = KeyPress {
                    code: key.code,
                    modifiers: key.modifiers,
                };
                if press.is_interrupt() {
                    cancel.cancel();
                    return Err(RenderError::Cancelled);
                }
                return Ok(press);
            }
        }
    }
}

/// Replays a fixed list of keys (for testing).
///
/// Once the script runs out the wait behaves as if interrupted.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyPress>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = KeyPress>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }
}

impl KeySource for ScriptedKeys {
    fn wait_key(&mut self, cancel: &CancelToken) -> Result<KeyPress, RenderError> {
        cancel.check()?;
        let press = self.keys.pop_front().ok_or(RenderError::Cancelled)?;
        if press.is_interrupt() {
            cancel.cancel();
            return Err(RenderError::Cancelled);
        }
        Ok(press)
    }
}
