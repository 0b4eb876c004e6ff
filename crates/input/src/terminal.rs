//! Queued terminal input source.
//!
//! Key presses read while the loop waits for the next tick are queued and
//! released one per tick, so a quick "up, left" turns on two consecutive
//! ticks instead of the second press overwriting the first. Quit skips the
//! queue and is reported on the very next poll.

use std::io;
use std::time::Instant;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::trace;

use crate::core::InputSource;
use crate::map::handle_key_event;
use crate::types::InputEvent;

/// Maximum direction presses buffered ahead of the simulation
pub const QUEUE_CAPACITY: usize = 8;

#[derive(Debug, Clone, Default)]
pub struct TerminalInput {
    pending: ArrayVec<InputEvent, QUEUE_CAPACITY>,
    quit: bool,
    dropped: u64,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map and enqueue one key event. Returns whether it produced an event.
    ///
    /// Only presses count; presses beyond the queue capacity are dropped.
    pub fn push_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match handle_key_event(key) {
            Some(InputEvent::Quit) => {
                self.quit = true;
                true
            }
            Some(ev) => {
                if self.pending.try_push(ev).is_err() {
                    self.dropped += 1;
                    trace!(dropped = self.dropped, "input queue full");
                    return false;
                }
                true
            }
            None => false,
        }
    }

    /// Read terminal events until `deadline`, queueing the mapped ones.
    ///
    /// This is where the loop spends its inter-tick delay.
    pub fn pump_until(&mut self, deadline: Instant) -> io::Result<()> {
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                return Ok(());
            }
            if let Event::Key(key) = event::read()? {
                self.push_key(key);
            }
            if Instant::now() >= deadline {
                return Ok(());
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Presses discarded because the queue was full
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    fn pop(&mut self) -> Option<InputEvent> {
        if self.quit {
            return Some(InputEvent::Quit);
        }
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl InputSource for TerminalInput {
    type Error = io::Error;

    fn poll_event(&mut self) -> io::Result<Option<InputEvent>> {
        Ok(self.pop())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn releases_one_event_per_poll_in_order() {
        let mut input = TerminalInput::new();
        assert!(input.push_key(press(KeyCode::Up)));
        assert!(input.push_key(press(KeyCode::Left)));
        assert_eq!(input.pending(), 2);

        assert_eq!(
            input.poll_event().unwrap(),
            Some(InputEvent::Direction(Direction::Up))
        );
        assert_eq!(
            input.poll_event().unwrap(),
            Some(InputEvent::Direction(Direction::Left))
        );
        assert_eq!(input.poll_event().unwrap(), None);
    }

    #[test]
    fn quit_jumps_the_queue_and_sticks() {
        let mut input = TerminalInput::new();
        input.push_key(press(KeyCode::Up));
        input.push_key(press(KeyCode::Char('q')));
        assert!(input.quit_requested());
        assert_eq!(input.poll_event().unwrap(), Some(InputEvent::Quit));
        assert_eq!(input.poll_event().unwrap(), Some(InputEvent::Quit));
    }

    #[test]
    fn ignores_unmapped_and_non_press_keys() {
        let mut input = TerminalInput::new();
        assert!(!input.push_key(press(KeyCode::Char('x'))));
        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(!input.push_key(release));
        assert_eq!(input.pending(), 0);
    }

    #[test]
    fn drops_presses_beyond_capacity() {
        let mut input = TerminalInput::new();
        for _ in 0..QUEUE_CAPACITY {
            assert!(input.push_key(press(KeyCode::Down)));
        }
        assert!(!input.push_key(press(KeyCode::Down)));
        assert_eq!(input.pending(), QUEUE_CAPACITY);
        assert_eq!(input.dropped(), 1);
    }
}
