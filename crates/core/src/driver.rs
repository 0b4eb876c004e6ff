//! Input seam between the simulation and whatever produces key presses.
//!
//! The session never talks to a terminal. Each tick the loop polls one
//! [`InputSource`] for at most one [`InputEvent`] and hands it to
//! [`GameSession::apply_event`]. Terminal front-ends implement the trait in the
//! input crate; [`ScriptedInput`] replays a fixed event list (tests, benches,
//! headless runs).

use std::collections::VecDeque;
use std::convert::Infallible;

use crate::session::{GameSession, Status};
use crate::types::{Direction, InputEvent};

/// A polled source of logical input events
pub trait InputSource {
    type Error;

    /// The event observed for this tick; `Ok(None)` means "no input".
    ///
    /// Must not block for longer than the caller's tick budget.
    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}

/// Replays a fixed sequence, one entry per tick, then reports no input
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<Option<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = Option<InputEvent>>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Script made only of direction requests
    pub fn directions(dirs: impl IntoIterator<Item = Direction>) -> Self {
        Self::new(dirs.into_iter().map(|d| Some(InputEvent::Direction(d))))
    }

    pub fn push(&mut self, event: Option<InputEvent>) {
        self.events.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputSource for ScriptedInput {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.events.pop_front().flatten())
    }
}

/// Poll `input` once and advance `session` with the result
pub fn run_tick<I: InputSource>(
    session: &mut GameSession,
    input: &mut I,
) -> Result<Status, I::Error> {
    let event = input.poll_event()?;
    Ok(session.apply_event(event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameConfig, Position};

    #[test]
    fn scripted_input_drains_in_order() {
        let mut input = ScriptedInput::new([
            Some(InputEvent::Direction(Direction::Up)),
            None,
            Some(InputEvent::Quit),
        ]);
        assert_eq!(
            input.poll_event(),
            Ok(Some(InputEvent::Direction(Direction::Up)))
        );
        assert_eq!(input.poll_event(), Ok(None));
        assert_eq!(input.poll_event(), Ok(Some(InputEvent::Quit)));
        assert_eq!(input.poll_event(), Ok(None));
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn run_tick_applies_polled_direction() {
        let config = GameConfig::default().with_board(10, 10).with_initial_length(3);
        let mut session = GameSession::new(config, 1);
        session.place_food(Position::new(0, 0));
        let mut input = ScriptedInput::directions([Direction::Up]);

        let status = run_tick(&mut session, &mut input).unwrap();
        assert_eq!(status, Status::Running);
        assert_eq!(session.snake().head(), Position::new(5, 4));
        assert_eq!(session.snake().direction(), Direction::Up);
    }
}
