//! Snake module - body segments, heading and growth bookkeeping
//!
//! Layout: `head` holds the live head position; `segments[0]` is the slot the
//! head occupied after the last shift and `segments[len - 1]` is the tail.
//!
//! Growth appends a [`Segment::Pending`] slot at the tail. Pending slots count
//! toward the length but are never drawn and never collide; the next shift
//! moves a placed position into them.

use crate::types::{Direction, Position};

/// One body slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Segment on the board
    Placed(Position),
    /// Grown but not yet shifted into place
    Pending,
}

impl Segment {
    pub fn position(self) -> Option<Position> {
        match self {
            Segment::Placed(p) => Some(p),
            Segment::Pending => None,
        }
    }

    fn is_at(self, pos: Position) -> bool {
        self == Segment::Placed(pos)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    head: Position,
    direction: Direction,
    segments: Vec<Segment>,
}

impl Snake {
    /// Create a snake of `len` segments laid out leftwards from `head`, facing right
    pub fn new(head: Position, len: usize) -> Self {
        let segments = (0..len as i32)
            .map(|i| Segment::Placed(Position::new(head.x - i, head.y)))
            .collect();
        Self {
            head,
            direction: Direction::Right,
            segments,
        }
    }

    /// Build a snake from explicit parts.
    ///
    /// `segments[0]` is expected to equal `head`, as after a shift.
    pub fn from_parts(head: Position, direction: Direction, segments: Vec<Segment>) -> Self {
        Self {
            head,
            direction,
            segments,
        }
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Logical length, pending segments included
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments already on the board
    pub fn visible_len(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Placed(_)))
            .count()
    }

    /// Adopt a new heading unless it reverses the current one.
    ///
    /// Returns whether the heading was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Position the head would move to in `direction`
    pub fn advance_head(&self, direction: Direction) -> Position {
        self.head.step(direction)
    }

    pub fn set_head(&mut self, head: Position) {
        self.head = head;
    }

    /// Check `new_head` against the pre-move body.
    ///
    /// Slot 0 is where the head is leaving from and is skipped.
    pub fn self_collides(&self, new_head: Position) -> bool {
        self.segments.iter().skip(1).any(|s| s.is_at(new_head))
    }

    /// Check if the head or any placed segment is at `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.head == pos || self.segments.iter().any(|s| s.is_at(pos))
    }

    /// Append one pending segment at the tail
    pub fn grow(&mut self) {
        self.segments.push(Segment::Pending);
    }

    /// Move every segment into its predecessor's slot and put the head in slot 0
    pub fn shift_body(&mut self) {
        if self.segments.is_empty() {
            return;
        }
        let last = self.segments.len() - 1;
        self.segments.copy_within(0..last, 1);
        self.segments[0] = Segment::Placed(self.head);
    }

    /// Placed body positions, excluding slot 0 (which sits under the head)
    pub fn body_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().skip(1).filter_map(|s| s.position())
    }
}
