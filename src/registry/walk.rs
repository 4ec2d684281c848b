use super::owner::{Owner, OwnerId};
use super::Registry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which ring link a walk follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// `F`/`f` is forward, `B`/`b` is backward.
    pub fn from_char(c: char) -> Option<Direction> {
        match c.to_ascii_uppercase() {
            'F' => Some(Direction::Forward),
            'B' => Some(Direction::Backward),
            _ => None,
        }
    }

    /// Parse the first non-blank character of user input.
    pub fn parse(input: &str) -> Option<Direction> {
        input.trim().chars().next().and_then(Self::from_char)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}

/// Steps around the ring from the head for a fixed number of owners,
/// wrapping as often as needed.
pub struct DirectionalWalk<'a> {
    registry: &'a Registry,
    direction: Direction,
    current: Option<u32>,
    remaining: usize,
}

impl<'a> DirectionalWalk<'a> {
    pub(crate) fn new(registry: &'a Registry, direction: Direction, steps: usize) -> Self {
        Self {
            registry,
            direction,
            current: registry.head_index(),
            remaining: steps,
        }
    }
}

impl<'a> Iterator for DirectionalWalk<'a> {
    type Item = (OwnerId, &'a Owner);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.current?;
        let (id, entry) = self.registry.live_entry(index)?;
        self.remaining -= 1;
        self.current = Some(match self.direction {
            Direction::Forward => entry.next,
            Direction::Backward => entry.prev,
        });
        Some((id, &entry.owner))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current {
            Some(_) => (self.remaining, Some(self.remaining)),
            None => (0, Some(0)),
        }
    }
}
