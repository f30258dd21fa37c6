//! Seat-by-seat role reveal sequencing.
//!
//! At the start of a game the device is passed around the table: each
//! player in turn privately views their role card, then hands the device
//! on. [`RevealCursor`] tracks how far that pass has progressed. It is a
//! presentation-session aid layered over [`crate::game::Game::role_card`];
//! nothing stops a client from querying seats out of order, and the engine
//! does not try to.

use crate::player::PlayerColor;
use crate::roles::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One seat's private role card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCard {
    pub seat: usize,
    pub player_id: Uuid,
    pub name: String,
    pub role: Role,
    /// Secret word, absent for Mr. White
    pub word: Option<String>,
    pub color: PlayerColor,
}

/// Cursor over the roster for the pass-the-device reveal phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealCursor {
    seats: usize,
    next: usize,
}

impl RevealCursor {
    /// Create a cursor over a roster of `seats` players.
    pub fn new(seats: usize) -> Self {
        Self { seats, next: 0 }
    }

    /// The seat that would be revealed next, if any.
    pub fn peek(&self) -> Option<usize> {
        (self.next < self.seats).then_some(self.next)
    }

    /// Advance past the next seat, returning it.
    pub fn advance(&mut self) -> Option<usize> {
        let seat = self.peek()?;
        self.next += 1;
        Some(seat)
    }

    /// How many seats are still unrevealed.
    pub fn remaining(&self) -> usize {
        self.seats - self.next
    }

    /// Whether every seat has been revealed.
    pub fn is_complete(&self) -> bool {
        self.next >= self.seats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_walks_every_seat_once() {
        let mut cursor = RevealCursor::new(4);
        let seats: Vec<usize> = std::iter::from_fn(|| cursor.advance()).collect();
        assert_eq!(seats, vec![0, 1, 2, 3]);
        assert!(cursor.is_complete());
    }

    #[test]
    fn test_exhausted_cursor_yields_nothing() {
        let mut cursor = RevealCursor::new(1);
        assert_eq!(cursor.advance(), Some(0));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let mut cursor = RevealCursor::new(3);
        assert_eq!(cursor.peek(), Some(0));
        assert_eq!(cursor.peek(), Some(0));
        assert_eq!(cursor.remaining(), 3);
        cursor.advance();
        assert_eq!(cursor.peek(), Some(1));
    }
}
