//! Player records and presentation colors.

use crate::roles::Role;
use crate::words::WordPair;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Presentation color tag for UI rendering. Carried on the player record
/// but never consulted by game logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerColor {
    Teal,
    Coral,
    Purple,
    Indigo,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Pink,
}

impl PlayerColor {
    /// Get the color for a seat index, cycling through the pool.
    pub fn for_seat(seat: usize) -> Self {
        match seat % 10 {
            0 => PlayerColor::Teal,
            1 => PlayerColor::Coral,
            2 => PlayerColor::Purple,
            3 => PlayerColor::Indigo,
            4 => PlayerColor::Blue,
            5 => PlayerColor::Green,
            6 => PlayerColor::Yellow,
            7 => PlayerColor::Orange,
            8 => PlayerColor::Red,
            _ => PlayerColor::Pink,
        }
    }

    /// Get hex color code for rendering
    pub fn hex_code(&self) -> u32 {
        match self {
            PlayerColor::Teal => 0x1ABC9C,
            PlayerColor::Coral => 0xFF7F50,
            PlayerColor::Purple => 0x9B59B6,
            PlayerColor::Indigo => 0x5C6BC0,
            PlayerColor::Blue => 0x3498DB,
            PlayerColor::Green => 0x2ECC71,
            PlayerColor::Yellow => 0xF1C40F,
            PlayerColor::Orange => 0xE67E22,
            PlayerColor::Red => 0xE74C3C,
            PlayerColor::Pink => 0xFD79A8,
        }
    }
}

/// A single player's state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique player ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Secret role
    pub role: Role,
    /// Secret word. `None` exactly when the role is Mr. White.
    pub word: Option<String>,
    /// One-way elimination flag
    pub is_eliminated: bool,
    /// Presentation color
    pub color: PlayerColor,
}

impl Player {
    /// Create a player for a seat, deriving the secret word from the role.
    pub fn new(seat: usize, name: String, role: Role, pair: &WordPair) -> Self {
        let word = match role {
            Role::Civilian => Some(pair.word1.clone()),
            Role::Undercover => Some(pair.word2.clone()),
            Role::MrWhite => None,
        };

        Self {
            id: Uuid::new_v4(),
            name,
            role,
            word,
            is_eliminated: false,
            color: PlayerColor::for_seat(seat),
        }
    }

    /// Whether this player is still in the game.
    pub fn is_active(&self) -> bool {
        !self.is_eliminated
    }
}
