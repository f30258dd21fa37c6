//! WebSocket protocol messages for the Undercover server.

use serde::{Deserialize, Serialize};
use undercover_core::{
    EliminationResult, Game, GuessResult, Player, RoleCard, RoleDistribution, WordPair,
};
use uuid::Uuid;

/// Messages sent from client to server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ClientMessage {
    /// Create a new game. The default role distribution for the player
    /// count is used when none is given; names are generated when omitted.
    CreateGame {
        player_count: u32,
        distribution: Option<RoleDistribution>,
        names: Option<Vec<String>>,
    },

    /// Fetch a full game snapshot
    GetGame { game_id: Uuid },

    /// Fetch a single player's record
    GetPlayer { game_id: Uuid, player_id: Uuid },

    /// Reveal the next seat's role card, advancing the reveal cursor
    RevealNext { game_id: Uuid },

    /// Eliminate a player by vote
    Eliminate { game_id: Uuid, player_id: Uuid },

    /// Submit an eliminated Mr. White's guess at the civilian word
    Guess {
        game_id: Uuid,
        player_id: Uuid,
        guess: String,
    },

    /// Fetch a random word pair (for previewing the corpus)
    GetWordPair,

    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ServerMessage {
    /// Game created successfully
    GameCreated { game_id: Uuid },

    /// Full game snapshot
    GameSnapshot { game: Game },

    /// Single player snapshot
    PlayerSnapshot { player: Player },

    /// The next seat's private role card
    RoleRevealed { card: RoleCard, remaining: usize },

    /// Every seat has been revealed
    RevealFinished,

    /// Elimination applied
    Eliminated { result: EliminationResult },

    /// Mr. White guess resolved
    GuessResolved { result: GuessResult },

    /// A random word pair
    WordPair { pair: WordPair },

    /// Error occurred
    Error { message: String },

    /// Pong response
    Pong,
}
