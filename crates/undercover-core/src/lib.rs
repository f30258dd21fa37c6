//! Undercover - a hidden-role word deduction party game engine
//!
//! This crate provides the core game logic for Undercover, including:
//! - Word-pair table and random pair selection
//! - Random display-name generation
//! - Role quotas and shuffled role assignment
//! - Game state machine with elimination, win evaluation, and the
//!   Mr. White bonus guess
//!
//! # Architecture
//!
//! The engine is synchronous and free of I/O. All randomness is drawn from
//! an injected [`rand::Rng`] (with `thread_rng` convenience wrappers), so a
//! deterministic source can be supplied in tests. Storage and transport are
//! the caller's concern; an aggregate is created, looked up by ID, and
//! mutated through [`Game::eliminate`] and [`Game::guess`].
//!
//! # Modules
//!
//! - [`words`]: word-pair table for the deception mechanic
//! - [`names`]: random display-name generation
//! - [`roles`]: roles, quotas, and shuffled assignment
//! - [`player`]: player records and presentation colors
//! - [`win`]: pure win-condition evaluation
//! - [`reveal`]: seat-by-seat role reveal sequencing
//! - [`game`]: the game aggregate and its operations

pub mod game;
pub mod names;
pub mod player;
pub mod reveal;
pub mod roles;
pub mod win;
pub mod words;

// Re-export commonly used types
pub use game::{EliminationResult, Game, GameError, GameStatus, GuessResult, LogEntry, RoleTally};
pub use names::{generate_names, MAX_GENERATED_NAMES};
pub use player::{Player, PlayerColor};
pub use reveal::{RevealCursor, RoleCard};
pub use roles::{Role, RoleDistribution, MAX_MR_WHITE};
pub use win::{evaluate_winner, WinReason, Winner};
pub use words::{pair_at, random_pair, WordPair, WORD_PAIRS};
