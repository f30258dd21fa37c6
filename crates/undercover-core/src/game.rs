//! Core game state machine.
//!
//! This module contains the main `Game` aggregate and the state-mutating
//! operations: creation, elimination, and the Mr. White guess.

use crate::names;
use crate::player::Player;
use crate::reveal::RoleCard;
use crate::roles::{Role, RoleDistribution};
use crate::win::{evaluate_winner, WinReason, Winner};
use crate::words::{self, WordPair};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Active,
    /// Terminal; no transition out
    Completed,
}

/// Errors that can occur when creating or mutating a game
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("role distribution covers {actual} seats but the game has {expected} players")]
    DistributionMismatch { expected: u32, actual: u32 },

    #[error("at least one civilian is required")]
    NoCivilians,

    #[error("at most two Mr. White seats are allowed")]
    TooManyMrWhites,

    #[error("cannot name {requested} players, the name pool holds {available}")]
    NamePoolExhausted { requested: usize, available: usize },

    #[error("player not found")]
    PlayerNotFound,

    #[error("player is already eliminated")]
    AlreadyEliminated,

    #[error("game is already completed")]
    GameCompleted,

    #[error("only an eliminated Mr. White can guess")]
    GuessNotAllowed,
}

/// One elimination recorded in the game log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Round in which the elimination happened
    pub round: u32,
    pub player_id: Uuid,
    pub player_name: String,
    pub role: Role,
    pub word: Option<String>,
}

/// Active/total head counts per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTally {
    pub round: u32,
    pub active_players: usize,
    pub total_players: usize,
    pub civilians: usize,
    pub undercover: usize,
    pub mr_white: usize,
}

/// What an elimination produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EliminationResult {
    /// Snapshot of the player just voted out
    pub eliminated: Player,
    pub tally: RoleTally,
    pub winner: Option<Winner>,
}

/// What a Mr. White guess produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessResult {
    pub is_correct: bool,
    /// The civilian word, revealed only on a correct guess
    pub word: Option<String>,
    pub winner: Option<Winner>,
}

/// The complete state of one Undercover game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Unique game ID
    pub id: Uuid,
    /// All players, in seat order. Membership is fixed after creation.
    pub players: Vec<Player>,
    /// The word every civilian holds
    pub civilian_word: String,
    /// The word every undercover holds. Always differs from the civilian word.
    pub undercover_word: String,
    /// Elimination cycle counter (starts at 1)
    pub round: u32,
    /// Current game status
    pub status: GameStatus,
    /// Append-only log, one entry per elimination
    pub log: Vec<LogEntry>,
    /// The declared winner, once the game completes
    pub winner: Option<Winner>,
}

impl Game {
    /// Create a new game with the thread-local RNG.
    pub fn new(
        player_count: u32,
        distribution: RoleDistribution,
        custom_names: Option<Vec<String>>,
    ) -> Result<Self, GameError> {
        Self::new_with_rng(player_count, distribution, custom_names, &mut rand::thread_rng())
    }

    /// Create a new game, drawing the word pair, names, and role order from
    /// the supplied RNG. Validation happens before any state is built.
    pub fn new_with_rng<R: Rng>(
        player_count: u32,
        distribution: RoleDistribution,
        custom_names: Option<Vec<String>>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        distribution.validate(player_count)?;

        let pair = words::random_pair(rng);

        // Custom names are used only when they cover the whole roster.
        let player_names = match custom_names {
            Some(ns) if ns.len() == player_count as usize => ns,
            _ => names::generate_names(player_count as usize, rng)?,
        };

        let roles = distribution.assign(rng);

        let players: Vec<Player> = roles
            .into_iter()
            .zip(player_names)
            .enumerate()
            .map(|(seat, (role, name))| Player::new(seat, name, role, &pair))
            .collect();

        let WordPair { word1, word2 } = pair;

        Ok(Self {
            id: Uuid::new_v4(),
            players,
            civilian_word: word1,
            undercover_word: word2,
            round: 1,
            status: GameStatus::Active,
            log: Vec::new(),
            winner: None,
        })
    }

    /// Get the number of players
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Get a player by ID
    pub fn player(&self, player_id: Uuid) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Players still in the game
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_active())
    }

    /// Check if the game is finished
    pub fn is_completed(&self) -> bool {
        self.status == GameStatus::Completed
    }

    /// Current active/total head counts per role.
    pub fn tally(&self) -> RoleTally {
        let count = |role: Role| self.active_players().filter(|p| p.role == role).count();

        RoleTally {
            round: self.round,
            active_players: self.active_players().count(),
            total_players: self.players.len(),
            civilians: count(Role::Civilian),
            undercover: count(Role::Undercover),
            mr_white: count(Role::MrWhite),
        }
    }

    /// The private role card for a seat. Exposes only that seat's secret;
    /// reveal sequencing is the caller's concern.
    pub fn role_card(&self, seat: usize) -> Option<RoleCard> {
        self.players.get(seat).map(|p| RoleCard {
            seat,
            player_id: p.id,
            name: p.name.clone(),
            role: p.role,
            word: p.word.clone(),
            color: p.color,
        })
    }

    /// Eliminate a player by vote.
    ///
    /// Flips the elimination flag, appends a log entry, increments the
    /// round, and evaluates the win conditions over the remaining roster.
    /// All validation happens before any mutation.
    pub fn eliminate(&mut self, player_id: Uuid) -> Result<EliminationResult, GameError> {
        if self.is_completed() {
            return Err(GameError::GameCompleted);
        }

        let index = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(GameError::PlayerNotFound)?;

        if self.players[index].is_eliminated {
            return Err(GameError::AlreadyEliminated);
        }

        self.players[index].is_eliminated = true;
        let eliminated = self.players[index].clone();

        self.log.push(LogEntry {
            round: self.round,
            player_id: eliminated.id,
            player_name: eliminated.name.clone(),
            role: eliminated.role,
            word: eliminated.word.clone(),
        });
        self.round += 1;

        let winner = evaluate_winner(&self.players);
        if let Some(winner) = winner {
            self.status = GameStatus::Completed;
            self.winner = Some(winner);
        }

        Ok(EliminationResult {
            eliminated,
            tally: self.tally(),
            winner,
        })
    }

    /// Resolve an eliminated Mr. White's guess at the civilian word.
    ///
    /// The guess is allowed even after a winner was declared by the same
    /// elimination: it is Mr. White's last action, and a correct guess
    /// takes the game. An incorrect guess changes nothing.
    pub fn guess(&mut self, player_id: Uuid, guess: &str) -> Result<GuessResult, GameError> {
        let player = self.player(player_id).ok_or(GameError::PlayerNotFound)?;

        if player.role != Role::MrWhite || !player.is_eliminated {
            return Err(GameError::GuessNotAllowed);
        }

        let is_correct =
            guess.trim().to_lowercase() == self.civilian_word.trim().to_lowercase();

        if is_correct {
            let winner = Winner {
                role: Role::MrWhite,
                reason: WinReason::Guess,
            };
            self.status = GameStatus::Completed;
            self.winner = Some(winner);

            return Ok(GuessResult {
                is_correct: true,
                word: Some(self.civilian_word.clone()),
                winner: Some(winner),
            });
        }

        Ok(GuessResult {
            is_correct: false,
            word: None,
            winner: self.winner,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn distribution(civilians: u32, undercover: u32, mr_white: u32) -> RoleDistribution {
        RoleDistribution {
            civilians,
            undercover,
            mr_white,
        }
    }

    fn new_game(civilians: u32, undercover: u32, mr_white: u32) -> Game {
        let count = civilians + undercover + mr_white;
        let mut rng = StdRng::seed_from_u64(7);
        Game::new_with_rng(count, distribution(civilians, undercover, mr_white), None, &mut rng)
            .unwrap()
    }

    fn find_by_role(game: &Game, role: Role) -> Uuid {
        game.players
            .iter()
            .find(|p| p.role == role && p.is_active())
            .map(|p| p.id)
            .expect("no active player with that role")
    }

    #[test]
    fn test_new_game_is_active_round_one() {
        let game = new_game(4, 1, 1);
        assert_eq!(game.status, GameStatus::Active);
        assert_eq!(game.round, 1);
        assert!(game.log.is_empty());
        assert_eq!(game.winner, None);
        assert_eq!(game.player_count(), 6);
    }

    #[test]
    fn test_create_rejects_bad_distribution() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = Game::new_with_rng(6, distribution(3, 1, 1), None, &mut rng).unwrap_err();
        assert!(matches!(err, GameError::DistributionMismatch { .. }));
    }

    #[test]
    fn test_words_follow_roles() {
        let game = new_game(4, 2, 1);
        assert_ne!(game.civilian_word, game.undercover_word);

        for player in &game.players {
            match player.role {
                Role::Civilian => assert_eq!(player.word.as_deref(), Some(&*game.civilian_word)),
                Role::Undercover => {
                    assert_eq!(player.word.as_deref(), Some(&*game.undercover_word))
                }
                Role::MrWhite => assert_eq!(player.word, None),
            }
        }
    }

    #[test]
    fn test_custom_names_used_when_count_matches() {
        let mut rng = StdRng::seed_from_u64(7);
        let names = vec!["Ana".to_string(), "Ben".to_string(), "Cleo".to_string()];
        let game =
            Game::new_with_rng(3, distribution(1, 1, 1), Some(names.clone()), &mut rng).unwrap();
        let got: Vec<&str> = game.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(got, names);
    }

    #[test]
    fn test_short_custom_name_list_falls_back_to_generated() {
        let mut rng = StdRng::seed_from_u64(7);
        let game = Game::new_with_rng(
            4,
            distribution(2, 1, 1),
            Some(vec!["OnlyOne".to_string()]),
            &mut rng,
        )
        .unwrap();
        assert_eq!(game.player_count(), 4);
        assert!(game.players.iter().all(|p| p.name != "OnlyOne"));
    }

    #[test]
    fn test_eliminate_appends_log_and_bumps_round() {
        let mut game = new_game(4, 1, 1);
        let target = game.players[0].id;

        let result = game.eliminate(target).unwrap();

        assert_eq!(game.round, 2);
        assert_eq!(game.log.len(), 1);
        assert_eq!(game.log[0].player_id, target);
        assert_eq!(game.log[0].round, 1);
        assert_eq!(result.eliminated.id, target);
        assert!(result.eliminated.is_eliminated);
        assert_eq!(result.tally.active_players, 5);
        assert_eq!(result.tally.total_players, 6);
    }

    #[test]
    fn test_eliminate_twice_fails_and_changes_nothing() {
        let mut game = new_game(4, 1, 1);
        let target = game.players[0].id;
        game.eliminate(target).unwrap();

        let round_before = game.round;
        let log_before = game.log.len();

        let err = game.eliminate(target).unwrap_err();
        assert!(matches!(err, GameError::AlreadyEliminated));
        assert_eq!(game.round, round_before);
        assert_eq!(game.log.len(), log_before);
    }

    #[test]
    fn test_eliminate_unknown_player_fails() {
        let mut game = new_game(4, 1, 1);
        let err = game.eliminate(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, GameError::PlayerNotFound));
    }

    #[test]
    fn test_eliminate_on_completed_game_fails() {
        let mut game = new_game(1, 1, 0);
        let undercover = find_by_role(&game, Role::Undercover);
        let result = game.eliminate(undercover).unwrap();
        assert!(result.winner.is_some());
        assert!(game.is_completed());

        let civilian = game.players.iter().find(|p| p.is_active()).unwrap().id;
        let err = game.eliminate(civilian).unwrap_err();
        assert!(matches!(err, GameError::GameCompleted));
    }

    #[test]
    fn test_guess_requires_eliminated_mr_white() {
        let mut game = new_game(4, 1, 1);

        // Active Mr. White may not guess.
        let mr_white = find_by_role(&game, Role::MrWhite);
        let err = game.guess(mr_white, "whatever").unwrap_err();
        assert!(matches!(err, GameError::GuessNotAllowed));

        // Eliminated civilian may not guess either.
        let civilian = find_by_role(&game, Role::Civilian);
        game.eliminate(civilian).unwrap();
        let err = game.guess(civilian, "whatever").unwrap_err();
        assert!(matches!(err, GameError::GuessNotAllowed));
    }

    #[test]
    fn test_correct_guess_is_trimmed_and_case_insensitive() {
        let mut game = new_game(4, 1, 1);
        let mr_white = find_by_role(&game, Role::MrWhite);
        game.eliminate(mr_white).unwrap();

        let scrambled = format!("  {}  ", game.civilian_word.to_uppercase());
        let result = game.guess(mr_white, &scrambled).unwrap();

        assert!(result.is_correct);
        assert_eq!(result.word.as_deref(), Some(&*game.civilian_word));
        assert_eq!(
            result.winner,
            Some(Winner {
                role: Role::MrWhite,
                reason: WinReason::Guess
            })
        );
        assert!(game.is_completed());
    }

    #[test]
    fn test_wrong_guess_changes_nothing() {
        let mut game = new_game(4, 1, 1);
        let mr_white = find_by_role(&game, Role::MrWhite);
        game.eliminate(mr_white).unwrap();

        let result = game.guess(mr_white, "definitely not the word").unwrap();

        assert!(!result.is_correct);
        assert_eq!(result.word, None);
        assert_eq!(result.winner, None);
        assert_eq!(game.status, GameStatus::Active);
        assert_eq!(game.winner, None);
    }

    #[test]
    fn test_correct_guess_supersedes_elimination_winner() {
        // 1 civilian, 1 undercover, 1 Mr. White: eliminating Mr. White
        // hands the undercover a parity win, but the last-action guess
        // takes it back.
        let mut game = new_game(1, 1, 1);
        let mr_white = find_by_role(&game, Role::MrWhite);

        let result = game.eliminate(mr_white).unwrap();
        assert_eq!(
            result.winner,
            Some(Winner {
                role: Role::Undercover,
                reason: WinReason::Elimination
            })
        );

        let guess = game.civilian_word.clone();
        let result = game.guess(mr_white, &guess).unwrap();
        assert!(result.is_correct);
        assert_eq!(
            game.winner,
            Some(Winner {
                role: Role::MrWhite,
                reason: WinReason::Guess
            })
        );
    }

    #[test]
    fn test_role_card_exposes_one_seat() {
        let game = new_game(2, 1, 1);
        let card = game.role_card(2).unwrap();
        assert_eq!(card.seat, 2);
        assert_eq!(card.player_id, game.players[2].id);
        assert_eq!(card.role, game.players[2].role);
        assert_eq!(card.word, game.players[2].word);

        assert!(game.role_card(4).is_none());
    }

    #[test]
    fn test_wire_format_role_and_status_names() {
        let game = new_game(2, 1, 1);
        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["status"], "active");

        let roles: Vec<&str> = json["players"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["role"].as_str().unwrap())
            .collect();
        for role in roles {
            assert!(matches!(role, "Civilian" | "Undercover" | "Mr. White"));
        }
    }
}
