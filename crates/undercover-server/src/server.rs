//! WebSocket server and connection handling.
//!
//! Every client message is a request answered with exactly one response
//! message. Games live in a [`DashMap`] keyed by game ID; the per-entry
//! lock of `get_mut` serializes mutating operations on a single game, so
//! two simultaneous eliminations can never race the same round counter.

use crate::protocol::{ClientMessage, ServerMessage};
use dashmap::DashMap;
use futures_util::{SinkExt, StreamExt};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{accept_async, tungstenite::Message};
use tracing::{error, info, warn};
use undercover_core::{words, Game, RevealCursor, RoleDistribution};
use uuid::Uuid;

/// A stored game plus its presentation-side reveal cursor.
pub struct GameSession {
    pub game: Game,
    pub reveal: RevealCursor,
}

impl GameSession {
    pub fn new(game: Game) -> Self {
        let seats = game.player_count();
        Self {
            game,
            reveal: RevealCursor::new(seats),
        }
    }
}

/// Server state shared across all connections.
pub struct ServerState {
    /// All games, keyed by game ID
    pub games: DashMap<Uuid, GameSession>,
}

impl ServerState {
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
        }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the WebSocket server.
pub async fn run_server(addr: SocketAddr, state: Arc<ServerState>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Undercover server listening on {}", addr);

    while let Ok((stream, peer_addr)) = listener.accept().await {
        let state = Arc::clone(&state);
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, peer_addr, state).await {
                error!("Connection error from {}: {}", peer_addr, e);
            }
        });
    }

    Ok(())
}

/// Handle a single WebSocket connection.
async fn handle_connection(
    stream: TcpStream,
    addr: SocketAddr,
    state: Arc<ServerState>,
) -> anyhow::Result<()> {
    let ws_stream = accept_async(stream).await?;
    info!("New WebSocket connection from {}", addr);

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();

    while let Some(msg) = ws_receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                let response = match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(client_msg) => handle_message(client_msg, &state),
                    Err(e) => {
                        warn!("Invalid message from {}: {}", addr, e);
                        ServerMessage::Error {
                            message: format!("Invalid message: {}", e),
                        }
                    }
                };

                let msg_text = serde_json::to_string(&response)?;
                ws_sender.send(Message::Text(msg_text.into())).await?;
            }
            Ok(Message::Close(_)) => {
                info!("Client {} closing connection", addr);
                break;
            }
            Ok(Message::Ping(data)) => {
                ws_sender.send(Message::Pong(data)).await?;
            }
            Err(e) => {
                error!("WebSocket error from {}: {}", addr, e);
                break;
            }
            _ => {}
        }
    }

    info!("Connection closed for {}", addr);
    Ok(())
}

/// Handle a client message, producing exactly one response.
pub fn handle_message(msg: ClientMessage, state: &ServerState) -> ServerMessage {
    match msg {
        ClientMessage::CreateGame {
            player_count,
            distribution,
            names,
        } => {
            let distribution =
                distribution.unwrap_or_else(|| RoleDistribution::default_for(player_count));

            match Game::new(player_count, distribution, names) {
                Ok(game) => {
                    let game_id = game.id;
                    info!("Created game {} with {} players", game_id, player_count);
                    state.games.insert(game_id, GameSession::new(game));
                    ServerMessage::GameCreated { game_id }
                }
                Err(e) => ServerMessage::Error {
                    message: e.to_string(),
                },
            }
        }

        ClientMessage::GetGame { game_id } => match state.games.get(&game_id) {
            Some(session) => ServerMessage::GameSnapshot {
                game: session.game.clone(),
            },
            None => game_not_found(),
        },

        ClientMessage::GetPlayer { game_id, player_id } => match state.games.get(&game_id) {
            Some(session) => match session.game.player(player_id) {
                Some(player) => ServerMessage::PlayerSnapshot {
                    player: player.clone(),
                },
                None => ServerMessage::Error {
                    message: "Player not found".to_string(),
                },
            },
            None => game_not_found(),
        },

        ClientMessage::RevealNext { game_id } => match state.games.get_mut(&game_id) {
            Some(mut session) => match session.reveal.advance() {
                Some(seat) => {
                    let card = session
                        .game
                        .role_card(seat)
                        .expect("reveal cursor seat within roster");
                    ServerMessage::RoleRevealed {
                        card,
                        remaining: session.reveal.remaining(),
                    }
                }
                None => ServerMessage::RevealFinished,
            },
            None => game_not_found(),
        },

        ClientMessage::Eliminate { game_id, player_id } => {
            match state.games.get_mut(&game_id) {
                Some(mut session) => match session.game.eliminate(player_id) {
                    Ok(result) => {
                        info!(
                            "Game {}: eliminated {} ({})",
                            game_id, result.eliminated.name, result.eliminated.role
                        );
                        if let Some(winner) = &result.winner {
                            info!("Game {}: {} win by {:?}", game_id, winner.role, winner.reason);
                        }
                        ServerMessage::Eliminated { result }
                    }
                    Err(e) => ServerMessage::Error {
                        message: e.to_string(),
                    },
                },
                None => game_not_found(),
            }
        }

        ClientMessage::Guess {
            game_id,
            player_id,
            guess,
        } => match state.games.get_mut(&game_id) {
            Some(mut session) => match session.game.guess(player_id, &guess) {
                Ok(result) => {
                    info!(
                        "Game {}: Mr. White guess was {}",
                        game_id,
                        if result.is_correct { "correct" } else { "wrong" }
                    );
                    ServerMessage::GuessResolved { result }
                }
                Err(e) => ServerMessage::Error {
                    message: e.to_string(),
                },
            },
            None => game_not_found(),
        },

        ClientMessage::GetWordPair => ServerMessage::WordPair {
            pair: words::random_pair(&mut rand::thread_rng()),
        },

        ClientMessage::Ping => ServerMessage::Pong,
    }
}

fn game_not_found() -> ServerMessage {
    ServerMessage::Error {
        message: "Game not found".to_string(),
    }
}
