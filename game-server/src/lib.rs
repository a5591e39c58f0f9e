use std::sync::Arc;

use serde::Serialize;
use warp::Filter;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};

use game_core::GameEngine;
use game_types::{
    AddWordRequest, CreateGameResponse, ErrorResponse, GameError, GameResponse, GuessRequest,
    GuessResponse, HealthResponse, JoinGameRequest, JoinGameResponse, PlayerListResponse,
    PlayerResponse, SuccessResponse, WordListResponse, WordResponse,
};

pub mod config;

pub fn create_routes(
    engine: Arc<GameEngine>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let engine_filter = warp::any().map(move || engine.clone());

    // Health check endpoint
    let health = warp::path!("health").and(warp::get()).map(|| {
        warp::reply::json(&HealthResponse {
            status: "ok".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        })
    });

    // Word bank endpoints (admin client)
    let list_words = warp::path!("words")
        .and(warp::get())
        .and(engine_filter.clone())
        .and_then(handle_list_words);

    let add_word = warp::path!("words")
        .and(warp::post())
        .and(warp::body::json())
        .and(engine_filter.clone())
        .and_then(handle_add_word);

    let delete_word = warp::path!("words" / String)
        .and(warp::delete())
        .and(engine_filter.clone())
        .and_then(handle_delete_word);

    // Game lifecycle endpoints
    let create_game = warp::path!("games" / "create")
        .and(warp::post())
        .and(engine_filter.clone())
        .and_then(handle_create_game);

    let get_game = warp::path!("games" / String)
        .and(warp::get())
        .and(engine_filter.clone())
        .and_then(handle_get_game);

    let start_game = warp::path!("games" / String / "start")
        .and(warp::post())
        .and(engine_filter.clone())
        .and_then(handle_start_game);

    let reset_game = warp::path!("games" / String / "reset")
        .and(warp::post())
        .and(engine_filter.clone())
        .and_then(handle_reset_game);

    // Player endpoints
    let join_game = warp::path!("games" / String / "join")
        .and(warp::post())
        .and(warp::body::json())
        .and(engine_filter.clone())
        .and_then(handle_join_game);

    let list_players = warp::path!("games" / String / "players")
        .and(warp::get())
        .and(engine_filter.clone())
        .and_then(handle_list_players);

    let get_player = warp::path!("games" / String / "player" / String)
        .and(warp::get())
        .and(engine_filter.clone())
        .and_then(handle_get_player);

    let guess_letter = warp::path!("games" / String / "guess")
        .and(warp::post())
        .and(warp::body::json())
        .and(engine_filter.clone())
        .and_then(handle_guess_letter);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST", "DELETE"]);

    health
        .or(list_words)
        .or(add_word)
        .or(delete_word)
        .or(create_game)
        .or(get_game)
        .or(start_game)
        .or(reset_game)
        .or(join_game)
        .or(list_players)
        .or(get_player)
        .or(guess_letter)
        .with(cors)
        .with(warp::log("hangman_server"))
}

async fn handle_list_words(
    engine: Arc<GameEngine>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = engine
        .word_bank()
        .list_words()
        .await
        .map(|words| WordListResponse { words });
    Ok(respond(result))
}

async fn handle_add_word(
    request: AddWordRequest,
    engine: Arc<GameEngine>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = engine
        .word_bank()
        .add_word(
            &request.word,
            request.category.as_deref(),
            request.hint.as_deref(),
        )
        .await
        .map(|word| WordResponse { word });
    Ok(respond(result))
}

async fn handle_delete_word(
    id: String,
    engine: Arc<GameEngine>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = engine
        .word_bank()
        .delete_word(&id)
        .await
        .map(|_| SuccessResponse { success: true });
    Ok(respond(result))
}

async fn handle_create_game(
    engine: Arc<GameEngine>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = engine.create_game().await.map(|game| CreateGameResponse {
        code: game.code.clone(),
        game,
    });
    Ok(respond(result))
}

async fn handle_get_game(
    code: String,
    engine: Arc<GameEngine>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = engine.get_game(&code).await.map(|game| GameResponse { game });
    Ok(respond(result))
}

async fn handle_start_game(
    code: String,
    engine: Arc<GameEngine>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = engine
        .start_game(&code)
        .await
        .map(|game| GameResponse { game });
    Ok(respond(result))
}

async fn handle_reset_game(
    code: String,
    engine: Arc<GameEngine>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = engine
        .reset_game(&code)
        .await
        .map(|_| SuccessResponse { success: true });
    Ok(respond(result))
}

async fn handle_join_game(
    code: String,
    request: JoinGameRequest,
    engine: Arc<GameEngine>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = engine
        .join_game(&code, &request.name)
        .await
        .map(|player| JoinGameResponse {
            player_id: player.id.clone(),
            player,
        });
    Ok(respond(result))
}

async fn handle_list_players(
    code: String,
    engine: Arc<GameEngine>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = engine
        .list_players(&code)
        .await
        .map(|players| PlayerListResponse { players });
    Ok(respond(result))
}

async fn handle_get_player(
    code: String,
    player_id: String,
    engine: Arc<GameEngine>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = engine
        .get_player(&code, &player_id)
        .await
        .map(|player| PlayerResponse { player });
    Ok(respond(result))
}

async fn handle_guess_letter(
    code: String,
    request: GuessRequest,
    engine: Arc<GameEngine>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = engine
        .guess_letter(&code, &request.player_id, &request.letter)
        .await
        .map(|outcome| GuessResponse {
            game: outcome.game,
            player: outcome.player,
            is_correct: outcome.is_correct,
            won: outcome.won,
            eliminated: outcome.eliminated,
        });
    Ok(respond(result))
}

fn respond<T: Serialize>(result: Result<T, GameError>) -> WithStatus<Json> {
    match result {
        Ok(body) => warp::reply::with_status(warp::reply::json(&body), StatusCode::OK),
        Err(err) => error_reply(err),
    }
}

fn error_reply(err: GameError) -> WithStatus<Json> {
    let status = match &err {
        GameError::NotFound(_) => StatusCode::NOT_FOUND,
        GameError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        GameError::Validation(_)
        | GameError::InvalidState(_)
        | GameError::DuplicateGuess(_)
        | GameError::NoWordsAvailable => StatusCode::BAD_REQUEST,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("Request failed: {}", err);
    }

    warp::reply::with_status(
        warp::reply::json(&ErrorResponse {
            error: err.to_string(),
        }),
        status,
    )
}
