//! Single binary web server: REST API over the tournament engine, static files from /static.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, STATIC_DIR, INACTIVITY_HOURS.

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use kickoff::{
    champion, create_tournament, first_round_name, record_match_result, standings_csv, GameMatch,
    InMemoryStore, MatchId, MatchResult, NewTournament, ServerConfig, Stage, Team, TeamId,
    Tournament, TournamentError, TournamentFormat, TournamentId, TournamentStore, Visibility,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

type AppState = Data<InMemoryStore>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct ListQuery {
    search: Option<String>,
}

#[derive(Deserialize)]
struct VisibilityBody {
    visibility: Visibility,
}

#[derive(Deserialize)]
struct ScoreBody {
    home_score: u32,
    away_score: u32,
    #[serde(default)]
    home_penalty: Option<u32>,
    #[serde(default)]
    away_penalty: Option<u32>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and match id (e.g. /api/tournaments/{id}/matches/{match_id}/result)
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: MatchId,
}

/// Path segments: tournament id and team id (e.g. /api/tournaments/{id}/teams/{team_id}/matches)
#[derive(Deserialize)]
struct TournamentTeamPath {
    id: TournamentId,
    team_id: TeamId,
}

#[derive(Serialize)]
struct GroupTable<'a> {
    group: &'a str,
    teams: Vec<&'a Team>,
}

#[derive(Serialize)]
struct BracketRound<'a> {
    stage: Stage,
    title: &'static str,
    matches: Vec<&'a GameMatch>,
}

#[derive(Serialize)]
struct BracketResponse<'a> {
    first_round: String,
    rounds: Vec<BracketRound<'a>>,
    champion: Option<&'a str>,
    champion_name: Option<&'a str>,
}

fn error_response(e: TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::TournamentNotFound(_) | TournamentError::MatchNotFound(_) => {
            HttpResponse::NotFound().json(body)
        }
        TournamentError::StoreUnavailable | TournamentError::Serialization(_) => {
            HttpResponse::InternalServerError().json(body)
        }
        _ => HttpResponse::BadRequest().json(body),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "kickoff",
    })
}

/// Create a tournament: groups drawn, fixtures scheduled.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<NewTournament>) -> HttpResponse {
    let tournament = match create_tournament(&body) {
        Ok(t) => t,
        Err(e) => return error_response(e),
    };
    let response = HttpResponse::Ok().json(&tournament);
    match state.insert(tournament) {
        Ok(_) => response,
        Err(e) => error_response(e),
    }
}

/// Public tournaments, newest first (?search= filters by name).
#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState, query: Query<ListQuery>) -> HttpResponse {
    match state.list_public(query.search.as_deref()) {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => error_response(e),
    }
}

/// Get a tournament by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match state.get(path.id) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(e),
    }
}

#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match state.delete(path.id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}

#[put("/api/tournaments/{id}/visibility")]
async fn api_set_visibility(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<VisibilityBody>,
) -> HttpResponse {
    match state.set_visibility(path.id, body.visibility) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(e),
    }
}

/// Record a score; standings and knockout rounds are re-derived before saving.
#[put("/api/tournaments/{id}/matches/{match_id}/result")]
async fn api_record_result(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    let result = MatchResult {
        match_id: path.match_id.clone(),
        home_score: body.home_score,
        away_score: body.away_score,
        home_penalty: body.home_penalty,
        away_penalty: body.away_penalty,
    };
    match state.update(path.id, &mut |t: &mut Tournament| record_match_result(t, &result)) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(e),
    }
}

/// Knockout rounds by stage, the first round's name and the champion once decided.
#[get("/api/tournaments/{id}/bracket")]
async fn api_bracket(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let t = match state.get(path.id) {
        Ok(t) => t,
        Err(e) => return error_response(e),
    };
    if t.format == TournamentFormat::League {
        return error_response(TournamentError::InvalidState);
    }
    let first_round = first_round_name(&t.bracket_config(), t.teams.len());
    let winner = champion(&t.matches);
    let rounds = [Stage::QuarterFinal, Stage::SemiFinal, Stage::Final]
        .into_iter()
        .map(|stage| BracketRound {
            stage,
            title: stage.title(),
            matches: t.matches_in_stage(stage),
        })
        .filter(|r| !r.matches.is_empty())
        .collect();
    HttpResponse::Ok().json(BracketResponse {
        first_round,
        rounds,
        champion: winner,
        champion_name: winner.and_then(|id| t.team(id)).map(|team| team.name.as_str()),
    })
}

#[get("/api/tournaments/{id}/matches/{match_id}")]
async fn api_get_match(state: AppState, path: Path<TournamentMatchPath>) -> HttpResponse {
    let t = match state.get(path.id) {
        Ok(t) => t,
        Err(e) => return error_response(e),
    };
    match t.get_match(&path.match_id) {
        Some(m) => HttpResponse::Ok().json(m),
        None => error_response(TournamentError::MatchNotFound(path.match_id.clone())),
    }
}

/// Group tables in label order (empty for a league).
#[get("/api/tournaments/{id}/groups")]
async fn api_group_tables(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let t = match state.get(path.id) {
        Ok(t) => t,
        Err(e) => return error_response(e),
    };
    let tables: Vec<GroupTable> = t
        .groups
        .iter()
        .map(|group| GroupTable {
            group,
            teams: t.group_table(group),
        })
        .collect();
    HttpResponse::Ok().json(tables)
}

/// One team's schedule: every match it plays, in creation order.
#[get("/api/tournaments/{id}/teams/{team_id}/matches")]
async fn api_team_matches(state: AppState, path: Path<TournamentTeamPath>) -> HttpResponse {
    let t = match state.get(path.id) {
        Ok(t) => t,
        Err(e) => return error_response(e),
    };
    if t.team(&path.team_id).is_none() {
        return error_response(TournamentError::TeamNotFound(path.team_id.clone()));
    }
    let schedule: Vec<&GameMatch> = t
        .matches
        .iter()
        .filter(|m| m.involves(&path.team_id))
        .collect();
    HttpResponse::Ok().json(schedule)
}

#[get("/api/tournaments/{id}/standings.csv")]
async fn api_standings_csv(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let csv = state.get(path.id).and_then(|t| standings_csv(&t.teams));
    match csv {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(body),
        Err(e) => error_response(e),
    }
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = Data::new(InMemoryStore::new());

    // Background task: every 30 minutes, remove tournaments past the inactivity timeout
    let state_cleanup = state.clone();
    let timeout = config.inactivity_timeout;
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            match state_cleanup.remove_inactive(timeout) {
                Ok(0) => {}
                Ok(removed) => log::info!("Cleaned up {} inactive tournament(s)", removed),
                Err(e) => log::warn!("Cleanup skipped: {}", e),
            }
        }
    });

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_create_tournament)
            .service(api_list_tournaments)
            .service(api_get_tournament)
            .service(api_delete_tournament)
            .service(api_set_visibility)
            .service(api_record_result)
            .service(api_bracket)
            .service(api_get_match)
            .service(api_group_tables)
            .service(api_team_matches)
            .service(api_standings_csv)
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
