//! Single-route HTTP front end.
//!
//! `GET /` and `POST /` take the action in the `field` parameter, perform
//! it on the shared game and answer with the rendered page. `GET /state`
//! returns the current view as JSON.

mod config;
pub mod render;

use actix_web::{http::StatusCode, web, App, HttpResponse, HttpServer};
use log::{debug, error, info};
use parking_lot::Mutex;
use serde::Deserialize;

use crate::game::{Action, Game, GameError, GameView, HistoryStore, JsonFileStore, Outcome};

pub use config::{ServerConfig, DEFAULT_BIND_ADDR};

/// State shared by all workers: one game, one history store.
pub struct AppState {
    game: Mutex<Game>,
    store: Box<dyn HistoryStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Box<dyn HistoryStore>) -> Self {
        AppState {
            game: Mutex::new(Game::new()),
            store,
        }
    }

    /// Snapshot of the current game
    #[must_use]
    pub fn game(&self) -> Game {
        self.game.lock().clone()
    }

    /// Perform `action` under the game lock, returning the result and the
    /// view to render.
    fn perform(&self, action: Action) -> (Result<Outcome, GameError>, GameView) {
        let mut game = self.game.lock();
        let result = game.perform(action, &*self.store);
        (result, game.view())
    }
}

/// Perform `action` and render the resulting page. Actions that touch the
/// history store run on the blocking pool.
async fn respond(state: web::Data<AppState>, action: Action) -> HttpResponse {
    let performed = if action.uses_store() {
        web::block(move || state.perform(action)).await
    } else {
        Ok(state.perform(action))
    };
    let (result, view) = match performed {
        Ok(performed) => performed,
        Err(e) => {
            error!("{e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let (status, message) = match result {
        Ok(outcome) => {
            debug!("{outcome:?}");
            (StatusCode::OK, None)
        }
        Err(e) => {
            error!("{e}");
            (StatusCode::INTERNAL_SERVER_ERROR, Some(e.to_string()))
        }
    };

    match render::page(&view, message.as_deref()) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            error!("rendering page: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ActionForm {
    #[serde(default)]
    pub field: Option<String>,
}

impl ActionForm {
    fn action(&self) -> Action {
        self.field.as_deref().map_or(Action::None, Action::parse)
    }
}

async fn index(state: web::Data<AppState>, query: web::Query<ActionForm>) -> HttpResponse {
    respond(state, query.action()).await
}

async fn submit(state: web::Data<AppState>, form: web::Form<ActionForm>) -> HttpResponse {
    respond(state, form.action()).await
}

async fn snapshot(state: web::Data<AppState>) -> HttpResponse {
    let view = state.game.lock().view();
    HttpResponse::Ok().json(view)
}

/// Register the routes; the caller provides `web::Data<AppState>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(index))
            .route(web::post().to(submit)),
    )
    .route("/state", web::get().to(snapshot));
}

/// Run the server until it is stopped.
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let store = JsonFileStore::new(&config.history_path);
    let state = web::Data::new(AppState::new(Box::new(store)));

    info!(
        "serving on http://{} (history file {})",
        config.bind_addr,
        config.history_path.display()
    );

    HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind(config.bind_addr.as_str())?
        .run()
        .await
}
