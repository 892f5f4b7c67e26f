// logs.rs
mod sselayer;

pub use sselayer::SseLayer;

use std::{
    collections::VecDeque,
    sync::{Arc, RwLock},
    time::SystemTime,
};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{
        IntoResponse,
        sse::{Event, KeepAlive, Sse},
    },
    routing::get,
};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};
use utoipa::OpenApi;

/// Représente une entrée de log
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub timestamp: SystemTime,
    pub level: String,
    pub target: String,
    pub message: String,
}

/// Buffer circulaire partagé
#[derive(Clone)]
pub struct LogState {
    buffer: Arc<RwLock<VecDeque<LogEntry>>>,
    tx: broadcast::Sender<LogEntry>,
}

impl LogState {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            tx: broadcast::channel(1000).0,
        }
    }

    fn push(&self, entry: LogEntry) {
        let mut buf = self.buffer.write().unwrap();
        if buf.len() == buf.capacity() {
            buf.pop_front();
        }
        buf.push_back(entry.clone());
        let _ = self.tx.send(entry);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LogEntry> {
        self.tx.subscribe()
    }

    pub fn dump(&self) -> Vec<LogEntry> {
        self.buffer.read().unwrap().iter().cloned().collect()
    }
}

type ReloadHandle = reload::Handle<EnvFilter, Registry>;

/// Poignée vers le filtre de log du subscriber global, posée par [`init_logging`].
///
/// `tracing` n'autorise qu'un seul subscriber global par process : un deuxième
/// appel à `init_logging` recrée un `LogState` mais ne réinstalle pas le
/// subscriber.
static FILTER_HANDLE: OnceCell<ReloadHandle> = OnceCell::new();

/// Options de configuration du système de logging
#[derive(Debug, Clone)]
pub struct LoggingOptions {
    /// Taille du buffer circulaire partagé par `/log-dump` et `/log-sse`
    pub buffer_capacity: usize,
    /// Directive de filtrage initiale (ex: "info", "avsserver=debug,warn")
    pub min_level: String,
    /// Ajoute un layer `fmt` (stdout) en plus du buffer SSE
    pub enable_console: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            buffer_capacity: 1000,
            min_level: "info".to_string(),
            enable_console: true,
        }
    }
}

/// Installe le subscriber `tracing` global et retourne le `LogState` partagé
///
/// Doit être appelée une seule fois par process, avant toute émission de log
/// que l'on souhaite voir apparaître dans `/log-sse` ou `/log-dump`.
pub fn init_logging(options: LoggingOptions) -> LogState {
    let state = LogState::new(options.buffer_capacity);

    let env_filter = EnvFilter::try_new(&options.min_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    let _ = FILTER_HANDLE.set(handle);

    let registry = tracing_subscriber::registry()
        .with(filter_layer)
        .with(SseLayer::new(state.clone()));

    if options.enable_console {
        let _ = registry.with(fmt::layer()).try_init();
    } else {
        let _ = registry.try_init();
    }

    state
}

fn current_level() -> String {
    FILTER_HANDLE
        .get()
        .and_then(|handle| handle.with_current(|filter| filter.to_string()).ok())
        .unwrap_or_default()
}

fn set_level(min_level: &str) -> Result<(), String> {
    let handle = FILTER_HANDLE.get().ok_or_else(|| "logging is not initialized".to_string())?;
    let filter = EnvFilter::try_new(min_level).map_err(|e| e.to_string())?;
    handle.reload(filter).map_err(|e| e.to_string())
}

/// Query params pour /log-sse
#[derive(Debug, Deserialize)]
pub struct LogQuery {
    #[serde(default)]
    pub error: Option<bool>,
    #[serde(default)]
    pub warn: Option<bool>,
    #[serde(default)]
    pub info: Option<bool>,
    #[serde(default)]
    pub debug: Option<bool>,
    #[serde(default)]
    pub trace: Option<bool>,
    #[serde(default)]
    pub search: Option<String>,
}

/// Handler SSE
// Dans logs.rs
pub async fn log_sse(
    State(state): State<LogState>,
    Query(params): Query<LogQuery>,
) -> impl IntoResponse {
    let mut rx = state.subscribe();

    // Récupérer l'historique du buffer
    let history = state.dump();

    let stream = async_stream::stream! {
        // 1. Envoyer d'abord tous les logs historiques
        for entry in history {
            if !filter_entry(&entry, &params) {
                continue;
            }
            let json = serde_json::to_string(&entry).unwrap();
            yield Ok::<_, axum::Error>(Event::default().data(json));
        }

        // 2. Puis streamer les nouveaux logs en temps réel
        while let Ok(entry) = rx.recv().await {
            if !filter_entry(&entry, &params) {
                continue;
            }
            let json = serde_json::to_string(&entry).unwrap();
            yield Ok::<_, axum::Error>(Event::default().data(json));
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Handler REST (dump JSON du buffer)
pub async fn log_dump(State(state): State<LogState>) -> impl IntoResponse {
    Json(state.dump())
}

/// Niveau de log courant, renvoyé par `GET /log-setup`
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LogSetupResponse {
    /// Directive de filtrage active (ex: "info")
    pub min_level: String,
}

/// Corps de requête pour `POST /log-setup`
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LogSetupRequest {
    /// Nouvelle directive de filtrage à appliquer
    pub min_level: String,
}

/// GET /log-setup - niveau de log actif
#[utoipa::path(
    get,
    path = "/log-setup",
    tag = "logs",
    responses((status = 200, description = "Niveau de log actif", body = LogSetupResponse))
)]
pub async fn log_setup_get(State(_state): State<LogState>) -> Json<LogSetupResponse> {
    Json(LogSetupResponse { min_level: current_level() })
}

/// POST /log-setup - change le niveau de log au runtime, sans redémarrer le process
#[utoipa::path(
    post,
    path = "/log-setup",
    tag = "logs",
    request_body = LogSetupRequest,
    responses(
        (status = 200, description = "Niveau de log mis à jour", body = LogSetupResponse),
        (status = 400, description = "Directive de filtrage invalide")
    )
)]
pub async fn log_setup_post(
    State(_state): State<LogState>,
    Json(request): Json<LogSetupRequest>,
) -> Result<Json<LogSetupResponse>, (StatusCode, String)> {
    set_level(&request.min_level).map_err(|e| (StatusCode::BAD_REQUEST, e))?;
    Ok(Json(LogSetupResponse { min_level: request.min_level }))
}

/// Documentation OpenAPI des endpoints de diagnostics de logging
#[derive(OpenApi)]
#[openapi(
    info(
        title = "AVSD Logging API",
        version = "0.1.0",
        description = "Consultation et reconfiguration du niveau de log au runtime"
    ),
    paths(log_setup_get, log_setup_post),
    components(schemas(LogSetupRequest, LogSetupResponse)),
    tags((name = "logs", description = "Endpoints de diagnostics et de logging"))
)]
pub struct LogsApiDoc;

/// Construit le router Axum exposant `/log-sse`, `/log-dump` et `/log-setup`
/// pour un `LogState` donné.
pub fn create_logs_router(state: LogState) -> Router {
    Router::new()
        .route("/log-sse", get(log_sse))
        .route("/log-dump", get(log_dump))
        .route("/log-setup", get(log_setup_get).post(log_setup_post))
        .with_state(state)
}

/// Fonction de filtrage
fn filter_entry(entry: &LogEntry, q: &LogQuery) -> bool {
    // Filtrage par niveau
    let lvl = entry.level.to_lowercase();
    let mut allowed = false;

    if let Some(true) = q.error {
        allowed |= lvl == "error";
    }
    if let Some(true) = q.warn {
        allowed |= lvl == "warn";
    }
    if let Some(true) = q.info {
        allowed |= lvl == "info";
    }
    if let Some(true) = q.debug {
        allowed |= lvl == "debug";
    }
    if let Some(true) = q.trace {
        allowed |= lvl == "trace";
    }

    // si aucun flag → tout est autorisé
    if !(q.error.unwrap_or(false)
        || q.warn.unwrap_or(false)
        || q.info.unwrap_or(false)
        || q.debug.unwrap_or(false)
        || q.trace.unwrap_or(false))
    {
        allowed = true;
    }

    // Filtrage par mot-clé
    if let Some(search) = &q.search {
        allowed &= entry.message.contains(search) || entry.target.contains(search);
    }

    allowed
}
