//! Route handlers for the JSON API.

use crate::AppState;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use engine::RunInputs;
use serde::Deserialize;
use serde_json::json;
use store::AppConfig;

/// Build the axum router for the API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/run", post(run))
        .route("/api/config", get(get_config).post(save_config))
        .route("/api/prompts", get(list_prompts))
        .route("/api/prompts/{name}", get(get_prompt).post(save_prompt))
        .with_state(state)
}

/// Request body for a comparison run.
#[derive(Debug, Default, Deserialize)]
pub struct RunBody {
    /// Variant A prompt.
    #[serde(default)]
    pub prompt_a: String,
    /// Variant B prompt.
    #[serde(default)]
    pub prompt_b: String,
    /// Shared input appended to both variants.
    #[serde(default)]
    pub shared_input: String,
}

/// Request body for saving a prompt.
#[derive(Debug, Deserialize)]
struct SavePromptBody {
    /// Prompt text.
    #[serde(default)]
    content: String,
}

/// Run the A/B comparison and return the aggregated result.
async fn run(State(state): State<AppState>, Json(body): Json<RunBody>) -> Response {
    let inputs = RunInputs {
        prompt_a: body.prompt_a.trim().to_owned(),
        prompt_b: body.prompt_b.trim().to_owned(),
        shared_input: body.shared_input.trim().to_owned(),
    };

    if inputs.prompt_a.is_empty() && inputs.prompt_b.is_empty() {
        return error(StatusCode::BAD_REQUEST, "At least one prompt is required");
    }

    let config = match AppConfig::load(&state.config_path) {
        Ok(config) => config,
        Err(e) => return error(StatusCode::BAD_REQUEST, &format!("config error: {e}")),
    };

    let result = engine::run(&state.registry, inputs, &config.providers).await;

    if let Err(e) = state.log.append(&result) {
        tracing::warn!("failed to append run log: {e}");
    }

    Json(result).into_response()
}

/// Current configuration, or an empty provider table when none exists.
async fn get_config(State(state): State<AppState>) -> Response {
    if !state.config_path.exists() {
        return Json(AppConfig::default()).into_response();
    }
    match AppConfig::load(&state.config_path) {
        Ok(config) => Json(config).into_response(),
        Err(e) => error(StatusCode::INTERNAL_SERVER_ERROR, &format!("config error: {e}")),
    }
}

/// Persist a new configuration.
async fn save_config(State(state): State<AppState>, Json(config): Json<AppConfig>) -> Response {
    match config.save(&state.config_path) {
        Ok(()) => Json(json!({ "success": true })).into_response(),
        Err(e) => error(StatusCode::INTERNAL_SERVER_ERROR, &format!("save error: {e}")),
    }
}

/// Saved prompt names.
async fn list_prompts(State(state): State<AppState>) -> Response {
    match state.prompts.list() {
        Ok(names) => Json(names).into_response(),
        Err(e) => error(StatusCode::INTERNAL_SERVER_ERROR, &format!("store error: {e}")),
    }
}

/// A saved prompt's content.
async fn get_prompt(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match state.prompts.load(&name) {
        Ok(Some(content)) => Json(json!({ "content": content })).into_response(),
        Ok(None) => error(StatusCode::NOT_FOUND, "Prompt not found"),
        Err(e) => error(StatusCode::BAD_REQUEST, &format!("store error: {e}")),
    }
}

/// Save a prompt under the given name.
async fn save_prompt(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<SavePromptBody>,
) -> Response {
    match state.prompts.save(&name, &body.content) {
        Ok(()) => Json(json!({ "success": true })).into_response(),
        Err(e) => error(StatusCode::BAD_REQUEST, &format!("store error: {e}")),
    }
}

/// A JSON error reply with the given status.
fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::{RunBody, run};
    use crate::AppState;
    use axum::extract::{Json, State};
    use engine::Registry;
    use std::sync::Arc;
    use store::{AppConfig, PromptStore, RunLog};

    fn state(dir: &std::path::Path) -> AppState {
        AppState {
            registry: Arc::new(Registry::new()),
            config_path: dir.join("config.toml"),
            prompts: Arc::new(PromptStore::new(dir.join("prompts"))),
            log: Arc::new(RunLog::new(dir.join("logs"))),
        }
    }

    #[tokio::test]
    async fn run_rejects_empty_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let response = run(State(state(dir.path())), Json(RunBody::default())).await;
        assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn run_rejects_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let body = RunBody {
            prompt_a: "Say hi".into(),
            ..RunBody::default()
        };
        let response = run(State(state(dir.path())), Json(body)).await;
        assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn run_completes_and_appends_the_log() {
        let dir = tempfile::tempdir().unwrap();
        let app_state = state(dir.path());

        // One disabled provider: the run completes without network calls.
        let mut config = AppConfig::default();
        config.providers.insert(
            "openai".into(),
            llm::ProviderConfig {
                enabled: false,
                ..llm::ProviderConfig::default()
            },
        );
        config.save(&app_state.config_path).unwrap();

        let body = RunBody {
            prompt_a: "Say hi".into(),
            prompt_b: "Say bye".into(),
            ..RunBody::default()
        };
        let response = run(State(app_state.clone()), Json(body)).await;
        assert_eq!(response.status(), axum::http::StatusCode::OK);

        let entries: Vec<_> = std::fs::read_dir(app_state.log.dir()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
