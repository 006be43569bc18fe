use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

use crate::config::constants::{SERVICE_NAME, SERVICE_STATUS, USER_ID_HEADER};
use crate::errors::{ReviewError, ReviewResult};
use crate::server::app_state::AppState;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::error_response::ErrorResponse;
use crate::structs::health_response::HealthResponse;

const MAX_BODY_BYTES: u64 = 1024 * 1024;

pub struct ReviewServer {
    state: Arc<AppState>,
    config: ServerConfig,
    shutdown_tx: Option<oneshot::Sender<()>>,
    server_task: Option<JoinHandle<()>>,
}

impl ReviewServer {
    pub fn new(state: Arc<AppState>, config: ServerConfig) -> Self {
        Self {
            state,
            config,
            shutdown_tx: None,
            server_task: None,
        }
    }

    /// Binds and starts serving in the background. Returns the bound address,
    /// which differs from the configured one when port 0 is requested.
    pub async fn start(&mut self) -> ReviewResult<SocketAddr> {
        let addr = resolve_addr(&self.config.host, self.config.port).await?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let routes = routes(Arc::clone(&self.state), &self.config.allowed_origins);

        let (bound, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| ReviewError::system_error("bind", &format!("{}: {}", addr, e)))?;

        self.shutdown_tx = Some(shutdown_tx);
        self.server_task = Some(tokio::spawn(server));

        log::info!("🌐 Review server listening on http://{}", bound);
        Ok(bound)
    }

    /// Stops accepting connections and waits for in-flight requests to finish.
    pub async fn shutdown(&mut self) -> ReviewResult<()> {
        log::info!("🛑 Shutting down review server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                ReviewError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        if let Some(task) = self.server_task.take() {
            task.await
                .map_err(|e| ReviewError::system_error("shutdown", &e.to_string()))?;
        }

        log::info!("✅ Review server shutdown complete");
        Ok(())
    }
}

async fn resolve_addr(host: &str, port: u16) -> ReviewResult<SocketAddr> {
    let mut addrs = tokio::net::lookup_host((host, port))
        .await
        .map_err(|e| ReviewError::config_error("server.host", &format!("Cannot resolve '{}': {}", host, e)))?;

    addrs
        .next()
        .ok_or_else(|| ReviewError::config_error("server.host", &format!("'{}' resolved to no address", host)))
}

/// The full route table with CORS and error recovery applied.
pub fn routes(
    state: Arc<AppState>,
    allowed_origins: &[String],
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let state_filter = warp::any().map(move || Arc::clone(&state));

    let health = warp::path::end()
        .and(warp::get())
        .and_then(health_handler);

    let analyze = warp::path!("api" / "v1" / "analyze")
        .and(warp::post())
        .and(warp::header::optional::<String>(USER_ID_HEADER))
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and(state_filter.clone())
        .and_then(analyze_handler);

    let history = warp::path!("api" / "v1" / "history")
        .and(warp::get())
        .and(warp::header::optional::<String>(USER_ID_HEADER))
        .and(state_filter)
        .and_then(history_handler);

    let cors = warp::cors()
        .allow_origins(allowed_origins.iter().map(String::as_str))
        .allow_headers(vec!["content-type", USER_ID_HEADER])
        .allow_methods(vec!["GET", "POST"]);

    // Inner recovery keeps CORS headers on error bodies; the outer one turns
    // a disallowed origin into a 403.
    health
        .or(analyze)
        .or(history)
        .recover(handle_rejection)
        .with(cors)
        .recover(handle_rejection)
}

async fn health_handler() -> Result<impl Reply, Infallible> {
    Ok(warp::reply::json(&HealthResponse {
        status: SERVICE_STATUS.to_string(),
        service: SERVICE_NAME.to_string(),
    }))
}

async fn analyze_handler(
    user_header: Option<String>,
    body: Bytes,
    state: Arc<AppState>,
) -> Result<Response, Infallible> {
    let user_id = state.resolve_user_id(user_header);

    let request = match parse_analysis_request(&body) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("⚠️ Rejected analysis request from {}: {}", user_id, e);
            return Ok(error_reply(&e));
        }
    };

    match state.analyzer.analyze(&request, &user_id).await {
        Ok(response) => Ok(warp::reply::json(&response).into_response()),
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn history_handler(
    user_header: Option<String>,
    state: Arc<AppState>,
) -> Result<Response, Infallible> {
    let user_id = state.resolve_user_id(user_header);

    match state.analysis_adapter.get_history(&user_id).await {
        Ok(records) => {
            log::debug!("📚 Returning {} history records for {}", records.len(), user_id);
            Ok(warp::reply::json(&records).into_response())
        }
        Err(e) => Ok(error_reply(&e)),
    }
}

fn parse_analysis_request(body: &[u8]) -> ReviewResult<AnalysisRequest> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ReviewError::validation_error("body", &format!("Request body is not valid JSON: {}", e)))?;

    AnalysisRequest::from_json(&value)
}

fn error_reply(error: &ReviewError) -> Response {
    let status = StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = ErrorResponse {
        detail: error.user_message(),
        field: error.field().map(str::to_string),
    };

    warp::reply::with_status(warp::reply::json(&body), status).into_response()
}

fn detail_reply(detail: &str, status: StatusCode) -> Response {
    let body = ErrorResponse {
        detail: detail.to_string(),
        field: None,
    };

    warp::reply::with_status(warp::reply::json(&body), status).into_response()
}

async fn handle_rejection(rejection: Rejection) -> Result<Response, Infallible> {
    if rejection.is_not_found() {
        return Ok(detail_reply("Not Found", StatusCode::NOT_FOUND));
    }

    if let Some(e) = rejection.find::<warp::reject::PayloadTooLarge>() {
        return Ok(detail_reply(&e.to_string(), StatusCode::PAYLOAD_TOO_LARGE));
    }
    if let Some(e) = rejection.find::<warp::reject::LengthRequired>() {
        return Ok(detail_reply(&e.to_string(), StatusCode::LENGTH_REQUIRED));
    }
    if let Some(e) = rejection.find::<warp::reject::InvalidHeader>() {
        return Ok(detail_reply(&e.to_string(), StatusCode::BAD_REQUEST));
    }
    if let Some(e) = rejection.find::<warp::cors::CorsForbidden>() {
        return Ok(detail_reply(&e.to_string(), StatusCode::FORBIDDEN));
    }
    if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        return Ok(detail_reply("Method Not Allowed", StatusCode::METHOD_NOT_ALLOWED));
    }

    log::error!("❌ Unhandled rejection: {:?}", rejection);
    Ok(detail_reply("Internal Server Error", StatusCode::INTERNAL_SERVER_ERROR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_must_be_json() {
        let err = parse_analysis_request(b"code=x").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.field(), Some("body"));
    }

    #[test]
    fn accepts_minimal_body() {
        let request = parse_analysis_request(br#"{"code": "print(1)", "language": "python"}"#).unwrap();
        assert_eq!(request.code, "print(1)");
        assert_eq!(request.file_name, None);
    }

    #[tokio::test]
    async fn error_reply_carries_detail_and_field() {
        let response = error_reply(&ReviewError::validation_error("language", "expected a string"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = warp::hyper::body::to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], "expected a string");
        assert_eq!(body["field"], "language");
    }
}
