//! Axum HTTP server: the worksheet form and the PDF download endpoint.
//!
//! Every request is independent: problems, layout and PDF bytes are built
//! inside the handler and dropped after the response is sent. The only shared
//! state is the read-only [`SheetStyle`], held in `Arc<AppState>`.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | HTML form (operation + page count) |
//! | GET | `/health` | Health check |
//! | POST | `/generate` | Form submit → `visual_math_sheet.pdf` download |

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tokio::task::JoinError;
use tower_http::trace::TraceLayer;

use crate::constants::DOWNLOAD_FILENAME;
use crate::error::{RequestError, WorksheetError};
use crate::style::SheetStyle;
use crate::types::{Operator, PageCount, WorksheetConfig};
use crate::worksheet::build_sheet;

const INDEX_HTML: &str = include_str!("templates/index.html");

pub const RENDER_FAILURE_MESSAGE: &str = "An error occurred while generating the PDF.";

/// Shared, immutable server state.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub style: SheetStyle,
}

pub type SharedState = Arc<AppState>;

pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/health", get(handle_health_check))
        .route("/generate", post(handle_generate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ── Request types ───────────────────────────────────────────────────

/// Raw form fields; validated by [`GenerateForm::into_config`].
#[derive(Debug, Default, Deserialize)]
pub struct GenerateForm {
    pub operation: Option<String>,
    pub page_count: Option<String>,
}

impl GenerateForm {
    /// `operation` is required; a missing `page_count` means one page.
    pub fn into_config(self) -> Result<WorksheetConfig, RequestError> {
        let operator: Operator = self
            .operation
            .ok_or(RequestError::MissingField("operation"))?
            .parse()?;
        let page_count = match self.page_count {
            Some(raw) => raw.parse()?,
            None => PageCount::default(),
        };
        Ok(WorksheetConfig::new(operator, page_count))
    }
}

// ── Responses ───────────────────────────────────────────────────────

fn text_response(status: StatusCode, msg: &str) -> Response {
    (status, msg.to_string()).into_response()
}

/// Browser alert followed by a jump back to the form.
fn alert_response(status: StatusCode, msg: &str) -> Response {
    let literal = serde_json::to_string(msg).unwrap_or_else(|_| "\"Error\"".to_string());
    let page = format!("<script>\n    alert({literal});\n    window.history.back();\n</script>\n");
    (status, Html(page)).into_response()
}

fn pdf_response(bytes: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={DOWNLOAD_FILENAME}"),
            ),
        ],
        bytes,
    )
        .into_response()
}

// ── Handlers ────────────────────────────────────────────────────────

async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_generate(
    State(state): State<SharedState>,
    Form(form): Form<GenerateForm>,
) -> Response {
    let config = match form.into_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "rejected worksheet request");
            return text_response(StatusCode::BAD_REQUEST, &e.to_string());
        }
    };

    let result = tokio::task::spawn_blocking(move || {
        let mut rng = rand::rng();
        build_sheet(&config, &state.style, &mut rng)
    })
    .await;

    generate_response(result, config.operator)
}

/// Map the outcome of the blocking render task onto an HTTP response.
fn generate_response(
    result: Result<Result<Vec<u8>, WorksheetError>, JoinError>,
    operator: Operator,
) -> Response {
    match result {
        Ok(Ok(bytes)) => pdf_response(bytes),
        Ok(Err(e @ WorksheetError::EmptyProblemSet)) => {
            tracing::warn!(operator = %operator, "no problems could be generated");
            alert_response(StatusCode::BAD_REQUEST, &e.to_string())
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "error generating PDF");
            text_response(StatusCode::INTERNAL_SERVER_ERROR, RENDER_FAILURE_MESSAGE)
        }
        Err(e) => {
            tracing::error!(error = %e, "worksheet task failed");
            text_response(StatusCode::INTERNAL_SERVER_ERROR, RENDER_FAILURE_MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(operation: Option<&str>, page_count: Option<&str>) -> GenerateForm {
        GenerateForm {
            operation: operation.map(str::to_string),
            page_count: page_count.map(str::to_string),
        }
    }

    #[test]
    fn test_form_valid() {
        let config = form(Some("-"), Some("2")).into_config().unwrap();
        assert_eq!(config.operator, Operator::Subtract);
        assert_eq!(config.page_count, PageCount::Two);
        assert_eq!(config.target_problem_count(), 36);
    }

    #[test]
    fn test_form_defaults_page_count() {
        let config = form(Some("+"), None).into_config().unwrap();
        assert_eq!(config.page_count, PageCount::One);
    }

    #[test]
    fn test_form_rejects_bad_fields() {
        assert_eq!(
            form(None, Some("1")).into_config().unwrap_err(),
            RequestError::MissingField("operation")
        );
        assert!(matches!(
            form(Some("x"), Some("1")).into_config(),
            Err(RequestError::InvalidOperation(_))
        ));
        assert!(matches!(
            form(Some("+"), Some("3")).into_config(),
            Err(RequestError::InvalidPageCount(_))
        ));
    }

    async fn body_text(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn content_type(resp: &Response) -> &str {
        resp.headers()[header::CONTENT_TYPE].to_str().unwrap()
    }

    #[tokio::test]
    async fn test_alert_escapes_message() {
        let resp = alert_response(StatusCode::BAD_REQUEST, "say \"hi\"");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_text(resp).await;
        assert!(body.contains(r#"alert("say \"hi\"");"#), "{body}");
        assert!(body.contains("window.history.back();"));
    }

    #[tokio::test]
    async fn test_empty_problem_set_is_an_alert() {
        let resp = generate_response(Ok(Err(WorksheetError::EmptyProblemSet)), Operator::Add);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(content_type(&resp).starts_with("text/html"));
        let body = body_text(resp).await;
        assert!(
            body.contains(r#"alert("Error: No unique problems could be generated.")"#),
            "{body}"
        );
        assert!(body.contains("window.history.back();"));
    }

    #[tokio::test]
    async fn test_render_failures_are_500() {
        let failures = [
            WorksheetError::BlockTooTall {
                height: 900.0,
                frame_height: 672.0,
            },
            WorksheetError::Pdf("broken xref".to_string()),
        ];
        for err in failures {
            let resp = generate_response(Ok(Err(err)), Operator::Subtract);
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert!(content_type(&resp).starts_with("text/plain"));
            assert_eq!(body_text(resp).await, RENDER_FAILURE_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_rendered_sheet_is_a_download() {
        let resp = generate_response(Ok(Ok(b"%PDF-1.3".to_vec())), Operator::Add);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(content_type(&resp), "application/pdf");
        assert_eq!(
            resp.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=visual_math_sheet.pdf"
        );
        assert_eq!(body_text(resp).await, "%PDF-1.3");
    }
}
