//! Snippet pages: home listing, single view, and the create form

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use maud::Markup;
use serde::Deserialize;

use crate::db::SnippetRepo;
use crate::http::error::ApiError;
use crate::http::extractors::SnippetId;
use crate::http::server::AppState;
use crate::models::{ExpiryDays, SnippetContent, SnippetTitle};
use crate::render::{self, CreateFormView};

/// Create snippet form body
#[derive(Debug, Deserialize)]
pub struct CreateSnippetForm {
    pub title: String,
    pub content: String,
    pub expires: i32,
}

/// GET / - home page with the latest snippets
async fn home(State(state): State<Arc<AppState>>) -> Result<Markup, ApiError> {
    let snippets = SnippetRepo::new(&state.pool).latest().await?;
    Ok(render::home(&snippets))
}

/// GET /snippet/view/{id} - one snippet, 404 once it has expired
async fn view_snippet(
    State(state): State<Arc<AppState>>,
    SnippetId(id): SnippetId,
) -> Result<Markup, ApiError> {
    let snippet = SnippetRepo::new(&state.pool).get(id).await?;
    Ok(render::view(&snippet))
}

/// GET /snippet/create - blank form
async fn create_form() -> Markup {
    render::create_form(&CreateFormView::default())
}

/// POST /snippet/create - validate, insert, redirect to the new snippet
async fn create_snippet(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateSnippetForm>,
) -> Result<Response, ApiError> {
    match validate(&form) {
        Ok((title, content, expires)) => {
            let id = SnippetRepo::new(&state.pool)
                .insert(title.as_str(), content.as_str(), expires.as_i32())
                .await?;
            Ok(Redirect::to(&format!("/snippet/view/{id}")).into_response())
        }
        Err(view) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            render::create_form(&view),
        )
            .into_response()),
    }
}

/// Check every field, collecting all errors so a failed submission
/// re-renders the form with each one shown next to its field.
fn validate(
    form: &CreateSnippetForm,
) -> Result<(SnippetTitle, SnippetContent, ExpiryDays), CreateFormView> {
    let title = SnippetTitle::new(&form.title);
    let content = SnippetContent::new(&form.content);
    let expires = ExpiryDays::new(form.expires);

    match (title, content, expires) {
        (Ok(title), Ok(content), Ok(expires)) => Ok((title, content, expires)),
        (title, content, expires) => Err(CreateFormView {
            title: form.title.clone(),
            content: form.content.clone(),
            expires: form.expires,
            title_error: title.err().map(|e| e.to_string()),
            content_error: content.err().map(|e| e.to_string()),
            expires_error: expires.err().map(|e| e.to_string()),
        }),
    }
}

/// Snippet routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/snippet/view/{id}", get(view_snippet))
        .route("/snippet/create", get(create_form).post(create_snippet))
}
