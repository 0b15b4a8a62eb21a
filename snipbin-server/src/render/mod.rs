//! Server-side HTML rendering
//!
//! maud templates for every page the application serves. Templates are
//! compile-time checked and all dynamic content is HTML-escaped by maud.

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use maud::{html, Markup, DOCTYPE};

use crate::db::Snippet;

/// Expiry choices offered on the create form, newest-first to match the
/// rendered radio order.
const EXPIRY_LABELS: [(i32, &str); 3] = [(365, "One Year"), (7, "One Week"), (1, "One Day")];

/// State of the create form: entered values plus per-field errors, used to
/// re-render the form after a failed submission.
#[derive(Debug, Clone)]
pub struct CreateFormView {
    pub title: String,
    pub content: String,
    pub expires: i32,
    pub title_error: Option<String>,
    pub content_error: Option<String>,
    pub expires_error: Option<String>,
}

impl Default for CreateFormView {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            expires: 365,
            title_error: None,
            content_error: None,
            expires_error: None,
        }
    }
}

/// Shared page chrome: head, nav, footer.
fn layout(page_title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (page_title) " - Snipbin" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header {
                    h1 { a href="/" { "Snipbin" } }
                }
                nav {
                    a href="/" { "Home" }
                    a href="/snippet/create" { "Create snippet" }
                }
                main { (body) }
                footer { "Snippets live until they expire" }
            }
        }
    }
}

/// Home page: the latest-snippets listing.
pub fn home(snippets: &[Snippet]) -> Markup {
    layout(
        "Home",
        html! {
            h2 { "Latest snippets" }
            @if snippets.is_empty() {
                p { "There's nothing to see here... yet!" }
            } @else {
                table {
                    tr {
                        th { "Title" }
                        th { "Created" }
                        th { "ID" }
                    }
                    @for s in snippets {
                        tr {
                            td { a href={ "/snippet/view/" (s.id) } { (s.title) } }
                            td { (human_date(s.created)) }
                            td { "#" (s.id) }
                        }
                    }
                }
            }
        },
    )
}

/// Single-snippet page.
pub fn view(snippet: &Snippet) -> Markup {
    layout(
        &snippet.title,
        html! {
            div.snippet {
                div.metadata {
                    strong { (snippet.title) }
                    span { "#" (snippet.id) }
                }
                pre { code { (snippet.content) } }
                div.metadata {
                    time { "Created: " (human_date(snippet.created)) }
                    time { "Expires: " (human_date(snippet.expires)) }
                }
            }
        },
    )
}

/// Create form, blank or re-rendered with errors and the entered values.
pub fn create_form(form: &CreateFormView) -> Markup {
    layout(
        "Create a new snippet",
        html! {
            form action="/snippet/create" method="post" {
                div {
                    label for="title" { "Title:" }
                    @if let Some(err) = &form.title_error {
                        label.error { (err) }
                    }
                    input type="text" id="title" name="title" value=(form.title);
                }
                div {
                    label for="content" { "Content:" }
                    @if let Some(err) = &form.content_error {
                        label.error { (err) }
                    }
                    textarea id="content" name="content" { (form.content) }
                }
                div {
                    label { "Delete in:" }
                    @if let Some(err) = &form.expires_error {
                        label.error { (err) }
                    }
                    @for (days, text) in EXPIRY_LABELS {
                        input type="radio" name="expires" value=(days) checked[form.expires == days];
                        " " (text) " "
                    }
                }
                div {
                    input type="submit" value="Publish snippet";
                }
            }
        },
    )
}

/// Error page used by the HTTP error boundary.
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let reason = status.canonical_reason().unwrap_or("Error");
    layout(
        reason,
        html! {
            h2 { (status.as_u16()) " - " (reason) }
            p { (message) }
        },
    )
}

/// Display format for timestamps, e.g. "02 Jan 2026 at 15:04".
fn human_date(t: DateTime<Utc>) -> String {
    t.format("%d %b %Y at %H:%M").to_string()
}
