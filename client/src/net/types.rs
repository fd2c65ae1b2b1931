//! Wire DTOs for the articles backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON (`_id`, `image_url`,
//! `date_formatted`) through serde renames so the rest of the client can use
//! Rust-side names. Optional fields default rather than fail decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An article as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Backend document identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub synopsis: String,
    /// Rich-text body as HTML.
    #[serde(default)]
    pub content: String,
    /// Banner image location, when one was uploaded.
    #[serde(default, rename = "image_url")]
    pub banner_image_url: Option<String>,
    #[serde(default)]
    pub published: bool,
    /// Last-edited timestamp, already formatted for display by the backend.
    #[serde(default, rename = "date_formatted")]
    pub last_edited: Option<String>,
}

/// `GET /api/articles/writers_articles` response body.
#[derive(Clone, Debug, Deserialize)]
pub struct WriterArticlesResponse {
    #[serde(rename = "filteredArticles", default)]
    pub articles: Vec<Article>,
}

/// `GET /api/articles/{id}` response body.
#[derive(Clone, Debug, Deserialize)]
pub struct ArticleResponse {
    pub article: Article,
}

/// `POST /api/articles/create_article` response body.
#[derive(Clone, Debug, Deserialize)]
pub struct CreateArticleResponse {
    pub new_article: Article,
}

/// Sign-in request payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Sign-in response. The backend answers 200 either way and signals failure
/// by omitting `token` and filling `error`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Sign-up request payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confPassword")]
    pub conf_password: String,
    pub passkey: String,
}

/// Sign-up response. `id` is present on success; otherwise `errors` carries
/// either a message string or a list of validator entries.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SignUpResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

impl SignUpResponse {
    /// Flatten `errors` into one user-facing line.
    pub fn error_message(&self) -> String {
        match &self.errors {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Array(items)) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| match item {
                        serde_json::Value::String(s) => Some(s.as_str()),
                        other => other.get("msg").and_then(serde_json::Value::as_str),
                    })
                    .collect();
                if messages.is_empty() {
                    UNKNOWN_SIGN_UP_ERROR.to_owned()
                } else {
                    messages.join("; ")
                }
            }
            Some(serde_json::Value::Object(obj)) => obj
                .get("msg")
                .and_then(serde_json::Value::as_str)
                .unwrap_or(UNKNOWN_SIGN_UP_ERROR)
                .to_owned(),
            _ => UNKNOWN_SIGN_UP_ERROR.to_owned(),
        }
    }
}

const UNKNOWN_SIGN_UP_ERROR: &str = "Sign up failed.";

/// Editable article fields submitted as multipart form data.
///
/// The banner file travels alongside as a separate part.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub synopsis: String,
    pub content: String,
}

impl ArticleDraft {
    /// Text parts in the order they are appended to the form.
    pub fn form_fields(&self) -> [(&'static str, &str); 3] {
        [("content", &self.content), ("title", &self.title), ("synopsis", &self.synopsis)]
    }
}
