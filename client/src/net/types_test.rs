use super::*;

#[test]
fn article_decodes_backend_field_names() {
    let raw = serde_json::json!({
        "_id": "66a1",
        "title": "Thames tides",
        "synopsis": "Why the river rises",
        "content": "<p>Body</p>",
        "image_url": "https://cdn.example/banner.jpg",
        "published": true,
        "date_formatted": "12 Mar 2024",
        "author": "ignored"
    });
    let article: Article = serde_json::from_value(raw).unwrap();
    assert_eq!(article.id, "66a1");
    assert_eq!(article.title, "Thames tides");
    assert_eq!(article.content, "<p>Body</p>");
    assert_eq!(article.banner_image_url.as_deref(), Some("https://cdn.example/banner.jpg"));
    assert!(article.published);
    assert_eq!(article.last_edited.as_deref(), Some("12 Mar 2024"));
}

#[test]
fn article_defaults_missing_optional_fields() {
    let raw = serde_json::json!({ "_id": "a", "title": "t", "synopsis": "s" });
    let article: Article = serde_json::from_value(raw).unwrap();
    assert!(article.content.is_empty());
    assert!(article.banner_image_url.is_none());
    assert!(!article.published);
    assert!(article.last_edited.is_none());
}

#[test]
fn writer_articles_response_reads_filtered_articles() {
    let raw = r#"{"filteredArticles":[{"_id":"1","title":"a","synopsis":"b","published":false}]}"#;
    let body: WriterArticlesResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(body.articles.len(), 1);
    assert_eq!(body.articles[0].id, "1");
}

#[test]
fn writer_articles_response_missing_list_is_empty() {
    let body: WriterArticlesResponse = serde_json::from_str("{}").unwrap();
    assert!(body.articles.is_empty());
}

#[test]
fn create_article_response_reads_new_article_id() {
    let raw = r#"{"new_article":{"_id":"new-1","title":"a","synopsis":"b"}}"#;
    let body: CreateArticleResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(body.new_article.id, "new-1");
}

#[test]
fn sign_in_response_without_token_keeps_error() {
    let body: SignInResponse = serde_json::from_str(r#"{"error":"User not found"}"#).unwrap();
    assert!(body.token.is_none());
    assert_eq!(body.error.as_deref(), Some("User not found"));
}

#[test]
fn sign_up_request_serializes_conf_password_camel_case() {
    let req = SignUpRequest {
        username: "lou".to_owned(),
        email: "lou@example.com".to_owned(),
        password: "Secret1!".to_owned(),
        conf_password: "Secret1!".to_owned(),
        passkey: "key".to_owned(),
    };
    let value = serde_json::to_value(req).unwrap();
    assert_eq!(value["confPassword"], "Secret1!");
    assert!(value.get("conf_password").is_none());
}

#[test]
fn sign_up_error_message_passes_string_through() {
    let body = SignUpResponse { id: None, errors: Some(serde_json::json!("Invalid pass key")) };
    assert_eq!(body.error_message(), "Invalid pass key");
}

#[test]
fn sign_up_error_message_joins_validator_entries() {
    let body = SignUpResponse {
        id: None,
        errors: Some(serde_json::json!([
            { "msg": "Email already in use", "path": "email" },
            { "msg": "Username taken" }
        ])),
    };
    assert_eq!(body.error_message(), "Email already in use; Username taken");
}

#[test]
fn sign_up_error_message_falls_back_when_unrecognized() {
    let body = SignUpResponse { id: None, errors: Some(serde_json::json!([{ "code": 7 }])) };
    assert_eq!(body.error_message(), "Sign up failed.");
    assert_eq!(SignUpResponse::default().error_message(), "Sign up failed.");
}

#[test]
fn article_draft_form_fields_lead_with_content() {
    let draft = ArticleDraft {
        title: "Title".to_owned(),
        synopsis: "Short".to_owned(),
        content: "<p>x</p>".to_owned(),
    };
    assert_eq!(
        draft.form_fields(),
        [("content", "<p>x</p>"), ("title", "Title"), ("synopsis", "Short")]
    );
}
