//! Card linking an article summary to its editor.

use leptos::prelude::*;

use crate::net::types::Article;
use crate::pages::update_article::update_article_path;

/// A clickable card for one article in the list.
#[component]
pub fn ArticleCard(article: Article) -> impl IntoView {
    let href = update_article_path(&article.id);
    let last_edited = article.last_edited.unwrap_or_else(|| "unknown".to_owned());

    view! {
        <a class="article-card" href=href>
            <h5 class="article-card__title">{article.title}</h5>
            <p class="article-card__synopsis">{article.synopsis}</p>
            <p class="article-card__edited">"Last Edited: " {last_edited}</p>
        </a>
    }
}
