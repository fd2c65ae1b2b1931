//! Article list page: the writer's published and unpublished articles.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The inventory is fetched once per
//! visit and split by publication status; nothing is cached across routes.

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use leptos::prelude::*;

use crate::components::article_card::ArticleCard;
use crate::components::spinner::Spinner;
use crate::net::types::Article;
use crate::state::articles::ArticlesState;

const FETCH_APOLOGY: &str =
    "Apologies - an error has occured trying to fetch data from the server. Please try again later.";

/// Panel heading for a publication status.
pub fn panel_heading(published: bool) -> &'static str {
    if published { "Your Published Articles" } else { "Your Unpublished Articles" }
}

/// Message shown when a panel has no articles.
pub fn empty_message(published: bool) -> &'static str {
    if published {
        "No published articles."
    } else {
        "No unpublished articles. Click on 'New Article' below to create one!"
    }
}

#[component]
pub fn ArticlesPage() -> impl IntoView {
    let state = RwSignal::new(ArticlesState::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_writer_articles().await {
            Ok(articles) => state.update(|s| s.loaded(articles)),
            Err(e) => {
                log::warn!("article list fetch failed: {e}");
                state.update(|s| s.failed(e.to_string()));
            }
        }
    });

    let published_list = Signal::derive(move || state.get().published);
    let unpublished_list = Signal::derive(move || state.get().unpublished);

    view! {
        <div class="articles-page">
            <ArticlePanel published=true articles=published_list state=state/>
            <ArticlePanel published=false articles=unpublished_list state=state>
                <a class="btn btn--success articles-page__new" href="/dashboard/new">
                    "New Article"
                </a>
            </ArticlePanel>
        </div>
    }
}

#[component]
fn ArticlePanel(
    published: bool,
    articles: Signal<Option<Vec<Article>>>,
    state: RwSignal<ArticlesState>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="panel">
            <h5 class="panel__heading">{panel_heading(published)}</h5>
            <div class="panel__body">
                <Show when=move || state.get().loading>
                    <div class="panel__loading"><Spinner/></div>
                </Show>
                {move || {
                    articles
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p class="panel__empty">{empty_message(published)}</p> }.into_any()
                            } else {
                                list.into_iter()
                                    .map(|article| view! { <ArticleCard article=article/> })
                                    .collect_view()
                                    .into_any()
                            }
                        })
                }}
                {move || {
                    state.get().error.map(|message| {
                        view! {
                            <div class="panel__error">
                                <p>"ERROR: " {message}</p>
                                <p>{FETCH_APOLOGY}</p>
                            </div>
                        }
                    })
                }}
                {children.map(|c| c())}
            </div>
        </section>
    }
}
