//! Update page for an existing article: edit, publish toggle, and delete.
//!
//! DESIGN
//! ======
//! The article is fetched on mount and re-fetched after every successful
//! save or publish toggle. The form is mounted once the first fetch lands;
//! later re-fetches only refresh the badge, the toggle label, and the banner
//! link so in-progress edits in the rich-text surface are kept. A fetch that
//! completes after the page is gone, or after the route moved to another id,
//! is dropped.
//!
//! Mutations run through `EditorState`, which allows one at a time and
//! refuses everything after a successful delete. Navigation away after a
//! delete is driven by an effect on `deleted`.

#[cfg(test)]
#[path = "update_article_test.rs"]
mod update_article_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::article_fields::ArticleFields;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::rich_text_editor::RichTextEditor;
use crate::components::spinner::Spinner;
use crate::net::types::{Article, ArticleDraft};
use crate::state::editor::{ConfirmAction, EditorState, PendingAction, publication_badge, publish_label};
use crate::util::auth::ARTICLES_PATH;
use crate::util::validation::{FieldErrors, validate_article};

/// Route path of the update page for `id`.
pub fn update_article_path(id: &str) -> String {
    format!("/dashboard/{id}/update")
}

/// Text shown while `action` is in flight.
pub fn pending_message(action: PendingAction) -> &'static str {
    match action {
        PendingAction::Saving => "Saving...",
        PendingAction::Publishing => "Updating publication status...",
        PendingAction::Deleting => "Deleting...",
    }
}

const PUBLISH_CONFIRM_TITLE: &str = "Publish this article?";
const PUBLISH_CONFIRM_MESSAGE: &str = "Publishing this article will make it visible to the public";
const DELETE_CONFIRM_TITLE: &str = "Delete this article?";
const DELETE_CONFIRM_MESSAGE: &str = "This is irreversible!";

/// Link target for the article's current banner, if it has one.
pub fn banner_link(article: Option<&Article>) -> Option<String> {
    article
        .and_then(|a| a.banner_image_url.clone())
        .filter(|url| !url.trim().is_empty())
}

/// Signals a completed fetch writes into.
///
/// Fetches finish in detached tasks that can outlive the page, so every
/// write first checks the page is still alive and still showing the id that
/// was requested.
#[derive(Clone, Copy)]
struct ArticleSlots {
    route_id: RwSignal<String>,
    article: RwSignal<Option<Article>>,
    title: RwSignal<String>,
    synopsis: RwSignal<String>,
    load_error: RwSignal<Option<String>>,
}

impl ArticleSlots {
    fn new() -> Self {
        Self {
            route_id: RwSignal::new(String::new()),
            article: RwSignal::new(None),
            title: RwSignal::new(String::new()),
            synopsis: RwSignal::new(String::new()),
            load_error: RwSignal::new(None),
        }
    }

    /// Clear everything for a newly routed id.
    fn reset(self, id: String) {
        self.route_id.set(id);
        self.article.set(None);
        self.load_error.set(None);
    }

    /// Store the result of fetching `requested_id`. Returns `false` when the
    /// page was disposed or has moved on to another id.
    ///
    /// Title and synopsis are seeded only on the first load, so later
    /// re-fetches keep the writer's unsaved edits.
    fn apply(self, requested_id: &str, outcome: Result<Article, String>) -> bool {
        if self.route_id.try_with_untracked(|id| id == requested_id) != Some(true) {
            return false;
        }
        match outcome {
            Ok(fetched) => {
                let Some(first_load) = self.article.try_with_untracked(Option::is_none) else {
                    return false;
                };
                if first_load {
                    self.title.set(fetched.title.clone());
                    self.synopsis.set(fetched.synopsis.clone());
                }
                self.article.set(Some(fetched));
                self.load_error.set(None);
            }
            Err(message) => self.load_error.set(Some(message)),
        }
        true
    }
}

#[component]
pub fn UpdateArticlePage() -> impl IntoView {
    let navigate = use_navigate();
    let params = use_params_map();
    let article_id = move || params.read().get("id").unwrap_or_default();

    let slots = ArticleSlots::new();
    let ArticleSlots { article, title, synopsis, load_error, .. } = slots;
    let editor = RwSignal::new(EditorState::default());
    let errors = RwSignal::new(FieldErrors::default());
    let surface = NodeRef::<leptos::html::Div>::new();
    let banner = NodeRef::<leptos::html::Input>::new();

    let load_article = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_article(&id).await.map_err(|e| {
                log::warn!("fetch article {id} failed: {e}");
                e.to_string()
            });
            if !slots.apply(&id, outcome) {
                log::debug!("dropped fetch of article {id}: page moved on");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, slots);
    };

    Effect::new(move || {
        let id = article_id();
        slots.reset(id.clone());
        editor.set(EditorState::default());
        errors.set(FieldErrors::default());
        load_article(id);
    });

    Effect::new(move || {
        if editor.with(|s| s.deleted) {
            navigate(ARTICLES_PATH, NavigateOptions::default());
        }
    });

    let published = move || article.with(|a| a.as_ref().is_some_and(|a| a.published));
    let current_banner = Signal::derive(move || article.with(|a| banner_link(a.as_ref())));

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = ArticleDraft {
            title: title.get_untracked(),
            synopsis: synopsis.get_untracked(),
            content: String::new(),
        };
        if let Err(field_errors) = validate_article(&draft) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        if !editor.try_update(EditorState::begin_save).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let id = article_id();
            let draft = ArticleDraft {
                content: crate::components::rich_text_editor::read_html(surface),
                ..draft
            };
            let banner_file = crate::components::article_fields::selected_banner(banner);
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::update_article(&id, &draft, banner_file.as_ref()).await;
                let reload = outcome.is_ok();
                if let Err(e) = &outcome {
                    log::warn!("update article {id} failed: {e}");
                }
                editor.update(|s| s.finish(outcome.map_err(|e| e.to_string())));
                if reload {
                    load_article(id);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
        }
    };

    let on_confirm = Callback::new(move |()| {
        let Some(action) = editor.try_update(EditorState::accept_confirm).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let id = article_id();
            leptos::task::spawn_local(async move {
                let outcome = match action {
                    PendingAction::Publishing => crate::net::api::toggle_publish(&id).await,
                    PendingAction::Deleting => crate::net::api::delete_article(&id).await,
                    PendingAction::Saving => Ok(()),
                };
                let reload = outcome.is_ok() && action == PendingAction::Publishing;
                if let Err(e) = &outcome {
                    log::warn!("{action:?} article {id} failed: {e}");
                }
                editor.update(|s| s.finish(outcome.map_err(|e| e.to_string())));
                if reload {
                    load_article(id);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = action;
    });
    let on_cancel = Callback::new(move |()| editor.update(EditorState::cancel_confirm));

    let open = move |action: ConfirmAction| {
        move |_: leptos::ev::MouseEvent| {
            editor.update(|s| {
                s.open_confirm(action);
            });
        }
    };

    view! {
        <div class="editor-page">
            <Show
                when=move || article.with(Option::is_some)
                fallback=move || {
                    view! {
                        <div class="editor-page__loading">
                            {move || match load_error.get() {
                                Some(message) => view! { <p class="article-form__error">{message}</p> }.into_any(),
                                None => view! { <Spinner/> }.into_any(),
                            }}
                        </div>
                    }
                }
            >
                <div class="editor-page__header">
                    <h5 class="panel__heading">"Update Article"</h5>
                    <span class="badge" class:badge--published=published>
                        {move || publication_badge(published())}
                    </span>
                </div>
                <form class="article-form panel__body" on:submit=on_save novalidate>
                    <ArticleFields
                        title=title
                        synopsis=synopsis
                        errors=errors
                        banner=banner
                        current_banner=current_banner
                    />
                    <RichTextEditor
                        surface=surface
                        initial_html=article.get_untracked().map(|a| a.content).unwrap_or_default()
                    />
                    <Show when=move || editor.with(|s| s.error.is_some())>
                        <p class="article-form__error">{move || editor.get().error.unwrap_or_default()}</p>
                    </Show>
                    {move || {
                        editor
                            .get()
                            .pending
                            .map(|action| {
                                view! {
                                    <div class="article-form__pending">
                                        <Spinner/>
                                        <p>{pending_message(action)}</p>
                                    </div>
                                }
                            })
                    }}
                    <div class="article-form__actions">
                        <button
                            class="btn btn--success"
                            type="submit"
                            disabled=move || !editor.with(EditorState::accepts_actions)
                        >
                            "Save"
                        </button>
                        <button
                            class="btn btn--primary"
                            type="button"
                            disabled=move || !editor.with(EditorState::accepts_actions)
                            on:click=open(ConfirmAction::Publish)
                        >
                            {move || publish_label(published())}
                        </button>
                        <button
                            class="btn btn--danger"
                            type="button"
                            disabled=move || !editor.with(EditorState::accepts_actions)
                            on:click=open(ConfirmAction::Delete)
                        >
                            "Delete"
                        </button>
                    </div>
                </form>
            </Show>
            <Show when=move || editor.with(|s| s.confirm == Some(ConfirmAction::Publish))>
                <ConfirmDialog
                    title=PUBLISH_CONFIRM_TITLE
                    message=PUBLISH_CONFIRM_MESSAGE
                    confirm_label=Signal::derive(move || publish_label(published()))
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            </Show>
            <Show when=move || editor.with(|s| s.confirm == Some(ConfirmAction::Delete))>
                <ConfirmDialog
                    title=DELETE_CONFIRM_TITLE
                    message=DELETE_CONFIRM_MESSAGE
                    confirm_label="Delete"
                    danger=true
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            </Show>
        </div>
    }
}
