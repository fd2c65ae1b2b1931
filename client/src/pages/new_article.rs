//! New-article page: compose a draft and hand off to its update page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::article_fields::ArticleFields;
use crate::components::rich_text_editor::{RichTextEditor, SAMPLE_CONTENT};
use crate::components::spinner::Spinner;
use crate::net::types::ArticleDraft;
use crate::pages::update_article::update_article_path;
use crate::state::editor::EditorState;
use crate::util::validation::{FieldErrors, validate_article};

#[component]
pub fn NewArticlePage() -> impl IntoView {
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let synopsis = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let editor = RwSignal::new(EditorState::default());
    let created_id = RwSignal::new(None::<String>);
    let surface = NodeRef::<leptos::html::Div>::new();
    let banner = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        if let Some(id) = created_id.get() {
            navigate(&update_article_path(&id), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
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
            let draft = ArticleDraft {
                content: crate::components::rich_text_editor::read_html(surface),
                ..draft
            };
            let banner_file = crate::components::article_fields::selected_banner(banner);
            leptos::task::spawn_local(async move {
                match crate::net::api::create_article(&draft, banner_file.as_ref()).await {
                    Ok(article) => {
                        editor.update(|s| s.finish(Ok(())));
                        created_id.set(Some(article.id));
                    }
                    Err(e) => {
                        log::warn!("create article failed: {e}");
                        editor.update(|s| s.finish(Err(e.to_string())));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, surface, banner);
        }
    };

    view! {
        <div class="editor-page">
            <h5 class="panel__heading">"New Article"</h5>
            <form class="article-form panel__body" on:submit=on_submit novalidate>
                <div class="article-form__intro">
                    <p class="article-form__intro-title">"Submitting a new article"</p>
                    <p>
                        "Add a main title that clearly conveys what the article is about and a synopsis "
                        "with a little more detail. Write the body in the content editor below."
                    </p>
                </div>
                <ArticleFields title=title synopsis=synopsis errors=errors banner=banner current_banner={None::<String>}/>
                <p class="article-form__hint">
                    "Once saved you'll be taken to the article's update page, where you can keep "
                    "editing and publish it when ready."
                </p>
                <RichTextEditor surface=surface initial_html=SAMPLE_CONTENT.to_owned()/>
                <Show when=move || editor.get().error.is_some()>
                    <p class="article-form__error">{move || editor.get().error.unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !editor.get().is_busy()
                    fallback=|| {
                        view! {
                            <div class="article-form__pending">
                                <Spinner/>
                                <p>"Please wait, this can take a minute or so..."</p>
                            </div>
                        }
                    }
                >
                    <button class="btn btn--success" type="submit">"Create"</button>
                </Show>
            </form>
        </div>
    }
}
