//! Title, synopsis, and banner inputs shared by the create and update forms.

use leptos::prelude::*;

use crate::util::validation::FieldErrors;

/// File chosen in the banner input, if any.
#[cfg(feature = "hydrate")]
pub fn selected_banner(input: NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    input.get_untracked()?.files()?.get(0)
}

#[component]
pub fn ArticleFields(
    title: RwSignal<String>,
    synopsis: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    banner: NodeRef<leptos::html::Input>,
    #[prop(into)] current_banner: Signal<Option<String>>,
) -> impl IntoView {
    let error_for = move |field: &'static str| move || errors.get().get(field).unwrap_or_default();

    view! {
        <div class="article-form__field">
            <label class="article-form__label" for="title">"Title"</label>
            <input
                id="title"
                class="article-form__input"
                type="text"
                maxlength="40"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <p class="field-error">{error_for("title")}</p>
        </div>
        <div class="article-form__field">
            <label class="article-form__label" for="synopsis">"Synopsis"</label>
            <textarea
                id="synopsis"
                class="article-form__input"
                maxlength="200"
                prop:value=move || synopsis.get()
                on:input=move |ev| synopsis.set(event_target_value(&ev))
            ></textarea>
            <p class="field-error">{error_for("synopsis")}</p>
        </div>
        <div class="article-form__field">
            <label class="article-form__label" for="banner">"Banner Image"</label>
            <input id="banner" class="article-form__file" type="file" accept="image/*" node_ref=banner/>
            {move || {
                current_banner
                    .get()
                    .map(|url| {
                        view! {
                            <p class="article-form__hint">
                                "Current image "
                                <a href=url target="_blank" rel="noopener noreferrer">"here"</a>
                                ". If you upload a new image and save it will replace this one."
                            </p>
                        }
                    })
            }}
        </div>
    }
}
