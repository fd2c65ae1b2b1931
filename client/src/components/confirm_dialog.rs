//! Modal confirmation used before publishing or deleting an article.

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    title: &'static str,
    message: &'static str,
    #[prop(into)] confirm_label: Signal<&'static str>,
    #[prop(optional)] danger: bool,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" role="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__message" class:dialog__danger=danger>{message}</p>
                <div class="dialog__actions">
                    <button
                        class="btn"
                        class:btn--danger=danger
                        class:btn--primary=!danger
                        on:click=move |_| on_confirm.run(())
                    >
                        {move || confirm_label.get()}
                    </button>
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
