//! Native rich-text editor: a `contenteditable` surface plus a toolbar.
//!
//! DESIGN
//! ======
//! The surface is seeded once with `initial_html` and then owned by the
//! browser; the form reads its HTML back at submit time through the shared
//! `NodeRef`. Toolbar buttons map onto browser editing commands and act on
//! the current selection, so they prevent the mousedown that would steal
//! focus from the surface.

#[cfg(test)]
#[path = "rich_text_editor_test.rs"]
mod rich_text_editor_test;

use leptos::prelude::*;

/// Seed document for new articles, showing the available block styles.
pub const SAMPLE_CONTENT: &str = "<h1>Heading 1</h1><h2>Heading 2</h2><h3>Subheading 1</h3>\
<h4>Subheading 2</h4><p>Standard paragraph...</p><p>List of things:</p>\
<ul><li>Thing 1</li><li>Thing 2</li></ul>";

/// Toolbar actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorCommand {
    Undo,
    Redo,
    Paragraph,
    Heading(u8),
    Bold,
    Italic,
    BulletList,
    NumberedList,
    Outdent,
    Indent,
    RemoveFormat,
}

/// Toolbar layout, left to right.
pub const TOOLBAR: &[EditorCommand] = &[
    EditorCommand::Undo,
    EditorCommand::Redo,
    EditorCommand::Paragraph,
    EditorCommand::Heading(1),
    EditorCommand::Heading(2),
    EditorCommand::Heading(3),
    EditorCommand::Heading(4),
    EditorCommand::Bold,
    EditorCommand::Italic,
    EditorCommand::BulletList,
    EditorCommand::NumberedList,
    EditorCommand::Outdent,
    EditorCommand::Indent,
    EditorCommand::RemoveFormat,
];

impl EditorCommand {
    /// Browser editing command name and its value argument.
    pub fn exec_args(self) -> (&'static str, Option<&'static str>) {
        match self {
            Self::Undo => ("undo", None),
            Self::Redo => ("redo", None),
            Self::Paragraph => ("formatBlock", Some("p")),
            Self::Heading(1) => ("formatBlock", Some("h1")),
            Self::Heading(2) => ("formatBlock", Some("h2")),
            Self::Heading(3) => ("formatBlock", Some("h3")),
            Self::Heading(_) => ("formatBlock", Some("h4")),
            Self::Bold => ("bold", None),
            Self::Italic => ("italic", None),
            Self::BulletList => ("insertUnorderedList", None),
            Self::NumberedList => ("insertOrderedList", None),
            Self::Outdent => ("outdent", None),
            Self::Indent => ("indent", None),
            Self::RemoveFormat => ("removeFormat", None),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Undo => "↶",
            Self::Redo => "↷",
            Self::Paragraph => "¶",
            Self::Heading(1) => "H1",
            Self::Heading(2) => "H2",
            Self::Heading(3) => "H3",
            Self::Heading(_) => "H4",
            Self::Bold => "B",
            Self::Italic => "I",
            Self::BulletList => "•",
            Self::NumberedList => "1.",
            Self::Outdent => "⇤",
            Self::Indent => "⇥",
            Self::RemoveFormat => "⌫",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Undo => "Undo",
            Self::Redo => "Redo",
            Self::Paragraph => "Paragraph",
            Self::Heading(1) => "Heading 1",
            Self::Heading(2) => "Heading 2",
            Self::Heading(3) => "Subheading 1",
            Self::Heading(_) => "Subheading 2",
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::BulletList => "Bulleted list",
            Self::NumberedList => "Numbered list",
            Self::Outdent => "Decrease indent",
            Self::Indent => "Increase indent",
            Self::RemoveFormat => "Clear formatting",
        }
    }
}

#[cfg(feature = "hydrate")]
fn run_command(command: EditorCommand) {
    use wasm_bindgen::JsCast as _;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(doc) = doc.dyn_into::<web_sys::HtmlDocument>() else {
        return;
    };
    let (name, value) = command.exec_args();
    let applied = match value {
        Some(value) => doc.exec_command_with_show_ui_and_value(name, false, value),
        None => doc.exec_command(name),
    };
    if !matches!(applied, Ok(true)) {
        log::debug!("editor command {name} not applied");
    }
}

/// Current HTML of the editor surface.
#[cfg(feature = "hydrate")]
pub fn read_html(surface: NodeRef<leptos::html::Div>) -> String {
    surface.get_untracked().map(|el| el.inner_html()).unwrap_or_default()
}

#[component]
pub fn RichTextEditor(surface: NodeRef<leptos::html::Div>, initial_html: String) -> impl IntoView {
    let buttons = TOOLBAR
        .iter()
        .map(|&command| {
            view! {
                <button
                    type="button"
                    class="rich-editor__button"
                    title=command.title()
                    aria-label=command.title()
                    on:mousedown=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        #[cfg(feature = "hydrate")]
                        run_command(command);
                    }
                >
                    {command.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="rich-editor">
            <div class="rich-editor__toolbar" role="toolbar">
                {buttons}
            </div>
            <div
                class="rich-editor__surface"
                contenteditable="true"
                node_ref=surface
                inner_html=initial_html
            ></div>
        </div>
    }
}
