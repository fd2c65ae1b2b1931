//! Article editor state: confirmations, in-flight actions, and lifecycle.
//!
//! DESIGN
//! ======
//! The update page drives four mutations (save, publish toggle, delete, and
//! the follow-up re-fetch). At most one mutation is in flight; confirmation
//! dialogs cannot open over a pending action; a deleted article accepts
//! nothing further. Pages call these transitions and render from the fields.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

/// Lifecycle of an article as the editor sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Unpublished,
    Published,
    Deleted,
}

/// Actions that ask for confirmation first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmAction {
    Publish,
    Delete,
}

/// A mutation currently awaiting the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingAction {
    Saving,
    Publishing,
    Deleting,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorState {
    pub confirm: Option<ConfirmAction>,
    pub pending: Option<PendingAction>,
    pub error: Option<String>,
    pub deleted: bool,
}

impl EditorState {
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether new actions may start.
    pub fn accepts_actions(&self) -> bool {
        !self.deleted && self.pending.is_none()
    }

    pub fn lifecycle(&self, published: bool) -> Lifecycle {
        if self.deleted {
            Lifecycle::Deleted
        } else if published {
            Lifecycle::Published
        } else {
            Lifecycle::Unpublished
        }
    }

    /// Show a confirmation dialog. Returns `false` when ignored.
    pub fn open_confirm(&mut self, action: ConfirmAction) -> bool {
        if !self.accepts_actions() {
            return false;
        }
        self.confirm = Some(action);
        true
    }

    pub fn cancel_confirm(&mut self) {
        self.confirm = None;
    }

    /// Close the open dialog and start its action.
    pub fn accept_confirm(&mut self) -> Option<PendingAction> {
        let action = self.confirm.take()?;
        if !self.accepts_actions() {
            return None;
        }
        let pending = match action {
            ConfirmAction::Publish => PendingAction::Publishing,
            ConfirmAction::Delete => PendingAction::Deleting,
        };
        self.begin(pending);
        Some(pending)
    }

    /// Start saving the form. Returns `false` when another action is running.
    pub fn begin_save(&mut self) -> bool {
        if !self.accepts_actions() {
            return false;
        }
        self.confirm = None;
        self.begin(PendingAction::Saving);
        true
    }

    fn begin(&mut self, action: PendingAction) {
        self.pending = Some(action);
        self.error = None;
    }

    /// Record the outcome of the pending action.
    pub fn finish(&mut self, outcome: Result<(), String>) {
        let action = self.pending.take();
        match outcome {
            Ok(()) => {
                if action == Some(PendingAction::Deleting) {
                    self.deleted = true;
                }
            }
            Err(message) => self.error = Some(message),
        }
    }
}

/// Label for the publish toggle given the current status.
pub fn publish_label(published: bool) -> &'static str {
    if published { "Unpublish" } else { "Publish" }
}

/// Badge text for the publication status.
pub fn publication_badge(published: bool) -> &'static str {
    if published { "Published" } else { "Not Published" }
}
