use crate::client::{ActivityApi, ApiReply};
use crate::errors::ApiError;
use crate::message::MessageSlot;
use crate::models::{BoardSnapshot, BoardView, ListArea, Message, SignupForm};
use crate::render::render_activities;
use chrono::Local;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

pub const LOAD_FAILED_NOTICE: &str = "Failed to load activities. Please try again later.";
pub const GENERIC_REJECTION: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED: &str = "Failed to remove participant.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load finished first; this response was dropped.
    Stale,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded,
    Rejected,
    Failed,
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Signup,
    Unregister,
}

impl Action {
    fn failure_text(self) -> &'static str {
        match self {
            Action::Signup => SIGNUP_FAILED,
            Action::Unregister => UNREGISTER_FAILED,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Action::Signup => "signup",
            Action::Unregister => "unregister",
        }
    }
}

/// Activity list controller: owns the rendered view, the signup form draft and
/// the transient message.
pub struct ActivityBoard {
    api: Arc<dyn ActivityApi>,
    view: Mutex<BoardView>,
    load_seq: AtomicU64,
    messages: MessageSlot,
}

impl ActivityBoard {
    pub fn new(api: Arc<dyn ActivityApi>, message_ttl: Duration) -> Self {
        Self {
            api,
            view: Mutex::new(BoardView::default()),
            load_seq: AtomicU64::new(0),
            messages: MessageSlot::new(message_ttl),
        }
    }

    pub async fn load(&self) -> LoadOutcome {
        let seq = self.load_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.api.list_activities().await;

        let mut view = self.view.lock().await;
        if seq < view.applied_seq {
            debug!(seq, applied = view.applied_seq, "discarding stale activity list");
            return LoadOutcome::Stale;
        }
        view.applied_seq = seq;

        match result {
            Ok(list) => {
                view.options = list.names().map(str::to_string).collect();
                view.list = ListArea::Loaded(render_activities(&list));
                view.loaded_at = Some(Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
                debug!(seq, activities = list.0.len(), "activity list applied");
                LoadOutcome::Applied
            }
            Err(err) => {
                error!(seq, "error fetching activities: {err}");
                view.list = ListArea::Failed(LOAD_FAILED_NOTICE.to_string());
                LoadOutcome::Failed
            }
        }
    }

    pub async fn signup(&self, activity: &str, email: &str) -> ActionOutcome {
        {
            let mut view = self.view.lock().await;
            view.form = SignupForm {
                activity: activity.to_string(),
                email: email.to_string(),
            };
        }

        let result = self.api.signup(activity, email).await;
        self.finish(Action::Signup, activity, email, result).await
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> ActionOutcome {
        let result = self.api.unregister(activity, email).await;
        self.finish(Action::Unregister, activity, email, result).await
    }

    async fn finish(
        &self,
        action: Action,
        activity: &str,
        email: &str,
        result: Result<ApiReply, ApiError>,
    ) -> ActionOutcome {
        match result {
            Ok(ApiReply::Accepted { message }) => {
                info!(action = action.label(), activity, email, "{message}");
                self.messages.show(Message::success(message)).await;
                if let Action::Signup = action {
                    self.view.lock().await.form = SignupForm::default();
                }
                self.load().await;
                ActionOutcome::Succeeded
            }
            Ok(ApiReply::Rejected { status, detail }) => {
                warn!(
                    action = action.label(),
                    activity,
                    email,
                    %status,
                    detail = ?detail,
                    "request rejected"
                );
                let text = detail.unwrap_or_else(|| GENERIC_REJECTION.to_string());
                self.messages.show(Message::error(text)).await;
                ActionOutcome::Rejected
            }
            Err(err) => {
                error!(action = action.label(), activity, email, "{err}");
                self.messages.show(Message::error(action.failure_text())).await;
                ActionOutcome::Failed
            }
        }
    }

    pub async fn snapshot(&self) -> BoardSnapshot {
        let view = self.view.lock().await.clone();
        BoardSnapshot {
            view,
            message: self.messages.current().await,
        }
    }

    pub async fn shutdown(&self) {
        self.messages.clear().await;
        debug!("activity board torn down");
    }
}
