//! Recent-comments list widget.

use std::sync::atomic::Ordering;

use raline_api::{abort_signal, AbortSignal, Comment, RalineApiClient, RalineApiError};

use crate::markdown::escape_attr;

/// Element the widget renders into.
pub trait MountPoint {
    fn set_html(&mut self, html: &str);
}

/// `<ul class="wl-recent-list">` markup for `comments`. Comment bodies are
/// server-rendered HTML and are inserted as-is.
pub fn render_recent_list(comments: &[Comment]) -> String {
    let items: String = comments
        .iter()
        .map(|comment| {
            format!(
                "<li class=\"wl-recent-item\"><a href=\"{}\">{}</a>：{}</li>",
                escape_attr(&comment.url),
                escape_attr(comment.nick.as_deref().unwrap_or_default()),
                comment.comment
            )
        })
        .collect();
    format!("<ul class=\"wl-recent-list\">{items}</ul>")
}

/// A loaded recent-comments widget.
pub struct RecentComments<M: MountPoint> {
    comments: Vec<Comment>,
    root: Option<M>,
    rendered: bool,
    abort: AbortSignal,
}

impl<M: MountPoint> RecentComments<M> {
    /// Fetch the latest `count` comments and render them into `root` when
    /// both exist. Raising `abort` while the fetch is in flight resolves to
    /// [`RalineApiError::Cancelled`]; without one a fresh signal is kept for
    /// [`destroy`](Self::destroy).
    pub async fn load(
        client: &RalineApiClient,
        count: u64,
        token: Option<&str>,
        mut root: Option<M>,
        abort: Option<AbortSignal>,
    ) -> Result<Self, RalineApiError> {
        let abort = abort.unwrap_or_else(abort_signal);
        let comments = client.get_recent_comment(count, token, Some(&abort)).await?;

        let rendered = match root.as_mut() {
            Some(root) if !comments.is_empty() => {
                root.set_html(&render_recent_list(&comments));
                true
            }
            _ => false,
        };

        Ok(Self {
            comments,
            root,
            rendered,
            abort,
        })
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn root(&self) -> Option<&M> {
        self.root.as_ref()
    }

    /// Raise the abort signal, cancelling any call still sharing it, and empty
    /// the mount point if this widget rendered into it. Returns the mount
    /// point.
    pub fn destroy(mut self) -> Option<M> {
        self.abort.store(true, Ordering::Release);
        if self.rendered {
            if let Some(root) = self.root.as_mut() {
                root.set_html("");
            }
        }
        self.root
    }
}
