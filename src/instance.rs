//! One embedded client instance.

use std::sync::Arc;

use raline_api::{
    AbortSignal, ApiConfig, Comment, CommentPage, CommentPatch, CommentQuery, RalineApiClient,
};
use session_store::SharedStore;
use time::OffsetDateTime;

use crate::config::{resolve_config, RalineConfig, RalineOptions};
use crate::dark::get_dark_style;
use crate::emoji::{EmojiConfig, EmojiResolver};
use crate::error::{RalineError, Result};
use crate::markdown::{parse_markdown, MarkdownOptions};
use crate::search::SearchImage;
use crate::state::{ClientState, UserMeta};
use crate::submit::{build_comment, validate_submission, CommentDraft};
use crate::time_ago::get_time_ago;
use crate::upload::{image_markdown, UploadImage};
use crate::widgets::{comment_count, CountTarget, MountPoint, RecentComments};

/// Resolved configuration, request client and storage-backed state for one
/// embedding. Nothing is shared between instances except the store passed in.
pub struct Raline {
    options: RalineOptions,
    config: RalineConfig,
    client: Arc<RalineApiClient>,
    store: SharedStore,
    state: ClientState,
    emoji: EmojiResolver,
}

impl Raline {
    pub fn new(options: RalineOptions, store: SharedStore) -> Result<Self> {
        let config = resolve_config(&options)?;
        let client = Arc::new(build_client(&config)?);
        tracing::debug!(
            server_url = %config.server_url,
            path = %config.path,
            lang = %config.lang,
            "raline instance created"
        );

        Ok(Self {
            emoji: EmojiResolver::new(store.clone(), client.clone()),
            state: ClientState::new(store.clone()),
            options,
            config,
            client,
            store,
        })
    }

    pub fn config(&self) -> &RalineConfig {
        &self.config
    }

    pub fn options(&self) -> &RalineOptions {
        &self.options
    }

    pub fn client(&self) -> &RalineApiClient {
        &self.client
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    /// Apply `change` to the current options and re-resolve. The path is reset
    /// first so an update that does not name one falls back to the default.
    /// On error the instance is left unchanged.
    pub fn update(&mut self, change: impl FnOnce(&mut RalineOptions)) -> Result<()> {
        let mut options = self.options.clone();
        options.path = None;
        change(&mut options);

        let config = resolve_config(&options)?;
        let client = Arc::new(build_client(&config)?);
        self.emoji = EmojiResolver::new(self.store.clone(), client.clone());
        self.client = client;
        self.config = config;
        self.options = options;
        tracing::debug!(path = %self.config.path, "raline instance updated");
        Ok(())
    }

    /// Resolve the configured emoji sets into picker tabs and a lookup map.
    pub async fn load_emoji(&self, abort: Option<&AbortSignal>) -> Result<EmojiConfig> {
        Ok(self.emoji.resolve(&self.config.emoji, abort).await?)
    }

    /// Render comment text with the configured highlighter and TeX renderer.
    pub fn render(&self, content: &str, emoji: &EmojiConfig) -> String {
        parse_markdown(
            content,
            MarkdownOptions {
                emoji_map: Some(&emoji.map),
                highlighter: self.config.highlighter.as_ref(),
                tex_renderer: self.config.tex_renderer.as_ref(),
            },
        )
    }

    /// Relative time text for `date` in the configured locale.
    pub fn time_ago(&self, date: OffsetDateTime) -> String {
        get_time_ago(date, OffsetDateTime::now_utc(), &self.config.locale)
    }

    pub fn dark_style(&self) -> String {
        get_dark_style(&self.config.dark)
    }

    /// One page of the current thread, starting at `offset`.
    pub async fn load_comments(
        &self,
        offset: u64,
        abort: Option<&AbortSignal>,
    ) -> Result<CommentPage> {
        let query = CommentQuery {
            path: self.config.path.clone(),
            offset,
            limit: self.config.page_size,
            sort_by: self.config.comment_sorting.sort_by(),
        };
        let token = self.state.token()?;
        Ok(self
            .client
            .get_comment(&query, token.as_deref(), abort)
            .await?)
    }

    /// Validate and post a comment. Anonymous commenters get their details
    /// remembered; the saved draft is cleared once the server accepts it.
    pub async fn submit(
        &self,
        draft: &CommentDraft,
        abort: Option<&AbortSignal>,
    ) -> Result<Option<Comment>> {
        let user = self.state.user_info()?;
        validate_submission(&self.config, draft, user.is_some())?;

        let body = build_comment(&self.config, draft, user.as_ref());
        let token = user.as_ref().and_then(|user| user.token.as_deref());
        let comment = match self.client.add_comment(&body, token, abort).await {
            Ok(comment) => comment,
            Err(error) => {
                tracing::warn!(path = %self.config.path, %error, "comment submission failed");
                return Err(error.into());
            }
        };

        if user.is_none() {
            self.state.save_user_meta(&UserMeta {
                nick: draft.nick.trim().to_owned(),
                mail: draft.mail.trim().to_owned(),
                link: draft.link.trim().to_owned(),
            })?;
        }
        self.state.clear_draft()?;
        tracing::info!(path = %self.config.path, "comment submitted");
        Ok(comment)
    }

    /// Like (`true`) or withdraw a like (`false`) on a comment.
    pub async fn like(
        &self,
        object_id: i64,
        liked: bool,
        abort: Option<&AbortSignal>,
    ) -> Result<Comment> {
        let patch = CommentPatch {
            like: Some(liked),
            ..CommentPatch::default()
        };
        let token = self.state.token()?;
        Ok(self
            .client
            .update_comment(object_id, &patch, token.as_deref(), abort)
            .await?)
    }

    /// Record the visitor's reaction for the current page. `None` withdraws it.
    pub fn react(&self, vote: Option<usize>) -> Result<()> {
        if self.config.reaction.is_empty() {
            return Err(RalineError::Disabled("reaction"));
        }
        let vote = vote.filter(|index| *index < self.config.reaction.len());
        self.state.set_vote(&self.config.path, vote)?;
        Ok(())
    }

    pub fn reaction_vote(&self) -> Result<Option<usize>> {
        Ok(self.state.vote(&self.config.path)?)
    }

    /// Fill comment counters, defaulting untagged targets to the current path.
    pub async fn comment_count<T: CountTarget>(
        &self,
        targets: &mut [T],
        abort: Option<&AbortSignal>,
    ) -> Result<Vec<u64>> {
        Ok(comment_count(&self.client, targets, &self.config.path, abort).await?)
    }

    /// Load the recent-comments widget. `abort` cancels the fetch and is
    /// raised again when the widget is destroyed.
    pub async fn recent_comments<M: MountPoint>(
        &self,
        count: u64,
        root: Option<M>,
        abort: Option<&AbortSignal>,
    ) -> Result<RecentComments<M>> {
        let token = self.state.token()?;
        Ok(RecentComments::load(&self.client, count, token.as_deref(), root, abort.cloned()).await?)
    }

    pub async fn search_images(
        &self,
        word: &str,
        abort: Option<&AbortSignal>,
    ) -> Result<Vec<SearchImage>> {
        let search = self
            .config
            .search
            .as_ref()
            .ok_or(RalineError::Disabled("image search"))?;
        Ok(search.search(self.client.as_ref(), word, abort).await?)
    }

    /// Upload an image and return the markdown that references it.
    pub async fn upload_image(&self, image: &UploadImage) -> Result<String> {
        let uploader = self
            .config
            .image_uploader
            .as_ref()
            .ok_or(RalineError::Disabled("image upload"))?;
        let url = uploader.upload(image).await?;
        Ok(image_markdown(&image.name, &url))
    }
}

fn build_client(config: &RalineConfig) -> Result<RalineApiClient> {
    let api = ApiConfig::new(config.server_url.as_str()).with_lang(config.lang.as_str());
    Ok(RalineApiClient::new(api)?)
}
