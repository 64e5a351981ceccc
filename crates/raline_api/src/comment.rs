//! `comment` endpoints.

use serde_json::Value;

use crate::client::{AbortSignal, RalineApiClient};
use crate::error::RalineApiError;
use crate::payload::{CommentPatch, NewComment};
use crate::records::{Comment, CommentPage, SortBy};
use crate::request::RequestSpec;

/// Query for one page of a thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentQuery {
    pub path: String,
    pub offset: u64,
    pub limit: u64,
    pub sort_by: SortBy,
}

impl RalineApiClient {
    /// `GET comment?type=list`.
    pub async fn get_comment(
        &self,
        query: &CommentQuery,
        token: Option<&str>,
        abort: Option<&AbortSignal>,
    ) -> Result<CommentPage, RalineApiError> {
        let spec = RequestSpec::get("comment")
            .with_query("type", "list")
            .with_query("path", &query.path)
            .with_query("limit", query.limit)
            .with_query("offset", query.offset)
            .with_query("sortBy", query.sort_by)
            .with_token(token)
            .with_operation("Get comment data");
        self.send(spec, abort).await?.decode_body()
    }

    /// `POST comment`. Returns the rendered comment when the server sends it.
    pub async fn add_comment(
        &self,
        comment: &NewComment,
        token: Option<&str>,
        abort: Option<&AbortSignal>,
    ) -> Result<Option<Comment>, RalineApiError> {
        let spec = RequestSpec::post("comment")
            .with_token(token)
            .with_operation("Add comment")
            .with_body(comment)?;
        match self.send(spec, abort).await?.into_data() {
            Value::Object(map) => Ok(Some(serde_json::from_value(Value::Object(map))?)),
            _ => Ok(None),
        }
    }

    /// `PUT comment/{id}`.
    pub async fn update_comment(
        &self,
        object_id: i64,
        patch: &CommentPatch,
        token: Option<&str>,
        abort: Option<&AbortSignal>,
    ) -> Result<Comment, RalineApiError> {
        let spec = RequestSpec::put(format!("comment/{object_id}"))
            .with_token(token)
            .with_operation("Update comment")
            .with_body(patch)?;
        self.send(spec, abort).await?.decode_data()
    }

    /// `DELETE comment/{id}`.
    pub async fn delete_comment(
        &self,
        object_id: i64,
        token: Option<&str>,
        abort: Option<&AbortSignal>,
    ) -> Result<(), RalineApiError> {
        let spec = RequestSpec::delete(format!("comment/{object_id}"))
            .with_token(token)
            .with_operation("Delete comment");
        self.send(spec, abort).await.map(|_| ())
    }

    /// `GET comment?type=count`: one count per path, in request order.
    pub async fn fetch_comment_count(
        &self,
        paths: &[String],
        abort: Option<&AbortSignal>,
    ) -> Result<Vec<u64>, RalineApiError> {
        let spec = RequestSpec::get("comment")
            .with_query("type", "count")
            .with_query("url", paths.join(","))
            .with_operation("Get comment count");
        match self.send(spec, abort).await?.into_data() {
            Value::Array(counts) => counts
                .into_iter()
                .map(|count| serde_json::from_value::<u64>(count).map_err(RalineApiError::from))
                .collect(),
            single => Ok(vec![serde_json::from_value(single)?]),
        }
    }

    /// `GET comment?type=recent`.
    pub async fn get_recent_comment(
        &self,
        count: u64,
        token: Option<&str>,
        abort: Option<&AbortSignal>,
    ) -> Result<Vec<Comment>, RalineApiError> {
        let spec = RequestSpec::get("comment")
            .with_query("type", "recent")
            .with_query("count", count)
            .with_token(token)
            .with_operation("Get recent comments");
        self.send(spec, abort).await?.decode_data()
    }
}
