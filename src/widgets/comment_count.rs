//! Comment counters scattered over a page.

use raline_api::{AbortSignal, RalineApiClient, RalineApiError};

use crate::path::decode_path;

/// An element showing the comment count of one page.
pub trait CountTarget {
    /// Page path this element counts, when it names one.
    fn path_hint(&self) -> Option<String>;

    fn set_text(&mut self, text: &str);
}

/// Fetch counts for every target in one request and write each result to its
/// target. Targets without a path hint count `default_path`.
///
/// No request is made when `targets` is empty. Counts are matched to targets
/// by position; targets beyond the server's answer are left untouched.
pub async fn comment_count<T: CountTarget>(
    client: &RalineApiClient,
    targets: &mut [T],
    default_path: &str,
    abort: Option<&AbortSignal>,
) -> Result<Vec<u64>, RalineApiError> {
    if targets.is_empty() {
        return Ok(Vec::new());
    }

    let paths: Vec<String> = targets
        .iter()
        .map(|target| {
            let hint = target.path_hint().filter(|hint| !hint.is_empty());
            decode_path(hint.as_deref().unwrap_or(default_path))
        })
        .collect();

    let counts = client.fetch_comment_count(&paths, abort).await?;
    for (target, count) in targets.iter_mut().zip(&counts) {
        target.set_text(&count.to_string());
    }
    tracing::debug!(targets = paths.len(), "comment counts updated");
    Ok(counts)
}
