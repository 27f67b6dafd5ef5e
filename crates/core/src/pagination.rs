//! Cursor pagination
//!
//! Pages are fetched strictly one after another; each request depends on the
//! previous page's `endCursor`. The loop is bounded by a page cap so an
//! endpoint that never reports `hasNextPage: false` fails instead of spinning.

use std::future::Future;

use scm_directory_domain::{DirectoryError, Result};
use tracing::{debug, warn};

/// Cursor state of the page just received
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberPage {
    /// Cursor to pass as `after` for the following page
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

/// Items of one page with its cursor state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items in provider order
    pub items: Vec<T>,
    pub cursor: MemberPage,
}

/// Fetch every page and concatenate the items in arrival order.
///
/// `fetch` receives `None` for the first page and the previous `end_cursor`
/// afterwards. A fetch returning `Ok(None)` (missing sub-tree) ends the
/// traversal like an empty last page. A page claiming more data without a
/// cursor also ends it, since repeating the request would restart from the
/// beginning.
///
/// # Errors
/// Propagates the first fetch error, discarding items gathered so far.
/// Returns `DirectoryError::PageLimitExceeded` when `max_pages` pages have
/// been fetched and the last one still reports a next page.
pub async fn paginate_cursor<T, F, Fut>(max_pages: usize, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Option<Page<T>>>>,
{
    let mut out = Vec::new();
    let mut cursor: Option<String> = None;
    let mut fetched = 0usize;

    loop {
        if fetched >= max_pages {
            return Err(DirectoryError::PageLimitExceeded(format!(
                "more pages remain after {fetched} pages ({} items)",
                out.len()
            )));
        }
        fetched += 1;

        let Some(page) = fetch(cursor.take()).await? else {
            debug!(page = fetched, "page missing; ending traversal");
            break;
        };

        debug!(page = fetched, items = page.items.len(), has_next = page.cursor.has_next_page, "page received");
        out.extend(page.items);

        if !page.cursor.has_next_page {
            break;
        }
        match page.cursor.end_cursor {
            Some(next) => cursor = Some(next),
            None => {
                warn!(page = fetched, "page reports hasNextPage without an endCursor; stopping");
                break;
            }
        }
    }

    Ok(out)
}
