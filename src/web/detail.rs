//! Detail-page load contract
//!
//! An edit page either shows a blank "new record" form or the result of a
//! single fetch-by-id, decided once per page load. Any detail page supplies
//! its fetch as a plain function instead of subclassing anything.

use std::future::Future;

use crate::error::Result;

/// Route id that stands for "create a new record".
pub const NEW_RECORD_ID: i64 = 0;

/// Load a detail record for an edit page.
///
/// Returns `Ok(None)` for the new-record sentinel without invoking `fetch`;
/// any other id is passed to `fetch` exactly once and the result wrapped in
/// `Some`.
pub async fn load_detail<T, F, Fut>(id: i64, fetch: F) -> Result<Option<T>>
where
    F: FnOnce(i64) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    if id == NEW_RECORD_ID {
        return Ok(None);
    }
    let record = fetch(id).await?;
    Ok(Some(record))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_new_record_sentinel_skips_fetch() {
        let calls = AtomicUsize::new(0);
        let result: Option<i64> = load_detail(NEW_RECORD_ID, |_id| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(1) }
        })
        .await
        .unwrap();

        assert!(result.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_nonzero_id_fetches_exactly_once() {
        let calls = AtomicUsize::new(0);
        let result = load_detail(7, |id| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok(id * 2) }
        })
        .await
        .unwrap();

        assert_eq!(result, Some(14));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let result: Result<Option<i64>> = load_detail(3, |_id| async {
            Err(Error::Config("recorder missing".to_string()))
        })
        .await;

        assert!(result.is_err());
    }
}
