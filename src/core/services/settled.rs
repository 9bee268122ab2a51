//! Settled-results combinator
//!
//! Runs every future to completion and keeps both outcomes, so callers that
//! tolerate partial failure still see what was dropped.

use std::future::Future;

use futures_util::future::join_all;

/// Outcomes of a batch of fallible futures, in input order per side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled<T, E> {
    /// Values of the futures that succeeded
    pub fulfilled: Vec<T>,
    /// Errors of the futures that failed
    pub rejected: Vec<E>,
}

impl<T, E> Settled<T, E> {
    /// True when nothing failed
    #[must_use]
    pub fn all_fulfilled(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl<T, E> Default for Settled<T, E> {
    fn default() -> Self {
        Self {
            fulfilled: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<T, E> FromIterator<Result<T, E>> for Settled<T, E> {
    fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
        let mut settled = Self::default();
        for result in iter {
            match result {
                Ok(value) => settled.fulfilled.push(value),
                Err(err) => settled.rejected.push(err),
            }
        }
        settled
    }
}

/// Await all futures concurrently and split their results
pub async fn settle_all<I, F, T, E>(futures: I) -> Settled<T, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    join_all(futures).await.into_iter().collect()
}
