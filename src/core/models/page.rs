//! Offset pagination cursor

/// Records requested per vehicle page
pub const PAGE_SIZE: usize = 10;

/// Position in an offset-paginated listing
///
/// Once `has_more` is false it stays false until [`PageCursor::start`]
/// produces a fresh cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    /// Offset of the next page to request
    pub offset: usize,
    /// Whether another page may exist
    pub has_more: bool,
}

impl PageCursor {
    /// Cursor before the first page
    #[must_use]
    pub const fn start() -> Self {
        Self {
            offset: 0,
            has_more: true,
        }
    }

    /// Record a page of `received` records
    ///
    /// Pagination continues only if the page was full and the server linked
    /// a next page.
    pub const fn advance(&mut self, received: usize, server_has_next: bool) {
        self.offset += received;
        self.has_more = self.has_more && received == PAGE_SIZE && server_has_next;
    }

    /// Stop pagination (after a failed page)
    pub const fn halt(&mut self) {
        self.has_more = false;
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::start()
    }
}

/// How a fetched page is merged into the current records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Page becomes the whole list
    Replace,
    /// Page is added after the existing records
    Append,
}
