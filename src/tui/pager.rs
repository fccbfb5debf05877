//! Fixed-size pages over the filtered script list.

/// Half-open range `[start, end)` of view positions shown on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    /// Check if the window shows nothing.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Number of rows in the window.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if a view position falls inside the window.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

/// Clamp a cursor into `[0, len)`, or to 0 for an empty list.
pub fn clamp_cursor(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        cursor.min(len - 1)
    }
}

/// Compute the page containing the cursor.
///
/// The page starts at the multiple of `page_size` at or below the clamped
/// cursor. An empty list yields an empty window. A `page_size` of 0 is
/// treated as 1.
pub fn page_window(len: usize, cursor: usize, page_size: usize) -> PageWindow {
    if len == 0 {
        return PageWindow::default();
    }
    let page_size = page_size.max(1);
    let cursor = clamp_cursor(cursor, len);
    let start = page_size * (cursor / page_size);
    let end = (start + page_size).min(len);
    PageWindow { start, end }
}

/// Zero-based page the cursor is on.
pub fn page_index(cursor: usize, len: usize, page_size: usize) -> usize {
    clamp_cursor(cursor, len) / page_size.max(1)
}

/// Number of pages needed for `len` rows; at least 1.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}
