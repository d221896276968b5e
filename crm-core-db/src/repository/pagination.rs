/// Offset window into a newest-first listing
///
/// # Example
/// ```
/// use crm_core_db::repository::pagination::PageRequest;
///
/// let latest = PageRequest::new(20, 0); // 20 most recent transitions
/// let older = PageRequest::for_page(20, 2); // the 20 before those
/// assert_eq!(older.offset, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Window of the 1-based `page_number`; 0 is read as the first page
    pub fn for_page(page_size: usize, page_number: usize) -> Self {
        Self {
            limit: page_size,
            offset: page_number.saturating_sub(1).saturating_mul(page_size),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(50, 0)
    }
}

/// One window of a listing plus the size of the whole listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of items in the whole listing
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, limit: usize, offset: usize) -> Self {
        Self {
            items,
            total,
            limit,
            offset,
        }
    }

    /// True when items exist past this window
    pub fn has_more(&self) -> bool {
        self.offset.saturating_add(self.items.len()) < self.total
    }

    /// 1-based number of this window
    pub fn page_number(&self) -> usize {
        match self.limit {
            0 => 1,
            limit => self.offset / limit + 1,
        }
    }

    pub fn total_pages(&self) -> usize {
        match self.limit {
            0 => 1,
            limit => self.total.div_ceil(limit).max(1),
        }
    }
}

impl<T: Clone> Page<T> {
    /// Cuts one window out of a fully loaded, already ordered list
    ///
    /// # Example
    /// ```
    /// use crm_core_db::repository::pagination::{Page, PageRequest};
    ///
    /// let page = Page::from_slice(&[5, 4, 3, 2, 1], PageRequest::new(2, 2));
    /// assert_eq!(page.items, vec![3, 2]);
    /// assert_eq!(page.total, 5);
    /// assert_eq!(page.page_number(), 2);
    /// ```
    pub fn from_slice(all: &[T], request: PageRequest) -> Self {
        let items = all
            .iter()
            .skip(request.offset)
            .take(request.limit)
            .cloned()
            .collect();
        Self::new(items, all.len(), request.limit, request.offset)
    }
}
