use async_trait::async_trait;

use crate::repository::pagination::{Page, PageRequest};

/// Repository trait for reading a relation one page at a time, in the same order as
/// [`FindAll`](crate::repository::find_all::FindAll).
///
/// # Example
/// ```ignore
/// let page = history_repo.find_page(PageRequest::new(20, 0)).await?;
/// println!("Page {} of {}", page.page_number(), page.total_pages());
/// ```
#[async_trait]
pub trait FindPage<T>: Send + Sync {
    async fn find_page(&self, page: PageRequest) -> Result<Page<T>, Box<dyn std::error::Error + Send + Sync>>;
}
