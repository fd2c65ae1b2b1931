//! Article-list state for the dashboard landing page.
//!
//! DESIGN
//! ======
//! The list is a page-scoped snapshot: fetched on mount, split by publication
//! status, dropped when the route changes. `None` partitions mean "nothing to
//! render yet", which differs from an empty list ("no articles").

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use crate::net::types::Article;

/// Split articles into `(published, unpublished)`, preserving server order.
pub fn partition_articles(articles: Vec<Article>) -> (Vec<Article>, Vec<Article>) {
    articles.into_iter().partition(|a| a.published)
}

/// Writer's article inventory as shown on the list page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticlesState {
    pub published: Option<Vec<Article>>,
    pub unpublished: Option<Vec<Article>>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ArticlesState {
    fn default() -> Self {
        Self { published: None, unpublished: None, loading: true, error: None }
    }
}

impl ArticlesState {
    /// Apply a successful fetch.
    pub fn loaded(&mut self, articles: Vec<Article>) {
        let (published, unpublished) = partition_articles(articles);
        self.published = Some(published);
        self.unpublished = Some(unpublished);
        self.error = None;
        self.loading = false;
    }

    /// Apply a failed fetch; both partitions are cleared.
    pub fn failed(&mut self, message: String) {
        self.published = None;
        self.unpublished = None;
        self.error = Some(message);
        self.loading = false;
    }
}
