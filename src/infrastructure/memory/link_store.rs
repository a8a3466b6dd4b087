//! In-memory implementation of the link repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::id_generator::LinkIdGenerator;
use crate::domain::entities::{Link, LinkId, LinkPatch, NewLink};
use crate::domain::reorder::{arrange_by_ids, move_item};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Ordered link collection held in process memory.
///
/// Every mutation, including the read-modify-write ones, runs under a single
/// write guard, so mutations are applied one at a time and readers always see
/// a consistent sequence.
#[derive(Debug)]
pub struct InMemoryLinkRepository {
    links: RwLock<Vec<Link>>,
    ids: LinkIdGenerator,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::with_links(Vec::new())
    }

    /// Creates a repository pre-filled with `links` in the given order.
    pub fn with_links(links: Vec<Link>) -> Self {
        Self {
            links: RwLock::new(links),
            ids: LinkIdGenerator::from_clock(),
        }
    }

    /// Uses a custom id generator. Mostly useful in tests that assert on ids.
    pub fn with_id_generator(mut self, ids: LinkIdGenerator) -> Self {
        self.ids = ids;
        self
    }
}

impl Default for InMemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn list(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.links.read().await.clone())
    }

    async fn find(&self, id: &LinkId) -> Result<Option<Link>, AppError> {
        Ok(self.links.read().await.iter().find(|l| &l.id == id).cloned())
    }

    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = Link::from_new(self.ids.next_id(), new_link);

        let mut links = self.links.write().await;
        links.push(link.clone());
        debug!(id = %link.id, total = links.len(), "link appended");

        Ok(link)
    }

    async fn update(&self, id: &LinkId, patch: LinkPatch) -> Result<Option<Link>, AppError> {
        let mut links = self.links.write().await;

        Ok(links.iter_mut().find(|l| &l.id == id).map(|link| {
            link.apply(patch);
            link.clone()
        }))
    }

    async fn toggle(&self, id: &LinkId) -> Result<Option<Link>, AppError> {
        let mut links = self.links.write().await;

        Ok(links.iter_mut().find(|l| &l.id == id).map(|link| {
            link.enabled = !link.enabled;
            link.clone()
        }))
    }

    async fn delete(&self, id: &LinkId) -> Result<bool, AppError> {
        let mut links = self.links.write().await;
        let before = links.len();
        links.retain(|l| &l.id != id);

        Ok(links.len() != before)
    }

    async fn replace_all(&self, links: Vec<Link>) -> Result<(), AppError> {
        *self.links.write().await = links;
        Ok(())
    }

    async fn move_link(&self, from: usize, to: usize) -> Result<Vec<Link>, AppError> {
        let mut links = self.links.write().await;
        let reordered = move_item(links.as_slice(), from, to)?;
        *links = reordered.clone();

        Ok(reordered)
    }

    async fn reorder(&self, ids: &[LinkId]) -> Result<Vec<Link>, AppError> {
        let mut links = self.links.write().await;
        let arranged = arrange_by_ids(links.as_slice(), ids)?;
        *links = arranged.clone();

        Ok(arranged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{DeviceClass, LinkRules};

    fn new_link(title: &str) -> NewLink {
        NewLink {
            title: title.to_string(),
            url: format!("https://example.com/{}", title.to_lowercase()),
            enabled: true,
            rules: Some(LinkRules {
                time_range: None,
                device: Some(DeviceClass::All),
                priority: None,
            }),
        }
    }

    fn repo() -> InMemoryLinkRepository {
        InMemoryLinkRepository::new().with_id_generator(LinkIdGenerator::starting_at(100))
    }

    #[tokio::test]
    async fn test_create_appends_with_fresh_id() {
        let repo = repo();

        let first = repo.create(new_link("First")).await.unwrap();
        let second = repo.create(new_link("Second")).await.unwrap();

        assert_eq!(first.id.as_str(), "100");
        assert_eq!(second.id.as_str(), "101");

        let titles: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let repo = repo();
        let link = repo.create(new_link("Blog")).await.unwrap();

        let updated = repo
            .update(&link.id, LinkPatch::enabled(false))
            .await
            .unwrap()
            .unwrap();

        assert!(!updated.enabled);
        assert_eq!(updated.title, "Blog");
        assert_eq!(repo.find(&link.id).await.unwrap().unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_noop() {
        let repo = repo();
        repo.create(new_link("Blog")).await.unwrap();
        let before = repo.list().await.unwrap();

        let result = repo
            .update(&LinkId::from("missing"), LinkPatch::enabled(false))
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(repo.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = repo();
        let a = repo.create(new_link("A")).await.unwrap();
        let b = repo.create(new_link("B")).await.unwrap();

        assert!(repo.delete(&a.id).await.unwrap());
        assert!(!repo.delete(&a.id).await.unwrap());

        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining, vec![b]);
    }

    #[tokio::test]
    async fn test_replace_all_stores_given_sequence() {
        let repo = repo();
        let a = repo.create(new_link("A")).await.unwrap();
        let b = repo.create(new_link("B")).await.unwrap();

        repo.replace_all(vec![b.clone(), a.clone()]).await.unwrap();

        assert_eq!(repo.list().await.unwrap(), vec![b, a]);
    }

    #[tokio::test]
    async fn test_with_links_keeps_order() {
        let seeded = crate::infrastructure::seed::sample_links();
        let repo = InMemoryLinkRepository::with_links(seeded.clone());

        assert_eq!(repo.list().await.unwrap(), seeded);
    }

    #[tokio::test]
    async fn test_toggle() {
        let repo = repo();
        let link = repo.create(new_link("Blog")).await.unwrap();

        let off = repo.toggle(&link.id).await.unwrap().unwrap();
        let on = repo.toggle(&link.id).await.unwrap().unwrap();

        assert!(!off.enabled);
        assert!(on.enabled);
        assert!(repo.toggle(&LinkId::from("missing")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_move_link_and_reorder() {
        let repo = repo();
        let a = repo.create(new_link("A")).await.unwrap();
        let b = repo.create(new_link("B")).await.unwrap();
        let c = repo.create(new_link("C")).await.unwrap();

        let moved = repo.move_link(0, 2).await.unwrap();
        assert_eq!(moved, vec![b.clone(), c.clone(), a.clone()]);
        assert_eq!(repo.list().await.unwrap(), moved);

        let reordered = repo
            .reorder(&[c.id.clone(), a.id.clone(), b.id.clone()])
            .await
            .unwrap();
        assert_eq!(reordered, vec![c, a, b]);
        assert_eq!(repo.list().await.unwrap(), reordered);
    }

    #[tokio::test]
    async fn test_rejected_move_and_reorder_leave_sequence() {
        let repo = repo();
        let a = repo.create(new_link("A")).await.unwrap();
        let b = repo.create(new_link("B")).await.unwrap();

        assert!(repo.move_link(0, 2).await.is_err());
        assert!(repo.reorder(&[a.id.clone()]).await.is_err());
        assert_eq!(repo.list().await.unwrap(), vec![a, b]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_survive_moves() {
        let repo = std::sync::Arc::new(repo());
        for title in ["A", "B", "C"] {
            repo.create(new_link(title)).await.unwrap();
        }

        let mut tasks = Vec::new();
        for i in 0..100 {
            let creator = repo.clone();
            tasks.push(tokio::spawn(async move {
                creator.create(new_link(&format!("Added{i}"))).await.map(|_| ())
            }));
            let mover = repo.clone();
            tasks.push(tokio::spawn(async move {
                mover.move_link(0, 2).await.map(|_| ())
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let links = repo.list().await.unwrap();
        assert_eq!(links.len(), 103);
        for i in 0..100 {
            let title = format!("Added{i}");
            assert!(links.iter().any(|l| l.title == title), "{title} was lost");
        }
    }
}
