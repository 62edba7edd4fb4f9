//! Unified store handle with enum dispatch.
//!
//! The API layer talks to [`Store`], which dispatches to the `PostgreSQL`
//! store or the in-memory store. Enum dispatch is used instead of trait
//! objects because async methods are not dyn-compatible in Rust.

use std::sync::Arc;

use olimpo_types::{BlogPost, BlogPostSummary, ContentCategory, MythEntity, TimelineEvent};

use crate::content_store::ContentStore;
use crate::error::DbError;
use crate::memory::MemoryStore;
use crate::postgres::PostgresPool;

/// A content store backed by `PostgreSQL` or by memory.
///
/// Cheap to clone; the memory variant is shared behind an [`Arc`] and the
/// Postgres variant clones the pool handle.
#[derive(Clone)]
pub enum Store {
    /// The production `PostgreSQL` store.
    Postgres(PostgresPool),
    /// In-memory store for demo mode and tests.
    Memory(Arc<MemoryStore>),
}

impl Store {
    /// Wrap a `PostgreSQL` pool.
    pub const fn postgres(pool: PostgresPool) -> Self {
        Self::Postgres(pool)
    }

    /// Wrap an in-memory store.
    pub fn memory(store: MemoryStore) -> Self {
        Self::Memory(Arc::new(store))
    }

    /// Human-readable name for logging.
    pub const fn name(&self) -> &str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }

    /// All blog post summaries, newest publication first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the underlying query fails.
    pub async fn list_blog_summaries(&self) -> Result<Vec<BlogPostSummary>, DbError> {
        match self {
            Self::Postgres(pool) => ContentStore::new(pool.pool()).list_blog_summaries().await,
            Self::Memory(store) => Ok(store.list_blog_summaries()),
        }
    }

    /// A single blog post by slug.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the underlying query fails.
    pub async fn get_blog_post(&self, id: &str) -> Result<Option<BlogPost>, DbError> {
        match self {
            Self::Postgres(pool) => ContentStore::new(pool.pool()).get_blog_post(id).await,
            Self::Memory(store) => Ok(store.get_blog_post(id)),
        }
    }

    /// All primordial beings.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the underlying query fails.
    pub async fn list_primordials(&self) -> Result<Vec<MythEntity>, DbError> {
        match self {
            Self::Postgres(pool) => ContentStore::new(pool.pool()).list_primordials().await,
            Self::Memory(store) => Ok(store.list_primordials()),
        }
    }

    /// All minor gods.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the underlying query fails.
    pub async fn list_minors(&self) -> Result<Vec<MythEntity>, DbError> {
        match self {
            Self::Postgres(pool) => ContentStore::new(pool.pool()).list_minors().await,
            Self::Memory(store) => Ok(store.list_minors()),
        }
    }

    /// First primordial being whose name contains `nome`, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the underlying query fails.
    pub async fn find_primordial(&self, nome: &str) -> Result<Option<MythEntity>, DbError> {
        match self {
            Self::Postgres(pool) => ContentStore::new(pool.pool()).find_primordial(nome).await,
            Self::Memory(store) => Ok(store.find_primordial(nome)),
        }
    }

    /// First minor god whose name contains `nome`, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the underlying query fails.
    pub async fn find_minor(&self, nome: &str) -> Result<Option<MythEntity>, DbError> {
        match self {
            Self::Postgres(pool) => ContentStore::new(pool.pool()).find_minor(nome).await,
            Self::Memory(store) => Ok(store.find_minor(nome)),
        }
    }

    /// Exact-name lookup in the main catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the underlying query fails.
    pub async fn get_entity_by_name(&self, nome: &str) -> Result<Option<MythEntity>, DbError> {
        match self {
            Self::Postgres(pool) => {
                ContentStore::new(pool.pool())
                    .get_entity_by_name(nome)
                    .await
            }
            Self::Memory(store) => Ok(store.get_entity_by_name(nome)),
        }
    }

    /// First hero whose name contains `nome`, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the underlying query fails.
    pub async fn find_hero(&self, nome: &str) -> Result<Option<MythEntity>, DbError> {
        match self {
            Self::Postgres(pool) => ContentStore::new(pool.pool()).find_hero(nome).await,
            Self::Memory(store) => Ok(store.find_hero(nome)),
        }
    }

    /// Catalogue listing filtered by category.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the underlying query fails.
    pub async fn list_entities(
        &self,
        categoria: ContentCategory,
    ) -> Result<Vec<MythEntity>, DbError> {
        match self {
            Self::Postgres(pool) => ContentStore::new(pool.pool()).list_entities(categoria).await,
            Self::Memory(store) => Ok(store.list_entities(categoria)),
        }
    }

    /// All timeline events in display order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the underlying query fails.
    pub async fn list_timeline(&self) -> Result<Vec<TimelineEvent>, DbError> {
        match self {
            Self::Postgres(pool) => ContentStore::new(pool.pool()).list_timeline().await,
            Self::Memory(store) => Ok(store.list_timeline()),
        }
    }

    /// A single timeline event by slug.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the underlying query fails.
    pub async fn get_timeline_event(&self, id: &str) -> Result<Option<TimelineEvent>, DbError> {
        match self {
            Self::Postgres(pool) => {
                ContentStore::new(pool.pool())
                    .get_timeline_event(id)
                    .await
            }
            Self::Memory(store) => Ok(store.get_timeline_event(id)),
        }
    }
}
