//! Read queries over the content tables.
//!
//! [`ContentStore`] is the `PostgreSQL` implementation of the store
//! operations the API dispatches to. Row structs are kept separate from
//! the domain types in `olimpo-types` and converted at the boundary.
//!
//! Substring lookups use `ILIKE` with a wrapped pattern; the first match
//! in `nome` order is returned, which is what the detail endpoints serve.

use chrono::NaiveDate;
use olimpo_types::{BlogPost, BlogPostSummary, ContentCategory, MythEntity, TimelineEvent};
use sqlx::PgPool;

use crate::error::DbError;

/// Operations on the content tables.
pub struct ContentStore<'a> {
    pool: &'a PgPool,
}

impl<'a> ContentStore<'a> {
    /// Create a new content store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    // -- Blog ---------------------------------------------------------------

    /// All blog post summaries, newest publication first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_blog_summaries(&self) -> Result<Vec<BlogPostSummary>, DbError> {
        let rows = sqlx::query_as::<_, BlogSummaryRow>(
            r"SELECT id, titulo, resumo, data_publicacao, tags, livro_recomendado
              FROM blog_posts
              ORDER BY data_publicacao DESC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// A single blog post by slug, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn get_blog_post(&self, id: &str) -> Result<Option<BlogPost>, DbError> {
        let row = sqlx::query_as::<_, BlogPostRow>(
            r"SELECT id, titulo, resumo, conteudo, data_publicacao, tags, livro_recomendado
              FROM blog_posts
              WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    // -- Primordial beings and minor gods ------------------------------------

    /// All primordial beings.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_primordials(&self) -> Result<Vec<MythEntity>, DbError> {
        self.list_table("seres_primordiais").await
    }

    /// All minor gods.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_minors(&self) -> Result<Vec<MythEntity>, DbError> {
        self.list_table("deuses_menores").await
    }

    /// First primordial being whose name contains `nome`, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn find_primordial(&self, nome: &str) -> Result<Option<MythEntity>, DbError> {
        self.find_in_table("seres_primordiais", nome).await
    }

    /// First minor god whose name contains `nome`, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn find_minor(&self, nome: &str) -> Result<Option<MythEntity>, DbError> {
        self.find_in_table("deuses_menores", nome).await
    }

    // -- Main catalogue ------------------------------------------------------

    /// Exact-name lookup in the main catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn get_entity_by_name(&self, nome: &str) -> Result<Option<MythEntity>, DbError> {
        let row = sqlx::query_as::<_, EntityRow>(
            r"SELECT id, nome, categoria, descricao, dominios, poderes, simbolos, tags
              FROM entidades_mitologicas
              WHERE nome = $1",
        )
        .bind(nome)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// First hero whose name contains `nome`, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn find_hero(&self, nome: &str) -> Result<Option<MythEntity>, DbError> {
        let row = sqlx::query_as::<_, EntityRow>(
            r"SELECT id, nome, categoria, descricao, dominios, poderes, simbolos, tags
              FROM entidades_mitologicas
              WHERE categoria = 'heroi' AND nome ILIKE $1
              ORDER BY nome
              LIMIT 1",
        )
        .bind(wrap_pattern(nome))
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Catalogue listing filtered by category.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_entities(
        &self,
        categoria: ContentCategory,
    ) -> Result<Vec<MythEntity>, DbError> {
        let rows = sqlx::query_as::<_, EntityRow>(
            r"SELECT id, nome, categoria, descricao, dominios, poderes, simbolos, tags
              FROM entidades_mitologicas
              WHERE categoria = $1
              ORDER BY nome",
        )
        .bind(categoria.as_str())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    // -- Timeline ------------------------------------------------------------

    /// All timeline events in display order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_timeline(&self) -> Result<Vec<TimelineEvent>, DbError> {
        let rows = sqlx::query_as::<_, TimelineRow>(
            r"SELECT id, nome, descricao, era, tipo, data_estimada, personagens, tags
              FROM timeline_events
              ORDER BY ordem, nome",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// A single timeline event by slug, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn get_timeline_event(&self, id: &str) -> Result<Option<TimelineEvent>, DbError> {
        let row = sqlx::query_as::<_, TimelineRow>(
            r"SELECT id, nome, descricao, era, tipo, data_estimada, personagens, tags
              FROM timeline_events
              WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    // -- Shared helpers ------------------------------------------------------

    /// All rows of one of the entity-shaped side tables.
    async fn list_table(&self, table: &str) -> Result<Vec<MythEntity>, DbError> {
        // `table` is always one of two compile-time constants, never input.
        let sql = format!(
            "SELECT id, nome, categoria, descricao, dominios, poderes, simbolos, tags
             FROM {table}
             ORDER BY nome"
        );
        let rows = sqlx::query_as::<_, EntityRow>(&sql)
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// First substring match in one of the entity-shaped side tables.
    async fn find_in_table(&self, table: &str, nome: &str) -> Result<Option<MythEntity>, DbError> {
        let sql = format!(
            "SELECT id, nome, categoria, descricao, dominios, poderes, simbolos, tags
             FROM {table}
             WHERE nome ILIKE $1
             ORDER BY nome
             LIMIT 1"
        );
        let row = sqlx::query_as::<_, EntityRow>(&sql)
            .bind(wrap_pattern(nome))
            .fetch_optional(self.pool)
            .await?;

        Ok(row.map(Into::into))
    }
}

/// Wrap a user-supplied name in `%` wildcards for an `ILIKE` pattern.
fn wrap_pattern(nome: &str) -> String {
    format!("%{nome}%")
}

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A row from any of the three entity-shaped tables.
#[derive(Debug, Clone, sqlx::FromRow)]
struct EntityRow {
    id: String,
    nome: String,
    categoria: String,
    descricao: String,
    dominios: Vec<String>,
    poderes: Vec<String>,
    simbolos: Vec<String>,
    tags: Vec<String>,
}

impl From<EntityRow> for MythEntity {
    fn from(row: EntityRow) -> Self {
        Self {
            id: row.id,
            nome: row.nome,
            categoria: row.categoria,
            descricao: row.descricao,
            dominios: row.dominios,
            poderes: row.poderes,
            simbolos: row.simbolos,
            tags: row.tags,
        }
    }
}

/// A full row from the `blog_posts` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct BlogPostRow {
    id: String,
    titulo: String,
    resumo: String,
    conteudo: String,
    data_publicacao: NaiveDate,
    tags: Vec<String>,
    livro_recomendado: Option<String>,
}

impl From<BlogPostRow> for BlogPost {
    fn from(row: BlogPostRow) -> Self {
        Self {
            id: row.id,
            titulo: row.titulo,
            resumo: row.resumo,
            conteudo: row.conteudo,
            data_publicacao: row.data_publicacao,
            tags: row.tags,
            livro_recomendado: row.livro_recomendado,
        }
    }
}

/// A summary row from the `blog_posts` table (no body).
#[derive(Debug, Clone, sqlx::FromRow)]
struct BlogSummaryRow {
    id: String,
    titulo: String,
    resumo: String,
    data_publicacao: NaiveDate,
    tags: Vec<String>,
    livro_recomendado: Option<String>,
}

impl From<BlogSummaryRow> for BlogPostSummary {
    fn from(row: BlogSummaryRow) -> Self {
        Self {
            id: row.id,
            titulo: row.titulo,
            resumo: row.resumo,
            data_publicacao: row.data_publicacao,
            tags: row.tags,
            livro_recomendado: row.livro_recomendado,
        }
    }
}

/// A row from the `timeline_events` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct TimelineRow {
    id: String,
    nome: String,
    descricao: String,
    era: Option<String>,
    tipo: Option<String>,
    data_estimada: Option<String>,
    personagens: Vec<String>,
    tags: Vec<String>,
}

impl From<TimelineRow> for TimelineEvent {
    fn from(row: TimelineRow) -> Self {
        Self {
            id: row.id,
            nome: row.nome,
            descricao: row.descricao,
            era: row.era,
            tipo: row.tipo,
            data_estimada: row.data_estimada,
            personagens: row.personagens,
            tags: row.tags,
        }
    }
}
