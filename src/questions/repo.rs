use async_trait::async_trait;
use sqlx::PgPool;

use super::QuestionSet;

/// The `questions` collection. Read-only from this service.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// The document with the numerically highest `version`, if any.
    async fn latest(&self) -> anyhow::Result<Option<QuestionSet>>;
}

#[derive(Clone)]
pub struct PgQuestionStore {
    db: PgPool,
}

impl PgQuestionStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    async fn latest(&self) -> anyhow::Result<Option<QuestionSet>> {
        let set = sqlx::query_as::<_, QuestionSet>(
            r#"
            SELECT version, document
            FROM questions
            ORDER BY version DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.db)
        .await?;
        Ok(set)
    }
}

#[cfg(test)]
pub mod memory {
    use super::*;

    #[derive(Default)]
    pub struct MemoryQuestionStore {
        pub sets: Vec<QuestionSet>,
        pub fail: bool,
    }

    #[async_trait]
    impl QuestionStore for MemoryQuestionStore {
        async fn latest(&self) -> anyhow::Result<Option<QuestionSet>> {
            if self.fail {
                anyhow::bail!("store unavailable");
            }
            Ok(self.sets.iter().max_by_key(|s| s.version).cloned())
        }
    }
}
