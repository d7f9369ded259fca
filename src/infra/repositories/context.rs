//! Shared repository context - one per request scope.
//!
//! Holds the connection every repository in the scope reads through,
//! plus the list of mutations staged by `create`/`update`/`delete`
//! that have not been saved yet.

use futures::future::BoxFuture;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use tokio::sync::Mutex;

use crate::errors::AppResult;

/// A staged mutation, replayed against the save transaction.
pub type PendingChange = Box<
    dyn for<'a> FnOnce(&'a DatabaseTransaction) -> BoxFuture<'a, Result<(), DbErr>> + Send,
>;

/// Connection handle plus staged changes for one unit of work.
pub struct RepositoryContext {
    db: DatabaseConnection,
    pending: Mutex<Vec<PendingChange>>,
}

impl RepositoryContext {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Connection used for reads
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Queue a mutation until the next `save_changes`
    pub async fn stage<F>(&self, change: F)
    where
        F: for<'a> FnOnce(&'a DatabaseTransaction) -> BoxFuture<'a, Result<(), DbErr>>
            + Send
            + 'static,
    {
        self.pending.lock().await.push(Box::new(change));
    }

    /// Number of staged, unsaved mutations
    pub async fn pending_count(&self) -> usize {
        self.pending.lock().await.len()
    }

    /// Apply every staged mutation in one transaction.
    ///
    /// Changes run in staging order. The first failure rolls the whole
    /// transaction back and is returned; staged changes are consumed
    /// either way. Returns the number of applied changes.
    pub async fn save_changes(&self) -> AppResult<usize> {
        let pending = std::mem::take(&mut *self.pending.lock().await);
        if pending.is_empty() {
            return Ok(0);
        }

        let count = pending.len();
        let txn = self.db.begin().await?;

        for change in pending {
            if let Err(e) = change(&txn).await {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                return Err(e.into());
            }
        }

        txn.commit().await?;
        tracing::debug!("Saved {} staged change(s)", count);

        Ok(count)
    }
}
