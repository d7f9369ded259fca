//! Base repository traits shared by every entity repository.
//!
//! Reads hand back lazy SeaORM `Select`s that run only when awaited
//! against the context connection. Writes are staged on the shared
//! `RepositoryContext` and hit the database on save.

use async_trait::async_trait;
use sea_orm::{
    sea_query::IntoCondition, ActiveModelBehavior, ActiveModelTrait, DatabaseConnection,
    EntityTrait, IntoActiveModel, QueryFilter, Select,
};

use super::context::RepositoryContext;

/// Read operations (Query)
pub trait ReadRepository<E>: Send + Sync
where
    E: EntityTrait,
{
    /// Shared context of the current scope
    fn context(&self) -> &RepositoryContext;

    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection {
        self.context().connection()
    }

    /// All rows of `E`, not yet executed
    fn find_all(&self) -> Select<E> {
        E::find()
    }

    /// Rows of `E` matching `condition`, not yet executed
    fn find_by_condition<C>(&self, condition: C) -> Select<E>
    where
        C: IntoCondition,
    {
        E::find().filter(condition)
    }
}

/// Write operations (Command), staged until the wrapper saves
#[async_trait]
pub trait WriteRepository<E, A>: ReadRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    /// Stage an insert
    async fn create(&self, model: A) {
        self.context()
            .stage(move |txn| {
                Box::pin(async move { ActiveModelTrait::insert(model, txn).await.map(|_| ()) })
            })
            .await;
    }

    /// Stage an update of every set column
    async fn update(&self, model: A) {
        self.context()
            .stage(move |txn| {
                Box::pin(async move { ActiveModelTrait::update(model, txn).await.map(|_| ()) })
            })
            .await;
    }

    /// Stage a delete by primary key
    async fn delete(&self, model: A) {
        self.context()
            .stage(move |txn| {
                Box::pin(async move { ActiveModelTrait::delete(model, txn).await.map(|_| ()) })
            })
            .await;
    }
}
