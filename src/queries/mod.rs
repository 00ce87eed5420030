use crate::errors::ServiceError;
use async_trait::async_trait;
use sea_orm::DatabaseConnection;

pub mod inventory_dashboard_queries;
pub mod summary_queries;
pub mod transaction_dashboard_queries;

/// A read-only query object executed against the shared connection pool.
#[async_trait]
pub trait Query: Send + Sync {
    type Result: Send + Sync;

    async fn execute(&self, db_pool: &DatabaseConnection) -> Result<Self::Result, ServiceError>;
}
