use crate::{
    common::validate_page,
    errors::ServiceError,
    queries::{
        inventory_dashboard_queries::{
            GetGroupedInventoryQuery, GetInventoryDashboardQuery, GroupBy,
            GroupedInventoryPage, InventoryDashboardFilters, InventoryDashboardPage,
        },
        summary_queries::{DashboardSummary, GetDashboardSummaryQuery},
        transaction_dashboard_queries::{
            GetTransactionsDashboardQuery, TransactionDashboardFilters, TransactionDashboardPage,
        },
        Query,
    },
    tracing::with_metrics,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::instrument;

/// Read-side facade over the dashboard query objects.
#[derive(Clone)]
pub struct DashboardService {
    db_pool: Arc<DatabaseConnection>,
}

impl DashboardService {
    pub fn new(db_pool: Arc<DatabaseConnection>) -> Self {
        Self { db_pool }
    }

    async fn run<Q: Query>(
        &self,
        operation: &'static str,
        query: Q,
    ) -> Result<Q::Result, ServiceError> {
        with_metrics(operation, query.execute(&self.db_pool)).await
    }

    /// Inventory grouped by `group_by`, ranked by available stock.
    #[instrument(skip(self, filters))]
    pub async fn grouped_inventory(
        &self,
        filters: InventoryDashboardFilters,
        group_by: GroupBy,
        page: u64,
        size: u64,
    ) -> Result<GroupedInventoryPage, ServiceError> {
        validate_page(page, size)?;
        self.run(
            "grouped_inventory",
            GetGroupedInventoryQuery {
                filters,
                group_by,
                page,
                size,
            },
        )
        .await
    }

    /// Import, transfer and shipment requests merged newest first.
    #[instrument(skip(self, filters))]
    pub async fn transactions(
        &self,
        filters: TransactionDashboardFilters,
        page: u64,
        size: u64,
    ) -> Result<TransactionDashboardPage, ServiceError> {
        validate_page(page, size)?;
        self.run(
            "transactions_dashboard",
            GetTransactionsDashboardQuery {
                filters,
                page,
                size,
            },
        )
        .await
    }

    #[instrument(skip(self, filters))]
    pub async fn inventory_dashboard(
        &self,
        filters: InventoryDashboardFilters,
        page: u64,
        size: u64,
    ) -> Result<InventoryDashboardPage, ServiceError> {
        validate_page(page, size)?;
        self.run(
            "inventory_dashboard",
            GetInventoryDashboardQuery {
                filters,
                page,
                size,
            },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<DashboardSummary, ServiceError> {
        self.run("dashboard_summary", GetDashboardSummaryQuery).await
    }
}
