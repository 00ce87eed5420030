use super::Query;
use crate::{
    entities::{
        area, internal_transfer_request, inventory, location, outbound_shipment_request,
        warehouse_import_requirement,
    },
    errors::ServiceError,
};
use async_graphql::SimpleObject;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Headline counters for the warehouse landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, SimpleObject)]
pub struct DashboardSummary {
    pub total_areas: u64,
    pub total_locations: u64,
    pub total_inventory_items: u64,
    /// Import requirements not yet completed
    pub active_import_requirements: u64,
    pub pending_iwtr: u64,
    pub pending_osr: u64,
}

/// Counts storage entities and open requests; soft-deleted requests are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetDashboardSummaryQuery;

#[async_trait]
impl Query for GetDashboardSummaryQuery {
    type Result = DashboardSummary;

    async fn execute(&self, db_pool: &DatabaseConnection) -> Result<Self::Result, ServiceError> {
        let (
            total_areas,
            total_locations,
            total_inventory_items,
            active_import_requirements,
            pending_iwtr,
            pending_osr,
        ) = tokio::try_join!(
            area::Entity::find().count(db_pool),
            location::Entity::find().count(db_pool),
            inventory::Entity::find().count(db_pool),
            warehouse_import_requirement::Entity::find()
                .filter(warehouse_import_requirement::Column::DeletedAt.is_null())
                .filter(warehouse_import_requirement::Column::Status.eq(false))
                .count(db_pool),
            internal_transfer_request::Entity::find()
                .filter(internal_transfer_request::Column::DeletedAt.is_null())
                .filter(internal_transfer_request::Column::Status.eq(false))
                .count(db_pool),
            outbound_shipment_request::Entity::find()
                .filter(outbound_shipment_request::Column::DeletedAt.is_null())
                .filter(outbound_shipment_request::Column::Status.eq(false))
                .count(db_pool),
        )?;

        Ok(DashboardSummary {
            total_areas,
            total_locations,
            total_inventory_items,
            active_import_requirements,
            pending_iwtr,
            pending_osr,
        })
    }
}
