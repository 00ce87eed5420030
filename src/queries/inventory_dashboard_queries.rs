use super::Query;
use crate::{
    common::{format_timestamp, non_blank, PaginationMeta},
    entities::{
        area, container_inventory, inventory, location, warehouse_import_container,
        warehouse_import_requirement,
    },
    errors::ServiceError,
};
use async_graphql::SimpleObject;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::{
        Alias, Expr, Func, IntoColumnRef, NullOrdering, Order, Query as SelectQuery, SimpleExpr,
    },
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, FromQueryResult, IntoSimpleExpr,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationDef, RelationTrait,
    Select,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

/// Label used when the grouping column is NULL for a group.
pub const UNKNOWN_GROUP: &str = "Unknown";

/// Row filters shared by the flat and grouped inventory dashboards.
/// Blank strings count as "not set".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryDashboardFilters {
    pub name: Option<String>,
    pub client_id: Option<i32>,
    pub serial_pallet: Option<String>,
    pub identifier: Option<String>,
    pub po: Option<String>,
    pub location_id: Option<i32>,
    pub area_id: Option<i32>,
    /// `available`, `unavailable`, or a fragment of the computed status
    pub status: Option<String>,
    pub updated_by: Option<String>,
}

impl InventoryDashboardFilters {
    fn condition(&self) -> Condition {
        let mut cond = Condition::all();

        if let Some(name) = non_blank(&self.name) {
            cond = cond.add(inventory::Column::Name.contains(name));
        }
        if let Some(client_id) = self.client_id {
            cond = cond.add(warehouse_import_requirement::Column::ClientId.eq(client_id));
        }
        if let Some(serial) = non_blank(&self.serial_pallet) {
            cond = cond.add(inventory::Column::SerialPallet.contains(serial));
        }
        if let Some(identifier) = non_blank(&self.identifier) {
            cond = cond.add(inventory::Column::Identifier.contains(identifier));
        }
        if let Some(po) = non_blank(&self.po) {
            cond = cond.add(inventory::Column::Po.contains(po));
        }
        if let Some(location_id) = self.location_id {
            cond = cond.add(inventory::Column::LocationId.eq(location_id));
        }
        if let Some(area_id) = self.area_id {
            cond = cond.add(location::Column::AreaId.eq(area_id));
        }
        if let Some(status) = non_blank(&self.status) {
            cond = cond.add(status_condition(status));
        }
        if let Some(updated_by) = non_blank(&self.updated_by) {
            cond = cond.add(inventory::Column::UpdatedBy.contains(updated_by));
        }

        cond
    }
}

fn status_condition(status: &str) -> SimpleExpr {
    if status.eq_ignore_ascii_case("available") {
        inventory::Column::AvailableQuantity.gt(0)
    } else if status.eq_ignore_ascii_case("unavailable") {
        inventory::Column::AvailableQuantity.eq(0)
    } else {
        inventory::Column::CalculatedStatus.contains(status)
    }
}

/// Joins only the earliest container scan of each identifier, so an item
/// scanned into several containers still yields one row.
fn first_container_scan() -> RelationDef {
    inventory::Relation::ContainerInventories
        .def()
        .on_condition(|outer, scan| {
            let earlier = Alias::new("earlier_scan");
            let first_id = SelectQuery::select()
                .expr(Expr::col((earlier.clone(), container_inventory::Column::Id)).min())
                .from_as(container_inventory::Entity, earlier.clone())
                .and_where(
                    Expr::col((earlier, container_inventory::Column::InventoryIdentifier))
                        .equals((outer, inventory::Column::Identifier)),
                )
                .to_owned();

            Condition::all()
                .add(Expr::col((scan, container_inventory::Column::Id)).in_subquery(first_id))
        })
}

/// Inventory left-joined to its location/area and to the import chain that
/// carries client context. Inventory that never came through an import keeps
/// NULL requirement columns.
fn base_select(filters: &InventoryDashboardFilters) -> Select<inventory::Entity> {
    inventory::Entity::find()
        .join(JoinType::LeftJoin, inventory::Relation::Location.def())
        .join(JoinType::LeftJoin, location::Relation::Area.def())
        .join(JoinType::LeftJoin, first_container_scan())
        .join(
            JoinType::LeftJoin,
            container_inventory::Relation::ImportContainer.def(),
        )
        .join(
            JoinType::LeftJoin,
            warehouse_import_container::Relation::ImportRequirement.def(),
        )
        .filter(filters.condition())
}

/// Dimension the grouped dashboard aggregates over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    #[default]
    Area,
    Po,
    Client,
    SapCode,
}

/// Accepted `group_by` spellings.
const GROUP_DIMENSIONS: [(&str, GroupBy); 4] = [
    ("area", GroupBy::Area),
    ("po", GroupBy::Po),
    ("client", GroupBy::Client),
    ("sap_code", GroupBy::SapCode),
];

impl GroupBy {
    /// Resolves a caller-supplied dimension. Missing or unrecognized values
    /// group by area.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(wanted) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
            return GroupBy::default();
        };

        GROUP_DIMENSIONS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
            .map(|(_, dimension)| *dimension)
            .unwrap_or_else(|| {
                debug!(group_by = wanted, "Unrecognized group_by, grouping by area");
                GroupBy::default()
            })
    }

    /// Field name reported as `group_key`.
    pub fn group_key(self) -> &'static str {
        match self {
            GroupBy::Area => "area_code",
            GroupBy::Po => "po",
            GroupBy::Client => "client_id",
            GroupBy::SapCode => "sap_code",
        }
    }

    fn column(self) -> SimpleExpr {
        match self {
            GroupBy::Area => area::Column::Code.into_simple_expr(),
            GroupBy::Po => inventory::Column::Po.into_simple_expr(),
            GroupBy::Client => warehouse_import_requirement::Column::ClientId.into_simple_expr(),
            GroupBy::SapCode => inventory::Column::SapCode.into_simple_expr(),
        }
    }
}

fn count_distinct(column: impl IntoSimpleExpr) -> SimpleExpr {
    Func::count_distinct(column.into_simple_expr()).into()
}

/// Reference to a select-list alias, for ORDER BY.
fn output_column(alias: &str) -> SimpleExpr {
    SimpleExpr::Column(Alias::new(alias).into_column_ref())
}

/// One aggregated bucket of the grouped inventory dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, SimpleObject)]
pub struct InventoryGroupRow {
    /// Dimension name, e.g. `area_code`
    #[schema(example = "area_code")]
    pub group_key: String,
    /// Stringified group value, `Unknown` when NULL
    #[schema(example = "WH-A")]
    pub group_value: String,
    pub total_available_quantity: i64,
    pub total_initial_quantity: i64,
    pub item_count: i64,
    /// Distinct SAP codes in the group
    pub total_unique_products: i64,
    pub total_clients: i64,
    pub total_pos: i64,
    pub total_pallets: i64,
    /// Distinct inventory identifiers
    pub total_containers: i64,
    pub total_locations: i64,
    pub last_updated: Option<String>,
    pub last_received: Option<String>,
}

#[derive(Debug, FromQueryResult)]
struct GroupAggregate {
    group_value: Option<String>,
    total_available_quantity: Option<i64>,
    total_initial_quantity: Option<i64>,
    item_count: i64,
    total_unique_products: i64,
    total_clients: i64,
    total_pos: i64,
    total_pallets: i64,
    total_containers: i64,
    total_locations: i64,
    last_updated: Option<NaiveDateTime>,
    last_received: Option<NaiveDateTime>,
}

impl GroupAggregate {
    fn into_row(self, group_by: GroupBy) -> InventoryGroupRow {
        InventoryGroupRow {
            group_key: group_by.group_key().to_string(),
            group_value: self
                .group_value
                .unwrap_or_else(|| UNKNOWN_GROUP.to_string()),
            total_available_quantity: self.total_available_quantity.unwrap_or(0),
            total_initial_quantity: self.total_initial_quantity.unwrap_or(0),
            item_count: self.item_count,
            total_unique_products: self.total_unique_products,
            total_clients: self.total_clients,
            total_pos: self.total_pos,
            total_pallets: self.total_pallets,
            total_containers: self.total_containers,
            total_locations: self.total_locations,
            last_updated: self.last_updated.map(format_timestamp),
            last_received: self.last_received.map(format_timestamp),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, SimpleObject)]
pub struct GroupedInventoryPage {
    pub data: Vec<InventoryGroupRow>,
    pub meta: PaginationMeta,
}

/// Groups filtered inventory by one dimension, drops groups without stock
/// and ranks the rest by available quantity.
#[derive(Debug, Clone)]
pub struct GetGroupedInventoryQuery {
    pub filters: InventoryDashboardFilters,
    pub group_by: GroupBy,
    pub page: u64,
    pub size: u64,
}

#[async_trait]
impl Query for GetGroupedInventoryQuery {
    type Result = GroupedInventoryPage;

    async fn execute(&self, db_pool: &DatabaseConnection) -> Result<Self::Result, ServiceError> {
        let group_column = self.group_by.column();
        let available =
            Expr::col((inventory::Entity, inventory::Column::AvailableQuantity)).sum();

        let paginator = base_select(&self.filters)
            .select_only()
            .column_as(
                Expr::expr(group_column.clone()).cast_as(Alias::new("TEXT")),
                "group_value",
            )
            .column_as(available.clone(), "total_available_quantity")
            .column_as(
                Expr::col((inventory::Entity, inventory::Column::InitialQuantity)).sum(),
                "total_initial_quantity",
            )
            .column_as(
                Expr::col((inventory::Entity, inventory::Column::Id)).count(),
                "item_count",
            )
            .column_as(count_distinct(inventory::Column::SapCode), "total_unique_products")
            .column_as(
                count_distinct(warehouse_import_requirement::Column::ClientId),
                "total_clients",
            )
            .column_as(count_distinct(inventory::Column::Po), "total_pos")
            .column_as(count_distinct(inventory::Column::SerialPallet), "total_pallets")
            .column_as(count_distinct(inventory::Column::Identifier), "total_containers")
            .column_as(count_distinct(inventory::Column::LocationId), "total_locations")
            .column_as(
                Expr::col((inventory::Entity, inventory::Column::UpdatedDate)).max(),
                "last_updated",
            )
            .column_as(
                Expr::col((inventory::Entity, inventory::Column::ReceivedDate)).max(),
                "last_received",
            )
            .group_by(group_column)
            .having(Expr::expr(available).gt(0))
            .order_by_desc(output_column("total_available_quantity"))
            .order_by_asc(output_column("group_value"))
            .into_model::<GroupAggregate>()
            .paginate(db_pool, self.size);

        let total_items = paginator.num_items().await?;
        let aggregates = paginator.fetch_page(self.page.saturating_sub(1)).await?;

        debug!(
            group_by = self.group_by.group_key(),
            page = self.page,
            size = self.size,
            total_groups = total_items,
            "Grouped inventory dashboard computed"
        );

        Ok(GroupedInventoryPage {
            data: aggregates
                .into_iter()
                .map(|aggregate| aggregate.into_row(self.group_by))
                .collect(),
            meta: PaginationMeta::new(self.page, self.size, total_items),
        })
    }
}

/// One inventory record as shown on the flat dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, SimpleObject)]
pub struct InventoryDashboardRow {
    pub id: i32,
    pub name: Option<String>,
    pub client_id: Option<i32>,
    pub serial_pallet: Option<String>,
    pub identifier: String,
    pub po: Option<String>,
    pub available_quantity: i32,
    pub initial_quantity: i32,
    pub location_id: Option<i32>,
    pub area_code: Option<String>,
    pub area_name: Option<String>,
    /// Stored computed status, else derived from the available quantity
    #[schema(example = "available")]
    pub status: String,
    pub updated_by: Option<String>,
    pub received_date: Option<String>,
    pub updated_date: Option<String>,
}

#[derive(Debug, FromQueryResult)]
struct InventoryDashboardRecord {
    id: i32,
    name: Option<String>,
    client_id: Option<i32>,
    serial_pallet: Option<String>,
    identifier: String,
    po: Option<String>,
    available_quantity: i32,
    initial_quantity: i32,
    location_id: Option<i32>,
    area_code: Option<String>,
    area_name: Option<String>,
    calculated_status: Option<String>,
    updated_by: Option<String>,
    received_date: Option<NaiveDateTime>,
    updated_date: Option<NaiveDateTime>,
}

impl From<InventoryDashboardRecord> for InventoryDashboardRow {
    fn from(record: InventoryDashboardRecord) -> Self {
        let status = record
            .calculated_status
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| {
                if record.available_quantity > 0 {
                    "available".to_string()
                } else {
                    "unavailable".to_string()
                }
            });

        Self {
            id: record.id,
            name: record.name,
            client_id: record.client_id,
            serial_pallet: record.serial_pallet,
            identifier: record.identifier,
            po: record.po,
            available_quantity: record.available_quantity,
            initial_quantity: record.initial_quantity,
            location_id: record.location_id,
            area_code: record.area_code,
            area_name: record.area_name,
            status,
            updated_by: record.updated_by,
            received_date: record.received_date.map(format_timestamp),
            updated_date: record.updated_date.map(format_timestamp),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, SimpleObject)]
pub struct InventoryDashboardPage {
    pub data: Vec<InventoryDashboardRow>,
    pub meta: PaginationMeta,
}

/// Flat, newest-first listing of inventory with area and client context.
#[derive(Debug, Clone)]
pub struct GetInventoryDashboardQuery {
    pub filters: InventoryDashboardFilters,
    pub page: u64,
    pub size: u64,
}

#[async_trait]
impl Query for GetInventoryDashboardQuery {
    type Result = InventoryDashboardPage;

    async fn execute(&self, db_pool: &DatabaseConnection) -> Result<Self::Result, ServiceError> {
        let paginator = base_select(&self.filters)
            .select_only()
            .columns([
                inventory::Column::Id,
                inventory::Column::Name,
                inventory::Column::SerialPallet,
                inventory::Column::Identifier,
                inventory::Column::Po,
                inventory::Column::AvailableQuantity,
                inventory::Column::InitialQuantity,
                inventory::Column::LocationId,
                inventory::Column::CalculatedStatus,
                inventory::Column::UpdatedBy,
                inventory::Column::ReceivedDate,
                inventory::Column::UpdatedDate,
            ])
            .column_as(warehouse_import_requirement::Column::ClientId, "client_id")
            .column_as(area::Column::Code, "area_code")
            .column_as(area::Column::Name, "area_name")
            .order_by_with_nulls(
                inventory::Column::UpdatedDate,
                Order::Desc,
                NullOrdering::Last,
            )
            .order_by_asc(inventory::Column::Id)
            .into_model::<InventoryDashboardRecord>()
            .paginate(db_pool, self.size);

        let total_items = paginator.num_items().await?;
        let records = paginator.fetch_page(self.page.saturating_sub(1)).await?;

        debug!(
            page = self.page,
            size = self.size,
            total_items,
            "Inventory dashboard listed"
        );

        Ok(InventoryDashboardPage {
            data: records.into_iter().map(InventoryDashboardRow::from).collect(),
            meta: PaginationMeta::new(self.page, self.size, total_items),
        })
    }
}
