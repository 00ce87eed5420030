use super::Query;
use crate::{
    common::{non_blank, page_window, parse_date_filter, DateBound, PaginationMeta},
    entities::{internal_transfer_request, outbound_shipment_request, warehouse_import_requirement},
    errors::ServiceError,
};
use async_graphql::{Enum, SimpleObject};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::debug;
use utoipa::ToSchema;

/// Source workflow of a dashboard transaction.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Enum,
    ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum TransactionType {
    /// Warehouse import requirement
    Import,
    /// Internal warehouse transfer request (IWTR)
    Transfer,
    /// Outbound shipment request (OSR)
    Export,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionDashboardFilters {
    /// Restrict to one source; `None` merges all three
    pub transaction_type: Option<TransactionType>,
    pub request_code: Option<String>,
    /// Import branch; import rows only
    pub industry: Option<String>,
    /// Import production team; import rows only
    pub production_team: Option<String>,
    /// Source area id; transfer and export rows only
    pub from_warehouse: Option<i32>,
    /// Destination area id; transfer and export rows only
    pub to_warehouse: Option<i32>,
    pub status: Option<bool>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub updated_by: Option<String>,
}

impl TransactionDashboardFilters {
    fn includes(&self, source: TransactionType) -> bool {
        self.transaction_type.map_or(true, |wanted| wanted == source)
    }
}

/// Normalized row of the unified transaction dashboard. Fields a source
/// does not carry are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, SimpleObject)]
pub struct TransactionRow {
    pub id: i32,
    pub transaction_type: TransactionType,
    pub request_code: Option<String>,
    pub from_warehouse: Option<i32>,
    pub to_warehouse: Option<i32>,
    /// The source's last-updated timestamp; sources keep no creation time
    pub created_date: Option<NaiveDateTime>,
    pub status: bool,
    pub updated_by: Option<String>,
    pub updated_date: Option<NaiveDateTime>,
    /// Industry (ngành) of an import requirement
    pub branch: Option<String>,
    pub production_team: Option<String>,
    pub po_number: Option<String>,
    pub client_id: Option<i32>,
    pub lot_number: Option<String>,
    pub don_vi_linh: Option<String>,
    pub don_vi_nhan: Option<String>,
    pub note: Option<String>,
}

impl From<warehouse_import_requirement::Model> for TransactionRow {
    fn from(model: warehouse_import_requirement::Model) -> Self {
        Self {
            id: model.id,
            transaction_type: TransactionType::Import,
            request_code: model.wo_code,
            from_warehouse: None,
            to_warehouse: None,
            created_date: model.updated_date,
            status: model.status,
            updated_by: model.updated_by,
            updated_date: model.updated_date,
            branch: model.branch,
            production_team: model.production_team,
            po_number: model.po_number,
            client_id: model.client_id,
            lot_number: model.lot_number,
            don_vi_linh: None,
            don_vi_nhan: None,
            note: model.note,
        }
    }
}

impl From<internal_transfer_request::Model> for TransactionRow {
    fn from(model: internal_transfer_request::Model) -> Self {
        Self {
            id: model.id,
            transaction_type: TransactionType::Transfer,
            request_code: model.ma_yc_cknb,
            from_warehouse: model.tu_kho,
            to_warehouse: model.den_kho,
            created_date: model.updated_date,
            status: model.status,
            updated_by: model.updated_by,
            updated_date: model.updated_date,
            branch: None,
            production_team: None,
            po_number: None,
            client_id: None,
            lot_number: None,
            don_vi_linh: model.don_vi_linh,
            don_vi_nhan: model.don_vi_nhan,
            note: model.note,
        }
    }
}

impl From<outbound_shipment_request::Model> for TransactionRow {
    fn from(model: outbound_shipment_request::Model) -> Self {
        Self {
            id: model.id,
            transaction_type: TransactionType::Export,
            request_code: model.ma_yc_xk,
            from_warehouse: model.kho_xuat,
            to_warehouse: model.xuat_toi,
            created_date: model.updated_date,
            status: model.status,
            updated_by: model.updated_by,
            updated_date: model.updated_date,
            branch: None,
            production_team: None,
            po_number: None,
            client_id: None,
            lot_number: None,
            don_vi_linh: model.don_vi_linh,
            don_vi_nhan: model.don_vi_nhan,
            note: model.note,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, SimpleObject)]
pub struct TransactionDashboardPage {
    pub data: Vec<TransactionRow>,
    pub meta: PaginationMeta,
}

/// Columns every request table has under its own name.
struct SourceColumns<C> {
    request_code: C,
    status: C,
    updated_by: C,
    updated_date: C,
    deleted_at: C,
}

#[derive(Debug, Clone, Copy, Default)]
struct DateRange {
    from: Option<NaiveDateTime>,
    to: Option<NaiveDateTime>,
}

/// Filters applied identically to all three sources, soft-delete included.
fn shared_condition<C: ColumnTrait>(
    columns: SourceColumns<C>,
    filters: &TransactionDashboardFilters,
    range: DateRange,
) -> Condition {
    let mut cond = Condition::all().add(columns.deleted_at.is_null());

    if let Some(code) = non_blank(&filters.request_code) {
        cond = cond.add(columns.request_code.contains(code));
    }
    if let Some(status) = filters.status {
        cond = cond.add(columns.status.eq(status));
    }
    if let Some(updated_by) = non_blank(&filters.updated_by) {
        cond = cond.add(columns.updated_by.contains(updated_by));
    }
    if let Some(from) = range.from {
        cond = cond.add(columns.updated_date.gte(from));
    }
    if let Some(to) = range.to {
        cond = cond.add(columns.updated_date.lte(to));
    }

    cond
}

async fn fetch_imports(
    db: &DatabaseConnection,
    filters: &TransactionDashboardFilters,
    range: DateRange,
) -> Result<Vec<TransactionRow>, ServiceError> {
    use warehouse_import_requirement::{Column, Entity};

    if !filters.includes(TransactionType::Import) {
        return Ok(Vec::new());
    }

    let mut cond = shared_condition(
        SourceColumns {
            request_code: Column::WoCode,
            status: Column::Status,
            updated_by: Column::UpdatedBy,
            updated_date: Column::UpdatedDate,
            deleted_at: Column::DeletedAt,
        },
        filters,
        range,
    );
    if let Some(industry) = non_blank(&filters.industry) {
        cond = cond.add(Column::Branch.contains(industry));
    }
    if let Some(team) = non_blank(&filters.production_team) {
        cond = cond.add(Column::ProductionTeam.contains(team));
    }

    let models = Entity::find()
        .filter(cond)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(models.into_iter().map(TransactionRow::from).collect())
}

async fn fetch_transfers(
    db: &DatabaseConnection,
    filters: &TransactionDashboardFilters,
    range: DateRange,
) -> Result<Vec<TransactionRow>, ServiceError> {
    use internal_transfer_request::{Column, Entity};

    if !filters.includes(TransactionType::Transfer) {
        return Ok(Vec::new());
    }

    let mut cond = shared_condition(
        SourceColumns {
            request_code: Column::MaYcCknb,
            status: Column::Status,
            updated_by: Column::UpdatedBy,
            updated_date: Column::UpdatedDate,
            deleted_at: Column::DeletedAt,
        },
        filters,
        range,
    );
    if let Some(from) = filters.from_warehouse {
        cond = cond.add(Column::TuKho.eq(from));
    }
    if let Some(to) = filters.to_warehouse {
        cond = cond.add(Column::DenKho.eq(to));
    }

    let models = Entity::find()
        .filter(cond)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(models.into_iter().map(TransactionRow::from).collect())
}

async fn fetch_exports(
    db: &DatabaseConnection,
    filters: &TransactionDashboardFilters,
    range: DateRange,
) -> Result<Vec<TransactionRow>, ServiceError> {
    use outbound_shipment_request::{Column, Entity};

    if !filters.includes(TransactionType::Export) {
        return Ok(Vec::new());
    }

    let mut cond = shared_condition(
        SourceColumns {
            request_code: Column::MaYcXk,
            status: Column::Status,
            updated_by: Column::UpdatedBy,
            updated_date: Column::UpdatedDate,
            deleted_at: Column::DeletedAt,
        },
        filters,
        range,
    );
    if let Some(from) = filters.from_warehouse {
        cond = cond.add(Column::KhoXuat.eq(from));
    }
    if let Some(to) = filters.to_warehouse {
        cond = cond.add(Column::XuatToi.eq(to));
    }

    let models = Entity::find()
        .filter(cond)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(models.into_iter().map(TransactionRow::from).collect())
}

/// Newest first; rows without a date sort as the oldest. The sort is
/// stable, so ties keep import, transfer, export order.
fn sort_newest_first(rows: &mut [TransactionRow]) {
    rows.sort_by(|a, b| b.created_date.cmp(&a.created_date));
}

/// Merges import, transfer and shipment requests into one page ordered by
/// last update.
#[derive(Debug, Clone)]
pub struct GetTransactionsDashboardQuery {
    pub filters: TransactionDashboardFilters,
    pub page: u64,
    pub size: u64,
}

#[async_trait]
impl Query for GetTransactionsDashboardQuery {
    type Result = TransactionDashboardPage;

    async fn execute(&self, db_pool: &DatabaseConnection) -> Result<Self::Result, ServiceError> {
        let range = DateRange {
            from: parse_date_filter(self.filters.from_date.as_deref(), DateBound::Start),
            to: parse_date_filter(self.filters.to_date.as_deref(), DateBound::End),
        };

        let (imports, transfers, exports) = tokio::try_join!(
            fetch_imports(db_pool, &self.filters, range),
            fetch_transfers(db_pool, &self.filters, range),
            fetch_exports(db_pool, &self.filters, range),
        )?;

        debug!(
            imports = imports.len(),
            transfers = transfers.len(),
            exports = exports.len(),
            "Transaction sources fetched"
        );

        let mut rows = imports;
        rows.extend(transfers);
        rows.extend(exports);
        sort_newest_first(&mut rows);

        let total_items = rows.len() as u64;
        Ok(TransactionDashboardPage {
            data: page_window(rows, self.page, self.size),
            meta: PaginationMeta::new(self.page, self.size, total_items),
        })
    }
}
