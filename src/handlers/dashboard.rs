use crate::{
    config::AppConfig,
    errors::ServiceError,
    queries::{
        inventory_dashboard_queries::{
            GroupBy, GroupedInventoryPage, InventoryDashboardFilters, InventoryDashboardPage,
        },
        summary_queries::DashboardSummary,
        transaction_dashboard_queries::{
            TransactionDashboardFilters, TransactionDashboardPage, TransactionType,
        },
    },
    AppState,
};
use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Query parameters shared by both inventory dashboards.
#[derive(Debug, Default, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InventoryDashboardParams {
    /// 1-based page number
    #[validate(range(min = 1))]
    pub page: Option<u64>,
    /// Page size, at most 100
    #[validate(range(min = 1, max = 100))]
    pub size: Option<u64>,
    /// One of `area`, `po`, `client`, `sap_code`; grouped endpoint only
    pub group_by: Option<String>,
    pub name: Option<String>,
    pub client_id: Option<i32>,
    pub serial_pallet: Option<String>,
    pub identifier: Option<String>,
    pub po: Option<String>,
    pub location_id: Option<i32>,
    pub area_id: Option<i32>,
    /// `available`, `unavailable`, or a stored status value
    pub status: Option<String>,
    pub updated_by: Option<String>,
}

impl InventoryDashboardParams {
    fn filters(&self) -> InventoryDashboardFilters {
        InventoryDashboardFilters {
            name: self.name.clone(),
            client_id: self.client_id,
            serial_pallet: self.serial_pallet.clone(),
            identifier: self.identifier.clone(),
            po: self.po.clone(),
            location_id: self.location_id,
            area_id: self.area_id,
            status: self.status.clone(),
            updated_by: self.updated_by.clone(),
        }
    }
}

/// Query parameters of the unified transaction dashboard.
#[derive(Debug, Default, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TransactionDashboardParams {
    #[validate(range(min = 1))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 100))]
    pub size: Option<u64>,
    /// `IMPORT`, `TRANSFER` or `EXPORT`; omitted merges all three
    pub transaction_type: Option<String>,
    pub request_code: Option<String>,
    pub industry: Option<String>,
    pub production_team: Option<String>,
    pub from_warehouse: Option<i32>,
    pub to_warehouse: Option<i32>,
    pub status: Option<bool>,
    /// Inclusive lower bound on the last update, ISO-8601
    pub from_date: Option<String>,
    /// Inclusive upper bound on the last update, ISO-8601
    pub to_date: Option<String>,
    pub updated_by: Option<String>,
}

impl TransactionDashboardParams {
    fn filters(&self) -> Result<TransactionDashboardFilters, ServiceError> {
        let transaction_type = match self
            .transaction_type
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            Some(raw) => Some(TransactionType::from_str(raw).map_err(|_| {
                ServiceError::InvalidInput(format!(
                    "transaction_type must be one of IMPORT, TRANSFER, EXPORT (got '{}')",
                    raw
                ))
            })?),
            None => None,
        };

        Ok(TransactionDashboardFilters {
            transaction_type,
            request_code: self.request_code.clone(),
            industry: self.industry.clone(),
            production_team: self.production_team.clone(),
            from_warehouse: self.from_warehouse,
            to_warehouse: self.to_warehouse,
            status: self.status,
            from_date: self.from_date.clone(),
            to_date: self.to_date.clone(),
            updated_by: self.updated_by.clone(),
        })
    }
}

/// Applies the configured defaults and the configured size ceiling.
fn resolve_page(
    config: &AppConfig,
    page: Option<u64>,
    size: Option<u64>,
) -> Result<(u64, u64), ServiceError> {
    let size = size.unwrap_or(u64::from(config.api_default_page_size));
    let max = u64::from(config.api_max_page_size);
    if size > max {
        return Err(ServiceError::ValidationError(format!(
            "size must be between 1 and {}",
            max
        )));
    }
    Ok((page.unwrap_or(1), size))
}

pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/summary", get(get_summary))
        .route("/inventory", get(get_inventory_dashboard))
        .route("/inventory/grouped", get(get_grouped_inventory))
        .route("/transactions", get(get_transactions_dashboard))
}

/// Headline counts for the warehouse overview
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/summary",
    responses(
        (status = 200, description = "Dashboard counts", body = DashboardSummary),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "Dashboard"
)]
pub async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<DashboardSummary>, ServiceError> {
    let summary = state.dashboard.summary().await?;
    Ok(Json(summary))
}

/// Flat, filterable inventory listing
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/inventory",
    params(InventoryDashboardParams),
    responses(
        (status = 200, description = "One page of inventory rows", body = InventoryDashboardPage),
        (status = 400, description = "Invalid paging parameters", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "Dashboard"
)]
pub async fn get_inventory_dashboard(
    State(state): State<AppState>,
    Query(params): Query<InventoryDashboardParams>,
) -> Result<Json<InventoryDashboardPage>, ServiceError> {
    params.validate()?;
    let (page, size) = resolve_page(&state.config, params.page, params.size)?;
    let result = state
        .dashboard
        .inventory_dashboard(params.filters(), page, size)
        .await?;
    Ok(Json(result))
}

/// Inventory aggregated by area, PO, client or SAP code
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/inventory/grouped",
    params(InventoryDashboardParams),
    responses(
        (status = 200, description = "One page of inventory groups, largest available stock first", body = GroupedInventoryPage),
        (status = 400, description = "Invalid paging parameters", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "Dashboard"
)]
pub async fn get_grouped_inventory(
    State(state): State<AppState>,
    Query(params): Query<InventoryDashboardParams>,
) -> Result<Json<GroupedInventoryPage>, ServiceError> {
    params.validate()?;
    let (page, size) = resolve_page(&state.config, params.page, params.size)?;
    let group_by = GroupBy::parse(params.group_by.as_deref());
    let result = state
        .dashboard
        .grouped_inventory(params.filters(), group_by, page, size)
        .await?;
    Ok(Json(result))
}

/// Import, transfer and export requests merged newest first
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/transactions",
    params(TransactionDashboardParams),
    responses(
        (status = 200, description = "One page of merged transactions", body = TransactionDashboardPage),
        (status = 400, description = "Invalid paging parameters or transaction type", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "Dashboard"
)]
pub async fn get_transactions_dashboard(
    State(state): State<AppState>,
    Query(params): Query<TransactionDashboardParams>,
) -> Result<Json<TransactionDashboardPage>, ServiceError> {
    params.validate()?;
    let filters = params.filters()?;
    let (page, size) = resolve_page(&state.config, params.page, params.size)?;
    let result = state.dashboard.transactions(filters, page, size).await?;
    Ok(Json(result))
}
