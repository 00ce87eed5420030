//! GraphQL surface over the dashboard queries.
//!
//! Served as JSON over `POST /graphql`; `GET /graphql` renders GraphiQL.
use crate::{
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
    services::DashboardService,
    AppState,
};
use async_graphql::{
    http::GraphiQLSource, Context, EmptyMutation, EmptySubscription, ErrorExtensions,
    InputObject, Object, Schema,
};
use axum::{
    extract::State,
    response::{Html, IntoResponse, Json},
};
use tracing::instrument;

pub type DashboardSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(dashboard: DashboardService) -> DashboardSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(dashboard)
        .finish()
}

/// Inventory filters accepted by both inventory resolvers.
#[derive(Debug, Default, InputObject)]
pub struct InventoryFilterInput {
    pub name: Option<String>,
    pub client_id: Option<i32>,
    pub serial_pallet: Option<String>,
    pub identifier: Option<String>,
    pub po: Option<String>,
    pub location_id: Option<i32>,
    pub area_id: Option<i32>,
    pub status: Option<String>,
    pub updated_by: Option<String>,
}

impl From<InventoryFilterInput> for InventoryDashboardFilters {
    fn from(input: InventoryFilterInput) -> Self {
        Self {
            name: input.name,
            client_id: input.client_id,
            serial_pallet: input.serial_pallet,
            identifier: input.identifier,
            po: input.po,
            location_id: input.location_id,
            area_id: input.area_id,
            status: input.status,
            updated_by: input.updated_by,
        }
    }
}

#[derive(Debug, Default, InputObject)]
pub struct TransactionFilterInput {
    pub transaction_type: Option<TransactionType>,
    pub request_code: Option<String>,
    pub industry: Option<String>,
    pub production_team: Option<String>,
    pub from_warehouse: Option<i32>,
    pub to_warehouse: Option<i32>,
    pub status: Option<bool>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub updated_by: Option<String>,
}

impl From<TransactionFilterInput> for TransactionDashboardFilters {
    fn from(input: TransactionFilterInput) -> Self {
        Self {
            transaction_type: input.transaction_type,
            request_code: input.request_code,
            industry: input.industry,
            production_team: input.production_team,
            from_warehouse: input.from_warehouse,
            to_warehouse: input.to_warehouse,
            status: input.status,
            from_date: input.from_date,
            to_date: input.to_date,
            updated_by: input.updated_by,
        }
    }
}

/// Maps a service failure onto a GraphQL error without leaking database detail.
fn to_graphql_error(err: ServiceError) -> async_graphql::Error {
    let kind = err.kind();
    async_graphql::Error::new(err.response_message()).extend_with(|_, ext| ext.set("code", kind))
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Headline counts
    async fn dashboard(&self, ctx: &Context<'_>) -> async_graphql::Result<DashboardSummary> {
        let service = ctx.data::<DashboardService>()?;
        service.summary().await.map_err(to_graphql_error)
    }

    async fn inventory_dashboard(
        &self,
        ctx: &Context<'_>,
        filters: Option<InventoryFilterInput>,
        #[graphql(default = 1)] page: u64,
        #[graphql(default = 20)] size: u64,
    ) -> async_graphql::Result<InventoryDashboardPage> {
        let service = ctx.data::<DashboardService>()?;
        service
            .inventory_dashboard(filters.unwrap_or_default().into(), page, size)
            .await
            .map_err(to_graphql_error)
    }

    /// Inventory grouped by `area`, `po`, `client` or `sap_code`; anything else groups by area
    async fn inventory_dashboard_grouped(
        &self,
        ctx: &Context<'_>,
        group_by: Option<String>,
        filters: Option<InventoryFilterInput>,
        #[graphql(default = 1)] page: u64,
        #[graphql(default = 20)] size: u64,
    ) -> async_graphql::Result<GroupedInventoryPage> {
        let service = ctx.data::<DashboardService>()?;
        service
            .grouped_inventory(
                filters.unwrap_or_default().into(),
                GroupBy::parse(group_by.as_deref()),
                page,
                size,
            )
            .await
            .map_err(to_graphql_error)
    }

    async fn transactions_dashboard(
        &self,
        ctx: &Context<'_>,
        filters: Option<TransactionFilterInput>,
        #[graphql(default = 1)] page: u64,
        #[graphql(default = 20)] size: u64,
    ) -> async_graphql::Result<TransactionDashboardPage> {
        let service = ctx.data::<DashboardService>()?;
        service
            .transactions(filters.unwrap_or_default().into(), page, size)
            .await
            .map_err(to_graphql_error)
    }
}

#[instrument(skip_all)]
pub async fn graphql_handler(
    State(state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(state.schema.execute(request).await)
}

pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
