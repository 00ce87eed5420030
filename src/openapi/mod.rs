use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Warehouse Dashboard API",
        version = "1.0.0",
        description = r#"
# Warehouse Dashboard API

Read-only dashboards over warehouse stock and warehouse requests.

## Pagination

Dashboard endpoints accept:
- `page`: Page number (default: 1)
- `size`: Items per page (default: 20, max: 100)

Every page carries `meta.total_pages`, which is never less than 1.

## Error Handling

```json
{
  "error": "Bad Request",
  "message": "Validation error: size must be between 1 and 100",
  "timestamp": "2025-01-01T00:00:00Z"
}
```
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "Dashboard", description = "Inventory and transaction dashboards"),
        (name = "Health", description = "Health check endpoints")
    ),
    paths(
        crate::handlers::api_status,
        crate::handlers::health_check,
        crate::handlers::dashboard::get_summary,
        crate::handlers::dashboard::get_inventory_dashboard,
        crate::handlers::dashboard::get_grouped_inventory,
        crate::handlers::dashboard::get_transactions_dashboard,
    ),
    components(
        schemas(
            crate::common::PaginationMeta,
            crate::queries::summary_queries::DashboardSummary,
            crate::queries::inventory_dashboard_queries::GroupBy,
            crate::queries::inventory_dashboard_queries::InventoryGroupRow,
            crate::queries::inventory_dashboard_queries::GroupedInventoryPage,
            crate::queries::inventory_dashboard_queries::InventoryDashboardRow,
            crate::queries::inventory_dashboard_queries::InventoryDashboardPage,
            crate::queries::transaction_dashboard_queries::TransactionType,
            crate::queries::transaction_dashboard_queries::TransactionRow,
            crate::queries::transaction_dashboard_queries::TransactionDashboardPage,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDocV1;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDocV1::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}
