#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::Value;
use tower::ServiceExt;
use warehouse_api::{
    config::AppConfig,
    db::{self, DbConfig},
    entities::{
        area, container_inventory, internal_transfer_request, inventory, location,
        outbound_shipment_request, warehouse_import_container, warehouse_import_requirement,
    },
    services::DashboardService,
    AppState,
};

/// Fresh in-memory SQLite database with the warehouse schema applied.
/// A single pooled connection keeps the in-memory database alive.
pub async fn setup_db() -> Arc<DatabaseConnection> {
    let cfg = DbConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        sqlx_logging: false,
        ..Default::default()
    };
    let pool = db::establish_connection_with_config(&cfg)
        .await
        .expect("failed to open in-memory database");
    db::run_migrations(&pool)
        .await
        .expect("failed to run migrations in tests");
    Arc::new(pool)
}

pub fn dashboard(db: &Arc<DatabaseConnection>) -> DashboardService {
    DashboardService::new(db.clone())
}

pub fn ts(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").expect("valid test timestamp")
}

pub async fn insert_area(db: &DatabaseConnection, code: Option<&str>) -> i32 {
    area::ActiveModel {
        code: Set(code.map(str::to_string)),
        name: Set(code.map(|c| format!("Area {c}"))),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert area")
    .id
}

pub async fn insert_location(db: &DatabaseConnection, area_id: Option<i32>, code: &str) -> i32 {
    location::ActiveModel {
        code: Set(Some(code.to_string())),
        area_id: Set(area_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert location")
    .id
}

#[derive(Debug, Clone, Default)]
pub struct InventorySeed {
    pub identifier: String,
    pub name: Option<String>,
    pub sap_code: Option<String>,
    pub po: Option<String>,
    pub serial_pallet: Option<String>,
    pub location_id: Option<i32>,
    pub available: i32,
    pub initial: i32,
    pub calculated_status: Option<String>,
    pub updated_by: Option<String>,
    pub updated_date: Option<NaiveDateTime>,
    pub received_date: Option<NaiveDateTime>,
}

impl InventorySeed {
    pub fn new(identifier: &str, location_id: Option<i32>, available: i32) -> Self {
        Self {
            identifier: identifier.to_string(),
            location_id,
            available,
            initial: available,
            ..Default::default()
        }
    }

    pub fn sap(mut self, sap_code: &str) -> Self {
        self.sap_code = Some(sap_code.to_string());
        self
    }

    pub fn po(mut self, po: &str) -> Self {
        self.po = Some(po.to_string());
        self
    }

    pub fn pallet(mut self, serial: &str) -> Self {
        self.serial_pallet = Some(serial.to_string());
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn updated(mut self, at: &str) -> Self {
        self.updated_date = Some(ts(at));
        self
    }
}

pub async fn insert_inventory(db: &DatabaseConnection, seed: InventorySeed) -> i32 {
    inventory::ActiveModel {
        identifier: Set(seed.identifier),
        name: Set(seed.name),
        serial_pallet: Set(seed.serial_pallet),
        sap_code: Set(seed.sap_code),
        po: Set(seed.po),
        location_id: Set(seed.location_id),
        available_quantity: Set(seed.available),
        initial_quantity: Set(seed.initial),
        calculated_status: Set(seed.calculated_status),
        updated_by: Set(seed.updated_by),
        updated_date: Set(seed.updated_date),
        received_date: Set(seed.received_date),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert inventory")
    .id
}

/// Attaches inventory to a client through requirement, container and scan rows.
pub async fn link_to_client(db: &DatabaseConnection, inventory_identifier: &str, client_id: i32) {
    let requirement = warehouse_import_requirement::ActiveModel {
        wo_code: Set(Some(format!("WO-{inventory_identifier}"))),
        client_id: Set(Some(client_id)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert requirement");

    let container = warehouse_import_container::ActiveModel {
        warehouse_import_requirement_id: Set(Some(requirement.id)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert container");

    container_inventory::ActiveModel {
        import_container_id: Set(Some(container.id)),
        inventory_identifier: Set(Some(inventory_identifier.to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert container inventory");
}

#[derive(Debug, Clone, Default)]
pub struct RequestSeed {
    pub code: Option<String>,
    pub status: bool,
    pub updated_by: Option<String>,
    pub updated_date: Option<NaiveDateTime>,
    pub deleted_at: Option<NaiveDateTime>,
    pub from_warehouse: Option<i32>,
    pub to_warehouse: Option<i32>,
    pub branch: Option<String>,
    pub production_team: Option<String>,
    pub client_id: Option<i32>,
}

impl RequestSeed {
    pub fn new(code: &str, updated: Option<&str>) -> Self {
        Self {
            code: Some(code.to_string()),
            updated_date: updated.map(ts),
            ..Default::default()
        }
    }

    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(ts("2025-01-31 00:00:00"));
        self
    }

    pub fn by(mut self, user: &str) -> Self {
        self.updated_by = Some(user.to_string());
        self
    }

    pub fn route(mut self, from: i32, to: i32) -> Self {
        self.from_warehouse = Some(from);
        self.to_warehouse = Some(to);
        self
    }

    pub fn done(mut self) -> Self {
        self.status = true;
        self
    }
}

pub async fn insert_import(db: &DatabaseConnection, seed: RequestSeed) -> i32 {
    warehouse_import_requirement::ActiveModel {
        wo_code: Set(seed.code),
        client_id: Set(seed.client_id),
        branch: Set(seed.branch),
        production_team: Set(seed.production_team),
        status: Set(seed.status),
        updated_by: Set(seed.updated_by),
        updated_date: Set(seed.updated_date),
        deleted_at: Set(seed.deleted_at),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert import requirement")
    .id
}

pub async fn insert_transfer(db: &DatabaseConnection, seed: RequestSeed) -> i32 {
    internal_transfer_request::ActiveModel {
        ma_yc_cknb: Set(seed.code),
        tu_kho: Set(seed.from_warehouse),
        den_kho: Set(seed.to_warehouse),
        status: Set(seed.status),
        updated_by: Set(seed.updated_by),
        updated_date: Set(seed.updated_date),
        deleted_at: Set(seed.deleted_at),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert transfer request")
    .id
}

pub async fn insert_export(db: &DatabaseConnection, seed: RequestSeed) -> i32 {
    outbound_shipment_request::ActiveModel {
        ma_yc_xk: Set(seed.code),
        kho_xuat: Set(seed.from_warehouse),
        xuat_toi: Set(seed.to_warehouse),
        status: Set(seed.status),
        updated_by: Set(seed.updated_by),
        updated_date: Set(seed.updated_date),
        deleted_at: Set(seed.deleted_at),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert outbound shipment request")
    .id
}

/// Full HTTP application over the given database.
pub fn test_app(db: Arc<DatabaseConnection>) -> Router {
    let cfg = AppConfig::new(
        "sqlite::memory:".into(),
        "127.0.0.1".into(),
        18_080,
        "test".into(),
    );
    warehouse_api::app(AppState::new(db, cfg))
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
        .await
        .expect("router response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

pub async fn post_json(app: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request"),
        )
        .await
        .expect("router response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}
