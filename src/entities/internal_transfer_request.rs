use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Internal warehouse transfer request (IWTR).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "internal_warehouse_transfer_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub ma_yc_cknb: Option<String>,
    /// Source area id
    pub tu_kho: Option<i32>,
    /// Destination area id
    pub den_kho: Option<i32>,
    pub don_vi_linh: Option<String>,
    pub don_vi_nhan: Option<String>,
    pub ly_do_xuat_nhap: Option<String>,
    pub status: bool,
    pub note: Option<String>,
    pub scan_status: Option<String>,
    pub updated_by: Option<String>,
    pub updated_date: Option<DateTime>,
    pub deleted_at: Option<DateTime>,
    pub deleted_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
