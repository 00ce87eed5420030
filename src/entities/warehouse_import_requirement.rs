use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "warehouse_import_requirements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Request code shown on the dashboard
    pub wo_code: Option<String>,
    pub client_id: Option<i32>,
    pub po_number: Option<String>,
    pub lot_number: Option<String>,
    pub branch: Option<String>,
    pub production_team: Option<String>,
    pub quantity: Option<i32>,
    pub status: bool,
    pub note: Option<String>,
    pub updated_by: Option<String>,
    pub updated_date: Option<DateTime>,
    pub deleted_at: Option<DateTime>,
    pub deleted_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::warehouse_import_container::Entity")]
    Containers,
}

impl Related<super::warehouse_import_container::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Containers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
