use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "warehouse_import_containers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub warehouse_import_requirement_id: Option<i32>,
    pub pallet_code: Option<i32>,
    pub box_code: Option<i32>,
    pub box_quantity: Option<i32>,
    pub updated_by: Option<String>,
    pub updated_date: Option<DateTime>,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::warehouse_import_requirement::Entity",
        from = "Column::WarehouseImportRequirementId",
        to = "super::warehouse_import_requirement::Column::Id"
    )]
    ImportRequirement,
    #[sea_orm(has_many = "super::container_inventory::Entity")]
    ContainerInventories,
}

impl Related<super::warehouse_import_requirement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ImportRequirement.def()
    }
}

impl Related<super::container_inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContainerInventories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
