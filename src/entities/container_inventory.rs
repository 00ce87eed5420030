use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Links a scanned inventory identifier to the import container it arrived in.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "container_inventories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub import_container_id: Option<i32>,
    pub inventory_identifier: Option<String>,
    pub location: Option<String>,
    pub scan_by: Option<String>,
    pub time_checked: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::warehouse_import_container::Entity",
        from = "Column::ImportContainerId",
        to = "super::warehouse_import_container::Column::Id"
    )]
    ImportContainer,
    #[sea_orm(
        belongs_to = "super::inventory::Entity",
        from = "Column::InventoryIdentifier",
        to = "super::inventory::Column::Identifier"
    )]
    Inventory,
}

impl Related<super::warehouse_import_container::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ImportContainer.def()
    }
}

impl Related<super::inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inventory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
