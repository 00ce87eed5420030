use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A pallet/box of stock tracked by its unique `identifier`.
///
/// `location_id` is where it sits now; `last_location_id` is only a
/// back-reference to where it came from.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub identifier: String,
    pub name: Option<String>,
    pub serial_pallet: Option<String>,
    pub sap_code: Option<String>,
    pub po: Option<String>,
    pub lot: Option<String>,
    pub location_id: Option<i32>,
    pub last_location_id: Option<i32>,
    pub available_quantity: i32,
    pub initial_quantity: i32,
    pub calculated_status: Option<String>,
    pub received_date: Option<DateTime>,
    pub updated_date: Option<DateTime>,
    pub updated_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id"
    )]
    Location,
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LastLocationId",
        to = "super::location::Column::Id"
    )]
    LastLocation,
    #[sea_orm(has_many = "super::container_inventory::Entity")]
    ContainerInventories,
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::container_inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContainerInventories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
