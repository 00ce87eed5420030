//! SeaORM entities for the warehouse schema.

pub mod area;
pub mod container_inventory;
pub mod internal_transfer_request;
pub mod inventory;
pub mod location;
pub mod outbound_shipment_request;
pub mod warehouse_import_container;
pub mod warehouse_import_requirement;
