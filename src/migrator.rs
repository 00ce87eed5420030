use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_storage_tables::Migration),
            Box::new(m20250101_000002_create_request_tables::Migration),
        ]
    }
}

mod m20250101_000001_create_storage_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000001_create_storage_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Areas::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Areas::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Areas::Code).string_len(20).null())
                        .col(ColumnDef::new(Areas::Name).string_len(50).null())
                        .col(
                            ColumnDef::new(Areas::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(ColumnDef::new(Areas::UpdatedBy).string_len(50).null())
                        .col(ColumnDef::new(Areas::UpdatedDate).timestamp().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Locations::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Locations::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Locations::Code).string_len(50).null())
                        .col(ColumnDef::new(Locations::Name).string_len(50).null())
                        .col(ColumnDef::new(Locations::AreaId).integer().null())
                        .col(
                            ColumnDef::new(Locations::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(ColumnDef::new(Locations::UpdatedBy).string_len(50).null())
                        .col(ColumnDef::new(Locations::UpdatedDate).timestamp().null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_locations_area_id")
                                .from(Locations::Table, Locations::AreaId)
                                .to(Areas::Table, Areas::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Inventories::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Inventories::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Inventories::Identifier)
                                .string_len(50)
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Inventories::Name).string_len(255).null())
                        .col(ColumnDef::new(Inventories::SerialPallet).string_len(50).null())
                        .col(ColumnDef::new(Inventories::SapCode).string_len(50).null())
                        .col(ColumnDef::new(Inventories::Po).string_len(50).null())
                        .col(ColumnDef::new(Inventories::Lot).string_len(50).null())
                        .col(ColumnDef::new(Inventories::LocationId).integer().null())
                        .col(ColumnDef::new(Inventories::LastLocationId).integer().null())
                        .col(
                            ColumnDef::new(Inventories::AvailableQuantity)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Inventories::InitialQuantity)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Inventories::CalculatedStatus)
                                .string_len(50)
                                .null(),
                        )
                        .col(ColumnDef::new(Inventories::ReceivedDate).timestamp().null())
                        .col(ColumnDef::new(Inventories::UpdatedDate).timestamp().null())
                        .col(ColumnDef::new(Inventories::UpdatedBy).string_len(50).null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_inventories_location_id")
                                .from(Inventories::Table, Inventories::LocationId)
                                .to(Locations::Table, Locations::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventories_location_id")
                        .table(Inventories::Table)
                        .col(Inventories::LocationId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventories_po")
                        .table(Inventories::Table)
                        .col(Inventories::Po)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Inventories::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Locations::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Areas::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Areas {
        Table,
        Id,
        Code,
        Name,
        IsActive,
        UpdatedBy,
        UpdatedDate,
    }

    #[derive(DeriveIden)]
    enum Locations {
        Table,
        Id,
        Code,
        Name,
        AreaId,
        IsActive,
        UpdatedBy,
        UpdatedDate,
    }

    #[derive(DeriveIden)]
    enum Inventories {
        Table,
        Id,
        Identifier,
        Name,
        SerialPallet,
        SapCode,
        Po,
        Lot,
        LocationId,
        LastLocationId,
        AvailableQuantity,
        InitialQuantity,
        CalculatedStatus,
        ReceivedDate,
        UpdatedDate,
        UpdatedBy,
    }
}

mod m20250101_000002_create_request_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000002_create_request_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(WarehouseImportRequirements::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(WarehouseImportRequirements::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WarehouseImportRequirements::WoCode)
                                .string_len(50)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WarehouseImportRequirements::ClientId)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WarehouseImportRequirements::PoNumber)
                                .string_len(50)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WarehouseImportRequirements::LotNumber)
                                .string_len(50)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WarehouseImportRequirements::Branch)
                                .string_len(100)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WarehouseImportRequirements::ProductionTeam)
                                .string_len(100)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WarehouseImportRequirements::Quantity)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WarehouseImportRequirements::Status)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(WarehouseImportRequirements::Note)
                                .string_len(255)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WarehouseImportRequirements::UpdatedBy)
                                .string_len(50)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WarehouseImportRequirements::UpdatedDate)
                                .timestamp()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WarehouseImportRequirements::DeletedAt)
                                .timestamp()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WarehouseImportRequirements::DeletedBy)
                                .string_len(50)
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(WarehouseImportContainers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(WarehouseImportContainers::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WarehouseImportContainers::WarehouseImportRequirementId)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WarehouseImportContainers::PalletCode)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WarehouseImportContainers::BoxCode)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WarehouseImportContainers::BoxQuantity)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WarehouseImportContainers::UpdatedBy)
                                .string_len(50)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WarehouseImportContainers::UpdatedDate)
                                .timestamp()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WarehouseImportContainers::DeletedAt)
                                .timestamp()
                                .null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_import_containers_requirement_id")
                                .from(
                                    WarehouseImportContainers::Table,
                                    WarehouseImportContainers::WarehouseImportRequirementId,
                                )
                                .to(
                                    WarehouseImportRequirements::Table,
                                    WarehouseImportRequirements::Id,
                                ),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(ContainerInventories::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ContainerInventories::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ContainerInventories::ImportContainerId)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(ContainerInventories::InventoryIdentifier)
                                .string_len(50)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(ContainerInventories::Location)
                                .string_len(50)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(ContainerInventories::ScanBy)
                                .string_len(50)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(ContainerInventories::TimeChecked)
                                .timestamp()
                                .null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_container_inventories_container_id")
                                .from(
                                    ContainerInventories::Table,
                                    ContainerInventories::ImportContainerId,
                                )
                                .to(
                                    WarehouseImportContainers::Table,
                                    WarehouseImportContainers::Id,
                                ),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_container_inventories_identifier")
                        .table(ContainerInventories::Table)
                        .col(ContainerInventories::InventoryIdentifier)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(InternalWarehouseTransferRequests::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(InternalWarehouseTransferRequests::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InternalWarehouseTransferRequests::MaYcCknb)
                                .string_len(50)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InternalWarehouseTransferRequests::TuKho)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InternalWarehouseTransferRequests::DenKho)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InternalWarehouseTransferRequests::DonViLinh)
                                .string_len(50)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InternalWarehouseTransferRequests::DonViNhan)
                                .string_len(50)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InternalWarehouseTransferRequests::LyDoXuatNhap)
                                .string_len(50)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InternalWarehouseTransferRequests::Status)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(InternalWarehouseTransferRequests::Note)
                                .string_len(255)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InternalWarehouseTransferRequests::ScanStatus)
                                .string_len(20)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InternalWarehouseTransferRequests::UpdatedBy)
                                .string_len(50)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InternalWarehouseTransferRequests::UpdatedDate)
                                .timestamp()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InternalWarehouseTransferRequests::DeletedAt)
                                .timestamp()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InternalWarehouseTransferRequests::DeletedBy)
                                .string_len(50)
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(OutboundShipmentRequestsOnOrder::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(OutboundShipmentRequestsOnOrder::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OutboundShipmentRequestsOnOrder::MaYcXk)
                                .string_len(50)
                                .null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(OutboundShipmentRequestsOnOrder::KhoXuat)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(OutboundShipmentRequestsOnOrder::XuatToi)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(OutboundShipmentRequestsOnOrder::DonViLinh)
                                .string_len(50)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(OutboundShipmentRequestsOnOrder::DonViNhan)
                                .string_len(50)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(OutboundShipmentRequestsOnOrder::LyDoXuatNhap)
                                .string_len(50)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(OutboundShipmentRequestsOnOrder::Status)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(OutboundShipmentRequestsOnOrder::Note)
                                .string_len(255)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(OutboundShipmentRequestsOnOrder::ScanStatus)
                                .string_len(20)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(OutboundShipmentRequestsOnOrder::UpdatedBy)
                                .string_len(50)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(OutboundShipmentRequestsOnOrder::UpdatedDate)
                                .timestamp()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(OutboundShipmentRequestsOnOrder::DeletedAt)
                                .timestamp()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(OutboundShipmentRequestsOnOrder::DeletedBy)
                                .string_len(50)
                                .null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(
                    Table::drop()
                        .table(OutboundShipmentRequestsOnOrder::Table)
                        .to_owned(),
                )
                .await?;
            manager
                .drop_table(
                    Table::drop()
                        .table(InternalWarehouseTransferRequests::Table)
                        .to_owned(),
                )
                .await?;
            manager
                .drop_table(Table::drop().table(ContainerInventories::Table).to_owned())
                .await?;
            manager
                .drop_table(
                    Table::drop()
                        .table(WarehouseImportContainers::Table)
                        .to_owned(),
                )
                .await?;
            manager
                .drop_table(
                    Table::drop()
                        .table(WarehouseImportRequirements::Table)
                        .to_owned(),
                )
                .await
        }
    }

    #[derive(DeriveIden)]
    enum WarehouseImportRequirements {
        Table,
        Id,
        WoCode,
        ClientId,
        PoNumber,
        LotNumber,
        Branch,
        ProductionTeam,
        Quantity,
        Status,
        Note,
        UpdatedBy,
        UpdatedDate,
        DeletedAt,
        DeletedBy,
    }

    #[derive(DeriveIden)]
    enum WarehouseImportContainers {
        Table,
        Id,
        WarehouseImportRequirementId,
        PalletCode,
        BoxCode,
        BoxQuantity,
        UpdatedBy,
        UpdatedDate,
        DeletedAt,
    }

    #[derive(DeriveIden)]
    enum ContainerInventories {
        Table,
        Id,
        ImportContainerId,
        InventoryIdentifier,
        Location,
        ScanBy,
        TimeChecked,
    }

    #[derive(DeriveIden)]
    enum InternalWarehouseTransferRequests {
        Table,
        Id,
        MaYcCknb,
        TuKho,
        DenKho,
        DonViLinh,
        DonViNhan,
        LyDoXuatNhap,
        Status,
        Note,
        ScanStatus,
        UpdatedBy,
        UpdatedDate,
        DeletedAt,
        DeletedBy,
    }

    #[derive(DeriveIden)]
    enum OutboundShipmentRequestsOnOrder {
        Table,
        Id,
        MaYcXk,
        KhoXuat,
        XuatToi,
        DonViLinh,
        DonViNhan,
        LyDoXuatNhap,
        Status,
        Note,
        ScanStatus,
        UpdatedBy,
        UpdatedDate,
        DeletedAt,
        DeletedBy,
    }
}
