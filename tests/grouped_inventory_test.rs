mod common;

use common::*;
use warehouse_api::queries::inventory_dashboard_queries::{
    GroupBy, InventoryDashboardFilters, UNKNOWN_GROUP,
};

#[tokio::test]
async fn empty_warehouse_yields_single_empty_page() {
    let db = setup_db().await;

    let page = dashboard(&db)
        .grouped_inventory(InventoryDashboardFilters::default(), GroupBy::Area, 1, 20)
        .await
        .unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.meta.page, 1);
    assert_eq!(page.meta.size, 20);
    assert_eq!(page.meta.total_items, 0);
    assert_eq!(page.meta.total_pages, 1);
}

#[tokio::test]
async fn group_without_stock_is_dropped() {
    let db = setup_db().await;
    insert_inventory(&db, InventorySeed::new("C-1", None, 0).po("PO1")).await;

    let page = dashboard(&db)
        .grouped_inventory(InventoryDashboardFilters::default(), GroupBy::Po, 1, 20)
        .await
        .unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.meta.total_items, 0);
}

#[tokio::test]
async fn all_zero_stock_returns_nothing_for_every_dimension() {
    let db = setup_db().await;
    let area = insert_area(&db, Some("A1")).await;
    let loc = insert_location(&db, Some(area), "L1").await;
    for (i, po) in ["PO1", "PO2", "PO3"].iter().enumerate() {
        let identifier = format!("C-{i}");
        let seed = InventorySeed::new(&identifier, Some(loc), 0).po(po).sap("SAP");
        insert_inventory(&db, seed).await;
        link_to_client(&db, &identifier, 7).await;
    }

    for group_by in [GroupBy::Area, GroupBy::Po, GroupBy::Client, GroupBy::SapCode] {
        let page = dashboard(&db)
            .grouped_inventory(InventoryDashboardFilters::default(), group_by, 1, 20)
            .await
            .unwrap();
        assert!(page.data.is_empty(), "{group_by:?} returned groups");
    }
}

#[tokio::test]
async fn groups_are_ranked_by_available_quantity() {
    let db = setup_db().await;
    let small = insert_area(&db, Some("SMALL")).await;
    let big = insert_area(&db, Some("BIG")).await;
    let mid = insert_area(&db, Some("MID")).await;
    let small_loc = insert_location(&db, Some(small), "S-1").await;
    let big_loc = insert_location(&db, Some(big), "B-1").await;
    let big_loc2 = insert_location(&db, Some(big), "B-2").await;
    let mid_loc = insert_location(&db, Some(mid), "M-1").await;

    insert_inventory(&db, InventorySeed::new("S1", Some(small_loc), 5)).await;
    insert_inventory(&db, InventorySeed::new("B1", Some(big_loc), 60).pallet("P1")).await;
    insert_inventory(&db, InventorySeed::new("B2", Some(big_loc2), 40).pallet("P1")).await;
    insert_inventory(&db, InventorySeed::new("M1", Some(mid_loc), 30)).await;

    let page = dashboard(&db)
        .grouped_inventory(InventoryDashboardFilters::default(), GroupBy::Area, 1, 20)
        .await
        .unwrap();

    let order: Vec<_> = page.data.iter().map(|g| g.group_value.as_str()).collect();
    assert_eq!(order, ["BIG", "MID", "SMALL"]);
    assert!(page
        .data
        .windows(2)
        .all(|pair| pair[0].total_available_quantity >= pair[1].total_available_quantity));

    let big_group = &page.data[0];
    assert_eq!(big_group.group_key, "area_code");
    assert_eq!(big_group.total_available_quantity, 100);
    assert_eq!(big_group.item_count, 2);
    assert_eq!(big_group.total_locations, 2);
    assert_eq!(big_group.total_pallets, 1);
    assert_eq!(big_group.total_containers, 2);
}

#[tokio::test]
async fn null_dimension_is_reported_as_unknown() {
    let db = setup_db().await;
    let area = insert_area(&db, Some("A1")).await;
    let loc = insert_location(&db, Some(area), "L1").await;
    insert_inventory(&db, InventorySeed::new("WITH-AREA", Some(loc), 3)).await;
    insert_inventory(&db, InventorySeed::new("NO-LOC", None, 9)).await;

    let page = dashboard(&db)
        .grouped_inventory(InventoryDashboardFilters::default(), GroupBy::Area, 1, 20)
        .await
        .unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].group_value, UNKNOWN_GROUP);
    assert_eq!(page.data[0].total_available_quantity, 9);
    assert!(page.data.iter().all(|g| !g.group_value.is_empty()));
}

#[tokio::test]
async fn groups_by_client_through_import_chain() {
    let db = setup_db().await;
    insert_inventory(&db, InventorySeed::new("C-A", None, 10).po("PO-A")).await;
    insert_inventory(&db, InventorySeed::new("C-B", None, 4).po("PO-B")).await;
    insert_inventory(&db, InventorySeed::new("C-C", None, 2)).await;
    link_to_client(&db, "C-A", 42).await;
    link_to_client(&db, "C-B", 42).await;

    let page = dashboard(&db)
        .grouped_inventory(InventoryDashboardFilters::default(), GroupBy::Client, 1, 20)
        .await
        .unwrap();

    assert_eq!(page.data.len(), 2);
    let client = &page.data[0];
    assert_eq!(client.group_key, "client_id");
    assert_eq!(client.group_value, "42");
    assert_eq!(client.total_available_quantity, 14);
    assert_eq!(client.total_clients, 1);
    assert_eq!(client.total_pos, 2);
    assert_eq!(page.data[1].group_value, UNKNOWN_GROUP);
    assert_eq!(page.data[1].total_clients, 0);
}

#[tokio::test]
async fn unique_products_count_distinct_sap_codes() {
    let db = setup_db().await;
    insert_inventory(&db, InventorySeed::new("C-1", None, 1).po("PO1").sap("S-1")).await;
    insert_inventory(&db, InventorySeed::new("C-2", None, 1).po("PO1").sap("S-1")).await;
    insert_inventory(&db, InventorySeed::new("C-3", None, 1).po("PO1").sap("S-2")).await;

    let page = dashboard(&db)
        .grouped_inventory(InventoryDashboardFilters::default(), GroupBy::Po, 1, 20)
        .await
        .unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].total_unique_products, 2);
    assert_eq!(page.data[0].item_count, 3);
}

#[tokio::test]
async fn rescanned_item_is_counted_once() {
    let db = setup_db().await;
    insert_inventory(&db, InventorySeed::new("C-1", None, 10).po("PO1")).await;
    link_to_client(&db, "C-1", 1).await;
    link_to_client(&db, "C-1", 2).await;

    let grouped = dashboard(&db)
        .grouped_inventory(InventoryDashboardFilters::default(), GroupBy::Po, 1, 20)
        .await
        .unwrap();
    assert_eq!(grouped.data.len(), 1);
    assert_eq!(grouped.data[0].total_available_quantity, 10);
    assert_eq!(grouped.data[0].item_count, 1);
    assert_eq!(grouped.data[0].total_clients, 1);

    let flat = dashboard(&db)
        .inventory_dashboard(InventoryDashboardFilters::default(), 1, 20)
        .await
        .unwrap();
    assert_eq!(flat.meta.total_items, 1);
    assert_eq!(flat.data.len(), 1);
    assert_eq!(flat.data[0].client_id, Some(1));
}

#[tokio::test]
async fn filters_apply_before_grouping() {
    let db = setup_db().await;
    for (identifier, available, sap, name) in [
        ("C-1", 5, "S-1", "Cotton roll"),
        ("C-2", 7, "S-1", "Polyester roll"),
        ("C-3", 9, "S-2", "Cotton bale"),
    ] {
        let seed = InventorySeed::new(identifier, None, available).sap(sap).name(name);
        insert_inventory(&db, seed).await;
    }

    let filters = InventoryDashboardFilters {
        name: Some("Cotton".into()),
        ..Default::default()
    };
    let page = dashboard(&db)
        .grouped_inventory(filters, GroupBy::SapCode, 1, 20)
        .await
        .unwrap();

    let values: Vec<_> = page
        .data
        .iter()
        .map(|g| (g.group_value.as_str(), g.total_available_quantity))
        .collect();
    assert_eq!(values, [("S-2", 9), ("S-1", 5)]);
}

#[tokio::test]
async fn pagination_counts_groups_after_having() {
    let db = setup_db().await;
    for i in 0..5 {
        insert_inventory(
            &db,
            InventorySeed::new(&format!("C-{i}"), None, 10 + i).po(&format!("PO{i}")),
        )
        .await;
    }
    insert_inventory(&db, InventorySeed::new("EMPTY", None, 0).po("PO-EMPTY")).await;

    let first = dashboard(&db)
        .grouped_inventory(InventoryDashboardFilters::default(), GroupBy::Po, 1, 2)
        .await
        .unwrap();
    assert_eq!(first.meta.total_items, 5);
    assert_eq!(first.meta.total_pages, 3);
    assert_eq!(first.data.len(), 2);
    assert_eq!(first.data[0].group_value, "PO4");

    let last = dashboard(&db)
        .grouped_inventory(InventoryDashboardFilters::default(), GroupBy::Po, 3, 2)
        .await
        .unwrap();
    assert_eq!(last.data.len(), 1);
    assert_eq!(last.data[0].group_value, "PO0");

    let past_end = dashboard(&db)
        .grouped_inventory(InventoryDashboardFilters::default(), GroupBy::Po, 9, 2)
        .await
        .unwrap();
    assert!(past_end.data.is_empty());
    assert_eq!(past_end.meta.total_items, 5);
}

#[tokio::test]
async fn unrecognized_dimension_groups_by_area() {
    let db = setup_db().await;
    let area = insert_area(&db, Some("A1")).await;
    let loc = insert_location(&db, Some(area), "L1").await;
    insert_inventory(&db, InventorySeed::new("C-1", Some(loc), 3).po("PO1")).await;

    let page = dashboard(&db)
        .grouped_inventory(
            InventoryDashboardFilters::default(),
            GroupBy::parse(Some("warehouse")),
            1,
            20,
        )
        .await
        .unwrap();

    assert_eq!(page.data[0].group_key, "area_code");
    assert_eq!(page.data[0].group_value, "A1");
}

#[tokio::test]
async fn flat_dashboard_lists_newest_first_with_derived_status() {
    let db = setup_db().await;
    let area = insert_area(&db, Some("A1")).await;
    let loc = insert_location(&db, Some(area), "L1").await;
    let old = InventorySeed::new("OLD", Some(loc), 4).updated("2025-01-01 08:00:00");
    let new = InventorySeed::new("NEW", Some(loc), 0).updated("2025-02-01 08:00:00");
    insert_inventory(&db, old).await;
    insert_inventory(&db, new).await;
    insert_inventory(&db, InventorySeed::new("UNDATED", None, 1)).await;
    link_to_client(&db, "NEW", 9).await;

    let page = dashboard(&db)
        .inventory_dashboard(InventoryDashboardFilters::default(), 1, 20)
        .await
        .unwrap();

    let identifiers: Vec<_> = page.data.iter().map(|r| r.identifier.as_str()).collect();
    assert_eq!(identifiers, ["NEW", "OLD", "UNDATED"]);
    assert_eq!(page.data[0].status, "unavailable");
    assert_eq!(page.data[0].client_id, Some(9));
    assert_eq!(page.data[0].area_code.as_deref(), Some("A1"));
    assert_eq!(page.data[1].status, "available");
    assert_eq!(page.meta.total_items, 3);
}

#[tokio::test]
async fn flat_dashboard_status_filter_uses_quantity() {
    let db = setup_db().await;
    insert_inventory(&db, InventorySeed::new("IN-STOCK", None, 4)).await;
    insert_inventory(&db, InventorySeed::new("EMPTY", None, 0)).await;

    let filters = InventoryDashboardFilters {
        status: Some("unavailable".into()),
        ..Default::default()
    };
    let page = dashboard(&db)
        .inventory_dashboard(filters, 1, 20)
        .await
        .unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].identifier, "EMPTY");
}

#[tokio::test]
async fn oversized_page_is_rejected() {
    let db = setup_db().await;
    let result = dashboard(&db)
        .grouped_inventory(InventoryDashboardFilters::default(), GroupBy::Area, 1, 101)
        .await;
    assert!(result.is_err());
}
