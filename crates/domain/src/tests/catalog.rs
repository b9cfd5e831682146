// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_catalog;
use crate::{ReferenceCatalog, RequisitionOption, StaticCatalog, TalentStage};

#[test]
fn test_lists_requisitions_for_client_in_order() {
    let catalog: StaticCatalog = create_test_catalog();

    let options: Vec<RequisitionOption> = catalog.list_requisitions_for_client("c1");

    assert_eq!(options.len(), 2);
    assert_eq!(options[0].key, "r1");
    assert_eq!(options[0].id, "OWNAI_234");
    assert_eq!(options[1].title, "Business Administrator");
}

#[test]
fn test_unknown_client_has_no_requisitions() {
    let catalog: StaticCatalog = create_test_catalog();

    assert!(catalog.list_requisitions_for_client("c9").is_empty());
    assert!(catalog.client("c9").is_none());
}

#[test]
fn test_client_has_requisition_respects_ownership() {
    let catalog: StaticCatalog = create_test_catalog();

    assert!(catalog.client_has_requisition("c1", "r2"));
    assert!(!catalog.client_has_requisition("c1", "r3"));
    assert!(!catalog.client_has_requisition("c9", "r1"));
}

#[test]
fn test_only_moved_talents_are_selectable() {
    let catalog: StaticCatalog = create_test_catalog();
    let requisition = catalog.get_requisition("r1").unwrap();

    let ids: Vec<&str> = requisition
        .selectable_talents()
        .iter()
        .map(|t| t.id.as_str())
        .collect();

    assert_eq!(ids, vec!["t1", "t2"]);
    assert!(requisition.talent("t3").is_some());
}

#[test]
fn test_stage_selectability() {
    assert!(TalentStage::new(TalentStage::MOVED).is_selectable());
    assert!(!TalentStage::new("screening").is_selectable());
    assert!(!TalentStage::new("Moved").is_selectable());
}

#[test]
fn test_catalog_deserializes_from_json() {
    let json: &str = r#"{
        "clients": [{ "id": "c2", "name": "Acme Corp", "requisitions": ["r3"] }],
        "requisitions": {
            "r3": {
                "id": "REQ_3001",
                "title": "QA Engineer",
                "talents": [{ "id": "t6", "name": "Ravi Sharma", "stage": "moved" }]
            }
        }
    }"#;

    let catalog: StaticCatalog = serde_json::from_str(json).unwrap();

    assert_eq!(catalog.list_clients().len(), 1);
    assert_eq!(catalog.client("c2").unwrap().name, "Acme Corp");
    let requisition = catalog.get_requisition("r3").unwrap();
    assert_eq!(requisition.talents[0].stage.value(), "moved");
}
