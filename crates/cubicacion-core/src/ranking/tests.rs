use super::*;

fn box_type(code: &str, external: Dims, wall_thickness: f64, preferred: bool) -> BoxType {
    BoxType {
        code: code.to_string(),
        description: None,
        external,
        wall_thickness,
        tare_weight: None,
        max_payload: None,
        preferred,
        enabled: true,
    }
}

fn catalog() -> Vec<BoxType> {
    vec![
        box_type("CAJA-30x20x15", Dims::new(300.0, 200.0, 150.0), 3.0, false),
        box_type("CAJA-40x30x25", Dims::new(400.0, 300.0, 250.0), 4.0, true),
        box_type("CAJA-60x40x40", Dims::new(600.0, 400.0, 400.0), 5.0, false),
    ]
}

fn cube_lot(key: &str, side: f64, quantity: u32) -> RankingLot {
    RankingLot {
        lot: ItemLot {
            key: key.to_string(),
            code: None,
            description: None,
            quantity,
            unit_volume: side * side * side,
        },
        dims: Dims::new(side, side, side),
    }
}

fn codes(evaluations: &[BoxTypeEvaluation]) -> Vec<&str> {
    evaluations
        .iter()
        .map(|e| e.box_type.code.as_str())
        .collect()
}

#[test]
fn test_fewest_boxes_wins() {
    let ranker = BoxTypeRanker::new(vec![cube_lot("cube", 100.0, 10)], catalog()).unwrap();
    let ranked = ranker.rank(3).unwrap();

    // The small box needs two bins; both larger ones need one, and the
    // tighter 40x30x25 has the higher occupancy.
    assert_eq!(
        codes(&ranked),
        vec!["CAJA-40x30x25", "CAJA-60x40x40", "CAJA-30x20x15"]
    );

    let best = &ranked[0];
    assert_eq!(best.cavity, Dims::new(392.0, 292.0, 242.0));
    assert_eq!(best.capacity, 392.0 * 292.0 * 242.0);
    assert!(best.feasible);
    assert!(best.reasons.is_empty());

    let packing = best.packing.as_ref().unwrap();
    assert_eq!(packing.total_bins, 1);
    let expected = 1_000_000.0 - packing.global_occupancy_pct * 1_000.0 - 100.0;
    assert!((best.score - expected).abs() < 1e-6);

    assert_eq!(ranked[2].packing.as_ref().unwrap().total_bins, 2);
}

#[test]
fn test_top_n_truncates() {
    let ranker = BoxTypeRanker::new(vec![cube_lot("cube", 100.0, 10)], catalog()).unwrap();

    assert_eq!(ranker.rank(1).unwrap().len(), 1);
    assert!(ranker.rank(0).unwrap().is_empty());
}

#[test]
fn test_item_that_fits_nowhere_drops_candidates() {
    let lots = vec![cube_lot("small", 50.0, 4), cube_lot("big", 350.0, 1)];
    let ranker = BoxTypeRanker::new(lots, catalog()).unwrap();

    let all = ranker.evaluate_all().unwrap();
    assert_eq!(all.len(), 3);
    assert!(!all[0].feasible);
    assert!(all[0].packing.is_none());
    assert_eq!(
        all[0].reasons,
        vec![Infeasibility::ItemDoesNotFit {
            key: "big".to_string()
        }]
    );
    assert!(!all[1].feasible);
    assert!(all[2].feasible);

    assert_eq!(codes(&ranker.rank(3).unwrap()), vec!["CAJA-60x40x40"]);
}

#[test]
fn test_item_fitting_only_when_turned_is_feasible() {
    let lot = RankingLot {
        lot: ItemLot {
            key: "rod".to_string(),
            code: Some("ROD-550".to_string()),
            description: None,
            quantity: 2,
            unit_volume: 550.0 * 40.0 * 40.0,
        },
        dims: Dims::new(40.0, 40.0, 550.0),
    };
    let ranker = BoxTypeRanker::new(vec![lot], catalog()).unwrap();

    assert_eq!(codes(&ranker.rank(3).unwrap()), vec!["CAJA-60x40x40"]);
}

#[test]
fn test_disabled_box_types_are_ignored() {
    let mut boxes = catalog();
    boxes[1].enabled = false;
    let ranker = BoxTypeRanker::new(vec![cube_lot("cube", 100.0, 10)], boxes).unwrap();

    let all = ranker.evaluate_all().unwrap();
    assert_eq!(all.len(), 2);
    assert!(!codes(&all).contains(&"CAJA-40x30x25"));
}

#[test]
fn test_wall_closing_cavity_is_reported() {
    let boxes = vec![box_type("THICK", Dims::new(100.0, 100.0, 100.0), 50.0, false)];
    let ranker = BoxTypeRanker::new(vec![cube_lot("cube", 10.0, 1)], boxes).unwrap();

    let all = ranker.evaluate_all().unwrap();
    assert_eq!(all.len(), 1);
    assert!(all[0].reasons.contains(&Infeasibility::InvalidCavity));
    assert!(all[0].reasons.contains(&Infeasibility::InvalidCapacity));
    assert!(ranker.rank(3).unwrap().is_empty());
}

#[test]
fn test_unusable_lots_give_empty_ranking() {
    let mut flat = cube_lot("flat", 100.0, 3);
    flat.dims.height = 0.0;
    let lots = vec![cube_lot("none", 100.0, 0), flat];
    let ranker = BoxTypeRanker::new(lots, catalog()).unwrap();

    assert!(ranker.evaluate_all().unwrap().is_empty());
    assert!(ranker.rank(3).unwrap().is_empty());
}

#[test]
fn test_preferred_breaks_ties() {
    let shape = Dims::new(400.0, 300.0, 250.0);
    let boxes = vec![
        box_type("PLAIN", shape, 4.0, false),
        box_type("FAVORITE", shape, 4.0, true),
    ];
    let ranker = BoxTypeRanker::new(vec![cube_lot("cube", 100.0, 10)], boxes).unwrap();

    let ranked = ranker.rank(3).unwrap();
    assert_eq!(codes(&ranked), vec!["FAVORITE", "PLAIN"]);
    assert!((ranked[1].score - ranked[0].score - 100.0).abs() < 1e-6);
}

#[test]
fn test_equal_scores_keep_catalog_order() {
    let shape = Dims::new(400.0, 300.0, 250.0);
    let boxes = vec![
        box_type("FIRST", shape, 4.0, false),
        box_type("SECOND", shape, 4.0, false),
    ];
    let ranker = BoxTypeRanker::new(vec![cube_lot("cube", 100.0, 10)], boxes).unwrap();

    assert_eq!(codes(&ranker.rank(3).unwrap()), vec!["FIRST", "SECOND"]);
}

#[test]
fn test_rejects_non_finite_catalog() {
    let boxes = vec![box_type("BROKEN", Dims::new(f64::INFINITY, 1.0, 1.0), 0.0, false)];

    assert!(BoxTypeRanker::new(vec![cube_lot("cube", 1.0, 1)], boxes).is_err());
}

#[test]
fn test_reasons_read_well() {
    let reason = Infeasibility::ItemDoesNotFit {
        key: "SKU-9".to_string(),
    };

    assert_eq!(
        reason.to_string(),
        "Item 'SKU-9' does not fit in any orientation"
    );
}
