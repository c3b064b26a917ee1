//! Round-trip integration tests for kronos-panel conversions.

use kronos_panel::{
    DensePanel, LongRow, LongTable, Mtype, Panel, PanelValue, Series, check_is_mtype, convert,
};
use ndarray::Array3;

fn make_panel(n_instances: usize, len: usize) -> PanelValue {
    let series = (0..n_instances)
        .map(|i| {
            Series::new(
                (0..len)
                    .map(|t| (i as f64) * 100.0 + (t as f64 * 0.7).sin())
                    .collect(),
            )
            .unwrap()
        })
        .collect();
    PanelValue::Nested(Panel::from_series(series).unwrap())
}

#[test]
fn chain_through_all_representations() {
    let original = make_panel(10, 16);

    let long = convert(&original, Mtype::Long).unwrap();
    let dense = convert(&long, Mtype::Dense3d).unwrap();
    let flat = convert(&dense, Mtype::Flat).unwrap();
    let back = convert(&flat, Mtype::Nested).unwrap();

    assert_eq!(back, original);
}

#[test]
fn metadata_stable_across_conversions() {
    let original = make_panel(10, 16);
    for mtype in Mtype::ALL {
        let value = convert(&original, mtype).unwrap();
        let meta = check_is_mtype(&value, mtype).unwrap();
        assert_eq!(meta.n_instances(), 10, "wrong instance count for {mtype}");
        assert_eq!(meta.n_variables(), 1, "wrong variable count for {mtype}");
        assert!(meta.is_equal_length(), "equal-length lost for {mtype}");
    }
}

#[test]
fn dense_source_round_trip() {
    let mut data = Array3::zeros((3, 2, 4));
    for ((i, j, k), x) in data.indexed_iter_mut() {
        *x = (i * 100 + j * 10 + k) as f64;
    }
    let dense = PanelValue::Dense(DensePanel::new(data).unwrap());

    for mtype in Mtype::ALL {
        let there = convert(&dense, mtype).unwrap();
        let back = convert(&there, Mtype::Dense3d).unwrap();
        assert_eq!(back, dense, "round trip via {mtype}");
    }
}

#[test]
fn long_source_preserves_instance_identity() {
    let mut rows = Vec::new();
    for i in 0..4 {
        for t in 0..5 {
            rows.push(LongRow {
                instance: i,
                variable: 0,
                time: t,
                value: i as f64 * 10.0 + t as f64,
            });
        }
    }
    let long = PanelValue::Long(LongTable::new(rows).unwrap());

    let nested = convert(&long, Mtype::Nested).unwrap();
    let PanelValue::Nested(panel) = nested else {
        panic!("expected nested value");
    };
    for i in 0..4 {
        assert_eq!(panel.series(i, 0).unwrap().as_slice()[0], i as f64 * 10.0);
    }
}

#[test]
fn ragged_panel_stays_in_ragged_capable_layouts() {
    let ragged = PanelValue::Nested(
        Panel::from_series(vec![
            Series::new(vec![1.0, 2.0, 3.0]).unwrap(),
            Series::new(vec![4.0, 5.0]).unwrap(),
        ])
        .unwrap(),
    );

    let long = convert(&ragged, Mtype::Long).unwrap();
    assert_eq!(convert(&long, Mtype::Nested).unwrap(), ragged);

    assert!(convert(&ragged, Mtype::Dense3d).is_err());
    assert!(convert(&long, Mtype::Flat).is_err());
}
