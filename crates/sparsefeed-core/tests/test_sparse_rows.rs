//! Row gather and densify against a dense reference.

use nalgebra::DMatrix;
use proptest::prelude::*;
use sparsefeed_core::config::ParallelThresholds;
use sparsefeed_core::sparse::CsrMatrix;

fn dense_strategy() -> impl Strategy<Value = DMatrix<f64>> {
    (1usize..24, 1usize..12).prop_flat_map(|(r, c)| {
        prop::collection::vec(prop_oneof![3 => Just(0.0), 1 => -5.0f64..5.0], r * c)
            .prop_map(move |data| DMatrix::from_row_slice(r, c, &data))
    })
}

proptest! {
    #[test]
    fn densify_rows_matches_dense_gather(
        dense in dense_strategy(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..30),
    ) {
        let csr = CsrMatrix::from_dense(&dense, 0.0);
        let rows: Vec<usize> = picks.iter().map(|i| i.index(dense.nrows())).collect();

        let got = csr.densify_rows(&rows).unwrap();
        prop_assert_eq!(got.shape(), (rows.len(), dense.ncols()));
        for (i, &r) in rows.iter().enumerate() {
            prop_assert_eq!(got.row(i), dense.row(r));
        }

        prop_assert_eq!(csr.select_rows(&rows).unwrap().to_dense(), got);
    }

    #[test]
    fn from_dense_round_trips(dense in dense_strategy()) {
        let csr = CsrMatrix::from_dense(&dense, 0.0);
        prop_assert_eq!(csr.to_dense(), dense);
    }
}

#[test]
fn large_batch_densify_is_exact() {
    let nrows = 2_000;
    let ncols = 512;
    let mut row_ptr = vec![0];
    let mut col_idx = Vec::new();
    let mut values = Vec::new();
    for r in 0..nrows {
        for k in 0..3 {
            col_idx.push((r * 7 + k * 131) % ncols);
            values.push((r + k) as f32);
        }
        row_ptr.push(col_idx.len());
    }
    let csr = CsrMatrix::new(nrows, ncols, row_ptr, col_idx, values).unwrap();

    let rows: Vec<usize> = (0..nrows).rev().step_by(3).collect();
    // Forces the rayon fill even when the pool has a single worker.
    let parallel = ParallelThresholds {
        densify_cells: 1,
        min_rows_per_task: 1,
        num_threads: 2,
    };
    if cfg!(feature = "parallel") {
        assert!(parallel.should_parallelize_densify(rows.len(), ncols));
    }

    let dense = csr.densify_rows_with(&parallel, &rows).unwrap();
    let reference = csr.to_dense();
    for (i, &r) in rows.iter().enumerate() {
        assert_eq!(dense.row(i), reference.row(r));
    }

    let sequential = csr
        .densify_rows_with(&ParallelThresholds::sequential(), &rows)
        .unwrap();
    assert_eq!(dense, sequential);
}
