//! Generic per-cell fan-out over a panel.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use kronos_forecast::{ForecastError, InputShape};
use kronos_panel::{Panel, PanelMetadata, Series};

use crate::error::BroadcastError;

/// Returns `true` if an estimator with the given declared input shape
/// needs fan-out over the described panel.
///
/// A panel-native estimator never does. A series-only estimator does
/// unless the panel is a single cell, which can be interpreted as a
/// plain series.
pub fn requires_broadcast(input: InputShape, metadata: &PanelMetadata) -> bool {
    match input {
        InputShape::Panel => false,
        InputShape::Series => metadata.n_instances() > 1 || metadata.n_variables() > 1,
    }
}

/// Applies `op` independently to every (instance, variable) cell of a
/// panel and collects the results in cell order.
///
/// Cells carry no cross-dependency, so invocations run on the rayon
/// thread pool; the result order is the panel's cell order regardless
/// of scheduling. `op` receives the instance index, variable index, and
/// the cell's series.
///
/// # Errors
///
/// Fail-fast: if any cell fails, the whole call fails with
/// [`BroadcastError::InstanceFailed`] identifying the lowest-indexed
/// failing cell, and cells not yet started are skipped. No partial
/// results are returned.
pub fn broadcast_apply<T, F>(panel: &Panel, op: F) -> Result<Vec<Vec<T>>, BroadcastError>
where
    T: Send,
    F: Fn(usize, usize, &Series) -> Result<T, ForecastError> + Sync,
{
    let cells: Vec<(usize, usize, &Series)> = panel
        .instances()
        .enumerate()
        .flat_map(|(i, instance)| {
            instance
                .iter()
                .enumerate()
                .map(move |(v, series)| (i, v, series))
        })
        .collect();

    // Cells past a recorded failure are skipped (`None`); their results
    // would be discarded anyway. Every failing cell records its index, so
    // the first non-`Ok` entry in cell order is the lowest-indexed failure.
    let failed_at = AtomicUsize::new(usize::MAX);
    let results: Vec<Option<Result<T, ForecastError>>> = cells
        .par_iter()
        .enumerate()
        .map(|(idx, &(i, v, series))| {
            if idx > failed_at.load(Ordering::Relaxed) {
                return None;
            }
            let result = op(i, v, series);
            if result.is_err() {
                failed_at.fetch_min(idx, Ordering::Relaxed);
            }
            Some(result)
        })
        .collect();

    let n_variables = panel.n_variables();
    let mut out: Vec<Vec<T>> = Vec::with_capacity(panel.n_instances());
    let mut row: Vec<T> = Vec::with_capacity(n_variables);
    for ((i, v, _), result) in cells.iter().zip(results) {
        match result {
            Some(Ok(value)) => {
                row.push(value);
                if *v == n_variables - 1 {
                    out.push(std::mem::replace(&mut row, Vec::with_capacity(n_variables)));
                }
            }
            Some(Err(source)) => {
                return Err(BroadcastError::InstanceFailed {
                    instance: *i,
                    variable: *v,
                    source,
                });
            }
            // skipped cells only occur after an earlier recorded failure
            None => {}
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kronos_panel::{Mtype, PanelValue, check_is_mtype};

    fn series(data: &[f64]) -> Series {
        Series::new(data.to_vec()).unwrap()
    }

    fn univariate(n: usize) -> Panel {
        Panel::from_series((0..n).map(|i| series(&[i as f64, 1.0])).collect()).unwrap()
    }

    #[test]
    fn applies_per_cell_in_order() {
        let panel = univariate(4);
        let sums = broadcast_apply(&panel, |_, _, s| {
            Ok(s.as_slice().iter().sum::<f64>())
        })
        .unwrap();
        assert_eq!(sums.len(), 4);
        assert_eq!(sums[0], vec![1.0]);
        assert_eq!(sums[3], vec![4.0]);
    }

    #[test]
    fn cell_indices_reported() {
        let panel = Panel::from_instances(vec![
            vec![series(&[1.0]), series(&[2.0])],
            vec![series(&[3.0]), series(&[4.0])],
        ])
        .unwrap();
        let indices = broadcast_apply(&panel, |i, v, _| Ok((i, v))).unwrap();
        assert_eq!(indices, vec![vec![(0, 0), (0, 1)], vec![(1, 0), (1, 1)]]);
    }

    #[test]
    fn first_failing_cell_surfaces() {
        let panel = univariate(6);
        // Instances 2 and 4 both fail; the lower index must surface
        let err = broadcast_apply(&panel, |i, _, _| {
            if i == 2 || i == 4 {
                Err(ForecastError::ConstantData)
            } else {
                Ok(i)
            }
        })
        .unwrap_err();
        assert!(matches!(
            err,
            BroadcastError::InstanceFailed {
                instance: 2,
                variable: 0,
                source: ForecastError::ConstantData
            }
        ));
    }

    #[test]
    fn early_failure_skips_remaining_cells() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let panel = univariate(64);
        let invocations = AtomicUsize::new(0);
        let err = broadcast_apply(&panel, |i, _, _| {
            invocations.fetch_add(1, Ordering::Relaxed);
            if i == 0 {
                Err(ForecastError::ConstantData)
            } else {
                Ok(i)
            }
        })
        .unwrap_err();
        // Scheduling decides how many cells ran, but never more than all,
        // and the reported failure is still the lowest-indexed one
        assert!(invocations.load(Ordering::Relaxed) <= 64);
        assert!(matches!(
            err,
            BroadcastError::InstanceFailed {
                instance: 0,
                variable: 0,
                source: ForecastError::ConstantData
            }
        ));
    }

    #[test]
    fn no_partial_results_on_failure() {
        let panel = univariate(3);
        let result: Result<Vec<Vec<usize>>, _> = broadcast_apply(&panel, |i, _, _| {
            if i == 1 {
                Err(ForecastError::NotFitted)
            } else {
                Ok(i)
            }
        });
        assert!(result.is_err());
    }

    #[test]
    fn requires_broadcast_dispatch() {
        let panel = PanelValue::Nested(univariate(10));
        let meta = check_is_mtype(&panel, Mtype::Nested).unwrap();
        assert!(requires_broadcast(InputShape::Series, &meta));
        assert!(!requires_broadcast(InputShape::Panel, &meta));

        let single = PanelValue::Nested(univariate(1));
        let meta = check_is_mtype(&single, Mtype::Nested).unwrap();
        assert!(!requires_broadcast(InputShape::Series, &meta));
    }
}
