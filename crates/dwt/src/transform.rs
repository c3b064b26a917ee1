//! Multi-level DWT over panels.

use rayon::prelude::*;
use tracing::warn;

use kronos_panel::{Mtype, Panel, PanelError, PanelValue, Series, convert};

use crate::config::DwtConfig;
use crate::error::DwtError;
use crate::haar::{approx_coefficients, detail_coefficients};

/// Computes the DWT coefficient vector for a single series.
///
/// Runs `num_levels` Haar decompositions, each starting from the previous
/// level's approximation. The output is assembled coarsest-first:
/// `[approx_L, detail_L, detail_{L-1}, ..., detail_1]`. With
/// `num_levels == 0` the input is returned unchanged.
///
/// # Example
///
/// ```
/// use kronos_dwt::dwt_series;
///
/// let coeffs = dwt_series(&[1.0, 2.0, 3.0, 4.0], 2);
/// assert_eq!(coeffs.len(), 4);
/// assert!((coeffs[0] - 5.0).abs() < 1e-12);
/// ```
pub fn dwt_series(x: &[f64], num_levels: usize) -> Vec<f64> {
    if num_levels == 0 {
        return x.to_vec();
    }
    let mut details: Vec<Vec<f64>> = Vec::with_capacity(num_levels);
    let mut current = x.to_vec();
    for _ in 0..num_levels {
        details.push(detail_coefficients(&current));
        current = approx_coefficients(&current);
    }
    let total = current.len() + details.iter().map(Vec::len).sum::<usize>();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&current);
    for detail in details.iter().rev() {
        out.extend_from_slice(detail);
    }
    out
}

/// Returns `true` if decomposing a series of length `len` for `levels`
/// levels drops a trailing unpaired sample at any level.
fn drops_samples(mut len: usize, levels: usize) -> bool {
    for _ in 0..levels {
        if len <= 1 {
            return false;
        }
        if len % 2 == 1 {
            return true;
        }
        len /= 2;
    }
    false
}

/// Transforms every instance of a panel into its DWT coefficient vector.
///
/// The input is normalized to the nested layout; each instance's
/// variables are laid out contiguously in one row (the layout the
/// coefficient engine expects), decomposed independently, and the
/// resulting univariate coefficient panel is returned in the caller's
/// input representation. Nested input returns nested output, so ragged
/// panels transform without an equal-length requirement; coefficient
/// lengths then simply differ across instances.
///
/// The per-instance loop has no cross-instance dependency and runs on
/// the rayon thread pool.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DwtError::Panel`] | input value violates its representation's shape constraints |
pub fn dwt(value: &PanelValue, config: &DwtConfig) -> Result<PanelValue, DwtError> {
    let input_mtype = value.mtype();
    let PanelValue::Nested(panel) = convert(value, Mtype::Nested)? else {
        return Err(PanelError::WrongMtype {
            expected: Mtype::Nested,
            found: input_mtype,
        }
        .into());
    };

    let rows: Vec<Vec<f64>> = panel
        .instances()
        .map(|instance| {
            let len = instance.iter().map(Series::len).sum();
            let mut row = Vec::with_capacity(len);
            for series in instance {
                row.extend_from_slice(series.as_slice());
            }
            row
        })
        .collect();

    let num_levels = config.num_levels();
    let dropped = rows
        .iter()
        .filter(|row| drops_samples(row.len(), num_levels))
        .count();
    if dropped > 0 {
        warn!(
            n_instances = dropped,
            num_levels, "odd series length: trailing unpaired sample dropped during decomposition"
        );
    }

    let coefficients = rows
        .par_iter()
        .map(|row| Series::new(dwt_series(row, num_levels)))
        .collect::<Result<Vec<_>, _>>()?;

    let result = PanelValue::Nested(Panel::from_series(coefficients)?);
    if input_mtype == Mtype::Nested {
        return Ok(result);
    }
    Ok(convert(&result, input_mtype)?)
}
