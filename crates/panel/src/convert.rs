//! Lossless conversion between panel representations.
//!
//! The converter is a static table from (source, destination) tag pairs to
//! pure conversion functions. The table is an exhaustive `match` over
//! [`Mtype`] pairs, so completeness over the tag set is checked by the
//! compiler rather than at runtime. Every conversion is format-preserving:
//! A -> B -> A reproduces the original values.

use ndarray::{Array2, Array3};

use crate::error::PanelError;
use crate::mtype::Mtype;
use crate::panel::Panel;
use crate::series::Series;
use crate::value::{DensePanel, FlatPanel, LongRow, LongTable, PanelValue};

/// A pure conversion between two panel representations.
type ConvertFn = fn(&PanelValue) -> Result<PanelValue, PanelError>;

/// Converts a panel value to the requested representation.
///
/// Ragged panels are representable only as [`Mtype::Nested`] or
/// [`Mtype::Long`]; converting one to a dense layout fails rather than
/// truncating or padding.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`PanelError::RaggedPanel`] | unequal-length panel converted to `Dense3d`/`Flat` |
/// | [`PanelError::MalformedLongTable`] | long table with gaps or duplicate records |
pub fn convert(value: &PanelValue, to: Mtype) -> Result<PanelValue, PanelError> {
    conversion(value.mtype(), to)(value)
}

/// Looks up the conversion function for a tag pair.
///
/// The match is exhaustive over all 16 pairs; adding an `Mtype` variant
/// without extending this table is a compile error.
fn conversion(from: Mtype, to: Mtype) -> ConvertFn {
    use Mtype::{Dense3d, Flat, Long, Nested};
    match (from, to) {
        (Nested, Nested) | (Dense3d, Dense3d) | (Flat, Flat) | (Long, Long) => identity,
        (Nested, Dense3d) => nested_to_dense,
        (Nested, Flat) => nested_to_flat,
        (Nested, Long) => nested_to_long,
        (Dense3d, Nested) => dense_to_nested,
        (Dense3d, Flat) => dense_to_flat,
        (Dense3d, Long) => dense_to_long,
        (Flat, Nested) => flat_to_nested,
        (Flat, Dense3d) => flat_to_dense,
        (Flat, Long) => flat_to_long,
        (Long, Nested) => long_to_nested,
        (Long, Dense3d) => long_to_dense,
        (Long, Flat) => long_to_flat,
    }
}

fn identity(value: &PanelValue) -> Result<PanelValue, PanelError> {
    Ok(value.clone())
}

// ---------------------------------------------------------------------------
// Typed conversions to/from the nested hub
// ---------------------------------------------------------------------------

/// Extracts the nested panel, converting first if necessary.
fn as_nested(value: &PanelValue) -> Result<Panel, PanelError> {
    match value {
        PanelValue::Nested(panel) => Ok(panel.clone()),
        PanelValue::Dense(dense) => dense_to_nested_inner(dense),
        PanelValue::Flat(flat) => flat_to_nested_inner(flat),
        PanelValue::Long(table) => long_to_nested_inner(table),
    }
}

fn nested_to_dense_inner(panel: &Panel) -> Result<DensePanel, PanelError> {
    let n = panel.n_instances();
    let v = panel.n_variables();
    let t = panel.uniform_len(0)?;
    for var in 1..v {
        if panel.uniform_len(var)? != t {
            return Err(PanelError::RaggedPanel { variable: var });
        }
    }
    let mut data = Array3::zeros((n, v, t));
    for (i, instance) in panel.instances().enumerate() {
        for (j, series) in instance.iter().enumerate() {
            for (k, &x) in series.as_slice().iter().enumerate() {
                data[[i, j, k]] = x;
            }
        }
    }
    DensePanel::new(data)
}

fn dense_to_nested_inner(dense: &DensePanel) -> Result<Panel, PanelError> {
    let (n, v, _) = dense.dim();
    let arr = dense.as_array();
    let mut instances = Vec::with_capacity(n);
    for i in 0..n {
        let mut variables = Vec::with_capacity(v);
        for j in 0..v {
            variables.push(Series::new(arr.slice(ndarray::s![i, j, ..]).to_vec())?);
        }
        instances.push(variables);
    }
    Panel::from_instances(instances)
}

fn dense_to_flat_inner(dense: &DensePanel) -> Result<FlatPanel, PanelError> {
    let (n, v, t) = dense.dim();
    let mut data = Array2::zeros((n, v * t));
    for ((i, j, k), &x) in dense.as_array().indexed_iter() {
        data[[i, j * t + k]] = x;
    }
    FlatPanel::new(data, v)
}

fn flat_to_dense_inner(flat: &FlatPanel) -> Result<DensePanel, PanelError> {
    let n = flat.n_instances();
    let v = flat.n_variables();
    let t = flat.n_timepoints();
    let mut data = Array3::zeros((n, v, t));
    for ((i, col), &x) in flat.as_array().indexed_iter() {
        data[[i, col / t, col % t]] = x;
    }
    DensePanel::new(data)
}

fn flat_to_nested_inner(flat: &FlatPanel) -> Result<Panel, PanelError> {
    let t = flat.n_timepoints();
    let mut instances = Vec::with_capacity(flat.n_instances());
    for i in 0..flat.n_instances() {
        let row = flat.row(i);
        let variables = row
            .chunks(t)
            .map(|chunk| Series::new(chunk.to_vec()))
            .collect::<Result<Vec<_>, _>>()?;
        instances.push(variables);
    }
    Panel::from_instances(instances)
}

fn nested_to_long_inner(panel: &Panel) -> Result<LongTable, PanelError> {
    let mut rows = Vec::new();
    for (i, instance) in panel.instances().enumerate() {
        for (j, series) in instance.iter().enumerate() {
            for (k, &x) in series.as_slice().iter().enumerate() {
                rows.push(LongRow {
                    instance: i,
                    variable: j,
                    time: k,
                    value: x,
                });
            }
        }
    }
    LongTable::new(rows)
}

fn long_to_nested_inner(table: &LongTable) -> Result<Panel, PanelError> {
    let mut rows = table.rows().to_vec();
    rows.sort_by_key(|r| (r.instance, r.variable, r.time));

    // Every (instance, variable) cell needs at least one record, so any
    // index reaching the row count cannot belong to a dense grid; reject
    // before sizing the grid from it.
    let n_rows = rows.len();
    let max_instance = rows.iter().map(|r| r.instance).max().unwrap_or(0);
    let max_variable = rows.iter().map(|r| r.variable).max().unwrap_or(0);
    if max_instance >= n_rows {
        return Err(PanelError::MalformedLongTable {
            reason: format!("instance index {max_instance} out of range for {n_rows} records"),
        });
    }
    if max_variable >= n_rows {
        return Err(PanelError::MalformedLongTable {
            reason: format!("variable index {max_variable} out of range for {n_rows} records"),
        });
    }
    let n_instances = max_instance + 1;
    let n_variables = max_variable + 1;

    // Pre-size the grid, then fill cells in time order
    let mut grid: Vec<Vec<Vec<f64>>> = vec![vec![Vec::new(); n_variables]; n_instances];
    for row in &rows {
        let cell = &mut grid[row.instance][row.variable];
        if cell.len() != row.time {
            return Err(PanelError::MalformedLongTable {
                reason: format!(
                    "instance {}, variable {}: expected time {}, found {}",
                    row.instance,
                    row.variable,
                    cell.len(),
                    row.time
                ),
            });
        }
        cell.push(row.value);
    }

    let mut instances = Vec::with_capacity(n_instances);
    for (i, cells) in grid.into_iter().enumerate() {
        let mut variables = Vec::with_capacity(n_variables);
        for (j, cell) in cells.into_iter().enumerate() {
            if cell.is_empty() {
                return Err(PanelError::MalformedLongTable {
                    reason: format!("instance {i}, variable {j} has no observations"),
                });
            }
            variables.push(Series::new(cell)?);
        }
        instances.push(variables);
    }
    Panel::from_instances(instances)
}

// ---------------------------------------------------------------------------
// Table entries (all wrap the typed conversions above)
// ---------------------------------------------------------------------------

fn nested_to_dense(value: &PanelValue) -> Result<PanelValue, PanelError> {
    Ok(PanelValue::Dense(nested_to_dense_inner(&as_nested(value)?)?))
}

fn nested_to_flat(value: &PanelValue) -> Result<PanelValue, PanelError> {
    let dense = nested_to_dense_inner(&as_nested(value)?)?;
    Ok(PanelValue::Flat(dense_to_flat_inner(&dense)?))
}

fn nested_to_long(value: &PanelValue) -> Result<PanelValue, PanelError> {
    Ok(PanelValue::Long(nested_to_long_inner(&as_nested(value)?)?))
}

fn dense_to_nested(value: &PanelValue) -> Result<PanelValue, PanelError> {
    Ok(PanelValue::Nested(as_nested(value)?))
}

fn dense_to_flat(value: &PanelValue) -> Result<PanelValue, PanelError> {
    match value {
        PanelValue::Dense(dense) => Ok(PanelValue::Flat(dense_to_flat_inner(dense)?)),
        other => Err(wrong_mtype(Mtype::Dense3d, other)),
    }
}

fn dense_to_long(value: &PanelValue) -> Result<PanelValue, PanelError> {
    Ok(PanelValue::Long(nested_to_long_inner(&as_nested(value)?)?))
}

fn flat_to_nested(value: &PanelValue) -> Result<PanelValue, PanelError> {
    Ok(PanelValue::Nested(as_nested(value)?))
}

fn flat_to_dense(value: &PanelValue) -> Result<PanelValue, PanelError> {
    match value {
        PanelValue::Flat(flat) => Ok(PanelValue::Dense(flat_to_dense_inner(flat)?)),
        other => Err(wrong_mtype(Mtype::Flat, other)),
    }
}

fn flat_to_long(value: &PanelValue) -> Result<PanelValue, PanelError> {
    Ok(PanelValue::Long(nested_to_long_inner(&as_nested(value)?)?))
}

fn long_to_nested(value: &PanelValue) -> Result<PanelValue, PanelError> {
    Ok(PanelValue::Nested(as_nested(value)?))
}

fn long_to_dense(value: &PanelValue) -> Result<PanelValue, PanelError> {
    Ok(PanelValue::Dense(nested_to_dense_inner(&as_nested(value)?)?))
}

fn long_to_flat(value: &PanelValue) -> Result<PanelValue, PanelError> {
    let dense = nested_to_dense_inner(&as_nested(value)?)?;
    Ok(PanelValue::Flat(dense_to_flat_inner(&dense)?))
}

fn wrong_mtype(expected: Mtype, found: &PanelValue) -> PanelError {
    PanelError::WrongMtype {
        expected,
        found: found.mtype(),
    }
}
