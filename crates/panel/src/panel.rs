//! Nested panel container (series per cell).

use crate::error::PanelError;
use crate::series::Series;

/// An ordered collection of time-series instances.
///
/// Each instance holds the same number of variables; each variable is a
/// [`Series`]. Instances MAY differ in per-variable length ("unequal
/// length" panels), which the nested layout represents without loss.
///
/// Construction validates the variable-count invariant; the panel never
/// mutates caller data after that.
///
/// # Example
///
/// ```
/// use kronos_panel::{Panel, Series};
///
/// let panel = Panel::from_series(vec![
///     Series::new(vec![1.0, 2.0]).unwrap(),
///     Series::new(vec![3.0, 4.0]).unwrap(),
/// ]).unwrap();
/// assert_eq!(panel.n_instances(), 2);
/// assert_eq!(panel.n_variables(), 1);
/// assert!(panel.is_equal_length());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    instances: Vec<Vec<Series>>,
    n_variables: usize,
}

impl Panel {
    /// Creates a panel from per-instance variable lists.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`PanelError::EmptyPanel`] | `instances` is empty |
    /// | [`PanelError::NoVariables`] | any instance has zero variables |
    /// | [`PanelError::VariableCountMismatch`] | instances disagree on variable count |
    pub fn from_instances(instances: Vec<Vec<Series>>) -> Result<Self, PanelError> {
        let first = instances.first().ok_or(PanelError::EmptyPanel)?;
        let n_variables = first.len();
        if n_variables == 0 {
            return Err(PanelError::NoVariables);
        }
        for (i, instance) in instances.iter().enumerate() {
            if instance.len() != n_variables {
                return Err(PanelError::VariableCountMismatch {
                    instance: i,
                    expected: n_variables,
                    got: instance.len(),
                });
            }
        }
        Ok(Self {
            instances,
            n_variables,
        })
    }

    /// Creates a univariate panel, one series per instance.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::EmptyPanel`] if `series` is empty.
    pub fn from_series(series: Vec<Series>) -> Result<Self, PanelError> {
        Self::from_instances(series.into_iter().map(|s| vec![s]).collect())
    }

    /// Returns the number of instances.
    pub fn n_instances(&self) -> usize {
        self.instances.len()
    }

    /// Returns the number of variables per instance.
    pub fn n_variables(&self) -> usize {
        self.n_variables
    }

    /// Returns the variables of the instance at `i`.
    ///
    /// Returns `None` if `i` is out of range.
    pub fn instance(&self, i: usize) -> Option<&[Series]> {
        self.instances.get(i).map(|v| v.as_slice())
    }

    /// Returns the series for instance `i`, variable `v`.
    ///
    /// Returns `None` if either index is out of range.
    pub fn series(&self, i: usize, v: usize) -> Option<&Series> {
        self.instances.get(i).and_then(|inst| inst.get(v))
    }

    /// Returns an iterator over instances (each a slice of variables).
    pub fn instances(&self) -> impl Iterator<Item = &[Series]> {
        self.instances.iter().map(|v| v.as_slice())
    }

    /// Returns `true` if every variable has identical length across all
    /// instances.
    pub fn is_equal_length(&self) -> bool {
        (0..self.n_variables).all(|v| {
            let first_len = self.instances[0][v].len();
            self.instances.iter().all(|inst| inst[v].len() == first_len)
        })
    }

    /// Returns the common series length of variable `v`, or the variable
    /// index at which lengths diverge.
    ///
    /// Used by dense conversions, which cannot represent ragged data.
    pub(crate) fn uniform_len(&self, v: usize) -> Result<usize, PanelError> {
        let len = self.instances[0][v].len();
        for inst in &self.instances {
            if inst[v].len() != len {
                return Err(PanelError::RaggedPanel { variable: v });
            }
        }
        Ok(len)
    }
}
