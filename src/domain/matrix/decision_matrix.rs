//! Decision matrix - alternatives by criteria raw values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::EngineError;

/// The raw decision matrix: ordered alternatives and one numeric column per
/// criterion.
///
/// Column order follows insertion order and matches the criterion spec list
/// a run is given. Non-finite raw values are coerced to NaN at build time;
/// a NaN cell is never silently replaced downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    /// Ordered, unique alternative identifiers.
    pub alternatives: Vec<String>,
    /// Criterion names in column order.
    pub criteria: Vec<String>,
    /// Raw value columns keyed by criterion name, one value per alternative.
    pub columns: HashMap<String, Vec<f64>>,
}

impl DecisionMatrix {
    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Returns the column for a criterion, if present.
    pub fn column(&self, criterion: &str) -> Option<&[f64]> {
        self.columns.get(criterion).map(Vec::as_slice)
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Returns true if the matrix has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Checks the matrix shape invariants.
    ///
    /// Fails fast on an empty matrix, mismatched column lengths, duplicate
    /// identifiers, or a column with no finite value at all.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.alternatives.is_empty() {
            return Err(EngineError::NoAlternatives);
        }
        if self.criteria.is_empty() {
            return Err(EngineError::NoCriteria);
        }
        for (index, alternative) in self.alternatives.iter().enumerate() {
            if self.alternatives[..index].contains(alternative) {
                return Err(EngineError::DuplicateAlternative(alternative.clone()));
            }
        }
        for (index, criterion) in self.criteria.iter().enumerate() {
            if self.criteria[..index].contains(criterion) {
                return Err(EngineError::DuplicateCriterion(criterion.clone()));
            }
        }
        for criterion in &self.criteria {
            let column = self
                .column(criterion)
                .ok_or_else(|| EngineError::UnknownCriterion(criterion.clone()))?;
            if column.len() != self.alternatives.len() {
                return Err(EngineError::ShapeMismatch {
                    criterion: criterion.clone(),
                    expected: self.alternatives.len(),
                    actual: column.len(),
                });
            }
            if !column.iter().any(|v| v.is_finite()) {
                return Err(EngineError::NoFiniteValues(criterion.clone()));
            }
        }
        Ok(())
    }

    /// The bundled demo matrix: five suppliers over cost, quality, and
    /// delivery time.
    pub fn demo() -> Self {
        let mut columns = HashMap::new();
        columns.insert("Cost".to_string(), vec![200.0, 250.0, 300.0, 220.0, 180.0]);
        columns.insert("Quality".to_string(), vec![8.0, 7.0, 9.0, 8.0, 6.0]);
        columns.insert("Delivery".to_string(), vec![4.0, 5.0, 6.0, 4.0, 7.0]);
        Self {
            alternatives: ["A1", "A2", "A3", "A4", "A5"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            criteria: ["Cost", "Quality", "Delivery"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            columns,
        }
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    alternatives: Vec<String>,
    criteria: Vec<String>,
    columns: HashMap<String, Vec<f64>>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alternative identifiers.
    pub fn alternatives(mut self, ids: Vec<impl Into<String>>) -> Self {
        self.alternatives = ids.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Adds a criterion column. Non-finite values are coerced to NaN.
    pub fn column(mut self, criterion: impl Into<String>, values: Vec<f64>) -> Self {
        let criterion = criterion.into();
        let values = values
            .into_iter()
            .map(|v| if v.is_finite() { v } else { f64::NAN })
            .collect();
        if !self.criteria.contains(&criterion) {
            self.criteria.push(criterion.clone());
        }
        self.columns.insert(criterion, values);
        self
    }

    /// Builds the matrix, validating the shape invariants.
    pub fn build(self) -> Result<DecisionMatrix, EngineError> {
        let matrix = DecisionMatrix {
            alternatives: self.alternatives,
            criteria: self.criteria,
            columns: self.columns,
        };
        matrix.validate()?;
        Ok(matrix)
    }
}
