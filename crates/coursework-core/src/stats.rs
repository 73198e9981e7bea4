use serde::{Deserialize, Serialize};

use crate::error::{CourseworkError, Result};

/// Fraction of predictions that were correct, between 0 and 1.
///
/// # Arguments
///
/// * `correct` - Number of correct predictions.
/// * `total` - Total number of predictions.
pub fn accuracy(correct: u64, total: u64) -> Result<f64> {
    if total == 0 {
        return Err(CourseworkError::EmptyPopulation);
    }
    if correct > total {
        return Err(CourseworkError::InvalidCount {
            part: correct,
            total,
        });
    }
    Ok(correct as f64 / total as f64)
}

/// Outcome counts of a binary classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub tp: u64,
    pub fp: u64,
    #[serde(rename = "fn")]
    pub fn_: u64,
    pub tn: u64,
}

impl ConfusionMatrix {
    pub fn new(tp: u64, fp: u64, fn_: u64, tn: u64) -> Self {
        Self { tp, fp, fn_, tn }
    }

    /// Count outcomes from paired predicted/actual labels.
    pub fn from_predictions(predicted: &[bool], actual: &[bool]) -> Result<Self> {
        if predicted.len() != actual.len() {
            return Err(CourseworkError::DimensionMismatch {
                left: predicted.len(),
                right: actual.len(),
            });
        }
        let mut matrix = Self::default();
        for (&p, &a) in predicted.iter().zip(actual.iter()) {
            match (p, a) {
                (true, true) => matrix.tp += 1,
                (true, false) => matrix.fp += 1,
                (false, true) => matrix.fn_ += 1,
                (false, false) => matrix.tn += 1,
            }
        }
        Ok(matrix)
    }

    pub fn total(&self) -> u64 {
        self.tp + self.fp + self.fn_ + self.tn
    }

    /// (TP + TN) / (TP + TN + FP + FN)
    pub fn accuracy(&self) -> Result<f64> {
        accuracy(self.tp + self.tn, self.total())
    }

    pub fn precision(&self) -> Option<f64> {
        ratio(self.tp, self.tp + self.fp)
    }

    pub fn recall(&self) -> Option<f64> {
        ratio(self.tp, self.tp + self.fn_)
    }

    /// Share of actual positives the classifier missed.
    pub fn false_negative_rate(&self) -> Option<f64> {
        ratio(self.fn_, self.tp + self.fn_)
    }
}

fn ratio(part: u64, total: u64) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(part as f64 / total as f64)
    }
}
