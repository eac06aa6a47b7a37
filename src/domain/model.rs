use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SumSign {
    Positive,
    Negative,
    Zero,
}

impl SumSign {
    pub fn of(sum: f64) -> Self {
        if sum > 0.0 {
            SumSign::Positive
        } else if sum < 0.0 {
            SumSign::Negative
        } else {
            SumSign::Zero
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Classification {
    OnlySentinel,
    AllPositive,
    AllNegative,
    Mixed { sum: f64, sum_sign: SumSign },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierSummary {
    pub values_read: usize,
    pub classification: Classification,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScanOutcome {
    InvalidRange { lower: u64, upper: u64 },
    Scanned { lower: u64, upper: u64, perfect: Vec<u64> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExerciseReport {
    Classifier(ClassifierSummary),
    Perfect(ScanOutcome),
}
