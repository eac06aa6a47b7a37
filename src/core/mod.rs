pub mod classifier;
pub mod engine;
pub mod perfect;

pub use crate::domain::model::{
    Classification, ClassifierSummary, ExerciseReport, ScanOutcome, SumSign,
};
pub use crate::domain::ports::{ConfigProvider, Exercise, NumberSource, ReportSink};
pub use crate::utils::error::Result;
