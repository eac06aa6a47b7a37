use crate::core::{Exercise, ExerciseReport, ReportSink};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredReport {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub report: ExerciseReport,
}

pub struct DrillEngine<E: Exercise> {
    exercise: E,
}

impl<E: Exercise> DrillEngine<E> {
    pub fn new(exercise: E) -> Self {
        Self { exercise }
    }

    pub async fn run(&mut self) -> Result<ExerciseReport> {
        println!("Starting '{}' drill...", self.exercise.name());

        let report = self.exercise.run().await?;
        tracing::info!("Drill '{}' completed", self.exercise.name());

        Ok(report)
    }

    /// 執行練習並把報告存成 JSON 檔
    pub async fn run_and_store<S: ReportSink>(&mut self, sink: &S) -> Result<ExerciseReport> {
        let filename = format!("{}_report.json", self.exercise.name());
        let report = self.run().await?;

        let stored = StoredReport {
            generated_at: chrono::Utc::now(),
            report: report.clone(),
        };
        let data = serde_json::to_vec_pretty(&stored)?;
        sink.write_report(&filename, &data).await?;

        tracing::info!("Report saved to: {}", filename);
        println!("Report saved to: {}", filename);

        Ok(report)
    }
}
