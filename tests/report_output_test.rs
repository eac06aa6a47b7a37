use numdrill::adapters::input::SliceSource;
use numdrill::core::engine::StoredReport;
use numdrill::core::{Classification, ExerciseReport, ScanOutcome};
use numdrill::{ClassifierExercise, CliConfig, DrillEngine, LocalReportSink, PerfectExercise};
use tempfile::TempDir;

#[tokio::test]
async fn test_perfect_report_is_written_as_json() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let config = CliConfig {
        exercise: "perfect".to_string(),
        lower: 2,
        upper: 100,
        max_input_retries: 3,
        output_path: Some(output_path.clone()),
        verbose: false,
    };

    let sink = LocalReportSink::new(output_path.clone());
    let mut engine = DrillEngine::new(PerfectExercise::new(config));
    engine.run_and_store(&sink).await.unwrap();

    let report_path = temp_dir.path().join("perfect_report.json");
    assert!(report_path.exists());

    let data = std::fs::read_to_string(&report_path).unwrap();
    let stored: StoredReport = serde_json::from_str(&data).unwrap();
    assert_eq!(
        stored.report,
        ExerciseReport::Perfect(ScanOutcome::Scanned {
            lower: 2,
            upper: 100,
            perfect: vec![6, 28],
        })
    );
}

#[tokio::test]
async fn test_classifier_report_is_written_as_json() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let sink = LocalReportSink::new(output_path);
    let source = SliceSource::new(vec![-1.0, -2.0, 0.0]);
    let mut engine = DrillEngine::new(ClassifierExercise::new(source));
    engine.run_and_store(&sink).await.unwrap();

    let report_path = temp_dir.path().join("classify_report.json");
    assert!(report_path.exists());

    let data = std::fs::read_to_string(&report_path).unwrap();
    let stored: StoredReport = serde_json::from_str(&data).unwrap();
    match stored.report {
        ExerciseReport::Classifier(summary) => {
            assert_eq!(summary.values_read, 2);
            assert_eq!(summary.classification, Classification::AllNegative);
        }
        other => panic!("expected classifier report, got {:?}", other),
    }
}

#[tokio::test]
async fn test_sink_creates_missing_directories() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("nested").join("reports");

    let sink = LocalReportSink::new(nested.to_str().unwrap().to_string());
    let mut engine = DrillEngine::new(PerfectExercise::new(CliConfig {
        exercise: "perfect".to_string(),
        lower: 2,
        upper: 10,
        max_input_retries: 3,
        output_path: None,
        verbose: false,
    }));
    engine.run_and_store(&sink).await.unwrap();

    assert!(nested.join("perfect_report.json").exists());
}
