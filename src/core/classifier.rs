use crate::core::{Classification, ClassifierSummary, Exercise, ExerciseReport, NumberSource, SumSign};
use crate::utils::error::{DrillError, Result};

/// 哨兵值:讀到 0 就停止收集,0 本身不列入分析
pub const SENTINEL: f64 = 0.0;

pub const PROMPT: &str = "Number? ";

pub fn classify(values: &[f64]) -> Classification {
    if values.is_empty() {
        return Classification::OnlySentinel;
    }

    let all_positive = values.iter().all(|n| *n > 0.0);
    let all_negative = values.iter().all(|n| *n < 0.0);

    if all_positive {
        Classification::AllPositive
    } else if all_negative {
        Classification::AllNegative
    } else {
        let sum: f64 = values.iter().sum();
        Classification::Mixed {
            sum,
            sum_sign: SumSign::of(sum),
        }
    }
}

pub struct ClassifierExercise<S: NumberSource> {
    source: S,
}

impl<S: NumberSource> ClassifierExercise<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    async fn collect(&mut self) -> Result<Vec<f64>> {
        let mut numbers = Vec::new();
        loop {
            match self.source.next_number(PROMPT).await? {
                Some(n) if n == SENTINEL => break,
                Some(n) => numbers.push(n),
                None => {
                    return Err(DrillError::InputError {
                        message: "input ended before the sentinel (0) was entered".to_string(),
                    })
                }
            }
        }
        Ok(numbers)
    }
}

#[async_trait::async_trait]
impl<S: NumberSource> Exercise for ClassifierExercise<S> {
    fn name(&self) -> &'static str {
        "classify"
    }

    async fn run(&mut self) -> Result<ExerciseReport> {
        let numbers = self.collect().await?;
        tracing::debug!("Collected {} numbers before the sentinel", numbers.len());

        let classification = classify(&numbers);
        render(&classification);

        Ok(ExerciseReport::Classifier(ClassifierSummary {
            values_read: numbers.len(),
            classification,
        }))
    }
}

fn render(classification: &Classification) {
    match classification {
        Classification::OnlySentinel => println!("Only the sentinel was given."),
        Classification::AllPositive => println!("All numbers are positive."),
        Classification::AllNegative => println!("All numbers are negative."),
        Classification::Mixed { sum_sign, .. } => {
            println!("Neither all positive nor all negative.");
            match sum_sign {
                SumSign::Positive => println!("Sum is positive."),
                SumSign::Negative => println!("Sum is negative."),
                SumSign::Zero => println!("Sum is exactly zero."),
            }
        }
    }
}
