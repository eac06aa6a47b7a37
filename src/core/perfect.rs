use crate::core::{ConfigProvider, Exercise, ExerciseReport, ScanOutcome};
use crate::utils::error::Result;

/// 真因數和:掃描 [1, n/2] (整數除法,含上界) 內能整除 n 的 i
/// n <= 1 時定義為 0
pub fn proper_divisor_sum(n: u64) -> u64 {
    if n <= 1 {
        return 0;
    }
    (1..=n / 2).filter(|i| n % i == 0).sum()
}

pub fn is_perfect(n: u64) -> bool {
    // 完全數是正整數,1 以下不成立
    n >= 2 && proper_divisor_sum(n) == n
}

pub fn perfect_in_range(lower: u64, upper: u64) -> Vec<u64> {
    (lower..=upper).filter(|n| is_perfect(*n)).collect()
}

pub struct PerfectExercise<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> PerfectExercise<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Exercise for PerfectExercise<C> {
    fn name(&self) -> &'static str {
        "perfect"
    }

    async fn run(&mut self) -> Result<ExerciseReport> {
        let lower = self.config.lower();
        let upper = self.config.upper();

        // 範圍顛倒是軟性錯誤:印出診斷,不做任何計算,正常返回
        if lower > upper {
            tracing::warn!("Invalid range requested: [{}, {}]", lower, upper);
            println!(
                "Invalid range: lower bound {} exceeds upper bound {}.",
                lower, upper
            );
            return Ok(ExerciseReport::Perfect(ScanOutcome::InvalidRange {
                lower,
                upper,
            }));
        }

        tracing::debug!("Scanning [{}, {}] for perfect numbers", lower, upper);
        let perfect = perfect_in_range(lower, upper);

        println!("Perfect numbers between {} and {}:", lower, upper);
        if perfect.is_empty() {
            println!("No perfect numbers found in this range.");
        } else {
            let line = perfect
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!("{}", line);
        }

        Ok(ExerciseReport::Perfect(ScanOutcome::Scanned {
            lower,
            upper,
            perfect,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proper_divisor_sum_perfect_numbers() {
        assert_eq!(proper_divisor_sum(6), 6);
        assert_eq!(proper_divisor_sum(28), 28);
        assert_eq!(proper_divisor_sum(496), 496);
    }

    #[test]
    fn test_proper_divisor_sum_non_perfect() {
        // 7 的真因數只有 1
        assert_eq!(proper_divisor_sum(7), 1);
        assert_eq!(proper_divisor_sum(12), 16);
    }

    #[test]
    fn test_proper_divisor_sum_degenerate() {
        assert_eq!(proper_divisor_sum(0), 0);
        assert_eq!(proper_divisor_sum(1), 0);
    }

    #[test]
    fn test_is_perfect() {
        assert!(is_perfect(6));
        assert!(is_perfect(28));
        assert!(!is_perfect(7));
        assert!(!is_perfect(1));
        assert!(!is_perfect(0));
    }

    #[test]
    fn test_perfect_in_default_range() {
        assert_eq!(perfect_in_range(2, 100), vec![6, 28]);
    }

    #[test]
    fn test_perfect_in_wider_range() {
        assert_eq!(perfect_in_range(2, 500), vec![6, 28, 496]);
    }

    #[test]
    fn test_perfect_in_empty_stretch() {
        assert_eq!(perfect_in_range(29, 100), Vec::<u64>::new());
    }
}
