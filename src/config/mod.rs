pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "numdrill")]
#[command(about = "A small console tool for number drills")]
pub struct CliConfig {
    /// Which drill to run: classify, perfect, or all
    #[arg(long, default_value = "classify")]
    pub exercise: String,

    #[arg(long, default_value = "2")]
    pub lower: u64,

    #[arg(long, default_value = "100")]
    pub upper: u64,

    /// Consecutive non-numeric entries tolerated before giving up
    #[arg(long, default_value = "3")]
    pub max_input_retries: usize,

    /// Directory to write JSON drill reports into
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// "all" 展開成固定順序:先分類再找完全數
    pub fn execution_order(&self) -> Vec<&str> {
        match self.exercise.as_str() {
            "all" => vec!["classify", "perfect"],
            other => vec![other],
        }
    }
}

impl ConfigProvider for CliConfig {
    fn lower(&self) -> u64 {
        self.lower
    }

    fn upper(&self) -> u64 {
        self.upper
    }

    fn max_input_retries(&self) -> usize {
        self.max_input_retries
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validation::validate_exercise_name("exercise", &self.exercise)?;
        validation::validate_positive_number("max_input_retries", self.max_input_retries, 1)?;

        if let Some(path) = &self.output_path {
            validation::validate_path("output_path", path)?;
        }

        // lower > upper 不是配置錯誤:交給 perfect 練習本身回報
        Ok(())
    }
}
