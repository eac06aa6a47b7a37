use crate::domain::model::ExerciseReport;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait NumberSource: Send {
    fn next_number(
        &mut self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<Option<f64>>> + Send;
}

pub trait ReportSink: Send + Sync {
    fn write_report(
        &self,
        name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn lower(&self) -> u64;
    fn upper(&self) -> u64;
    fn max_input_retries(&self) -> usize;
    fn output_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait Exercise: Send {
    fn name(&self) -> &'static str;
    async fn run(&mut self) -> Result<ExerciseReport>;
}
