use crate::domain::ports::NumberSource;
use crate::utils::error::{DrillError, Result};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

/// 互動式輸入來源:在 stdout 顯示提示,每次讀一行、取一個數字
///
/// 非數字的輸入會被拒絕並重新提示;連續失敗超過 max_retries 次
/// 就以 InputError 結束,避免在非互動環境下無限循環。
pub struct ConsoleSource<R> {
    reader: R,
    max_retries: usize,
}

impl ConsoleSource<BufReader<Stdin>> {
    pub fn stdin(max_retries: usize) -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), max_retries)
    }
}

impl<R: AsyncBufRead + Unpin + Send> ConsoleSource<R> {
    pub fn new(reader: R, max_retries: usize) -> Self {
        Self {
            reader,
            max_retries,
        }
    }

    async fn read_token(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{}", prompt);
        std::io::stdout().flush()?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line).await?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: AsyncBufRead + Unpin + Send> NumberSource for ConsoleSource<R> {
    async fn next_number(&mut self, prompt: &str) -> Result<Option<f64>> {
        let mut failures = 0;
        loop {
            let Some(token) = self.read_token(prompt).await? else {
                return Ok(None);
            };

            // 空行直接重新提示,不算格式錯誤
            if token.is_empty() {
                continue;
            }

            match token.parse::<f64>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => {
                    failures += 1;
                    tracing::warn!(
                        "Rejected non-numeric input {:?} ({}/{})",
                        token,
                        failures,
                        self.max_retries
                    );
                    eprintln!("❌ Not a number: {}. Please enter a numeric value.", token);

                    if failures >= self.max_retries {
                        return Err(DrillError::InputError {
                            message: format!(
                                "{} consecutive non-numeric entries, giving up",
                                failures
                            ),
                        });
                    }
                }
            }
        }
    }
}

/// 測試用的記憶體來源,依序吐出預先準備好的數字
pub struct SliceSource {
    values: std::vec::IntoIter<f64>,
}

impl SliceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values: values.into_iter(),
        }
    }
}

impl NumberSource for SliceSource {
    async fn next_number(&mut self, _prompt: &str) -> Result<Option<f64>> {
        Ok(self.values.next())
    }
}
