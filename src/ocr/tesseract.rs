//! Tesseract 命令行识别器
//! 调用 `<tesseract_cmd> <image> stdout -l <lang>`，读取标准输出作为识别文本

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::TextRecognizer;
use crate::config::GlobalConfig;
use crate::error::{LvResult, LabelVerifierError};

/// Tesseract 识别器
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    executable: PathBuf,
    language: String,
    timeout_secs: u64,
}

impl TesseractRecognizer {
    pub fn new(config: &GlobalConfig) -> Self {
        Self {
            executable: config.tesseract_cmd.clone(),
            language: config.ocr_language.clone(),
            timeout_secs: config.ocr_timeout,
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// 构建命令行参数
    fn build_args(&self, image_path: &Path) -> Vec<String> {
        vec![
            image_path.to_string_lossy().into_owned(),
            "stdout".to_string(),
            "-l".to_string(),
            self.language.clone(),
        ]
    }
}

#[async_trait]
impl TextRecognizer for TesseractRecognizer {
    fn name(&self) -> &str {
        "tesseract"
    }

    async fn recognize(&self, image_path: &Path) -> LvResult<String> {
        if !tokio::fs::try_exists(image_path).await.unwrap_or(false) {
            return Err(LabelVerifierError::InvalidInput(format!(
                "图片文件不存在：{}",
                image_path.display()
            )));
        }

        let args = self.build_args(image_path);
        debug!("调用OCR：{} {}", self.executable.display(), args.join(" "));

        let output = timeout(
            Duration::from_secs(self.timeout_secs),
            Command::new(&self.executable).args(&args).kill_on_drop(true).output(),
        )
        .await
        .map_err(|_| LabelVerifierError::OcrTimeout(self.timeout_secs))?;

        let output = output.map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                LabelVerifierError::OcrNotFound(self.executable.display().to_string())
            }
            _ => LabelVerifierError::OcrFailed(e.to_string()),
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(LabelVerifierError::OcrFailed(format!(
                "退出码{:?}：{}",
                output.status.code(),
                stderr.trim()
            )));
        }
        if !stderr.trim().is_empty() {
            warn!("Tesseract stderr：{}", stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
