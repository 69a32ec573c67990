//! OCR 协作方模块
//!
//! 核心比对逻辑只接收已识别的文本；图片识别由外部 OCR 程序完成，
//! 程序路径、语言与超时均通过 [`GlobalConfig`](crate::config::GlobalConfig) 显式传入。
pub mod tesseract;

use std::path::Path;
use async_trait::async_trait;

use crate::error::LvResult;

pub use self::tesseract::TesseractRecognizer;

/// 文本识别器（图片 → 纯文本）
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// 识别器名称（用于日志输出）
    fn name(&self) -> &str;

    /// 识别图片中的文本
    async fn recognize(&self, image_path: &Path) -> LvResult<String>;
}
