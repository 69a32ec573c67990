//! 全局错误类型定义
//! 核心匹配逻辑本身不会失败，错误只来自规则加载、OCR 调用与输入解析

use thiserror::Error;
use regex::Error as RegexError;

#[derive(Error, Debug)]
pub enum LabelVerifierError {
    // 单位规则相关错误
    #[error("单位规则加载失败：{0}")]
    UnitRuleLoadError(String),
    #[error("单位规则解析失败：{0}")]
    UnitRuleParseError(String),

    // 编译相关错误
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),

    // 校验器相关错误
    #[error("校验器未初始化")]
    VerifierNotInitialized,

    // OCR 协作方错误
    #[error("未找到OCR程序：{0}")]
    OcrNotFound(String),
    #[error("OCR识别失败：{0}")]
    OcrFailed(String),
    #[error("OCR识别超时（{0}秒）")]
    OcrTimeout(u64),

    // 基础错误
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type LvResult<T> = Result<T, LabelVerifierError>;
