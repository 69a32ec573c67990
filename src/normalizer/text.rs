//! 文本归一化
//! NFKD 分解去除变音符号 → 小写 → 非 [a-z0-9%.空白] 替换为空格 → 空白折叠 → 去首尾空白

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// 归一化后允许保留的字符
#[inline]
fn is_canonical_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '%' || ch == '.'
}

/// 将任意文本归一化为可比较形式
///
/// 纯函数且幂等：`normalize(&normalize(x)) == normalize(x)`。
/// 输出只包含 `a-z`、`0-9`、`%`、`.` 与单个空格，且无首尾空格。
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut result = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.nfkd().flat_map(char::to_lowercase) {
        // 分解出的组合附加符直接丢弃，基字母得以保留（é → e）
        if is_combining_mark(ch) {
            continue;
        }
        if is_canonical_char(ch) {
            if pending_space {
                result.push(' ');
                pending_space = false;
            }
            result.push(ch);
        } else {
            // 空白与被替换的字符都视为分隔符，只在已有内容后才补空格
            pending_space = !result.is_empty();
        }
    }

    result
}

/// OCR 识别文本
///
/// 原始文本与归一化文本在构建时一次性计算，之后只读。
/// 每次校验请求重新构建，不做缓存。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedText {
    raw: String,
    normalized: String,
}

impl RecognizedText {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        Self { raw, normalized }
    }

    /// 原始识别文本（保留大小写、变音符号与标点）
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// 归一化后的识别文本
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}
