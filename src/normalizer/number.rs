//! 数值提取工具
//! 从文本中提取第一个整数或小数（如酒精度 "13.5%" → "13.5"）

use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]+(?:\.[0-9]+)?").unwrap()
});

/// 提取最左侧的数值片段，不做范围校验，未找到时返回 None
pub fn extract_number(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    NUMBER_REGEX.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_integer_and_decimal() {
        assert_eq!(extract_number("45%"), Some("45".to_string()));
        assert_eq!(extract_number("13.5% ABV"), Some("13.5".to_string()));
        assert_eq!(extract_number("alc. 40 % by vol"), Some("40".to_string()));
    }

    #[test]
    fn test_extract_first_match_wins() {
        assert_eq!(extract_number("12.5% - 14%"), Some("12.5".to_string()));
        assert_eq!(extract_number("80 proof / 40%"), Some("80".to_string()));
    }

    #[test]
    fn test_extract_trailing_dot_is_not_part_of_number() {
        assert_eq!(extract_number("45."), Some("45".to_string()));
        assert_eq!(extract_number("1.2.3"), Some("1.2".to_string()));
    }

    #[test]
    fn test_extract_absent() {
        assert_eq!(extract_number(""), None);
        assert_eq!(extract_number("forty percent"), None);
        assert_eq!(extract_number("%"), None);
    }
}
