//! 编译后模式模型
//! 单位规则编译后的结构

use std::sync::Arc;
use regex::Regex;

#[derive(Debug, Clone)]
pub enum UnitMatcher {
    Literal(String), // 字面量替换（全部出现位置）
    Regex(Regex), // 正则替换
}

impl UnitMatcher {
    /// 对输入执行替换
    pub fn replace(&self, input: &str, replacement: &str) -> String {
        match self {
            UnitMatcher::Literal(s) => input.replace(s.as_str(), replacement),
            UnitMatcher::Regex(regex) => regex.replace_all(input, replacement).into_owned(),
        }
    }

    /// 规则描述
    pub fn describe(&self) -> &str {
        match self {
            UnitMatcher::Literal(s) => s,
            UnitMatcher::Regex(r) => r.as_str(),
        }
    }
}

/// 编译后的单条单位规则
#[derive(Debug, Clone)]
pub struct CompiledUnitRule {
    pub matcher: UnitMatcher,
    pub replacement: String,
}

/// 编译后的单位折叠器（规则按顺序执行）
#[derive(Debug, Clone, Default)]
pub struct UnitFolder {
    rules: Arc<Vec<CompiledUnitRule>>,
}

impl UnitFolder {
    pub fn new(rules: Vec<CompiledUnitRule>) -> Self {
        Self { rules: Arc::new(rules) }
    }

    /// 对已归一化的文本执行单位折叠
    pub fn fold(&self, normalized: &str) -> String {
        let mut text = normalized.to_string();
        for rule in self.rules.iter() {
            text = rule.matcher.replace(&text, &rule.replacement);
        }
        text
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
