//! 单位规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化

use serde::{Deserialize, Serialize};

/// 单条单位折叠规则（按顺序对归一化文本执行替换）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UnitRule {
    pub pattern: String,
    pub replacement: String,
    // true 时 pattern 按正则编译，replacement 支持 ${1} 分组引用
    #[serde(default)]
    pub regex: bool,
}

impl UnitRule {
    /// 字面量替换规则
    pub fn literal(pattern: &str, replacement: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            regex: false,
        }
    }

    /// 正则替换规则
    pub fn regex(pattern: &str, replacement: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            regex: true,
        }
    }
}

/// 有序单位规则表
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct UnitRuleSet {
    #[serde(default)]
    pub rules: Vec<UnitRule>,
    // true 时自定义规则排在内置规则之前执行，而不是替换内置规则
    #[serde(default)]
    pub extend_builtin: bool,
}

impl UnitRuleSet {
    pub fn new(rules: Vec<UnitRule>) -> Self {
        Self { rules, extend_builtin: false }
    }

    /// 内置规则表
    ///
    /// 先把单位长写折叠为缩写，最后去掉数字与单位缩写之间的空格，
    /// 使 "750 milliliters" 与 "750ml" 归一到同一形式。
    /// 只做字面折叠，不做单位换算（"0.75 l" 与 "750 ml" 不等价）。
    pub fn builtin() -> Self {
        Self::new(vec![
            UnitRule::regex(r"millilit(?:er|re)s?", "ml"),
            UnitRule::regex(r"centilit(?:er|re)s?", "cl"),
            UnitRule::regex(r"(^|[^a-z])lit(?:er|re)s?\b", "${1}l"),
            UnitRule::literal("fluid ounces", "oz"),
            UnitRule::literal("fluid ounce", "oz"),
            UnitRule::regex(r"\bfl\.? ?oz\b", "oz"),
            UnitRule::regex(r"\bounces?\b", "oz"),
            UnitRule::regex(r"([0-9]) (ml|cl|l|oz)\b", "${1}${2}"),
        ])
    }

    /// 展开 extend_builtin，得到最终执行顺序
    pub fn resolved(self) -> Self {
        if !self.extend_builtin {
            return self;
        }
        let mut rules = self.rules;
        rules.extend(Self::builtin().rules);
        Self::new(rules)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
