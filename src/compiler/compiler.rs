//! 规则编译器核心
//! 负责将单位规则编译为可执行的折叠器，以及构建酒精度检索正则

use std::time::Instant;
use regex::Regex;
use tracing::debug;

use super::pattern::{CompiledUnitRule, UnitFolder, UnitMatcher};
use crate::rule::{UnitRule, UnitRuleSet};
use crate::error::{LvResult, LabelVerifierError};

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译单位规则表
    pub fn compile(rule_set: &UnitRuleSet) -> LvResult<UnitFolder> {
        let start = Instant::now();
        let mut stats = CompileStats::default();
        let mut compiled = Vec::with_capacity(rule_set.len());

        for (index, rule) in rule_set.rules.iter().enumerate() {
            compiled.push(Self::compile_rule(index, rule, &mut stats)?);
        }

        debug!(
            "单位规则编译完成，耗时{:?}，字面量规则{}条、正则规则{}条",
            start.elapsed(),
            stats.literal_count,
            stats.regex_count
        );

        Ok(UnitFolder::new(compiled))
    }

    /// 编译单条规则
    fn compile_rule(
        index: usize,
        rule: &UnitRule,
        stats: &mut CompileStats,
    ) -> LvResult<CompiledUnitRule> {
        if rule.pattern.is_empty() {
            return Err(LabelVerifierError::UnitRuleParseError(format!(
                "第{}条规则的pattern为空",
                index + 1
            )));
        }

        let matcher = if rule.regex {
            stats.regex_count += 1;
            UnitMatcher::Regex(Regex::new(&rule.pattern)?)
        } else {
            stats.literal_count += 1;
            UnitMatcher::Literal(rule.pattern.clone())
        };

        debug!("编译单位规则：{} → {}", matcher.describe(), rule.replacement);

        Ok(CompiledUnitRule {
            matcher,
            replacement: rule.replacement.clone(),
        })
    }

    /// 构建酒精度检索正则：数值原样匹配（小数点转义），其后可有空白，再接 %
    ///
    /// 左侧不得紧邻数字或“数字+小数点”，避免 "5" 命中 "45%"、"45" 命中 "4.45%"。
    pub fn compile_percent_pattern(number: &str) -> LvResult<Regex> {
        let pattern = format!(
            r"(?:^|[^0-9.]|[^0-9]\.|^\.){}\s*%",
            regex::escape(number)
        );
        Ok(Regex::new(&pattern)?)
    }
}

/// 编译统计
#[derive(Debug, Default)]
struct CompileStats {
    literal_count: usize,
    regex_count: usize,
}
