//! 单位规则加载管理器
//! 负责从配置的 JSON 文件或内置规则表加载单位规则

use std::path::Path;
use tracing::{debug, warn};

use super::model::UnitRuleSet;
use crate::error::{LvResult, LabelVerifierError};
use crate::config::GlobalConfig;

/// 单位规则加载管理器
pub struct UnitRuleLoader;

impl UnitRuleLoader {
    /// 加载单位规则（配置了文件则读取文件，否则使用内置规则表）
    ///
    /// 显式配置的文件读取或解析失败时直接报错，不回退到内置规则。
    pub async fn load(config: &GlobalConfig) -> LvResult<UnitRuleSet> {
        let Some(path) = &config.unit_rules_path else {
            debug!("未配置单位规则文件，使用内置规则表");
            return Ok(UnitRuleSet::builtin());
        };

        let rule_set = Self::load_from_file(path).await?;
        debug!("从文件加载单位规则成功：{}，规则数：{}", path.display(), rule_set.len());
        Ok(rule_set)
    }

    /// 从 JSON 文件加载
    pub async fn load_from_file(path: &Path) -> LvResult<UnitRuleSet> {
        let data = tokio::fs::read(path).await.map_err(|e| {
            LabelVerifierError::UnitRuleLoadError(format!("{}：{}", path.display(), e))
        })?;
        Self::parse(&data)
    }

    /// 解析 JSON 规则内容
    pub fn parse(data: &[u8]) -> LvResult<UnitRuleSet> {
        let rule_set: UnitRuleSet = serde_json::from_slice(data)
            .map_err(|e| LabelVerifierError::UnitRuleParseError(e.to_string()))?;

        let rule_set = rule_set.resolved();
        if rule_set.is_empty() {
            warn!("单位规则表为空，净含量比对将不做单位折叠");
        }
        Ok(rule_set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use crate::config::ConfigManager;
    use crate::rule::model::UnitRule;

    #[tokio::test]
    async fn test_load_builtin_when_unconfigured() {
        let config = ConfigManager::get_default();
        let rule_set = UnitRuleLoader::load(&config).await.unwrap();
        assert_eq!(rule_set, UnitRuleSet::builtin());
    }

    #[tokio::test]
    async fn test_load_from_configured_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"rules":[{{"pattern":"gallons","replacement":"gal"}}]}}"#).unwrap();

        let config = ConfigManager::custom()
            .unit_rules_path(file.path().to_path_buf())
            .build();
        let rule_set = UnitRuleLoader::load(&config).await.unwrap();
        assert_eq!(rule_set.rules, vec![UnitRule::literal("gallons", "gal")]);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigManager::custom()
            .unit_rules_path(dir.path().join("missing.json"))
            .build();
        let err = UnitRuleLoader::load(&config).await.unwrap_err();
        assert!(matches!(err, LabelVerifierError::UnitRuleLoadError(_)));
    }

    #[test]
    fn test_parse_invalid_json_is_error() {
        let err = UnitRuleLoader::parse(b"{ rules: oops }").unwrap_err();
        assert!(matches!(err, LabelVerifierError::UnitRuleParseError(_)));
    }

    #[test]
    fn test_parse_extend_builtin() {
        let json = br#"{"extend_builtin":true,"rules":[{"pattern":"gallons","replacement":"gal"}]}"#;
        let rule_set = UnitRuleLoader::parse(json).unwrap();
        assert_eq!(rule_set.len(), UnitRuleSet::builtin().len() + 1);
    }
}
