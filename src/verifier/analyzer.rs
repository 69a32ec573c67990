//! 字段分析器：每个申报字段一条比对规则
//! 所有分析器对任意输入都有确定结论，不返回错误
use tracing::{debug, warn};

use crate::compiler::{RuleCompiler, UnitFolder};
use crate::model::FieldVerdict;
use crate::normalizer::{builtin_folder, extract_number, normalize, normalize_units};

/// 法定警示语
const GOVERNMENT_WARNING_PHRASE: &str = "government warning";

/// 包含匹配分析器（品牌名、产品类型）
pub struct ContainsAnalyzer;

impl ContainsAnalyzer {
    /// 归一化后的申报值须作为连续子串出现在归一化 OCR 文本中
    pub fn check(field_label: &str, claimed_value: &str, normalized_ocr: &str) -> FieldVerdict {
        let claimed_norm = normalize(claimed_value);
        if claimed_norm.is_empty() {
            return FieldVerdict::not_provided(format!(
                "{} was not provided in the form.",
                field_label
            ));
        }

        if normalized_ocr.contains(&claimed_norm) {
            debug!("包含匹配成功：字段={}，申报值={}", field_label, claimed_norm);
            FieldVerdict::matched(format!(
                "{} '{}' was found on the label.",
                field_label, claimed_value
            ))
        } else {
            FieldVerdict::mismatched(format!(
                "{} '{}' was NOT found on the label.",
                field_label, claimed_value
            ))
        }
    }
}

/// 酒精度分析器
pub struct AbvAnalyzer;

impl AbvAnalyzer {
    /// 申报数值须原样出现在 OCR 文本中，其后可有空白，再接 %
    pub fn check(claimed_abv: &str, normalized_ocr: &str) -> FieldVerdict {
        let Some(number) = extract_number(&normalize(claimed_abv)) else {
            return FieldVerdict::not_provided(
                "Alcohol content was not provided or not in a numeric form.",
            );
        };

        let regex = match RuleCompiler::compile_percent_pattern(&number) {
            Ok(regex) => regex,
            Err(e) => {
                warn!("酒精度检索正则构建失败：数值={}，错误：{}", number, e);
                return FieldVerdict::not_provided(
                    "Alcohol content was not provided or not in a numeric form.",
                );
            }
        };

        if regex.is_match(normalized_ocr) {
            debug!("酒精度匹配成功：数值={}，规则={}", number, regex.as_str());
            FieldVerdict::matched(format!(
                "Alcohol content {}% was found on the label.",
                number
            ))
        } else {
            FieldVerdict::mismatched(format!(
                "Alcohol content {}% was NOT found on the label.",
                number
            ))
        }
    }
}

/// 净含量分析器
pub struct NetContentsAnalyzer;

impl NetContentsAnalyzer {
    /// 申报值与原始 OCR 文本分别归一化并折叠单位后做子串匹配
    pub fn check(claimed_net_contents: &str, raw_ocr: &str, folder: &UnitFolder) -> FieldVerdict {
        if claimed_net_contents.is_empty() {
            return FieldVerdict::not_provided("Net contents not provided.");
        }

        // 非空但归一化后为空（纯空白/标点）视为不匹配
        let claimed_folded = normalize_units(claimed_net_contents, folder);
        let ocr_folded = normalize_units(raw_ocr, folder);
        if !claimed_folded.is_empty() && ocr_folded.contains(&claimed_folded) {
            debug!("净含量匹配成功：申报值={}", claimed_folded);
            FieldVerdict::matched(format!(
                "Net contents '{}' were found on the label.",
                claimed_net_contents
            ))
        } else {
            FieldVerdict::mismatched(format!(
                "Net contents '{}' were NOT found on the label.",
                claimed_net_contents
            ))
        }
    }
}

/// 法定警示语分析器
pub struct WarningAnalyzer;

impl WarningAnalyzer {
    /// 原始 OCR 文本中忽略大小写查找 "government warning"，此字段不存在 not_provided
    pub fn check(raw_ocr: &str) -> FieldVerdict {
        if raw_ocr.to_lowercase().contains(GOVERNMENT_WARNING_PHRASE) {
            FieldVerdict::matched("'GOVERNMENT WARNING' phrase was found on the label.")
        } else {
            FieldVerdict::mismatched("'GOVERNMENT WARNING' phrase was NOT found on the label.")
        }
    }
}

// 对外暴露的简化接口
pub fn check_contains(field_label: &str, claimed_value: &str, normalized_ocr: &str) -> FieldVerdict {
    ContainsAnalyzer::check(field_label, claimed_value, normalized_ocr)
}

pub fn check_abv(claimed_abv: &str, normalized_ocr: &str) -> FieldVerdict {
    AbvAnalyzer::check(claimed_abv, normalized_ocr)
}

/// 使用内置单位规则表
pub fn check_net_contents(claimed_net_contents: &str, raw_ocr: &str) -> FieldVerdict {
    NetContentsAnalyzer::check(claimed_net_contents, raw_ocr, builtin_folder())
}

pub fn check_net_contents_with(
    claimed_net_contents: &str,
    raw_ocr: &str,
    folder: &UnitFolder,
) -> FieldVerdict {
    NetContentsAnalyzer::check(claimed_net_contents, raw_ocr, folder)
}

pub fn check_government_warning(raw_ocr: &str) -> FieldVerdict {
    WarningAnalyzer::check(raw_ocr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldStatus;
    use crate::rule::{UnitRule, UnitRuleSet};

    #[test]
    fn test_contains_empty_claim_is_not_provided() {
        for ocr in ["", "blue label reserve", "anything at all"] {
            assert_eq!(check_contains("Brand", "", ocr).status, FieldStatus::NotProvided);
        }
        // 测试场景：只有标点的申报值归一化后为空
        assert_eq!(check_contains("Brand", " -- ", "x").status, FieldStatus::NotProvided);
    }

    #[test]
    fn test_contains_is_order_sensitive() {
        assert_eq!(
            check_contains("Brand", "Blue Label", "blue label reserve").status,
            FieldStatus::Match
        );
        assert_eq!(
            check_contains("Brand", "Blue Label", "label blue reserve").status,
            FieldStatus::Mismatch
        );
    }

    #[test]
    fn test_contains_normalizes_claim() {
        let verdict = check_contains("Brand Name", "Château Ausone", "chateau ausone saint emilion");
        assert_eq!(verdict.status, FieldStatus::Match);
        assert_eq!(verdict.details, "Brand Name 'Château Ausone' was found on the label.");
    }

    #[test]
    fn test_contains_is_not_fuzzy() {
        // 测试场景：OCR 误读一个字符即判定不匹配
        assert_eq!(
            check_contains("Brand", "Old Oak", "0ld oak bourbon").status,
            FieldStatus::Mismatch
        );
    }

    #[test]
    fn test_abv_match_and_mismatch() {
        assert_eq!(check_abv("13.5%", "alc 13.5 % by vol").status, FieldStatus::Match);
        assert_eq!(check_abv("13.5%", "alc 14% by vol").status, FieldStatus::Mismatch);
        assert_eq!(check_abv("45", "45% alc vol").status, FieldStatus::Match);
    }

    #[test]
    fn test_abv_not_provided() {
        for ocr in ["", "45% alc vol", "anything"] {
            assert_eq!(check_abv("", ocr).status, FieldStatus::NotProvided);
            assert_eq!(check_abv("forty percent", ocr).status, FieldStatus::NotProvided);
        }
    }

    #[test]
    fn test_abv_has_no_tolerance() {
        assert_eq!(check_abv("45%", "45.0% alc vol").status, FieldStatus::Mismatch);
        assert_eq!(check_abv("13.5%", "alc 1305 % by vol").status, FieldStatus::Mismatch);
        assert_eq!(check_abv("5%", "45% alc vol").status, FieldStatus::Mismatch);
    }

    #[test]
    fn test_abv_details() {
        let verdict = check_abv("13.5% ABV", "alc 13.5 % by vol");
        assert_eq!(verdict.details, "Alcohol content 13.5% was found on the label.");
    }

    #[test]
    fn test_net_contents_unit_folding() {
        assert_eq!(
            check_net_contents("750 milliliters", "net contents 750ml").status,
            FieldStatus::Match
        );
        assert_eq!(
            check_net_contents("12 FL OZ", "NET CONTENTS 12 fl. oz.").status,
            FieldStatus::Match
        );
        assert_eq!(
            check_net_contents("750 mL", "NET CONTENTS 700 ML").status,
            FieldStatus::Mismatch
        );
    }

    #[test]
    fn test_net_contents_not_provided() {
        for ocr in ["", "net contents 750ml"] {
            assert_eq!(check_net_contents("", ocr).status, FieldStatus::NotProvided);
        }
    }

    #[test]
    fn test_net_contents_blank_claim_is_mismatch() {
        // 测试场景：申报值非空但只有空白或标点，归一化后为空，判定不匹配
        for claimed in ["   ", " - ", "\t"] {
            assert_eq!(
                check_net_contents(claimed, "OLD OAK 45% 750 ML").status,
                FieldStatus::Mismatch
            );
        }
    }

    #[test]
    fn test_net_contents_equivalent_magnitude_is_mismatch() {
        assert_eq!(
            check_net_contents("0.75 L", "net contents 750 ml").status,
            FieldStatus::Mismatch
        );
    }

    #[test]
    fn test_net_contents_with_injected_rules() {
        let set = UnitRuleSet::new(vec![UnitRule::literal("gallons", "gal")]);
        let folder = RuleCompiler::compile(&set).unwrap();
        assert_eq!(
            check_net_contents_with("1 gallons", "contents 1 gal", &folder).status,
            FieldStatus::Match
        );
        // 测试场景：未注入的单位不做折叠
        assert_eq!(
            check_net_contents_with("750 milliliters", "750 ml", &folder).status,
            FieldStatus::Mismatch
        );
    }

    #[test]
    fn test_government_warning() {
        assert_eq!(
            check_government_warning("GOVERNMENT WARNING: (1) According to the Surgeon General").status,
            FieldStatus::Match
        );
        assert_eq!(
            check_government_warning("Government Warning").status,
            FieldStatus::Match
        );
    }

    #[test]
    fn test_government_warning_is_never_not_provided() {
        for ocr in ["", "OLD OAK BOURBON", "GOVERNMENT-WARNING", "government\nwarning"] {
            assert_eq!(check_government_warning(ocr).status, FieldStatus::Mismatch);
        }
    }
}
