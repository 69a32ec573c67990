//! 单位归一化
//! 在文本归一化之后执行单位折叠（如 "milliliters" → "ml"）

use once_cell::sync::Lazy;

use super::text::normalize;
use crate::compiler::{RuleCompiler, UnitFolder};
use crate::rule::UnitRuleSet;

/// 内置规则表编译结果
static BUILTIN_FOLDER: Lazy<UnitFolder> = Lazy::new(|| {
    RuleCompiler::compile(&UnitRuleSet::builtin()).expect("内置单位规则必须可编译")
});

/// 获取内置单位折叠器
pub fn builtin_folder() -> &'static UnitFolder {
    &BUILTIN_FOLDER
}

/// 归一化 + 单位折叠
pub fn normalize_units(text: &str, folder: &UnitFolder) -> String {
    folder.fold(&normalize(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold(text: &str) -> String {
        normalize_units(text, builtin_folder())
    }

    #[test]
    fn test_fold_milliliters() {
        assert_eq!(fold("750 milliliters"), "750ml");
        assert_eq!(fold("750 Milliliter"), "750ml");
        assert_eq!(fold("750 mL"), "750ml");
        assert_eq!(fold("750ml"), "750ml");
        assert_eq!(fold("750 Millilitres"), "750ml");
    }

    #[test]
    fn test_fold_liters_and_centiliters() {
        assert_eq!(fold("1 Liter"), "1l");
        assert_eq!(fold("1.75 litres"), "1.75l");
        assert_eq!(fold("70 centilitres"), "70cl");
        assert_eq!(fold("70 cl"), "70cl");
    }

    #[test]
    fn test_fold_does_not_touch_words_containing_liter() {
        assert_eq!(fold("literally 1 liter"), "literally 1l");
    }

    #[test]
    fn test_fold_fluid_ounces() {
        assert_eq!(fold("12 fl oz"), "12oz");
        assert_eq!(fold("12 FL. OZ."), "12oz.");
        assert_eq!(fold("12 fluid ounces"), "12oz");
        assert_eq!(fold("1 Fluid Ounce"), "1oz");
        assert_eq!(fold("12 ounces"), "12oz");
    }

    #[test]
    fn test_fold_is_not_unit_conversion() {
        assert_ne!(fold("0.75 L"), fold("750 mL"));
    }

    #[test]
    fn test_builtin_folder_is_shared() {
        assert!(std::ptr::eq(builtin_folder(), builtin_folder()));
        assert!(!builtin_folder().is_empty());
    }
}
