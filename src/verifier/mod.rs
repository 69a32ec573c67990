//! 校验模块：字段比对、结论聚合与校验器
pub mod analyzer;
pub mod aggregator;
pub mod verifier;
pub mod global;

// 导出核心接口
pub use self::analyzer::{
    AbvAnalyzer, ContainsAnalyzer, NetContentsAnalyzer, WarningAnalyzer,
    check_abv, check_contains, check_government_warning, check_net_contents,
    check_net_contents_with,
};
pub use self::aggregator::{aggregate, VerdictAggregator};
pub use self::verifier::LabelVerifier;
pub use self::global::{init_label_verifier, init_label_verifier_with_config, verify_label};
