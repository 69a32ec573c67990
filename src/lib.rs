//! label-verifier - 酒类标签申报信息与 OCR 文本比对工具

// 导出全局错误类型
pub use self::error::{LabelVerifierError, LvResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出数据模型
pub use self::model::{Claim, FieldName, FieldStatus, FieldVerdict, VerificationReport};

// 导出归一化模块核心接口
pub use self::normalizer::{normalize, extract_number, normalize_units, RecognizedText};

// 导出规则与编译模块核心接口
pub use self::rule::{UnitRule, UnitRuleSet, UnitRuleLoader};
pub use self::compiler::{RuleCompiler, UnitFolder};

// 导出校验模块核心接口
pub use self::verifier::{
    LabelVerifier,
    aggregate,
    check_contains,
    check_abv,
    check_net_contents,
    check_net_contents_with,
    check_government_warning,
    init_label_verifier,
    init_label_verifier_with_config,
    verify_label,
};

// 导出OCR协作方接口
pub use self::ocr::{TextRecognizer, TesseractRecognizer};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod model;
pub mod normalizer;
pub mod rule;
pub mod compiler;
pub mod verifier;
pub mod ocr;
