//! 校验器核心：整合各字段分析器，输出校验报告
use std::path::Path;
use std::time::Instant;
use tracing::debug;

use super::analyzer::{AbvAnalyzer, ContainsAnalyzer, NetContentsAnalyzer, WarningAnalyzer};
use crate::compiler::{RuleCompiler, UnitFolder};
use crate::config::GlobalConfig;
use crate::error::LvResult;
use crate::model::{Claim, FieldName, VerificationReport};
use crate::normalizer::{builtin_folder, RecognizedText};
use crate::ocr::TextRecognizer;
use crate::rule::UnitRuleLoader;

/// 标签校验器
///
/// 无可变状态，可在多线程间克隆共享，任意数量的 `verify` 调用可并行执行。
#[derive(Debug, Clone)]
pub struct LabelVerifier {
    unit_folder: UnitFolder,
}

impl Default for LabelVerifier {
    fn default() -> Self {
        Self::with_folder(builtin_folder().clone())
    }
}

impl LabelVerifier {
    /// 创建校验器（按配置加载并编译单位规则）
    pub async fn new(config: &GlobalConfig) -> LvResult<Self> {
        // 1. 加载单位规则
        let rule_set = UnitRuleLoader::load(config).await?;

        // 2. 编译单位规则
        let unit_folder = RuleCompiler::compile(&rule_set)?;

        Ok(Self::with_folder(unit_folder))
    }

    /// 使用注入的单位折叠器创建校验器
    pub fn with_folder(unit_folder: UnitFolder) -> Self {
        Self { unit_folder }
    }

    pub fn unit_folder(&self) -> &UnitFolder {
        &self.unit_folder
    }

    /// 核心校验接口：申报信息 + OCR 原始文本 → 校验报告
    pub fn verify(&self, claim: &Claim, raw_ocr_text: &str) -> VerificationReport {
        let start = Instant::now();

        // 1. 构建识别文本（原始 + 归一化）
        let text = RecognizedText::new(raw_ocr_text);

        // 2. 逐字段比对
        let brand_name = ContainsAnalyzer::check(
            FieldName::BrandName.label(),
            &claim.brand_name,
            text.normalized(),
        );
        let product_type = ContainsAnalyzer::check(
            FieldName::ProductType.label(),
            &claim.product_type,
            text.normalized(),
        );
        let alcohol_content = AbvAnalyzer::check(&claim.alcohol_content, text.normalized());
        let net_contents = NetContentsAnalyzer::check(&claim.net_contents, text.raw(), &self.unit_folder);
        let government_warning = WarningAnalyzer::check(text.raw());

        // 3. 聚合为报告
        let report = VerificationReport::new(
            brand_name,
            product_type,
            alcohol_content,
            net_contents,
            government_warning,
        );

        debug!(
            "标签校验完成，耗时{:?}，整体结论={}，不匹配字段={:?}",
            start.elapsed(),
            report.overall_match(),
            report.mismatches().collect::<Vec<_>>()
        );

        report
    }

    /// 先调用 OCR 协作方识别图片，再执行校验；识别失败直接返回错误，不进入比对
    pub async fn verify_image(
        &self,
        recognizer: &dyn TextRecognizer,
        claim: &Claim,
        image_path: &Path,
    ) -> LvResult<VerificationReport> {
        let start = Instant::now();
        let raw_ocr_text = recognizer.recognize(image_path).await?;
        debug!(
            "OCR识别完成：识别器={}，耗时{:?}，文本长度={}",
            recognizer.name(),
            start.elapsed(),
            raw_ocr_text.len()
        );

        Ok(self.verify(claim, &raw_ocr_text))
    }
}
