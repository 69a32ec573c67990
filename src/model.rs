//! 数据模型定义
//! 申报信息（Claim）、单字段结论（FieldVerdict）与整体报告（VerificationReport）

use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};

use crate::verifier::aggregator::VerdictAggregator;

/// 用户申报的产品属性（空字符串表示未提供）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub alcohol_content: String,
    #[serde(default)]
    pub net_contents: String,
}

impl Claim {
    pub fn new(
        brand_name: impl Into<String>,
        product_type: impl Into<String>,
        alcohol_content: impl Into<String>,
        net_contents: impl Into<String>,
    ) -> Self {
        Self {
            brand_name: brand_name.into(),
            product_type: product_type.into(),
            alcohol_content: alcohol_content.into(),
            net_contents: net_contents.into(),
        }
    }
}

/// 报告字段名（固定集合，声明顺序即输出顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldName {
    #[serde(rename = "Brand Name")]
    BrandName,
    #[serde(rename = "Product Type")]
    ProductType,
    #[serde(rename = "Alcohol Content")]
    AlcoholContent,
    #[serde(rename = "Net Contents")]
    NetContents,
    #[serde(rename = "Government Warning")]
    GovernmentWarning,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::BrandName,
        FieldName::ProductType,
        FieldName::AlcoholContent,
        FieldName::NetContents,
        FieldName::GovernmentWarning,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldName::BrandName => "Brand Name",
            FieldName::ProductType => "Product Type",
            FieldName::AlcoholContent => "Alcohol Content",
            FieldName::NetContents => "Net Contents",
            FieldName::GovernmentWarning => "Government Warning",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 单字段比对状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    Match,
    Mismatch,
    NotProvided,
}

impl FieldStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldStatus::Match => "match",
            FieldStatus::Mismatch => "mismatch",
            FieldStatus::NotProvided => "not_provided",
        }
    }
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单字段比对结论
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldVerdict {
    pub status: FieldStatus,
    // 仅用于展示，不参与判定
    pub details: String,
}

impl FieldVerdict {
    pub fn matched(details: impl Into<String>) -> Self {
        Self { status: FieldStatus::Match, details: details.into() }
    }

    pub fn mismatched(details: impl Into<String>) -> Self {
        Self { status: FieldStatus::Mismatch, details: details.into() }
    }

    pub fn not_provided(details: impl Into<String>) -> Self {
        Self { status: FieldStatus::NotProvided, details: details.into() }
    }

    pub fn is_mismatch(&self) -> bool {
        self.status == FieldStatus::Mismatch
    }
}

/// 整体校验报告
///
/// 只能通过 [`VerificationReport::new`] 一次性给出全部五个字段，
/// 构建后不可修改，`overall_match` 在构建时由聚合器计算。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    fields: BTreeMap<FieldName, FieldVerdict>,
    overall_match: bool,
}

impl VerificationReport {
    pub fn new(
        brand_name: FieldVerdict,
        product_type: FieldVerdict,
        alcohol_content: FieldVerdict,
        net_contents: FieldVerdict,
        government_warning: FieldVerdict,
    ) -> Self {
        let fields = BTreeMap::from([
            (FieldName::BrandName, brand_name),
            (FieldName::ProductType, product_type),
            (FieldName::AlcoholContent, alcohol_content),
            (FieldName::NetContents, net_contents),
            (FieldName::GovernmentWarning, government_warning),
        ]);
        let overall_match = VerdictAggregator::aggregate(fields.values());

        Self { fields, overall_match }
    }

    pub fn overall_match(&self) -> bool {
        self.overall_match
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldVerdict> {
        self.fields.get(&field)
    }

    pub fn status(&self, field: FieldName) -> Option<FieldStatus> {
        self.get(field).map(|v| v.status)
    }

    /// 按固定字段顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldVerdict)> + '_ {
        self.fields.iter().map(|(name, verdict)| (*name, verdict))
    }

    pub fn mismatches(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.iter().filter(|(_, v)| v.is_mismatch()).map(|(name, _)| name)
    }
}

// ======== 为 VerificationReport 实现 Display trait（用于 CLI 输出） ========
impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.overall_match {
            writeln!(f, "Label matches the provided data (based on detected text).")?;
        } else {
            writeln!(f, "Label does NOT fully match the provided data.")?;
        }
        for (name, verdict) in self.iter() {
            writeln!(
                f,
                "{}: {} – {}",
                name,
                verdict.status.as_str().to_uppercase(),
                verdict.details
            )?;
        }
        Ok(())
    }
}
