//! 结论聚合工具
//! 任一字段为 mismatch 即整体不通过；not_provided 只作提示，不导致失败

use crate::model::{FieldVerdict, VerificationReport};

/// 结论聚合工具
pub struct VerdictAggregator;

impl VerdictAggregator {
    /// 聚合单字段结论，得到整体是否通过
    pub fn aggregate<'a>(verdicts: impl IntoIterator<Item = &'a FieldVerdict>) -> bool {
        !verdicts.into_iter().any(FieldVerdict::is_mismatch)
    }
}

/// 对报告重新计算整体结论
pub fn aggregate(report: &VerificationReport) -> bool {
    VerdictAggregator::aggregate(report.iter().map(|(_, verdict)| verdict))
}
