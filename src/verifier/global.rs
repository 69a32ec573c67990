//! 全局校验器单例管理
use once_cell::sync::OnceCell;

use super::verifier::LabelVerifier;
use crate::config::{ConfigManager, GlobalConfig};
use crate::error::{LvResult, LabelVerifierError};
use crate::model::{Claim, VerificationReport};

/// 全局校验器实例
static GLOBAL_VERIFIER: OnceCell<LabelVerifier> = OnceCell::new();

/// 初始化全局校验器（默认配置）
pub async fn init_label_verifier() -> LvResult<()> {
    init_label_verifier_with_config(&ConfigManager::get_default()).await
}

/// 带自定义配置初始化全局校验器（重复初始化时保留首次实例）
pub async fn init_label_verifier_with_config(config: &GlobalConfig) -> LvResult<()> {
    if GLOBAL_VERIFIER.get().is_some() {
        return Ok(());
    }

    let verifier = LabelVerifier::new(config).await?;
    // 并发初始化时以先写入者为准
    let _ = GLOBAL_VERIFIER.set(verifier);

    Ok(())
}

/// 获取全局校验器
pub(crate) fn get_global_verifier() -> LvResult<&'static LabelVerifier> {
    GLOBAL_VERIFIER.get()
        .ok_or(LabelVerifierError::VerifierNotInitialized)
}

/// 使用全局校验器执行校验
pub fn verify_label(claim: &Claim, raw_ocr_text: &str) -> LvResult<VerificationReport> {
    let verifier = get_global_verifier()?;
    Ok(verifier.verify(claim, raw_ocr_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_global_verifier_lifecycle() {
        init_label_verifier().await.unwrap();
        // 测试场景：重复初始化不报错
        init_label_verifier().await.unwrap();

        let claim = Claim::new("Old Oak", "", "45%", "");
        let report = verify_label(&claim, "OLD OAK 45% GOVERNMENT WARNING").unwrap();
        assert!(report.overall_match());
    }
}
