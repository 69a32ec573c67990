//! 全局配置管理,存储所有可配置项
//! OCR 程序路径等外部依赖一律通过配置显式传入，核心逻辑不做任何探测

use std::path::PathBuf;

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 自定义单位规则文件（JSON），为空时使用内置规则表
    pub unit_rules_path: Option<PathBuf>,
    // Tesseract 可执行文件路径
    pub tesseract_cmd: PathBuf,
    // OCR 识别语言
    pub ocr_language: String,
    // OCR 超时（单位：秒）
    pub ocr_timeout: u64,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            unit_rules_path: None,
            tesseract_cmd: PathBuf::from("tesseract"),
            ocr_language: "eng".to_string(),
            ocr_timeout: 60,
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn unit_rules_path(mut self, path: PathBuf) -> Self {
        self.config.unit_rules_path = Some(path);
        self
    }

    pub fn tesseract_cmd(mut self, cmd: PathBuf) -> Self {
        self.config.tesseract_cmd = cmd;
        self
    }

    pub fn ocr_language(mut self, language: String) -> Self {
        self.config.ocr_language = language;
        self
    }

    pub fn ocr_timeout(mut self, timeout: u64) -> Self {
        self.config.ocr_timeout = timeout;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
