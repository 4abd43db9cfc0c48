use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// 程序配置
///
/// 优先级：环境变量 > TOML 配置文件 > 默认值
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 同时处理的分析结果文件数量
    pub max_concurrent_files: usize,
    /// 分析结果（JSON）存放目录
    pub input_folder: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    // --- 渲染配置 ---
    pub show_explanations: bool,
    pub highlight_open: String,
    pub highlight_close: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_concurrent_files: 8,
            input_folder: "analysis_results".to_string(),
            verbose_logging: false,
            output_log_file: "annotate_log.txt".to_string(),
            show_explanations: false,
            highlight_open: "[".to_string(),
            highlight_close: "]".to_string(),
        }
    }
}

impl Config {
    /// 从默认值和环境变量构造配置
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// 从 TOML 文件加载配置，缺失的键使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(&display, e))?;
        toml::from_str(&content).map_err(|e| AppError::toml_parse_failed(display, e))
    }

    /// 加载配置：文件存在时读取文件，然后应用环境变量并校验
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let config = match path {
            Some(p) if p.exists() => {
                Self::from_toml_file(p)?.with_overrides(|key| std::env::var(key).ok())
            }
            _ => Self::from_env(),
        };
        config.validate()?;
        Ok(config)
    }

    /// 用外部键值覆盖配置，无法解析的值保持原样
    pub fn with_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            max_concurrent_files: lookup("MAX_CONCURRENT_FILES").and_then(|v| v.parse().ok()).unwrap_or(self.max_concurrent_files),
            input_folder: lookup("INPUT_FOLDER").unwrap_or(self.input_folder),
            verbose_logging: lookup("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
            output_log_file: lookup("OUTPUT_LOG_FILE").unwrap_or(self.output_log_file),
            show_explanations: lookup("SHOW_EXPLANATIONS").and_then(|v| v.parse().ok()).unwrap_or(self.show_explanations),
            highlight_open: lookup("HIGHLIGHT_OPEN").unwrap_or(self.highlight_open),
            highlight_close: lookup("HIGHLIGHT_CLOSE").unwrap_or(self.highlight_close),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.max_concurrent_files == 0 {
            return Err(AppError::invalid_config(
                "max_concurrent_files",
                self.max_concurrent_files,
                "必须大于 0",
            ));
        }
        if self.input_folder.trim().is_empty() {
            return Err(AppError::invalid_config("input_folder", &self.input_folder, "不能为空"));
        }
        Ok(())
    }
}
