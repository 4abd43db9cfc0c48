use crate::error::{AppError, AppResult};
use crate::models::AnalysisResult;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从磁盘加载的一份分析结果
#[derive(Debug, Clone)]
pub struct AnalysisFile {
    pub path: PathBuf,
    pub result: AnalysisResult,
}

impl AnalysisFile {
    /// 文件名（用于日志显示）
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}

/// 从 JSON 文件加载分析结果
pub async fn load_analysis_result(json_file_path: &Path) -> AppResult<AnalysisFile> {
    let display = json_file_path.display().to_string();
    let content = fs::read_to_string(json_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(&display, e))?;

    let result: AnalysisResult =
        serde_json::from_str(&content).map_err(|e| AppError::json_parse_failed(display, e))?;

    Ok(AnalysisFile {
        path: json_file_path.to_path_buf(),
        result,
    })
}

/// 一次目录扫描的结果
#[derive(Debug, Default)]
pub struct LoadedResults {
    /// 成功加载的分析结果，按文件名排序
    pub files: Vec<AnalysisFile>,
    /// 读取或解析失败的文件
    pub failed: Vec<PathBuf>,
}

impl LoadedResults {
    /// 扫描到的 JSON 文件总数
    pub fn total(&self) -> usize {
        self.files.len() + self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// 从文件夹中加载所有 JSON 分析结果
///
/// 按文件名排序；无法读取或解析的文件记录警告，放入 `failed`
pub async fn load_all_analysis_results(folder_path: &str) -> AppResult<LoadedResults> {
    let folder = PathBuf::from(folder_path);

    if !folder.is_dir() {
        return Err(AppError::directory_not_found(folder_path));
    }

    let mut json_files = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .map_err(|e| AppError::file_read_failed(folder_path, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::file_read_failed(folder_path, e))?
    {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            json_files.push(path);
        }
    }
    json_files.sort();

    let mut loaded = LoadedResults::default();
    for path in json_files {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_analysis_result(&path).await {
            Ok(file) => {
                tracing::info!("成功加载 {} 条修改", file.result.total_errors());
                loaded.files.push(file);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
                loaded.failed.push(path);
            }
        }
    }

    Ok(loaded)
}
