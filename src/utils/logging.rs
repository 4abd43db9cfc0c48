/// 日志工具模块
///
/// 提供运行日志文件和控制台统计输出的辅助函数
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> AppResult<()> {
    let log_header = format!(
        "{}\n语法标注日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)
        .map_err(|e| AppError::file_write_failed(log_file_path, e))
}

/// 向日志文件追加一行
pub fn append_log_line(log_file_path: &str, line: &str) -> AppResult<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .and_then(|mut file| writeln!(file, "{}", line))
        .map_err(|e| AppError::file_write_failed(log_file_path, e))
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 语法修改标注");
    info!("📁 输入目录: {}", config.input_folder);
    info!("📊 最大并发数: {}", config.max_concurrent_files);
    info!("{}", "=".repeat(60));
}

/// 记录文件加载信息
///
/// # 参数
/// - `total`: 文件总数
/// - `max_concurrent`: 最大并发数
pub fn log_files_loaded(total: usize, max_concurrent: usize) {
    info!("✓ 找到 {} 个待标注的分析结果", total);
    info!("📋 将以每批 {} 个的方式处理\n", max_concurrent);
}

/// 记录批次开始信息
pub fn log_batch_start(
    batch_num: usize,
    total_batches: usize,
    start: usize,
    end: usize,
    total: usize,
) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始处理第 {}/{} 批", batch_num, total_batches);
    info!("📄 本批文件: {}-{} / 共 {} 个", start, end, total);
    info!("{}", "=".repeat(60));
}

/// 记录批次完成信息
pub fn log_batch_complete(batch_num: usize, success: usize, total: usize) {
    info!("\n{}", "─".repeat(60));
    info!("✓ 第 {} 批完成: 成功 {}/{}", batch_num, success, total);
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功数量
/// - `failed`: 失败数量
/// - `total`: 总数
/// - `highlighted`: 高亮的修改总数
/// - `unmatched`: 未定位到的修改总数
/// - `log_file_path`: 日志文件路径
pub fn print_final_stats(
    success: usize,
    failed: usize,
    total: usize,
    highlighted: usize,
    unmatched: usize,
    log_file_path: &str,
) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, total);
    info!("❌ 失败: {}", failed);
    info!("🖍 高亮修改: {} | 未定位: {}", highlighted, unmatched);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FileError;
    use tempfile::NamedTempFile;

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_text("short", 10), "short");
    }

    #[test]
    fn test_log_file_header_and_append() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        init_log_file(path).unwrap();
        append_log_line(path, "first.json | 高亮 2").unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with(&"=".repeat(60)));
        assert!(content.contains("语法标注日志"));
        assert!(content.ends_with("first.json | 高亮 2\n"));
    }

    #[test]
    fn test_unwritable_log_path_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("run.log");
        let path = path.to_str().unwrap();

        assert!(matches!(
            init_log_file(path),
            Err(AppError::File(FileError::WriteFailed { .. }))
        ));
        assert!(matches!(
            append_log_line(path, "x"),
            Err(AppError::File(FileError::WriteFailed { .. }))
        ));
    }
}
