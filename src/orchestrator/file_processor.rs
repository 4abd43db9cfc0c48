//! 单个分析结果处理器 - 编排层
//!
//! ## 职责
//!
//! 对一份分析结果完成：展平修改记录 → 标注 → 统计 → 渲染，
//! 并输出单个文件的日志。不做任何 I/O 以外的业务判断。

use crate::models::{AnalysisFile, AnnotatedSpan, Category};
use crate::services::{
    annotate, annotation_notes, render_spans, AnnotationStats, ErrorSummary, RenderOptions,
};
use crate::utils::logging::truncate_text;
use tracing::{debug, info, warn};

/// 单个文件的处理结果
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub name: String,
    /// 服务端记录的原始文件路径
    pub source_path: Option<String>,
    /// 服务端返回的整体点评
    pub service_summary: Vec<String>,
    pub spans: Vec<AnnotatedSpan>,
    pub rendered: String,
    pub notes: Vec<String>,
    pub summary: ErrorSummary,
    pub stats: AnnotationStats,
}

impl FileOutcome {
    /// 写入运行日志的一行摘要
    pub fn log_line(&self) -> String {
        format!(
            "{} | 错误 {} | 高亮 {} | 未定位 {} | 删除 {}",
            self.name,
            self.summary.total(),
            self.stats.highlighted,
            self.stats.unmatched,
            self.stats.deletions
        )
    }
}

/// 处理单个分析结果
///
/// # 参数
/// - `file`: 已加载的分析结果
/// - `file_index`: 文件索引（仅用于日志）
/// - `options`: 渲染选项
pub fn process_result(file: &AnalysisFile, file_index: usize, options: &RenderOptions) -> FileOutcome {
    let name = file.name();
    let corrected_text = file.result.corrected_text();
    let corrections = file.result.corrections();

    info!(
        "[文件 {}] 📝 {} | 修改后文本: {}",
        file_index,
        name,
        truncate_text(corrected_text, 40)
    );

    let spans = annotate(corrected_text, &corrections);
    let summary = ErrorSummary::from_result(&file.result);
    let stats = AnnotationStats::from_spans(&spans, &corrections);

    log_summary(file_index, &summary);
    if stats.unmatched > 0 {
        warn!(
            "[文件 {}] ⚠️ {} 条修改未能在修改后文本中定位",
            file_index, stats.unmatched
        );
    }
    debug!("[文件 {}] 生成 {} 个片段", file_index, spans.len());

    let rendered = render_spans(&spans, options);
    let notes = annotation_notes(&spans);

    FileOutcome {
        name,
        source_path: file.result.file_path.clone(),
        service_summary: file.result.summary.clone(),
        spans,
        rendered,
        notes,
        summary,
        stats,
    }
}

fn log_summary(file_index: usize, summary: &ErrorSummary) {
    info!("[文件 {}] {}", file_index, summary.headline());
    for category in Category::ALL {
        if summary.count(category) > 0 {
            info!(
                "[文件 {}]   - {}: {} ({}%)",
                file_index,
                category,
                summary.count(category),
                summary.share(category)
            );
        }
    }
}
