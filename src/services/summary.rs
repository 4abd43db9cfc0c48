//! 统计服务 - 业务能力层
//!
//! 汇总分析结果中各类别的错误数量，以及标注后有多少修改被定位到

use std::collections::HashMap;

use crate::models::{AnalysisResult, AnnotatedSpan, Category, Correction};

/// 各类别错误数量统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSummary {
    counts: HashMap<Category, usize>,
    total: usize,
}

impl ErrorSummary {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let counts: HashMap<Category, usize> = Category::ALL
            .iter()
            .map(|&category| (category, result.entries(category).len()))
            .collect();
        let total = counts.values().sum();

        Self { counts, total }
    }

    pub fn count(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// 某类别占全部错误的百分比（四舍五入），没有错误时为 0
    pub fn share(&self, category: Category) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.count(category) as f64 / self.total as f64 * 100.0).round() as u32
    }

    /// 结果页标题文案
    pub fn headline(&self) -> String {
        match self.total {
            0 => "No errors found! Your text looks perfect.".to_string(),
            1 => "Found 1 issue to correct.".to_string(),
            n => format!("Found {} issues to correct.", n),
        }
    }
}

/// 标注结果统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationStats {
    /// 成功定位并高亮的修改数
    pub highlighted: usize,
    /// `after` 非空但没有定位到的修改数
    pub unmatched: usize,
    /// `after` 为空的修改数（纯删除，无法高亮）
    pub deletions: usize,
}

impl AnnotationStats {
    pub fn from_spans(spans: &[AnnotatedSpan], corrections: &[Correction]) -> Self {
        let highlighted = spans.iter().filter(|s| s.is_highlighted()).count();
        let deletions = corrections.iter().filter(|c| c.after.is_empty()).count();
        let unmatched = corrections.len().saturating_sub(deletions + highlighted);

        Self {
            highlighted,
            unmatched,
            deletions,
        }
    }
}
