use serde::{Deserialize, Serialize};

use super::correction::Correction;

/// 标注后的文本片段
///
/// 所有片段按顺序拼接后等于修改后的全文
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnnotatedSpan {
    /// 未改动的原样文本
    Plain { text: String },
    /// 某条修改的 `after` 文本，附带原文和说明
    Highlighted {
        text: String,
        before: String,
        explanation: String,
    },
}

impl AnnotatedSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        AnnotatedSpan::Plain { text: text.into() }
    }

    /// 用修改记录的原文和说明构造高亮片段
    pub fn highlighted(text: impl Into<String>, correction: &Correction) -> Self {
        AnnotatedSpan::Highlighted {
            text: text.into(),
            before: correction.before.clone(),
            explanation: correction.explanation.clone(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            AnnotatedSpan::Plain { text } | AnnotatedSpan::Highlighted { text, .. } => text,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(self, AnnotatedSpan::Highlighted { .. })
    }
}

/// 按顺序拼接所有片段的文本
pub fn reconstruct(spans: &[AnnotatedSpan]) -> String {
    spans.iter().map(AnnotatedSpan::text).collect()
}
