//! 终端渲染 - 业务能力层
//!
//! 把标注片段转换成可以直接打印的纯文本

use crate::config::Config;
use crate::models::AnnotatedSpan;

/// 渲染选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// 高亮起始标记
    pub open: String,
    /// 高亮结束标记
    pub close: String,
    /// 是否在高亮后附带原文和说明
    pub show_explanations: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            open: "[".to_string(),
            close: "]".to_string(),
            show_explanations: false,
        }
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            open: config.highlight_open.clone(),
            close: config.highlight_close.clone(),
            show_explanations: config.show_explanations,
        }
    }
}

/// 渲染标注片段
///
/// 普通片段原样输出，高亮片段用标记包裹；
/// 开启 `show_explanations` 时在标记后追加 `{原文 → 说明}`
pub fn render_spans(spans: &[AnnotatedSpan], options: &RenderOptions) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            AnnotatedSpan::Plain { text } => out.push_str(text),
            AnnotatedSpan::Highlighted {
                text,
                before,
                explanation,
            } => {
                out.push_str(&options.open);
                out.push_str(text);
                out.push_str(&options.close);
                if options.show_explanations {
                    out.push_str(&format!("{{{} → {}}}", before, explanation));
                }
            }
        }
    }
    out
}

/// 列出所有高亮片段的原文和说明（每条一行，从 1 开始编号）
pub fn annotation_notes(spans: &[AnnotatedSpan]) -> Vec<String> {
    spans
        .iter()
        .filter_map(|span| match span {
            AnnotatedSpan::Highlighted {
                text,
                before,
                explanation,
            } => Some((text, before, explanation)),
            AnnotatedSpan::Plain { .. } => None,
        })
        .enumerate()
        .map(|(i, (text, before, explanation))| {
            format!(
                "{}. \"{}\" | Original: \"{}\" | Explanation: {}",
                i + 1,
                text,
                before,
                explanation
            )
        })
        .collect()
}
