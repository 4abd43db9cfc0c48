use serde::{Deserialize, Serialize};

/// 错误类别
///
/// 只用于展示和统计，不参与匹配
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// 拼写
    Spelling,
    /// 标点
    Punctuation,
    /// 语法
    Grammar,
}

impl Category {
    /// 按服务返回顺序排列的全部类别
    pub const ALL: [Category; 3] = [Category::Spelling, Category::Punctuation, Category::Grammar];

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Category::Spelling => "Spelling",
            Category::Punctuation => "Punctuation",
            Category::Grammar => "Grammar",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 服务返回的单条修改记录（不带类别）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    #[serde(default)]
    pub before: String,
    #[serde(default)]
    pub after: String,
    #[serde(default)]
    pub explanation: String,
}

/// 一条被标记的修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// 原文片段（纯插入时为空）
    pub before: String,
    /// 修改后的片段，与修改后全文中的写法一致（纯删除时为空）
    pub after: String,
    /// 修改说明
    pub explanation: String,
    pub category: Category,
}

impl Correction {
    pub fn new(
        category: Category,
        before: impl Into<String>,
        after: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
            explanation: explanation.into(),
            category,
        }
    }

    fn from_entry(category: Category, entry: &ErrorEntry) -> Self {
        Self {
            before: entry.before.clone(),
            after: entry.after.clone(),
            explanation: entry.explanation.clone(),
            category,
        }
    }
}

/// 语法检查服务返回的分析结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub spelling: Vec<ErrorEntry>,
    #[serde(default)]
    pub punctuation: Vec<ErrorEntry>,
    #[serde(default)]
    pub grammar: Vec<ErrorEntry>,
    #[serde(default)]
    pub corrected_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub summary: Vec<String>,
}

impl AnalysisResult {
    /// 修改后的全文，缺失时视为空串
    pub fn corrected_text(&self) -> &str {
        self.corrected_text.as_deref().unwrap_or_default()
    }

    /// 某个类别的原始记录
    pub fn entries(&self, category: Category) -> &[ErrorEntry] {
        match category {
            Category::Spelling => &self.spelling,
            Category::Punctuation => &self.punctuation,
            Category::Grammar => &self.grammar,
        }
    }

    /// 把三个类别的记录展平为一个列表
    ///
    /// 顺序为 拼写 → 标点 → 语法，类别内部保持原顺序
    pub fn corrections(&self) -> Vec<Correction> {
        Category::ALL
            .iter()
            .flat_map(|&category| {
                self.entries(category)
                    .iter()
                    .map(move |entry| Correction::from_entry(category, entry))
            })
            .collect()
    }

    /// 所有类别的记录总数
    pub fn total_errors(&self) -> usize {
        self.spelling.len() + self.punctuation.len() + self.grammar.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(before: &str, after: &str) -> ErrorEntry {
        ErrorEntry {
            before: before.to_string(),
            after: after.to_string(),
            explanation: format!("{} -> {}", before, after),
        }
    }

    #[test]
    fn test_corrections_flatten_in_category_order() {
        let result = AnalysisResult {
            spelling: vec![entry("teh", "the"), entry("recieve", "receive")],
            punctuation: vec![entry("its", "it's")],
            grammar: vec![entry("was not", "wasn't")],
            corrected_text: Some("the".to_string()),
            ..Default::default()
        };

        let corrections = result.corrections();
        let order: Vec<(Category, &str)> = corrections
            .iter()
            .map(|c| (c.category, c.after.as_str()))
            .collect();

        assert_eq!(
            order,
            vec![
                (Category::Spelling, "the"),
                (Category::Spelling, "receive"),
                (Category::Punctuation, "it's"),
                (Category::Grammar, "wasn't"),
            ]
        );
        assert_eq!(result.total_errors(), 4);
    }

    #[test]
    fn test_deserialize_service_payload() {
        let json = r#"{
            "spelling": [{"before": "rihgt", "after": "right", "explanation": "typo"}],
            "punctuation": [],
            "grammar": [],
            "corrected_text": "That is right.",
            "summary": ["1 spelling error"]
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.corrected_text(), "That is right.");
        assert_eq!(result.spelling[0].after, "right");
        assert_eq!(result.summary, vec!["1 spelling error".to_string()]);
        assert!(result.file_path.is_none());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let result: AnalysisResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result.corrected_text(), "");
        assert!(result.corrections().is_empty());
    }

    #[test]
    fn test_category_wire_and_display_names() {
        let parsed: Category = serde_json::from_str("\"grammar\"").unwrap();
        assert_eq!(parsed, Category::Grammar);
        assert!(serde_json::from_str::<Category>("\"style\"").is_err());
        assert_eq!(
            serde_json::to_string(&Category::Spelling).unwrap(),
            "\"spelling\""
        );
        assert_eq!(Category::Punctuation.to_string(), "Punctuation");
    }
}
