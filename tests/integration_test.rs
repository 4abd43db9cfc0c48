use grammar_annotator::logger;
use grammar_annotator::models::{load_analysis_result, reconstruct, AnalysisResult};
use grammar_annotator::services::{annotate, render_spans, AnnotationStats, RenderOptions};
use grammar_annotator::AnnotatedSpan;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

const RESPONSE: &str = r#"{
    "spelling": [
        {"before": "recieved", "after": "received", "explanation": "Spelling: 'i' before 'e' except after 'c'."},
        {"before": "teh", "after": "the", "explanation": "Typo."}
    ],
    "punctuation": [
        {"before": "Yesterday I", "after": "Yesterday, I", "explanation": "Comma after an introductory word."}
    ],
    "grammar": [
        {"before": "was not", "after": "wasn't", "explanation": "Contraction."},
        {"before": "a ", "after": "", "explanation": "Remove the article."}
    ],
    "corrected_text": "Yesterday, I received the letter, but it wasn't the one I wanted.",
    "summary": ["5 issues found"]
}"#;

fn highlighted(text: &str, before: &str, explanation: &str) -> AnnotatedSpan {
    AnnotatedSpan::Highlighted {
        text: text.to_string(),
        before: before.to_string(),
        explanation: explanation.to_string(),
    }
}

#[test]
fn test_service_response_to_spans() {
    logger::init();

    let result: AnalysisResult = serde_json::from_str(RESPONSE).unwrap();
    let corrections = result.corrections();
    let spans = annotate(result.corrected_text(), &corrections);

    assert_eq!(
        spans,
        vec![
            highlighted("Yesterday, I", "Yesterday I", "Comma after an introductory word."),
            AnnotatedSpan::plain(" "),
            highlighted(
                "received",
                "recieved",
                "Spelling: 'i' before 'e' except after 'c'."
            ),
            AnnotatedSpan::plain(" the letter, but it "),
            highlighted("wasn't", "was not", "Contraction."),
            AnnotatedSpan::plain(" "),
            // 较短的 "the" 最后匹配，只能落在游标之后
            highlighted("the", "teh", "Typo."),
            AnnotatedSpan::plain(" one I wanted."),
        ]
    );
    assert_eq!(reconstruct(&spans), result.corrected_text());

    let stats = AnnotationStats::from_spans(&spans, &corrections);
    assert_eq!(stats.highlighted, 4);
    assert_eq!(stats.deletions, 1);
    assert_eq!(stats.unmatched, 0);

    let rendered = render_spans(&spans, &RenderOptions::default());
    assert_eq!(
        rendered,
        "[Yesterday, I] [received] the letter, but it [wasn't] [the] one I wanted."
    );
}

#[test]
fn test_substring_precedence_example() {
    let result: AnalysisResult = serde_json::from_str(
        r#"{
            "spelling": [{"before": "rihgt", "after": "correct", "explanation": "e1"}],
            "punctuation": [],
            "grammar": [{"before": "was not", "after": "wasn't", "explanation": "e2"}],
            "corrected_text": "wasn't correct"
        }"#,
    )
    .unwrap();

    let spans = annotate(result.corrected_text(), &result.corrections());
    assert_eq!(
        spans,
        vec![
            highlighted("wasn't", "was not", "e2"),
            AnnotatedSpan::plain(" "),
            highlighted("correct", "rihgt", "e1"),
        ]
    );
}

#[tokio::test]
async fn test_load_from_disk_and_annotate() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("response.json");
    fs::write(&path, RESPONSE).unwrap();

    let file = load_analysis_result(&path).await.unwrap();
    let spans = annotate(file.result.corrected_text(), &file.result.corrections());

    assert_eq!(reconstruct(&spans), file.result.corrected_text());
    assert_eq!(spans.iter().filter(|s| s.is_highlighted()).count(), 4);
}
