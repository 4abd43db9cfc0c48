//! 修改高亮引擎
//!
//! 根据分析结果中的修改记录，在修改后的全文中找出每条修改对应的片段，
//! 生成按文本顺序排列的 `AnnotatedSpan` 列表。
//!
//! ## 匹配规则
//!
//! 1. 按 `after` 的字符数从长到短稳定排序，长的先匹配，
//!    避免 `"is"` 这类短文本占用 `"this"` 里的位置
//! 2. 维护一个游标，每条修改优先在游标之后的剩余文本中找最左边的出现位置，
//!    找到后游标移到匹配末尾
//! 3. 游标之后找不到时，在游标之前尚未被占用的空隙中找最左边的出现位置
//! 4. `after` 为空或哪里都找不到时跳过，不报错
//! 5. 未被占用的文本全部作为普通片段输出
//!
//! 纯函数，不持有任何状态，可以并发调用。

use std::cmp::Reverse;

use tracing::{debug, trace};

use crate::models::{AnnotatedSpan, Correction};

/// 已确定位置的修改（字节区间）
#[derive(Debug)]
struct Placement<'a> {
    start: usize,
    end: usize,
    correction: &'a Correction,
}

/// 为修改后的全文生成标注片段
///
/// # 参数
/// - `corrected_text`: 修改后的全文
/// - `corrections`: 所有类别展平后的修改记录（无序）
///
/// # 返回
/// 按文本顺序排列、互不重叠的片段，拼接后等于 `corrected_text`
pub fn annotate(corrected_text: &str, corrections: &[Correction]) -> Vec<AnnotatedSpan> {
    if corrected_text.is_empty() {
        return Vec::new();
    }

    let mut ordered: Vec<&Correction> = corrections.iter().collect();
    ordered.sort_by_key(|c| Reverse(c.after.chars().count()));

    // 始终按 start 升序
    let mut placements: Vec<Placement> = Vec::with_capacity(ordered.len());
    let mut cursor = 0;

    for correction in ordered {
        let after = correction.after.as_str();
        if after.is_empty() {
            trace!("跳过空修改: {:?}", correction.before);
            continue;
        }

        if let Some(offset) = corrected_text[cursor..].find(after) {
            let start = cursor + offset;
            cursor = start + after.len();
            placements.push(Placement {
                start,
                end: cursor,
                correction,
            });
            continue;
        }

        match find_in_gaps(corrected_text, &placements, after) {
            Some(start) => {
                let index = placements.partition_point(|p| p.start < start);
                placements.insert(
                    index,
                    Placement {
                        start,
                        end: start + after.len(),
                        correction,
                    },
                );
            }
            None => debug!("未找到修改位置，跳过: {:?} -> {:?}", correction.before, after),
        }
    }

    assemble(corrected_text, &placements)
}

/// 在游标之前未被占用的空隙里找最左边的完整出现位置
fn find_in_gaps(text: &str, placements: &[Placement], needle: &str) -> Option<usize> {
    let mut gap_start = 0;
    for placement in placements {
        if let Some(offset) = text[gap_start..placement.start].find(needle) {
            return Some(gap_start + offset);
        }
        gap_start = placement.end;
    }
    None
}

fn assemble(text: &str, placements: &[Placement]) -> Vec<AnnotatedSpan> {
    let mut spans = Vec::with_capacity(placements.len() * 2 + 1);
    let mut last = 0;

    for placement in placements {
        if placement.start > last {
            spans.push(AnnotatedSpan::plain(&text[last..placement.start]));
        }
        spans.push(AnnotatedSpan::highlighted(
            &text[placement.start..placement.end],
            placement.correction,
        ));
        last = placement.end;
    }

    if last < text.len() {
        spans.push(AnnotatedSpan::plain(&text[last..]));
    }

    spans
}
