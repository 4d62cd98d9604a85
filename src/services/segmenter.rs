//! 题目切分 - 业务能力层
//!
//! 根据边界偏移把全文切成互不重叠、首尾相接的片段。

/// 片段来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// 以题号标记开头的片段
    Marked,
    /// 全文没有题号时的整篇兜底片段
    Whole,
}

/// 一道候选题目对应的原文片段（已去掉首尾空白）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub kind: SegmentKind,
}

/// 按边界切分文本
///
/// - 没有边界：返回一个覆盖整篇（去空白后）的片段
/// - 有边界：第 i 段为 `[offsets[i], offsets[i + 1])`，最后一段到文本末尾
///
/// 第一个边界之前的内容（如试卷标题、说明文字）不属于任何题目。
pub fn split_segments<'a>(text: &'a str, offsets: &[usize]) -> Vec<Segment<'a>> {
    if offsets.is_empty() {
        return vec![Segment {
            text: text.trim(),
            kind: SegmentKind::Whole,
        }];
    }

    offsets
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = offsets.get(i + 1).copied().unwrap_or(text.len());
            Segment {
                text: text[start..end].trim(),
                kind: SegmentKind::Marked,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::boundary_scanner::scan_boundaries;

    #[test]
    fn test_fallback_single_trimmed_segment() {
        let segments = split_segments("  \n一整段没有题号的文字\n  ", &[]);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "一整段没有题号的文字");
        assert_eq!(segments[0].kind, SegmentKind::Whole);
    }

    #[test]
    fn test_segments_follow_document_order() {
        let text = "试卷说明\n1. 甲\n内容甲\n2. 乙\n答案：乙";
        let segments = split_segments(text, &scan_boundaries(text));
        let texts: Vec<_> = segments.iter().map(|s| s.text).collect();
        assert_eq!(texts, vec!["1. 甲\n内容甲", "2. 乙\n答案：乙"]);
        assert!(segments.iter().all(|s| s.kind == SegmentKind::Marked));
    }

    #[test]
    fn test_segments_cover_text_after_first_boundary() {
        let text = "前言\n1. a\n2. b\n3. c  \n";
        let offsets = scan_boundaries(text);
        let segments = split_segments(text, &offsets);
        let strip = |s: &str| s.split_whitespace().collect::<String>();
        let joined: String = segments.iter().map(|s| strip(s.text)).collect();
        assert_eq!(joined, strip(&text[offsets[0]..]));
    }
}
