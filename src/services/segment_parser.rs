//! 单题解析 - 业务能力层
//!
//! 把一个片段拆成标题、正文和答案。对任何输入都不会失败：
//! 空片段得到空标题，由校验器过滤。

use crate::config::ParserConfig;
use crate::models::question::ParsedQuestion;
use crate::services::markers::{ANSWER_MARKERS, QUESTION_MARKERS};
use crate::services::segmenter::{Segment, SegmentKind};
use phf::phf_set;

/// 截断标题时优先停在这些标点之后
static CUT_PUNCTUATION: phf::Set<char> = phf_set! {
    '。', '？', '！', '?', '!', '；', ';', '，', ',',
};

/// 解析单个片段
///
/// 整篇兜底片段不去题号、不找答案，保证非空文本至少得到一道题。
pub fn parse_segment(segment: &Segment<'_>, config: &ParserConfig) -> ParsedQuestion {
    match segment.kind {
        SegmentKind::Marked => parse_marked(segment.text, config),
        SegmentKind::Whole => {
            let (title, content) = split_title_content(segment.text, config);
            ParsedQuestion {
                title,
                content,
                answer: String::new(),
            }
        }
    }
}

fn parse_marked(text: &str, config: &ParserConfig) -> ParsedQuestion {
    let clean = strip_leading_marker(text);

    let (body, answer) = match ANSWER_MARKERS.find(&clean) {
        Some(m) => (clean[..m.start].trim(), clean[m.end..].trim()),
        None => (clean.as_str(), ""),
    };

    let (title, content) = split_title_content(body, config);
    ParsedQuestion {
        title,
        content,
        answer: answer.to_string(),
    }
}

/// 去掉片段开头的题号标记（只去一次）
pub fn strip_leading_marker(text: &str) -> String {
    match QUESTION_MARKERS.find(text) {
        Some(m) => {
            let mut clean = String::with_capacity(text.len() - (m.end - m.start));
            clean.push_str(&text[..m.start]);
            clean.push_str(&text[m.end..]);
            clean.trim().to_string()
        }
        None => text.trim().to_string(),
    }
}

/// 第一行作为标题（必要时截断），其余部分作为正文
pub fn split_title_content(body: &str, config: &ParserConfig) -> (String, String) {
    let mut parts = body.splitn(2, '\n');
    let title = parts.next().unwrap_or_default().trim();
    let content = parts.next().map(str::trim).unwrap_or_default();

    (truncate_title(title, config), content.to_string())
}

/// 超过上限的标题按 [`find_cut_index`] 截断
pub fn truncate_title(title: &str, config: &ParserConfig) -> String {
    if title.chars().count() <= config.title_max_chars {
        return title.to_string();
    }
    let cut = find_cut_index(title, config);
    title.chars().take(cut).collect()
}

/// 计算标题截断长度（字符数）
///
/// 从 `min(上限, 长度) - 1` 向前扫描到上限的一半，遇到第一个标点就在其后截断；
/// 窗口内没有标点则直接截到 `min(上限, 长度)`。
pub fn find_cut_index(title: &str, config: &ParserConfig) -> usize {
    let chars: Vec<char> = title.chars().collect();
    let upper = config.title_max_chars.min(chars.len());

    (config.min_cut_index()..upper)
        .rev()
        .find(|&i| CUT_PUNCTUATION.contains(&chars[i]))
        .map(|i| i + 1)
        .unwrap_or(upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(text: &str) -> ParsedQuestion {
        parse_segment(
            &Segment {
                text,
                kind: SegmentKind::Marked,
            },
            &ParserConfig::default(),
        )
    }

    fn truncate(title: &str) -> String {
        truncate_title(title, &ParserConfig::default())
    }

    #[test]
    fn test_parse_title_content_answer() {
        let q = marked("1. What is a mutex?\nA concurrency primitive.\n答案：A lock-like primitive.");
        assert_eq!(q.title, "What is a mutex?");
        assert_eq!(q.content, "A concurrency primitive.");
        assert_eq!(q.answer, "A lock-like primitive.");
    }

    #[test]
    fn test_parse_without_answer() {
        let q = marked("Q1: Explain CAP.");
        assert_eq!(q, ParsedQuestion::new("Explain CAP.", "", ""));
    }

    #[test]
    fn test_first_answer_marker_splits() {
        let q = marked("第3题 什么是死锁？\n参考答案：互相等待\nA: 另一个答案");
        assert_eq!(q.title, "什么是死锁？");
        assert_eq!(q.content, "");
        assert_eq!(q.answer, "互相等待\nA: 另一个答案");
    }

    #[test]
    fn test_multiline_content_kept_intact() {
        let q = marked("问题2 TCP 握手\n第一行说明\n第二行说明\nAnswer: 三次");
        assert_eq!(q.title, "TCP 握手");
        assert_eq!(q.content, "第一行说明\n第二行说明");
        assert_eq!(q.answer, "三次");
    }

    #[test]
    fn test_marker_only_segment_has_empty_title() {
        let q = marked("1.");
        assert_eq!(q.title, "");
        let q = marked("2. 答案：只有答案");
        assert_eq!(q.title, "");
        assert_eq!(q.answer, "只有答案");
    }

    #[test]
    fn test_whole_segment_ignores_answer_marker() {
        let q = parse_segment(
            &Segment {
                text: "答案：没有题号的文字\n第二行",
                kind: SegmentKind::Whole,
            },
            &ParserConfig::default(),
        );
        assert_eq!(q.title, "答案：没有题号的文字");
        assert_eq!(q.content, "第二行");
        assert_eq!(q.answer, "");
    }

    #[test]
    fn test_title_at_exact_limit_untouched() {
        let title = "a".repeat(100);
        assert_eq!(truncate(&title), title);
        let title = "b".repeat(50);
        assert_eq!(truncate(&title), title);
    }

    #[test]
    fn test_title_101_chars_hard_truncated() {
        let title = "a".repeat(101);
        assert_eq!(truncate(&title).chars().count(), 100);
    }

    #[test]
    fn test_long_title_without_punctuation_in_window() {
        // 标点只出现在第 10 个字符，不在 50..100 的回溯窗口内
        let mut title = "x".repeat(300);
        title.replace_range(9..10, ",");
        assert_eq!(truncate(&title), title[..100]);
    }

    #[test]
    fn test_cut_at_last_punctuation_in_window() {
        let mut chars: Vec<char> = "a".repeat(150).chars().collect();
        chars[60] = '，';
        chars[80] = '。';
        let title: String = chars.into_iter().collect();
        let cut = truncate(&title);
        assert_eq!(cut.chars().count(), 81);
        assert!(cut.ends_with('。'));
    }

    #[test]
    fn test_punctuation_window_boundaries() {
        let config = ParserConfig::default();

        // 下标 50 在窗口内
        let mut chars: Vec<char> = "a".repeat(101).chars().collect();
        chars[50] = '?';
        let title: String = chars.iter().collect();
        assert_eq!(find_cut_index(&title, &config), 51);

        // 下标 49 在窗口外
        chars[50] = 'a';
        chars[49] = '?';
        let title: String = chars.iter().collect();
        assert_eq!(find_cut_index(&title, &config), 100);

        // 下标 99 是窗口的第一个位置
        chars[49] = 'a';
        chars[99] = '!';
        let title: String = chars.iter().collect();
        assert_eq!(find_cut_index(&title, &config), 100);
    }

    #[test]
    fn test_cjk_counts_as_one_char() {
        let title = "题".repeat(120);
        let cut = truncate(&title);
        assert_eq!(cut.chars().count(), 100);
        assert_eq!(cut, "题".repeat(100));
    }

    #[test]
    fn test_custom_title_budget() {
        let config = ParserConfig { title_max_chars: 10 };
        assert_eq!(truncate_title("abcdef,ghijklmn", &config), "abcdef,");
        assert_eq!(truncate_title("abcdefghijklmn", &config), "abcdefghij");
    }
}
