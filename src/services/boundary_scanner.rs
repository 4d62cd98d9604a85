//! 题目边界扫描 - 业务能力层
//!
//! 只负责"找出每道题从哪里开始"，不切分、不解析。

use crate::services::markers::{MarkerSet, QUESTION_MARKERS};

/// 扫描全文，返回所有题号标记的起始偏移（字节偏移，升序、不重复）
///
/// 没有任何题号时返回空列表，这是正常情况，由切分器走整篇兜底。
pub fn scan_boundaries(text: &str) -> Vec<usize> {
    scan_with(&QUESTION_MARKERS, text)
}

/// 使用指定的标记集合扫描
pub fn scan_with(markers: &MarkerSet, text: &str) -> Vec<usize> {
    markers.find_iter(text).map(|m| m.start).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_markers_yields_empty() {
        assert!(scan_boundaries("").is_empty());
        assert!(scan_boundaries("只是一段普通文字，没有题号。").is_empty());
    }

    #[test]
    fn test_offsets_are_ascending() {
        let text = "1. 甲\n2. 乙\n\n3、丙";
        let offsets = scan_boundaries(text);
        assert_eq!(offsets.len(), 3);
        assert_eq!(offsets[0], 0);
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        // 后续边界从换行符开始
        assert_eq!(&text[offsets[1]..offsets[1] + 1], "\n");
    }

    #[test]
    fn test_mid_line_numbers_are_ignored() {
        let text = "1. 比较 2. 和 3. 的区别\n2. 下一题";
        assert_eq!(scan_boundaries(text).len(), 2);
    }

    #[test]
    fn test_marker_swallowing_newline_hides_next_line() {
        // 标记后的空白包含换行，下一行开头的题号不再处于行首
        let text = "1.\n2. 乙";
        assert_eq!(scan_boundaries(text), vec![0]);
    }
}
