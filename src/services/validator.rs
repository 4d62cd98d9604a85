//! 题目校验 - 业务能力层

use crate::models::question::ParsedQuestion;

/// 标题去空白后非空即为有效题目
///
/// 正文和答案允许为空。无效题目只是解析噪声（如只有题号的碎片），直接丢弃。
pub fn is_valid_question(question: &ParsedQuestion) -> bool {
    !question.title.trim().is_empty()
}
