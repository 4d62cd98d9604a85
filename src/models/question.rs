use serde::{Deserialize, Serialize};

/// 从一段文本中解析出的单道题目
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuestion {
    /// 标题（不超过配置的字符上限）
    pub title: String,
    /// 标题之后的正文，可能为空
    pub content: String,
    /// 答案，未找到答案标记时为空
    pub answer: String,
}

impl ParsedQuestion {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            answer: answer.into(),
        }
    }
}

/// 一次解析调用的结果
///
/// `total_count` 只能由构造函数根据题目列表计算，始终等于 `questions.len()`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    total_count: usize,
    elapsed_millis: u64,
    // 数组放在最后，TOML 中标量必须写在表数组之前
    questions: Vec<ParsedQuestion>,
}

impl ParseResult {
    pub fn new(questions: Vec<ParsedQuestion>, elapsed_millis: u64) -> Self {
        Self {
            total_count: questions.len(),
            questions,
            elapsed_millis,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    pub fn questions(&self) -> &[ParsedQuestion] {
        &self.questions
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn elapsed_millis(&self) -> u64 {
        self.elapsed_millis
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn into_questions(self) -> Vec<ParsedQuestion> {
        self.questions
    }
}

/// 单个文档的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReport {
    /// 文档名（不含扩展名）
    pub name: String,
    /// 提取的题目数
    pub question_count: usize,
    /// 结果文件路径，未写出时为 `None`
    pub output_path: Option<String>,
}

/// 整批处理统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    /// 所有成功文档提取出的题目总数
    pub questions: usize,
}
