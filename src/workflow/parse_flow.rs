//! 题目解析流程 - 流程层
//!
//! 核心职责：定义"一段文本"的完整解析流程
//!
//! 流程顺序：
//! 1. 扫描题号边界
//! 2. 按边界切分（无边界时整篇兜底）
//! 3. 逐段解析 → 校验
//! 4. 汇总结果并计时

use std::time::Instant;
use tracing::{debug, info};

use crate::config::ParserConfig;
use crate::models::question::{ParseResult, ParsedQuestion};
use crate::services::{boundary_scanner, segment_parser, segmenter, validator};

/// 题目解析流程
///
/// - 只持有不可变配置，可以在多个任务间共享
/// - 对任意文本都不会失败，最坏情况返回空结果
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionParser {
    config: ParserConfig,
}

impl QuestionParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// 解析整篇文本
    pub fn parse(&self, text: &str) -> ParseResult {
        let started = Instant::now();
        let questions = self.parse_questions(text);
        let elapsed_millis = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let result = ParseResult::new(questions, elapsed_millis);
        info!(
            "解析完成，共提取 {} 道题目，耗时 {}ms",
            result.total_count(),
            result.elapsed_millis()
        );
        result
    }

    /// 不计时的解析，按文档顺序返回有效题目
    pub fn parse_questions(&self, text: &str) -> Vec<ParsedQuestion> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let offsets = boundary_scanner::scan_boundaries(text);
        if offsets.is_empty() {
            debug!("未找到题号，整篇作为一道题目");
        } else {
            debug!("找到 {} 个题号边界", offsets.len());
        }

        let segments = segmenter::split_segments(text, &offsets);
        let candidates = segments.len();

        let questions: Vec<ParsedQuestion> = segments
            .iter()
            .map(|segment| segment_parser::parse_segment(segment, &self.config))
            .filter(validator::is_valid_question)
            .collect();

        if questions.len() < candidates {
            debug!("丢弃 {} 个无效片段", candidates - questions.len());
        }

        questions
    }
}

/// 使用默认配置解析
pub fn parse_text(text: &str) -> ParseResult {
    QuestionParser::default().parse(text)
}
