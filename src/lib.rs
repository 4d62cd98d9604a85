//! # Question Import
//!
//! 把从 PDF 中提取出的纯文本切分成结构化的题目列表（标题、正文、答案）
//!
//! ## 架构设计
//!
//! ### ① 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个模块只做一件事
//! - `markers` - 题号 / 答案标记的有序正则集合，全局只读
//! - `boundary_scanner` - 找出所有题号的起始位置
//! - `segmenter` - 按边界切分片段，无题号时整篇兜底
//! - `segment_parser` - 单个片段 → 标题 / 正文 / 答案
//! - `validator` - 过滤标题为空的噪声片段
//! - `ResultWriter` / `WarnWriter` - 写结果文件 / warn.txt
//!
//! ### ② 流程层（Workflow）
//! - `QuestionParser` - 扫描 → 切分 → 解析 → 校验，并计时
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量文档处理器，管理并发
//! - `orchestrator/document_processor` - 单个文档处理器
//!
//! ## 示例
//!
//! ```
//! use question_import::parse_text;
//!
//! let result = parse_text("1. 什么是互斥锁？\n答案：一种同步原语");
//! assert_eq!(result.total_count(), 1);
//! assert_eq!(result.questions()[0].title, "什么是互斥锁？");
//! assert_eq!(result.questions()[0].answer, "一种同步原语");
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{Config, OutputFormat, ParserConfig};
pub use error::{AppError, AppResult};
pub use models::{BatchSummary, DocumentReport, ParseResult, ParsedQuestion, TextDocument};
pub use orchestrator::App;
pub use workflow::{parse_text, QuestionParser};
