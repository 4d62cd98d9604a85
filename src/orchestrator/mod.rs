//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文档处理器
//! - 管理应用生命周期（初始化、运行）
//! - 批量加载文档（Vec<TextDocument>）
//! - 控制并发数量（Semaphore）
//! - 输出全局统计信息
//!
//! ### `document_processor` - 单个文档处理器
//! - 调用解析流程得到题目列表
//! - 写出结果文件，没有题目时写入 warn.txt
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<TextDocument>)
//!     ↓
//! document_processor (处理单个文档)
//!     ↓
//! workflow::QuestionParser (扫描 → 切分 → 解析 → 校验)
//!     ↓
//! services (能力层：markers / scanner / segmenter / parser / validator / writer)
//! ```

pub mod batch_processor;
pub mod document_processor;

pub use batch_processor::App;
pub use document_processor::process_document;
