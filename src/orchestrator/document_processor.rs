//! 单个文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责处理单个已提取文本的文档，是文档级别的编排器。
//!
//! 1. **解析**：委托 `QuestionParser` 得到 `ParseResult`
//! 2. **兜底**：没有解析出题目时写入 warn.txt
//! 3. **输出**：通过 `ResultWriter` 写出结果文件
//! 4. **统计输出**：记录题目数量和耗时

use crate::error::AppResult;
use crate::models::loaders::TextDocument;
use crate::models::question::{DocumentReport, ParseResult};
use crate::services::{ResultWriter, WarnWriter};
use crate::utils::truncate_text;
use crate::workflow::{DocumentCtx, QuestionParser};
use tracing::{info, warn};

/// 处理单个文档
///
/// # 参数
/// - `parser`: 题目解析流程
/// - `document`: 已加载的文本文档
/// - `document_index`: 文档序号（用于日志）
/// - `writer`: 结果写出服务
/// - `warn_writer`: 警告写入服务
/// - `verbose`: 是否逐题输出标题
pub async fn process_document(
    parser: &QuestionParser,
    document: TextDocument,
    document_index: usize,
    writer: &ResultWriter,
    warn_writer: &WarnWriter,
    verbose: bool,
) -> AppResult<DocumentReport> {
    let ctx = DocumentCtx::new(&document.name, document_index);
    log_document_start(&ctx, document.text.chars().count());

    let result = parser.parse(&document.text);

    if result.is_empty() {
        warn!("{} ⚠️ 未解析出任何题目，写入 warn.txt", ctx);
        warn_writer.write(&ctx.name, "未解析出题目")?;
        return Ok(DocumentReport {
            name: ctx.name,
            question_count: 0,
            output_path: None,
        });
    }

    if verbose {
        log_titles(&ctx, &result);
    }

    let path = writer.write(&ctx.name, &result).await?;
    info!("{} ✓ 结果已写入: {}", ctx, path.display());

    log_document_complete(&ctx, &result);

    Ok(DocumentReport {
        name: ctx.name,
        question_count: result.total_count(),
        output_path: Some(path.display().to_string()),
    })
}

// ========== 日志辅助函数 ==========

fn log_document_start(ctx: &DocumentCtx, char_count: usize) {
    info!("{} 开始解析，共 {} 个字符", ctx, char_count);
}

fn log_titles(ctx: &DocumentCtx, result: &ParseResult) {
    for (i, question) in result.questions().iter().enumerate() {
        info!("{}   {}. {}", ctx, i + 1, truncate_text(&question.title, 40));
    }
}

fn log_document_complete(ctx: &DocumentCtx, result: &ParseResult) {
    info!(
        "{} ✅ 文档处理完成: {} 道题目, 耗时 {}ms",
        ctx,
        result.total_count(),
        result.elapsed_millis()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "question_import_doc_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn document(name: &str, text: &str) -> TextDocument {
        TextDocument {
            name: name.to_string(),
            path: PathBuf::from(format!("{}.txt", name)),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_document_with_questions_is_written() {
        let dir = scratch("ok");
        let writer = ResultWriter::new(dir.join("out"), OutputFormat::Toml);
        let warn_writer = WarnWriter::with_path(dir.join("warn.txt").to_string_lossy());

        let report = process_document(
            &QuestionParser::default(),
            document("os", "1. 进程\n答案：资源分配单位\n2. 线程"),
            1,
            &writer,
            &warn_writer,
            true,
        )
        .await
        .unwrap();

        assert_eq!(report.question_count, 2);
        let output = report.output_path.unwrap();
        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("资源分配单位"));
        assert!(!dir.join("warn.txt").exists());
    }

    #[tokio::test]
    async fn test_blank_document_goes_to_warn_file() {
        let dir = scratch("blank");
        let writer = ResultWriter::new(dir.join("out"), OutputFormat::Json);
        let warn_path = dir.join("warn.txt");
        let warn_writer = WarnWriter::with_path(warn_path.to_string_lossy());

        let report = process_document(
            &QuestionParser::default(),
            document("blank", "   \n"),
            2,
            &writer,
            &warn_writer,
            false,
        )
        .await
        .unwrap();

        assert_eq!(report.question_count, 0);
        assert!(report.output_path.is_none());
        let warn = std::fs::read_to_string(&warn_path).unwrap();
        assert!(warn.contains("blank"));
    }
}
