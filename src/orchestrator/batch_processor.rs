//! 批量文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量文档的解析和资源管理。
//!
//! 1. **应用初始化**：写运行日志头、输出启动信息
//! 2. **批量加载**：扫描并加载所有待解析的文本（`Vec<TextDocument>`）
//! 3. **并发控制**：使用 Semaphore 限制并发数量
//! 4. **分批处理**：每批完成后再开始下一批
//! 5. **全局统计**：汇总所有文档的处理结果
//!
//! 解析核心不持有可变状态，标记正则全局只读，所以各任务之间无需任何同步。

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::loaders::{self, TextDocument};
use crate::models::question::BatchSummary;
use crate::orchestrator::document_processor;
use crate::services::{ResultWriter, WarnWriter};
use crate::utils::logging;
use crate::workflow::QuestionParser;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    parser: QuestionParser,
    writer: Arc<ResultWriter>,
    warn_writer: Arc<WarnWriter>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> AppResult<Self> {
        config.validate()?;

        // 初始化日志文件
        logging::init_log_file(&config.output_log_file)?;
        logging::log_startup(config.max_concurrent_documents, &config.input_folder);

        Ok(Self {
            parser: QuestionParser::new(config.parser),
            writer: Arc::new(ResultWriter::new(&config.output_folder, config.output_format)),
            warn_writer: Arc::new(WarnWriter::with_path(&config.warn_file)),
            config,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> AppResult<BatchSummary> {
        let documents = self.load_documents().await?;

        if documents.is_empty() {
            warn!("⚠️ 没有找到待解析的文本文件，程序结束");
            return Ok(BatchSummary::default());
        }

        logging::log_documents_loaded(documents.len(), self.config.max_concurrent_documents);

        let summary = self.process_all_documents(documents).await?;

        logging::print_final_stats(
            summary.success,
            summary.failed,
            summary.total,
            summary.questions,
            &self.config.output_log_file,
        );

        Ok(summary)
    }

    async fn load_documents(&self) -> AppResult<Vec<TextDocument>> {
        info!("📁 正在扫描待解析的文本...");
        loaders::load_all_text_documents(&self.config.input_folder, self.config.max_file_size_bytes)
            .await
    }

    async fn process_all_documents(&self, documents: Vec<TextDocument>) -> AppResult<BatchSummary> {
        let batch_size = self.config.max_concurrent_documents;
        let semaphore = Arc::new(Semaphore::new(batch_size));
        let total = documents.len();
        let total_batches = total.div_ceil(batch_size);
        let mut summary = BatchSummary {
            total,
            ..Default::default()
        };

        let mut remaining = documents.into_iter();
        for batch_index in 0..total_batches {
            let batch: Vec<TextDocument> = remaining.by_ref().take(batch_size).collect();
            let batch_start = batch_index * batch_size;

            logging::log_batch_start(
                batch_index + 1,
                total_batches,
                batch_start + 1,
                batch_start + batch.len(),
                total,
            );

            let batch_len = batch.len();
            let result = self.process_batch(batch, batch_start, semaphore.clone()).await?;

            summary.success += result.success;
            summary.failed += result.failed;
            summary.questions += result.questions;

            logging::log_batch_complete(batch_index + 1, result.success, batch_len);
        }

        Ok(summary)
    }

    async fn process_batch(
        &self,
        batch: Vec<TextDocument>,
        batch_start: usize,
        semaphore: Arc<Semaphore>,
    ) -> AppResult<BatchResult> {
        let mut handles = Vec::with_capacity(batch.len());

        for (idx, document) in batch.into_iter().enumerate() {
            let document_index = batch_start + idx + 1;
            let permit = semaphore
                .clone()
                .acquire_owned()
                .await
                .map_err(|e| AppError::Task(e.to_string()))?;

            let parser = self.parser;
            let writer = Arc::clone(&self.writer);
            let warn_writer = Arc::clone(&self.warn_writer);
            let verbose = self.config.verbose_logging;

            let handle = tokio::spawn(async move {
                let _permit = permit;
                document_processor::process_document(
                    &parser,
                    document,
                    document_index,
                    &writer,
                    &warn_writer,
                    verbose,
                )
                .await
            });
            handles.push((document_index, handle));
        }

        let mut result = BatchResult::default();

        for (document_index, handle) in handles {
            match handle.await {
                Ok(Ok(report)) if report.question_count > 0 => {
                    result.success += 1;
                    result.questions += report.question_count;
                }
                Ok(Ok(_)) => {
                    result.failed += 1;
                }
                Ok(Err(e)) => {
                    error!("[文档 #{}] ❌ 处理过程中发生错误: {}", document_index, e);
                    result.failed += 1;
                }
                Err(e) => {
                    error!("[文档 #{}] 任务执行失败: {}", document_index, e);
                    result.failed += 1;
                }
            }
        }

        Ok(result)
    }
}

/// 批次处理结果
#[derive(Debug, Default)]
struct BatchResult {
    success: usize,
    failed: usize,
    questions: usize,
}
