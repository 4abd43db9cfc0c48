//! 批量标注处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量分析结果的处理和调度。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：创建运行日志文件，输出启动信息
//! 2. **批量加载**：扫描并加载输入目录中所有分析结果（`LoadedResults`），加载失败的文件计入失败数
//! 3. **并发控制**：使用 Semaphore 限制并发数量
//! 4. **分批处理**：将文件分批次处理，每批完成后再开始下一批
//! 5. **全局统计**：汇总所有文件的处理结果
//!
//! 标注本身是纯函数，这里的并发只用于调度，不共享任何可变状态。

use crate::config::Config;
use crate::models::{AnalysisFile, LoadedResults};
use crate::orchestrator::file_processor::{self, FileOutcome};
use crate::services::RenderOptions;
use crate::utils::logging::{
    append_log_line, init_log_file, log_batch_complete, log_batch_start, log_files_loaded,
    log_startup, print_final_stats,
};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    options: RenderOptions,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(&config);

        let options = RenderOptions::from(&config);
        Ok(Self { config, options })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<ProcessingStats> {
        let loaded = self.load_files().await?;

        if loaded.is_empty() {
            warn!("⚠️ 没有找到待处理的JSON文件，程序结束");
            return Ok(ProcessingStats::default());
        }

        // 加载失败的文件也计入总数
        let mut stats = ProcessingStats {
            total: loaded.total(),
            failed: loaded.failed.len(),
            ..Default::default()
        };
        for path in &loaded.failed {
            self.append_log(&format!("{} | 加载失败", path.display()));
        }

        if !loaded.files.is_empty() {
            log_files_loaded(loaded.files.len(), self.config.max_concurrent_files);
            self.process_all_files(loaded.files, &mut stats).await?;
        }

        print_final_stats(
            stats.success,
            stats.failed,
            stats.total,
            stats.highlighted,
            stats.unmatched,
            &self.config.output_log_file,
        );

        Ok(stats)
    }

    /// 加载分析结果
    async fn load_files(&self) -> Result<LoadedResults> {
        info!("\n📁 正在扫描待处理的分析结果...");
        Ok(crate::models::load_all_analysis_results(&self.config.input_folder).await?)
    }

    /// 处理所有文件
    async fn process_all_files(
        &self,
        all_files: Vec<AnalysisFile>,
        stats: &mut ProcessingStats,
    ) -> Result<()> {
        let batch_size = self.config.max_concurrent_files.max(1);
        let semaphore = Arc::new(Semaphore::new(batch_size));
        let total_files = all_files.len();

        let total_batches = total_files.div_ceil(batch_size);

        // 分批处理
        for batch_start in (0..total_files).step_by(batch_size) {
            let batch_end = (batch_start + batch_size).min(total_files);
            let batch_files = &all_files[batch_start..batch_end];
            let batch_num = (batch_start / batch_size) + 1;

            log_batch_start(
                batch_num,
                total_batches,
                batch_start + 1,
                batch_end,
                total_files,
            );

            let outcomes = self
                .process_batch(batch_files, batch_start, semaphore.clone())
                .await?;

            let batch_total = batch_files.len();
            let batch_success = outcomes.len();

            for outcome in outcomes {
                self.report(&outcome);
                stats.record(&outcome);
            }
            stats.failed += batch_total - batch_success;

            log_batch_complete(batch_num, batch_success, batch_total);
        }

        Ok(())
    }

    /// 处理单个批次，结果按文件顺序返回
    async fn process_batch(
        &self,
        batch_files: &[AnalysisFile],
        batch_start: usize,
        semaphore: Arc<Semaphore>,
    ) -> Result<Vec<FileOutcome>> {
        let mut batch_handles = Vec::new();

        for (idx, file) in batch_files.iter().enumerate() {
            let file_index = batch_start + idx + 1;
            let permit = semaphore.clone().acquire_owned().await?;

            let file_clone = file.clone();
            let options_clone = self.options.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                file_processor::process_result(&file_clone, file_index, &options_clone)
            });
            batch_handles.push((file_index, handle));
        }

        // 等待本批所有任务完成
        let mut outcomes = Vec::with_capacity(batch_handles.len());
        for (file_index, handle) in batch_handles {
            match handle.await {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => error!("[文件 {}] 任务执行失败: {}", file_index, e),
            }
        }

        Ok(outcomes)
    }

    /// 打印标注结果并写入运行日志
    fn report(&self, outcome: &FileOutcome) {
        println!("\n===== {} =====", outcome.name);
        if let Some(source) = &outcome.source_path {
            println!("File: {}", source);
        }
        for line in &outcome.service_summary {
            println!("- {}", line);
        }
        println!("{}", outcome.rendered);
        if !outcome.notes.is_empty() {
            println!();
            for note in &outcome.notes {
                println!("{}", note);
            }
        }

        self.append_log(&outcome.log_line());
    }

    /// 写入运行日志，失败时只记录警告
    fn append_log(&self, line: &str) {
        if let Err(e) = append_log_line(&self.config.output_log_file, line) {
            warn!("写入日志失败: {}", e);
        }
    }
}

/// 处理统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    pub corrections: usize,
    pub highlighted: usize,
    pub unmatched: usize,
}

impl ProcessingStats {
    fn record(&mut self, outcome: &FileOutcome) {
        self.success += 1;
        self.corrections += outcome.summary.total();
        self.highlighted += outcome.stats.highlighted;
        self.unmatched += outcome.stats.unmatched;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const ESSAY: &str = r#"{
        "spelling": [{"before": "rihgt", "after": "correct", "explanation": "word choice"}],
        "punctuation": [],
        "grammar": [{"before": "was not", "after": "wasn't", "explanation": "contraction"}],
        "corrected_text": "wasn't correct"
    }"#;

    #[tokio::test]
    async fn test_run_over_folder() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input");
        fs::create_dir(&input).unwrap();
        for name in ["one.json", "two.json", "three.json"] {
            fs::write(input.join(name), ESSAY).unwrap();
        }
        fs::write(input.join("bad.json"), "nope").unwrap();

        let log_file = dir.path().join("run.log");
        let config = Config {
            max_concurrent_files: 2,
            input_folder: input.to_string_lossy().to_string(),
            output_log_file: log_file.to_string_lossy().to_string(),
            ..Default::default()
        };

        let app = App::initialize(config).await.unwrap();
        let stats = app.run().await.unwrap();

        assert_eq!(
            stats,
            ProcessingStats {
                total: 4,
                success: 3,
                failed: 1,
                corrections: 6,
                highlighted: 6,
                unmatched: 0,
            }
        );

        let log = fs::read_to_string(&log_file).unwrap();
        assert_eq!(log.matches("| 高亮 2 |").count(), 3);
        assert!(log.contains("bad.json | 加载失败"));
    }

    #[tokio::test]
    async fn test_run_where_every_file_fails_to_load() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("broken.json"), "{").unwrap();

        let config = Config {
            input_folder: input.to_string_lossy().to_string(),
            output_log_file: dir.path().join("run.log").to_string_lossy().to_string(),
            ..Default::default()
        };

        let app = App::initialize(config).await.unwrap();
        assert_eq!(
            app.run().await.unwrap(),
            ProcessingStats {
                total: 1,
                failed: 1,
                ..Default::default()
            }
        );
    }

    #[tokio::test]
    async fn test_run_with_empty_folder() {
        let dir = tempdir().unwrap();
        let config = Config {
            input_folder: dir.path().to_string_lossy().to_string(),
            output_log_file: dir.path().join("run.log").to_string_lossy().to_string(),
            ..Default::default()
        };

        let app = App::initialize(config).await.unwrap();
        assert_eq!(app.run().await.unwrap(), ProcessingStats::default());
    }
}
