//! # Grammar Annotator
//!
//! 语法检查结果的修改高亮工具
//!
//! 语法检查服务返回拼写 / 标点 / 语法三类修改记录和一段修改后的全文，
//! 本库负责在全文中定位每条修改，生成带原文和说明的标注片段。
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - `AnalysisResult`、`Correction`、`AnnotatedSpan` 以及 JSON 加载
//!
//! ### ② 业务能力层（Services）
//! - `annotate` - 修改高亮引擎（纯函数）
//! - `ErrorSummary` / `AnnotationStats` - 统计
//! - `render_spans` - 终端文本渲染
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量处理输入目录，管理并发
//! - `orchestrator/file_processor` - 处理单个分析结果

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AnalysisResult, AnnotatedSpan, Category, Correction};
pub use orchestrator::{process_result, App};
pub use services::annotate;
