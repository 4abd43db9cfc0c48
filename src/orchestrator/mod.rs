//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量处理器
//! - 管理应用生命周期（初始化、运行）
//! - 批量加载分析结果（Vec<AnalysisFile>）
//! - 控制并发数量（Semaphore）
//! - 输出全局统计信息
//!
//! ### `file_processor` - 单个文件处理器
//! - 展平修改记录并调用标注引擎
//! - 统计、渲染单个文件
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<AnalysisFile>)
//!     ↓
//! file_processor (处理单个 AnalysisResult)
//!     ↓
//! services (能力层：annotate / summary / renderer)
//! ```

pub mod batch_processor;
pub mod file_processor;

// 重新导出主要类型
pub use batch_processor::{App, ProcessingStats};
pub use file_processor::{process_result, FileOutcome};
