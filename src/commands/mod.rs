//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑，是 `job/` 核心与命令行之间的薄适配层。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `job/`, `parsers/`, `models/`, `utils/`
//! - 子模块: prepare, run, parse, collect

pub mod collect;
pub mod parse;
pub mod prepare;
pub mod run;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Prepare(args) => prepare::execute(args),
        Commands::Run(args) => run::execute(args),
        Commands::Parse(args) => parse::execute(args),
        Commands::Collect(args) => collect::execute(args),
    }
}
