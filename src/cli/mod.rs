//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `prepare`: 生成 AutoCAS 输入文件
//! - `run`: 生成输入并在本地运行 AutoCAS，然后解析结果
//! - `parse`: 解析单个作业目录的输出
//! - `collect`: 汇总多个作业目录的结果
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: prepare, run, parse, collect

pub mod collect;
pub mod parse;
pub mod prepare;
pub mod run;

use clap::{Parser, Subcommand};

/// autocas-tool - AutoCAS 活性空间计算的输入生成与结果解析
#[derive(Parser)]
#[command(name = "autocas-tool")]
#[command(version)]
#[command(about = "Prepare AutoCAS active-space calculations and parse their results", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Write autocas.yaml and autocas.xyz into a job directory
    Prepare(prepare::PrepareArgs),

    /// Prepare a job directory, run AutoCAS in it and parse the output
    Run(run::RunArgs),

    /// Parse the AutoCAS output of a finished job directory
    Parse(parse::ParseArgs),

    /// Collect results from every job directory under a root directory
    Collect(collect::CollectArgs),
}
