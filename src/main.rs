//! # autocas-tool - AutoCAS 作业的输入生成与结果解析
//!
//! 为 AutoCAS（自动活性空间选择 + DMRG/CASSCF/CASCI 能量计算）
//! 生成输入文件，并从其输出报告中提取活性空间和能量。
//!
//! ## 子命令
//! - `prepare` - 生成 autocas.yaml 与 autocas.xyz
//! - `run`     - 生成输入后在本地运行 AutoCAS 并解析
//! - `parse`   - 解析单个作业目录
//! - `collect` - 汇总多个作业目录的结果
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── job/       (输入生成与结果解释)
//!   │     ├── parsers/   (文件读写)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (终端输出)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod job;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;
use error::AutocasError;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    match commands::run(cli.command) {
        Ok(()) => {}
        Err(AutocasError::Calculation(status)) => {
            utils::output::print_exit_status(&status);
            std::process::exit(1);
        }
        Err(e) => {
            utils::output::print_error(&format!("{}", e));
            std::process::exit(1);
        }
    }
}
