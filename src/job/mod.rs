//! # AutoCAS 作业定义
//!
//! 工作流引擎只需要本模块的两个入口：
//! - `build_inputs` 生成输入文件、命令行和需要取回的文件列表
//! - `parse_output` 解释取回的输出，给出结果或终止状态
//!
//! 提交、远程执行、取回文件都由外部引擎负责。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `parsers/`, `models/`
//! - 子模块: inputs, parse

pub mod inputs;
pub mod parse;

pub use inputs::{build_inputs, write_inputs, InputFile, JobInputs};
pub use parse::{extract_result, parse_output, OutputSink};

use thiserror::Error;

/// YAML 参数文件名
pub const PARAMETER_FILE: &str = "autocas.yaml";

/// XYZ 坐标文件名
pub const XYZ_FILE: &str = "autocas.xyz";

/// 标准输出捕获文件名
pub const OUTPUT_FILE: &str = "autocas.out";

/// 标准错误捕获文件名（本地运行时使用）
pub const STDERR_FILE: &str = "autocas.err";

/// 坐标文件标题行
pub const XYZ_TITLE: &str = "AutoCAS Structure";

/// 参数文件中的项目名
pub const PROJECT_NAME: &str = "aiida_autocas";

/// 计算的终止状态，不可在本层重试
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    #[error("[300] ERROR_CALCULATION_FAILED: Something went wrong during the calculation")]
    CalculationFailed,

    #[error("[301] ERROR_PARSER_FAILED: The parser did not find all of the data in the output file")]
    ParserFailed,

    #[error("[303] ERROR_MISSING_OUTPUT_FILE: Output file was not returned from the autocas job calc")]
    MissingOutputFile,
}

impl ExitStatus {
    /// 状态码
    pub fn code(&self) -> u32 {
        match self {
            ExitStatus::CalculationFailed => 300,
            ExitStatus::ParserFailed => 301,
            ExitStatus::MissingOutputFile => 303,
        }
    }

    /// 状态名
    pub fn name(&self) -> &'static str {
        match self {
            ExitStatus::CalculationFailed => "ERROR_CALCULATION_FAILED",
            ExitStatus::ParserFailed => "ERROR_PARSER_FAILED",
            ExitStatus::MissingOutputFile => "ERROR_MISSING_OUTPUT_FILE",
        }
    }

    /// 状态说明
    pub fn message(&self) -> &'static str {
        match self {
            ExitStatus::CalculationFailed => "Something went wrong during the calculation",
            ExitStatus::ParserFailed => {
                "The parser did not find all of the data in the output file"
            }
            ExitStatus::MissingOutputFile => {
                "Output file was not returned from the autocas job calc"
            }
        }
    }
}
