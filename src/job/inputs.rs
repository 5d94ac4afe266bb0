//! # AutoCAS 输入生成
//!
//! 由计算参数和分子结构生成参数文件与坐标文件，
//! 并给出运行命令行和需要取回的输出文件。
//!
//! ## 依赖关系
//! - 被 `commands/prepare.rs`, `commands/run.rs` 使用
//! - 使用 `parsers/parameters.rs`, `parsers/xyz.rs`

use super::{OUTPUT_FILE, PARAMETER_FILE, PROJECT_NAME, XYZ_FILE, XYZ_TITLE};
use crate::error::{AutocasError, Result};
use crate::models::{CalculationParams, Molecule};
use crate::parsers::parameters::to_parameter_string;
use crate::parsers::xyz::to_xyz_string;

use std::fs;
use std::path::{Path, PathBuf};

/// 待写入作业目录的输入文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub name: String,
    pub content: String,
}

/// 一次作业需要交给宿主的全部信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobInputs {
    /// 输入文件（参数文件在前，坐标文件在后）
    pub files: Vec<InputFile>,

    /// 可执行程序的命令行参数
    pub cmdline_params: Vec<String>,

    /// 标准输出重定向目标
    pub stdout_name: String,

    /// 运行结束后需要取回的文件
    pub retrieve_list: Vec<String>,
}

impl JobInputs {
    /// 按文件名查找输入文件内容
    pub fn file(&self, name: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.content.as_str())
    }
}

/// 生成作业输入
pub fn build_inputs(params: &CalculationParams, molecule: &Molecule) -> JobInputs {
    let files = vec![
        InputFile {
            name: PARAMETER_FILE.to_string(),
            content: to_parameter_string(params, XYZ_FILE, PROJECT_NAME),
        },
        InputFile {
            name: XYZ_FILE.to_string(),
            content: to_xyz_string(molecule, XYZ_TITLE),
        },
    ];

    JobInputs {
        files,
        cmdline_params: vec!["-y".to_string(), PARAMETER_FILE.to_string()],
        stdout_name: OUTPUT_FILE.to_string(),
        retrieve_list: vec![OUTPUT_FILE.to_string()],
    }
}

/// 将输入文件写入作业目录（不存在则创建），返回写入的路径
pub fn write_inputs(inputs: &JobInputs, job_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(job_dir).map_err(|e| AutocasError::FileWriteError {
        path: job_dir.display().to_string(),
        source: e,
    })?;

    let mut written = Vec::with_capacity(inputs.files.len());
    for file in &inputs.files {
        let path = job_dir.join(&file.name);
        fs::write(&path, &file.content).map_err(|e| AutocasError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;
        written.push(path);
    }

    Ok(written)
}
