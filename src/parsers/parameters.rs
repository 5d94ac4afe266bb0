//! # AutoCAS YAML 参数文件读写
//!
//! 参数文件的键顺序和缩进是固定的，AutoCAS 按位置查找各字段，
//! 所以这里逐行拼接而不是走通用的 YAML 序列化。
//!
//! ## 参数文件格式
//! ```text
//! ---
//! large_cas: False
//! molecule:
//!     charge: 0
//!     spin_multiplicity: 1
//!     double_d_shell: True
//!     xyz_file: autocas.xyz
//! interface:
//!     interface: chronusq
//!     project_name: aiida_autocas
//!     settings:
//!         dmrg_bond_dimension: 1000
//!         dmrg_sweeps: 10
//!         basis_set: def2-svpd
//!         method: dmrg_ci
//!         xyz_file: autocas.xyz
//! ```
//!
//! ## 依赖关系
//! - 被 `job/inputs.rs`, `commands/` 使用
//! - 使用 `models/params.rs`
//! - 读取使用 `serde_yaml`，写入逐行拼接

use crate::error::{AutocasError, Result};
use crate::models::CalculationParams;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const INDENT: &str = "    ";

/// 布尔值的文本形式
fn format_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// 生成参数文件内容
pub fn to_parameter_string(
    params: &CalculationParams,
    xyz_file: &str,
    project_name: &str,
) -> String {
    let mut lines = String::from("---\n");
    lines.push_str(&format!(
        "large_cas: {}\n",
        format_bool(params.large_cas_protocol)
    ));

    lines.push_str("molecule:\n");
    lines.push_str(&format!("{INDENT}charge: {}\n", params.charge));
    lines.push_str(&format!(
        "{INDENT}spin_multiplicity: {}\n",
        params.multiplicity
    ));
    lines.push_str(&format!(
        "{INDENT}double_d_shell: {}\n",
        format_bool(params.double_d_shell)
    ));
    lines.push_str(&format!("{INDENT}xyz_file: {}\n", xyz_file));

    lines.push_str("interface:\n");
    lines.push_str(&format!("{INDENT}interface: {}\n", params.interface));
    lines.push_str(&format!("{INDENT}project_name: {}\n", project_name));
    lines.push_str(&format!("{INDENT}settings:\n"));
    lines.push_str(&format!(
        "{INDENT}{INDENT}dmrg_bond_dimension: {}\n",
        params.dmrg_bond_dimension
    ));
    lines.push_str(&format!(
        "{INDENT}{INDENT}dmrg_sweeps: {}\n",
        params.dmrg_sweeps
    ));
    lines.push_str(&format!("{INDENT}{INDENT}basis_set: {}\n", params.basis_set));
    lines.push_str(&format!("{INDENT}{INDENT}method: {}\n", params.method));
    lines.push_str(&format!("{INDENT}{INDENT}xyz_file: {}\n", xyz_file));

    lines
}

/// 读取参数文件
pub fn parse_parameter_file(path: &Path) -> Result<CalculationParams> {
    let content = fs::read_to_string(path).map_err(|e| AutocasError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_parameter_content(&content, &path.display().to_string())
}

/// 参数文件顶层
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParameterFile {
    large_cas: bool,
    molecule: MoleculeSection,
    interface: InterfaceSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MoleculeSection {
    charge: i64,
    spin_multiplicity: i64,
    double_d_shell: bool,
    #[serde(default, rename = "xyz_file")]
    _xyz_file: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct InterfaceSection {
    interface: String,
    #[serde(default, rename = "project_name")]
    _project_name: Option<String>,
    settings: SettingsSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsSection {
    dmrg_bond_dimension: i64,
    dmrg_sweeps: i64,
    basis_set: String,
    method: String,
    #[serde(default, rename = "xyz_file")]
    _xyz_file: Option<String>,
}

impl From<ParameterFile> for CalculationParams {
    fn from(file: ParameterFile) -> Self {
        CalculationParams {
            charge: file.molecule.charge,
            multiplicity: file.molecule.spin_multiplicity,
            double_d_shell: file.molecule.double_d_shell,
            interface: file.interface.interface,
            method: file.interface.settings.method,
            dmrg_bond_dimension: file.interface.settings.dmrg_bond_dimension,
            dmrg_sweeps: file.interface.settings.dmrg_sweeps,
            basis_set: file.interface.settings.basis_set,
            large_cas_protocol: file.large_cas,
        }
    }
}

/// 从字符串内容解析参数文件
///
/// 结构必须与上面一致：未知键、重复键和缺失键都是错误。
/// `xyz_file` 与 `project_name` 由输入生成器决定，读取时忽略。
pub fn parse_parameter_content(content: &str, source_name: &str) -> Result<CalculationParams> {
    let file: ParameterFile =
        serde_yaml::from_str(content).map_err(|e| AutocasError::ParseError {
            format: "parameter".to_string(),
            path: source_name.to_string(),
            reason: e.to_string(),
        })?;

    Ok(file.into())
}
