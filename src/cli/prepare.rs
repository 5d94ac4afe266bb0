//! # prepare 子命令 CLI 定义
//!
//! 生成 AutoCAS 参数文件和坐标文件。计算参数在 `run` 中复用。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs`, `cli/run.rs` 使用
//! - 参数传递给 `commands/prepare.rs`

use clap::Args;
use std::path::PathBuf;

/// AutoCAS 计算参数
///
/// 未给出的参数取自 `--params` 指定的参数文件，再没有则使用默认值。
#[derive(Args, Debug, Default, Clone)]
pub struct ParamArgs {
    /// Existing autocas.yaml to start from (explicit flags override it)
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Charge of the molecular system [default: 0]
    #[arg(long, allow_hyphen_values = true)]
    pub charge: Option<i64>,

    /// Spin multiplicity of the molecular system [default: 1]
    #[arg(long, allow_hyphen_values = true)]
    pub multiplicity: Option<i64>,

    /// Include the double d shell for 3d transition metals [default: true]
    #[arg(long)]
    pub double_d_shell: Option<bool>,

    /// Name of the calculation interface [default: chronusq]
    #[arg(long)]
    pub interface: Option<String>,

    /// Method for the final energy (dmrg_ci, casscf, casci) [default: dmrg_ci]
    #[arg(long)]
    pub method: Option<String>,

    /// DMRG bond dimension of the final calculation [default: 1000]
    #[arg(long)]
    pub dmrg_bond_dimension: Option<i64>,

    /// Number of DMRG sweeps of the final calculation [default: 10]
    #[arg(long)]
    pub dmrg_sweeps: Option<i64>,

    /// Basis set for all calculations [default: def2-svpd]
    #[arg(long)]
    pub basis_set: Option<String>,

    /// Use the large CAS protocol [default: false]
    #[arg(long)]
    pub large_cas_protocol: Option<bool>,
}

/// prepare 子命令参数
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Molecular structure in XYZ format
    #[arg(long)]
    pub xyz: PathBuf,

    /// Job directory to write the input files into
    #[arg(long, default_value = ".")]
    pub job_dir: PathBuf,

    #[command(flatten)]
    pub params: ParamArgs,
}
