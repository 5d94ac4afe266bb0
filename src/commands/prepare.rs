//! # prepare 命令实现
//!
//! 读取 XYZ 结构，生成 AutoCAS 参数文件和坐标文件。
//!
//! ## 依赖关系
//! - 使用 `cli/prepare.rs` 定义的参数
//! - 使用 `job/inputs.rs`, `parsers/`, `utils/output.rs`

use crate::cli::prepare::{ParamArgs, PrepareArgs};
use crate::error::{AutocasError, Result};
use crate::job::{self, JobInputs};
use crate::models::{CalculationParams, Molecule};
use crate::parsers::{parameters, xyz};
use crate::utils::output;

use std::path::Path;

/// 执行 prepare 命令
pub fn execute(args: PrepareArgs) -> Result<()> {
    output::print_header("Preparing AutoCAS Job");

    let params = resolve_params(&args.params)?;
    let molecule = read_molecule(&args.xyz)?;
    prepare_job_dir(&params, &molecule, &args.job_dir)?;

    output::print_done(&format!("Job directory ready: {}", args.job_dir.display()));
    Ok(())
}

/// 合并参数文件与命令行参数
///
/// 优先级：命令行 > `--params` 文件 > 默认值。
pub fn resolve_params(args: &ParamArgs) -> Result<CalculationParams> {
    let mut params = match &args.params {
        Some(path) => {
            if !path.exists() {
                return Err(AutocasError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            parameters::parse_parameter_file(path)?
        }
        None => CalculationParams::default(),
    };

    if let Some(v) = args.charge {
        params.charge = v;
    }
    if let Some(v) = args.multiplicity {
        params.multiplicity = v;
    }
    if let Some(v) = args.double_d_shell {
        params.double_d_shell = v;
    }
    if let Some(ref v) = args.interface {
        params.interface = v.clone();
    }
    if let Some(ref v) = args.method {
        params.method = v.clone();
    }
    if let Some(v) = args.dmrg_bond_dimension {
        params.dmrg_bond_dimension = v;
    }
    if let Some(v) = args.dmrg_sweeps {
        params.dmrg_sweeps = v;
    }
    if let Some(ref v) = args.basis_set {
        params.basis_set = v.clone();
    }
    if let Some(v) = args.large_cas_protocol {
        params.large_cas_protocol = v;
    }

    Ok(params)
}

/// 读取分子结构
pub fn read_molecule(path: &Path) -> Result<Molecule> {
    if !path.exists() {
        return Err(AutocasError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let molecule = xyz::parse_xyz_file(path)?;
    output::print_info(&format!(
        "Loaded {} ({} atoms) from {}",
        molecule.formula(),
        molecule.len(),
        path.display()
    ));
    Ok(molecule)
}

/// 生成并写入作业输入
pub fn prepare_job_dir(
    params: &CalculationParams,
    molecule: &Molecule,
    job_dir: &Path,
) -> Result<JobInputs> {
    let inputs = job::build_inputs(params, molecule);
    let written = job::write_inputs(&inputs, job_dir)?;

    for path in &written {
        output::print_success(&format!("Wrote {}", path.display()));
    }
    output::print_info(&format!(
        "Command line: <autocas> {} > {}",
        inputs.cmdline_params.join(" "),
        inputs.stdout_name
    ));

    Ok(inputs)
}
