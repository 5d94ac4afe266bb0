//! # AutoCAS 计算参数
//!
//! 一次 AutoCAS 计算的全部标量输入，构造后只读。
//!
//! ## 依赖关系
//! - 被 `job/inputs.rs`, `parsers/parameters.rs`, `cli/` 使用
//! - 无外部模块依赖

/// 计算参数（默认值与 AutoCAS 推荐设置一致）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationParams {
    /// 分子总电荷，默认 0
    pub charge: i64,

    /// 自旋多重度，默认 1（不做合法性检查）
    pub multiplicity: i64,

    /// 3d 过渡金属是否包含双 d 壳层，默认 true
    pub double_d_shell: bool,

    /// 量化程序接口名，默认 `chronusq`
    pub interface: String,

    /// 最终能量计算方法（dmrg_ci, casscf, casci ...），默认 `dmrg_ci`
    pub method: String,

    /// 最终 DMRG 计算的键维数，默认 1000
    pub dmrg_bond_dimension: i64,

    /// 最终 DMRG 计算的 sweep 次数，默认 10
    pub dmrg_sweeps: i64,

    /// 所有计算使用的基组，默认 `def2-svpd`
    pub basis_set: String,

    /// 是否启用 large CAS 协议（价层活性空间过大时使用），默认 false
    pub large_cas_protocol: bool,
}

impl Default for CalculationParams {
    fn default() -> Self {
        CalculationParams {
            charge: 0,
            multiplicity: 1,
            double_d_shell: true,
            interface: "chronusq".to_string(),
            method: "dmrg_ci".to_string(),
            dmrg_bond_dimension: 1000,
            dmrg_sweeps: 10,
            basis_set: "def2-svpd".to_string(),
            large_cas_protocol: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = CalculationParams::default();
        assert_eq!(params.charge, 0);
        assert_eq!(params.multiplicity, 1);
        assert!(params.double_d_shell);
        assert_eq!(params.interface, "chronusq");
        assert_eq!(params.method, "dmrg_ci");
        assert_eq!(params.dmrg_bond_dimension, 1000);
        assert_eq!(params.dmrg_sweeps, 10);
        assert_eq!(params.basis_set, "def2-svpd");
        assert!(!params.large_cas_protocol);
    }
}
