//! # 数据模型模块
//!
//! 定义计算参数、分子结构和解析结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `job/`、`parsers/` 和 `commands/` 使用
//! - 子模块: params, molecule, result

pub mod molecule;
pub mod params;
pub mod result;

pub use molecule::{Atom, Molecule};
pub use params::CalculationParams;
pub use result::{ParsedOutput, ParsedResult};
