//! # 解析器模块
//!
//! AutoCAS 输入输出文件的读写。
//!
//! ## 依赖关系
//! - 被 `job/` 和 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: xyz, parameters, autocas_out

pub mod autocas_out;
pub mod parameters;
pub mod xyz;
