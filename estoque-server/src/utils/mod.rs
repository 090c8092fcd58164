//! 工具模块 - 通用工具函数
//!
//! - [`format`] - 表单数值解析、BRL 货币格式化
//! - [`money`] - Decimal 金额计算
//! - [`logger`] - 日志初始化

pub mod format;
pub mod logger;
pub mod money;

pub use format::{format_brl, parse_int_strict, parse_number_strict};
