//! 表单输入解析与货币格式化
//!
//! 表单字段都是字符串，这里把它们严格转换为数值：空串、非数字、
//! 非有限值一律拒绝 (返回 `None`)，由调用方决定错误提示。

use rust_decimal::{Decimal, RoundingStrategy};

/// 货币符号与金额之间的不换行空格 (与 pt-BR locale 输出一致)
const NBSP: char = '\u{a0}';

/// Format a monetary value as Brazilian reais: `R$ 1.234,56`.
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R${NBSP}{grouped},{frac_part}")
}

/// Parse a decimal number typed by a human.
///
/// Accepts `,` as decimal separator (only the first one is rewritten).
pub fn parse_number_strict(input: &str) -> Option<f64> {
    let normalized = input.trim().replacen(',', ".", 1);
    if normalized.is_empty() {
        return None;
    }
    normalized
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Parse an integer typed by a human.
///
/// `"10"` 与 `"10.0"` 都是 10；`"2.5"`、空串、`"abc"` 返回 `None`。
pub fn parse_int_strict(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(n);
    }

    let n = trimmed.parse::<f64>().ok()?;
    let in_range = n >= i64::MIN as f64 && n < i64::MAX as f64;
    if n.is_finite() && n.fract() == 0.0 && in_range {
        Some(n as i64)
    } else {
        None
    }
}
