//! CSS value formatting that never calls `format!` on a float.
//!
//! Float-to-decimal formatting has had wasm-facing panics on some
//! toolchain/browser combinations, so values are scaled into an `i64` and
//! printed as integers. Trailing zeros are trimmed (`12.500` -> `12.5`) and
//! non-finite input collapses to `0`, which is always a valid CSS length.

/// Decimal places kept for every emitted value.
pub const CSS_DECIMALS: u32 = 3;

pub fn number(v: f64) -> String {
    fmt_trimmed(v, CSS_DECIMALS)
}

pub fn px(v: f64) -> String {
    let mut s = number(v);
    s.push_str("px");
    s
}

pub fn deg(v: f64) -> String {
    let mut s = number(v);
    s.push_str("deg");
    s
}

pub fn percent(v: f64) -> String {
    let mut s = number(v);
    s.push('%');
    s
}

/// Seconds with an `s` suffix, for `transition` shorthands.
pub fn seconds_from_ms(ms: u32) -> String {
    let mut s = number(f64::from(ms) / 1000.0);
    s.push('s');
    s
}

fn fmt_trimmed(v: f64, decimals: u32) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }

    let scale = 10_i64.pow(decimals.min(9));
    let scaled = (v * scale as f64).round();
    if !scaled.is_finite() || scaled.abs() > i64::MAX as f64 {
        return "0".to_string();
    }

    let scaled = scaled as i64;
    if scaled == 0 {
        // Also folds -0.0.
        return "0".to_string();
    }

    let abs = scaled.unsigned_abs();
    let scale = scale as u64;
    let int_part = abs / scale;
    let mut frac_part = abs % scale;

    let mut out = String::new();
    if scaled < 0 {
        out.push('-');
    }
    out.push_str(&int_part.to_string());

    if frac_part != 0 {
        let mut width = decimals as usize;
        while frac_part % 10 == 0 {
            frac_part /= 10;
            width -= 1;
        }
        let digits = frac_part.to_string();
        out.push('.');
        for _ in 0..width.saturating_sub(digits.len()) {
            out.push('0');
        }
        out.push_str(&digits);
    }

    out
}
