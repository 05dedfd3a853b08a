use crate::foundation::error::{MotionError, MotionResult};

pub use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Convert a percentage of `length` to pixels.
#[inline]
pub fn percent_of(pct: f64, length: f64) -> f64 {
    (pct / 100.0) * length
}

/// Parse a `WIDTHxHEIGHT` measurement such as `1920x1080`.
///
/// Both components must be finite and non-negative; fractional values are accepted
/// because DOM measurements are not integral.
pub fn parse_size(s: &str) -> MotionResult<Size> {
    let s = s.trim();
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| MotionError::validation(format!("size '{s}' must look like WxH")))?;

    let parse = |part: &str, axis: &str| -> MotionResult<f64> {
        let v: f64 = part
            .trim()
            .parse()
            .map_err(|_| MotionError::validation(format!("size {axis} '{part}' is not a number")))?;
        if !v.is_finite() || v < 0.0 {
            return Err(MotionError::validation(format!(
                "size {axis} must be finite and >= 0"
            )));
        }
        Ok(v)
    };

    Ok(Size::new(parse(w, "width")?, parse(h, "height")?))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
