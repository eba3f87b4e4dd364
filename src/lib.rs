use anyhow::{Result, anyhow};
use log::debug;

/// Adds `right` to `left` with the native `i64` overflow behavior (a panic in debug builds,
/// wrapping in release builds).
#[must_use]
pub fn add(left: i64, right: i64) -> i64 {
    left + right
}

/// Like [`add`], but reports overflow as an error instead.
pub fn try_add(left: i64, right: i64) -> Result<i64> {
    left.checked_add(right).ok_or_else(|| {
        debug!("rejecting overflowing sum: {left} + {right}");
        anyhow!("overflow: `{left} + {right}` does not fit in i64")
    })
}
