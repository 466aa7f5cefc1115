//! Fixed chart palette.

/// Slice/bar fill colors, cycled in order.
pub const PALETTE: &[&str] = &[
    "#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6", "#ec4899", "#14b8a6", "#f97316",
    "#6366f1", "#84cc16",
];

/// Color for the `i`-th slice or bar.
pub fn color(i: usize) -> &'static str {
    PALETTE[i % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_past_the_end() {
        assert_eq!(color(0), PALETTE[0]);
        assert_eq!(color(PALETTE.len()), PALETTE[0]);
        assert_eq!(color(PALETTE.len() + 3), PALETTE[3]);
    }
}
