// THEORY:
// The exercises are console programs first: the formatted diagnostic text they
// print is their primary output, so it is built here as plain string
// producers instead of being scattered through the binaries as ad-hoc
// `println!` calls. That keeps the layout (banner width, bullet indent,
// property-table alignment) consistent across all seven exercises and makes
// it testable.

use std::fmt::Display;

/// Width of the `=` rules that frame every banner and section header.
pub const BANNER_WIDTH: usize = 60;

/// A full-width `=` rule.
pub fn rule() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// A full-width `-` rule, used under table headers.
pub fn thin_rule() -> String {
    "-".repeat(BANNER_WIDTH)
}

/// A title framed by two `=` rules.
pub fn banner(title: &str) -> String {
    format!("{}\n{}\n{}", rule(), title, rule())
}

/// An indented bullet line: `   • label: value`.
pub fn bullet(label: &str, value: impl Display) -> String {
    format!("   \u{2022} {label}: {value}")
}

/// An aligned property-table line: `   NAME                     = value`.
pub fn field(name: &str, value: impl Display) -> String {
    format!("   {name:<30} = {value}")
}

/// A success line.
pub fn check(msg: impl Display) -> String {
    format!("   \u{2713} {msg}")
}

/// A failure line.
pub fn fail(msg: impl Display) -> String {
    format!("   \u{2717} {msg}")
}

/// A warning line for recoverable conditions (missing asset, skipped codec).
pub fn warn(msg: impl Display) -> String {
    format!("   ! {msg}")
}

/// Progress line for long copies: `   Progress: 30/120 (25.0%)`.
pub fn progress(done: u64, total: u64) -> String {
    let pct = if total > 0 {
        done as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    format!("   Progress: {done}/{total} ({pct:.1}%)")
}

/// Pretty-prints a byte count the way the exercises report file sizes:
/// kilobytes below one megabyte, megabytes above.
pub fn human_size(bytes: u64) -> String {
    const MB: f64 = 1024.0 * 1024.0;
    let b = bytes as f64;
    if b < MB {
        format!("{:.2} KB", b / 1024.0)
    } else {
        format!("{:.2} MB", b / MB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_is_three_framed_lines() {
        let b = banner("EXERCISE 1");
        let lines: Vec<&str> = b.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), BANNER_WIDTH);
        assert_eq!(lines[2].len(), BANNER_WIDTH);
        assert_eq!(lines[1], "EXERCISE 1");
    }

    #[test]
    fn field_lines_align() {
        let a = field("CAP_PROP_FPS", 25.0);
        let b = field("CAP_PROP_FRAME_COUNT", 300);
        assert_eq!(a.find('=').unwrap(), b.find('=').unwrap());
    }

    #[test]
    fn progress_percentages() {
        assert_eq!(progress(30, 120), "   Progress: 30/120 (25.0%)");
        assert_eq!(progress(0, 0), "   Progress: 0/0 (0.0%)");
    }

    #[test]
    fn size_switches_units_at_one_megabyte() {
        assert_eq!(human_size(512), "0.50 KB");
        assert_eq!(human_size(1024 * 1024 - 1), "1024.00 KB");
        assert_eq!(human_size(3 * 1024 * 1024), "3.00 MB");
    }
}
