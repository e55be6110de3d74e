//! Report formatting utilities for terminal output

/// Format a percentage, dropping trailing zeros
///
/// `10.0` becomes `10%`, `33.333` stays `33.333%`.
pub fn format_percentage(pct: f64) -> String {
    let formatted = format!("{:.3}", pct);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", trimmed)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(10.0), "10%");
        assert_eq!(format_percentage(12.5), "12.5%");
        assert_eq!(format_percentage(33.333), "33.333%");
        assert_eq!(format_percentage(0.0), "0%");
        assert_eq!(format_percentage(100.0), "100%");
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator(3), "───");
    }
}
