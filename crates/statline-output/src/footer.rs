//! Free-text footer appended below the table.

use statline_model::Tournaments;

/// Attribution line of the footer.
pub const FOOTER_DATA_SOURCE: &str = "Original table obtained from whoscored.com";

/// Rounding note of the footer.
pub const FOOTER_ROUNDING: &str = "All float values are rounded off upto 2 decimal digits.";

/// Renders the footer, leading blank line included.
///
/// # Examples
///
/// ```
/// use statline_model::Tournaments;
/// use statline_output::render_footer;
///
/// let tournaments: Tournaments = ["Premier League", "FA Cup"].into_iter().collect();
/// assert!(render_footer(&tournaments).contains("List of all tournaments: FA Cup, Premier League"));
/// ```
pub fn render_footer(tournaments: &Tournaments) -> String {
    format!("\nList of all tournaments: {tournaments}\n{FOOTER_DATA_SOURCE}\n{FOOTER_ROUNDING}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_lists_sorted_tournaments() {
        let tournaments: Tournaments = ["UEFA Europa League", "Eredivisie", "KNVB Beker", "Eredivisie"]
            .into_iter()
            .collect();
        insta::assert_snapshot!(render_footer(&tournaments).trim(), @r"
        List of all tournaments: Eredivisie, KNVB Beker, UEFA Europa League
        Original table obtained from whoscored.com
        All float values are rounded off upto 2 decimal digits.
        ");
    }

    #[test]
    fn footer_starts_with_blank_line() {
        let footer = render_footer(&Tournaments::new());
        assert!(footer.starts_with("\nList of all tournaments: \n"));
        assert!(footer.ends_with(".\n"));
    }
}
