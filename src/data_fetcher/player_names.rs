//! Player name formatting for award and scorer columns.
//!
//! The schedule API reports winning goalies and goal scorers as separate
//! localized `firstInitial` ("C.") and `lastName` fields.

/// Joins a first initial and a last name with a space, trimming the result.
///
/// Either part may be blank; a blank pair yields an empty string.
///
/// # Example
/// ```
/// use nhl_display_board::data_fetcher::player_names::display_name;
///
/// assert_eq!(display_name("M.", "Askarov"), "M. Askarov");
/// assert_eq!(display_name("", "Askarov"), "Askarov");
/// assert_eq!(display_name("", ""), "");
/// ```
pub fn display_name(first_initial: &str, last_name: &str) -> String {
    format!("{first_initial} {last_name}").trim().to_string()
}

/// Builds a full name from first and last name components.
pub fn full_name(first_name: &str, last_name: &str) -> String {
    display_name(first_name, last_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_joins_parts() {
        assert_eq!(display_name("W.", "Eklund"), "W. Eklund");
    }

    #[test]
    fn test_display_name_trims_missing_parts() {
        assert_eq!(display_name("W.", ""), "W.");
        assert_eq!(display_name(" ", " "), "");
    }

    #[test]
    fn test_full_name() {
        assert_eq!(full_name("Macklin", "Celebrini"), "Macklin Celebrini");
    }
}
