#[cfg(test)]
mod tests {
    use crate::error::CalendarError;
    use crate::parsing::Matchup;

    #[test]
    fn test_parse_plain_matchup() {
        let matchup = Matchup::parse("Royals at Yankees").unwrap();
        assert_eq!(matchup.away_team, "Royals");
        assert_eq!(matchup.home_team, "Yankees");
    }

    #[test]
    fn test_parse_truncates_trailing_detail() {
        let matchup = Matchup::parse("Royals at Yankees - Game 1").unwrap();
        assert_eq!(matchup.away_team, "Royals");
        assert_eq!(matchup.home_team, "Yankees");
    }

    #[test]
    fn test_parse_keeps_first_segment_only() {
        // Only the first " - " segment is the matchup; later separators in
        // the detail must not leak back in.
        let matchup = Matchup::parse("Royals at Yankees - Opening Day - Gates 5 PM").unwrap();
        assert_eq!(matchup.home_team, "Yankees");
    }

    #[test]
    fn test_parse_missing_separator_is_format_error() {
        let err = Matchup::parse("Royals vs Yankees").unwrap_err();
        match err {
            CalendarError::Format { subject } => assert_eq!(subject, "Royals vs Yankees"),
            other => panic!("expected Format error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_detail_does_not_rescue_missing_separator() {
        // The separator must occur in the matchup segment, not the detail.
        assert!(Matchup::parse("Royals vs Yankees - at home").is_err());
    }

    #[test]
    fn test_parse_team_names_with_spaces() {
        let matchup = Matchup::parse("Red Sox at Blue Jays").unwrap();
        assert_eq!(matchup.away_team, "Red Sox");
        assert_eq!(matchup.home_team, "Blue Jays");
    }
}
