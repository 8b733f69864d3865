//! Accepted HTTP status codes.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::{
    DEFAULT_ACCEPTED_STATUS_CODES, MAX_STATUS_CODE, MIN_STATUS_CODE, STATUS_CODE_LIST_PATTERN,
};
use crate::error_handling::CheckError;

static STATUS_CODE_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(STATUS_CODE_LIST_PATTERN).expect("status code list pattern is a valid regex")
});

/// Ordered list of HTTP status codes considered good.
///
/// Never empty: the default is the 2xx success family and a parsed list
/// always holds at least one code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedStatusSet {
    codes: Vec<u16>,
}

impl AcceptedStatusSet {
    /// Whether `status` is one of the accepted codes.
    pub fn contains(&self, status: u16) -> bool {
        self.codes.contains(&status)
    }

    /// The accepted codes in the order they were given.
    pub fn codes(&self) -> &[u16] {
        &self.codes
    }
}

impl Default for AcceptedStatusSet {
    fn default() -> Self {
        Self {
            codes: DEFAULT_ACCEPTED_STATUS_CODES.to_vec(),
        }
    }
}

impl FromStr for AcceptedStatusSet {
    type Err = CheckError;

    /// Parses a comma-separated list such as `200,201,202`.
    ///
    /// No whitespace is allowed, and every element must be a status code between
    /// 100 and 999. A malformed list is an error, never an empty set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !STATUS_CODE_LIST.is_match(s) {
            return Err(CheckError::InvalidStatusCodes(s.to_string()));
        }

        let codes = s
            .split(',')
            .map(|part| {
                part.parse::<u16>()
                    .ok()
                    .filter(|code| (MIN_STATUS_CODE..=MAX_STATUS_CODE).contains(code))
                    .ok_or_else(|| CheckError::InvalidStatusCodes(s.to_string()))
            })
            .collect::<Result<Vec<u16>, CheckError>>()?;

        Ok(Self { codes })
    }
}

impl fmt::Display for AcceptedStatusSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .codes
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_is_2xx_family() {
        let set = AcceptedStatusSet::default();
        assert_eq!(
            set.codes(),
            &[200, 201, 202, 203, 204, 205, 206, 207, 208, 226]
        );
        assert!(set.contains(200));
        assert!(set.contains(226));
        assert!(!set.contains(209));
        assert!(!set.contains(301));
    }

    #[test]
    fn test_parse_single_code() {
        let set: AcceptedStatusSet = "200".parse().unwrap();
        assert_eq!(set.codes(), &[200]);
    }

    #[test]
    fn test_parse_preserves_order() {
        let set: AcceptedStatusSet = "302,200,404".parse().unwrap();
        assert_eq!(set.codes(), &[302, 200, 404]);
        assert_eq!(set.to_string(), "302,200,404");
    }

    #[test]
    fn test_parse_rejects_malformed_lists() {
        for bad in ["", "abc", "200,", ",200", "200,,201", "200, 201", "200;201", "-200"] {
            assert!(
                matches!(
                    bad.parse::<AcceptedStatusSet>(),
                    Err(CheckError::InvalidStatusCodes(_))
                ),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_codes() {
        assert!("99".parse::<AcceptedStatusSet>().is_err());
        assert!("1000".parse::<AcceptedStatusSet>().is_err());
        assert!("200,70000".parse::<AcceptedStatusSet>().is_err());
    }

    #[test]
    fn test_default_display_matches_flag_default() {
        assert_eq!(
            AcceptedStatusSet::default().to_string(),
            crate::config::DEFAULT_ACCEPTED_STATUS_CODES_ARG
        );
    }

    proptest! {
        #[test]
        fn test_contains_matches_membership(
            codes in prop::collection::vec(100u16..=999, 1..10),
            status in 100u16..=999
        ) {
            let list = codes.iter().map(u16::to_string).collect::<Vec<_>>().join(",");
            let set: AcceptedStatusSet = list.parse().unwrap();
            prop_assert_eq!(set.contains(status), codes.contains(&status));
        }
    }
}
