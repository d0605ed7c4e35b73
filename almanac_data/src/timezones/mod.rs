// Copyright 2026 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time zone name tables.

pub mod windows;

pub use windows::WINDOWS_TIMEZONES;

/// Resolves a Windows registry time zone name to its IANA identifier.
///
/// Returns `None` for names absent from the mapping table.
pub fn windows_to_iana(name: &str) -> Option<&'static str> {
    WINDOWS_TIMEZONES
        .binary_search_by_key(&name, |&(windows_name, _)| windows_name)
        .ok()
        .map(|index| WINDOWS_TIMEZONES[index].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(windows_to_iana("AUS Central Standard Time"), Some("Australia/Darwin"));
        assert_eq!(windows_to_iana("Eastern Standard Time"), Some("America/New_York"));
        assert_eq!(windows_to_iana("UTC"), Some("Etc/UTC"));
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(windows_to_iana("Made Up Standard Time"), None);
        assert_eq!(windows_to_iana(""), None);
    }

    #[test]
    fn table_is_sorted_and_free_of_duplicates() {
        for pair in WINDOWS_TIMEZONES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{:?} out of order", pair[1].0);
        }
    }
}
