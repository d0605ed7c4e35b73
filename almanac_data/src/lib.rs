// Copyright 2026 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `almanac_data` packages the CLDR-derived locale data that Almanac's date/time
//! formatting needs at runtime: plural selection, calendar names, duration and
//! relative-time phrasing, day periods, week metadata, and the Windows → IANA
//! time zone table.
//!
//! The per-locale modules under [`locales`] and the table in [`timezones`] are
//! generated by the `almanac_data_gen` CLI and checked into the repository; the
//! types in this crate are the schema those modules are written against.

pub mod locales;
pub mod timezones;

use core::fmt;

/// A CLDR plural category.
///
/// Every locale's plural and ordinal selectors map a count onto one of these
/// six tags; `Other` is the universal catch-all and the only category a locale
/// is guaranteed to use.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    /// The `zero` category (e.g. Arabic, Latvian).
    Zero,
    /// The `one` category (singular in most languages that mark number).
    One,
    /// The `two` category (dual, e.g. Slovenian, Welsh).
    Two,
    /// The `few` category (paucal, e.g. Slavic 2–4).
    Few,
    /// The `many` category (e.g. Slavic genitive-plural counts).
    Many,
    /// The catch-all category.
    Other,
}

impl PluralCategory {
    /// Returns the CLDR tag for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A const-constructible tree of translated text.
///
/// Generated locale modules store their translations as one nested `Text::Map`
/// literal so that the generator can emit arbitrary CLDR structure without a
/// bespoke struct per section. Map entries preserve the order they were
/// generated in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Text {
    /// A leaf string.
    Str(&'static str),
    /// A leaf integer (week metadata).
    Int(i64),
    /// An ordered map of child nodes.
    Map(&'static [(&'static str, Text)]),
}

impl Text {
    /// Looks up a direct child of a `Map` node by key.
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Map(entries) => entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Walks a `/`-free key path through nested `Map` nodes.
    pub fn lookup(&self, path: &[&str]) -> Option<&Self> {
        path.iter().try_fold(self, |node, key| node.get(key))
    }

    /// Returns the string value of a `Str` leaf.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer value of an `Int` leaf.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }
}

/// A generated locale record.
///
/// Instances live in the generated `locale` module of each locale directory;
/// the sibling `custom` module carries hand-maintained overrides that
/// [`Locale::translation`] consults first.
#[derive(Copy, Clone, Debug)]
pub struct Locale {
    /// Cardinal plural selector compiled from the locale's CLDR rules.
    pub plural: fn(f64) -> PluralCategory,
    /// Ordinal plural selector compiled from the locale's CLDR rules.
    pub ordinal: fn(f64) -> PluralCategory,
    /// The generated translation tree (`days`, `months`, `units`, `relative`,
    /// `day_periods`, `week_data`).
    pub translations: Text,
    /// Hand-maintained overrides, layered over [`Self::translations`].
    pub custom: &'static Text,
}

impl Locale {
    /// Resolves a translation path, preferring custom overrides.
    pub fn translation(&self, path: &[&str]) -> Option<&Text> {
        self.custom
            .lookup(path)
            .or_else(|| self.translations.lookup(path))
    }
}

#[cfg(test)]
mod tests {
    use super::{PluralCategory, Text, locales};

    #[test]
    fn text_lookup_walks_nested_maps() {
        let en = locales::get("en").unwrap();
        let monday = en.translation(&["days", "wide", "0"]).unwrap();
        assert_eq!(monday.as_str(), Some("Monday"));
        assert_eq!(
            en.translation(&["week_data", "min_days"]).and_then(Text::as_int),
            Some(1)
        );
        assert!(en.translation(&["days", "wide", "7"]).is_none());
    }

    #[test]
    fn english_plural_is_one_only_for_exactly_one() {
        let en = locales::get("en").unwrap();
        assert_eq!((en.plural)(1.0), PluralCategory::One);
        assert_eq!((en.plural)(0.0), PluralCategory::Other);
        assert_eq!((en.plural)(2.0), PluralCategory::Other);
        assert_eq!((en.plural)(1.5), PluralCategory::Other);
    }

    #[test]
    fn english_ordinal_follows_teen_exceptions() {
        let en = locales::get("en").unwrap();
        assert_eq!((en.ordinal)(1.0), PluralCategory::One);
        assert_eq!((en.ordinal)(2.0), PluralCategory::Two);
        assert_eq!((en.ordinal)(3.0), PluralCategory::Few);
        assert_eq!((en.ordinal)(4.0), PluralCategory::Other);
        assert_eq!((en.ordinal)(11.0), PluralCategory::Other);
        assert_eq!((en.ordinal)(12.0), PluralCategory::Other);
        assert_eq!((en.ordinal)(13.0), PluralCategory::Other);
        assert_eq!((en.ordinal)(21.0), PluralCategory::One);
        assert_eq!((en.ordinal)(102.0), PluralCategory::Two);
    }

    #[test]
    fn french_plural_treats_zero_and_one_as_singular() {
        let fr = locales::get("fr").unwrap();
        assert_eq!((fr.plural)(0.0), PluralCategory::One);
        assert_eq!((fr.plural)(1.0), PluralCategory::One);
        assert_eq!((fr.plural)(1.5), PluralCategory::One);
        assert_eq!((fr.plural)(2.0), PluralCategory::Other);
    }

    #[test]
    fn unknown_locale_is_absent_from_registry() {
        assert!(locales::get("tlh").is_none());
    }

    #[test]
    fn units_do_not_carry_per_patterns() {
        for name in ["en", "fr"] {
            let locale = locales::get(name).unwrap();
            let units = locale.translations.get("units").unwrap();
            for unit in [
                "year", "month", "week", "day", "hour", "minute", "second", "microsecond",
            ] {
                let entry = units.get(unit).unwrap();
                assert!(entry.get("other").is_some(), "{name}/{unit} lacks `other`");
                assert!(entry.get("per").is_none(), "{name}/{unit} kept `per`");
            }
        }
    }

    #[test]
    fn relative_sections_use_only_whitelisted_fields() {
        let allowed = ["year", "month", "week", "day", "hour", "minute", "second"];
        for name in ["en", "fr"] {
            let locale = locales::get(name).unwrap();
            let Text::Map(relative) = locale.translations.get("relative").unwrap() else {
                panic!("relative section of {name} is not a map");
            };
            for (field, _) in *relative {
                assert!(allowed.contains(field), "{name} carries field {field}");
            }
        }
    }
}
