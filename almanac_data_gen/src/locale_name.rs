// Copyright 2026 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locale identifier normalization.
//!
//! Callers hand the CLI loosely cased identifiers with `-` or `_` separators
//! (`pt-br`, `PT_BR`, `zh-hant`). This module normalizes them once and then
//! derives the two spellings the generator needs: the hyphenated,
//! conventionally cased CLDR tag (`pt-BR`) used to look data up, and the
//! lowercase module name (`pt_br`) used for the output directory.

use core::fmt;
use core::str::FromStr;

/// A normalized `language[_Script][_REGION]` locale identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocaleName {
    language: String,
    script: Option<String>,
    region: Option<String>,
}

impl LocaleName {
    /// Parses and normalizes a locale identifier.
    pub fn parse(s: &str) -> Result<Self, InvalidLocale> {
        s.parse()
    }

    /// The canonical identifier (`pt_BR`, `zh_Hant`), with `_` separators.
    pub fn canonical(&self) -> String {
        let mut out = self.language.clone();
        if let Some(script) = &self.script {
            out.push('_');
            out.push_str(script);
        }
        if let Some(region) = &self.region {
            out.push('_');
            out.push_str(region);
        }
        out
    }

    /// The CLDR directory name for this locale (`pt-BR`, `zh-Hant`).
    pub fn cldr_tag(&self) -> String {
        self.canonical().replace('_', "-")
    }

    /// The Rust module name for this locale (`pt_br`, `zh_hant`).
    pub fn module(&self) -> String {
        self.canonical().to_ascii_lowercase()
    }

    /// The primary language subtag (`pt`).
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The region subtag, if present (`BR`).
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl fmt::Display for LocaleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl FromStr for LocaleName {
    type Err = InvalidLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut subtags = s.split(['-', '_']);
        let language = subtags.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(InvalidLocale::new(s));
        }
        let language = language.to_ascii_lowercase();

        let mut script = None;
        let mut region = None;
        for subtag in subtags {
            let is_script = subtag.len() == 4 && subtag.bytes().all(|b| b.is_ascii_alphabetic());
            let is_region = (subtag.len() == 2 && subtag.bytes().all(|b| b.is_ascii_alphabetic()))
                || (subtag.len() == 3 && subtag.bytes().all(|b| b.is_ascii_digit()));
            if is_script && script.is_none() && region.is_none() {
                let mut tag = subtag.to_ascii_lowercase();
                tag[..1].make_ascii_uppercase();
                script = Some(tag);
            } else if is_region && region.is_none() {
                region = Some(subtag.to_ascii_uppercase());
            } else {
                return Err(InvalidLocale::new(s));
            }
        }

        Ok(Self {
            language,
            script,
            region,
        })
    }
}

/// The identifier was not a well-formed `language[-Script][-REGION]` tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidLocale {
    input: String,
}

impl InvalidLocale {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }
}

impl fmt::Display for InvalidLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid locale identifier", self.input)
    }
}

impl std::error::Error for InvalidLocale {}

#[cfg(test)]
mod tests {
    use super::LocaleName;

    #[test]
    fn language_only() {
        let name = LocaleName::parse("EN").unwrap();
        assert_eq!(name.canonical(), "en");
        assert_eq!(name.cldr_tag(), "en");
        assert_eq!(name.module(), "en");
    }

    #[test]
    fn region_is_uppercased_and_separator_normalized() {
        for spelling in ["pt-br", "pt_BR", "PT-Br"] {
            let name = LocaleName::parse(spelling).unwrap();
            assert_eq!(name.canonical(), "pt_BR");
            assert_eq!(name.cldr_tag(), "pt-BR");
            assert_eq!(name.module(), "pt_br");
        }
    }

    #[test]
    fn script_is_titlecased() {
        let name = LocaleName::parse("zh-hant").unwrap();
        assert_eq!(name.cldr_tag(), "zh-Hant");
        assert_eq!(name.module(), "zh_hant");

        let name = LocaleName::parse("sr_CYRL_rs").unwrap();
        assert_eq!(name.cldr_tag(), "sr-Cyrl-RS");
        assert_eq!(name.module(), "sr_cyrl_rs");
    }

    #[test]
    fn numeric_region_is_accepted() {
        let name = LocaleName::parse("es-419").unwrap();
        assert_eq!(name.cldr_tag(), "es-419");
    }

    #[test]
    fn malformed_identifiers_are_rejected() {
        for bad in ["", "e", "en-", "en--US", "english", "en-USA2", "en-US-x-priv"] {
            assert!(LocaleName::parse(bad).is_err(), "accepted {bad:?}");
        }
    }
}
