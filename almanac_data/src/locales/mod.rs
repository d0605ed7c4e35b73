// Copyright 2026 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generated locale modules and the registry over them.
//!
//! Each submodule is one locale directory written by `almanac_data_gen locale
//! create`: a generated `locale` module (rewritten on every run) and a
//! hand-maintained `custom` module (written once, then left alone). Add a
//! `pub mod` line and a registry arm here when checking in a new locale.

pub mod en;
pub mod fr;

use crate::Locale;

/// Looks up a checked-in locale by its module name (`en`, `pt_br`, `zh_hant`).
pub fn get(name: &str) -> Option<&'static Locale> {
    match name {
        "en" => Some(&en::locale::LOCALE),
        "fr" => Some(&fr::locale::LOCALE),
        _ => None,
    }
}
