// Copyright 2026 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locale data for `en`.
//!
//! Generated by `almanac_data_gen locale create`; do not edit by hand. Put
//! overrides in the sibling `custom` module instead.

use crate::{Locale, PluralCategory, Text};
use super::custom;

/// Selects the cardinal plural category for a count.
#[allow(unused_parens, clippy::eq_op, clippy::nonminimal_bool, reason = "compiled from CLDR rule text")]
pub fn plural(n: f64) -> PluralCategory {
    if n.trunc() == 1.0 && 0.0 == 0.0 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

/// Selects the ordinal plural category for a count.
#[allow(unused_parens, clippy::eq_op, clippy::nonminimal_bool, reason = "compiled from CLDR rule text")]
pub fn ordinal(n: f64) -> PluralCategory {
    if n % 10.0 == 1.0 && n % 100.0 != 11.0 {
        PluralCategory::One
    } else if n % 10.0 == 2.0 && n % 100.0 != 12.0 {
        PluralCategory::Two
    } else if n % 10.0 == 3.0 && n % 100.0 != 13.0 {
        PluralCategory::Few
    } else {
        PluralCategory::Other
    }
}

/// The `en` locale record.
pub static LOCALE: Locale = Locale {
    plural,
    ordinal,
    translations: Text::Map(&[
        ("days", Text::Map(&[
            ("abbreviated", Text::Map(&[
                ("0", Text::Str("Mon")),
                ("1", Text::Str("Tue")),
                ("2", Text::Str("Wed")),
                ("3", Text::Str("Thu")),
                ("4", Text::Str("Fri")),
                ("5", Text::Str("Sat")),
                ("6", Text::Str("Sun")),
            ])),
            ("narrow", Text::Map(&[
                ("0", Text::Str("M")),
                ("1", Text::Str("T")),
                ("2", Text::Str("W")),
                ("3", Text::Str("T")),
                ("4", Text::Str("F")),
                ("5", Text::Str("S")),
                ("6", Text::Str("S")),
            ])),
            ("short", Text::Map(&[
                ("0", Text::Str("Mo")),
                ("1", Text::Str("Tu")),
                ("2", Text::Str("We")),
                ("3", Text::Str("Th")),
                ("4", Text::Str("Fr")),
                ("5", Text::Str("Sa")),
                ("6", Text::Str("Su")),
            ])),
            ("wide", Text::Map(&[
                ("0", Text::Str("Monday")),
                ("1", Text::Str("Tuesday")),
                ("2", Text::Str("Wednesday")),
                ("3", Text::Str("Thursday")),
                ("4", Text::Str("Friday")),
                ("5", Text::Str("Saturday")),
                ("6", Text::Str("Sunday")),
            ])),
        ])),
        ("months", Text::Map(&[
            ("abbreviated", Text::Map(&[
                ("1", Text::Str("Jan")),
                ("2", Text::Str("Feb")),
                ("3", Text::Str("Mar")),
                ("4", Text::Str("Apr")),
                ("5", Text::Str("May")),
                ("6", Text::Str("Jun")),
                ("7", Text::Str("Jul")),
                ("8", Text::Str("Aug")),
                ("9", Text::Str("Sep")),
                ("10", Text::Str("Oct")),
                ("11", Text::Str("Nov")),
                ("12", Text::Str("Dec")),
            ])),
            ("narrow", Text::Map(&[
                ("1", Text::Str("J")),
                ("2", Text::Str("F")),
                ("3", Text::Str("M")),
                ("4", Text::Str("A")),
                ("5", Text::Str("M")),
                ("6", Text::Str("J")),
                ("7", Text::Str("J")),
                ("8", Text::Str("A")),
                ("9", Text::Str("S")),
                ("10", Text::Str("O")),
                ("11", Text::Str("N")),
                ("12", Text::Str("D")),
            ])),
            ("wide", Text::Map(&[
                ("1", Text::Str("January")),
                ("2", Text::Str("February")),
                ("3", Text::Str("March")),
                ("4", Text::Str("April")),
                ("5", Text::Str("May")),
                ("6", Text::Str("June")),
                ("7", Text::Str("July")),
                ("8", Text::Str("August")),
                ("9", Text::Str("September")),
                ("10", Text::Str("October")),
                ("11", Text::Str("November")),
                ("12", Text::Str("December")),
            ])),
        ])),
        ("units", Text::Map(&[
            ("year", Text::Map(&[
                ("one", Text::Str("{0} year")),
                ("other", Text::Str("{0} years")),
            ])),
            ("month", Text::Map(&[
                ("one", Text::Str("{0} month")),
                ("other", Text::Str("{0} months")),
            ])),
            ("week", Text::Map(&[
                ("one", Text::Str("{0} week")),
                ("other", Text::Str("{0} weeks")),
            ])),
            ("day", Text::Map(&[
                ("one", Text::Str("{0} day")),
                ("other", Text::Str("{0} days")),
            ])),
            ("hour", Text::Map(&[
                ("one", Text::Str("{0} hour")),
                ("other", Text::Str("{0} hours")),
            ])),
            ("minute", Text::Map(&[
                ("one", Text::Str("{0} minute")),
                ("other", Text::Str("{0} minutes")),
            ])),
            ("second", Text::Map(&[
                ("one", Text::Str("{0} second")),
                ("other", Text::Str("{0} seconds")),
            ])),
            ("microsecond", Text::Map(&[
                ("one", Text::Str("{0} microsecond")),
                ("other", Text::Str("{0} microseconds")),
            ])),
        ])),
        ("relative", Text::Map(&[
            ("year", Text::Map(&[
                ("future", Text::Map(&[
                    ("one", Text::Str("in {0} year")),
                    ("other", Text::Str("in {0} years")),
                ])),
                ("past", Text::Map(&[
                    ("one", Text::Str("{0} year ago")),
                    ("other", Text::Str("{0} years ago")),
                ])),
            ])),
            ("month", Text::Map(&[
                ("future", Text::Map(&[
                    ("one", Text::Str("in {0} month")),
                    ("other", Text::Str("in {0} months")),
                ])),
                ("past", Text::Map(&[
                    ("one", Text::Str("{0} month ago")),
                    ("other", Text::Str("{0} months ago")),
                ])),
            ])),
            ("week", Text::Map(&[
                ("future", Text::Map(&[
                    ("one", Text::Str("in {0} week")),
                    ("other", Text::Str("in {0} weeks")),
                ])),
                ("past", Text::Map(&[
                    ("one", Text::Str("{0} week ago")),
                    ("other", Text::Str("{0} weeks ago")),
                ])),
            ])),
            ("day", Text::Map(&[
                ("future", Text::Map(&[
                    ("one", Text::Str("in {0} day")),
                    ("other", Text::Str("in {0} days")),
                ])),
                ("past", Text::Map(&[
                    ("one", Text::Str("{0} day ago")),
                    ("other", Text::Str("{0} days ago")),
                ])),
            ])),
            ("hour", Text::Map(&[
                ("future", Text::Map(&[
                    ("one", Text::Str("in {0} hour")),
                    ("other", Text::Str("in {0} hours")),
                ])),
                ("past", Text::Map(&[
                    ("one", Text::Str("{0} hour ago")),
                    ("other", Text::Str("{0} hours ago")),
                ])),
            ])),
            ("minute", Text::Map(&[
                ("future", Text::Map(&[
                    ("one", Text::Str("in {0} minute")),
                    ("other", Text::Str("in {0} minutes")),
                ])),
                ("past", Text::Map(&[
                    ("one", Text::Str("{0} minute ago")),
                    ("other", Text::Str("{0} minutes ago")),
                ])),
            ])),
            ("second", Text::Map(&[
                ("future", Text::Map(&[
                    ("one", Text::Str("in {0} second")),
                    ("other", Text::Str("in {0} seconds")),
                ])),
                ("past", Text::Map(&[
                    ("one", Text::Str("{0} second ago")),
                    ("other", Text::Str("{0} seconds ago")),
                ])),
            ])),
        ])),
        ("day_periods", Text::Map(&[
            ("midnight", Text::Str("midnight")),
            ("am", Text::Str("AM")),
            ("noon", Text::Str("noon")),
            ("pm", Text::Str("PM")),
            ("morning1", Text::Str("in the morning")),
            ("afternoon1", Text::Str("in the afternoon")),
            ("evening1", Text::Str("in the evening")),
            ("night1", Text::Str("at night")),
        ])),
        ("week_data", Text::Map(&[
            ("first_day", Text::Int(0)),
            ("min_days", Text::Int(1)),
            ("weekend_start", Text::Int(5)),
            ("weekend_end", Text::Int(6)),
        ])),
    ]),
    custom: &custom::TRANSLATIONS,
};
