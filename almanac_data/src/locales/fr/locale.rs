// Copyright 2026 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locale data for `fr`.
//!
//! Generated by `almanac_data_gen locale create`; do not edit by hand. Put
//! overrides in the sibling `custom` module instead.

use crate::{Locale, PluralCategory, Text};
use super::custom;

/// Selects the cardinal plural category for a count.
#[allow(unused_parens, clippy::eq_op, clippy::nonminimal_bool, reason = "compiled from CLDR rule text")]
pub fn plural(n: f64) -> PluralCategory {
    if (n.trunc() == 0.0 || n.trunc() == 1.0) {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

/// Selects the ordinal plural category for a count.
#[allow(unused_parens, clippy::eq_op, clippy::nonminimal_bool, reason = "compiled from CLDR rule text")]
pub fn ordinal(n: f64) -> PluralCategory {
    if n == 1.0 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

/// The `fr` locale record.
pub static LOCALE: Locale = Locale {
    plural,
    ordinal,
    translations: Text::Map(&[
        ("days", Text::Map(&[
            ("abbreviated", Text::Map(&[
                ("0", Text::Str("lun.")),
                ("1", Text::Str("mar.")),
                ("2", Text::Str("mer.")),
                ("3", Text::Str("jeu.")),
                ("4", Text::Str("ven.")),
                ("5", Text::Str("sam.")),
                ("6", Text::Str("dim.")),
            ])),
            ("narrow", Text::Map(&[
                ("0", Text::Str("L")),
                ("1", Text::Str("M")),
                ("2", Text::Str("M")),
                ("3", Text::Str("J")),
                ("4", Text::Str("V")),
                ("5", Text::Str("S")),
                ("6", Text::Str("D")),
            ])),
            ("short", Text::Map(&[
                ("0", Text::Str("lu")),
                ("1", Text::Str("ma")),
                ("2", Text::Str("me")),
                ("3", Text::Str("je")),
                ("4", Text::Str("ve")),
                ("5", Text::Str("sa")),
                ("6", Text::Str("di")),
            ])),
            ("wide", Text::Map(&[
                ("0", Text::Str("lundi")),
                ("1", Text::Str("mardi")),
                ("2", Text::Str("mercredi")),
                ("3", Text::Str("jeudi")),
                ("4", Text::Str("vendredi")),
                ("5", Text::Str("samedi")),
                ("6", Text::Str("dimanche")),
            ])),
        ])),
        ("months", Text::Map(&[
            ("abbreviated", Text::Map(&[
                ("1", Text::Str("janv.")),
                ("2", Text::Str("févr.")),
                ("3", Text::Str("mars")),
                ("4", Text::Str("avr.")),
                ("5", Text::Str("mai")),
                ("6", Text::Str("juin")),
                ("7", Text::Str("juil.")),
                ("8", Text::Str("août")),
                ("9", Text::Str("sept.")),
                ("10", Text::Str("oct.")),
                ("11", Text::Str("nov.")),
                ("12", Text::Str("déc.")),
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
                ("1", Text::Str("janvier")),
                ("2", Text::Str("février")),
                ("3", Text::Str("mars")),
                ("4", Text::Str("avril")),
                ("5", Text::Str("mai")),
                ("6", Text::Str("juin")),
                ("7", Text::Str("juillet")),
                ("8", Text::Str("août")),
                ("9", Text::Str("septembre")),
                ("10", Text::Str("octobre")),
                ("11", Text::Str("novembre")),
                ("12", Text::Str("décembre")),
            ])),
        ])),
        ("units", Text::Map(&[
            ("year", Text::Map(&[
                ("one", Text::Str("{0} an")),
                ("other", Text::Str("{0} ans")),
            ])),
            ("month", Text::Map(&[
                ("one", Text::Str("{0} mois")),
                ("other", Text::Str("{0} mois")),
            ])),
            ("week", Text::Map(&[
                ("one", Text::Str("{0} semaine")),
                ("other", Text::Str("{0} semaines")),
            ])),
            ("day", Text::Map(&[
                ("one", Text::Str("{0} jour")),
                ("other", Text::Str("{0} jours")),
            ])),
            ("hour", Text::Map(&[
                ("one", Text::Str("{0} heure")),
                ("other", Text::Str("{0} heures")),
            ])),
            ("minute", Text::Map(&[
                ("one", Text::Str("{0} minute")),
                ("other", Text::Str("{0} minutes")),
            ])),
            ("second", Text::Map(&[
                ("one", Text::Str("{0} seconde")),
                ("other", Text::Str("{0} secondes")),
            ])),
            ("microsecond", Text::Map(&[
                ("one", Text::Str("{0} microseconde")),
                ("other", Text::Str("{0} microsecondes")),
            ])),
        ])),
        ("relative", Text::Map(&[
            ("year", Text::Map(&[
                ("future", Text::Map(&[
                    ("one", Text::Str("dans {0} an")),
                    ("other", Text::Str("dans {0} ans")),
                ])),
                ("past", Text::Map(&[
                    ("one", Text::Str("il y a {0} an")),
                    ("other", Text::Str("il y a {0} ans")),
                ])),
            ])),
            ("month", Text::Map(&[
                ("future", Text::Map(&[
                    ("one", Text::Str("dans {0} mois")),
                    ("other", Text::Str("dans {0} mois")),
                ])),
                ("past", Text::Map(&[
                    ("one", Text::Str("il y a {0} mois")),
                    ("other", Text::Str("il y a {0} mois")),
                ])),
            ])),
            ("week", Text::Map(&[
                ("future", Text::Map(&[
                    ("one", Text::Str("dans {0} semaine")),
                    ("other", Text::Str("dans {0} semaines")),
                ])),
                ("past", Text::Map(&[
                    ("one", Text::Str("il y a {0} semaine")),
                    ("other", Text::Str("il y a {0} semaines")),
                ])),
            ])),
            ("day", Text::Map(&[
                ("future", Text::Map(&[
                    ("one", Text::Str("dans {0} jour")),
                    ("other", Text::Str("dans {0} jours")),
                ])),
                ("past", Text::Map(&[
                    ("one", Text::Str("il y a {0} jour")),
                    ("other", Text::Str("il y a {0} jours")),
                ])),
            ])),
            ("hour", Text::Map(&[
                ("future", Text::Map(&[
                    ("one", Text::Str("dans {0} heure")),
                    ("other", Text::Str("dans {0} heures")),
                ])),
                ("past", Text::Map(&[
                    ("one", Text::Str("il y a {0} heure")),
                    ("other", Text::Str("il y a {0} heures")),
                ])),
            ])),
            ("minute", Text::Map(&[
                ("future", Text::Map(&[
                    ("one", Text::Str("dans {0} minute")),
                    ("other", Text::Str("dans {0} minutes")),
                ])),
                ("past", Text::Map(&[
                    ("one", Text::Str("il y a {0} minute")),
                    ("other", Text::Str("il y a {0} minutes")),
                ])),
            ])),
            ("second", Text::Map(&[
                ("future", Text::Map(&[
                    ("one", Text::Str("dans {0} seconde")),
                    ("other", Text::Str("dans {0} secondes")),
                ])),
                ("past", Text::Map(&[
                    ("one", Text::Str("il y a {0} seconde")),
                    ("other", Text::Str("il y a {0} secondes")),
                ])),
            ])),
        ])),
        ("day_periods", Text::Map(&[
            ("midnight", Text::Str("minuit")),
            ("am", Text::Str("AM")),
            ("noon", Text::Str("midi")),
            ("pm", Text::Str("PM")),
            ("morning1", Text::Str("du matin")),
            ("afternoon1", Text::Str("de l'après-midi")),
            ("evening1", Text::Str("du soir")),
            ("night1", Text::Str("du matin")),
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
