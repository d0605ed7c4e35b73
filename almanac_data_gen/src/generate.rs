// Copyright 2026 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The generator commands: locale creation, bulk regeneration, and the
//! Windows time zone dump.
//!
//! Each locale produces a module triple under the locale root:
//!
//! - `mod.rs` — the package marker, created once and never rewritten;
//! - `locale.rs` — the generated data module, rewritten on every run;
//! - `custom.rs` — hand-maintained overrides, created once with an empty map
//!   and never rewritten, so edits survive regeneration.
//!
//! Writes are sequential and not transactional; a failed run is simply re-run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::Error;
use crate::cldr::{CldrSource, LocaleData};
use crate::locale_name::LocaleName;
use crate::plural::Rules;
use crate::render::Doc;

/// The units carried into each locale module, in output order.
pub const UNITS: [&str; 8] = [
    "year",
    "month",
    "week",
    "day",
    "hour",
    "minute",
    "second",
    "microsecond",
];

/// The relative-time date fields carried into each locale module.
pub const RELATIVE_FIELDS: [&str; 7] =
    ["year", "month", "week", "day", "hour", "minute", "second"];

const HEADER: &str =
    "// Copyright 2026 the Almanac Authors\n// SPDX-License-Identifier: Apache-2.0 OR MIT\n";

/// What a batch run did.
#[derive(Clone, Debug, Default)]
pub struct Summary {
    /// Module names of the locales written.
    pub written: Vec<String>,
    /// Identifiers that were skipped (malformed or unknown), as given.
    pub skipped: Vec<String>,
}

/// Generates or refreshes the named locales under `locale_root`.
///
/// Identifiers that do not parse or do not resolve are reported on stderr and
/// skipped; the batch continues. Everything else is fatal.
pub fn create_locales(
    source: &CldrSource,
    locale_root: &Path,
    names: &[String],
) -> Result<Summary, Error> {
    let mut summary = Summary::default();
    for raw in names {
        let name = match LocaleName::parse(raw) {
            Ok(name) => name,
            Err(err) => {
                eprintln!("almanac_data_gen: skipping: {err}");
                summary.skipped.push(raw.clone());
                continue;
            }
        };
        let Some(data) = source.resolve(&name)? else {
            eprintln!(
                "almanac_data_gen: locale '{name}' is not in the CLDR data, skipping"
            );
            summary.skipped.push(raw.clone());
            continue;
        };
        write_locale(locale_root, &name, &data)?;
        summary.written.push(name.module());
    }
    Ok(summary)
}

/// Regenerates every locale already present under `locale_root`.
///
/// A locale directory is any subdirectory containing a `locale.rs`. An empty
/// or missing root regenerates nothing and succeeds.
pub fn recreate_locales(source: &CldrSource, locale_root: &Path) -> Result<Summary, Error> {
    let mut names = Vec::new();
    if locale_root.is_dir() {
        let entries =
            fs::read_dir(locale_root).map_err(|source| Error::io(locale_root, source))?;
        for entry in entries {
            let entry = entry.map_err(|source| Error::io(locale_root, source))?;
            if entry.path().join("locale.rs").is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
    }
    names.sort();
    create_locales(source, locale_root, &names)
}

/// Rewrites the Windows → IANA mapping module under `out_dir`, returning the
/// path written.
pub fn dump_windows_timezones(source: &CldrSource, out_dir: &Path) -> Result<PathBuf, Error> {
    let table = source.windows_timezones()?;
    fs::create_dir_all(out_dir).map_err(|source| Error::io(out_dir, source))?;
    let path = out_dir.join("windows.rs");
    write_file(&path, &windows_module(&table))?;
    Ok(path)
}

fn write_locale(locale_root: &Path, name: &LocaleName, data: &LocaleData) -> Result<(), Error> {
    let dir = locale_root.join(name.module());
    fs::create_dir_all(&dir).map_err(|source| Error::io(&dir, source))?;
    write_if_absent(&dir.join("mod.rs"), &mod_template(name))?;
    write_file(&dir.join("locale.rs"), &locale_module(name, data)?)?;
    write_if_absent(&dir.join("custom.rs"), &custom_template(name))?;
    Ok(())
}

/// Renders a complete `locale.rs` for one locale.
pub fn locale_module(name: &LocaleName, data: &LocaleData) -> Result<String, Error> {
    let compile = |raw: &[(String, String)]| {
        Rules::parse(raw).map_err(|source| Error::Plural {
            locale: name.canonical(),
            source,
        })
    };
    let plural = compile(&data.plural_rules)?;
    let ordinal = compile(&data.ordinal_rules)?;
    let translations = reshape(data);

    let mut out = String::from(HEADER);
    out.push('\n');
    out.push_str(&format!(
        "//! Locale data for `{name}`.\n//!\n//! Generated by `almanac_data_gen locale create`; do not edit by hand. Put\n//! overrides in the sibling `custom` module instead.\n\n"
    ));
    out.push_str("use crate::{Locale, PluralCategory, Text};\nuse super::custom;\n\n");
    out.push_str(&plural.render_fn(
        "plural",
        "Selects the cardinal plural category for a count.",
    ));
    out.push('\n');
    out.push_str(&ordinal.render_fn(
        "ordinal",
        "Selects the ordinal plural category for a count.",
    ));
    out.push('\n');
    out.push_str(&format!(
        "/// The `{name}` locale record.\npub static LOCALE: Locale = Locale {{\n    plural,\n    ordinal,\n    translations: {},\n    custom: &custom::TRANSLATIONS,\n}};\n",
        translations.render(1)
    ));
    Ok(out)
}

/// Reshapes the raw record into the fixed output schema.
fn reshape(data: &LocaleData) -> Doc {
    let mut root = Doc::map();

    // Day names, entries sorted by day index within each style.
    let mut days = Doc::map();
    for (style, entries) in &data.days {
        let mut entries = entries.clone();
        entries.sort_by_key(|(index, _)| *index);
        let mut style_doc = Doc::map();
        for (index, dayname) in entries {
            style_doc.push(index.to_string(), Doc::str(dayname));
        }
        days.push(style.clone(), style_doc);
    }
    root.push("days", days);

    // Month names pass through unchanged.
    let mut months = Doc::map();
    for (style, entries) in &data.months {
        let mut style_doc = Doc::map();
        for (key, monthname) in entries {
            style_doc.push(key.clone(), Doc::str(monthname));
        }
        months.push(style.clone(), style_doc);
    }
    root.push("months", months);

    // The fixed unit set, with compound `per` phrasing dropped.
    let mut units = Doc::map();
    for unit in UNITS {
        let Some((_, entries)) = data.units.iter().find(|(name, _)| name.as_str() == unit) else {
            continue;
        };
        let mut unit_doc = Doc::map();
        for (count, patterntext) in entries {
            if count != "per" {
                unit_doc.push(count.clone(), Doc::str(patterntext));
            }
        }
        units.push(unit, unit_doc);
    }
    root.push("units", units);

    // Relative phrasing, restricted to the whitelisted fields.
    let mut relative = Doc::map();
    for field in RELATIVE_FIELDS {
        let Some((_, phrases)) = data.relative.iter().find(|(name, _)| name.as_str() == field) else {
            continue;
        };
        let mut field_doc = Doc::map();
        for (section, patterns) in [("future", &phrases.future), ("past", &phrases.past)] {
            let mut section_doc = Doc::map();
            for (count, patterntext) in patterns {
                section_doc.push(count.clone(), Doc::str(patterntext));
            }
            field_doc.push(section, section_doc);
        }
        relative.push(field, field_doc);
    }
    root.push("relative", relative);

    let mut day_periods = Doc::map();
    for (period, label) in &data.day_periods {
        day_periods.push(period.clone(), Doc::str(label));
    }
    root.push("day_periods", day_periods);

    let mut week_data = Doc::map();
    week_data.push("first_day", Doc::Int(i64::from(data.week_data.first_day)));
    week_data.push("min_days", Doc::Int(i64::from(data.week_data.min_days)));
    week_data.push(
        "weekend_start",
        Doc::Int(i64::from(data.week_data.weekend_start)),
    );
    week_data.push(
        "weekend_end",
        Doc::Int(i64::from(data.week_data.weekend_end)),
    );
    root.push("week_data", week_data);

    root
}

fn mod_template(name: &LocaleName) -> String {
    format!("{HEADER}\n//! The `{name}` locale.\n\npub mod custom;\npub mod locale;\n")
}

fn custom_template(name: &LocaleName) -> String {
    format!(
        "{HEADER}\n//! Hand-maintained overrides for the `{name}` locale.\n//!\n//! `almanac_data_gen` creates this file once and never rewrites it; edits here\n//! survive regeneration and take precedence over the generated data.\n\nuse crate::Text;\n\n/// Overrides layered over the generated translations.\npub static TRANSLATIONS: Text = Text::Map(&[]);\n"
    )
}

fn windows_module(table: &[(String, String)]) -> String {
    let mut out = String::from(HEADER);
    out.push_str(
        "\n//! Windows time zone registry names mapped to IANA identifiers.\n//!\n//! Generated by `almanac_data_gen windows dump-timezones`; do not edit by hand.\n\n/// Windows registry time zone names and the IANA zone each denotes, sorted by\n/// registry name.\npub static WINDOWS_TIMEZONES: &[(&str, &str)] = &[\n",
    );
    for (windows_name, iana) in table {
        out.push_str(&format!("    ({windows_name:?}, {iana:?}),\n"));
    }
    out.push_str("];\n");
    out
}

fn write_file(path: &Path, content: &str) -> Result<(), Error> {
    fs::write(path, content).map_err(|source| Error::io(path, source))
}

/// Create-once semantics for the marker and customization files.
fn write_if_absent(path: &Path, content: &str) -> Result<bool, Error> {
    if path.exists() {
        return Ok(false);
    }
    write_file(path, content)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::{LocaleData, LocaleName, locale_module, reshape};
    use crate::cldr::{RelativeField, WeekData};
    use crate::render::Doc;

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    fn sample_data() -> LocaleData {
        LocaleData {
            plural_rules: pairs(&[("one", "n = 1 @integer 1")]),
            ordinal_rules: Vec::new(),
            days: vec![(
                "wide".to_owned(),
                // Deliberately unsorted, as CLDR lists sun first.
                vec![
                    (6, "Sunday".to_owned()),
                    (0, "Monday".to_owned()),
                    (1, "Tuesday".to_owned()),
                ],
            )],
            months: vec![(
                "abbreviated".to_owned(),
                pairs(&[("1", "Jan"), ("2", "Feb"), ("12", "Dec")]),
            )],
            units: vec![
                (
                    "year".to_owned(),
                    pairs(&[
                        ("one", "{0} year"),
                        ("other", "{0} years"),
                        ("per", "{0} per year"),
                    ]),
                ),
                ("century".to_owned(), pairs(&[("other", "{0} centuries")])),
                (
                    "second".to_owned(),
                    pairs(&[("one", "{0} second"), ("other", "{0} seconds")]),
                ),
            ],
            relative: vec![
                (
                    "year".to_owned(),
                    RelativeField {
                        future: pairs(&[("one", "in {0} year"), ("other", "in {0} years")]),
                        past: pairs(&[("one", "{0} year ago"), ("other", "{0} years ago")]),
                    },
                ),
                (
                    "quarter".to_owned(),
                    RelativeField {
                        future: pairs(&[("other", "in {0} quarters")]),
                        past: pairs(&[("other", "{0} quarters ago")]),
                    },
                ),
            ],
            day_periods: pairs(&[("am", "AM"), ("pm", "PM")]),
            week_data: WeekData {
                first_day: 0,
                min_days: 1,
                weekend_start: 5,
                weekend_end: 6,
            },
        }
    }

    #[test]
    fn reshape_sorts_days_and_keeps_month_order() {
        let doc = reshape(&sample_data());
        let Doc::Map(root) = &doc else { unreachable!() };
        let keys: Vec<&str> = root.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            ["days", "months", "units", "relative", "day_periods", "week_data"]
        );

        let Doc::Map(days) = &root[0].1 else { unreachable!() };
        let Doc::Map(wide) = &days[0].1 else { unreachable!() };
        let day_keys: Vec<&str> = wide.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(day_keys, ["0", "1", "6"]);

        let Doc::Map(months) = &root[1].1 else { unreachable!() };
        let Doc::Map(abbreviated) = &months[0].1 else { unreachable!() };
        let month_keys: Vec<&str> = abbreviated.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(month_keys, ["1", "2", "12"]);
    }

    #[test]
    fn reshape_drops_per_and_unlisted_units() {
        let doc = reshape(&sample_data());
        let units = doc.render(0);
        assert!(units.contains("\"year\""));
        assert!(units.contains("\"{0} years\""));
        assert!(!units.contains("per year"));
        assert!(!units.contains("century"));
    }

    #[test]
    fn reshape_filters_relative_fields_to_the_whitelist() {
        let doc = reshape(&sample_data());
        let rendered = doc.render(0);
        assert!(rendered.contains("in {0} year"));
        assert!(!rendered.contains("quarter"));
    }

    #[test]
    fn locale_module_has_the_expected_skeleton() {
        let name = LocaleName::parse("en").unwrap();
        let module = locale_module(&name, &sample_data()).unwrap();
        assert!(module.starts_with("// Copyright"));
        assert!(module.contains("pub fn plural(n: f64) -> PluralCategory {"));
        assert!(module.contains("pub fn ordinal(_n: f64) -> PluralCategory {"));
        assert!(module.contains("pub static LOCALE: Locale = Locale {"));
        assert!(module.contains("    custom: &custom::TRANSLATIONS,"));
        assert!(module.ends_with("};\n"));
    }
}
