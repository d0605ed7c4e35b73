// Copyright 2026 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The CLDR JSON data source.
//!
//! [`CldrSource`] reads a local checkout of the `cldr-json` distribution and
//! exposes, per locale, the pre-normalized record the generator reshapes:
//! rule text in source order, day names keyed 0–6 (0 = Monday), month names
//! keyed `"1"`–`"12"`, unit and relative-time phrasing with their CLDR key
//! prefixes stripped, wide day-period labels, and region-resolved week
//! metadata. Lookup is purely local file access; a locale is unknown iff its
//! `cldr-dates-full/main/<tag>/` directory is missing.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::Error;
use crate::locale_name::LocaleName;

const DAY_ABBREVS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// A local `cldr-json` checkout.
#[derive(Clone, Debug)]
pub struct CldrSource {
    root: PathBuf,
}

/// The raw per-locale record, before reshaping.
#[derive(Clone, Debug, Default)]
pub struct LocaleData {
    /// Cardinal `(category, rule text)` pairs in source order.
    pub plural_rules: Vec<(String, String)>,
    /// Ordinal `(category, rule text)` pairs in source order.
    pub ordinal_rules: Vec<(String, String)>,
    /// Day names per format style, keyed 0 (Monday) through 6 (Sunday), in
    /// source order within each style.
    pub days: Vec<(String, Vec<(u8, String)>)>,
    /// Month names per format style, keyed `"1"`–`"12"`.
    pub months: Vec<(String, Vec<(String, String)>)>,
    /// Long unit phrasing per unit; keys are plural categories plus `per`.
    pub units: Vec<(String, Vec<(String, String)>)>,
    /// Relative-time phrasing per date field.
    pub relative: Vec<(String, RelativeField)>,
    /// Wide day-period labels.
    pub day_periods: Vec<(String, String)>,
    /// Week metadata for the locale's region (world defaults otherwise).
    pub week_data: WeekData,
}

/// Future and past patterns for one relative date field, keyed by plural
/// category.
#[derive(Clone, Debug, Default)]
pub struct RelativeField {
    /// `in {0} …` patterns.
    pub future: Vec<(String, String)>,
    /// `{0} … ago` patterns.
    pub past: Vec<(String, String)>,
}

/// Week metadata, days numbered 0 (Monday) through 6 (Sunday).
#[derive(Copy, Clone, Debug, Default)]
pub struct WeekData {
    /// First day of the week.
    pub first_day: u8,
    /// Minimal days in the first week of a year.
    pub min_days: u8,
    /// First weekend day.
    pub weekend_start: u8,
    /// Last weekend day.
    pub weekend_end: u8,
}

impl CldrSource {
    /// Creates a source over a `cldr-json` checkout root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves a locale, returning `None` for identifiers the CLDR data does
    /// not cover.
    pub fn resolve(&self, name: &LocaleName) -> Result<Option<LocaleData>, Error> {
        let tag = name.cldr_tag();
        if !self
            .root
            .join("cldr-dates-full")
            .join("main")
            .join(&tag)
            .is_dir()
        {
            return Ok(None);
        }

        let gregorian = self.read_json(&["cldr-dates-full", "main", &tag, "ca-gregorian.json"])?;
        let calendar = gregorian.get(&["main", &tag, "dates", "calendars", "gregorian"])?;

        let mut data = LocaleData {
            days: gregorian.day_styles(gregorian.get_in(calendar, &["days", "format"])?)?,
            months: gregorian
                .string_map_styles(gregorian.get_in(calendar, &["months", "format"])?)?,
            day_periods: JsonFile::string_entries(
                gregorian.get_in(calendar, &["dayPeriods", "format", "wide"])?,
            ),
            ..LocaleData::default()
        };

        let fields = self.read_json(&["cldr-dates-full", "main", &tag, "dateFields.json"])?;
        data.relative = fields.relative_fields(&tag)?;

        let units = self.read_json(&["cldr-units-full", "main", &tag, "units.json"])?;
        data.units = units.long_units(&tag)?;

        data.plural_rules = self.rules("plurals.json", "plurals-type-cardinal", name)?;
        data.ordinal_rules = self.rules("ordinals.json", "plurals-type-ordinal", name)?;
        data.week_data = self.week_data(name.region())?;

        Ok(Some(data))
    }

    /// The global Windows → IANA table, sorted by Windows name. The first zone
    /// listed for a name wins.
    pub fn windows_timezones(&self) -> Result<Vec<(String, String)>, Error> {
        let file = self.read_json(&["cldr-core", "supplemental", "windowsZones.json"])?;
        let zones = file.get(&["supplemental", "windowsZones", "mapTimezones"])?;
        let Value::Array(zones) = zones else {
            return Err(Error::schema(&file.path, "mapTimezones is not an array"));
        };

        let mut table = BTreeMap::new();
        for entry in zones {
            let map_zone = entry
                .get("mapZone")
                .ok_or_else(|| Error::schema(&file.path, "map entry without mapZone"))?;
            let field = |key: &str| -> Result<&str, Error> {
                map_zone
                    .get(key)
                    .and_then(Value::as_str)
                    .ok_or_else(|| Error::schema(&file.path, format!("mapZone missing '{key}'")))
            };
            if field("_territory")? != "001" {
                continue;
            }
            let name = field("_other")?;
            let zone = field("_type")?
                .split_whitespace()
                .next()
                .ok_or_else(|| Error::schema(&file.path, "mapZone with empty '_type'"))?;
            table
                .entry(name.to_owned())
                .or_insert_with(|| zone.to_owned());
        }
        Ok(table.into_iter().collect())
    }

    fn rules(
        &self,
        file_name: &str,
        section: &str,
        name: &LocaleName,
    ) -> Result<Vec<(String, String)>, Error> {
        let file = self.read_json(&["cldr-core", "supplemental", file_name])?;
        let by_locale = file.get(&["supplemental", section])?;
        let rules = by_locale
            .get(name.cldr_tag())
            .or_else(|| by_locale.get(name.language()));
        let Some(Value::Object(rules)) = rules else {
            // Locales absent from the plural tables keep the implicit
            // catch-all only.
            return Ok(Vec::new());
        };
        Ok(rules
            .iter()
            .filter_map(|(key, value)| {
                let tag = key.strip_prefix("pluralRule-count-")?;
                Some((tag.to_owned(), value.as_str()?.to_owned()))
            })
            .collect())
    }

    fn week_data(&self, region: Option<&str>) -> Result<WeekData, Error> {
        let file = self.read_json(&["cldr-core", "supplemental", "weekData.json"])?;
        let week = file.get(&["supplemental", "weekData"])?;
        let lookup = |key: &str| -> Result<&str, Error> {
            let map = week
                .get(key)
                .ok_or_else(|| Error::schema(&file.path, format!("weekData missing '{key}'")))?;
            region
                .and_then(|r| map.get(r))
                .or_else(|| map.get("001"))
                .and_then(Value::as_str)
                .ok_or_else(|| Error::schema(&file.path, format!("no usable '{key}' entry")))
        };
        Ok(WeekData {
            first_day: day_index(lookup("firstDay")?)
                .ok_or_else(|| Error::schema(&file.path, "bad firstDay"))?,
            min_days: lookup("minDays")?
                .parse()
                .map_err(|_| Error::schema(&file.path, "bad minDays"))?,
            weekend_start: day_index(lookup("weekendStart")?)
                .ok_or_else(|| Error::schema(&file.path, "bad weekendStart"))?,
            weekend_end: day_index(lookup("weekendEnd")?)
                .ok_or_else(|| Error::schema(&file.path, "bad weekendEnd"))?,
        })
    }

    fn read_json(&self, parts: &[&str]) -> Result<JsonFile, Error> {
        let mut path = self.root.clone();
        for part in parts {
            path.push(part);
        }
        let text = fs::read_to_string(&path).map_err(|source| Error::io(&path, source))?;
        let value = serde_json::from_str(&text).map_err(|source| Error::Json {
            path: path.clone(),
            source,
        })?;
        Ok(JsonFile { path, value })
    }
}

/// Maps a CLDR day abbreviation to the 0 = Monday numbering.
fn day_index(abbrev: &str) -> Option<u8> {
    DAY_ABBREVS
        .iter()
        .position(|day| *day == abbrev)
        .and_then(|index| u8::try_from(index).ok())
}

/// One parsed CLDR file, kept together with its path for error reporting.
#[derive(Debug)]
struct JsonFile {
    path: PathBuf,
    value: Value,
}

impl JsonFile {
    fn get(&self, keys: &[&str]) -> Result<&Value, Error> {
        self.get_in(&self.value, keys)
    }

    fn get_in<'a>(&self, value: &'a Value, keys: &[&str]) -> Result<&'a Value, Error> {
        let mut current = value;
        for key in keys {
            current = current
                .get(key)
                .ok_or_else(|| Error::schema(&self.path, format!("missing key '{key}'")))?;
        }
        Ok(current)
    }

    /// Collects the string-valued entries of an object, in source order.
    fn string_entries(value: &Value) -> Vec<(String, String)> {
        let Value::Object(object) = value else {
            return Vec::new();
        };
        object
            .iter()
            .filter_map(|(key, value)| Some((key.clone(), value.as_str()?.to_owned())))
            .collect()
    }

    /// Day-name styles, abbreviations replaced by 0 = Monday indices.
    fn day_styles(&self, value: &Value) -> Result<Vec<(String, Vec<(u8, String)>)>, Error> {
        let Value::Object(styles) = value else {
            return Err(Error::schema(&self.path, "day styles are not an object"));
        };
        let mut out = Vec::new();
        for (style, names) in styles {
            let mut entries = Vec::new();
            for (abbrev, name) in Self::string_entries(names) {
                let index = day_index(&abbrev).ok_or_else(|| {
                    Error::schema(&self.path, format!("unknown day key '{abbrev}'"))
                })?;
                entries.push((index, name));
            }
            out.push((style.clone(), entries));
        }
        Ok(out)
    }

    fn string_map_styles(&self, value: &Value) -> Result<Vec<(String, Vec<(String, String)>)>, Error> {
        let Value::Object(styles) = value else {
            return Err(Error::schema(&self.path, "styles are not an object"));
        };
        Ok(styles
            .iter()
            .map(|(style, names)| (style.clone(), Self::string_entries(names)))
            .collect())
    }

    fn relative_fields(&self, tag: &str) -> Result<Vec<(String, RelativeField)>, Error> {
        let fields = self.get(&["main", tag, "dates", "fields"])?;
        let Value::Object(fields) = fields else {
            return Err(Error::schema(&self.path, "date fields are not an object"));
        };
        let mut out = Vec::new();
        for (field, value) in fields {
            let strip = |section: &str| {
                value.get(section).map_or_else(Vec::new, |patterns| {
                    Self::string_entries(patterns)
                        .into_iter()
                        .filter_map(|(key, pattern)| {
                            let count = key.strip_prefix("relativeTimePattern-count-")?;
                            Some((count.to_owned(), pattern))
                        })
                        .collect::<Vec<_>>()
                })
            };
            let relative = RelativeField {
                future: strip("relativeTime-type-future"),
                past: strip("relativeTime-type-past"),
            };
            if relative.future.is_empty() && relative.past.is_empty() {
                continue;
            }
            out.push((field.clone(), relative));
        }
        Ok(out)
    }

    fn long_units(&self, tag: &str) -> Result<Vec<(String, Vec<(String, String)>)>, Error> {
        let long = self.get(&["main", tag, "units", "long"])?;
        let Value::Object(long) = long else {
            return Err(Error::schema(&self.path, "long units are not an object"));
        };
        let mut out = Vec::new();
        for (key, value) in long {
            let Some(unit) = key.strip_prefix("duration-") else {
                continue;
            };
            let mut entries = Vec::new();
            for (pattern_key, pattern) in Self::string_entries(value) {
                if let Some(count) = pattern_key.strip_prefix("unitPattern-count-") {
                    entries.push((count.to_owned(), pattern));
                } else if pattern_key == "perUnitPattern" {
                    entries.push(("per".to_owned(), pattern));
                }
            }
            out.push((unit.to_owned(), entries));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::day_index;

    #[test]
    fn day_indices_start_at_monday() {
        assert_eq!(day_index("mon"), Some(0));
        assert_eq!(day_index("sun"), Some(6));
        assert_eq!(day_index("noday"), None);
    }
}
