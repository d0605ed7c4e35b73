// Copyright 2026 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests of the generator commands over a small fixture CLDR tree.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;

use almanac_data_gen::cldr::CldrSource;
use almanac_data_gen::generate::{create_locales, dump_windows_timezones, recreate_locales};

struct Env {
    _dir: TempDir,
    source: CldrSource,
    locale_root: PathBuf,
    tz_root: PathBuf,
}

fn write_json(root: &Path, rel: &[&str], value: &Value) {
    let mut path = root.to_path_buf();
    for part in rel {
        path.push(part);
    }
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, value.to_string()).unwrap();
}

/// Lays out a miniature `cldr-json` checkout for the invented locale `xx`.
fn env() -> Env {
    let dir = TempDir::new().unwrap();
    let cldr = dir.path().join("cldr-json");

    write_json(
        &cldr,
        &["cldr-core", "supplemental", "plurals.json"],
        &json!({"supplemental": {"plurals-type-cardinal": {"xx": {
            "pluralRule-count-one": "n = 1 @integer 1",
            "pluralRule-count-few": "n = 2..4 @integer 2~4",
            "pluralRule-count-other": " @integer 0, 5~19",
        }}}}),
    );
    write_json(
        &cldr,
        &["cldr-core", "supplemental", "ordinals.json"],
        &json!({"supplemental": {"plurals-type-ordinal": {"xx": {
            "pluralRule-count-one": "n = 1",
        }}}}),
    );
    write_json(
        &cldr,
        &["cldr-core", "supplemental", "weekData.json"],
        &json!({"supplemental": {"weekData": {
            "firstDay": {"001": "mon"},
            "minDays": {"001": "1"},
            "weekendStart": {"001": "sat"},
            "weekendEnd": {"001": "sun"},
        }}}),
    );
    write_json(
        &cldr,
        &["cldr-core", "supplemental", "windowsZones.json"],
        &json!({"supplemental": {"windowsZones": {"mapTimezones": [
            {"mapZone": {"_other": "Pacific Standard Time", "_territory": "001", "_type": "America/Los_Angeles"}},
            {"mapZone": {"_other": "AUS Central Standard Time", "_territory": "001", "_type": "Australia/Darwin"}},
            {"mapZone": {"_other": "Pacific Standard Time", "_territory": "CA", "_type": "America/Vancouver"}},
        ]}}}),
    );
    write_json(
        &cldr,
        &["cldr-dates-full", "main", "xx", "ca-gregorian.json"],
        &json!({"main": {"xx": {"dates": {"calendars": {"gregorian": {
            "months": {"format": {
                "abbreviated": {"1": "Jan", "2": "Feb"},
                "wide": {"1": "January", "2": "February"},
            }},
            "days": {"format": {
                "wide": {"sun": "Sunday", "mon": "Monday", "sat": "Saturday"},
            }},
            "dayPeriods": {"format": {"wide": {"am": "AM", "pm": "PM"}}},
        }}}}}}),
    );
    write_json(
        &cldr,
        &["cldr-dates-full", "main", "xx", "dateFields.json"],
        &json!({"main": {"xx": {"dates": {"fields": {
            "year": {
                "relativeTime-type-future": {
                    "relativeTimePattern-count-one": "in {0} year",
                    "relativeTimePattern-count-other": "in {0} years",
                },
                "relativeTime-type-past": {
                    "relativeTimePattern-count-other": "{0} years ago",
                },
            },
            "quarter": {
                "relativeTime-type-future": {
                    "relativeTimePattern-count-other": "in {0} quarters",
                },
            },
            "second": {
                "relativeTime-type-future": {
                    "relativeTimePattern-count-other": "in {0} seconds",
                },
                "relativeTime-type-past": {
                    "relativeTimePattern-count-other": "{0} seconds ago",
                },
            },
        }}}}}),
    );
    write_json(
        &cldr,
        &["cldr-units-full", "main", "xx", "units.json"],
        &json!({"main": {"xx": {"units": {"long": {
            "duration-year": {
                "displayName": "years",
                "unitPattern-count-one": "{0} year",
                "unitPattern-count-other": "{0} years",
                "perUnitPattern": "{0} per year",
            },
            "duration-day": {
                "unitPattern-count-one": "{0} day",
                "unitPattern-count-other": "{0} days",
            },
            "duration-second": {
                "unitPattern-count-one": "{0} second",
                "unitPattern-count-other": "{0} seconds",
            },
            "duration-microsecond": {
                "unitPattern-count-other": "{0} microseconds",
            },
            "duration-century": {
                "unitPattern-count-other": "{0} centuries",
            },
        }}}}}),
    );

    let source = CldrSource::new(&cldr);
    let locale_root = dir.path().join("locales");
    let tz_root = dir.path().join("timezones");
    Env {
        _dir: dir,
        source,
        locale_root,
        tz_root,
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn create_writes_the_module_triple() {
    let env = env();
    let summary =
        create_locales(&env.source, &env.locale_root, &["xx".to_owned()]).unwrap();
    assert_eq!(summary.written, ["xx"]);
    assert!(summary.skipped.is_empty());

    let dir = env.locale_root.join("xx");
    let marker = read(&dir.join("mod.rs"));
    assert!(marker.contains("pub mod custom;"));
    assert!(marker.contains("pub mod locale;"));

    let custom = read(&dir.join("custom.rs"));
    assert!(custom.contains("pub static TRANSLATIONS: Text = Text::Map(&[]);"));

    let module = read(&dir.join("locale.rs"));
    assert!(module.contains("pub fn plural(n: f64) -> PluralCategory {"));
    assert!(module.contains("if n == 1.0 {"));
    // The range rule compiles with the integral-count guard.
    assert!(module.contains("(n == (n).trunc() && ((2.0..=4.0).contains(&(n))))"));
    // Day entries are sorted by the 0 = Monday index.
    let monday = module.find("(\"0\", Text::Str(\"Monday\"))").unwrap();
    let saturday = module.find("(\"5\", Text::Str(\"Saturday\"))").unwrap();
    let sunday = module.find("(\"6\", Text::Str(\"Sunday\"))").unwrap();
    assert!(monday < saturday && saturday < sunday);
    // Units: fixed set, `per` phrasing dropped.
    assert!(module.contains("(\"microsecond\", Text::Map(&["));
    assert!(!module.contains("per year"));
    assert!(!module.contains("century"));
    // Relative: whitelist only.
    assert!(module.contains("in {0} year"));
    assert!(!module.contains("quarter"));
    assert!(module.contains("(\"first_day\", Text::Int(0))"));
}

#[test]
fn recreate_reproduces_identical_modules() {
    let env = env();
    create_locales(&env.source, &env.locale_root, &["xx".to_owned()]).unwrap();
    let before = read(&env.locale_root.join("xx").join("locale.rs"));

    let summary = recreate_locales(&env.source, &env.locale_root).unwrap();
    assert_eq!(summary.written, ["xx"]);
    let after = read(&env.locale_root.join("xx").join("locale.rs"));
    assert_eq!(before, after);
}

#[test]
fn user_customizations_survive_regeneration() {
    let env = env();
    create_locales(&env.source, &env.locale_root, &["xx".to_owned()]).unwrap();

    let dir = env.locale_root.join("xx");
    let marker_before = read(&dir.join("mod.rs"));
    let edited = "// my edits\npub static TRANSLATIONS: Text = Text::Map(&[]);\n";
    fs::write(dir.join("custom.rs"), edited).unwrap();

    create_locales(&env.source, &env.locale_root, &["xx".to_owned()]).unwrap();
    recreate_locales(&env.source, &env.locale_root).unwrap();

    assert_eq!(read(&dir.join("custom.rs")), edited);
    assert_eq!(read(&dir.join("mod.rs")), marker_before);
}

#[test]
fn bad_locales_are_skipped_without_aborting_the_batch() {
    let env = env();
    let names = vec![
        "xx".to_owned(),
        "zz".to_owned(),
        "not a locale!!".to_owned(),
    ];
    let summary = create_locales(&env.source, &env.locale_root, &names).unwrap();
    assert_eq!(summary.written, ["xx"]);
    assert_eq!(summary.skipped, ["zz", "not a locale!!"]);
    assert!(!env.locale_root.join("zz").exists());
}

#[test]
fn recreate_over_an_empty_root_does_nothing() {
    let env = env();
    let summary = recreate_locales(&env.source, &env.locale_root).unwrap();
    assert!(summary.written.is_empty());
    assert!(summary.skipped.is_empty());
    assert!(!env.locale_root.exists());

    fs::create_dir_all(&env.locale_root).unwrap();
    let summary = recreate_locales(&env.source, &env.locale_root).unwrap();
    assert!(summary.written.is_empty());
    assert_eq!(fs::read_dir(&env.locale_root).unwrap().count(), 0);
}

#[test]
fn windows_dump_is_sorted_and_idempotent() {
    let env = env();
    let path = dump_windows_timezones(&env.source, &env.tz_root).unwrap();
    let first = read(&path);

    let aus = first.find("AUS Central Standard Time").unwrap();
    let pacific = first.find("Pacific Standard Time").unwrap();
    assert!(aus < pacific);
    assert!(first.contains("(\"Pacific Standard Time\", \"America/Los_Angeles\"),"));
    // Region-specific overrides are not part of the world table.
    assert!(!first.contains("Vancouver"));

    let path = dump_windows_timezones(&env.source, &env.tz_root).unwrap();
    assert_eq!(read(&path), first);
}
