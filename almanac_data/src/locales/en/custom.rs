// Copyright 2026 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hand-maintained overrides for the `en` locale.
//!
//! `almanac_data_gen` creates this file once and never rewrites it; edits here
//! survive regeneration and take precedence over the generated data.

use crate::Text;

/// Overrides layered over the generated translations.
pub static TRANSLATIONS: Text = Text::Map(&[]);
