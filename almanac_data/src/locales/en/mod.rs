// Copyright 2026 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `en` locale.

pub mod custom;
pub mod locale;
