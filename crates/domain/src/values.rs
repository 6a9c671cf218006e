// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;
use std::collections::BTreeMap;

/// The raw, not-yet-validated values of an editable form.
///
/// Keys are the `'static` field names of the owning schema, so a value can
/// only be stored under a name the schema declares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormValues {
    values: BTreeMap<&'static str, String>,
}

impl FormValues {
    /// Creates an empty set of values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Stores the raw value for a field, replacing any previous value.
    pub fn set(&mut self, name: &'static str, value: String) {
        self.values.insert(name, value);
    }

    /// Returns the raw value for a field, if one was ever entered.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns the value for a field only when it is provided.
    ///
    /// An empty string counts as not provided.
    #[must_use]
    pub fn provided(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }
}
