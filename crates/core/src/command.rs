// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A command represents visitor intent as data only.
///
/// Commands are the only way to change a form's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store a raw value typed into a field.
    UpdateField {
        /// The field name.
        name: String,
        /// The raw value, accepted as-is.
        value: String,
    },
    /// Re-check a single field, as when the visitor leaves it.
    ValidateField {
        /// The field name.
        name: String,
    },
    /// Validate every field and, if all pass, submit the request.
    Submit,
    /// Return to an empty, editable form.
    Reset,
}
