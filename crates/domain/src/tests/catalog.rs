// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::{CLASS_LEVELS, CLASS_OPTIONS, SEMINAR_OFFERINGS, SEMINAR_OPTIONS};

#[test]
fn test_every_scheduled_class_is_bookable() {
    for level in CLASS_LEVELS {
        for class in level.classes {
            assert!(
                CLASS_OPTIONS.iter().any(|option| option.value == class.slug),
                "class '{}' has no booking option",
                class.slug
            );
        }
    }
}

#[test]
fn test_class_options_match_schedule_size() {
    let scheduled: usize = CLASS_LEVELS.iter().map(|level| level.classes.len()).sum();
    assert_eq!(CLASS_OPTIONS.len(), scheduled);
}

#[test]
fn test_every_seminar_offering_is_selectable() {
    for offering in SEMINAR_OFFERINGS {
        assert!(
            SEMINAR_OPTIONS
                .iter()
                .any(|option| option.value == offering.slug),
            "offering '{}' has no inquiry option",
            offering.slug
        );
    }
}
