// Copyright (C) 2026 Shuttle Admin Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::UnknownCapability(String::from("FLEET_VIEW"));
    assert_eq!(format!("{err}"), "Unknown capability slug: 'FLEET_VIEW'");

    let err: DomainError = DomainError::UnknownSection(String::from("fleet"));
    assert_eq!(format!("{err}"), "Unknown section: 'fleet'");
}
