// Copyright (C) 2026 Shuttle Admin Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised at the catalog boundary.
///
/// Permission evaluation itself never fails; these errors only surface when a
/// caller asks for a typed view of a slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The slug is not part of the known capability catalog.
    UnknownCapability(String),
    /// The section name is not one of the admin console sections.
    UnknownSection(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCapability(slug) => write!(f, "Unknown capability slug: '{slug}'"),
            Self::UnknownSection(name) => write!(f, "Unknown section: '{name}'"),
        }
    }
}

impl std::error::Error for DomainError {}
