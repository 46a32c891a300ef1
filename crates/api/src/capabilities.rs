// Copyright (C) 2026 Shuttle Admin Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for authorization-aware UI gating.
//!
//! Capabilities tell the console which sections to show and whether their
//! edit controls are enabled. They are advisory only and do not replace
//! backend authorization checks.

use shuttle_admin_domain::{Principal, Section};

use crate::permissions::PermissionEvaluator;
use crate::request_response::{Access, SectionCapabilities};

/// Computes the capabilities for one section.
///
/// `can_view` is satisfied by either the view or the edit capability;
/// `can_edit` requires the edit capability.
#[must_use]
pub fn compute_section_capability(
    evaluator: &PermissionEvaluator<'_>,
    section: Section,
) -> SectionCapabilities {
    let view: &str = section.view_capability().slug();
    let edit: &str = section.edit_capability().slug();

    SectionCapabilities {
        section,
        can_view: Access::from_bool(evaluator.has_any_permission(&[view, edit])),
        can_edit: Access::from_bool(evaluator.has_permission(edit)),
    }
}

/// Computes capabilities for every console section.
///
/// With no principal every section is denied.
#[must_use]
pub fn compute_section_capabilities(principal: Option<&Principal>) -> Vec<SectionCapabilities> {
    let evaluator: PermissionEvaluator<'_> = PermissionEvaluator::new(principal);
    Section::ALL_SECTIONS
        .iter()
        .map(|section| compute_section_capability(&evaluator, *section))
        .collect()
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use shuttle_admin_domain::{PermissionSlug, RoleSlug};

    fn find(caps: &[SectionCapabilities], section: Section) -> SectionCapabilities {
        caps.iter()
            .copied()
            .find(|c| c.section == section)
            .expect("section missing")
    }

    #[test]
    fn test_no_principal_denies_every_section() {
        let caps = compute_section_capabilities(None);

        assert_eq!(caps.len(), Section::ALL_SECTIONS.len());
        for cap in caps {
            assert!(!cap.can_view.is_allowed());
            assert!(!cap.can_edit.is_allowed());
        }
    }

    #[test]
    fn test_super_admin_allows_every_section() {
        let root = Principal::new(
            "root",
            "Root",
            RoleSlug::super_admin(),
            Vec::<PermissionSlug>::new(),
        );

        for cap in compute_section_capabilities(Some(&root)) {
            assert!(cap.can_view.is_allowed());
            assert!(cap.can_edit.is_allowed());
        }
    }

    #[test]
    fn test_view_only_principal() {
        let agent = Principal::new(
            "agent",
            "Support Agent",
            RoleSlug::new("SUPPORT"),
            ["SUPPORT_TICKETS_VIEW", "BOOKINGS_VIEW"],
        );

        let caps = compute_section_capabilities(Some(&agent));

        let tickets = find(&caps, Section::SupportTickets);
        assert!(tickets.can_view.is_allowed());
        assert!(!tickets.can_edit.is_allowed());

        let bookings = find(&caps, Section::Bookings);
        assert!(bookings.can_view.is_allowed());
        assert!(!bookings.can_edit.is_allowed());

        let payments = find(&caps, Section::Payments);
        assert!(!payments.can_view.is_allowed());
        assert!(!payments.can_edit.is_allowed());
    }

    #[test]
    fn test_edit_implies_view() {
        let planner = Principal::new(
            "planner",
            "Route Planner",
            RoleSlug::new("ADMIN"),
            ["ROUTES_EDIT"],
        );

        let routes = find(&compute_section_capabilities(Some(&planner)), Section::Routes);
        assert!(routes.can_view.is_allowed());
        assert!(routes.can_edit.is_allowed());
    }
}
