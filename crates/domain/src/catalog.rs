// Copyright (C) 2026 Shuttle Admin Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The known capability catalog of the admin console.
//!
//! The catalog gives call sites a typed name for the slugs the backend issues.
//! It is a registry at the boundary only: permission sets stay plain slug
//! sets, and slugs that are not in the catalog keep working as opaque
//! strings.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;
use crate::slug::PermissionSlug;

/// A catalogued capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Capability {
    UsersView,
    UsersEdit,
    DriversView,
    DriversEdit,
    BusesView,
    BusesEdit,
    RoutesView,
    RoutesEdit,
    BookingsView,
    BookingsEdit,
    PaymentsView,
    PaymentsEdit,
    WalletsView,
    WalletsEdit,
    CouponsView,
    CouponsEdit,
    NotificationsView,
    NotificationsEdit,
    SupportTicketsView,
    SupportTicketsEdit,
    /// Managing roles and their permission sets.
    RolesManage,
}

impl Capability {
    /// Every catalogued capability, in catalog order.
    pub const ALL_CAPABILITIES: [Self; 21] = [
        Self::UsersView,
        Self::UsersEdit,
        Self::DriversView,
        Self::DriversEdit,
        Self::BusesView,
        Self::BusesEdit,
        Self::RoutesView,
        Self::RoutesEdit,
        Self::BookingsView,
        Self::BookingsEdit,
        Self::PaymentsView,
        Self::PaymentsEdit,
        Self::WalletsView,
        Self::WalletsEdit,
        Self::CouponsView,
        Self::CouponsEdit,
        Self::NotificationsView,
        Self::NotificationsEdit,
        Self::SupportTicketsView,
        Self::SupportTicketsEdit,
        Self::RolesManage,
    ];

    /// Returns the wire slug for this capability.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::UsersView => "USERS_VIEW",
            Self::UsersEdit => "USERS_EDIT",
            Self::DriversView => "DRIVERS_VIEW",
            Self::DriversEdit => "DRIVERS_EDIT",
            Self::BusesView => "BUSES_VIEW",
            Self::BusesEdit => "BUSES_EDIT",
            Self::RoutesView => "ROUTES_VIEW",
            Self::RoutesEdit => "ROUTES_EDIT",
            Self::BookingsView => "BOOKINGS_VIEW",
            Self::BookingsEdit => "BOOKINGS_EDIT",
            Self::PaymentsView => "PAYMENTS_VIEW",
            Self::PaymentsEdit => "PAYMENTS_EDIT",
            Self::WalletsView => "WALLETS_VIEW",
            Self::WalletsEdit => "WALLETS_EDIT",
            Self::CouponsView => "COUPONS_VIEW",
            Self::CouponsEdit => "COUPONS_EDIT",
            Self::NotificationsView => "NOTIFICATIONS_VIEW",
            Self::NotificationsEdit => "NOTIFICATIONS_EDIT",
            Self::SupportTicketsView => "SUPPORT_TICKETS_VIEW",
            Self::SupportTicketsEdit => "SUPPORT_TICKETS_EDIT",
            Self::RolesManage => "ROLES_MANAGE",
        }
    }
}

impl FromStr for Capability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL_CAPABILITIES
            .iter()
            .copied()
            .find(|capability| capability.slug() == s)
            .ok_or_else(|| DomainError::UnknownCapability(s.to_string()))
    }
}

impl TryFrom<String> for Capability {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Capability> for String {
    fn from(value: Capability) -> Self {
        value.slug().to_string()
    }
}

impl From<Capability> for PermissionSlug {
    fn from(value: Capability) -> Self {
        Self::new(value.slug())
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// A top-level section of the admin console navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Users,
    Drivers,
    Buses,
    Routes,
    Bookings,
    Payments,
    Wallets,
    Coupons,
    Notifications,
    SupportTickets,
}

impl Section {
    /// Every section, in navigation order.
    pub const ALL_SECTIONS: [Self; 10] = [
        Self::Users,
        Self::Drivers,
        Self::Buses,
        Self::Routes,
        Self::Bookings,
        Self::Payments,
        Self::Wallets,
        Self::Coupons,
        Self::Notifications,
        Self::SupportTickets,
    ];

    /// Returns the section name as used in URLs and responses.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Drivers => "drivers",
            Self::Buses => "buses",
            Self::Routes => "routes",
            Self::Bookings => "bookings",
            Self::Payments => "payments",
            Self::Wallets => "wallets",
            Self::Coupons => "coupons",
            Self::Notifications => "notifications",
            Self::SupportTickets => "support_tickets",
        }
    }

    /// The capability required to open the section read-only.
    #[must_use]
    pub const fn view_capability(&self) -> Capability {
        match self {
            Self::Users => Capability::UsersView,
            Self::Drivers => Capability::DriversView,
            Self::Buses => Capability::BusesView,
            Self::Routes => Capability::RoutesView,
            Self::Bookings => Capability::BookingsView,
            Self::Payments => Capability::PaymentsView,
            Self::Wallets => Capability::WalletsView,
            Self::Coupons => Capability::CouponsView,
            Self::Notifications => Capability::NotificationsView,
            Self::SupportTickets => Capability::SupportTicketsView,
        }
    }

    /// The capability required to create, modify or delete records.
    #[must_use]
    pub const fn edit_capability(&self) -> Capability {
        match self {
            Self::Users => Capability::UsersEdit,
            Self::Drivers => Capability::DriversEdit,
            Self::Buses => Capability::BusesEdit,
            Self::Routes => Capability::RoutesEdit,
            Self::Bookings => Capability::BookingsEdit,
            Self::Payments => Capability::PaymentsEdit,
            Self::Wallets => Capability::WalletsEdit,
            Self::Coupons => Capability::CouponsEdit,
            Self::Notifications => Capability::NotificationsEdit,
            Self::SupportTickets => Capability::SupportTicketsEdit,
        }
    }
}

impl FromStr for Section {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL_SECTIONS
            .iter()
            .copied()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| DomainError::UnknownSection(s.to_string()))
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
