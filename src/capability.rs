// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Capability traits.
//!
//! Each trait is one narrow set of operations. Entities implement only the
//! capabilities they support, and the closed enums ([`Device`], [`Product`],
//! [`Character`]) expose the optional ones through `as_*` accessors instead of
//! runtime type checks.
//!
//! [`Device`]: crate::Device
//! [`Product`]: crate::Product
//! [`Character`]: crate::Character

use crate::base::AccountId;
use crate::error::{EntityError, TransactionError};
use rust_decimal::Decimal;

/// Anything with a display name.
pub trait Named {
    fn name(&self) -> &str;
}

/// Holds money that can be deposited and withdrawn.
///
/// Methods take `&self`: implementors serialize their own mutations.
pub trait Funds {
    fn id(&self) -> &AccountId;

    fn balance(&self) -> Decimal;

    /// Credits `amount`. Fails without mutating on any declined path.
    fn deposit(&self, amount: Decimal) -> Result<(), TransactionError>;

    /// Debits `amount`. Fails without mutating on any declined path.
    fn withdraw(&self, amount: Decimal) -> Result<(), TransactionError>;
}

/// Moves money to another holder of the same kind.
///
/// The destination is `Self` rather than any [`Funds`]: both sides are locked
/// together for the whole move, which needs the concrete type.
pub trait Transferable: Funds {
    fn transfer_to(&self, destination: &Self, amount: Decimal) -> Result<(), TransactionError>;
}

/// Performs work at the cost of energy.
pub trait Worker {
    /// Returns the energy left after working.
    fn work(&mut self) -> Result<u8, EntityError>;
}

pub trait Charger {
    /// Returns the energy level after charging.
    fn charge(&mut self) -> u8;
}

pub trait Switchable {
    fn on(&mut self);

    fn off(&mut self);

    fn is_on(&self) -> bool;
}

/// Exposes an adjustable `0..=100` level (brightness, speed).
pub trait LevelAdjustable {
    /// Sets the level, clamping out-of-range input. Returns the applied level.
    fn set_level(&mut self, level: i32) -> u8;

    fn level(&self) -> u8;
}

pub trait Priceable: Named {
    fn price(&self) -> Decimal;
}

pub trait Warranty {
    fn warranty_months(&self) -> u32;
}

pub trait Attacker: Named {
    /// Describes the attack performed.
    fn attack(&self) -> String;
}

pub trait Healer: Named {
    /// Describes the healing performed.
    fn heal(&self) -> String;
}

/// Validates a display name shared by the entity constructors.
pub(crate) fn validate_name(name: impl Into<String>) -> Result<String, EntityError> {
    let name = name.into();
    if name.trim().is_empty() {
        return Err(EntityError::InvalidName);
    }
    Ok(name)
}
