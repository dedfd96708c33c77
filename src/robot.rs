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

//! Factory robots that work and recharge.

use crate::capability::{Charger, Named, Worker, validate_name};
use crate::error::EntityError;
use tracing::debug;

/// A robot with an energy level in `0..=100`.
///
/// Working costs [`Robot::WORK_COST`] energy and charging restores
/// [`Robot::CHARGE_AMOUNT`], both saturating at the bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robot {
    name: String,
    energy: u8,
}

impl Robot {
    pub const MAX_ENERGY: u8 = 100;
    pub const WORK_COST: u8 = 20;
    pub const CHARGE_AMOUNT: u8 = 50;

    /// # Errors
    ///
    /// - [`EntityError::InvalidName`] - `name` is empty or whitespace.
    /// - [`EntityError::InvalidEnergy`] - `energy` exceeds [`Robot::MAX_ENERGY`].
    pub fn new(name: impl Into<String>, energy: u8) -> Result<Self, EntityError> {
        let name = validate_name(name)?;
        if energy > Self::MAX_ENERGY {
            return Err(EntityError::InvalidEnergy);
        }
        Ok(Self { name, energy })
    }

    pub fn energy(&self) -> u8 {
        self.energy
    }
}

impl Named for Robot {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Worker for Robot {
    /// Fails with [`EntityError::OutOfEnergy`] only when energy is already zero;
    /// a partial charge is drained to zero.
    fn work(&mut self) -> Result<u8, EntityError> {
        if self.energy == 0 {
            return Err(EntityError::OutOfEnergy);
        }
        self.energy = self.energy.saturating_sub(Self::WORK_COST);
        debug!(robot = %self.name, energy = self.energy, "work done");
        Ok(self.energy)
    }
}

impl Charger for Robot {
    fn charge(&mut self) -> u8 {
        self.energy = self
            .energy
            .saturating_add(Self::CHARGE_AMOUNT)
            .min(Self::MAX_ENERGY);
        debug!(robot = %self.name, energy = self.energy, "charged");
        self.energy
    }
}
