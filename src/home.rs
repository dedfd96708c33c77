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

//! Smart-home devices.
//!
//! Every [`Device`] can be switched; only lamps also expose an adjustable
//! level. Callers query that through [`Device::as_level_adjustable_mut`].

use crate::capability::{LevelAdjustable, Named, Switchable};
use tracing::debug;

/// A dimmable lamp. On whenever its brightness is above zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lamp {
    name: String,
    brightness: u8,
}

impl Lamp {
    pub const MAX_LEVEL: u8 = 100;

    /// Creates a lamp that starts switched off.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brightness: 0,
        }
    }
}

impl Named for Lamp {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Switchable for Lamp {
    fn on(&mut self) {
        self.brightness = Self::MAX_LEVEL;
        debug!(device = %self.name, brightness = self.brightness, "lamp on");
    }

    fn off(&mut self) {
        self.brightness = 0;
        debug!(device = %self.name, "lamp off");
    }

    fn is_on(&self) -> bool {
        self.brightness > 0
    }
}

impl LevelAdjustable for Lamp {
    fn set_level(&mut self, level: i32) -> u8 {
        // Clamp keeps the value inside u8 range before the cast.
        self.brightness = level.clamp(0, i32::from(Self::MAX_LEVEL)) as u8;
        debug!(device = %self.name, brightness = self.brightness, "lamp level set");
        self.brightness
    }

    fn level(&self) -> u8 {
        self.brightness
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fan {
    name: String,
    on: bool,
}

impl Fan {
    /// Creates a fan that starts switched off.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on: false,
        }
    }
}

impl Named for Fan {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Switchable for Fan {
    fn on(&mut self) {
        self.on = true;
        debug!(device = %self.name, "fan on");
    }

    fn off(&mut self) {
        self.on = false;
        debug!(device = %self.name, "fan off");
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

/// Closed set of smart-home devices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Device {
    Lamp(Lamp),
    Fan(Fan),
}

impl Device {
    pub fn name(&self) -> &str {
        match self {
            Self::Lamp(lamp) => lamp.name(),
            Self::Fan(fan) => fan.name(),
        }
    }

    pub fn as_switchable(&self) -> &dyn Switchable {
        match self {
            Self::Lamp(lamp) => lamp,
            Self::Fan(fan) => fan,
        }
    }

    pub fn as_switchable_mut(&mut self) -> &mut dyn Switchable {
        match self {
            Self::Lamp(lamp) => lamp,
            Self::Fan(fan) => fan,
        }
    }

    pub fn as_level_adjustable(&self) -> Option<&dyn LevelAdjustable> {
        match self {
            Self::Lamp(lamp) => Some(lamp),
            Self::Fan(_) => None,
        }
    }

    pub fn as_level_adjustable_mut(&mut self) -> Option<&mut dyn LevelAdjustable> {
        match self {
            Self::Lamp(lamp) => Some(lamp),
            Self::Fan(_) => None,
        }
    }
}

impl From<Lamp> for Device {
    fn from(lamp: Lamp) -> Self {
        Self::Lamp(lamp)
    }
}

impl From<Fan> for Device {
    fn from(fan: Fan) -> Self {
        Self::Fan(fan)
    }
}
