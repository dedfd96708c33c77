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

//! Game characters and their abilities.

use crate::capability::{Attacker, Healer, Named};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warrior {
    name: String,
}

impl Warrior {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Named for Warrior {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Attacker for Warrior {
    fn attack(&self) -> String {
        format!("{}: swings a sword!", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mage {
    name: String,
}

impl Mage {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Named for Mage {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Attacker for Mage {
    fn attack(&self) -> String {
        format!("{}: summons a fireball!", self.name)
    }
}

impl Healer for Mage {
    fn heal(&self) -> String {
        format!("{}: heals the allies!", self.name)
    }
}

/// Closed set of playable characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Character {
    Warrior(Warrior),
    Mage(Mage),
}

impl Character {
    pub fn name(&self) -> &str {
        match self {
            Self::Warrior(warrior) => warrior.name(),
            Self::Mage(mage) => mage.name(),
        }
    }

    /// Returns the attack capability, if the character has one.
    pub fn as_attacker(&self) -> Option<&dyn Attacker> {
        match self {
            Self::Warrior(warrior) => Some(warrior),
            Self::Mage(mage) => Some(mage),
        }
    }

    pub fn as_healer(&self) -> Option<&dyn Healer> {
        match self {
            Self::Warrior(_) => None,
            Self::Mage(mage) => Some(mage),
        }
    }
}

impl From<Warrior> for Character {
    fn from(warrior: Warrior) -> Self {
        Self::Warrior(warrior)
    }
}

impl From<Mage> for Character {
    fn from(mage: Mage) -> Self {
        Self::Mage(mage)
    }
}

/// Characters able to attack, in party order.
pub fn attackers(party: &[Character]) -> impl Iterator<Item = &dyn Attacker> {
    party.iter().filter_map(Character::as_attacker)
}

/// Characters able to heal, in party order.
pub fn healers(party: &[Character]) -> impl Iterator<Item = &dyn Healer> {
    party.iter().filter_map(Character::as_healer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn party() -> Vec<Character> {
        vec![
            Warrior::new("Aragorn").into(),
            Mage::new("Gandalf").into(),
            Warrior::new("Legolas").into(),
            Mage::new("Merlin").into(),
        ]
    }

    #[test]
    fn everyone_attacks_in_order() {
        let party = party();
        let names: Vec<&str> = attackers(&party).map(|a| a.name()).collect();
        assert_eq!(names, vec!["Aragorn", "Gandalf", "Legolas", "Merlin"]);
    }

    #[test]
    fn only_mages_heal() {
        let party = party();
        let lines: Vec<String> = healers(&party).map(|h| h.heal()).collect();
        assert_eq!(
            lines,
            vec!["Gandalf: heals the allies!", "Merlin: heals the allies!"]
        );
    }

    #[test]
    fn attacks_differ_by_class() {
        assert_eq!(Warrior::new("Aragorn").attack(), "Aragorn: swings a sword!");
        assert_eq!(Mage::new("Merlin").attack(), "Merlin: summons a fireball!");
    }
}
