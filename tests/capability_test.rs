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

//! Capability entity integration tests.

use capability_bank::{
    Attacker, Character, Charger, Device, EntityError, Fan, Healer, Lamp, Laptop, Mage, Named,
    Phone, Priceable, Product, Robot, Switchable, Warrior, Worker, attackers, catalog_total,
    healers,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// === Robot ===

#[test]
fn robot_shift_from_factory_floor() {
    let mut robot = Robot::new("Vasya", 70).unwrap();
    assert_eq!(robot.name(), "Vasya");

    assert_eq!(robot.work(), Ok(50));
    assert_eq!(robot.work(), Ok(30));
    assert_eq!(robot.charge(), 80);
    assert_eq!(robot.work(), Ok(60));
}

#[test]
fn drained_robot_refuses_work_until_charged() {
    let mut robot = Robot::new("Vasya", 20).unwrap();
    assert_eq!(robot.work(), Ok(0));
    assert_eq!(robot.work(), Err(EntityError::OutOfEnergy));

    robot.charge();
    assert_eq!(robot.work(), Ok(30));
}

fn run_until_empty(worker: &mut dyn Worker) -> usize {
    let mut shifts = 0;
    while worker.work().is_ok() {
        shifts += 1;
    }
    shifts
}

#[test]
fn full_robot_works_five_shifts() {
    let mut robot = Robot::new("Vasya", 100).unwrap();
    assert_eq!(run_until_empty(&mut robot), 5);
    assert_eq!(robot.energy(), 0);
}

proptest! {
    /// Energy stays within bounds for any sequence of work and charge.
    #[test]
    fn robot_energy_stays_in_bounds(
        initial in 0u8..=100,
        actions in prop::collection::vec(any::<bool>(), 0..50),
    ) {
        let mut robot = Robot::new("bot", initial).unwrap();
        for work in actions {
            if work {
                let _ = robot.work();
            } else {
                robot.charge();
            }
            prop_assert!(robot.energy() <= Robot::MAX_ENERGY);
        }
    }

    /// Out-of-range initial energy is rejected.
    #[test]
    fn robot_rejects_excess_energy(initial in 101u8..=255) {
        prop_assert_eq!(Robot::new("bot", initial), Err(EntityError::InvalidEnergy));
    }
}

// === Smart Home ===

#[test]
fn walk_devices_then_dim_the_lamp() {
    let mut devices = vec![
        Device::from(Lamp::new("Living room lamp")),
        Device::from(Fan::new("Bedroom fan")),
    ];

    for device in &mut devices {
        let switch: &mut dyn Switchable = device.as_switchable_mut();
        switch.on();
        assert!(switch.is_on());
        switch.off();
        assert!(!switch.is_on());
    }

    let mut adjusted = 0;
    for device in &mut devices {
        if let Some(level) = device.as_level_adjustable_mut() {
            assert_eq!(level.set_level(30), 30);
            assert_eq!(level.set_level(85), 85);
            adjusted += 1;
        }
    }
    assert_eq!(adjusted, 1);
    assert!(devices[0].as_switchable().is_on());
    assert!(!devices[1].as_switchable().is_on());
}

proptest! {
    /// Any requested level lands inside 0..=100.
    #[test]
    fn lamp_level_always_clamped(level in any::<i32>()) {
        let mut device = Device::from(Lamp::new("lamp"));
        let applied = device
            .as_level_adjustable_mut()
            .map(|l| l.set_level(level))
            .unwrap();
        prop_assert!(applied <= 100);
        prop_assert_eq!(i32::from(applied), level.clamp(0, 100));
    }
}

// === Store ===

fn catalog() -> Vec<Product> {
    vec![
        Phone::new("iPhone 15 Pro", dec!(120000), 24).unwrap().into(),
        Laptop::new("MacBook Air M2", dec!(150000)).unwrap().into(),
        Phone::new("Samsung Galaxy S24", dec!(90000), 18).unwrap().into(),
        Laptop::new("Dell XPS 15", dec!(135000)).unwrap().into(),
    ]
}

#[test]
fn catalog_reports_prices_and_warranties() {
    let products = catalog();

    let warranties: Vec<(&str, Option<u32>)> = products
        .iter()
        .map(|p| (p.name(), p.warranty().map(|w| w.warranty_months())))
        .collect();
    assert_eq!(
        warranties,
        vec![
            ("iPhone 15 Pro", Some(24)),
            ("MacBook Air M2", None),
            ("Samsung Galaxy S24", Some(18)),
            ("Dell XPS 15", None),
        ]
    );
    assert_eq!(catalog_total(&products), dec!(495000));
}

#[test]
fn priceable_trait_objects_sum_like_catalog_total() {
    let products = catalog();
    let priced: Vec<&dyn Priceable> = products.iter().map(Product::as_priceable).collect();
    let sum: Decimal = priced.iter().map(|p| p.price()).sum();
    assert_eq!(sum, catalog_total(&products));
}

#[test]
fn product_validation() {
    assert_eq!(Phone::new("", dec!(1), 12), Err(EntityError::InvalidName));
    assert_eq!(Phone::new("p", dec!(-1), 12), Err(EntityError::InvalidPrice));
    assert_eq!(Laptop::new("\t", dec!(1)), Err(EntityError::InvalidName));
}

// === Party ===

fn party() -> Vec<Character> {
    vec![
        Warrior::new("Aragorn").into(),
        Mage::new("Gandalf").into(),
        Warrior::new("Legolas").into(),
        Mage::new("Merlin").into(),
    ]
}

#[test]
fn everyone_attacks_then_mages_heal() {
    let party = party();

    let attacks: Vec<String> = attackers(&party).map(|a| a.attack()).collect();
    assert_eq!(
        attacks,
        vec![
            "Aragorn: swings a sword!",
            "Gandalf: summons a fireball!",
            "Legolas: swings a sword!",
            "Merlin: summons a fireball!",
        ]
    );

    let healer_names: Vec<&str> = healers(&party).map(|h| h.name()).collect();
    assert_eq!(healer_names, vec!["Gandalf", "Merlin"]);
}

#[test]
fn warriors_have_no_healing_capability() {
    let warrior = Character::from(Warrior::new("Aragorn"));
    let mage = Character::from(Mage::new("Gandalf"));

    assert!(warrior.as_healer().is_none());
    assert_eq!(warrior.name(), "Aragorn");
    assert_eq!(mage.as_healer().map(|h| h.heal()).as_deref(), Some("Gandalf: heals the allies!"));
    assert!(mage.as_attacker().is_some());
}

#[test]
fn mage_is_both_attacker_and_healer() {
    fn act(character: &(impl Attacker + Healer)) -> (String, String) {
        (character.attack(), character.heal())
    }

    let (attack, heal) = act(&Mage::new("Merlin"));
    assert_eq!(attack, "Merlin: summons a fireball!");
    assert_eq!(heal, "Merlin: heals the allies!");
}
