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

//! # Capability Bank
//!
//! Accounts with deposit, withdrawal and compensating transfers, alongside
//! small entities that show capability segregation: each trait in
//! [`capability`] is one narrow set of operations, and closed enums expose
//! optional capabilities through `as_*` accessors.
//!
//! ## Core Components
//!
//! - [`Account`]: identifier plus non-negative balance behind a mutex
//! - [`transfer()`]: withdraw-then-deposit with rollback of a failed deposit
//! - [`Bank`]: directory of accounts addressed by identifier
//! - [`Operation`]: scripted bank operations
//! - [`TransactionError`] / [`EntityError`]: failure reasons
//! - [`Robot`], [`Device`], [`Product`], [`Character`]: capability examples
//!
//! ## Example
//!
//! ```
//! use capability_bank::{Bank, TransactionError};
//! use rust_decimal_macros::dec;
//!
//! let bank = Bank::new();
//! bank.open("User1_Acc", dec!(1500)).unwrap();
//! bank.open("User2_Acc", dec!(300)).unwrap();
//!
//! bank.transfer("User1_Acc", "User2_Acc", dec!(500)).unwrap();
//! assert_eq!(
//!     bank.transfer("User1_Acc", "User2_Acc", dec!(1500)),
//!     Err(TransactionError::InsufficientFunds)
//! );
//!
//! assert_eq!(bank.get("User1_Acc").unwrap().balance(), dec!(1000));
//! assert_eq!(bank.get("User2_Acc").unwrap().balance(), dec!(800));
//! ```
//!
//! ## Thread Safety
//!
//! Each account serializes its own mutations. A transfer locks both accounts
//! in ascending identifier order, so opposite-direction transfers cannot
//! deadlock.

pub mod account;
mod bank;
mod base;
pub mod capability;
pub mod error;
mod home;
mod operation;
mod party;
mod robot;
mod store;
mod transfer;

pub use account::Account;
pub use bank::Bank;
pub use base::AccountId;
pub use capability::{
    Attacker, Charger, Funds, Healer, LevelAdjustable, Named, Priceable, Switchable,
    Transferable, Warranty, Worker,
};
pub use error::{EntityError, TransactionError};
pub use home::{Device, Fan, Lamp};
pub use operation::Operation;
pub use party::{Character, Mage, Warrior, attackers, healers};
pub use robot::Robot;
pub use store::{Laptop, Phone, Product, catalog_total};
pub use transfer::transfer;
