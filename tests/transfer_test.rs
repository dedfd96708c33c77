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

//! Transfer integration tests.

use capability_bank::{Account, TransactionError, Transferable, transfer};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn accounts() -> (Account, Account) {
    (
        Account::with_balance("User1_Acc", dec!(1500)).unwrap(),
        Account::with_balance("User2_Acc", dec!(300)).unwrap(),
    )
}

// === Bank Scenario ===

#[test]
fn successful_transfer_moves_funds() {
    let (a, b) = accounts();

    transfer(&a, &b, dec!(500)).unwrap();

    assert_eq!(a.balance(), dec!(1000));
    assert_eq!(b.balance(), dec!(800));
}

#[test]
fn insufficient_funds_leaves_balances_unchanged() {
    let (a, b) = accounts();
    transfer(&a, &b, dec!(500)).unwrap();

    let result = transfer(&a, &b, dec!(1500));

    assert_eq!(result, Err(TransactionError::InsufficientFunds));
    assert_eq!(a.balance(), dec!(1000));
    assert_eq!(b.balance(), dec!(800));
}

#[test]
fn transfer_to_self_fails() {
    let (a, _) = accounts();

    assert_eq!(
        transfer(&a, &a, dec!(100)),
        Err(TransactionError::SameAccountTransfer)
    );
    assert_eq!(a.balance(), dec!(1500));
}

#[test]
fn transfer_to_self_fails_regardless_of_amount() {
    let (a, _) = accounts();
    for amount in [dec!(-1), Decimal::ZERO, dec!(1), dec!(1500), dec!(1000000)] {
        assert_eq!(
            transfer(&a, &a, amount),
            Err(TransactionError::SameAccountTransfer)
        );
    }
    assert_eq!(a.balance(), dec!(1500));
}

// === Declined Withdrawal Leg ===

#[test]
fn invalid_amount_fails_without_changes() {
    let (a, b) = accounts();

    assert_eq!(transfer(&a, &b, Decimal::ZERO), Err(TransactionError::InvalidAmount));
    assert_eq!(transfer(&a, &b, dec!(-5)), Err(TransactionError::InvalidAmount));
    assert_eq!(a.balance(), dec!(1500));
    assert_eq!(b.balance(), dec!(300));
}

#[test]
fn frozen_source_fails_with_account_locked() {
    let (a, b) = accounts();
    a.freeze();

    assert_eq!(transfer(&a, &b, dec!(10)), Err(TransactionError::AccountLocked));
    assert_eq!(a.balance(), dec!(1500));
    assert_eq!(b.balance(), dec!(300));
}

// === Compensation ===

#[test]
fn frozen_destination_rolls_back_withdrawal() {
    let (a, b) = accounts();
    b.freeze();

    let result = transfer(&a, &b, dec!(100));

    assert_eq!(
        result,
        Err(TransactionError::RolledBack(Box::new(
            TransactionError::AccountLocked
        )))
    );
    assert_eq!(result.unwrap_err().cause(), &TransactionError::AccountLocked);
    assert_eq!(a.balance(), dec!(1500));
    assert_eq!(b.balance(), dec!(300));
}

#[test]
fn rollback_conserves_total_in_both_directions() {
    let (a, b) = accounts();
    let before = a.balance() + b.balance();

    a.freeze();
    assert!(transfer(&b, &a, dec!(300)).is_err());
    assert_eq!(a.balance() + b.balance(), before);

    a.unfreeze();
    b.freeze();
    assert!(transfer(&a, &b, dec!(1500)).is_err());
    assert_eq!(a.balance() + b.balance(), before);
    assert_eq!(a.balance(), dec!(1500));
}

#[test]
fn transfer_succeeds_after_unfreeze() {
    let (a, b) = accounts();
    b.freeze();
    assert!(transfer(&a, &b, dec!(100)).is_err());

    b.unfreeze();
    transfer(&a, &b, dec!(100)).unwrap();
    assert_eq!(a.balance(), dec!(1400));
    assert_eq!(b.balance(), dec!(400));
}

// === Capability Trait ===

fn pay<T: Transferable>(from: &T, to: &T, amount: Decimal) -> Result<(), TransactionError> {
    from.transfer_to(to, amount)
}

#[test]
fn transferable_capability_delegates_to_transfer() {
    let (a, b) = accounts();

    pay(&a, &b, dec!(500)).unwrap();
    assert_eq!(
        pay(&a, &a, dec!(1)),
        Err(TransactionError::SameAccountTransfer)
    );

    assert_eq!(a.balance(), dec!(1000));
    assert_eq!(b.balance(), dec!(800));
}

#[test]
fn transfer_in_both_directions() {
    let (a, b) = accounts();

    a.transfer_to(&b, dec!(200)).unwrap();
    b.transfer_to(&a, dec!(500)).unwrap();

    assert_eq!(a.balance(), dec!(1800));
    assert_eq!(b.balance(), Decimal::ZERO);
}
