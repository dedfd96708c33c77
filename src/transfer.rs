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

//! Transfers between two accounts.
//!
//! A transfer is a withdrawal from the source followed by a deposit into the
//! destination, both performed while holding the two account locks:
//!
//! ```text
//!  same id? ──yes──► SameAccountTransfer
//!     │
//!  lock both (ascending id)
//!     │
//!  withdraw(source) ──err──► same error, nothing changed
//!     │
//!  deposit(destination) ──err──► restore(source) ──► RolledBack(cause)
//!     │
//!    Ok
//! ```
//!
//! Whatever the outcome, the sum of the two balances is unchanged.

use crate::TransactionError;
use crate::account::{Account, AccountData};
use parking_lot::MutexGuard;
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Moves `amount` from `source` to `destination`.
///
/// # Errors
///
/// - [`TransactionError::SameAccountTransfer`] - both sides share an identifier.
/// - [`TransactionError::InvalidAmount`] - `amount` is zero or negative.
/// - [`TransactionError::AccountLocked`] - `source` is frozen.
/// - [`TransactionError::InsufficientFunds`] - `amount` exceeds the source balance.
/// - [`TransactionError::RolledBack`] - the deposit failed and the withdrawal
///   was reversed; wraps the deposit error.
///
/// # Example
///
/// ```
/// use capability_bank::{Account, TransactionError, transfer};
/// use rust_decimal_macros::dec;
///
/// let a = Account::with_balance("A", dec!(1500)).unwrap();
/// let b = Account::with_balance("B", dec!(300)).unwrap();
///
/// transfer(&a, &b, dec!(500)).unwrap();
/// assert_eq!(a.balance(), dec!(1000));
/// assert_eq!(b.balance(), dec!(800));
///
/// assert_eq!(transfer(&a, &a, dec!(100)), Err(TransactionError::SameAccountTransfer));
/// ```
pub fn transfer(
    source: &Account,
    destination: &Account,
    amount: Decimal,
) -> Result<(), TransactionError> {
    if source.id() == destination.id() {
        return Err(TransactionError::SameAccountTransfer);
    }

    let (mut from, mut to) = lock_pair(source, destination);

    from.withdraw(amount)?;

    if let Err(cause) = to.deposit(amount) {
        from.restore(amount);
        warn!(
            source = %source.id(),
            destination = %destination.id(),
            %amount,
            %cause,
            "deposit failed, withdrawal rolled back"
        );
        return Err(TransactionError::RolledBack(Box::new(cause)));
    }

    debug!(
        source = %source.id(),
        destination = %destination.id(),
        %amount,
        source_balance = %from.balance(),
        destination_balance = %to.balance(),
        "transfer applied"
    );
    Ok(())
}

/// Locks both accounts in ascending identifier order.
///
/// Returns the guards as `(source, destination)` regardless of lock order.
/// Callers must have rejected equal identifiers.
fn lock_pair<'a>(
    source: &'a Account,
    destination: &'a Account,
) -> (MutexGuard<'a, AccountData>, MutexGuard<'a, AccountData>) {
    if source.id() < destination.id() {
        let from = source.lock();
        let to = destination.lock();
        (from, to)
    } else {
        let to = destination.lock();
        let from = source.lock();
        (from, to)
    }
}
