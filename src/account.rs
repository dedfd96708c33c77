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

//! Account management.
//!
//! An [`Account`] pairs an immutable [`AccountId`] with a balance guarded by a
//! mutex. The balance never goes negative.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use capability_bank::Account;
//!
//! let account = Account::with_balance("User1_Acc", dec!(1500)).unwrap();
//! account.withdraw(dec!(500)).unwrap();
//! assert_eq!(account.balance(), dec!(1000));
//! ```

use crate::TransactionError;
use crate::base::AccountId;
use crate::capability::{Funds, Transferable};
use parking_lot::{Mutex, MutexGuard};
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::debug;

#[derive(Debug)]
pub(crate) struct AccountData {
    balance: Decimal,
    frozen: bool,
}

impl AccountData {
    fn new(balance: Decimal) -> Self {
        Self {
            balance,
            frozen: false,
        }
    }

    pub(crate) fn balance(&self) -> Decimal {
        self.balance
    }

    fn assert_invariants(&self) {
        debug_assert!(
            self.balance >= Decimal::ZERO,
            "Invariant violated: balance went negative: {}",
            self.balance
        );
    }

    /// Increases the balance.
    pub(crate) fn deposit(&mut self, amount: Decimal) -> Result<(), TransactionError> {
        if amount <= Decimal::ZERO {
            return Err(TransactionError::InvalidAmount);
        }
        if self.frozen {
            return Err(TransactionError::AccountLocked);
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(TransactionError::BalanceOverflow)?;
        self.assert_invariants();
        Ok(())
    }

    /// Decreases the balance.
    pub(crate) fn withdraw(&mut self, amount: Decimal) -> Result<(), TransactionError> {
        if amount <= Decimal::ZERO {
            return Err(TransactionError::InvalidAmount);
        }
        if self.frozen {
            return Err(TransactionError::AccountLocked);
        }
        if self.balance < amount {
            return Err(TransactionError::InsufficientFunds);
        }
        self.balance -= amount;
        self.assert_invariants();
        Ok(())
    }

    /// Re-credits an amount taken by [`AccountData::withdraw`] under the same lock.
    ///
    /// Skips the frozen check: a compensation must always land.
    pub(crate) fn restore(&mut self, amount: Decimal) {
        self.balance += amount;
        self.assert_invariants();
    }
}

/// Bank account.
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    inner: Mutex<AccountData>,
}

impl Account {
    const DECIMAL_PRECISION: u32 = 4;

    /// Opens an account with a zero balance.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::InvalidIdentifier`] for a blank `id`.
    pub fn new(id: impl Into<String>) -> Result<Self, TransactionError> {
        Self::with_balance(id, Decimal::ZERO)
    }

    /// Opens an account with an initial balance.
    ///
    /// # Errors
    ///
    /// - [`TransactionError::InvalidIdentifier`] - `id` is empty or whitespace.
    /// - [`TransactionError::InvalidInitialBalance`] - `initial_balance` is negative.
    pub fn with_balance(
        id: impl Into<String>,
        initial_balance: Decimal,
    ) -> Result<Self, TransactionError> {
        let id = AccountId::new(id)?;
        if initial_balance < Decimal::ZERO {
            return Err(TransactionError::InvalidInitialBalance);
        }
        debug!(account = %id, balance = %initial_balance, "account opened");
        Ok(Self {
            id,
            inner: Mutex::new(AccountData::new(initial_balance)),
        })
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn balance(&self) -> Decimal {
        self.inner.lock().balance
    }

    pub fn is_frozen(&self) -> bool {
        self.inner.lock().frozen
    }

    /// Freezes the account; deposits and withdrawals are declined until unfrozen.
    pub fn freeze(&self) {
        self.inner.lock().frozen = true;
        debug!(account = %self.id, "account frozen");
    }

    pub fn unfreeze(&self) {
        self.inner.lock().frozen = false;
        debug!(account = %self.id, "account unfrozen");
    }

    /// Credits `amount` to the account.
    ///
    /// # Errors
    ///
    /// - [`TransactionError::InvalidAmount`] - `amount` is zero or negative.
    /// - [`TransactionError::AccountLocked`] - the account is frozen.
    /// - [`TransactionError::BalanceOverflow`] - the new balance is not representable.
    pub fn deposit(&self, amount: Decimal) -> Result<(), TransactionError> {
        let mut data = self.inner.lock();
        data.deposit(amount)?;
        debug!(account = %self.id, %amount, balance = %data.balance, "deposit applied");
        Ok(())
    }

    /// Debits `amount` from the account.
    ///
    /// # Errors
    ///
    /// - [`TransactionError::InvalidAmount`] - `amount` is zero or negative.
    /// - [`TransactionError::AccountLocked`] - the account is frozen.
    /// - [`TransactionError::InsufficientFunds`] - `amount` exceeds the balance.
    pub fn withdraw(&self, amount: Decimal) -> Result<(), TransactionError> {
        let mut data = self.inner.lock();
        data.withdraw(amount)?;
        debug!(account = %self.id, %amount, balance = %data.balance, "withdrawal applied");
        Ok(())
    }

    /// Moves `amount` from this account to `destination`. See [`transfer()`](crate::transfer()).
    pub fn transfer_to(
        &self,
        destination: &Account,
        amount: Decimal,
    ) -> Result<(), TransactionError> {
        crate::transfer::transfer(self, destination, amount)
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, AccountData> {
        self.inner.lock()
    }
}

impl Funds for Account {
    fn id(&self) -> &AccountId {
        Account::id(self)
    }

    fn balance(&self) -> Decimal {
        Account::balance(self)
    }

    fn deposit(&self, amount: Decimal) -> Result<(), TransactionError> {
        Account::deposit(self, amount)
    }

    fn withdraw(&self, amount: Decimal) -> Result<(), TransactionError> {
        Account::withdraw(self, amount)
    }
}

impl Transferable for Account {
    fn transfer_to(&self, destination: &Self, amount: Decimal) -> Result<(), TransactionError> {
        Account::transfer_to(self, destination, amount)
    }
}

impl Serialize for Account {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let data = self.inner.lock();
        let mut state = serializer.serialize_struct("Account", 3)?;
        state.serialize_field("account", &self.id)?;
        state.serialize_field(
            "balance",
            &data.balance.round_dp(Account::DECIMAL_PRECISION),
        )?;
        state.serialize_field("frozen", &data.frozen)?;
        state.end()
    }
}
