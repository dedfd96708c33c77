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

//! Account directory.
//!
//! The [`Bank`] maps identifiers to shared [`Account`]s so operations can be
//! addressed by id. It stores no history: balances live in the accounts.
//!
//! # Thread Safety
//!
//! Accounts are held as `Arc<Account>` in a [`DashMap`]. Lookups clone the
//! `Arc` out of the map before touching an account, so no map shard lock is
//! held while account locks are taken.

use crate::TransactionError;
use crate::account::Account;
use crate::base::AccountId;
use crate::operation::Operation;
use crate::transfer::transfer;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Directory of accounts indexed by identifier.
///
/// # Invariants
///
/// - Identifiers are unique; opening an existing id fails.
/// - Accounts are never removed.
pub struct Bank {
    accounts: DashMap<AccountId, Arc<Account>>,
}

impl Bank {
    pub fn new() -> Self {
        Bank {
            accounts: DashMap::new(),
        }
    }

    /// Opens a new account.
    ///
    /// # Errors
    ///
    /// - [`TransactionError::InvalidIdentifier`] - `id` is empty or whitespace.
    /// - [`TransactionError::InvalidInitialBalance`] - `initial_balance` is negative.
    /// - [`TransactionError::DuplicateAccount`] - `id` is already open.
    pub fn open(
        &self,
        id: impl Into<String>,
        initial_balance: Decimal,
    ) -> Result<Arc<Account>, TransactionError> {
        let account = Account::with_balance(id, initial_balance)?;

        // Entry API keeps check-and-insert atomic.
        match self.accounts.entry(account.id().clone()) {
            Entry::Occupied(_) => Err(TransactionError::DuplicateAccount),
            Entry::Vacant(entry) => {
                let account = Arc::new(account);
                entry.insert(Arc::clone(&account));
                Ok(account)
            }
        }
    }

    /// Retrieves an account by identifier.
    pub fn get(&self, id: &str) -> Option<Arc<Account>> {
        self.accounts.get(id).map(|entry| Arc::clone(entry.value()))
    }

    fn account(&self, id: &str) -> Result<Arc<Account>, TransactionError> {
        self.get(id).ok_or(TransactionError::AccountNotFound)
    }

    pub fn deposit(&self, id: &str, amount: Decimal) -> Result<(), TransactionError> {
        self.account(id)?.deposit(amount)
    }

    pub fn withdraw(&self, id: &str, amount: Decimal) -> Result<(), TransactionError> {
        self.account(id)?.withdraw(amount)
    }

    /// Transfers between two accounts of this bank. See [`transfer()`](crate::transfer()).
    ///
    /// # Errors
    ///
    /// [`TransactionError::AccountNotFound`] if either side is unknown, then
    /// every error of [`transfer()`](crate::transfer()).
    pub fn transfer(
        &self,
        source: &str,
        destination: &str,
        amount: Decimal,
    ) -> Result<(), TransactionError> {
        let source = self.account(source)?;
        let destination = self.account(destination)?;
        transfer(&source, &destination, amount)
    }

    pub fn freeze(&self, id: &str) -> Result<(), TransactionError> {
        self.account(id)?.freeze();
        Ok(())
    }

    pub fn unfreeze(&self, id: &str) -> Result<(), TransactionError> {
        self.account(id)?.unfreeze();
        Ok(())
    }

    /// Applies one scripted operation.
    ///
    /// | Operation | Behavior |
    /// |-----------|----------|
    /// | Open | Creates the account with its initial balance |
    /// | Deposit | Credits funds |
    /// | Withdraw | Debits funds (fails if insufficient) |
    /// | Transfer | Moves funds, rolling back a failed deposit |
    /// | Freeze / Unfreeze | Toggles whether the account accepts operations |
    pub fn process(&self, operation: Operation) -> Result<(), TransactionError> {
        match operation {
            Operation::Open {
                account,
                initial_balance,
            } => self.open(account, initial_balance).map(|_| ()),
            Operation::Deposit { account, amount } => self.deposit(account.as_str(), amount),
            Operation::Withdraw { account, amount } => self.withdraw(account.as_str(), amount),
            Operation::Transfer {
                source,
                destination,
                amount,
            } => self.transfer(source.as_str(), destination.as_str(), amount),
            Operation::Freeze { account } => self.freeze(account.as_str()),
            Operation::Unfreeze { account } => self.unfreeze(account.as_str()),
        }
    }

    /// Returns all accounts ordered by identifier.
    pub fn accounts(&self) -> Vec<Arc<Account>> {
        let mut accounts: Vec<_> = self
            .accounts
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        accounts.sort_by(|a, b| a.id().cmp(b.id()));
        accounts
    }

    /// Sum of every account balance.
    pub fn total(&self) -> Decimal {
        self.accounts().iter().map(|account| account.balance()).sum()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}
