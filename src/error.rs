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

//! Error types for account operations and capability entities.

use thiserror::Error;

/// Account and transfer errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    /// Amount is zero or negative
    #[error("invalid amount (must be positive)")]
    InvalidAmount,

    /// Withdrawal would exceed the balance
    #[error("insufficient funds")]
    InsufficientFunds,

    /// Source and destination are the same account
    #[error("cannot transfer to the same account")]
    SameAccountTransfer,

    /// Account identifier is empty or whitespace
    #[error("account identifier must not be empty")]
    InvalidIdentifier,

    /// Initial balance is negative
    #[error("initial balance must not be negative")]
    InvalidInitialBalance,

    /// Account is frozen
    #[error("account is locked")]
    AccountLocked,

    /// Resulting balance is not representable
    #[error("balance overflow")]
    BalanceOverflow,

    /// No account with the given identifier
    #[error("account not found")]
    AccountNotFound,

    /// An account with the given identifier already exists
    #[error("account already exists")]
    DuplicateAccount,

    /// Deposit leg of a transfer failed and the withdrawal was reversed
    #[error("transfer rolled back: {0}")]
    RolledBack(Box<TransactionError>),
}

impl TransactionError {
    /// Returns the underlying reason, looking through [`TransactionError::RolledBack`].
    pub fn cause(&self) -> &TransactionError {
        match self {
            Self::RolledBack(cause) => cause.cause(),
            other => other,
        }
    }
}

/// Errors raised by the robot, device, product and character entities.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    #[error("name must not be empty")]
    InvalidName,

    #[error("energy level must be between 0 and 100")]
    InvalidEnergy,

    #[error("price must not be negative")]
    InvalidPrice,

    #[error("not enough energy to work")]
    OutOfEnergy,
}
