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

//! Electronics store catalog.
//!
//! All [`Product`]s have a price; phones also carry a warranty, exposed
//! through [`Product::warranty`].

use crate::capability::{Named, Priceable, Warranty, validate_name};
use crate::error::EntityError;
use rust_decimal::Decimal;

fn validate_price(price: Decimal) -> Result<Decimal, EntityError> {
    if price < Decimal::ZERO {
        return Err(EntityError::InvalidPrice);
    }
    Ok(price)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    name: String,
    price: Decimal,
    warranty_months: u32,
}

impl Phone {
    /// # Errors
    ///
    /// - [`EntityError::InvalidName`] - `name` is empty or whitespace.
    /// - [`EntityError::InvalidPrice`] - `price` is negative.
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        warranty_months: u32,
    ) -> Result<Self, EntityError> {
        Ok(Self {
            name: validate_name(name)?,
            price: validate_price(price)?,
            warranty_months,
        })
    }
}

impl Named for Phone {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Priceable for Phone {
    fn price(&self) -> Decimal {
        self.price
    }
}

impl Warranty for Phone {
    fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Laptop {
    name: String,
    price: Decimal,
}

impl Laptop {
    /// # Errors
    ///
    /// Same as [`Phone::new`].
    pub fn new(name: impl Into<String>, price: Decimal) -> Result<Self, EntityError> {
        Ok(Self {
            name: validate_name(name)?,
            price: validate_price(price)?,
        })
    }
}

impl Named for Laptop {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Priceable for Laptop {
    fn price(&self) -> Decimal {
        self.price
    }
}

/// Closed set of catalog items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Product {
    Phone(Phone),
    Laptop(Laptop),
}

impl Product {
    pub fn as_priceable(&self) -> &dyn Priceable {
        match self {
            Self::Phone(phone) => phone,
            Self::Laptop(laptop) => laptop,
        }
    }

    pub fn name(&self) -> &str {
        self.as_priceable().name()
    }

    pub fn price(&self) -> Decimal {
        self.as_priceable().price()
    }

    /// Returns the warranty capability, if the product has one.
    pub fn warranty(&self) -> Option<&dyn Warranty> {
        match self {
            Self::Phone(phone) => Some(phone),
            Self::Laptop(_) => None,
        }
    }
}

impl From<Phone> for Product {
    fn from(phone: Phone) -> Self {
        Self::Phone(phone)
    }
}

impl From<Laptop> for Product {
    fn from(laptop: Laptop) -> Self {
        Self::Laptop(laptop)
    }
}

/// Sum of all product prices.
pub fn catalog_total(products: &[Product]) -> Decimal {
    products.iter().map(Product::price).sum()
}
