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

use anyhow::{Context, Result};
use capability_bank::{
    AccountId, Bank, Character, Charger, Device, Fan, Lamp, Laptop, Mage, Operation, Phone,
    Product, Robot, TransactionError, Warrior, Worker, attackers, catalog_total, healers,
};
use clap::{Parser, Subcommand, ValueEnum};
use csv::{ReaderBuilder, Trim, Writer};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Capability Bank - accounts, transfers and capability demos
///
/// Runs the scripted demonstrations, or applies a CSV script of bank
/// operations and writes the resulting accounts to stdout.
#[derive(Parser, Debug)]
#[command(name = "capability-bank")]
#[command(about = "Accounts with compensating transfers and capability demos", long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the transcript of a scripted scenario
    Demo {
        #[arg(value_enum, default_value_t = Scenario::All)]
        scenario: Scenario,
    },

    /// Apply a CSV script of bank operations
    ///
    /// Expected format: type,account,counterparty,amount
    /// Example: cargo run -- script operations.csv > accounts.csv
    Script {
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Scenario {
    Bank,
    Robot,
    Home,
    Store,
    Party,
    All,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    match args.command {
        Command::Demo { scenario } => {
            let mut out = io::stdout().lock();
            run_demo(scenario, &mut out)?;
        }
        Command::Script { input } => {
            let file = File::open(&input)
                .with_context(|| format!("failed to open '{}'", input.display()))?;
            let bank = process_operations(BufReader::new(file))
                .context("failed to process operations")?;
            write_accounts(&bank, io::stdout()).context("failed to write accounts")?;
        }
    }

    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

// === Script Mode ===

/// Raw CSV record matching the script format.
///
/// Fields: `type, account, counterparty, amount`
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(rename = "type")]
    op_type: String,
    account: String,
    counterparty: Option<String>,
    amount: Option<String>,
}

impl CsvRecord {
    /// Converts a CSV record to an [`Operation`].
    ///
    /// Returns `None` for unknown types, blank identifiers, missing required
    /// fields or an amount that is present but not a number.
    fn into_operation(self) -> Option<Operation> {
        let account = AccountId::new(self.account).ok()?;
        let amount = match self.amount.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<Decimal>().ok()?),
        };

        match self.op_type.to_lowercase().as_str() {
            "open" => Some(Operation::Open {
                account,
                initial_balance: amount.unwrap_or(Decimal::ZERO),
            }),
            "deposit" => Some(Operation::Deposit {
                account,
                amount: amount?,
            }),
            "withdraw" | "withdrawal" => Some(Operation::Withdraw {
                account,
                amount: amount?,
            }),
            "transfer" => Some(Operation::Transfer {
                source: account,
                destination: AccountId::new(self.counterparty?).ok()?,
                amount: amount?,
            }),
            "freeze" => Some(Operation::Freeze { account }),
            "unfreeze" => Some(Operation::Unfreeze { account }),
            _ => None,
        }
    }
}

/// Applies operations from a CSV reader to a fresh [`Bank`].
///
/// Malformed rows and declined operations are logged and skipped.
///
/// # CSV Format
///
/// ```csv
/// type,account,counterparty,amount
/// open,User1_Acc,,1500
/// open,User2_Acc,,300
/// transfer,User1_Acc,User2_Acc,500
/// freeze,User2_Acc,,
/// ```
///
/// # Errors
///
/// Returns a CSV error if the reader fails.
fn process_operations<R: Read>(reader: R) -> Result<Bank, csv::Error> {
    let bank = Bank::new();

    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    for result in rdr.deserialize::<CsvRecord>() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed row");
                continue;
            }
        };

        let Some(operation) = record.into_operation() else {
            tracing::warn!("skipping invalid operation record");
            continue;
        };

        let kind = operation.kind();
        let account = operation.account().clone();
        if let Err(e) = bank.process(operation) {
            tracing::warn!(operation = kind, %account, error = %e, "operation declined");
        }
    }

    Ok(bank)
}

/// Writes accounts as CSV, ordered by identifier.
///
/// Columns: `account, balance, frozen`
fn write_accounts<W: Write>(bank: &Bank, writer: W) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);

    for account in bank.accounts() {
        wtr.serialize(&*account)?;
    }

    wtr.flush()?;
    Ok(())
}

// === Demo Mode ===

fn run_demo<W: Write>(scenario: Scenario, out: &mut W) -> Result<()> {
    match scenario {
        Scenario::Bank => demo_bank(out)?,
        Scenario::Robot => demo_robot(out)?,
        Scenario::Home => demo_home(out)?,
        Scenario::Store => demo_store(out)?,
        Scenario::Party => demo_party(out)?,
        Scenario::All => {
            demo_robot(out)?;
            demo_home(out)?;
            demo_store(out)?;
            demo_party(out)?;
            demo_bank(out)?;
        }
    }
    Ok(())
}

fn report<W: Write>(
    out: &mut W,
    label: &str,
    result: Result<(), TransactionError>,
) -> io::Result<()> {
    match result {
        Ok(()) => writeln!(out, "{label}: ok"),
        Err(e) => writeln!(out, "{label}: declined ({e})"),
    }
}

fn print_balances<W: Write>(out: &mut W, bank: &Bank) -> io::Result<()> {
    for account in bank.accounts() {
        writeln!(out, "  {}: {}", account.id(), account.balance())?;
    }
    Ok(())
}

fn demo_bank<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "== Bank and transfers ==")?;
    let bank = Bank::new();
    bank.open("User1_Acc", dec!(1500))?;
    bank.open("User2_Acc", dec!(300))?;

    writeln!(out, "Initial balances")?;
    print_balances(out, &bank)?;

    report(
        out,
        "Transfer 500 User1_Acc -> User2_Acc",
        bank.transfer("User1_Acc", "User2_Acc", dec!(500)),
    )?;
    report(
        out,
        "Transfer 1500 User1_Acc -> User2_Acc",
        bank.transfer("User1_Acc", "User2_Acc", dec!(1500)),
    )?;
    report(
        out,
        "Transfer 100 User1_Acc -> User1_Acc",
        bank.transfer("User1_Acc", "User1_Acc", dec!(100)),
    )?;

    bank.freeze("User2_Acc")?;
    report(
        out,
        "Transfer 100 User1_Acc -> User2_Acc (frozen)",
        bank.transfer("User1_Acc", "User2_Acc", dec!(100)),
    )?;
    bank.unfreeze("User2_Acc")?;

    writeln!(out, "Final balances")?;
    print_balances(out, &bank)?;
    Ok(())
}

fn demo_robot<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "== Factory robots ==")?;
    let mut robot = Robot::new("Vasya", 70)?;
    writeln!(out, "Robot created with energy {}", robot.energy())?;

    for _ in 0..2 {
        work(out, &mut robot)?;
    }
    writeln!(out, "Charged, energy {}", robot.charge())?;
    work(out, &mut robot)?;
    Ok(())
}

fn work<W: Write>(out: &mut W, robot: &mut Robot) -> io::Result<()> {
    match robot.work() {
        Ok(energy) => writeln!(out, "Worked, energy {energy}"),
        Err(e) => writeln!(out, "Cannot work: {e} (energy {})", robot.energy()),
    }
}

fn demo_home<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "== Smart home ==")?;
    let mut devices = vec![
        Device::from(Lamp::new("Living room lamp")),
        Device::from(Fan::new("Bedroom fan")),
    ];

    for device in &mut devices {
        let name = device.name().to_owned();
        let switch = device.as_switchable_mut();
        switch.on();
        writeln!(out, "{name}: on={}", switch.is_on())?;
        switch.off();
        writeln!(out, "{name}: on={}", switch.is_on())?;
    }

    for device in &mut devices {
        let name = device.name().to_owned();
        if let Some(level) = device.as_level_adjustable_mut() {
            for requested in [30, 85] {
                writeln!(out, "{name}: level {}%", level.set_level(requested))?;
            }
        }
        device.as_switchable_mut().off();
    }
    Ok(())
}

fn demo_store<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "== Electronics store ==")?;
    let products = vec![
        Product::from(Phone::new("iPhone 15 Pro", dec!(120000), 24)?),
        Product::from(Laptop::new("MacBook Air M2", dec!(150000))?),
        Product::from(Phone::new("Samsung Galaxy S24", dec!(90000), 18)?),
        Product::from(Laptop::new("Dell XPS 15", dec!(135000))?),
    ];

    for product in &products {
        writeln!(out, "{}: {}", product.name(), product.price())?;
        match product.warranty() {
            Some(warranty) => writeln!(out, "  warranty: {} months", warranty.warranty_months())?,
            None => writeln!(out, "  warranty: none")?,
        }
    }
    writeln!(out, "Total: {}", catalog_total(&products))?;
    Ok(())
}

fn demo_party<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "== Party abilities ==")?;
    let party: Vec<Character> = vec![
        Warrior::new("Aragorn").into(),
        Mage::new("Gandalf").into(),
        Warrior::new("Legolas").into(),
        Mage::new("Merlin").into(),
    ];

    writeln!(out, "Attackers")?;
    for attacker in attackers(&party) {
        writeln!(out, "  {}", attacker.attack())?;
    }
    writeln!(out, "Healers")?;
    for healer in healers(&party) {
        writeln!(out, "  {}", healer.heal())?;
    }
    Ok(())
}
