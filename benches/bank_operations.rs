//! Benchmark suite for bank operations
//!
//! Measures the core operations against a store filled to its default
//! capacity, using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use bank_console::{Bank, BankConfig};
use rust_decimal::Decimal;

fn main() {
    divan::main();
}

/// Bank holding 100 accounts, logged in to the first one with a large balance
fn full_bank() -> Bank {
    let mut bank = Bank::new(BankConfig::default());
    for i in 1..=100 {
        bank.create_account(&format!("user{}", i), "pw").unwrap();
    }
    bank.login(1, "pw").unwrap();
    bank.deposit(Decimal::new(1_000_000_000, 2)).unwrap();
    bank
}

/// Fill an empty store to capacity
#[divan::bench]
fn create_accounts_to_capacity() {
    let mut bank = Bank::new(BankConfig::default());
    for i in 1..=100 {
        bank.create_account(divan::black_box(&format!("user{}", i)), "pw")
            .unwrap();
    }
}

/// Login against the last account in a full store
#[divan::bench]
fn login_last_account(bencher: divan::Bencher) {
    bencher
        .with_inputs(full_bank)
        .bench_local_values(|mut bank| {
            bank.login(divan::black_box(100), divan::black_box("pw"))
                .map(|account| account.account_number)
                .unwrap()
        });
}

/// Deposit followed by withdrawal of the same amount
#[divan::bench]
fn deposit_and_withdraw(bencher: divan::Bencher) {
    bencher.with_inputs(full_bank).bench_local_values(|mut bank| {
        let amount = divan::black_box(Decimal::new(1234, 2));
        bank.deposit(amount).unwrap();
        bank.withdraw(amount).unwrap()
    });
}

/// Transfer to every other account in turn
#[divan::bench]
fn transfer_round(bencher: divan::Bencher) {
    bencher.with_inputs(full_bank).bench_local_values(|mut bank| {
        for target in 2..=100 {
            bank.transfer(divan::black_box(target), Decimal::ONE).unwrap();
        }
        bank
    });
}
