use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::application::{AddResult, LedgerStore};
use crate::domain::{format_satang, Kind, Satang};

/// Satang - Personal Expense Tracker
#[derive(Parser)]
#[command(name = "satang")]
#[command(about = "A local-first personal expense tracker with a running balance")]
#[command(version)]
pub struct Cli {
    /// Database file path
    #[arg(short, long, default_value = "satang.db")]
    pub database: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record an income
    Income {
        /// Amount received (e.g., "50.00" or "50")
        amount: String,
    },

    /// Record an expense
    Expense {
        /// Amount spent (e.g., "50.00" or "50")
        amount: String,
    },

    /// List all recorded transactions
    List,

    /// Show the current balance
    Balance,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut store = LedgerStore::open(&self.database).await?;

        match self.command {
            Commands::Income { amount } => {
                let result = store.add_transaction(&amount, Kind::Income).await?;
                print_recorded(&result, store.balance());
            }

            Commands::Expense { amount } => {
                let result = store.add_transaction(&amount, Kind::Expense).await?;
                print_recorded(&result, store.balance());
            }

            Commands::List => {
                let records = store.records();
                if records.is_empty() {
                    println!("No transactions recorded.");
                } else {
                    println!("{:<12} {:<8} {:>10}", "DATE", "KIND", "AMOUNT");
                    println!("{}", "-".repeat(32));
                    for record in records {
                        println!(
                            "{:<12} {:<8} {:>10}",
                            record.date,
                            record.kind,
                            format_satang(record.amount)
                        );
                    }
                    println!("{}", "-".repeat(32));
                    println!("Balance: {}", format_satang(store.balance()));
                }
            }

            Commands::Balance => {
                println!("Balance: {}", format_satang(store.balance()));
            }
        }

        Ok(())
    }
}

fn print_recorded(result: &AddResult, balance: Satang) {
    println!(
        "Recorded {}: {} ({})",
        result.record.kind,
        format_satang(result.record.amount),
        result.record.id
    );
    if !result.persisted {
        eprintln!("Warning: could not save to storage; this record will be lost on exit.");
    }
    println!("Balance: {}", format_satang(balance));
}
