//! Dark Pool - Binary Entry Point
//!
//! Runs a small scripted session against an in-memory ledger: three makers
//! rest AtoB orders, one taker drains them with a single BtoA order.
//!
//! Logging is controlled with `RUST_LOG` (default `info`).

use std::error::Error;

use dark_pool::config::EngineConfig;
use dark_pool::registry::PoolRegistry;
use dark_pool::token::{InMemoryLedger, TokenService};
use dark_pool::types::amount::{from_units, to_units};
use dark_pool::types::{Address, Amount, Direction};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn units(s: &str) -> Result<Amount, Box<dyn Error>> {
    to_units(s).ok_or_else(|| format!("invalid amount: {s}").into())
}

fn show(value: Amount) -> String {
    from_units(value).unwrap_or_else(|| value.to_string())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = EngineConfig::from_env()?;
    tracing::info!(?config, "starting dark pool demo");

    let asset_a = Address::from_label("token-a");
    let asset_b = Address::from_label("token-b");
    let owner = Address::from_label("owner");

    let mut ledger = InMemoryLedger::new();
    let mut registry = PoolRegistry::new(Address::from_label("registry"), config);
    let pool_id = registry.create_pool(owner, asset_a, asset_b);
    let pool = registry.pool_mut(&pool_id)?;

    println!("===========================================");
    println!("  Dark Pool");
    println!("===========================================");
    println!("Pool {pool_id}");
    println!("  asset A: {asset_a}");
    println!("  asset B: {asset_b}");
    println!();

    // Makers: 0.1 A for 300 B each
    let makers: Vec<Address> = ["maker-1", "maker-2", "maker-3"]
        .iter()
        .map(|label| Address::from_label(label))
        .collect();
    for maker in &makers {
        let amount_in = units("0.1")?;
        ledger.mint(&asset_a, maker, amount_in)?;
        ledger.approve(&asset_a, maker, &pool_id, amount_in)?;
        let receipt = pool.submit_swap_request(&mut ledger, *maker, amount_in, units("300")?, Direction::AtoB)?;
        println!("Order {} from {maker}: {:?}", receipt.order_id, receipt.outcome);
    }
    println!(
        "Pending: AtoB={} BtoA={}",
        pool.get_pending_orders_count(Direction::AtoB),
        pool.get_pending_orders_count(Direction::BtoA)
    );
    println!();

    // Taker: 1000 B for 0.3 A
    let taker = Address::from_label("taker");
    let amount_in = units("1000")?;
    ledger.mint(&asset_b, &taker, amount_in)?;
    ledger.approve(&asset_b, &taker, &pool_id, amount_in)?;
    let receipt = pool.submit_swap_request(&mut ledger, taker, amount_in, units("0.3")?, Direction::BtoA)?;

    println!("Order {} from {taker}: {} fills", receipt.order_id, receipt.fill_count());
    for record in &receipt.records {
        println!(
            "  fulfilled #{} {:?}: in {} out {}",
            record.order_id,
            record.direction(),
            show(record.amount_in),
            show(record.amount_out)
        );
    }
    println!("  outcome: {:?}", receipt.outcome);
    println!();

    println!("Balances");
    println!("  taker A: {}", show(ledger.balance_of(&asset_a, &taker)));
    for maker in &makers {
        println!("  {maker} B: {}", show(ledger.balance_of(&asset_b, maker)));
    }
    println!(
        "Pending: AtoB={} BtoA={}",
        pool.get_pending_orders_count(Direction::AtoB),
        pool.get_pending_orders_count(Direction::BtoA)
    );
    println!("State root: 0x{}", hex::encode(pool.state_root()));

    Ok(())
}
