//! Benchmarks for the dark pool.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- match_only
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use dark_pool::config::{EngineConfig, ZeroAskPolicy};
use dark_pool::engine::MatchingEngine;
use dark_pool::orderbook::OrderBook;
use dark_pool::token::{InMemoryLedger, TokenService};
use dark_pool::types::{Address, Amount, Direction, Order};
use dark_pool::Pool;

// ============================================================================
// HELPER FUNCTIONS - Deterministic order generation
// ============================================================================

/// Book with `count` resting AtoB orders of `(amount_in, amount_out)` each
fn populate_book(count: usize, amount_in: Amount, amount_out: Amount) -> OrderBook {
    let mut book = OrderBook::with_capacity(count + 1);
    let maker = Address::from_label("maker");
    for _ in 0..count {
        let id = book.next_order_id();
        book.enqueue(Order::new(id, maker, Direction::AtoB, amount_in, amount_out));
    }
    book
}

fn incoming(book: &OrderBook, amount_in: Amount, amount_out: Amount) -> Order {
    Order::new(
        book.peek_next_order_id(),
        Address::from_label("taker"),
        Direction::BtoA,
        amount_in,
        amount_out,
    )
}

struct Session {
    pool: Pool,
    ledger: InMemoryLedger,
    traders: Vec<Address>,
}

impl Session {
    fn new(capacity: usize, policy: ZeroAskPolicy) -> Self {
        let config = EngineConfig {
            order_capacity: capacity,
            zero_ask_policy: policy,
        };
        Self {
            pool: Pool::new(
                Address::from_label("pool"),
                Address::from_label("token-a"),
                Address::from_label("token-b"),
                &config,
            ),
            ledger: InMemoryLedger::new(),
            traders: (0..64).map(|i| Address::from_label(&format!("trader-{i}"))).collect(),
        }
    }

    fn submit(&mut self, trader: usize, direction: Direction, amount_in: Amount, amount_out: Amount) -> bool {
        let trader = self.traders[trader % self.traders.len()];
        let asset = self.pool.offered_asset(direction);
        let spender = self.pool.address();
        // Funding cannot fail for in-range amounts
        let _ = self.ledger.mint(&asset, &trader, amount_in);
        let _ = self.ledger.approve(&asset, &trader, &spender, amount_in);
        self.pool
            .submit_swap_request(&mut self.ledger, trader, amount_in, amount_out, direction)
            .is_ok()
    }
}

/// Deterministic (trader, direction, amount_in, amount_out) batch
fn generate_request_batch(count: usize, seed: u64) -> Vec<(usize, Direction, Amount, Amount)> {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            (
                rng.gen_range(0..64),
                Direction::from_flag(rng.gen_bool(0.5)),
                rng.gen_range(1..=1_000),
                rng.gen_range(1..=1_000),
            )
        })
        .collect()
}

// ============================================================================
// BENCHMARK: Pure match loop
// ============================================================================

fn bench_match_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_only");
    group.measurement_time(Duration::from_secs(5));

    let engine = MatchingEngine::new();

    // Head is incompatible: loop ends on the first comparison
    group.bench_function("blocked_head_1k_book", |b| {
        let book = populate_book(1_000, 10, 1_000);
        b.iter(|| black_box(engine.match_order(&book, incoming(&book, 10, 10))))
    });

    for drained in [1usize, 10, 100] {
        group.throughput(Throughput::Elements(drained as u64));
        group.bench_with_input(BenchmarkId::new("drain", drained), &drained, |b, &n| {
            let book = populate_book(1_000, 1, 10);
            b.iter(|| black_box(engine.match_order(&book, incoming(&book, 10 * n as Amount, n as Amount))))
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Full submission (escrow, match, settle, commit)
// ============================================================================

fn bench_submission(c: &mut Criterion) {
    let mut group = c.benchmark_group("submission");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("rest_on_empty_book", |b| {
        b.iter_batched(
            || Session::new(16, ZeroAskPolicy::Preserve),
            |mut session| black_box(session.submit(0, Direction::AtoB, 100, 90)),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("drain_10_resting", |b| {
        b.iter_batched(
            || {
                let mut session = Session::new(32, ZeroAskPolicy::Preserve);
                for i in 0..10 {
                    session.submit(i, Direction::AtoB, 1, 10);
                }
                session
            },
            |mut session| black_box(session.submit(63, Direction::BtoA, 100, 10)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Throughput
// ============================================================================

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    for batch_size in [1_000usize, 10_000] {
        group.throughput(Throughput::Elements(batch_size as u64));

        for policy in [ZeroAskPolicy::Preserve, ZeroAskPolicy::Refund] {
            let id = BenchmarkId::new(format!("{policy:?}").to_lowercase(), batch_size);
            group.bench_with_input(id, &batch_size, |b, &size| {
                let requests = generate_request_batch(size, 42);

                b.iter_batched(
                    || Session::new(size, policy),
                    |mut session| {
                        for &(trader, direction, amount_in, amount_out) in &requests {
                            black_box(session.submit(trader, direction, amount_in, amount_out));
                        }
                        session.pool.get_pending_orders_count(Direction::AtoB)
                    },
                    BatchSize::LargeInput,
                );
            });
        }
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: State root
// ============================================================================

fn bench_state_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("state_root");

    for size in [100usize, 10_000] {
        group.bench_with_input(BenchmarkId::new("orders", size), &size, |b, &n| {
            let book = populate_book(n, 1, 10);
            b.iter(|| black_box(book.compute_state_root()))
        });
    }

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(
    benches,
    bench_match_only,
    bench_submission,
    bench_throughput,
    bench_state_root
);

criterion_main!(benches);
