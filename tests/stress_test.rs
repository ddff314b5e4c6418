//! Stress tests for the dark pool.
//!
//! These tests verify:
//! 1. Custody always equals the escrow owed to resting orders
//! 2. No resting order ever has `amount_in == 0`
//! 3. Determinism is preserved across runs
//! 4. Rejected submissions leave the book untouched
//!
//! ## Running Stress Tests
//!
//! ```bash
//! # Run all stress tests (release mode recommended)
//! cargo test --release --test stress_test -- --nocapture
//!
//! # Run specific test
//! cargo test --release --test stress_test stress_random_session -- --nocapture
//! ```

use std::time::Instant;

use dark_pool::config::{EngineConfig, ZeroAskPolicy};
use dark_pool::token::{InMemoryLedger, TokenService};
use dark_pool::types::{Address, Amount, Direction, Outcome};
use dark_pool::Pool;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Number of submissions for the main stress test
const STRESS_ORDER_COUNT: usize = 50_000;

/// Number of distinct traders
const TRADER_COUNT: usize = 64;

/// Invariants are checked every this many submissions
const CHECK_INTERVAL: usize = 1_000;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct Request {
    trader: usize,
    direction: Direction,
    amount_in: Amount,
    amount_out: Amount,
}

/// Generate deterministic requests for stress testing.
///
/// Uses a seeded RNG for reproducibility. Same seed = same requests.
fn generate_deterministic_requests(count: usize, seed: u64) -> Vec<Request> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..count)
        .map(|_| Request {
            trader: rng.gen_range(0..TRADER_COUNT),
            direction: Direction::from_flag(rng.gen_bool(0.5)),
            amount_in: rng.gen_range(1..=1_000),
            amount_out: rng.gen_range(1..=1_000),
        })
        .collect()
}

struct Session {
    pool: Pool,
    ledger: InMemoryLedger,
    traders: Vec<Address>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Stats {
    accepted: usize,
    rejected: usize,
    fills: usize,
    refunds: usize,
}

impl Session {
    fn new(policy: ZeroAskPolicy, capacity: usize) -> Self {
        let config = EngineConfig {
            order_capacity: capacity,
            zero_ask_policy: policy,
        };
        let pool = Pool::new(
            Address::from_label("pool"),
            Address::from_label("token-a"),
            Address::from_label("token-b"),
            &config,
        );
        let traders = (0..TRADER_COUNT)
            .map(|i| Address::from_label(&format!("trader-{i}")))
            .collect();

        Self {
            pool,
            ledger: InMemoryLedger::new(),
            traders,
        }
    }

    fn run(&mut self, request: Request, stats: &mut Stats) {
        let trader = self.traders[request.trader];
        let asset = self.pool.offered_asset(request.direction);
        let spender = self.pool.address();
        self.ledger.mint(&asset, &trader, request.amount_in).unwrap();
        self.ledger
            .approve(&asset, &trader, &spender, request.amount_in)
            .unwrap();

        match self.pool.submit_swap_request(
            &mut self.ledger,
            trader,
            request.amount_in,
            request.amount_out,
            request.direction,
        ) {
            Ok(receipt) => {
                stats.accepted += 1;
                stats.fills += receipt.fill_count();
                if matches!(receipt.outcome, Outcome::Refunded { .. }) {
                    stats.refunds += 1;
                }
            }
            Err(_) => stats.rejected += 1,
        }
    }

    fn check_invariants(&self) {
        let custody = self.pool.address();
        for direction in Direction::ALL {
            let asset = self.pool.offered_asset(direction);
            assert_eq!(
                self.ledger.balance_of(&asset, &custody),
                self.pool.escrowed(direction),
                "custody of {asset} must equal escrow of {direction:?}"
            );
            assert!(self.pool.pending_orders(direction).all(|o| o.amount_in > 0));

            let held: Amount = self
                .traders
                .iter()
                .map(|t| self.ledger.balance_of(&asset, t))
                .sum::<Amount>()
                + self.ledger.balance_of(&asset, &custody);
            assert_eq!(held, self.ledger.total_supply(&asset));
        }
    }
}

/// Run a deterministic request sequence and return the final state root.
fn run_deterministic_sequence(seed: u64, count: usize, policy: ZeroAskPolicy) -> ([u8; 32], Stats) {
    let requests = generate_deterministic_requests(count, seed);
    let mut session = Session::new(policy, count);
    let mut stats = Stats::default();

    for request in requests {
        session.run(request, &mut stats);
    }

    (session.pool.state_root(), stats)
}

// ============================================================================
// STRESS TESTS
// ============================================================================

/// Main stress test: random submissions under both zero-ask policies.
///
/// # Verification
/// - No panics during execution
/// - Custody, escrow and supply stay consistent throughout
/// - Some matching occurred
#[test]
fn stress_random_session() {
    for policy in [ZeroAskPolicy::Preserve, ZeroAskPolicy::Refund] {
        println!("\n=== STRESS TEST: {STRESS_ORDER_COUNT} submissions ({policy:?}) ===\n");

        let requests = generate_deterministic_requests(STRESS_ORDER_COUNT, 42);
        let mut session = Session::new(policy, STRESS_ORDER_COUNT);
        let mut stats = Stats::default();

        let start = Instant::now();
        for (i, request) in requests.into_iter().enumerate() {
            session.run(request, &mut stats);
            if i % CHECK_INTERVAL == 0 {
                session.check_invariants();
            }
        }
        let elapsed = start.elapsed();
        session.check_invariants();

        let throughput = STRESS_ORDER_COUNT as f64 / elapsed.as_secs_f64();

        println!("  Accepted:          {:>12}", stats.accepted);
        println!("  Rejected:          {:>12}", stats.rejected);
        println!("  Fills:             {:>12}", stats.fills);
        println!("  Refunds:           {:>12}", stats.refunds);
        println!("  Pending AtoB:      {:>12}", session.pool.get_pending_orders_count(Direction::AtoB));
        println!("  Pending BtoA:      {:>12}", session.pool.get_pending_orders_count(Direction::BtoA));
        println!("  Elapsed time:      {:>12.2?}", elapsed);
        println!("  Throughput:        {:>12.0} submissions/sec", throughput);
        println!("  State root:        {}", hex::encode(session.pool.state_root()));

        assert_eq!(stats.accepted + stats.rejected, STRESS_ORDER_COUNT);
        assert!(stats.fills > 0, "Expected some fills to occur");
        if policy == ZeroAskPolicy::Refund {
            assert_eq!(stats.rejected, 0, "Refund policy never overshoots an ask");
        }
    }
}

/// Verify determinism: same sequence produces identical state root.
#[test]
fn verify_determinism() {
    const TEST_COUNT: usize = 5_000;
    const SEED: u64 = 12345;

    for policy in [ZeroAskPolicy::Preserve, ZeroAskPolicy::Refund] {
        let (root1, stats1) = run_deterministic_sequence(SEED, TEST_COUNT, policy);
        let (root2, stats2) = run_deterministic_sequence(SEED, TEST_COUNT, policy);

        println!("  {policy:?} run 1 state root: {}", hex::encode(root1));
        println!("  {policy:?} run 2 state root: {}", hex::encode(root2));

        assert_eq!(root1, root2, "State roots must match for determinism");
        assert_eq!(stats1, stats2);

        let (root3, _) = run_deterministic_sequence(SEED + 1, TEST_COUNT, policy);
        assert_ne!(root1, root3, "Different seeds should produce different roots");
    }
}

/// Rejected submissions must not touch resting orders.
#[test]
fn stress_rejections_leave_book_unchanged() {
    const ORDER_COUNT: usize = 2_000;

    let requests = generate_deterministic_requests(ORDER_COUNT, 7);
    let mut session = Session::new(ZeroAskPolicy::Preserve, ORDER_COUNT);
    let mut stats = Stats::default();

    for request in requests {
        let before = session.pool.state_root();
        let rejected = stats.rejected;

        session.run(request, &mut stats);

        if stats.rejected > rejected {
            assert_eq!(session.pool.state_root(), before);
        }
    }

    println!("  Rejected:          {:>12}", stats.rejected);
    session.check_invariants();
}
