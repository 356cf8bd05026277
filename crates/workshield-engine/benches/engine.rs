//! Workshield engine benchmarks
//!
//! Covers the hot mutating paths: policy purchase (validation + ID
//! allocation + ledger credit) and the full submit/approve claim cycle.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal_macros::dec;
use tokio::runtime::Runtime;
use workshield_common::{Caller, Identity, MILLIS_PER_DAY};
use workshield_engine::{EngineConfig, InsuranceEngine};

fn bench_purchase(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let engine = InsuranceEngine::new(EngineConfig::new(Identity::new("owner")));
    let worker = Caller::from("worker-1");

    c.bench_function("purchase_policy", |b| {
        b.iter(|| {
            rt.block_on(engine.purchase_policy(
                black_box(&worker),
                dec!(1000),
                30 * MILLIS_PER_DAY,
                "construction",
                dec!(20),
            ))
            .unwrap()
        });
    });
}

fn bench_claim_cycle(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let engine = InsuranceEngine::new(EngineConfig::new(Identity::new("owner")));
    let worker = Caller::from("worker-1");
    let owner = Caller::from("owner");

    let policy_id = rt
        .block_on(engine.purchase_policy(
            &worker,
            dec!(1000),
            365 * MILLIS_PER_DAY,
            "construction",
            dec!(20),
        ))
        .unwrap();

    // Each cycle credits a fresh premium so the pool never runs dry,
    // however many iterations criterion decides to run.
    c.bench_function("claim_lifecycle", |b| {
        b.iter(|| {
            rt.block_on(async {
                engine
                    .purchase_policy(&worker, dec!(1000), 365 * MILLIS_PER_DAY, "top-up", dec!(20))
                    .await
                    .unwrap();
                let claim_id = engine
                    .submit_claim(black_box(&worker), policy_id, dec!(1), "loss")
                    .await
                    .unwrap();
                engine.decide_claim(&owner, claim_id, true).await.unwrap();
            })
        });
    });
}

criterion_group!(benches, bench_purchase, bench_claim_cycle);
criterion_main!(benches);
