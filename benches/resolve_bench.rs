//! Benchmark for attack resolution.
//!
//! Run with: cargo bench --bench resolve_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexfire::combat::{
    compute_tn, resolve_attack, Attacker, EngagementContext, MovementMode, Target, Weapon,
};
use hexfire::dice::SeededRollSource;

fn benchmark_compute_tn(c: &mut Criterion) {
    let attacker = Attacker::regular().moving(MovementMode::Ran);
    let target = Target::standing().moved(6);
    let weapon = Weapon::large_laser();
    let mut context = EngagementContext::at_range(8);
    context.light_woods = 2;

    c.bench_function("compute_tn", |b| {
        b.iter(|| {
            compute_tn(
                black_box(&attacker),
                black_box(&target),
                black_box(&weapon),
                black_box(&context),
            )
        })
    });
}

fn benchmark_resolve_attack(c: &mut Criterion) {
    let attacker = Attacker::veteran();
    let target = Target::standing();
    let context = EngagementContext::at_range(8);

    let mut group = c.benchmark_group("resolve_attack");
    for weapon in [Weapon::medium_laser(), Weapon::lrm(20)] {
        let mut rolls = SeededRollSource::new(42);
        group.bench_function(weapon.name.clone(), |b| {
            b.iter(|| resolve_attack(&attacker, &target, black_box(&weapon), &context, &mut rolls))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_compute_tn, benchmark_resolve_attack);
criterion_main!(benches);
