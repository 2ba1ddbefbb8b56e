criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        building_opening_notebook,
        recording_random_suggestion,
        replaying_full_game,
        undoing_first_move,
}

fn building_opening_notebook(c: &mut criterion::Criterion) {
    let deal = Deal::random();
    c.bench_function("build a Notebook from the opening hand", |b| {
        b.iter(|| Ledger::replay(deal.setup().clone(), deal.opening()))
    });
}

fn recording_random_suggestion(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let deal = Deal::random();
    let ledger = Ledger::replay(deal.setup().clone(), deal.opening()).expect("truthful moves");
    c.bench_function("record a random Suggestion", |b| {
        b.iter(|| ledger.clone().record(deal.suggest(rng)))
    });
}

fn replaying_full_game(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let deal = Deal::random();
    let moves = deal.moves(rng, 100).expect("truthful moves");
    c.bench_function("replay a 100-move game", |b| {
        b.iter(|| Ledger::replay(deal.setup().clone(), moves.iter().copied()))
    });
}

fn undoing_first_move(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let deal = Deal::random();
    let moves = deal.moves(rng, 100).expect("truthful moves");
    let ledger = Ledger::replay(deal.setup().clone(), moves).expect("truthful moves");
    c.bench_function("undo the first move of a 100-move game", |b| {
        b.iter(|| ledger.clone().undo(0))
    });
}

use cluebot::deal::Deal;
use cluebot::ledger::Ledger;
use cluebot::Arbitrary;
use rand::rngs::SmallRng;
use rand::SeedableRng;
