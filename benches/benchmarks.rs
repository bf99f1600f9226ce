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
        evaluating_river_hand,
        dealing_fresh_deck,
        running_preflop_trial,
        running_river_trial,
        simulating_pooled_preflop,
}

fn evaluating_river_hand(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 7-card Hand", |b| {
        let ref mut rng = SmallRng::seed_from_u64(0);
        b.iter(|| {
            let cards = Deck::new().deal(7, rng);
            Evaluator::try_from(cards.as_slice()).map(|e| e.find_ranking())
        })
    });
}

fn dealing_fresh_deck(c: &mut criterion::Criterion) {
    c.bench_function("deal 5 cards from a fresh Deck", |b| {
        let ref mut rng = SmallRng::seed_from_u64(0);
        b.iter(|| Deck::new().deal(5, rng))
    });
}

fn running_preflop_trial(c: &mut criterion::Criterion) {
    let table = table("");
    let mut index = 0;
    c.bench_function("run one preflop Trial with 3 players", |b| {
        b.iter(|| {
            index += 1;
            table.trial(0, index).run()
        })
    });
}

fn running_river_trial(c: &mut criterion::Criterion) {
    let table = table("Qs Jh 2c 8d 8s");
    c.bench_function("run one river Trial with 3 players", |b| {
        b.iter(|| table.trial(0, 0).run())
    });
}

fn simulating_pooled_preflop(c: &mut criterion::Criterion) {
    let table = table("");
    let pool = Pool::new(num_cpus::get());
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    c.bench_function("simulate 10k preflop Trials on a worker Pool", |b| {
        b.iter(|| runtime.block_on(pool.simulate(&table, 10_000, 0)))
    });
}

fn table(board: &str) -> Table {
    Config {
        workers: 1,
        trials: 1,
        holes: Config::default_holes(),
        board: Board::try_from(board).expect("valid board"),
        seed: 0,
    }
    .table()
    .expect("legal table")
}

use holdem_equity::cards::Board;
use holdem_equity::cards::Deck;
use holdem_equity::config::Config;
use holdem_equity::evaluation::Evaluator;
use holdem_equity::simulation::Pool;
use holdem_equity::simulation::Table;
use rand::SeedableRng;
use rand::rngs::SmallRng;
