use chipstack::cards::Deck;
use chipstack::chips::Distribution;
use chipstack::chips::Holding;
use chipstack::gameplay::Action;
use chipstack::gameplay::Game;
use chipstack::gameplay::Player;
use chipstack::gameplay::Rules;

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
        selecting_small_wager,
        selecting_large_wager,
        playing_betting_round,
}

fn selecting_small_wager(c: &mut criterion::Criterion) {
    let holding = Holding::from([3, 5, 7, 9]);
    c.bench_function("select chips for a 95 wager", |b| {
        b.iter(|| Distribution::from((criterion::black_box(95), &holding)).solve().ok())
    });
}

fn selecting_large_wager(c: &mut criterion::Criterion) {
    let holding = Holding::default();
    c.bench_function("select chips for a 10000 wager", |b| {
        b.iter(|| holding.select(criterion::black_box(10_000)).ok())
    });
}

fn playing_betting_round(c: &mut criterion::Criterion) {
    let script = [
        Action::Start,
        Action::High,
        Action::Low,
        Action::Blinds,
        Action::Deal,
        Action::Call(2),
        Action::Raise(0, 30),
        Action::Call(1),
        Action::Call(2),
        Action::Deal,
    ];
    c.bench_function("play a scripted 3-handed round", |b| {
        b.iter(|| {
            let players = (0..3).map(|i| Player::new(format!("P{}", i))).collect();
            let mut game = Game::new(players, Deck::seeded(0), Rules::default())
                .expect("three players");
            for action in script {
                let _ = game.apply(action);
            }
            game
        })
    });
}
