use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use made_hand::core::{evaluate, parse_cards, Card, CardIter, Deck};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn evaluate_known_hands(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_known");
    for (name, text) in [
        ("high_card", "2h 5d 9c Js Ah 3c 7d"),
        ("two_pair", "Ah Ad Kh Kd Qh Qd Jh"),
        ("wheel", "Ah 2d 3c 4s 5h 9d Jc"),
        ("flush", "2h 5h 7h 9h Jh 3c 4d"),
        ("royal_flush", "Ts Js Qs Ks As 2h 2d"),
    ] {
        let cards = parse_cards(text).unwrap();
        group.bench_with_input(BenchmarkId::new("seven", name), &cards, |b, cards| {
            b.iter(|| evaluate(cards))
        });
    }
    group.finish();
}

fn evaluate_random_hands(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_random");
    let mut rng = StdRng::seed_from_u64(42);
    for size in [5, 6, 7] {
        let hands: Vec<Vec<Card>> = (0..1000)
            .map(|_| Deck::shuffled(&mut rng).into_iter().take(size).collect())
            .collect();
        group.bench_with_input(BenchmarkId::new("cards", size), &hands, |b, hands| {
            b.iter(|| {
                for hand in hands {
                    let _ = evaluate(hand);
                }
            })
        });
    }
    group.finish();
}

fn evaluate_enumerated(c: &mut Criterion) {
    let deck: Vec<Card> = Deck::default().into_iter().collect();
    c.bench_function("evaluate_first_20_cards_choose_5", |b| {
        b.iter(|| CardIter::new(&deck[..20], 5).filter_map(|h| evaluate(&h).ok()).count())
    });
}

criterion_group!(
    benches,
    evaluate_known_hands,
    evaluate_random_hands,
    evaluate_enumerated
);
criterion_main!(benches);
