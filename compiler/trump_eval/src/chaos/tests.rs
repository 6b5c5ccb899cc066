use super::*;

#[test]
fn none_never_fires() {
    let mut chaos = Chaos::seeded(7, ChaosSettings::NONE);
    for _ in 0..1_000 {
        assert!(!chaos.flip_condition());
        assert!(!chaos.covfefe());
        assert!(!chaos.swap_after_sort());
    }
}

#[test]
fn always_always_fires() {
    let mut chaos = Chaos::seeded(7, ChaosSettings::ALWAYS);
    for _ in 0..1_000 {
        assert!(chaos.flip_condition());
        assert!(chaos.covfefe());
        assert!(chaos.swap_after_sort());
    }
}

#[test]
fn default_rate_is_roughly_respected() {
    let mut chaos = Chaos::seeded(45, ChaosSettings::DEFAULT);
    let flips = (0..10_000).filter(|_| chaos.flip_condition()).count();
    // 5% of 10,000, with generous slack.
    assert!((300..=700).contains(&flips), "flipped {flips} times");
}

#[test]
fn same_seed_same_decisions() {
    let mut a = Chaos::seeded(2016, ChaosSettings::DEFAULT);
    let mut b = Chaos::seeded(2016, ChaosSettings::DEFAULT);
    for _ in 0..100 {
        assert_eq!(a.covfefe(), b.covfefe());
        assert_eq!(a.index(10), b.index(10));
    }
}

#[test]
fn pick_from_empty_is_none() {
    let mut chaos = Chaos::seeded(1, ChaosSettings::NONE);
    let empty: [&str; 0] = [];
    assert_eq!(chaos.pick(&empty), None);
    assert_eq!(chaos.pick(&["only"]), Some(&"only"));
}
