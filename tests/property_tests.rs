//! Property tests for judging and session bookkeeping.

use country_guesser::{
    Dataset, GameMode, GameSession, Phase, RandomSource, ScriptedRng, SessionConfig,
};
use proptest::prelude::*;

const COUNTRIES: usize = 29;
const METRICS: usize = 8;

fn pair_draws(left: usize, right: usize) -> Vec<usize> {
    vec![left, if right == 0 { left - 1 } else { right - 1 }]
}

/// Practice session on metric `metric`, dealt countries `left` and `right`.
fn dealt(metric: usize, left: usize, right: usize) -> GameSession<ScriptedRng> {
    let dataset = Dataset::standard();
    let metric_id = dataset.metrics()[metric].id.clone();
    let config = SessionConfig::default()
        .with_mode(GameMode::Practice)
        .with_initial_metric(metric_id);
    let rng = ScriptedRng::new(pair_draws(left, right));
    let mut session = GameSession::with_rng(dataset, config, rng).unwrap();
    session.start(GameMode::Practice);
    session
}

#[derive(Clone, Copy, Debug)]
enum Op {
    Start(GameMode),
    Guess(usize),
    NextRound,
    ChangeMetric(usize),
    PlayAgain,
    ToggleMode,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => prop_oneof![Just(GameMode::Random), Just(GameMode::Practice)].prop_map(Op::Start),
        6 => (0usize..3).prop_map(Op::Guess),
        4 => Just(Op::NextRound),
        1 => (0usize..METRICS + 1).prop_map(Op::ChangeMetric),
        3 => Just(Op::PlayAgain),
        1 => Just(Op::ToggleMode),
    ]
}

proptest! {
    #[test]
    fn prop_exactly_one_side_wins_distinct_values(
        metric in 0usize..METRICS,
        left in 0usize..COUNTRIES,
        right in 0usize..COUNTRIES,
    ) {
        prop_assume!(left != right);

        let mut pick_left = dealt(metric, left, right);
        let mut pick_right = dealt(metric, left, right);

        let pair = pick_left.state().pair.unwrap();
        prop_assert_eq!(pair.left().index(), left);
        prop_assert_eq!(pair.right().index(), right);

        let a = pick_left.guess(0).unwrap();
        let b = pick_right.guess(1).unwrap();

        let m = &pick_left.dataset().metrics()[metric];
        let countries = pick_left.dataset().countries();
        let lv = m.value(&countries[left]);
        let rv = m.value(&countries[right]);

        if lv == rv {
            prop_assert!(!a.is_correct && !b.is_correct);
        } else {
            prop_assert!(a.is_correct != b.is_correct);
            prop_assert_eq!(a.is_correct, m.direction.beats(lv, rv));
        }
    }

    #[test]
    fn prop_session_invariants(
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 1..200),
    ) {
        let dataset = Dataset::standard();
        let metric_ids: Vec<String> = dataset.metrics().iter().map(|m| m.id.clone()).collect();
        let config = SessionConfig::default().with_seed(seed);
        let mut session = GameSession::new(dataset, config).unwrap();
        session.start(GameMode::Random);

        let mut best_score = 0u32;
        for op in ops {
            let before = session.state().clone();
            let mut resets = false;

            match op {
                Op::Start(mode) => {
                    session.start(mode);
                    resets = true;
                }
                Op::Guess(choice) => {
                    let outcome = session.guess(choice);
                    if let Some(outcome) = outcome {
                        let wrong_on_final = !outcome.is_correct && before.round == 10;
                        prop_assert_eq!(outcome.game_over, wrong_on_final);
                        prop_assert_eq!(session.state().is_game_over, wrong_on_final);
                    } else {
                        prop_assert_eq!(session.state(), &before);
                    }
                }
                Op::NextRound => {
                    session.next_round();
                }
                Op::ChangeMetric(i) => {
                    let id = metric_ids.get(i).map_or("unknown", String::as_str);
                    resets = session.change_metric(id);
                }
                Op::PlayAgain => {
                    resets = before.phase == Phase::GameOver;
                    session.play_again();
                }
                Op::ToggleMode => {
                    session.toggle_mode();
                    resets = true;
                }
            }

            let after = session.state();
            if resets {
                prop_assert_eq!(after.round, 1);
                prop_assert_eq!(after.score, 0);
                prop_assert!(!after.is_game_over);
            } else {
                prop_assert!(after.round >= before.round);
            }
            prop_assert!((1..=10).contains(&after.round));

            if let Some(pair) = after.pair {
                prop_assert_ne!(pair.left(), pair.right());
            }

            best_score = best_score.max(after.score);
            prop_assert!(after.high_score >= before.high_score);
            prop_assert_eq!(after.high_score, best_score);
        }
    }

    #[test]
    fn prop_pairs_always_distinct(draws in prop::collection::vec(any::<usize>(), 0..64)) {
        let rng = ScriptedRng::new(draws);
        let mut session =
            GameSession::with_rng(Dataset::standard(), SessionConfig::default(), rng).unwrap();
        session.start(GameMode::Random);
        for _ in 0..8 {
            let pair = session.state().pair.unwrap();
            prop_assert_ne!(pair.left(), pair.right());
            session.guess(0);
            session.play_again();
        }
    }

    #[test]
    fn prop_partial_shuffle_is_permutation(
        draws in prop::collection::vec(any::<usize>(), 0..8),
        len in 2usize..40,
    ) {
        let mut rng = ScriptedRng::new(draws);
        let mut items: Vec<usize> = (0..len).collect();
        rng.partial_shuffle(&mut items, 2);
        prop_assert_ne!(items[0], items[1]);
        items.sort_unstable();
        prop_assert_eq!(items, (0..len).collect::<Vec<_>>());
    }
}
