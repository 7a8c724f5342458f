//! Turn state machine and stratagem resolution, end to end.
//!
//! These tests drive the public engine API the way a UI or test harness
//! would: `execute`, `advance_turn`, `get_game_status`.

use std::sync::Arc;

use tianji::board::{Position, Trigram};
use tianji::core::{EngineConfig, ErrorKind, PlayerId, VictoryConfig};
use tianji::decision::{play_turn, score, ScoringBot};
use tianji::engine::{Action, ActionEngine, GameOutcome, GamePhase, VictoryCondition};
use tianji::resources::{Resource, ResourceAmounts};
use tianji::strategies::{
    Category, Effect, Strategy, StrategyCatalog, StrategyId, StrategyResolver, StrategyTarget,
    Subject,
};

fn started(config: EngineConfig) -> ActionEngine {
    let mut engine = ActionEngine::with_standard_catalog(config).unwrap();
    assert!(engine.start().success);
    engine
}

fn custom(config: EngineConfig, strategies: Vec<Strategy>) -> ActionEngine {
    let mut engine = ActionEngine::new(config, Arc::new(StrategyCatalog::new(strategies))).unwrap();
    engine.start();
    engine
}

fn meditate_strategy() -> Strategy {
    Strategy::new(StrategyId::new(1), Category::Victory, "Meditate").with_effect(Effect::Resource {
        subject: Subject::SelfPlayer,
        resource: Resource::Qi,
        delta: 2,
    })
}

/// P1 at Qi 1 invokes a free, certain +2 Qi strategy: 3 after one, 10 after five.
#[test]
fn test_meditate_strategy_scenario() {
    let config = EngineConfig::new(["P1", "P2"])
        .with_starting(ResourceAmounts::new(1, 0, 0))
        .with_actions_per_turn(10);
    let mut engine = custom(config, vec![meditate_strategy()]);
    let p1 = PlayerId::new(0);

    assert!(engine.execute(Action::invoke(StrategyId::new(1))).success);
    assert_eq!(engine.state().ledger.get(p1, Resource::Qi), 3);

    for _ in 0..4 {
        assert!(engine.execute(Action::invoke(StrategyId::new(1))).success);
        assert!(engine.state().ledger.get(p1, Resource::Qi) <= 10);
    }
    assert_eq!(engine.state().ledger.get(p1, Resource::Qi), 10);
}

/// `advance_turn` player-count times bumps the round by one and returns to the same seat.
#[test]
fn test_turn_wrap_invariant() {
    for players in 2..=8usize {
        let names: Vec<String> = (0..players).map(|n| format!("P{}", n)).collect();
        let mut engine = started(EngineConfig::new(names));

        for _ in 0..3 {
            let round = engine.state().round;
            let seat = engine.current_player();
            for _ in 0..players {
                assert!(engine.advance_turn().success);
            }
            assert_eq!(engine.state().round, round + 1);
            assert_eq!(engine.current_player(), seat);
        }
    }
}

/// Simultaneous winners: the lowest seat wins, every time.
#[test]
fn test_victory_first_match() {
    let config = EngineConfig::new(["A", "B", "C"]);
    let mut engine = started(config);
    {
        let ledger = &mut engine.state_mut().ledger;
        ledger.adjust(PlayerId::new(2), Resource::Insight, 20);
        ledger.adjust(PlayerId::new(1), Resource::Sincerity, 15);
    }

    for _ in 0..3 {
        let victory = engine.check_victory_conditions().unwrap();
        assert_eq!(victory.player, PlayerId::new(1));
        assert_eq!(victory.condition, VictoryCondition::Sincerity(15));
    }

    engine.state_mut().ledger.adjust(PlayerId::new(0), Resource::Insight, 20);
    assert_eq!(
        engine.check_victory_conditions().map(|v| v.player),
        Some(PlayerId::new(0))
    );
}

/// Zone control victory uses the controlled zone count.
#[test]
fn test_zone_victory() {
    let config = EngineConfig::new(["A", "B"]).with_victory(VictoryConfig {
        insight: None,
        sincerity: None,
        zones: Some(2),
    });
    let mut engine = started(config);
    let b = PlayerId::new(1);
    engine.state_mut().board.add_influence(Trigram::Kan, b, 3);
    assert!(engine.check_victory_conditions().is_none());
    engine.state_mut().board.add_influence(Trigram::Li, b, 3);

    let result = engine.advance_turn();
    assert_eq!(result.next_phase, Some(GamePhase::Finished));
    assert_eq!(
        engine.outcome(),
        Some(&GameOutcome::Victory(tianji::engine::Victory {
            player: b,
            condition: VictoryCondition::Zones(2),
        }))
    );
}

/// Failed validation never mutates anything.
#[test]
fn test_fail_closed() {
    let mut engine = started(EngineConfig::new(["A", "B"]).with_starting(ResourceAmounts::new(0, 0, 0)));
    let before = engine.get_game_status();

    let rejected = [
        Action::Study,
        Action::Move { to: Position::Heaven },
        Action::Move { to: Position::Earth },
        Action::PlayCard {
            card_index: 9,
            zone: Trigram::Qian,
        },
        Action::invoke(StrategyId::new(12)),
        Action::invoke(StrategyId::new(0)),
    ];
    for action in rejected {
        let result = engine.execute(action);
        assert!(!result.success);
        assert!(result.effects.is_empty());
        assert!(result.error.is_some());
    }

    assert_eq!(engine.get_game_status(), before);
    assert!(engine.history().is_empty());
}

/// Cooldowns count turn-advances, for every player, win or lose.
#[test]
fn test_cooldown_via_engine() {
    let ritual = Strategy::new(StrategyId::new(7), Category::Defeat, "Ritual")
        .with_cost(Resource::Qi, 1)
        .with_cooldown(3)
        .with_success_rate(0.5)
        .with_effect(Effect::Resource {
            subject: Subject::SelfPlayer,
            resource: Resource::Insight,
            delta: 1,
        });
    let config = EngineConfig::new(["A", "B"]).with_starting(ResourceAmounts::new(10, 0, 0));
    let mut engine = custom(config, vec![ritual]);
    let a = PlayerId::new(0);
    let id = StrategyId::new(7);

    assert!(engine.execute(Action::invoke(id)).success);
    assert_eq!(engine.state().ledger.get(a, Resource::Qi), 9);

    let catalog = Arc::clone(engine.catalog());
    let resolver = StrategyResolver::new(&catalog);
    for _ in 0..3 {
        assert!(!resolver.is_available(engine.state(), a, id));
        engine.advance_turn();
    }
    assert!(resolver.is_available(engine.state(), a, id));

    let status = engine.get_game_status();
    assert!(status.player(a).unwrap().cooldowns.is_empty());
}

/// The unavailable invoke is an InvalidAction, not a Validation failure.
#[test]
fn test_invalid_action_kind() {
    let mut engine = started(EngineConfig::new(["A", "B"]));
    // Chain Stratagems needs 6 Qi and a controlled zone.
    let result = engine.execute(Action::InvokeStrategy {
        strategy: StrategyId::new(35),
        target: StrategyTarget::player(PlayerId::new(1)).with_zone(Trigram::Zhen),
    });
    assert_eq!(result.error, Some(ErrorKind::InvalidAction));
    assert_eq!(result.message, "strategy #35 is not available");
}

#[test]
fn test_round_limit_end_game_then_finished() {
    let config = EngineConfig::new(["A", "B", "C"])
        .with_max_rounds(3)
        .with_victory(VictoryConfig::disabled());
    let mut engine = started(config);
    engine.state_mut().ledger.adjust(PlayerId::new(2), Resource::Insight, 5);

    let mut advances = 0;
    while engine.phase() == GamePhase::MainGame {
        engine.advance_turn();
        advances += 1;
    }
    // Two full rounds, then the cap fires on the first advance of round 3.
    assert_eq!(advances, 7);
    assert_eq!(engine.phase(), GamePhase::EndGame);
    assert_eq!(engine.outcome().map(GameOutcome::winner), Some(PlayerId::new(2)));

    assert!(engine.advance_turn().success);
    assert_eq!(engine.phase(), GamePhase::Finished);
    assert!(!engine.advance_turn().success);
}

#[test]
fn test_bot_games_finish() {
    for seed in 0..5 {
        let config = EngineConfig::new(["A", "B", "C", "D"]).with_seed(seed);
        let mut engine = started(config);
        let mut bots = vec![
            ScoringBot::greedy(),
            ScoringBot::weighted(seed),
            ScoringBot::weighted(seed + 100),
            ScoringBot::greedy(),
        ];

        let mut turns = 0;
        while !engine.is_finished() {
            let seat = engine.current_player().index();
            let summary = play_turn(&mut engine, &mut bots[seat]);
            assert!(summary.actions.iter().all(|r| r.success));
            turns += 1;
            assert!(turns <= 4 * 20 + 2);
        }

        assert!(engine.outcome().is_some());
        let rounds: Vec<u32> = engine.history().iter().map(|r| r.round).collect();
        assert!(rounds.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn test_same_seed_same_game() {
    let run = |seed| {
        let mut engine = started(EngineConfig::new(["A", "B"]).with_seed(seed));
        let mut bot = ScoringBot::weighted(seed);
        while !engine.is_finished() {
            play_turn(&mut engine, &mut bot);
        }
        (engine.history().clone(), engine.get_game_status())
    };
    assert_eq!(run(42), run(42));
}

#[test]
fn test_scores_from_listing() {
    let engine = started(EngineConfig::new(["A", "B"]).with_starting(ResourceAmounts::new(2, 0, 0)));
    let legal = engine.legal_actions();
    let priorities: Vec<f64> = legal.iter().map(|l| l.priority).collect();

    let best = legal.iter().map(|l| score(l.priority, &priorities)).fold(0.0, f64::max);
    assert_eq!(best, 10.0);
    assert!(legal.iter().all(|l| (0.0..=10.0).contains(&score(l.priority, &priorities))));
}
