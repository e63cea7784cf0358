//! Driving a game to completion with a policy.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::policy::Policy;
use crate::rules::{GameEngine, Outcome};

/// How a playout went.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutSummary {
    /// `None` if the step limit was hit first.
    pub outcome: Option<Outcome>,
    /// Commands applied.
    pub steps: usize,
    /// Turn the game ended on.
    pub turns: u32,
    pub final_health: i32,
}

/// Let `policy` play `engine` until the game ends or `max_steps` commands
/// have been applied (0 means no limit).
///
/// Rejected commands count as steps but change nothing, so a policy that
/// keeps proposing them will run into the limit.
pub fn play_out<P: Policy + ?Sized>(
    engine: &mut GameEngine,
    policy: &mut P,
    max_steps: usize,
) -> PlayoutSummary {
    let mut steps = 0;

    while engine.is_game_over().is_none() && (max_steps == 0 || steps < max_steps) {
        let Some(command) = policy.choose(engine) else {
            break;
        };
        if let Err(err) = engine.apply(command) {
            warn!(%command, %err, "policy proposed a rejected command");
        }
        steps += 1;
    }

    let summary = PlayoutSummary {
        outcome: engine.is_game_over(),
        steps,
        turns: engine.turn(),
        final_health: engine.combatant().health(),
    };
    debug!(?summary, "playout finished");
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::policy::{GreedyPolicy, RandomPolicy};
    use crate::core::{Command, GameConfig};

    #[test]
    fn test_random_playout_terminates() {
        let mut engine = GameEngine::new(GameConfig::new().with_seed(10));
        let summary = play_out(&mut engine, &mut RandomPolicy::new(10), 0);

        assert!(summary.outcome.is_some());
        assert_eq!(summary.outcome, engine.is_game_over());
        assert_eq!(summary.final_health, engine.combatant().health());
    }

    #[test]
    fn test_step_limit() {
        let mut engine = GameEngine::new(GameConfig::new().with_seed(10));
        let summary = play_out(&mut engine, &mut GreedyPolicy::new(), 2);

        assert_eq!(summary.steps, 2);
    }

    struct Stubborn;

    impl Policy for Stubborn {
        fn choose(&mut self, _engine: &GameEngine) -> Option<Command> {
            Some(Command::Choose(9))
        }
    }

    #[test]
    fn test_rejected_commands_hit_the_limit() {
        let mut engine = GameEngine::new(GameConfig::new().with_seed(10));
        let before = engine.query_state();

        let summary = play_out(&mut engine, &mut Stubborn, 5);
        assert_eq!(summary.steps, 5);
        assert_eq!(summary.outcome, None);
        assert_eq!(engine.query_state(), before);
    }

    #[test]
    fn test_dyn_policy() {
        let mut engine = GameEngine::new(GameConfig::new().with_seed(11));
        let mut policy: Box<dyn Policy> = Box::new(RandomPolicy::new(1));

        let summary = play_out(&mut engine, policy.as_mut(), 0);
        assert!(summary.outcome.is_some());
    }
}
