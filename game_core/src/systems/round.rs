use crate::quiz::Question;
use crate::{
    Animation, AnimationClip, Config, Events, Explosion, GameRng, Outcome, Player, RoundPhase,
    RoundState, Score, Target,
};
use hecs::{Entity, World};
use rand::Rng;

/// Draw a new question and store its answer
pub fn new_question(round: &mut RoundState, rng: &mut GameRng, config: &Config) {
    round.question = Question::random(rng, config);
    round.answer = round.question.evaluate();
}

/// Hand the correct answer to one random target and decoys to the rest
pub fn set_random_answers(
    world: &mut World,
    round: &RoundState,
    rng: &mut GameRng,
    config: &Config,
) {
    let mut targets: Vec<(usize, Entity)> = world
        .query::<&Target>()
        .iter()
        .map(|(e, t)| (t.slot, e))
        .collect();
    if targets.is_empty() {
        log::warn!("no targets to assign answers to");
        return;
    }
    targets.sort_by_key(|(slot, _)| *slot);

    let correct = rng.0.gen_range(0..targets.len());
    for (i, (_slot, entity)) in targets.into_iter().enumerate() {
        let value = if i == correct {
            round.answer
        } else {
            decoy(round.answer, rng, config)
        };
        if let Ok(mut target) = world.get::<&mut Target>(entity) {
            target.value = value;
            target.is_correct = i == correct;
            target.visible = true;
        }
    }
}

/// Random two-digit number that never equals the answer
fn decoy(answer: i32, rng: &mut GameRng, config: &Config) -> i32 {
    let (lo, hi) = (config.decoy_min, config.decoy_max.max(config.decoy_min));
    if lo == hi && lo == answer {
        return answer + 1;
    }
    loop {
        let value = rng.0.gen_range(lo..=hi);
        if value != answer {
            return value;
        }
    }
}

/// Settle a collision between the player and `target`
pub fn resolve_collision(
    world: &mut World,
    target: Entity,
    round: &mut RoundState,
    score: &mut Score,
    events: &mut Events,
    config: &Config,
) -> Option<Outcome> {
    if round.is_paused() {
        return None;
    }

    let (is_correct, pos) = {
        let mut t = world.get::<&mut Target>(target).ok()?;
        if !t.visible {
            return None;
        }
        if t.is_correct {
            t.visible = false;
        }
        (t.is_correct, t.pos)
    };

    let outcome = if is_correct {
        for (_e, boom) in world.query_mut::<&mut Explosion>() {
            boom.start(pos);
        }
        events.round_won = true;
        Outcome::Win
    } else {
        for (_e, player) in world.query_mut::<&mut Player>() {
            player.visible = false;
        }
        events.round_lost = true;
        Outcome::Lose
    };

    round.phase = RoundPhase::Resolved {
        outcome,
        timer: config.result_delay,
    };
    score.record(outcome);
    log::info!(
        "round {} ({} = {}): {:?}",
        round.number,
        round.question,
        round.answer,
        outcome
    );
    Some(outcome)
}

/// Count down the result delay; raise the prompt once it runs out
pub fn update_round_timer(round: &mut RoundState, dt: f32, events: &mut Events) {
    if let RoundPhase::Resolved { outcome, timer } = round.phase {
        let left = timer - dt;
        round.phase = if left <= 0.0 {
            events.prompt_ready = true;
            RoundPhase::AwaitingAck { outcome }
        } else {
            RoundPhase::Resolved {
                outcome,
                timer: left,
            }
        };
    }
}

/// Start a fresh round, rewriting all round fields together
pub fn reset_round(
    world: &mut World,
    round: &mut RoundState,
    rng: &mut GameRng,
    config: &Config,
    events: &mut Events,
) {
    new_question(round, rng, config);
    set_random_answers(world, round, rng, config);

    let spawn = config.player_spawn();
    for (_e, (player, anim)) in world.query_mut::<(&mut Player, &mut Animation)>() {
        player.pos = spawn;
        player.visible = true;
        anim.set_clip(AnimationClip::StandFront);
    }
    for (_e, boom) in world.query_mut::<&mut Explosion>() {
        boom.hide();
    }

    round.number += 1;
    round.phase = RoundPhase::Playing;
    log::debug!("round {} started: {}", round.number, round.question);
}

/// Answer the play-again prompt. Returns false when no prompt is pending.
pub fn acknowledge_round(
    world: &mut World,
    round: &mut RoundState,
    rng: &mut GameRng,
    config: &Config,
    events: &mut Events,
    play_again: bool,
) -> bool {
    let RoundPhase::AwaitingAck { outcome } = round.phase else {
        return false;
    };
    if play_again {
        reset_round(world, round, rng, config, events);
    } else {
        round.phase = RoundPhase::Stopped { outcome };
        log::info!("player stopped after round {}", round.number);
    }
    true
}
