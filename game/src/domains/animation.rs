use serde::{Deserialize, Serialize};

use crate::collections::Sequence;
use crate::domains::timing::Timer;
use crate::domains::weapons::WeaponKind;
use crate::math::{Position, VectorMath};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationId(pub usize);

/// Cosmetic effects, advisory only: every kind is a pure function of its
/// timer's progress and never feeds back into simulation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnimationKind {
    /// Weapon swing from attacker toward the victim, hit flash mid-way.
    Attack {
        from: Position,
        to: Position,
        weapon: WeaponKind,
    },
    /// The stolen spit sliding from the rival counter to the thief.
    StealSpit { thief: Position, target: Position },
    /// Short-lived rising text ("+20", "Trop loin !").
    FloatingText { text: String, origin: Position },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationFrame {
    pub id: AnimationId,
    pub position: Position,
    pub alpha: f32,
    pub progress: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Animations {
    AnimationStarted { id: AnimationId },
    AnimationAdvanced(AnimationFrame),
    AnimationFinished { id: AnimationId },
}

pub struct Animation {
    pub id: AnimationId,
    pub kind: AnimationKind,
    timer: Timer,
}

fn kind_frame(kind: &AnimationKind, progress: f32) -> (Position, f32) {
    match kind {
        AnimationKind::Attack { from, to, .. } => {
            // wind up, strike to 80% of the distance, come back
            let reach = if progress < 0.3 {
                -10.0 * (progress / 0.3) / 100.0
            } else if progress < 0.6 {
                0.8 * (progress - 0.3) / 0.3
            } else {
                0.8 * (1.0 - (progress - 0.6) / 0.4)
            };
            let offset = to.sub(*from).mul(reach.max(0.0));
            (from.add(offset), 1.0)
        }
        AnimationKind::StealSpit { thief, target } => {
            let position = if progress < 0.6 {
                *target
            } else {
                let t = (progress - 0.6) / 0.4;
                target.add(thief.sub(*target).mul(t))
            };
            (position, 1.0)
        }
        AnimationKind::FloatingText { origin, .. } => {
            let position = [origin[0], origin[1] - 30.0 * progress];
            (position, 1.0 - progress)
        }
    }
}

#[derive(Default)]
pub struct AnimationDomain {
    pub animations: Vec<Animation>,
    animations_id: Sequence,
}

impl AnimationDomain {
    pub fn start(&mut self, kind: AnimationKind, now: f32, duration: f32) -> Animations {
        let id = self.animations_id.one(AnimationId);
        self.animations.push(Animation {
            id,
            kind,
            timer: Timer::new(now, duration),
        });
        Animations::AnimationStarted { id }
    }

    pub fn float_text(&mut self, text: impl Into<String>, origin: Position, now: f32) -> Animations {
        self.start(
            AnimationKind::FloatingText {
                text: text.into(),
                origin,
            },
            now,
            1.5,
        )
    }

    pub fn update(&mut self, now: f32) -> Vec<Animations> {
        let mut events = vec![];
        for animation in self.animations.iter_mut() {
            let progress = match animation.timer.advance(now) {
                Some(progress) => progress,
                None => continue,
            };
            if animation.timer.is_completed() {
                events.push(Animations::AnimationFinished { id: animation.id });
            } else {
                let (position, alpha) = kind_frame(&animation.kind, progress);
                events.push(Animations::AnimationAdvanced(AnimationFrame {
                    id: animation.id,
                    position,
                    alpha,
                    progress,
                }));
            }
        }
        self.animations.retain(|animation| !animation.timer.is_completed());
        events
    }
}
