//! Attack pattern state machine.
//!
//! Pure functions over plain data: the caller hands in the current shooter
//! lists and the time, and gets back the shots to fire this call. No bullet
//! shaping and no cooldown bookkeeping happens here; the formation owns both.

use serde::{Deserialize, Serialize};

use invaders_core::constants::*;
use invaders_core::enums::PatternKind;
use invaders_core::random::RandomSource;
use invaders_core::types::UnitId;

/// Wave progress: next roster index and frames since the last shot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveState {
    pub index: usize,
    pub frame_counter: u32,
}

/// SideWave progress: next pair counted from the outside in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideWaveState {
    pub pair_index: usize,
    pub frame_counter: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusState {
    /// Group being fired, `None` between groups.
    pub group_index: Option<usize>,
    pub step_in_group: usize,
    /// Groups fired to exhaustion so far.
    pub groups_used: u32,
    pub frame_counter: u32,
    /// Wall-clock time before which no new group is picked.
    pub resume_after_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BurstPhase {
    /// Multi-member columns fire, then a short wait.
    #[default]
    FirstPass,
    /// Multi-member columns fire again.
    SecondPass,
    /// Single-member columns fire a triple shot.
    Triple,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomBurstState {
    pub phase: BurstPhase,
    pub cycle: u32,
    /// Cooldown-gated steps to skip before the next pass.
    pub wait_steps: u32,
}

/// The active attack pattern with its counters. Exactly one is live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternState {
    #[default]
    Idle,
    Wave(WaveState),
    SideWave(SideWaveState),
    Focus(FocusState),
    RandomBurst(RandomBurstState),
}

/// What the pattern sees this call.
pub struct PatternContext<'a> {
    /// Current shooter roster, in roster order.
    pub roster: &'a [UnitId],
    /// Shooters of columns with two or more live units.
    pub multi_member: &'a [UnitId],
    /// Shooters of columns with exactly one live unit.
    pub single_member: &'a [UnitId],
    pub now_ms: u64,
}

/// One shooter firing `repeat` volleys in the same call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub shooter: UnitId,
    pub repeat: u32,
}

/// Output of one pattern step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternUpdate {
    pub volley: Vec<Shot>,
    /// The pattern finished this call and the state is back to `Idle`.
    pub completed: bool,
}

impl Shot {
    pub fn single(shooter: UnitId) -> Self {
        Self { shooter, repeat: 1 }
    }
}

impl PatternUpdate {
    fn fire(shooters: impl IntoIterator<Item = UnitId>) -> Self {
        Self {
            volley: shooters.into_iter().map(Shot::single).collect(),
            completed: false,
        }
    }

    fn completed() -> Self {
        Self {
            volley: Vec::new(),
            completed: true,
        }
    }
}

/// Pattern a level runs once the idle delay has elapsed.
pub fn pattern_for_level(level: u32) -> PatternKind {
    match level {
        1 => PatternKind::Wave,
        2 => PatternKind::SideWave,
        3 => PatternKind::Focus,
        4 => PatternKind::RandomBurst,
        _ => PatternKind::Idle,
    }
}

impl PatternState {
    /// Fresh state for a pattern, every counter at its initial value.
    pub fn start(kind: PatternKind) -> Self {
        match kind {
            PatternKind::Idle => Self::Idle,
            PatternKind::Wave => Self::Wave(WaveState::default()),
            PatternKind::SideWave => Self::SideWave(SideWaveState::default()),
            PatternKind::Focus => Self::Focus(FocusState::default()),
            PatternKind::RandomBurst => Self::RandomBurst(RandomBurstState::default()),
        }
    }

    pub fn kind(&self) -> PatternKind {
        match self {
            Self::Idle => PatternKind::Idle,
            Self::Wave(_) => PatternKind::Wave,
            Self::SideWave(_) => PatternKind::SideWave,
            Self::Focus(_) => PatternKind::Focus,
            Self::RandomBurst(_) => PatternKind::RandomBurst,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether each step must wait for the shooting cooldown.
    pub fn gated_by_cooldown(&self) -> bool {
        matches!(self, Self::Idle | Self::RandomBurst(_))
    }
}

/// Run one step of the active pattern. On completion the state is reset to
/// `Idle`; restarting the idle timer and cooldown is the caller's job.
pub fn advance(
    state: &mut PatternState,
    ctx: &PatternContext<'_>,
    rng: &mut impl RandomSource,
) -> PatternUpdate {
    if ctx.roster.is_empty() {
        return PatternUpdate::default();
    }

    let update = match state {
        PatternState::Idle => {
            let pick = rng.next_below(ctx.roster.len());
            PatternUpdate::fire([ctx.roster[pick]])
        }
        PatternState::Wave(wave) => advance_wave(wave, ctx.roster),
        PatternState::SideWave(side) => advance_side_wave(side, ctx.roster),
        PatternState::Focus(focus) => advance_focus(focus, ctx, rng),
        PatternState::RandomBurst(burst) => advance_random_burst(burst, ctx),
    };

    if update.completed {
        *state = PatternState::Idle;
    }
    update
}

fn advance_wave(wave: &mut WaveState, roster: &[UnitId]) -> PatternUpdate {
    wave.frame_counter += 1;
    if wave.frame_counter < WAVE_STEP {
        return PatternUpdate::default();
    }
    wave.frame_counter = 0;

    match roster.get(wave.index) {
        Some(&shooter) => {
            wave.index += 1;
            PatternUpdate::fire([shooter])
        }
        None => PatternUpdate::completed(),
    }
}

fn advance_side_wave(side: &mut SideWaveState, roster: &[UnitId]) -> PatternUpdate {
    side.frame_counter += 1;
    if side.frame_counter < WAVE_STEP {
        return PatternUpdate::default();
    }
    side.frame_counter = 0;

    let n = roster.len();
    if side.pair_index >= n.div_ceil(2) {
        return PatternUpdate::completed();
    }

    let left = side.pair_index;
    let right = n - 1 - left;
    side.pair_index += 1;

    if left == right {
        PatternUpdate::fire([roster[left]])
    } else {
        PatternUpdate::fire([roster[left], roster[right]])
    }
}

/// Contiguous third of the roster. The last group takes the remainder.
pub fn focus_group(roster: &[UnitId], group: usize) -> &[UnitId] {
    let n = roster.len();
    let third = n / FOCUS_GROUP_COUNT;
    let start = group * third;
    if start >= n {
        return &[];
    }
    let end = if group == FOCUS_GROUP_COUNT - 1 {
        n
    } else {
        (start + third).min(n)
    };
    &roster[start..end]
}

fn advance_focus(
    focus: &mut FocusState,
    ctx: &PatternContext<'_>,
    rng: &mut impl RandomSource,
) -> PatternUpdate {
    if focus.groups_used >= FOCUS_MAX {
        return PatternUpdate::completed();
    }

    let group_index = match focus.group_index {
        Some(group) => group,
        None => {
            if focus.resume_after_ms.is_some_and(|t| ctx.now_ms < t) {
                return PatternUpdate::default();
            }
            let available: Vec<usize> = (0..FOCUS_GROUP_COUNT)
                .filter(|&g| !focus_group(ctx.roster, g).is_empty())
                .collect();
            if available.is_empty() {
                return PatternUpdate::completed();
            }
            let group = available[rng.next_below(available.len())];
            focus.group_index = Some(group);
            focus.step_in_group = 0;
            focus.frame_counter = 0;
            group
        }
    };

    focus.frame_counter += 1;
    if focus.frame_counter < FOCUS_STEP {
        return PatternUpdate::default();
    }
    focus.frame_counter = 0;

    match focus_group(ctx.roster, group_index).get(focus.step_in_group) {
        Some(&shooter) => {
            focus.step_in_group += 1;
            PatternUpdate::fire([shooter])
        }
        None => {
            // Group exhausted: pause before picking the next one.
            focus.group_index = None;
            focus.groups_used += 1;
            focus.resume_after_ms = Some(ctx.now_ms + FOCUS_DELAY_MS);
            PatternUpdate::default()
        }
    }
}

fn advance_random_burst(burst: &mut RandomBurstState, ctx: &PatternContext<'_>) -> PatternUpdate {
    if burst.wait_steps > 0 {
        burst.wait_steps -= 1;
        return PatternUpdate::default();
    }

    match burst.phase {
        BurstPhase::FirstPass => {
            burst.phase = BurstPhase::SecondPass;
            burst.wait_steps = BURST_WAIT;
            PatternUpdate::fire(ctx.multi_member.iter().copied())
        }
        BurstPhase::SecondPass => {
            burst.phase = BurstPhase::Triple;
            PatternUpdate::fire(ctx.multi_member.iter().copied())
        }
        BurstPhase::Triple => {
            let volley = ctx
                .single_member
                .iter()
                .map(|&shooter| Shot {
                    shooter,
                    repeat: BURST_TRIPLE_SHOTS,
                })
                .collect();
            burst.cycle += 1;
            if burst.cycle >= BURST_MAX {
                return PatternUpdate {
                    volley,
                    completed: true,
                };
            }
            burst.phase = BurstPhase::FirstPass;
            burst.wait_steps = BURST_WAIT;
            PatternUpdate {
                volley,
                completed: false,
            }
        }
    }
}
