//! Simulation constants and tuning parameters.
//!
//! Values are design parameters, not contracts. Screen units are pixels.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- Screen ---

/// Default viewport width.
pub const SCREEN_WIDTH: i32 = 448;

/// Default viewport height.
pub const SCREEN_HEIGHT: i32 = 520;

// --- Formation layout ---

/// Initial x of the formation's upper-left corner.
pub const INIT_POS_X: i32 = 20;

/// Initial y of the formation's upper-left corner.
pub const INIT_POS_Y: i32 = 100;

/// Distance between neighbouring units, both axes.
pub const SEPARATION_DISTANCE: i32 = 40;

/// Width of one formation unit.
pub const UNIT_WIDTH: i32 = 12 * 2;

/// Height of one formation unit.
pub const UNIT_HEIGHT: i32 = 8 * 2;

/// Fraction of rows (from the top) populated with C-tier units.
pub const PROPORTION_C: f64 = 0.2;

/// Fraction of rows after the C band populated with B-tier units.
pub const PROPORTION_B: f64 = 0.4;

// --- Formation movement ---

/// Lateral displacement per movement step.
pub const X_SPEED: i32 = 8;

/// Vertical displacement per movement step while descending.
pub const Y_SPEED: i32 = 4;

/// Margin on the left and right of the screen.
pub const SIDE_MARGIN: i32 = 20;

/// Margin at the bottom of the screen.
pub const BOTTOM_MARGIN: i32 = 80;

/// Descent-step grid: lateral movement resumes when the top edge is aligned to it.
pub const DESCENT_DISTANCE: i32 = 20;

/// Floor added to the movement threshold (frames between steps).
pub const MINIMUM_SPEED: i32 = 10;

// --- Formation firing ---

/// Base enemy bullet speed (pixels per frame, downward).
pub const BULLET_SPEED: i32 = 4;

/// Speed multiplier for B-tier shooters.
pub const FAST_BULLET_MULTIPLIER: i32 = 2;

/// Enemy bullet width.
pub const ENEMY_BULLET_WIDTH: i32 = 3 * 2;

/// Enemy bullet height.
pub const ENEMY_BULLET_HEIGHT: i32 = 5 * 2;

/// Horizontal offset from center of each shot in a C-tier double shot.
pub const DOUBLE_SHOT_OFFSET: i32 = 6;

/// Shooting variance as a fraction of the shooting frequency.
pub const SHOOTING_VARIANCE: f64 = 0.2;

// --- Attack patterns ---

/// Wall-clock idle time before a level's pattern starts (ms).
pub const PATTERN_DELAY_MS: u64 = 7000;

/// Frames between consecutive Wave / SideWave steps.
pub const WAVE_STEP: u32 = 20;

/// Number of contiguous roster groups used by Focus.
pub const FOCUS_GROUP_COUNT: usize = 3;

/// Completed groups after which Focus ends.
pub const FOCUS_MAX: u32 = 10;

/// Frames between consecutive shots inside a Focus group.
pub const FOCUS_STEP: u32 = 10;

/// Wall-clock pause after a Focus group is exhausted (ms).
pub const FOCUS_DELAY_MS: u64 = 500;

/// Full RandomBurst cycles before the pattern ends.
pub const BURST_MAX: u32 = 2;

/// Gated steps skipped between RandomBurst passes.
pub const BURST_WAIT: u32 = 2;

/// Shots per single-member column in the RandomBurst triple pass.
pub const BURST_TRIPLE_SHOTS: u32 = 3;

// --- Boss ---

/// Boss sprite width.
pub const BOSS_WIDTH: i32 = 12 * 6;

/// Boss sprite height.
pub const BOSS_HEIGHT: i32 = 8 * 6;

/// HP above which the boss stays in phase one.
pub const BOSS_PHASE_ONE_HP: i32 = 60;

/// HP above which the boss stays in phase two.
pub const BOSS_PHASE_TWO_HP: i32 = 30;

/// Boss firing cooldown (ms).
pub const BOSS_SHOOT_COOLDOWN_MS: u64 = 600;

/// Boss color-cycle cooldown (ms).
pub const BOSS_ANIMATION_COOLDOWN_MS: u64 = 400;

/// Phase one patrol speed (pixels per frame).
pub const BOSS_PATROL_SPEED: i32 = 2;

/// Phase one patrol lower x bound.
pub const BOSS_PATROL_MIN_X: i32 = 20;

/// Phase one patrol upper x bound.
pub const BOSS_PATROL_MAX_X: i32 = 350;

/// Figure-eight phase angle increment per frame (radians).
pub const BOSS_PHASE_ANGLE_STEP: f64 = 0.03;

/// Figure-eight center x.
pub const BOSS_CENTER_X: i32 = 240;

/// Figure-eight center y.
pub const BOSS_CENTER_Y: i32 = 80;

/// Figure-eight horizontal amplitude.
pub const BOSS_AMPLITUDE_X: f64 = 140.0;

/// Figure-eight vertical amplitude.
pub const BOSS_AMPLITUDE_Y: f64 = 50.0;

/// Horizontal velocities of the five-way fan.
pub const BOSS_FAN_VELOCITIES_X: [i32; 5] = [-3, -1, 0, 1, 3];

/// Vertical velocity of fan bullets.
pub const BOSS_FAN_SPEED: i32 = 5;

/// Fan bullet size.
pub const BOSS_FAN_BULLET_WIDTH: i32 = 4;
pub const BOSS_FAN_BULLET_HEIGHT: i32 = 8;

/// Vertical velocity of straight-down boss bullets.
pub const BOSS_STRAIGHT_SPEED: i32 = 6;

/// Straight bullet size.
pub const BOSS_STRAIGHT_BULLET_WIDTH: i32 = 4;
pub const BOSS_STRAIGHT_BULLET_HEIGHT: i32 = 10;

/// Number of straight bullets in the phase three barrage.
pub const BOSS_BARRAGE_COUNT: i32 = 5;

/// Vertical spacing between barrage bullets.
pub const BOSS_BARRAGE_SPACING: i32 = 15;

/// Initial boss position.
pub const BOSS_INIT_X: i32 = 188;
pub const BOSS_INIT_Y: i32 = 80;

// --- Upgrades ---

/// Lowest upgrade level of any attribute.
pub const MIN_UPGRADE_LEVEL: u32 = 1;

/// Highest upgrade level of any attribute.
pub const MAX_UPGRADE_LEVEL: u32 = 10;

/// Attack gained per upgrade level.
pub const ATTACK_PER_LEVEL: f64 = 0.3;

/// Move speed gained per upgrade level.
pub const MOVE_SPEED_PER_LEVEL: f64 = 0.5;

/// Shooting interval reduction per fire-rate level (ms).
pub const FIRE_RATE_STEP_MS: u64 = 25;

/// Shooting interval floor (ms).
pub const MIN_SHOOTING_INTERVAL_MS: u64 = 200;

/// Max HP gained per upgrade level.
pub const HP_PER_LEVEL: i32 = 1;
