//! Carrier-robot gridworld environment.
mod config;
pub use config::CarrierEnvConfig;

use crate::{
    field::{generate_field, Grid, CELL_BLOCKED, CELL_FREE},
    CarrierAct, CarrierObs,
};
use anyhow::{bail, Result};
use carrier_core::{
    record::{Record, RecordValue},
    Env, Info, Obs, Step,
};
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Reward for ending the episode 4-adjacent to the target.
const REWARD_WIN: f32 = 1.0;

/// Reward for stepping off the grid.
const REWARD_OUT_OF_BOUNDS: f32 = -11.0;

/// Reward for running into a wall.
const REWARD_COLLISION: f32 = -1.0;

/// Numerator of the per-step time penalty `-1.25 / (t + 1)`.
const TIME_PENALTY: f32 = 1.25;

/// Bound on regenerations when a drawn field has no wall to put the target on.
const PLACEMENT_RETRIES: usize = 16;

/// Additional episode information.
pub struct CarrierInfo {
    /// `true` if the robot ended the episode next to the target.
    pub win: bool,
}

impl Info for CarrierInfo {}

/// Carrier-robot gridworld.
///
/// At every reset a fresh field is generated with a wall density drawn from
/// the configured range. The target sits on a wall cell, the robot starts on
/// a free cell and occupies it (its cell is marked blocked in the field).
/// The robot wins by standing 4-adjacent to the target; stepping off the
/// grid or into a wall terminates the episode with a penalty, and every step
/// costs a time penalty decaying as `1.25 / (t + 1)`.
pub struct CarrierEnv {
    config: CarrierEnvConfig,
    rng: StdRng,
    field: Grid,
    pos: [usize; 2],
    target: [usize; 2],
    time: usize,
}

impl CarrierEnv {
    fn observe(&self) -> CarrierObs {
        CarrierObs {
            field: self.field.as_slice().to_vec(),
            rows: self.field.rows(),
            cols: self.field.cols(),
            pos: self.pos,
            target: self.target,
        }
    }

    /// Generates a fresh field and places the target and the robot.
    fn reset_episode(&mut self) -> Result<CarrierObs> {
        let (rows, cols) = (self.config.height, self.config.width);

        for _ in 0..PLACEMENT_RETRIES {
            let density = self.draw_density();
            let mut field = generate_field(
                rows,
                cols,
                density,
                self.config.max_generation_attempts,
                &mut self.rng,
            )?;

            // The target sits on a wall; redraw when the field has none.
            let walls = field.cells_with(CELL_BLOCKED);
            if walls.is_empty() {
                continue;
            }
            let target = walls[self.rng.gen_range(0..walls.len())];

            let free = field.cells_with(CELL_FREE);
            if free.is_empty() {
                continue;
            }
            let pos = free[self.rng.gen_range(0..free.len())];
            field.set(pos.0, pos.1, CELL_BLOCKED);

            self.field = field;
            self.pos = [pos.0, pos.1];
            self.target = [target.0, target.1];
            self.time = 0;
            debug!(
                "reset: density {:.3}, robot at {:?}, target at {:?}",
                density, self.pos, self.target
            );
            return Ok(self.observe());
        }

        bail!(
            "no field with a wall cell within {} regenerations",
            PLACEMENT_RETRIES
        )
    }

    fn draw_density(&mut self) -> f64 {
        let (min, max) = (self.config.min_wall_density, self.config.max_wall_density);
        if min < max {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }

    fn new_position(&self, a: &CarrierAct) -> (isize, isize) {
        let (dr, dc) = a.delta();
        (self.pos[0] as isize + dr, self.pos[1] as isize + dc)
    }

    fn in_bounds(&self, (r, c): (isize, isize)) -> bool {
        r >= 0 && r < self.config.height as isize && c >= 0 && c < self.config.width as isize
    }

    fn is_adjacent(a: [usize; 2], b: [usize; 2]) -> bool {
        let dr = (a[0] as isize - b[0] as isize).abs();
        let dc = (a[1] as isize - b[1] as isize).abs();
        dr + dc == 1
    }

    fn make_step(&self, act: &CarrierAct, reward: f32, terminated: i8, win: bool) -> Step<Self> {
        Step::new(
            self.observe(),
            *act,
            vec![reward],
            vec![terminated],
            vec![0],
            CarrierInfo { win },
            CarrierObs::dummy(1),
        )
    }
}

impl Env for CarrierEnv {
    type Config = CarrierEnvConfig;
    type Obs = CarrierObs;
    type Act = CarrierAct;
    type Info = CarrierInfo;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        if config.width <= 1 || config.height <= 1 {
            bail!("height and width must be greater than 1");
        }
        if !(0.0..=1.0).contains(&config.min_wall_density)
            || !(0.0..=1.0).contains(&config.max_wall_density)
            || config.min_wall_density > config.max_wall_density
        {
            bail!("wall density range must satisfy 0 <= min <= max <= 1");
        }
        if config.max_generation_attempts == 0 {
            bail!("max_generation_attempts must be at least 1");
        }

        Ok(Self {
            config: config.clone(),
            rng: StdRng::seed_from_u64(seed as u64),
            field: Grid::filled(config.height, config.width, CELL_FREE),
            pos: [0, 0],
            target: [0, 0],
            time: 0,
        })
    }

    fn step(&mut self, act: &Self::Act) -> (Step<Self>, Record) {
        // Already standing next to the target: win without moving and
        // without the time penalty.
        if Self::is_adjacent(self.pos, self.target) {
            let mut record = Record::from_scalar("Reward", REWARD_WIN);
            record.insert("Win", RecordValue::Scalar(1.0));
            return (self.make_step(act, REWARD_WIN, 1, true), record);
        }

        let mut reward = 0f32;
        let mut terminated = 0i8;
        let mut win = false;

        let next = self.new_position(act);
        if !self.in_bounds(next) {
            reward = REWARD_OUT_OF_BOUNDS;
            terminated = 1;
        } else {
            let next = [next.0 as usize, next.1 as usize];
            if self.field.get(next[0], next[1]) == CELL_BLOCKED && next != self.pos {
                reward = REWARD_COLLISION;
                terminated = 1;
            } else {
                self.field.set(self.pos[0], self.pos[1], CELL_FREE);
                self.pos = next;
                self.field.set(next[0], next[1], CELL_BLOCKED);
            }
        }

        if Self::is_adjacent(self.pos, self.target) {
            reward += REWARD_WIN;
            terminated = 1;
            win = true;
        }

        reward -= TIME_PENALTY / (self.time as f32 + 1.0);
        self.time += 1;

        let mut record = Record::from_scalar("Reward", reward);
        if win {
            record.insert("Win", RecordValue::Scalar(1.0));
        }

        (self.make_step(act, reward, terminated, win), record)
    }

    fn reset(&mut self, is_done: Option<&Vec<i8>>) -> Result<Self::Obs> {
        match is_done {
            None => self.reset_episode(),
            Some(v) if v[0] == 1 => self.reset_episode(),
            _ => Ok(self.observe()),
        }
    }

    fn step_with_reset(&mut self, a: &Self::Act) -> (Step<Self>, Record) {
        let (mut step, record) = self.step(a);
        if step.is_done() {
            match self.reset(None) {
                Ok(obs) => step.init_obs = obs,
                Err(e) => {
                    // Surfaced on the next reset; the step itself is valid.
                    log::warn!("reset after episode end failed: {}", e);
                }
            }
        }
        (step, record)
    }

    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs> {
        self.rng = StdRng::seed_from_u64(ix as u64);
        self.reset_episode()
    }
}
