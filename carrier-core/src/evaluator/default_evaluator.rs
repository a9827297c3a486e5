//! Default implementation of the [`Evaluator`] trait.
use super::Evaluator;
use crate::{record::Record, Env, Policy};
use anyhow::Result;
use log::debug;

/// A default implementation of the [`Evaluator`] trait.
///
/// This evaluator runs a fixed number of episodes and reports the average
/// return (cumulative reward) across all episodes. Each episode resets the
/// environment with [`Env::reset_with_index`], so evaluation runs are
/// reproducible for environments that seed themselves from the index.
pub struct DefaultEvaluator<E: Env> {
    /// The number of episodes to run during evaluation.
    n_episodes: usize,

    /// The environment instance used for evaluation.
    env: E,
}

impl<E: Env> Evaluator<E> for DefaultEvaluator<E> {
    fn evaluate<P>(&mut self, policy: &mut P) -> Result<Record>
    where
        P: Policy<E>,
    {
        let mut r_total = 0f32;

        for ix in 0..self.n_episodes {
            let mut r_episode = 0f32;
            let mut prev_obs = self.env.reset_with_index(ix)?;

            loop {
                let act = policy.sample(&prev_obs);
                let (step, _) = self.env.step(&act);
                r_episode += step.reward[0];
                if step.is_done() {
                    break;
                }
                prev_obs = step.obs;
            }

            debug!("episode {}: return {}", ix, r_episode);
            r_total += r_episode;
        }

        Ok(Record::from_scalar(
            "Episode return",
            r_total / self.n_episodes as f32,
        ))
    }
}

impl<E: Env> DefaultEvaluator<E> {
    /// Constructs a new [`DefaultEvaluator`].
    ///
    /// * `config` - Configuration of the environment.
    /// * `seed` - Random seed for environment initialization.
    /// * `n_episodes` - The number of episodes to run during evaluation.
    pub fn new(config: &E::Config, seed: i64, n_episodes: usize) -> Result<Self> {
        Ok(Self {
            n_episodes,
            env: E::build(config, seed)?,
        })
    }
}
