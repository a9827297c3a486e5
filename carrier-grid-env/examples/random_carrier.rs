use anyhow::Result;
use carrier_core::{Configurable, DefaultEvaluator, Env as _, Evaluator, Policy};
use carrier_grid_env::{CarrierAct, CarrierEnv, CarrierEnvConfig, CarrierObs};
use serde::Deserialize;

#[derive(Clone, Deserialize)]
struct RandomPolicyConfig {
    pub n_acts: usize,
}

struct RandomPolicy {
    n_acts: usize,
}

impl Policy<CarrierEnv> for RandomPolicy {
    fn sample(&mut self, _: &CarrierObs) -> CarrierAct {
        fastrand::u8(..self.n_acts as u8).into()
    }
}

impl Configurable for RandomPolicy {
    type Config = RandomPolicyConfig;

    fn build(config: Self::Config) -> Self {
        Self {
            n_acts: config.n_acts,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    fastrand::seed(42);

    let env_config = CarrierEnvConfig::default().width(10).height(10);

    // Prints one generated field for inspection.
    let mut env = CarrierEnv::build(&env_config, 42)?;
    let obs = env.reset(None)?;
    log::info!(
        "robot at {:?}, target at {:?}, field:\n{}",
        obs.pos,
        obs.target,
        obs.field
            .chunks(obs.cols)
            .map(|row| row
                .iter()
                .map(|&s| if s == 1 { '#' } else { '.' })
                .collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    );

    // Runs a random policy for a few episodes.
    let mut policy = RandomPolicy::build(RandomPolicyConfig {
        n_acts: CarrierAct::N,
    });
    let record = DefaultEvaluator::new(&env_config, 0, 5)?.evaluate(&mut policy)?;
    log::info!(
        "average episode return: {:.3}",
        record.get_scalar("Episode return")?
    );

    Ok(())
}
