use crate::batch;
use crate::compare::compare;
use crate::config::{Config, EQUAL_KEYS, UNEQUAL_KEYS};
use crate::error::Result;
use crate::generator::Generator;
use crate::timer::ScopedTimer;
use crate::types::*;
use log::{debug, info, warn};

/// One of the fixed comparisons and what it should come out as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub keys: (Value, Value),
    pub same: bool,
    pub expected: bool,
}

impl Outcome {
    pub fn as_expected(&self) -> bool {
        self.same == self.expected
    }
}

pub struct Runner {
    config: Config,
    generator: Generator,
}

impl Runner {
    pub fn new(config: Config) -> Result<Self> {
        let config = config.validate()?;
        let generator = match config.seed {
            Some(seed) => Generator::seeded(config.size, seed),
            None => Generator::new(config.size),
        };
        debug!(
            "runner: {:?}, {} values per tree",
            config,
            generator.size()
        );

        Ok(Self { config, generator })
    }

    /// Same(tree(1), tree(1)) and Same(tree(3), tree(4)).
    pub fn fixed(&mut self) -> Result<Vec<Outcome>> {
        let mut outcomes = Vec::with_capacity(2);
        for &(keys, expected) in &[(EQUAL_KEYS, true), (UNEQUAL_KEYS, false)] {
            let a = self.generator.tree(keys.0);
            let b = self.generator.tree(keys.1);
            if self.config.show {
                info!("tree({}) = {}", keys.0, a);
                info!("tree({}) = {}", keys.1, b);
            }

            let same = compare(&a, &b)?.is_equal();
            let outcome = Outcome {
                keys,
                same,
                expected,
            };
            if !outcome.as_expected() {
                warn!("tree({}) vs tree({}) gave {}", keys.0, keys.1, same);
            }
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    /// Returns `(equal, total)` over the configured number of random pairs.
    pub fn sweep(&mut self) -> Result<Option<(usize, usize)>> {
        if self.config.pairs == 0 {
            return Ok(None);
        }

        let mut timer = ScopedTimer::new("sweep");
        timer.checkpoint("generate");
        let pairs = self.generator.same_key_pairs(self.config.pairs);
        timer.elapsed_since_checkpoint();

        timer.checkpoint("compare");
        let equal = batch::count_equal(&pairs)?;
        timer.elapsed_since_checkpoint();

        Ok(Some((equal, pairs.len())))
    }

    pub fn strict(&self) -> bool {
        self.config.strict
    }
}
