use super::config::PickerConfig;
use super::error::CliError;
use super::output::Output;
use quotepick::{RandSource, RandomPicker, SeededRandom, ThreadRandom};
use std::future::Future;
use std::io::Write;
use tokio::time::{self, MissedTickBehavior};

/// Randomness source picked by configuration.
pub type DynRandSource = Box<dyn RandSource + Send + Sync>;

/// Builds the randomness source: seeded when a seed is configured, the
/// thread-local RNG otherwise.
pub fn rand_source(seed: Option<u64>) -> DynRandSource {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    }
}

/// Drives picks over `items` until `config.count` have been shown or
/// `shutdown` resolves.
///
/// Without an interval every pick happens back to back. With one, the first
/// pick is immediate and the rest wait for the next tick. The first failed
/// pick stops the run and is returned, so an empty item list is reported
/// rather than leaving the output silently blank.
///
/// Returns the number of picks shown.
#[tracing::instrument(level = "debug", skip_all, fields(count = config.count, items = items.len()))]
pub async fn run<W, F>(
    config: &PickerConfig,
    items: &[String],
    output: &mut Output<W>,
    shutdown: F,
) -> Result<usize, CliError>
where
    W: Write,
    F: Future<Output = ()>,
{
    let picker = RandomPicker::new(items, rand_source(config.seed));

    let Some(period) = config.interval else {
        for _ in 0..config.count {
            output.emit(&picker)?;
        }
        return Ok(config.count);
    };

    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    let mut shown = 0;
    while shown < config.count {
        tokio::select! {
            () = &mut shutdown => {
                tracing::info!(shown, "Stopping before all picks were shown");
                break;
            }
            _ = ticker.tick() => {
                let result = output.emit(&picker)?;
                tracing::debug!(index = result.index, "shown");
                shown += 1;
            }
        }
    }

    Ok(shown)
}
