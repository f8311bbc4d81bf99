use std::path::Path;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::{debug, info};

use crate::example::TextToTextExample;
use crate::features::encode_example;
use crate::io::config::WriteConfig;
use crate::tfrecord::RecordWriter;
use crate::types::DataError;
use crate::utils::base_name;

/// Write examples to `output_path`, shuffling with the thread-local RNG when asked.
///
/// Returns the number of records written.
pub fn write_data(
    examples: &mut [TextToTextExample],
    output_path: impl AsRef<Path>,
    shuffle: bool,
) -> Result<usize, DataError> {
    write_data_with_rng(examples, output_path, shuffle, &mut rand::thread_rng())
}

/// Same as `write_data`, with the shuffle driven by a caller-supplied RNG.
pub fn write_data_with_rng<R: Rng + ?Sized>(
    examples: &mut [TextToTextExample],
    output_path: impl AsRef<Path>,
    shuffle: bool,
    rng: &mut R,
) -> Result<usize, DataError> {
    let config = WriteConfig { shuffle, ..WriteConfig::default() };
    write_records(examples, output_path.as_ref(), &config, rng)
}

/// Write examples using a full `WriteConfig`. A configured seed makes the
/// output order reproducible.
pub fn write_data_with_config(
    examples: &mut [TextToTextExample],
    output_path: impl AsRef<Path>,
    config: &WriteConfig,
) -> Result<usize, DataError> {
    config.validate()?;
    match config.seed {
        Some(seed) => write_records(examples, output_path.as_ref(), config, &mut StdRng::seed_from_u64(seed)),
        None => write_records(examples, output_path.as_ref(), config, &mut rand::thread_rng()),
    }
}

fn write_records<R: Rng + ?Sized>(
    examples: &mut [TextToTextExample],
    output_path: &Path,
    config: &WriteConfig,
    rng: &mut R,
) -> Result<usize, DataError> {
    // Parent dirs are created before the shuffle so a bad path fails fast.
    let mut writer = RecordWriter::create_with_capacity(output_path, config.buffer_capacity)?;

    if config.shuffle {
        debug!(count = examples.len(), "shuffling examples");
        examples.shuffle(rng);
    }

    for example in examples.iter() {
        writer.write_record(&encode_example(example))?;
    }
    let written = writer.records_written();
    writer.finish()?;

    info!("Wrote {} with {} examples", base_name(output_path), written);
    Ok(written)
}
