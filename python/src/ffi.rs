//! Python-facing wrappers. Thin: argument conversion + error mapping only.

use std::path::PathBuf;

use pyo3::exceptions::{PyIOError, PyKeyError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyDict, PyList};

use t2t_core::example::TextToTextExample;
use t2t_core::features::{decode_fn as decode_record, FeatureValue};
use t2t_core::io::{write_data_with_config, WriteConfig};
use t2t_core::types::DataError;

pub fn register(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(write_data, m)?)?;
    m.add_function(wrap_pyfunction!(decode_fn, m)?)?;
    Ok(())
}

fn to_py_err(e: DataError) -> PyErr {
    match e {
        DataError::Io(e) => PyIOError::new_err(e.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

fn required<'py, T: FromPyObject<'py>>(d: &Bound<'py, PyDict>, key: &str) -> PyResult<T> {
    match d.get_item(key)? {
        Some(v) => v.extract(),
        None => Err(PyKeyError::new_err(key.to_owned())),
    }
}

fn example_from_dict(d: &Bound<'_, PyDict>) -> PyResult<TextToTextExample> {
    let frame: u32 = match d.get_item("frame")? {
        Some(v) => v.extract()?,
        None => 0,
    };
    Ok(TextToTextExample::new(
        required::<String>(d, "src")?,
        required::<String>(d, "tgt")?,
        required::<String>(d, "dialog_id")?,
        required::<u32>(d, "turn")?,
    )
    .with_frame(frame))
}

/// write_data(examples, output_path, shuffle=True, seed=None) -> int
///
/// `examples` is a list of dicts with keys src, tgt, dialog_id, turn and optional frame.
#[pyfunction]
#[pyo3(signature = (examples, output_path, shuffle = true, seed = None))]
fn write_data(
    py: Python<'_>,
    examples: Vec<Bound<'_, PyDict>>,
    output_path: PathBuf,
    shuffle: bool,
    seed: Option<u64>,
) -> PyResult<usize> {
    let mut examples = examples
        .iter()
        .map(example_from_dict)
        .collect::<PyResult<Vec<_>>>()?;
    let config = WriteConfig { shuffle, seed, ..WriteConfig::default() };

    py.allow_threads(|| write_data_with_config(&mut examples, &output_path, &config))
        .map_err(to_py_err)
}

/// decode_fn(record: bytes) -> dict
#[pyfunction]
fn decode_fn<'py>(py: Python<'py>, record: &[u8]) -> PyResult<Bound<'py, PyDict>> {
    let parsed = decode_record(record).map_err(|e| PyValueError::new_err(e.to_string()))?;

    let out = PyDict::new_bound(py);
    for (name, value) in parsed {
        match value {
            FeatureValue::Strings(v) => {
                let list = PyList::new_bound(py, v.iter().map(|b| PyBytes::new_bound(py, b)));
                out.set_item(name, list)?;
            }
            FeatureValue::Int64s(v) => out.set_item(name, v)?,
            FeatureValue::Floats(v) => out.set_item(name, v)?,
            FeatureValue::String(b) => out.set_item(name, PyBytes::new_bound(py, &b))?,
            FeatureValue::Int64(v) => out.set_item(name, v)?,
            FeatureValue::Float(v) => out.set_item(name, v)?,
        }
    }
    Ok(out)
}
