//! Provides the way to write trained prototypes.

#[cfg(test)]
#[path = "../../tests/unit/extensions/output_test.rs"]
mod output_test;

use neural_gas::prelude::{Float, GenericResult, PrototypeStore};
use serde::Serialize;
use std::io::{BufWriter, Write};

/// A serializable representation of a trained network.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrototypesOutput {
    /// Weights of trained prototypes.
    pub prototypes: Vec<Vec<Float>>,
    /// Average squared distance from the dataset vectors to their nearest prototypes.
    pub quantization_error: Float,
}

/// Writes prototypes as text, one `W[index]: [w0, w1, ...]` line per prototype.
pub fn write_text_prototypes<W: Write>(mut writer: BufWriter<W>, store: &PrototypeStore) -> GenericResult<()> {
    store.iter().enumerate().try_for_each(|(index, prototype)| {
        let weights = prototype.weights.iter().map(|weight| weight.to_string()).collect::<Vec<_>>().join(", ");
        writeln!(writer, "W[{index}]: [{weights}]")
    })?;

    writer.flush().map_err(|err| err.into())
}

/// Writes prototypes with quantization error as json.
pub fn write_json_prototypes<W: Write>(
    mut writer: BufWriter<W>,
    store: &PrototypeStore,
    quantization_error: Float,
) -> GenericResult<()> {
    let output = PrototypesOutput { prototypes: store.clone().into_weights(), quantization_error };

    serde_json::to_writer_pretty(&mut writer, &output).map_err(|err| format!("cannot write json: '{err}'"))?;
    writer.flush().map_err(|err| err.into())
}
