//! Provides the way to read a training dataset.

#[cfg(test)]
#[path = "../../tests/unit/extensions/dataset_test.rs"]
mod dataset_test;

use neural_gas::prelude::{Float, GenericResult};
use std::io::{BufReader, Read};

/// Returns a small dataset of three dimensional points grouped around four regions.
pub fn get_sample_dataset() -> Vec<Vec<Float>> {
    vec![
        vec![0.9, 0.1, 0.1],
        vec![0.8, 0.2, 0.2],
        vec![0.1, 0.9, 0.1],
        vec![0.2, 0.8, 0.2],
        vec![0.5, 0.5, 0.5],
        vec![0.6, 0.6, 0.6],
        vec![0.1, 0.1, 0.9],
        vec![0.2, 0.2, 0.8],
        vec![0.15, 0.85, 0.1],
        vec![0.85, 0.15, 0.1],
    ]
}

/// Reads dataset from csv without header: one vector per row, one component per column.
pub fn read_csv_dataset<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<Vec<Float>>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(false).trim(csv::Trim::All).from_reader(reader);

    reader
        .records()
        .enumerate()
        .map(|(row, record)| {
            let record = record.map_err(|err| format!("cannot read csv row {row}: '{err}'"))?;

            record
                .iter()
                .map(|value| {
                    value.parse::<Float>().map_err(|err| format!("cannot parse '{value}' in csv row {row}: '{err}'"))
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, String>>()
        .map_err(|err| err.into())
}

/// Reads dataset from json as an array of arrays of numbers.
pub fn read_json_dataset<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<Vec<Float>>> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot read json dataset: '{err}'").into())
}
