#[cfg(test)]
#[path = "../../tests/unit/commands/train_test.rs"]
mod train_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use neural_gas::algorithms::gas::{DEFAULT_DIMENSION, DEFAULT_ITERATIONS, DEFAULT_NEURONS};
use neural_gas::prelude::*;
use neural_gas_cli::extensions::dataset::{get_sample_dataset, read_csv_dataset, read_json_dataset};
use neural_gas_cli::extensions::output::{write_json_prototypes, write_text_prototypes};
use std::io::BufReader;
use std::sync::Arc;

pub const DATASET_ARG_NAME: &str = "DATASET";
pub const FORMAT_ARG_NAME: &str = "format";
pub const NEURONS_ARG_NAME: &str = "neurons";
pub const ITERATIONS_ARG_NAME: &str = "iterations";
pub const SEED_ARG_NAME: &str = "seed";
pub const LEARNING_RATE_ARG_NAME: &str = "learning-rate";
pub const NEIGHBORHOOD_WIDTH_ARG_NAME: &str = "neighborhood-width";
pub const OUT_FORMAT_ARG_NAME: &str = "out-format";
pub const OUT_RESULT_ARG_NAME: &str = "out-result";
pub const LOG_ARG_NAME: &str = "log";

pub fn get_train_app() -> Command {
    Command::new("train")
        .about("Trains a Neural Gas network on a dataset and writes its prototypes")
        .arg(
            Arg::new(DATASET_ARG_NAME)
                .help("Sets the dataset file to use, a built-in sample dataset is used if omitted")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies dataset format")
                .short('f')
                .long(FORMAT_ARG_NAME)
                .required(false)
                .default_value("csv")
                .value_parser(["csv", "json"]),
        )
        .arg(
            Arg::new(NEURONS_ARG_NAME)
                .help("Specifies amount of prototypes")
                .short('n')
                .long(NEURONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ITERATIONS_ARG_NAME)
                .help("Specifies amount of training iterations")
                .short('i')
                .long(ITERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies a seed to make training repeatable")
                .short('s')
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LEARNING_RATE_ARG_NAME)
                .help("Specifies initial and final learning rate separated by comma, e.g. 0.5,0.005")
                .long(LEARNING_RATE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(NEIGHBORHOOD_WIDTH_ARG_NAME)
                .help("Specifies initial and final neighborhood width separated by comma, e.g. 2,0.01")
                .long(NEIGHBORHOOD_WIDTH_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_FORMAT_ARG_NAME)
                .help("Specifies result format")
                .long(OUT_FORMAT_ARG_NAME)
                .required(false)
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether training progress should be logged into stderr")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_train(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let dataset = read_dataset(matches)?;
    let trainer = create_trainer(matches, dataset.first().map_or(DEFAULT_DIMENSION, |data| data.len()))?;

    let (store, _) = trainer.train(dataset.as_slice()).map_err(|err| format!("cannot train network: '{err}'"))?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let out_buffer = out_writer_func(out_result);

    let result = match matches.get_one::<String>(OUT_FORMAT_ARG_NAME).map(String::as_str) {
        Some("json") => store
            .quantization_error(dataset.as_slice())
            .map_err(GenericError::from)
            .and_then(|quantization_error| write_json_prototypes(out_buffer, &store, quantization_error)),
        _ => write_text_prototypes(out_buffer, &store),
    };

    result.map_err(|err| format!("cannot write result: '{err}'"))
}

fn read_dataset(matches: &ArgMatches) -> Result<Vec<Vec<Float>>, String> {
    let Some(path) = matches.get_one::<String>(DATASET_ARG_NAME) else {
        return Ok(get_sample_dataset());
    };

    let reader = BufReader::new(open_file(path, "dataset"));

    let dataset = match matches.get_one::<String>(FORMAT_ARG_NAME).map(String::as_str) {
        Some("json") => read_json_dataset(reader),
        _ => read_csv_dataset(reader),
    };

    dataset.map_err(|err| format!("cannot read dataset: '{err}'"))
}

fn create_trainer(matches: &ArgMatches, dimension: usize) -> Result<NeuralGasTrainer, String> {
    let neurons = parse_int_value::<usize>(matches, NEURONS_ARG_NAME, "neurons")?.unwrap_or(DEFAULT_NEURONS);
    let iterations =
        parse_int_value::<usize>(matches, ITERATIONS_ARG_NAME, "iterations")?.unwrap_or(DEFAULT_ITERATIONS);
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?;
    let learning_rate = parse_float_pair(matches, LEARNING_RATE_ARG_NAME, "learning rate")?;
    let neighborhood_width = parse_float_pair(matches, NEIGHBORHOOD_WIDTH_ARG_NAME, "neighborhood width")?;

    let mut builder = NeuralGasBuilder::default()
        .with_neurons(neurons)
        .with_dimension(dimension)
        .with_iterations(iterations)
        .with_logger(Arc::new(|msg: &str| eprintln!("{msg}")));

    if let Some(seed) = seed {
        builder = builder.with_seed(seed);
    }

    if let Some((initial, last)) = learning_rate {
        builder = builder.with_learning_rate(initial, last);
    }

    if let Some((initial, last)) = neighborhood_width {
        builder = builder.with_neighborhood_width(initial, last);
    }

    if matches.get_flag(LOG_ARG_NAME) {
        builder = builder.with_telemetry(TelemetryMode::OnlyLogging { log_every: (iterations / 10).max(1) });
    }

    builder.build().map_err(|err| format!("cannot create trainer: '{err}'"))
}
