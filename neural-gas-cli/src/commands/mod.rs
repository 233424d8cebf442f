use clap::ArgMatches;

pub mod train;

use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::process;
use std::str::FromStr;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> File {
    File::open(path).unwrap_or_else(|err| {
        eprintln!("cannot open {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn create_file(path: &str, description: &str) -> File {
    File::create(path).unwrap_or_else(|err| {
        eprintln!("cannot create {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

/// Parses a pair of floats separated by comma, e.g. `0.5,0.005`.
fn parse_float_pair(matches: &ArgMatches, arg_name: &str, arg_desc: &str) -> Result<Option<(f64, f64)>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            let values = arg
                .split(',')
                .map(|value| value.trim().parse::<f64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'"))?;

            match values.as_slice() {
                &[first, second] => Ok(Some((first, second))),
                _ => Err(format!("expected two comma separated values, got '{arg}': '{arg_desc}'")),
            }
        })
        .unwrap_or(Ok(None))
}
