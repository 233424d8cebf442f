//! A command line interface to *Neural Gas* trainer.

mod commands;

use crate::commands::create_write_buffer;
use crate::commands::train::{get_train_app, run_train};
use clap::Command;
use std::process;

fn main() {
    let matches = Command::new("Neural Gas Trainer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to Neural Gas trainer")
        .subcommand(get_train_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("train", train_matches)) => run_train(train_matches, create_write_buffer),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
