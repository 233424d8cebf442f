//! A crate with helper functionality used by command line interface to Neural Gas trainer:
//! reading datasets and writing trained prototypes.

#![warn(missing_docs)]

pub mod extensions;
