// wordoverlap: pairwise vocabulary overlap between plain-text documents.
//
// This is the library root. The binary in main.rs wires these modules to
// the command line.

pub mod config;
pub mod corpus;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod ranking;
pub mod similarity;
