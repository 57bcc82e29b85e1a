// CLI module
//
// This module contains command-line interface functionality:
// - arguments: Command-line argument parsing and validation

pub mod arguments;

pub use arguments::LinkgateArguments;
