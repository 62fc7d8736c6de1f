//! Interactive command line for checking balances, looking up prices and
//! placing confirmed buy orders on Gemini.

pub mod command;
mod exchange;
mod shell;

pub use command::{parse, BuyCommand, Command, ParseError};
pub use exchange::Exchange;
pub use shell::{Shell, SEPARATOR};
