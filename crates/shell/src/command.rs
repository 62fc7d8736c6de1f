//! Parsing of the interactive commands.
//!
//! ```text
//! check
//! price SYMBOL
//! buy market AMOUNT SYMBOL
//! buy limit AMOUNT SYMBOL PRICE
//! exit
//! ```
//!
//! Keywords are case-insensitive; symbols are kept as typed.

use gemini_rest::OrderKind;
use rust_decimal::Decimal;
use thiserror::Error;

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print all balances.
    Check,
    /// Print the USD price of `symbol`.
    Price { symbol: String },
    /// Buy `usd_amount` worth of `symbol`.
    Buy(BuyCommand),
    /// Leave the shell.
    Exit,
    /// Anything that is not a known command.
    Invalid,
}

/// Arguments of a `buy` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyCommand {
    pub kind: OrderKind,
    pub usd_amount: Decimal,
    pub symbol: String,
}

impl BuyCommand {
    /// Price shown in the confirmation prompt.
    pub fn display_price(&self) -> String {
        match self.kind {
            OrderKind::Market => "MARKET_PRICE".to_string(),
            OrderKind::Limit { price } => price.to_string(),
        }
    }
}

/// A recognized command with malformed arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Wrong number of tokens for the command.
    #[error("'{command}' takes {expected} arguments, got {got}")]
    WrongArity {
        command: &'static str,
        expected: &'static str,
        got: usize,
    },

    /// `buy` keyword does not match the argument count.
    #[error("expected 'buy {expected}' for {got} arguments")]
    KindMismatch { expected: &'static str, got: usize },

    /// Amount or price is not a number.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}

/// Parse one line of input.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if line.eq_ignore_ascii_case("exit") {
        return Ok(Command::Exit);
    }
    if line.eq_ignore_ascii_case("check") {
        return Ok(Command::Check);
    }

    let Some(head) = tokens.first() else {
        return Ok(Command::Invalid);
    };

    match head.to_lowercase().as_str() {
        "price" => parse_price(&tokens),
        "buy" => parse_buy(&tokens).map(Command::Buy),
        _ => Ok(Command::Invalid),
    }
}

fn parse_price(tokens: &[&str]) -> Result<Command, ParseError> {
    match tokens {
        [_, symbol] => Ok(Command::Price {
            symbol: symbol.to_string(),
        }),
        _ => Err(ParseError::WrongArity {
            command: "price",
            expected: "1",
            got: tokens.len() - 1,
        }),
    }
}

fn parse_buy(tokens: &[&str]) -> Result<BuyCommand, ParseError> {
    match tokens {
        [_, kind, amount, symbol] => {
            if !kind.eq_ignore_ascii_case("market") {
                return Err(ParseError::KindMismatch {
                    expected: "market",
                    got: 3,
                });
            }
            Ok(BuyCommand {
                kind: OrderKind::Market,
                usd_amount: parse_number(amount)?,
                symbol: symbol.to_string(),
            })
        }
        [_, kind, amount, symbol, price] => {
            if !kind.eq_ignore_ascii_case("limit") {
                return Err(ParseError::KindMismatch {
                    expected: "limit",
                    got: 4,
                });
            }
            Ok(BuyCommand {
                kind: OrderKind::Limit {
                    price: parse_number(price)?,
                },
                usd_amount: parse_number(amount)?,
                symbol: symbol.to_string(),
            })
        }
        _ => Err(ParseError::WrongArity {
            command: "buy",
            expected: "3 or 4",
            got: tokens.len() - 1,
        }),
    }
}

fn parse_number(token: &str) -> Result<Decimal, ParseError> {
    let token = token.trim_start_matches('$');
    token
        .parse::<Decimal>()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_check() {
        assert_eq!(parse("check"), Ok(Command::Check));
        assert_eq!(parse("  CHECK \n"), Ok(Command::Check));
    }

    #[test]
    fn test_exit_case_insensitive() {
        assert_eq!(parse("exit"), Ok(Command::Exit));
        assert_eq!(parse("Exit"), Ok(Command::Exit));
        assert_eq!(parse(" EXIT "), Ok(Command::Exit));
    }

    #[test]
    fn test_price() {
        assert_eq!(
            parse("price BTC"),
            Ok(Command::Price {
                symbol: "BTC".into()
            })
        );
        assert_eq!(
            parse("PRICE eth"),
            Ok(Command::Price {
                symbol: "eth".into()
            })
        );
    }

    #[test]
    fn test_price_wrong_arity() {
        assert!(matches!(
            parse("price"),
            Err(ParseError::WrongArity { got: 0, .. })
        ));
        assert!(matches!(
            parse("price btc eth"),
            Err(ParseError::WrongArity { got: 2, .. })
        ));
    }

    #[test]
    fn test_buy_market() {
        assert_eq!(
            parse("BUY market 100 btc"),
            Ok(Command::Buy(BuyCommand {
                kind: OrderKind::Market,
                usd_amount: dec!(100),
                symbol: "btc".into(),
            }))
        );
    }

    #[test]
    fn test_buy_limit() {
        assert_eq!(
            parse("buy limit 50 eth 2000"),
            Ok(Command::Buy(BuyCommand {
                kind: OrderKind::Limit { price: dec!(2000) },
                usd_amount: dec!(50),
                symbol: "eth".into(),
            }))
        );
    }

    #[test]
    fn test_buy_keyword_case_insensitive() {
        assert!(matches!(parse("buy MARKET 10 btc"), Ok(Command::Buy(_))));
        assert!(matches!(parse("Buy Limit 10 btc 9000"), Ok(Command::Buy(_))));
    }

    #[test]
    fn test_buy_kind_must_match_arity() {
        assert_eq!(
            parse("buy limit 100 btc"),
            Err(ParseError::KindMismatch {
                expected: "market",
                got: 3
            })
        );
        assert_eq!(
            parse("buy market 100 btc 9000"),
            Err(ParseError::KindMismatch {
                expected: "limit",
                got: 4
            })
        );
    }

    #[test]
    fn test_buy_wrong_arity() {
        assert!(matches!(
            parse("buy market 100"),
            Err(ParseError::WrongArity { got: 2, .. })
        ));
        assert!(matches!(
            parse("buy limit 100 btc 9000 extra"),
            Err(ParseError::WrongArity { got: 5, .. })
        ));
    }

    #[test]
    fn test_buy_invalid_numbers() {
        assert_eq!(
            parse("buy market lots btc"),
            Err(ParseError::InvalidNumber("lots".into()))
        );
        assert_eq!(
            parse("buy limit 100 btc cheap"),
            Err(ParseError::InvalidNumber("cheap".into()))
        );
    }

    #[test]
    fn test_dollar_sign_accepted() {
        assert!(matches!(
            parse("buy market $25 btc"),
            Ok(Command::Buy(BuyCommand { usd_amount, .. })) if usd_amount == dec!(25)
        ));
    }

    #[test]
    fn test_invalid() {
        assert_eq!(parse("foobar"), Ok(Command::Invalid));
        assert_eq!(parse(""), Ok(Command::Invalid));
        assert_eq!(parse("check btc"), Ok(Command::Invalid));
        assert_eq!(parse("sell market 10 btc"), Ok(Command::Invalid));
    }

    #[test]
    fn test_display_price() {
        let market = BuyCommand {
            kind: OrderKind::Market,
            usd_amount: dec!(100),
            symbol: "btc".into(),
        };
        let limit = BuyCommand {
            kind: OrderKind::Limit { price: dec!(2000) },
            ..market.clone()
        };

        assert_eq!(market.display_price(), "MARKET_PRICE");
        assert_eq!(limit.display_price(), "2000");
    }
}
