//! The read-eval-print loop.

use crate::command::{self, BuyCommand, Command};
use crate::exchange::Exchange;
use gemini_rest::Balance;
use std::io::{self, BufRead, Write};

/// Line printed after every command.
pub const SEPARATOR: &str =
    "___________________________________________________________________________________________________";

const HELP: &[&str] = &[
    "Type 'Buy [MARKET or LIMIT] [DOLLAR AMOUNT] [SYMBOL] [LIMIT PRICE]' to buy a certain dollar amount of an asset",
    "Type 'Check' to check your balances",
    "Type 'Price [SYMBOL]' to get the current price of the asset",
    "Type 'Exit' to stop this program",
];

/// Exact answer required at the buy confirmation prompt.
const CONFIRMATION: &str = "YES";

/// Interactive shell over an exchange, reading commands from `input` and
/// writing results to `output`.
pub struct Shell<'a, E: Exchange + ?Sized, R, W> {
    exchange: &'a E,
    input: R,
    output: W,
}

impl<'a, E, R, W> Shell<'a, E, R, W>
where
    E: Exchange + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(exchange: &'a E, input: R, output: W) -> Self {
        Self {
            exchange,
            input,
            output,
        }
    }

    /// Run until `exit` or end of input.
    ///
    /// Exchange errors are reported and the loop continues; only I/O errors
    /// on the console end it early.
    pub async fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to Gemini Command Line")?;
        self.check().await?;

        loop {
            for line in HELP {
                writeln!(self.output, "{line}")?;
            }

            let Some(line) = self.prompt(">>>>")? else {
                tracing::debug!("End of input");
                break;
            };

            match command::parse(&line) {
                Ok(Command::Exit) => break,
                Ok(cmd) => self.dispatch(cmd).await?,
                Err(e) => {
                    tracing::debug!(input = %line, error = %e, "Discarding malformed command");
                }
            }

            writeln!(self.output, "{SEPARATOR}")?;
        }

        writeln!(self.output, "Bye Bye")?;
        self.output.flush()
    }

    /// Consume the shell, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    async fn dispatch(&mut self, cmd: Command) -> io::Result<()> {
        match cmd {
            Command::Check => self.check().await,
            Command::Price { symbol } => match self.exchange.price(&symbol).await {
                Ok(price) => writeln!(self.output, "Price is {price}"),
                Err(e) => self.report(&e),
            },
            Command::Buy(order) => self.buy(order).await,
            Command::Invalid => writeln!(self.output, "You did not type a valid command"),
            Command::Exit => Ok(()),
        }
    }

    async fn check(&mut self) -> io::Result<()> {
        match self.exchange.balances().await {
            Ok(balances) => self.print_balances(&balances),
            Err(e) => self.report(&e),
        }
    }

    async fn buy(&mut self, order: BuyCommand) -> io::Result<()> {
        let question = format!(
            "type YES to buy ${} of {} at ${} >>",
            order.usd_amount,
            order.symbol,
            order.display_price()
        );

        let confirmed = self.prompt(&question)?.as_deref() == Some(CONFIRMATION);
        if !confirmed {
            return writeln!(self.output, "Cancelled Buy (Did not type YES)");
        }

        writeln!(self.output, "Buying...")?;
        match self
            .exchange
            .buy(order.kind, &order.symbol, order.usd_amount)
            .await
        {
            Ok(bought) => writeln!(self.output, "Bought: {bought}"),
            Err(e) => self.report(&e),
        }
    }

    fn print_balances(&mut self, balances: &[Balance]) -> io::Result<()> {
        writeln!(self.output, "Here are your balances:")?;
        for balance in balances {
            writeln!(self.output, "  {}: {}", balance.currency, balance.amount)?;
        }
        Ok(())
    }

    fn report(&mut self, error: &dyn std::error::Error) -> io::Result<()> {
        tracing::debug!(error = %error, "Command failed");
        writeln!(self.output, "Error: {error}")
    }

    /// Print `text` and read one line without its line terminator.
    /// `None` at end of input. Invalid UTF-8 is replaced, not rejected.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
