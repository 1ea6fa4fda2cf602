//! # Shell
//!
//! Line-oriented front end: reads one command per line, runs it against the
//! storefront and prints the re-rendered screen.
//!
//! ## Commands
//! ```text
//! products | p              show the product page
//! cart | c                  show the cart page
//! nav                       press the nav button
//! show <sku>                show one product
//! add <sku>                 add one unit to the cart
//! qty <sku> <n>             set a line's quantity
//! remove <sku> | rm <sku>   remove a line
//! order                     place the order
//! dispatch <json>           send a wire-form action
//! config                    print the active configuration
//! help | ?                  list commands
//! quit | exit | q           leave
//! ```

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, info};

use crate::app::Storefront;
use crate::error::ApiError;
use crate::views::{Page, ProductCard};

const HELP: &str = "\
products | p              show the product page
cart | c                  show the cart page
nav                       press the nav button
show <sku>                show one product
add <sku>                 add one unit to the cart
qty <sku> <n>             set a line's quantity
remove <sku> | rm <sku>   remove a line
order                     place the order
dispatch <json>           send a wire-form action
config                    print the active configuration
help | ?                  list commands
quit | exit | q           leave
";

const PROMPT: &str = "> ";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show(Page),
    Nav,
    Product(String),
    Add(String),
    Quantity(String, u32),
    Remove(String),
    Order,
    Dispatch(String),
    Config,
    Help,
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' is not a quantity")]
    InvalidQuantity(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((line, ""));
        let mut args = rest.split_whitespace();

        let sku = |command: &'static str, arg: Option<&str>| {
            arg.map(str::to_string)
                .ok_or(ParseCommandError::MissingArgument {
                    command,
                    argument: "a sku",
                })
        };

        match word {
            "products" | "p" => Ok(Command::Show(Page::Products)),
            "cart" | "c" => Ok(Command::Show(Page::Cart)),
            "nav" => Ok(Command::Nav),
            "show" => Ok(Command::Product(sku("show", args.next())?)),
            "add" => Ok(Command::Add(sku("add", args.next())?)),
            "remove" | "rm" => Ok(Command::Remove(sku("remove", args.next())?)),
            "qty" => {
                let target = sku("qty", args.next())?;
                let quantity = args.next().ok_or(ParseCommandError::MissingArgument {
                    command: "qty",
                    argument: "a quantity",
                })?;
                let quantity = quantity
                    .parse::<u32>()
                    .map_err(|_| ParseCommandError::InvalidQuantity(quantity.to_string()))?;
                Ok(Command::Quantity(target, quantity))
            }
            "order" => Ok(Command::Order),
            "dispatch" if !rest.is_empty() => Ok(Command::Dispatch(rest.to_string())),
            "dispatch" => Err(ParseCommandError::MissingArgument {
                command: "dispatch",
                argument: "an action in JSON",
            }),
            "config" => Ok(Command::Config),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

/// Runs the shell until `quit` or end of input.
pub fn run<R, W>(app: &mut Storefront, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", app.render())?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "error: {}", e)?;
                write!(output, "{}", PROMPT)?;
                output.flush()?;
                continue;
            }
        };
        debug!(?command, "shell command");

        // `Some(text)` is printed as is; `None` re-renders the screen.
        let result: Result<Option<String>, ApiError> = match command {
            Command::Quit => break,
            Command::Help => Ok(Some(HELP.to_string())),
            Command::Product(sku) => app
                .product(&sku)
                .map(|listing| Some(ProductCard::new(&listing).to_string())),
            Command::Config => serde_json::to_string_pretty(&app.config())
                .map(|json| Some(json + "\n"))
                .map_err(ApiError::from),
            Command::Show(page) => {
                app.show(page);
                Ok(None)
            }
            Command::Nav => {
                app.toggle_page();
                Ok(None)
            }
            Command::Add(sku) => app.add(&sku).map(|_| None),
            Command::Quantity(sku, quantity) => app.set_quantity(&sku, quantity).map(|_| None),
            Command::Remove(sku) => app.remove(&sku).map(|_| None),
            Command::Order => app.place_order().map(|ordered| {
                info!(
                    total_items = ordered.totals.total_items,
                    total_price = %ordered.totals.total_price,
                    "order placed"
                );
                None
            }),
            Command::Dispatch(json) => app.dispatch_json(&json).map(|_| None),
        };

        match result {
            Ok(Some(text)) => write!(output, "{}", text)?,
            Ok(None) => write!(output, "{}", app.render())?,
            Err(e) => writeln!(output, "error: {}", e)?,
        }
        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    Ok(())
}
