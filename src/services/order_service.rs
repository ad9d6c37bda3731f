use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    models::{FlattenedMenuEntry, LineItem, MenuCatalog, Order, OrderError, DEFAULT_QUANTITY},
    services::console::Console,
    utils::formatting::format_menu,
};

/// Typed at the selection prompt to leave without a total.
pub const QUIT_SENTINEL: &str = "q";
/// Typed at the keep-ordering prompt to finish and price the order.
pub const STOP_SENTINEL: &str = "n";

const WELCOME: &str = "Welcome to the Generic Take Out Restaurant.";
const ORDER_PROMPT: &str = "What would you like to order? ";
const SELECTION_PROMPT: &str = "Type menu number: ";
const CONTINUE_PROMPT: &str = "Would you like to keep ordering? (N)o to quit: ";
const THANK_YOU: &str = "Thank you for your order!";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Order could not be priced: {0}")]
    Order(#[from] OrderError),
}

/// A quantity typed as digits that doesn't fit the quantity type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{input} is more than {max} and cannot be ordered")]
pub struct QuantityTooLarge {
    pub input: String,
    pub max: u64,
}

/// How an ordering session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Quit sentinel at the selection prompt. No total is computed.
    Quit,
    /// Stop sentinel at the keep-ordering prompt. Total is computed.
    Stopped,
    /// Input closed mid-session; treated like [`SessionEnd::Quit`].
    EndOfInput,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub order: Order,
    pub total: Decimal,
    pub ended_by: SessionEnd,
}

/// What a line typed at the selection prompt means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Quit,
    /// A 1-based menu number known to be in range.
    Item(usize),
    Invalid,
}

fn is_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Classify selection input against a menu of `item_count` entries.
///
/// Only a plain run of ASCII digits counts as a number; signs, spaces and
/// decimals make the selection invalid.
pub fn parse_selection(input: &str, item_count: usize) -> Selection {
    if input.eq_ignore_ascii_case(QUIT_SENTINEL) {
        return Selection::Quit;
    }

    if !is_digits(input) {
        return Selection::Invalid;
    }

    match input.parse::<usize>() {
        Ok(n) if (1..=item_count).contains(&n) => Selection::Item(n),
        _ => Selection::Invalid,
    }
}

/// Quantity typed by the customer, or [`DEFAULT_QUANTITY`] for anything
/// that isn't a plain non-negative number.
///
/// A digit run beyond `u64::MAX` is reported rather than replaced.
pub fn parse_quantity(input: &str) -> Result<u64, QuantityTooLarge> {
    if !is_digits(input) {
        return Ok(DEFAULT_QUANTITY);
    }
    input.parse().map_err(|_| QuantityTooLarge {
        input: input.to_string(),
        max: u64::MAX,
    })
}

fn quantity_prompt(entry: &FlattenedMenuEntry) -> String {
    format!(
        "What quantity of {} would you like? \n(This will default to 1 if number is not entered)\n",
        entry.display_name()
    )
}

/// Interactive loop that turns menu selections into an [`Order`].
pub struct OrderSession {
    entries: Vec<FlattenedMenuEntry>,
}

impl OrderSession {
    pub fn new(catalog: &MenuCatalog) -> Self {
        Self {
            entries: catalog.flatten(),
        }
    }

    /// Run the session to completion.
    ///
    /// The order total is only computed when the customer answers the
    /// keep-ordering prompt with the stop sentinel. Leaving through the quit
    /// sentinel (or closing input) returns whatever was ordered with a total
    /// of zero.
    pub fn run<C: Console>(&self, console: &mut C) -> Result<SessionOutcome, SessionError> {
        info!("Ordering session started with {} menu items", self.entries.len());

        let mut order = Order::new();
        console.say(WELCOME)?;

        loop {
            console.say(ORDER_PROMPT)?;
            console.say(&format_menu(&self.entries))?;

            let input = match console.ask(SELECTION_PROMPT)? {
                Some(input) => input,
                None => return Ok(Self::leave(order, SessionEnd::EndOfInput)),
            };

            match parse_selection(&input, self.entries.len()) {
                Selection::Quit => return Ok(Self::leave(order, SessionEnd::Quit)),
                Selection::Item(index) => {
                    let entry = &self.entries[index - 1];
                    debug!("Selected #{}: {}", index, entry.display_name());

                    let quantity = match Self::ask_quantity(console, entry)? {
                        Some(quantity) => quantity,
                        None => return Ok(Self::leave(order, SessionEnd::EndOfInput)),
                    };

                    let item = LineItem::from_entry(entry, quantity);
                    let summary = format!("{} x {} @ {}", item.quantity, item.name, item.price);
                    match order.push(item) {
                        Ok(()) => debug!("Added {}", summary),
                        Err(e) => {
                            warn!("Refused {}: {}", summary, e);
                            console.say(&format!("{}. It was not added to your order.", e))?;
                        }
                    }
                }
                Selection::Invalid => {
                    warn!("Rejected menu selection: {:?}", input);
                    console.say("Invalid item number. Please try again.")?;
                    console.say(&format!("{} was not a menu option.", input))?;
                }
            }

            let answer = match console.ask(CONTINUE_PROMPT)? {
                Some(answer) => answer,
                None => return Ok(Self::leave(order, SessionEnd::EndOfInput)),
            };

            if answer.eq_ignore_ascii_case(STOP_SENTINEL) {
                console.say(THANK_YOU)?;
                let total = order.total()?;
                info!("Order placed: {} line items, total {}", order.len(), total);
                return Ok(SessionOutcome {
                    order,
                    total,
                    ended_by: SessionEnd::Stopped,
                });
            }
        }
    }

    /// Ask until the answer is usable; `None` once input is closed.
    fn ask_quantity<C: Console>(
        console: &mut C,
        entry: &FlattenedMenuEntry,
    ) -> Result<Option<u64>, SessionError> {
        loop {
            let answer = match console.ask(&quantity_prompt(entry))? {
                Some(answer) => answer,
                None => return Ok(None),
            };

            match parse_quantity(&answer) {
                Ok(quantity) => return Ok(Some(quantity)),
                Err(e) => {
                    warn!("Rejected quantity: {}", e);
                    console.say(&format!("{}.", e))?;
                }
            }
        }
    }

    fn leave(order: Order, ended_by: SessionEnd) -> SessionOutcome {
        match ended_by {
            SessionEnd::EndOfInput => warn!("Input closed, leaving with {} line items", order.len()),
            _ => info!("Customer quit with {} line items", order.len()),
        }

        SessionOutcome {
            order,
            total: Decimal::ZERO,
            ended_by,
        }
    }
}
