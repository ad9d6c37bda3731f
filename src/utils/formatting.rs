use rust_decimal::Decimal;

use crate::models::{FlattenedMenuEntry, LineItem, Order};

/// Width of the item-name column on both the menu and the receipt.
pub const NAME_COLUMN_WIDTH: usize = 32;
/// Width of the price text on a receipt line (after the `$`).
pub const PRICE_COLUMN_WIDTH: usize = 6;

const MENU_RULE: &str = "--------------------------------------------------";
const RECEIPT_RULE: &str = "----------------------------------------------------";

/// Left-align `text` in a column of `width` characters.
///
/// Text that is already wider than the column is returned unchanged; the
/// following delimiter then just lands further right.
pub fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

pub fn format_menu_heading() -> String {
    [
        MENU_RULE,
        "Item # | Item name                        | Price",
        "-------|----------------------------------|-------",
    ]
    .join("\n")
}

pub fn format_menu_line(entry: &FlattenedMenuEntry) -> String {
    let gap = if entry.index < 10 { 6 } else { 5 };
    format!(
        "{}{}| {} | ${}",
        entry.index,
        " ".repeat(gap),
        pad(&entry.display_name(), NAME_COLUMN_WIDTH),
        entry.price
    )
}

/// Heading plus one line per entry, as shown before every selection.
pub fn format_menu(entries: &[FlattenedMenuEntry]) -> String {
    std::iter::once(format_menu_heading())
        .chain(entries.iter().map(format_menu_line))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_receipt_heading() -> String {
    [
        RECEIPT_RULE,
        "Item name                       | Price  | Quantity",
        "--------------------------------|--------|----------",
    ]
    .join("\n")
}

/// Receipt prices read like a float: trailing zeros dropped, but always at
/// least one decimal place (`2` -> `2.0`, `2.50` -> `2.5`).
pub fn format_receipt_price(price: Decimal) -> String {
    let price = price.normalize();
    if price.scale() == 0 {
        format!("{}.0", price)
    } else {
        price.to_string()
    }
}

pub fn format_receipt_line(item: &LineItem) -> String {
    format!(
        "{}| ${}| {}",
        pad(&item.name, NAME_COLUMN_WIDTH),
        pad(&format_receipt_price(item.price), PRICE_COLUMN_WIDTH),
        item.quantity
    )
}

pub fn format_receipt_footer(total: Decimal) -> String {
    format!("{RECEIPT_RULE}\nTotal price: ${total:.2}\n{RECEIPT_RULE}")
}

/// One receipt line per line item, in the order they were placed.
pub fn format_itemized_receipt(order: &Order) -> Vec<String> {
    order.items().iter().map(format_receipt_line).collect()
}
