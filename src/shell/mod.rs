//! Shell Module
//!
//! Interactive menu over a [`Store`](crate::store::Store).
//!
//! ## Responsibilities
//! - Present the menu and parse choices
//! - Collect and validate console input (retry until valid)
//! - Call store operations and render their results
//! - Persist immediately after every mutating command
//!
//! ## Command Surface
//! ```text
//! ats  add-and-persist     Store::add, Store::save
//! va   list-all            Store::with_values (values omitted)
//! vv   list-with-value     Store::with_values
//! sfs  search-by-code      Store::find_by_code
//! rs   restock-lowest      Store::lowest_quantity, Store::restock, Store::save
//! hq   highest-quantity    Store::highest_quantity
//! q    quit
//! ```

mod input;
mod menu;
mod render;
mod session;

pub use input::{parse_confirmation, parse_non_negative, NEGATIVE_NUMBER, NOT_A_NUMBER};
pub use menu::{MenuChoice, MENU};
pub use render::{
    highest_report, inventory_table, lowest_report, search_report, Table, INVALID_ENTRY,
    MISSING_FILE, NOT_FOUND, NO_STOCK,
};
pub use session::Shell;
