//! Menu definitions
//!
//! Maps typed menu codes onto shell commands.

/// Menu shown before every choice
pub const MENU: &str = "\
Please enter an option from the menu below:
ats - Capture data about a shoe and add it to inventory
va - view inventory of all shoes
vv - view value of inventory of all shoes
sfs - search for a shoe and display its data
rs - restock shoe with lowest inventory
hq - view the current item to be put for sale (the one with the highest quantity)
q - quit
: ";

/// A command picked from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Capture a new shoe, then persist
    AddItem,

    /// Table of every shoe
    ListAll,

    /// Table of every shoe with its stock value
    ListWithValue,

    /// Look a shoe up by code
    Search,

    /// Offer to restock the lowest-quantity shoe
    RestockLowest,

    /// Show the highest-quantity shoe
    HighestQuantity,

    /// Leave the shell
    Quit,
}

impl MenuChoice {
    /// Parse a menu entry; case and surrounding whitespace are ignored
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim().to_lowercase().as_str() {
            "ats" => MenuChoice::AddItem,
            "va" => MenuChoice::ListAll,
            "vv" => MenuChoice::ListWithValue,
            "sfs" => MenuChoice::Search,
            "rs" => MenuChoice::RestockLowest,
            "hq" => MenuChoice::HighestQuantity,
            "q" | "quit" | "exit" => MenuChoice::Quit,
            _ => return None,
        };
        Some(choice)
    }

    /// Whether running this command changes the store
    pub fn mutates(&self) -> bool {
        matches!(self, MenuChoice::AddItem | MenuChoice::RestockLowest)
    }
}
