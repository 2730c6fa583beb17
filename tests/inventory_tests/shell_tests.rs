//! Tests for the interactive Shell
//!
//! These tests verify:
//! - Menu parsing, invalid entries and quitting
//! - Capture flow with retry-until-valid numeric input
//! - Restock confirmation and persistence
//! - Search, listings and on-sale output
//! - Behaviour on end of input and on save failure

use std::fs;
use std::io::Cursor;
use std::path::Path;

use shoestock::shell::{
    MenuChoice, Shell, INVALID_ENTRY, MISSING_FILE, NEGATIVE_NUMBER, NOT_A_NUMBER, NOT_FOUND,
    NO_STOCK,
};
use shoestock::store::{LoadReport, Store};
use shoestock::StockError;

use super::{sample_records, setup_temp_inventory};

// =============================================================================
// Helper Functions
// =============================================================================

/// Run a scripted session and return the store and everything printed
fn run_script(store: Store, script: &str) -> (Store, String) {
    let mut output = Vec::new();
    let mut shell = Shell::new(store, Cursor::new(script.as_bytes()), &mut output);
    shell.run().unwrap();
    let store = shell.into_store();
    (store, String::from_utf8(output).unwrap())
}

fn read_file(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

// =============================================================================
// Menu Tests
// =============================================================================

#[test]
fn test_menu_choice_parsing() {
    assert_eq!(MenuChoice::parse("ats"), Some(MenuChoice::AddItem));
    assert_eq!(MenuChoice::parse(" VA \n"), Some(MenuChoice::ListAll));
    assert_eq!(MenuChoice::parse("vv"), Some(MenuChoice::ListWithValue));
    assert_eq!(MenuChoice::parse("Sfs"), Some(MenuChoice::Search));
    assert_eq!(MenuChoice::parse("rs"), Some(MenuChoice::RestockLowest));
    assert_eq!(MenuChoice::parse("hq"), Some(MenuChoice::HighestQuantity));
    assert_eq!(MenuChoice::parse("quit"), Some(MenuChoice::Quit));
    assert_eq!(MenuChoice::parse("exit"), Some(MenuChoice::Quit));
    assert_eq!(MenuChoice::parse("delete"), None);
    assert_eq!(MenuChoice::parse(""), None);
}

#[test]
fn test_only_capture_and_restock_mutate() {
    assert!(MenuChoice::AddItem.mutates());
    assert!(MenuChoice::RestockLowest.mutates());
    assert!(!MenuChoice::ListAll.mutates());
    assert!(!MenuChoice::Search.mutates());
    assert!(!MenuChoice::HighestQuantity.mutates());
}

#[test]
fn test_quit_without_changes_does_not_write() {
    let (_temp, path) = setup_temp_inventory();

    let (_, output) = run_script(Store::with_records(&path, sample_records()), "q\n");

    assert!(output.contains("Please enter an option from the menu below:"));
    assert!(output.ends_with("Goodbye!\n"));
    assert!(!path.exists());
}

#[test]
fn test_end_of_input_ends_session() {
    let (_temp, path) = setup_temp_inventory();

    let (store, output) = run_script(Store::with_records(&path, sample_records()), "");

    assert_eq!(store.len(), 3);
    assert!(output.contains("Goodbye!"));
}

#[test]
fn test_invalid_entry_returns_to_menu() {
    let (_temp, path) = setup_temp_inventory();

    let (_, output) = run_script(Store::with_records(&path, sample_records()), "zzz\nq\n");

    assert!(output.contains(INVALID_ENTRY));
    assert_eq!(output.matches("Please enter an option").count(), 2);
}

// =============================================================================
// Capture Tests
// =============================================================================

#[test]
fn test_add_item_persists_immediately() {
    let (_temp, path) = setup_temp_inventory();
    let script = "ats\nUK\nA1\nSneaker\n20\n5\n";

    let (store, output) = run_script(Store::new(&path), script);

    assert!(output.contains("You have successfully added an item to inventory!"));
    assert_eq!(store.len(), 1);
    assert!(!store.is_dirty());
    assert_eq!(
        read_file(&path),
        "Country,Code,Product,Cost,Quantity\nUK,A1,Sneaker,20,5\n"
    );
}

#[test]
fn test_execute_saves_after_mutating_command_only() {
    let (_temp, path) = setup_temp_inventory();
    let mut output = Vec::new();
    let script = "C3\nFR\nD4\nClog\n15\n8\n";
    let mut shell = Shell::new(
        Store::with_records(&path, sample_records()),
        Cursor::new(script.as_bytes()),
        &mut output,
    );

    shell.execute(MenuChoice::Search).unwrap();
    assert!(!path.exists());

    shell.execute(MenuChoice::AddItem).unwrap();
    assert_eq!(shell.store().len(), 4);
    assert!(!shell.store().is_dirty());
    assert!(read_file(&path).ends_with("\nFR,D4,Clog,15,8\n"));
}

#[test]
fn test_add_item_retries_numeric_input() {
    let (_temp, path) = setup_temp_inventory();
    let script = "ats\n  UK \nA1\nTrail Runner\nabc\n-5\n20\n2.5\n0\nq\n";

    let (store, output) = run_script(Store::new(&path), script);

    assert!(output.contains(NOT_A_NUMBER));
    assert!(output.contains(NEGATIVE_NUMBER));
    let record = store.get(0).unwrap();
    assert_eq!(record.country, "UK");
    assert_eq!(record.product, "Trail Runner");
    assert_eq!(record.cost, 20);
    assert_eq!(record.quantity, 0);
}

#[test]
fn test_add_item_abandoned_at_end_of_input() {
    let (_temp, path) = setup_temp_inventory();

    let (store, _) = run_script(Store::new(&path), "ats\nUK\nA1\n");

    assert!(store.is_empty());
    assert!(!path.exists());
}

#[test]
fn test_save_failure_is_reported_and_store_stays_dirty() {
    let (temp, _path) = setup_temp_inventory();
    let path = temp.path().join("missing_dir").join("inventory.txt");

    let (store, output) = run_script(Store::new(&path), "ats\nUK\nA1\nSneaker\n20\n5\nq\n");

    assert!(output.contains("Could not save inventory"));
    assert_eq!(store.len(), 1);
    assert!(store.is_dirty());
}

// =============================================================================
// Restock Tests
// =============================================================================

#[test]
fn test_restock_lowest_confirmed() {
    let (_temp, path) = setup_temp_inventory();

    let (store, output) = run_script(
        Store::with_records(&path, sample_records()),
        "rs\nYes\n9\nq\n",
    );

    assert!(output.contains("Shoe with the lowest quantity:\nCountry:    US\nCode:       B2"));
    assert!(output.contains("The shoe has been successfully restocked!"));
    assert_eq!(store.get(1).unwrap().quantity, 10);
    assert!(read_file(&path).contains("\nUS,B2,Boot,50,10\n"));
}

#[test]
fn test_restock_retries_amount() {
    let (_temp, path) = setup_temp_inventory();

    let (store, output) = run_script(
        Store::with_records(&path, sample_records()),
        "rs\ny\nlots\n-1\n4\nq\n",
    );

    assert!(output.contains(NOT_A_NUMBER));
    assert!(output.contains(NEGATIVE_NUMBER));
    assert_eq!(store.get(1).unwrap().quantity, 5);
}

#[test]
fn test_restock_declined() {
    let (_temp, path) = setup_temp_inventory();

    let (store, output) = run_script(
        Store::with_records(&path, sample_records()),
        "rs\nno\nq\n",
    );

    assert!(output.contains("The shoe has not been restocked"));
    assert_eq!(store.get(1).unwrap().quantity, 1);
    assert!(!path.exists());
}

#[test]
fn test_restock_on_empty_store() {
    let (_temp, path) = setup_temp_inventory();

    let (_, output) = run_script(Store::new(&path), "rs\nq\n");

    assert!(output.contains(NO_STOCK));
    assert!(!output.contains("Please enter 'Yes'"));
}

// =============================================================================
// Query Command Tests
// =============================================================================

#[test]
fn test_search_found_and_not_found() {
    let (_temp, path) = setup_temp_inventory();

    let (_, output) = run_script(
        Store::with_records(&path, sample_records()),
        "sfs\nc3\nsfs\n C3 \nq\n",
    );

    assert!(output.contains(NOT_FOUND));
    assert!(output.contains("Country:    UK\nCode:       C3\nProduct:    Sandal"));
}

#[test]
fn test_highest_quantity_command() {
    let (_temp, path) = setup_temp_inventory();

    let (_, output) = run_script(Store::with_records(&path, sample_records()), "hq\nq\n");

    assert!(output.contains("Shoe to be put on sale:\nCountry:    UK\nCode:       A1"));
}

#[test]
fn test_highest_quantity_on_empty_store() {
    let (_temp, path) = setup_temp_inventory();

    let (_, output) = run_script(Store::new(&path), "hq\nq\n");

    assert!(output.contains(NO_STOCK));
}

#[test]
fn test_listings() {
    let (_temp, path) = setup_temp_inventory();

    let (_, plain) = run_script(Store::with_records(&path, sample_records()), "va\nq\n");
    let (_, valued) = run_script(Store::with_records(&path, sample_records()), "vv\nq\n");

    assert!(plain.contains("Sandal"));
    assert!(!plain.contains("Value (Cost x Quantity)"));
    assert!(valued.contains("Value (Cost x Quantity)"));
    assert!(valued.contains("100"));
}

// =============================================================================
// Startup Report Tests
// =============================================================================

#[test]
fn test_report_load_missing_file_and_skipped_lines() {
    let (_temp, path) = setup_temp_inventory();
    let report = LoadReport {
        records_loaded: 0,
        skipped: vec![StockError::MalformedRecord {
            line: 3,
            reason: "expected 5 fields, got 2".to_string(),
        }],
        unavailable: Some(StockError::StorageUnavailable { path: path.clone() }),
    };

    let mut output = Vec::new();
    let mut shell = Shell::new(Store::new(&path), Cursor::new(&b""[..]), &mut output);
    shell.report_load(&report).unwrap();
    drop(shell);
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains(MISSING_FILE));
    assert!(output.contains("Warning: Malformed record on line 3: expected 5 fields, got 2"));
}
