//! Console text for the inventory menu

use std::io::{self, Write};

use crate::domain::cd::Cd;

pub const CHOICE_PROMPT: &str = "Which operation would you like to perform? [l, a, i, d, s or x]: ";
pub const MISSING_FILE: &str = "No Database file currently exists.  Please add and save compact disc information to create a file.";

pub fn print_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "Menu\n\n[l] load Inventory from file\n[a] Add CD\n[i] Display Current Inventory"
    )?;
    writeln!(
        out,
        "[d] delete CD from Inventory\n[s] Save Inventory to file\n[x] exit\n"
    )
}

pub fn show_inventory(out: &mut impl Write, records: &[Cd]) -> io::Result<()> {
    writeln!(out, "======= The Current Inventory: =======")?;
    writeln!(out, "ID\tCD Title (by: Artist)\n")?;
    for cd in records {
        writeln!(out, "{cd}")?;
    }
    writeln!(out, "======================================")
}
