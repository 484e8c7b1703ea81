//! Interactive inventory menu.
//!
//! [`App`] owns the inventory, the data file path and the console handles.
//! Every turn prints the menu, reads one choice and dispatches it. Storage
//! failures other than a missing data file or a malformed id end the session.

use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::Context;

use crate::storage::{
    error::StorageError,
    file::{self, LoadOutcome},
    operations::{Inventory, parse_id},
};

pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    Add,
    Inventory,
    Delete,
    Save,
    Exit,
}

impl MenuChoice {
    /// Accepts a single command letter, case insensitive
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "l" => Some(Self::Load),
            "a" => Some(Self::Add),
            "i" => Some(Self::Inventory),
            "d" => Some(Self::Delete),
            "s" => Some(Self::Save),
            "x" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the menu loop keeps going after a command
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct App<R, W> {
    inventory: Inventory,
    data_file: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(data_file: PathBuf, input: R, output: W) -> Self {
        Self {
            inventory: Inventory::new(),
            data_file,
            input,
            output,
        }
    }

    /// Loads the data file, then runs the menu until exit or end of input.
    ///
    /// Unsaved changes are dropped on exit.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.reload()?;

        loop {
            view::print_menu(&mut self.output)?;
            let Some(choice) = self.read_choice()? else {
                log::debug!("Input closed, leaving menu");
                break;
            };
            log::debug!("Menu choice: {choice:?}");

            let flow = match choice {
                MenuChoice::Exit => Flow::Exit,
                MenuChoice::Load => self.load()?,
                MenuChoice::Add => self.add()?,
                MenuChoice::Inventory => {
                    self.show()?;
                    Flow::Continue
                }
                MenuChoice::Delete => self.delete()?,
                MenuChoice::Save => self.save()?,
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn load(&mut self) -> anyhow::Result<Flow> {
        writeln!(
            self.output,
            "WARNING: If you continue, all unsaved data will be lost and the Inventory re-loaded from file."
        )?;
        let Some(answer) = self.prompt(
            "type 'yes' to continue and reload from file. otherwise reload will be canceled: ",
        )?
        else {
            return Ok(Flow::Exit);
        };

        if answer.to_lowercase() == "yes" {
            writeln!(self.output, "reloading...")?;
            self.reload()?;
        } else if self
            .prompt("cancelling... Inventory data NOT reloaded. Press [ENTER] to continue to the menu.")?
            .is_none()
        {
            return Ok(Flow::Exit);
        }

        self.show()?;
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> anyhow::Result<Flow> {
        let Some(id) = self.prompt("Enter ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(title) = self.prompt("What is the CD's title? ")? else {
            return Ok(Flow::Exit);
        };
        let Some(artist) = self.prompt("What is the Artist's name? ")? else {
            return Ok(Flow::Exit);
        };

        match self.inventory.add(id.trim(), title.trim(), artist.trim()) {
            Ok(()) => self.show()?,
            Err(StorageError::InvalidId { input }) => {
                log::debug!("Rejected CD id '{input}'");
                writeln!(
                    self.output,
                    "\nYou must enter ID as a integer. Adding CD failed.\n"
                )?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> anyhow::Result<Flow> {
        self.show()?;
        let Some(answer) = self.prompt("Which ID would you like to delete? ")? else {
            return Ok(Flow::Exit);
        };

        let Ok(id) = parse_id(&answer) else {
            writeln!(
                self.output,
                "\nYou must enter ID as a integer. Deleting CD failed.\n"
            )?;
            return Ok(Flow::Continue);
        };

        if self.inventory.remove(id).is_some() {
            writeln!(self.output, "The Compact Disc was removed")?;
        } else {
            writeln!(self.output, "Could not find this Compact Disc!")?;
        }
        self.show()?;
        Ok(Flow::Continue)
    }

    fn save(&mut self) -> anyhow::Result<Flow> {
        self.show()?;
        let Some(answer) = self.prompt("Save this inventory to file? [y/n] ")? else {
            return Ok(Flow::Exit);
        };

        if answer.trim().to_lowercase() == "y" {
            file::save(&self.data_file, self.inventory.records()).with_context(|| {
                format!("Failed to save inventory to {}", self.data_file.display())
            })?;
            writeln!(
                self.output,
                "Inventory saved to {}",
                self.data_file.display()
            )?;
        } else if self
            .prompt("The inventory was NOT saved to file. Press [ENTER] to return to the menu.")?
            .is_none()
        {
            return Ok(Flow::Exit);
        }
        Ok(Flow::Continue)
    }

    /// Replaces the inventory with the data file contents
    fn reload(&mut self) -> anyhow::Result<()> {
        let outcome = file::load(&self.data_file).with_context(|| {
            format!("Failed to load inventory from {}", self.data_file.display())
        })?;

        match outcome {
            LoadOutcome::Loaded(records) => self.inventory.replace(records),
            LoadOutcome::Missing => {
                self.inventory.replace(Vec::new());
                writeln!(self.output, "\n{}\n", view::MISSING_FILE)?;
            }
        }
        Ok(())
    }

    fn show(&mut self) -> anyhow::Result<()> {
        view::show_inventory(&mut self.output, self.inventory.records())?;
        Ok(())
    }

    fn read_choice(&mut self) -> anyhow::Result<Option<MenuChoice>> {
        loop {
            let Some(line) = self.prompt(view::CHOICE_PROMPT)? else {
                return Ok(None);
            };
            if let Some(choice) = MenuChoice::parse(&line) {
                writeln!(self.output)?;
                return Ok(Some(choice));
            }
        }
    }

    /// Prints `text` and reads one line without its line ending.
    ///
    /// Returns `None` once the input is exhausted.
    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}
