//! Interactive menu over a [`RecordStore`]
//!
//! The shell reads one menu choice per line from any [`BufRead`] and writes
//! prompts and results to any [`Write`], so a session can be driven from a
//! terminal or from a script in tests.
//!
//! Validation, not-found and persistence errors are turned into messages at
//! the point they occur and the loop carries on. Only failures of the input
//! or output stream themselves are returned to the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use student_records::shell::Shell;
//! use student_records::store::RecordStore;
//!
//! let mut store = RecordStore::new();
//! let script = "1\nAlice\n1\nA\n4\n5\n";
//! let mut output = Vec::new();
//!
//! let mut shell = Shell::new(&mut store, "students.dat", script.as_bytes(), &mut output);
//! shell.restore()?;
//! shell.run()?;
//! # Ok::<(), student_records::Error>(())
//! ```

mod menu;

pub use menu::MenuChoice;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::record::StudentRecord;
use crate::store::{LoadOutcome, RecordStore};
use crate::{Error, Result};

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Save and Exit was chosen and the data file was written.
    Saved,
    /// Save and Exit was chosen but writing the data file failed.
    SaveFailed,
    /// The input stream closed before Save and Exit; nothing was saved.
    InputClosed,
}

enum Flow {
    Continue,
    Exit(SessionEnd),
}

/// Text menu session bound to one store and one data file.
pub struct Shell<'a, R, W> {
    store: &'a mut RecordStore,
    data_file: PathBuf,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell session.
    ///
    /// # Arguments
    ///
    /// * `store` - Store mutated by the session
    /// * `data_file` - File restored at startup and written on exit
    /// * `input` - Source of menu choices and field values
    /// * `output` - Destination for prompts and messages
    pub fn new(
        store: &'a mut RecordStore,
        data_file: impl Into<PathBuf>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            store,
            data_file: data_file.into(),
            input,
            output,
        }
    }

    /// Restore the store from the data file.
    ///
    /// A missing, unreadable or corrupt file is reported and the session
    /// starts fresh; it is never an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] only if the message cannot be written.
    pub fn restore(&mut self) -> Result<()> {
        match self.store.load(&self.data_file) {
            Ok(LoadOutcome::Loaded(count)) => writeln!(
                self.output,
                "Loaded {count} student(s) from {}.",
                self.data_file.display()
            )?,
            Ok(LoadOutcome::Missing) => {
                writeln!(self.output, "No previous data found. Starting fresh.")?;
            }
            Err(e) => {
                warn!(path = %self.data_file.display(), error = %e, "could not load data file");
                writeln!(self.output, "Could not read saved data ({e}). Starting fresh.")?;
            }
        }
        Ok(())
    }

    /// Run the menu loop until Save and Exit is chosen or input ends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading input or writing output fails.
    pub fn run(&mut self) -> Result<SessionEnd> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                return self.input_closed();
            };

            let flow = match MenuChoice::parse(&line) {
                Some(choice) => {
                    debug!(?choice, "menu choice");
                    self.dispatch(choice)?
                }
                None => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit(end) = flow {
                return Ok(end);
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::Remove => self.remove(),
            MenuChoice::Search => self.search(),
            MenuChoice::DisplayAll => self.display_all().map(|()| Flow::Continue),
            MenuChoice::SaveAndExit => self.save_and_exit().map(Flow::Exit),
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "Student Management System Menu:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Enter name: ")? else {
            return self.input_closed().map(Flow::Exit);
        };
        let Some(id) = self.prompt("Enter id: ")? else {
            return self.input_closed().map(Flow::Exit);
        };
        let Some(grade) = self.prompt("Enter grade: ")? else {
            return self.input_closed().map(Flow::Exit);
        };

        match parse_id(&id).and_then(|id| StudentRecord::validated(name, id, grade)) {
            Ok(record) => {
                info!(id = record.id(), "added student");
                self.store.insert(record);
                writeln!(self.output, "Student added successfully.")?;
            }
            Err(e) => {
                debug!(error = %e, "rejected student");
                writeln!(
                    self.output,
                    "Invalid input. All fields must be filled correctly."
                )?;
            }
        }
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> Result<Flow> {
        let Some(line) = self.prompt("Enter id of student to remove: ")? else {
            return self.input_closed().map(Flow::Exit);
        };

        let removed = lookup_id(&line).and_then(|id| {
            if self.store.remove_by_id(id) {
                Ok(id)
            } else {
                Err(Error::NotFound(line.clone()))
            }
        });

        match removed {
            Ok(id) => {
                info!(id, "removed student");
                writeln!(self.output, "Student removed successfully.")?;
            }
            Err(e) => self.report_not_found(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(line) = self.prompt("Enter id of student to search: ")? else {
            return self.input_closed().map(Flow::Exit);
        };

        let found = lookup_id(&line).and_then(|id| {
            self.store
                .find_by_id(id)
                .cloned()
                .ok_or_else(|| Error::NotFound(line.clone()))
        });

        match found {
            Ok(record) => writeln!(self.output, "Student found: {record}")?,
            Err(e) => self.report_not_found(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn display_all(&mut self) -> Result<()> {
        let records = self.store.list_all();
        if records.is_empty() {
            writeln!(self.output, "No students found.")?;
        } else {
            for record in records {
                writeln!(self.output, "{record}")?;
            }
        }
        Ok(())
    }

    fn save_and_exit(&mut self) -> Result<SessionEnd> {
        let end = match self.store.save(&self.data_file) {
            Ok(()) => {
                writeln!(self.output, "Data saved successfully.")?;
                SessionEnd::Saved
            }
            Err(e) => {
                warn!(path = %self.data_file.display(), error = %e, "save failed");
                writeln!(self.output, "Failed to save data: {e}")?;
                SessionEnd::SaveFailed
            }
        };
        writeln!(self.output, "Exiting application. Thank you!")?;
        Ok(end)
    }

    fn report_not_found(&mut self, err: &Error) -> Result<()> {
        debug!(error = %err, "lookup missed");
        writeln!(self.output, "Student not found.")?;
        Ok(())
    }

    fn input_closed(&mut self) -> Result<SessionEnd> {
        warn!("input closed before save");
        writeln!(self.output)?;
        writeln!(self.output, "Input closed. Exiting without saving.")?;
        Ok(SessionEnd::InputClosed)
    }

    /// Write `text`, then read one line. `None` means end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
    /// failing the read.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }
}

/// Parse a raw id field for Add, leaving range checks to validation.
fn parse_id(line: &str) -> Result<i64> {
    line.parse::<i64>()
        .map_err(|_| Error::Validation(format!("id {line:?} is not an integer")))
}

/// Parse an id for Remove and Search.
///
/// Any stored id is reachable, including ids a data file may carry that Add
/// would reject. Input that cannot name a stored id is simply not found.
fn lookup_id(line: &str) -> Result<u32> {
    line.parse::<i64>()
        .ok()
        .and_then(|id| u32::try_from(id).ok())
        .ok_or_else(|| Error::NotFound(line.to_string()))
}
