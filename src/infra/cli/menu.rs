use std::io::{self, BufRead, Write};

use log::warn;

use crate::domain::Contact;
use crate::infra::db::ContactRepository;

/// The interactive menu loop.
///
/// Generic over its streams so tests can drive it with in-memory buffers;
/// the binary wires it to locked stdin/stdout.
pub struct Menu<R, W> {
    input: R,
    out: W,
    contacts: ContactRepository,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, out: W, contacts: ContactRepository) -> Self {
        Self {
            input,
            out,
            contacts,
        }
    }

    /// Run until the user picks Exit or the input stream ends.
    ///
    /// Storage failures are reported and the loop keeps going; only a
    /// broken console stream ends the session early.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out, "\nContact Book")?;
            writeln!(self.out, "1. Add Contact")?;
            writeln!(self.out, "2. View Contacts")?;
            writeln!(self.out, "3. Search Contact")?;
            writeln!(self.out, "4. Delete Contact")?;
            writeln!(self.out, "5. Exit")?;
            write!(self.out, "Choose: ")?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            let Ok(choice) = line.trim().parse::<u32>() else {
                writeln!(self.out, "Invalid")?;
                continue;
            };

            match choice {
                1 => self.add_contact()?,
                2 => self.view_contacts()?,
                3 => self.search_contact()?,
                4 => self.delete_contact()?,
                5 => {
                    writeln!(self.out, "Bye!")?;
                    break;
                }
                _ => writeln!(self.out, "Invalid")?,
            }
        }
        Ok(())
    }

    fn add_contact(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter Name: ")? else {
            return Ok(());
        };
        let Some(phone) = self.prompt("Enter Phone: ")? else {
            return Ok(());
        };
        let Some(email) = self.prompt("Enter Email: ")? else {
            return Ok(());
        };

        match self.contacts.save(&Contact::new(name, phone, email)) {
            Ok(_) => writeln!(self.out, "Contact saved successfully!")?,
            Err(e) => {
                warn!("saving contact failed: {e}");
                writeln!(self.out, "Error saving contact: {e}")?;
            }
        }
        Ok(())
    }

    fn view_contacts(&mut self) -> io::Result<()> {
        match self.contacts.find_all() {
            Ok(contacts) if contacts.is_empty() => {
                writeln!(self.out, "No contacts found.")?;
            }
            Ok(contacts) => {
                for contact in &contacts {
                    writeln!(self.out, "{contact}")?;
                }
            }
            Err(e) => {
                warn!("listing contacts failed: {e}");
                writeln!(self.out, "Error getting contacts: {e}")?;
            }
        }
        Ok(())
    }

    fn search_contact(&mut self) -> io::Result<()> {
        let Some(term) = self.prompt("Enter Name to Search: ")? else {
            return Ok(());
        };

        match self.contacts.search_by_name(&term) {
            Ok(hits) if hits.is_empty() => {
                writeln!(self.out, "No contacts found for: {term}")?;
            }
            Ok(hits) => {
                for contact in &hits {
                    writeln!(self.out, "{contact}")?;
                }
            }
            Err(e) => {
                warn!("searching contacts failed: {e}");
                writeln!(self.out, "Error searching contacts: {e}")?;
            }
        }
        Ok(())
    }

    fn delete_contact(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter Name to Delete: ")? else {
            return Ok(());
        };

        match self.contacts.delete_by_name(&name) {
            Ok(()) => writeln!(self.out, "Contact deleted (if it existed).")?,
            Err(e) => {
                warn!("deleting contact failed: {e}");
                writeln!(self.out, "Error deleting contact: {e}")?;
            }
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        self.read_line()
    }

    /// One line from the input stream, newline stripped; `None` on EOF.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
