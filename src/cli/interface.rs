use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use crate::storage::{RecordStore, StudentRecord};

use super::display::{display_record, display_records};

/// Interactive menu shell around the record store. Loads the roster once at
/// startup and persists only on the explicit Save & Exit command; any other
/// way out of the loop drops unsaved changes.
pub struct CLI {
    store: RecordStore,
    data_file: PathBuf,
    prompt: String,
}

impl CLI {
    pub fn new(data_file: PathBuf) -> Self {
        CLI {
            store: RecordStore::new(),
            data_file,
            prompt: "Enter choice: ".to_string(),
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        println!("Welcome to the Student Record Manager!");

        match self.store.load(&self.data_file) {
            Ok(count) => println!("Loaded {} record(s) from {}", count, self.data_file.display()),
            // Start with an empty roster rather than dying on a bad file.
            Err(e) => eprintln!("Warning: could not load {}: {}", self.data_file.display(), e),
        }

        loop {
            self.show_menu();
            print!("{}", self.prompt);
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                println!("\nExiting without saving.");
                break;
            }

            let choice = match input.trim().parse::<u32>() {
                Ok(c) => c,
                Err(_) => {
                    println!("Invalid Input.");
                    continue;
                }
            };

            match choice {
                1 => self.add_student()?,
                2 => self.view_all(),
                3 => self.search_student()?,
                4 => self.delete_student()?,
                5 => self.update_student()?,
                6 => self.sort_by_marks(),
                7 => {
                    if self.save_records() {
                        println!("Goodbye!");
                        break;
                    }
                    // Save failed; keep the session alive so nothing is lost.
                }
                _ => println!("Invalid Choice!"),
            }
        }

        Ok(())
    }

    fn show_menu(&self) {
        println!("\n===== Menu =====");
        println!("1. Add Student");
        println!("2. View All");
        println!("3. Search");
        println!("4. Delete");
        println!("5. Update");
        println!("6. Sort by Marks");
        println!("7. Save & Exit");
    }

    fn add_student(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_parsed::<u32>("Roll No: ")? else {
            return Ok(());
        };
        let Some(name) = self.prompt_text("Name: ")? else {
            return Ok(());
        };
        let Some(email) = self.prompt_text("Email: ")? else {
            return Ok(());
        };
        let Some(course) = self.prompt_text("Course: ")? else {
            return Ok(());
        };
        let Some(score) = self.prompt_parsed::<f64>("Marks: ")? else {
            return Ok(());
        };

        loading_animation();

        match self.store.add(StudentRecord::new(id, name, email, course, score)) {
            Ok(()) => println!("Student Added Successfully!"),
            Err(e) => println!("ERROR: {}", e),
        }
        Ok(())
    }

    fn view_all(&self) {
        let records = self.store.list_all();
        if records.is_empty() {
            println!("No Records Available.");
            return;
        }
        display_records("Student Records", &records);
    }

    fn search_student(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_parsed::<u32>("Enter Roll No: ")? else {
            return Ok(());
        };
        match self.store.find(id) {
            Ok(record) => display_record(&record),
            Err(e) => println!("ERROR: {}", e),
        }
        Ok(())
    }

    fn delete_student(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_parsed::<u32>("Enter Roll No: ")? else {
            return Ok(());
        };
        match self.store.delete(id) {
            Ok(()) => println!("Student Deleted Successfully!"),
            Err(e) => println!("ERROR: {}", e),
        }
        Ok(())
    }

    fn update_student(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_parsed::<u32>("Roll No to Update: ")? else {
            return Ok(());
        };
        let Some(name) = self.prompt_text("New Name: ")? else {
            return Ok(());
        };
        let Some(email) = self.prompt_text("New Email: ")? else {
            return Ok(());
        };
        let Some(course) = self.prompt_text("New Course: ")? else {
            return Ok(());
        };
        let Some(score) = self.prompt_parsed::<f64>("New Marks: ")? else {
            return Ok(());
        };

        loading_animation();

        match self
            .store
            .update(id, StudentRecord::new(id, name, email, course, score))
        {
            Ok(()) => println!("Student Updated Successfully!"),
            Err(e) => println!("ERROR: {}", e),
        }
        Ok(())
    }

    fn sort_by_marks(&self) {
        let records = self.store.sorted_by_score_desc();
        if records.is_empty() {
            println!("No Records to Sort.");
            return;
        }
        display_records("Sorted by Marks (DESC)", &records);
    }

    /// Returns true when the roster made it to disk.
    fn save_records(&self) -> bool {
        match self.store.save(&self.data_file) {
            Ok(()) => {
                println!("Records saved successfully.");
                true
            }
            Err(e) => {
                println!("ERROR: could not save {}: {}", self.data_file.display(), e);
                false
            }
        }
    }

    /// Prompts and reads one line; None on end of input.
    fn prompt_text(&self, label: &str) -> io::Result<Option<String>> {
        print!("{}", label);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    /// Prompts for a value of type T; reports "Invalid Input." and returns
    /// None when parsing fails, sending the caller back to the menu.
    fn prompt_parsed<T: FromStr>(&self, label: &str) -> io::Result<Option<T>> {
        let Some(text) = self.prompt_text(label)? else {
            return Ok(None);
        };
        match text.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                println!("Invalid Input.");
                Ok(None)
            }
        }
    }
}

/// Cosmetic progress dots before a write lands. Pure presentation; the store
/// itself is synchronous.
fn loading_animation() {
    print!("Loading");
    for _ in 0..4 {
        thread::sleep(Duration::from_millis(300));
        print!(".");
        let _ = io::stdout().flush();
    }
    println!();
}
