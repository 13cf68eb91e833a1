// Interactive session: greeting, main menu and the zip filter screen.
//
// The session is generic over its input and output so it can be driven by
// stdin/stdout in the binary and by in-memory buffers in tests. End of input
// at any prompt ends the session.
use crate::dataset::DataSet;
use crate::output;
use crate::reports;
use crate::types::Stats;
use crate::util;
use log::error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub struct Session<R, W> {
    input: R,
    out: W,
    data: DataSet,
    data_path: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, data_path: PathBuf) -> Self {
        Self { input, out, data: DataSet::default(), data_path }
    }

    /// Start with the built-in sample records instead of an empty dataset.
    pub fn with_sample_data(mut self) -> Self {
        self.data.load_default_data();
        self
    }

    /// Print `prompt` and read one line without its terminator; `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    pub fn run(&mut self) -> io::Result<()> {
        if self.welcome()? {
            self.main_menu()?;
        }
        Ok(())
    }

    /// Greet the user and ask for a menu header. Returns `false` if input ran out.
    fn welcome(&mut self) -> io::Result<bool> {
        let Some(name) = self.read_line("Please enter your name: ")? else {
            return Ok(false);
        };
        writeln!(self.out, "Hi {}, welcome to the Air Quality database.", name)?;
        loop {
            let Some(header) = self.read_line("Enter a header for the menu: \n")? else {
                return Ok(false);
            };
            match self.data.set_header(&header) {
                Ok(()) => return Ok(true),
                Err(_) => writeln!(
                    self.out,
                    "Header must be less than or equal to thirty characters long"
                )?,
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", self.data.header())?;
        writeln!(self.out, "Main Menu")?;
        writeln!(self.out, "1 - Print Average Particulate Concentration by Zip Code and Time")?;
        writeln!(self.out, "2 - Print Minimum Particulate Concentration by Zip Code and Time")?;
        writeln!(self.out, "3 - Print Maximum Particulate Concentration by Zip Code and Time")?;
        writeln!(self.out, "4 - Adjust Zip Code Filters")?;
        writeln!(self.out, "5 - Load Data")?;
        writeln!(self.out, "9 - Quit")
    }

    fn main_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line("What is your choice? ")? else {
                return Ok(());
            };
            let Ok(selection) = choice.trim().parse::<i64>() else {
                writeln!(self.out, "Please enter a number only")?;
                continue;
            };
            match selection {
                1 => self.display_cross_table(Stats::Avg)?,
                2 => self.display_cross_table(Stats::Min)?,
                3 => self.display_cross_table(Stats::Max)?,
                4 => {
                    if !self.manage_filters()? {
                        return Ok(());
                    }
                }
                5 => self.handle_load()?,
                9 => {
                    writeln!(self.out, "Goodbye!  Thank you for using the database")?;
                    return Ok(());
                }
                _ => writeln!(self.out, "That's not a valid selection")?,
            }
        }
    }

    fn display_cross_table(&mut self, stat: Stats) -> io::Result<()> {
        match reports::generate_cross_table(&self.data, stat) {
            Ok(table) => {
                writeln!(self.out)?;
                writeln!(self.out, "{}", output::render_cross_table(&table))
            }
            Err(_) => writeln!(self.out, "Please load a dataset first"),
        }
    }

    fn handle_load(&mut self) -> io::Result<()> {
        let path = self.data_path.clone();
        match self.data.load_file(&path) {
            Ok(report) => {
                writeln!(
                    self.out,
                    "{} lines of data were downloaded",
                    util::format_int(report.loaded_rows)
                )?;
                if report.parse_errors > 0 {
                    writeln!(
                        self.out,
                        "Note: {} rows skipped due to parse errors.",
                        util::format_int(report.parse_errors)
                    )?;
                }
                Ok(())
            }
            Err(e) => {
                error!("failed to load {}: {}", path.display(), e);
                writeln!(self.out, "Failed to load {}: {}", path.display(), e)
            }
        }
    }

    /// Let the user flip zip codes between active and inactive.
    ///
    /// Returns `false` if input ran out while the screen was open.
    fn manage_filters(&mut self) -> io::Result<bool> {
        let zips: Vec<String> = self.data.zips().into_iter().map(|(z, _)| z).collect();
        if zips.is_empty() {
            writeln!(self.out, "Please load a dataset first")?;
            return Ok(true);
        }
        loop {
            writeln!(self.out, "The following labels are in the dataset:")?;
            for (i, (zip, active)) in self.data.zips().iter().enumerate() {
                writeln!(
                    self.out,
                    "{}: {:<10} {} ",
                    i + 1,
                    zip,
                    if *active { "ACTIVE" } else { "INACTIVE" }
                )?;
            }
            let Some(selection) = self.read_line(
                "Please select an item to toggle or press enter/return when you are finished.",
            )?
            else {
                return Ok(false);
            };
            if selection.is_empty() {
                return Ok(true);
            }
            let Ok(n) = selection.trim().parse::<usize>() else {
                writeln!(self.out, "Please enter a number or enter/return to exit")?;
                continue;
            };
            match n.checked_sub(1).and_then(|i| zips.get(i)) {
                Some(zip) => {
                    if let Err(e) = self.data.toggle_zip(zip) {
                        error!("{}", e);
                    }
                }
                None => writeln!(self.out, "Please enter a number from the list")?,
            }
        }
    }
}
