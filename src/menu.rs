//! Interactive numbered menu
//!
//! Reads one line per prompt from any `BufRead` and writes results to any
//! `Write`, so the binary drives it with stdin/stdout and tests drive it
//! with in-memory buffers. End of input behaves like choosing `0`.

use crate::convert::{string_value, string_value_iterative};
use crate::error::{Result, TaskError};
use crate::parity::{check_parity, DEFAULT_RECURSION_LIMIT};
use crate::sum::{run_reentrant_demo, sum_array, DEMO_VALUES};
use crate::walker::{directory_size, format_size};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

/// Entries of the numbered menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    BaseConversion,
    DirectorySize,
    Parity,
    ReentrantSum,
    Exit,
}

impl MenuChoice {
    /// Parse a selector line such as `" 2 "`
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(Self::BaseConversion),
            2 => Some(Self::DirectorySize),
            3 => Some(Self::Parity),
            4 => Some(Self::ReentrantSum),
            0 => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU_TEXT: &str = "\n========= RECURSION TASKS =========\n\
1. Integer to String (Base Conversion)\n\
2. Recursive Directory Size Calculator\n\
3. Mutual Recursion (Even/Odd)\n\
4. Reentrant Recursive Sum (Multi-thread demo)\n\
0. Exit\n";

/// Threads started by the reentrant sum task
const MENU_DEMO_THREADS: usize = 2;

/// Menu loop over a reader/writer pair
pub struct Menu<R, W> {
    input: R,
    output: W,
    recursion_limit: u64,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    /// Largest magnitude checked recursively in the parity task
    pub fn with_recursion_limit(mut self, limit: u64) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Give back the writer, e.g. to inspect a captured transcript
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show the menu until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}Select task: ", MENU_TEXT)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output, "\nExiting...")?;
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Invalid choice.")?;
                continue;
            };
            debug!(?choice, "Menu selection");

            if choice == MenuChoice::Exit {
                writeln!(self.output, "Exiting...")?;
                return Ok(());
            }

            match self.dispatch(choice) {
                Ok(true) => {}
                Ok(false) => {
                    writeln!(self.output, "\nExiting...")?;
                    return Ok(());
                }
                Err(e) if e.is_recoverable() => writeln!(self.output, "Error: {}", e)?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Run one task; `Ok(false)` means input ended mid-task
    fn dispatch(&mut self, choice: MenuChoice) -> Result<bool> {
        match choice {
            MenuChoice::BaseConversion => {
                let Some(n) = self.prompt::<i64>("Enter integer: ")? else {
                    return Ok(false);
                };
                let Some(base) = self.prompt::<u32>("Enter base (2-36): ")? else {
                    return Ok(false);
                };
                let recursive = string_value(n, base)?;
                let iterative = string_value_iterative(n, base)?;
                writeln!(self.output, "Recursive: {}", recursive)?;
                writeln!(self.output, "Iterative: {}", iterative)?;
            }

            MenuChoice::DirectorySize => {
                write!(self.output, "Enter directory path: ")?;
                self.output.flush()?;
                let Some(path) = self.read_line()? else {
                    return Ok(false);
                };
                let size = directory_size(path.trim());
                writeln!(self.output, "Total size: {}", format_size(size))?;
            }

            MenuChoice::Parity => {
                let Some(n) = self.prompt::<i64>("Enter integer: ")? else {
                    return Ok(false);
                };
                let report = check_parity(n, self.recursion_limit);
                writeln!(self.output, "isEven({}) = {}", n, report.even)?;
                writeln!(self.output, "isOdd({}) = {}", n, report.odd)?;
            }

            MenuChoice::ReentrantSum => {
                writeln!(
                    self.output,
                    "Array sum (reentrant): {}",
                    sum_array(&DEMO_VALUES, 0)
                )?;
                for result in run_reentrant_demo(&DEMO_VALUES, MENU_DEMO_THREADS)? {
                    writeln!(self.output, "{} -> sum: {}", result.thread, result.sum)?;
                }
            }

            MenuChoice::Exit => return Ok(false),
        }

        Ok(true)
    }

    /// Print `label`, read a line and parse it
    fn prompt<T>(&mut self, label: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        let trimmed = line.trim();
        trimmed
            .parse::<T>()
            .map(Some)
            .map_err(|e| TaskError::InvalidInput {
                input: trimmed.to_string(),
                reason: e.to_string(),
            })
    }

    /// Next line without its terminator, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn transcript(input: &str) -> String {
        let mut menu = Menu::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        menu.run().unwrap();
        String::from_utf8(menu.into_output()).unwrap()
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::BaseConversion));
        assert_eq!(MenuChoice::parse(" 4 \n"), Some(MenuChoice::ReentrantSum));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse("abc"), None);
    }

    #[test]
    fn test_exit() {
        let out = transcript("0\n");
        assert!(out.contains("RECURSION TASKS"));
        assert!(out.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_base_conversion() {
        let out = transcript("1\n255\n16\n0\n");
        assert!(out.contains("Recursive: FF"));
        assert!(out.contains("Iterative: FF"));
    }

    #[test]
    fn test_invalid_base_keeps_menu_running() {
        let out = transcript("1\n10\n40\n0\n");
        assert!(out.contains("Error: Conversion error: Base must be between 2 and 36, got 40"));
        assert!(out.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let out = transcript("7\nhello\n0\n");
        assert_eq!(out.matches("Invalid choice.").count(), 2);
        assert_eq!(out.matches("Select task: ").count(), 3);
    }

    #[test]
    fn test_parity() {
        let out = transcript("3\n-3\n0\n");
        assert!(out.contains("isEven(-3) = false"));
        assert!(out.contains("isOdd(-3) = true"));
    }

    #[test]
    fn test_parity_past_recursion_limit() {
        let input = Cursor::new(b"3\n-1000001\n0\n".to_vec());
        let mut menu = Menu::new(input, Vec::new()).with_recursion_limit(10);
        menu.run().unwrap();
        let out = String::from_utf8(menu.into_output()).unwrap();
        assert!(out.contains("isOdd(-1000001) = true"));
    }

    #[test]
    fn test_parity_of_largest_integer() {
        let out = transcript("3\n9223372036854775807\n0\n");
        assert!(out.contains("isEven(9223372036854775807) = false"));
        assert!(out.contains("isOdd(9223372036854775807) = true"));
    }

    #[test]
    fn test_unparsable_integer() {
        let out = transcript("3\nseven\n0\n");
        assert!(out.contains("Error: Invalid input 'seven'"));
    }

    #[test]
    fn test_reentrant_sum() {
        let out = transcript("4\n0\n");
        assert!(out.contains("Array sum (reentrant): 15"));
        assert!(out.contains("summer-1 -> sum: 15"));
        assert!(out.contains("summer-2 -> sum: 15"));
    }

    #[test]
    fn test_missing_directory() {
        let out = transcript("2\n/no/such/dir/for/recursion-tasks\n0\n");
        assert!(out.contains("Total size: 0 B"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let out = transcript("1\n12\n");
        assert!(out.ends_with("Exiting...\n"));
        assert!(!out.contains("Recursive:"));
    }
}
