//! Menu state machine driving the stack
//!
//! The loop is generic over its streams so the whole conversation can be
//! exercised in-process with a byte-slice script; `main` hands it locked
//! stdin/stdout.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use lifo_core::{DynamicStack, StackError};
use tracing::debug;

use crate::render;

/// What a completed menu action means for the loop.
enum Step {
    Continue,
    Quit,
}

/// One interactive session over a pair of streams.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Wrap the given streams into a session.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// `preset_capacity` answers the startup prompt when some config layer
    /// supplied it; otherwise the user is asked. End of input at any
    /// prompt ends the session cleanly with nothing half-applied.
    pub fn run(&mut self, preset_capacity: Option<usize>) -> io::Result<()> {
        let capacity = match preset_capacity {
            Some(capacity) => capacity,
            None => match self.prompt_number("Enter initial stack capacity: ")? {
                Some(capacity) => capacity,
                None => return Ok(()),
            },
        };
        let mut stack = DynamicStack::new(capacity);
        debug!(capacity, "session started");

        loop {
            writeln!(
                self.output,
                "\nMenu :\n1 for push\n2 for pop\n3 for display\n4 for exit"
            )?;
            let Some(choice) = self.prompt_number::<i64>("Enter your choice : ")? else {
                return Ok(());
            };
            let step = match choice {
                1 => self.push(&mut stack)?,
                2 => self.pop(&mut stack)?,
                3 => self.display(&stack)?,
                4 => {
                    writeln!(self.output, "Exiting program. Goodbye!")?;
                    Step::Quit
                }
                other => {
                    debug!(choice = other, "invalid menu choice");
                    writeln!(self.output, "Please Enter a valid choice...!!!")?;
                    Step::Continue
                }
            };
            if matches!(step, Step::Quit) {
                return Ok(());
            }
        }
    }

    /// Choice 1: read an item, push it, and walk the resize dialogue if
    /// the stack is full.
    fn push(&mut self, stack: &mut DynamicStack) -> io::Result<Step> {
        let Some(item) = self.prompt_number::<i64>("Enter item to push: ")? else {
            return Ok(Step::Quit);
        };

        let was_allocated = stack.is_allocated();
        let mut result = stack.push(item);
        if !was_allocated && stack.is_allocated() {
            writeln!(
                self.output,
                "Stack created with capacity {}",
                stack.capacity()
            )?;
        }

        if let Err(StackError::Overflow { capacity }) = result {
            writeln!(self.output, "Stack overflow! Current capacity: {capacity}")?;
            if !self.prompt_yes_no("Do you want to reallocate memory? (y/n): ")? {
                writeln!(self.output, "Push operation cancelled.")?;
                return Ok(Step::Continue);
            }
            let prompt = format!("Enter new stack size (must be > {capacity}): ");
            let Some(new_size) = self.prompt_number::<usize>(&prompt)? else {
                return Ok(Step::Quit);
            };
            match stack.grow(new_size) {
                Ok(()) => {
                    writeln!(self.output, "Stack resized from {capacity} to {new_size}")?;
                    result = stack.push(item);
                }
                Err(StackError::InvalidGrowth { .. }) => {
                    writeln!(self.output, "New size must be greater than current capacity!")?;
                    return Ok(Step::Continue);
                }
                Err(_) => {
                    writeln!(self.output, "Reallocation failed!")?;
                    return Ok(Step::Continue);
                }
            }
        }

        match result {
            Ok(position) => {
                writeln!(self.output, "Successfully pushed {item} (position {position})")?;
            }
            // First-touch allocation is the only failure left once the
            // overflow branch has been resolved above.
            Err(_) => writeln!(self.output, "Memory allocation failed...")?,
        }
        Ok(Step::Continue)
    }

    /// Choice 2: pop the top item or report underflow.
    fn pop(&mut self, stack: &mut DynamicStack) -> io::Result<Step> {
        match stack.pop() {
            Ok(popped) => {
                writeln!(self.output, "Popped item: {}", popped.item)?;
                let top = popped.new_top.map_or(-1, |position| position as i64);
                writeln!(self.output, "Current top position: {top}")?;
            }
            Err(_) => writeln!(self.output, "Stack underflow! Stack is empty.")?,
        }
        Ok(Step::Continue)
    }

    /// Choice 3: print the table of occupied slots.
    fn display(&mut self, stack: &DynamicStack) -> io::Result<Step> {
        if stack.is_empty() {
            writeln!(self.output, "Stack is empty! Nothing to display.")?;
        } else {
            self.output.write_all(render::stack_table(stack).as_bytes())?;
        }
        Ok(Step::Continue)
    }

    /// Ask `prompt` until a parseable number arrives. `None` means the
    /// input ran out.
    fn prompt_number<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match line.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Invalid input! Please enter a number.")?,
            }
        }
    }

    /// A `y`/`Y` answer counts as yes, anything else (including end of
    /// input) as no.
    fn prompt_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        Ok(matches!(line.trim().chars().next(), Some('y' | 'Y')))
    }
}
