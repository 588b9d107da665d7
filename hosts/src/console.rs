//! The reference console host: line-oriented stdio service for guest
//! programs.
//!
//! Guests request service by raising one of the interrupt codes below with
//! the documented operands on the stack. Each handler clears the interrupt
//! before touching the stack, so a fault raised while servicing (say, a bad
//! string address from the guest) is parked and surfaces on the next driver
//! pass instead of being swallowed by first-fault-wins.

use std::io::{self, BufRead, Write};

use abacus_core::host::Host;
use abacus_core::interrupt;
use abacus_core::vm::Vm;

use crate::registry::HostEntry;

/// Reserved for passing program arguments; currently cleared unserviced.
pub const ARGUMENT: u32 = 0x0A;

/// `( addr -- )` where MEM[addr] is the byte length and the packed string
/// starts at addr+1. The bytes are written to the output stream.
pub const CONSOLE_PRINT: u32 = 0x0B;

/// `( max -- len str... )`. Reads one line of up to `max` bytes from the
/// input stream, pushes its length, then packs the bytes above it.
pub const CONSOLE_INPUT: u32 = 0x0C;

/// `( x -- )`. Prints the popped word as unsigned decimal.
pub const CONSOLE_DEBUG: u32 = 0x0D;

pub struct ConsoleHost<R, W> {
    input: R,
    output: W,
}

impl ConsoleHost<io::BufReader<io::Stdin>, io::Stdout> {
    /// A host wired to the process's stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleHost<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The output stream, for callers that need to inspect what was written.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn print(&mut self, vm: &mut Vm) {
        let address = vm.pop_word();
        let length = vm.get_word(address);
        let bytes = vm.get_string(address.wrapping_add(1), length);
        let _ = self.output.write_all(&bytes);
        let _ = self.output.flush();
    }

    fn input_line(&mut self, vm: &mut Vm) {
        let max_length = vm.pop_word();
        let mut line = String::new();
        let _ = self.input.read_line(&mut line);
        let mut bytes = line.into_bytes();
        bytes.truncate(max_length as usize);
        let length = bytes.len() as u32;
        vm.push_word(length);
        vm.push_string(&bytes);
    }

    fn debug(&mut self, vm: &mut Vm) {
        let value = vm.pop_word();
        let _ = write!(self.output, "{value}");
        let _ = self.output.flush();
    }
}

impl<R: BufRead, W: Write> Host for ConsoleHost<R, W> {
    fn io_run(&mut self, vm: &mut Vm) {
        match vm.int() {
            ARGUMENT => vm.interrupt(interrupt::NONE),
            CONSOLE_PRINT => {
                vm.interrupt(interrupt::NONE);
                self.print(vm);
            }
            CONSOLE_INPUT => {
                vm.interrupt(interrupt::NONE);
                self.input_line(vm);
            }
            CONSOLE_DEBUG => {
                vm.interrupt(interrupt::NONE);
                self.debug(vm);
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Host registry
// ---------------------------------------------------------------------------

fn create_host() -> Box<dyn Host> {
    Box::new(ConsoleHost::stdio())
}

inventory::submit! {
    HostEntry::new("console", create_host)
}
