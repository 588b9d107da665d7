use crate::interrupt;

use super::Vm;

impl Vm {
    /// Validate a jump target and set PC. The past-the-end offset is a
    /// legal target; anything beyond it is INVALID_JUMP.
    #[inline]
    pub(super) fn branch_to(&mut self, address: u32) -> Option<()> {
        if address > self.rom.size() {
            self.interrupt(interrupt::INVALID_JUMP);
            return None;
        }
        self.pc = address;
        Some(())
    }

    /// JMP (0x20) - `( addr -- )`
    pub(super) fn op_jmp(&mut self) -> Option<()> {
        let address = self.pop_cell()?;
        self.branch_to(address)
    }

    /// JMC (0x21) - `( cond addr -- )`. The target is validated before the
    /// condition is consulted: an out-of-range address faults even when the
    /// jump would not have been taken.
    pub(super) fn op_jmc(&mut self) -> Option<()> {
        let address = self.pop_cell()?;
        let condition = self.pop_cell()?;
        if address > self.rom.size() {
            self.interrupt(interrupt::INVALID_JUMP);
            return None;
        }
        if condition != 0 {
            self.pc = address;
        }
        Some(())
    }
}
