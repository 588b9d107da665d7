//! Human-readable fault reports for abnormal halts.

use abacus_core::interrupt;
use abacus_core::vm::VmState;

/// Format a halted VM's state: a fault-specific headline, then the
/// registers in hexadecimal.
pub fn fault_report(state: &VmState) -> String {
    let headline = match state.int {
        interrupt::INVALID_OPERATION => "[INVALID OPERATION]",
        interrupt::INVALID_JUMP => "[JUMP TO INVALID ADDRESS]",
        interrupt::OUT_OF_BOUNDS => "[ACCESS TO INVALID MEMORY]",
        interrupt::OUT_OF_MEMORY => "[OUT OF MEMORY]",
        _ => "[UNHANDLED INTERRUPT]",
    };

    format!(
        "{headline}\nINT: {:08X}\nPC:  {:08X}\nSP:  {:08X}\n",
        state.int, state.pc, state.sp
    )
}
