//! The host-I/O drive loop.

use abacus_core::host::Host;
use abacus_core::interrupt;
use abacus_core::vm::Vm;

/// Alternate run-to-interrupt with host service until an interrupt survives
/// the host pass, and return that code.
///
/// END_OF_PROGRAM is the normal outcome; engine faults and cooperative
/// codes the host declined to service come back verbatim so the caller can
/// report them. The host pass runs even for engine faults — it leaves them
/// untouched by contract.
pub fn run_to_completion(vm: &mut Vm, host: &mut dyn Host) -> u32 {
    loop {
        vm.run();
        host.io_run(vm);
        if vm.int() != interrupt::NONE {
            return vm.int();
        }
    }
}
