use abacus_core::vm::Vm;

/// Build a VM, load `rom`, and run it to the first interrupt.
pub fn run_rom(rom: &[u8]) -> Vm {
    let mut vm = Vm::new();
    vm.load_bytes(rom);
    vm.run();
    vm
}
