use abacus_core::interrupt;
use abacus_core::vm::{Vm, opcode};

mod common;
use common::run_rom;

#[test]
fn test_first_fault_wins() {
    let mut vm = Vm::new();
    vm.interrupt(interrupt::INVALID_JUMP);
    vm.interrupt(interrupt::OUT_OF_BOUNDS);
    assert_eq!(vm.int(), interrupt::INVALID_JUMP);
}

#[test]
fn test_clearing_is_always_allowed() {
    let mut vm = Vm::new();
    vm.interrupt(interrupt::OUT_OF_MEMORY);
    vm.interrupt(interrupt::NONE);
    assert_eq!(vm.int(), interrupt::NONE);
    vm.interrupt(0x0B);
    assert_eq!(vm.int(), 0x0B);
}

#[test]
fn test_code_classification() {
    assert!(!interrupt::is_engine_fault(interrupt::NONE));
    for code in interrupt::END_OF_PROGRAM..=interrupt::OUT_OF_MEMORY {
        assert!(interrupt::is_engine_fault(code));
        assert!(!interrupt::is_host_code(code));
    }
    assert!(!interrupt::is_engine_fault(interrupt::HOST_MIN));
    assert!(interrupt::is_host_code(interrupt::HOST_MIN));
    assert!(interrupt::is_host_code(0xFFFF));
}

#[test]
fn test_cooperative_interrupt_suspends_until_cleared() {
    let mut vm = run_rom(&[opcode::NUM1, 0x0B, opcode::INT, opcode::NUM1, 0x2A]);
    assert_eq!(vm.int(), 0x0B);
    assert_eq!(vm.pc(), 3);
    assert_eq!(vm.sp(), 0);

    // A halted VM does not fetch.
    vm.run();
    assert_eq!(vm.pc(), 3);

    // Resume; execution continues at the next instruction.
    vm.interrupt(interrupt::NONE);
    vm.run();
    assert_eq!(vm.int(), interrupt::END_OF_PROGRAM);
    assert_eq!(vm.sp(), 1);
    assert_eq!(vm.get_word(0), 0x2A);
}

#[test]
fn test_registers_stay_in_range_while_running() {
    // A busy loop: push 0, jump back to 0, forever.
    let mut vm = Vm::new();
    vm.load_bytes(&[opcode::NUM, opcode::JMP]);

    for _ in 0..100 {
        vm.run_bounded(7);
        assert_eq!(vm.int(), interrupt::NONE);
        assert!(vm.pc() <= vm.rom_size());
        assert!(vm.sp() <= vm.mem_size());
    }
}

#[test]
fn test_run_bounded_counts_instructions() {
    let mut vm = Vm::new();
    vm.load_bytes(&[opcode::NUM, opcode::JMP]);

    assert_eq!(vm.run_bounded(1000), 1000);
    assert_eq!(vm.int(), interrupt::NONE);
}

#[test]
fn test_run_bounded_stops_at_an_interrupt() {
    let mut vm = Vm::new();
    vm.load_bytes(&[opcode::NUM1, 0x05, opcode::INT]);

    assert_eq!(vm.run_bounded(100), 2);
    assert_eq!(vm.int(), 0x05);
}
