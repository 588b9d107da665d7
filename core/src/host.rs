use crate::vm::Vm;

/// The collaborator that services cooperative interrupts.
///
/// The engine and the host run strict ping-pong: the engine suspends with a
/// non-zero interrupt register, the host inspects and mutates VM state
/// through the embedding API, clears the interrupt, and the engine resumes.
/// A host sees the VM only at instruction boundaries.
pub trait Host {
    /// Inspect `vm.int()`. If the code is one this host recognizes, clear
    /// it first (so faults raised while servicing surface), service it, and
    /// return. Codes the host does not recognize must be left untouched for
    /// the driver to classify.
    ///
    /// Implementations must not re-enter `vm.run()`; nested execution on
    /// the same instance is undefined.
    fn io_run(&mut self, vm: &mut Vm);
}
