use super::Vm;

impl Vm {
    // ---- Stack manipulation ----

    /// HOP (0x30) - `( addr -- )`. SP := addr, growing MEM if needed.
    pub(super) fn op_hop(&mut self) -> Option<()> {
        let address = self.pop_cell()?;
        self.set_stack(address)
    }

    /// POS (0x31) - `( -- SP )`. Pushes SP as observed before the push.
    pub(super) fn op_pos(&mut self) -> Option<()> {
        let depth = self.sp;
        self.push_cell(depth)
    }

    /// SET (0x32) - `( v addr -- )`. MEM[addr] := v; addr is checked
    /// against SP after both pops.
    pub(super) fn op_set(&mut self) -> Option<()> {
        let address = self.pop_cell()?;
        let value = self.pop_cell()?;
        self.write_cell(address, value)
    }

    /// GET (0x33) - `( addr -- MEM[addr] )`. The address is popped first,
    /// so the cell that held it is no longer a valid target.
    pub(super) fn op_get(&mut self) -> Option<()> {
        let address = self.pop_cell()?;
        let value = self.read_cell(address)?;
        self.push_cell(value)
    }

    /// POP (0x34) - `( x -- )`
    pub(super) fn op_pop(&mut self) -> Option<()> {
        self.pop_cell().map(|_| ())
    }

    /// ROT (0x35) - `( a b -- b a )`. Swaps the top two cells in place.
    pub(super) fn op_rot(&mut self) -> Option<()> {
        let under = self.sp.wrapping_sub(2);
        let top = self.sp.wrapping_sub(1);
        let a = self.read_cell(under)?;
        let b = self.read_cell(top)?;
        self.write_cell(under, b)?;
        self.write_cell(top, a)
    }
}
