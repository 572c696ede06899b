use pipesim_core::core::pipeline::latches::{DestField, ExMem, IdEx, IfId, MemWb};
use pipesim_core::isa::{Format, Instruction, decode};

fn decoded(raw: u32) -> Instruction {
    decode(raw).expect("builder given an undecodable instruction")
}

pub struct IfIdBuilder(IfId);

impl IfIdBuilder {
    pub fn new() -> Self {
        Self(IfId::default())
    }

    pub fn pc(mut self, pc: u32) -> Self {
        self.0.pc = pc;
        self
    }

    pub fn inst(mut self, inst: u32) -> Self {
        self.0.inst = inst;
        self
    }

    pub fn build(self) -> IfId {
        self.0
    }
}

pub struct IdExBuilder(IdEx);

impl IdExBuilder {
    pub fn new() -> Self {
        Self(IdEx::default())
    }

    pub fn pc(mut self, pc: u32) -> Self {
        self.0.pc = pc;
        self
    }

    /// Decodes `inst` into the latch and copies its immediate.
    pub fn inst(mut self, inst: u32) -> Self {
        self.0.inst = decoded(inst);
        self.0.imm = self.0.inst.imm;
        self
    }

    pub fn rv1(mut self, val: i64) -> Self {
        self.0.rv1 = val;
        self
    }

    pub fn rv2(mut self, val: i64) -> Self {
        self.0.rv2 = val;
        self
    }

    pub fn build(self) -> IdEx {
        self.0
    }
}

pub struct ExMemBuilder(ExMem);

impl ExMemBuilder {
    pub fn new() -> Self {
        Self(ExMem::default())
    }

    /// Decodes `inst` into the latch and records its destination field.
    pub fn inst(mut self, inst: u32) -> Self {
        let inst = decoded(inst);
        self.0.inst = inst;
        (self.0.dest_field, self.0.dest) = match inst.kind() {
            Some(Format::Register) => (DestField::Rd, inst.rd),
            _ => (DestField::Rt, inst.rt),
        };
        self
    }

    pub fn alu_result(mut self, res: i64) -> Self {
        self.0.alu = res;
        self
    }

    pub fn write_data(mut self, data: i64) -> Self {
        self.0.write_data = data;
        self
    }

    pub fn build(self) -> ExMem {
        self.0
    }
}

pub struct MemWbBuilder(MemWb);

impl MemWbBuilder {
    pub fn new() -> Self {
        Self(MemWb::default())
    }

    pub fn inst(mut self, inst: u32) -> Self {
        self.0.inst = decoded(inst);
        self
    }

    pub fn alu_result(mut self, res: i64) -> Self {
        self.0.alu = res;
        self
    }

    pub fn read_data(mut self, data: i64) -> Self {
        self.0.read_data = data;
        self
    }

    pub fn build(self) -> MemWb {
        self.0
    }
}
