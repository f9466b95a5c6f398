//! Instruction categories, mnemonics, and the opcode tables.
//!
//! The two category bits select one of two 16-entry tables; the next four bits
//! index into it. Slots 12-15 of both tables are unassigned.

use std::fmt;

/// Top-level instruction class, encoded in bits 31-30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `01`: control flow, memory, and shift instructions.
    Control,
    /// `11`: register and immediate ALU instructions.
    Arithmetic,
}

impl Category {
    /// Maps the raw category bits to a category.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0b01 => Some(Self::Control),
            0b11 => Some(Self::Arithmetic),
            _ => None,
        }
    }

    /// Category number as printed in documentation (1 or 2).
    pub const fn number(self) -> u8 {
        match self {
            Self::Control => 1,
            Self::Arithmetic => 2,
        }
    }

    /// The category's mnemonic table.
    pub const fn table(self) -> &'static [Option<Mnemonic>; 16] {
        match self {
            Self::Control => &CATEGORY1_TABLE,
            Self::Arithmetic => &CATEGORY2_TABLE,
        }
    }
}

/// Operation performed by an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// Absolute jump.
    J,
    /// Register-indirect jump.
    Jr,
    /// Branch if `rs == rt`.
    Beq,
    /// Branch if `rs < 0`.
    Bltz,
    /// Branch if `rs > 0`.
    Bgtz,
    /// Halt.
    Break,
    /// Store word.
    Sw,
    /// Load word.
    Lw,
    /// Shift left logical.
    Sll,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// No operation.
    Nop,
    /// Add.
    Add,
    /// Subtract.
    Sub,
    /// Multiply (low 32 bits).
    Mul,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise NOR.
    Nor,
    /// Set on less than (signed).
    Slt,
    /// Add sign-extended immediate.
    Addi,
    /// AND zero-extended immediate.
    Andi,
    /// OR zero-extended immediate.
    Ori,
    /// XOR zero-extended immediate.
    Xori,
}

/// Operand layout of an instruction, which decides both the fields the decoder
/// fills in and the registers the pipeline reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `J`: 26-bit index.
    Jump,
    /// `JR`: `rs`.
    JumpRegister,
    /// `BEQ`: `rs`, `rt`, offset.
    BranchTwoReg,
    /// `BLTZ`/`BGTZ`: `rs`, offset.
    BranchOneReg,
    /// `LW`/`SW`: `rs`, `rt`, offset.
    LoadStore,
    /// `SLL`/`SRL`/`SRA`: `rt`, `rd`, shift amount.
    Shift,
    /// Register-register ALU: `rs`, `rt`, `rd`.
    ThreeReg,
    /// Register-immediate ALU: `rs`, `rt`, immediate.
    Immediate,
    /// `BREAK`/`NOP`: no operands.
    NoOperand,
}

/// Category 1 mnemonic table, indexed by the 4-bit opcode.
pub const CATEGORY1_TABLE: [Option<Mnemonic>; 16] = [
    Some(Mnemonic::J),
    Some(Mnemonic::Jr),
    Some(Mnemonic::Beq),
    Some(Mnemonic::Bltz),
    Some(Mnemonic::Bgtz),
    Some(Mnemonic::Break),
    Some(Mnemonic::Sw),
    Some(Mnemonic::Lw),
    Some(Mnemonic::Sll),
    Some(Mnemonic::Srl),
    Some(Mnemonic::Sra),
    Some(Mnemonic::Nop),
    None,
    None,
    None,
    None,
];

/// Category 2 mnemonic table, indexed by the 4-bit opcode.
pub const CATEGORY2_TABLE: [Option<Mnemonic>; 16] = [
    Some(Mnemonic::Add),
    Some(Mnemonic::Sub),
    Some(Mnemonic::Mul),
    Some(Mnemonic::And),
    Some(Mnemonic::Or),
    Some(Mnemonic::Xor),
    Some(Mnemonic::Nor),
    Some(Mnemonic::Slt),
    Some(Mnemonic::Addi),
    Some(Mnemonic::Andi),
    Some(Mnemonic::Ori),
    Some(Mnemonic::Xori),
    None,
    None,
    None,
    None,
];

impl Mnemonic {
    /// Upper-case assembly name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::J => "J",
            Self::Jr => "JR",
            Self::Beq => "BEQ",
            Self::Bltz => "BLTZ",
            Self::Bgtz => "BGTZ",
            Self::Break => "BREAK",
            Self::Sw => "SW",
            Self::Lw => "LW",
            Self::Sll => "SLL",
            Self::Srl => "SRL",
            Self::Sra => "SRA",
            Self::Nop => "NOP",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Nor => "NOR",
            Self::Slt => "SLT",
            Self::Addi => "ADDI",
            Self::Andi => "ANDI",
            Self::Ori => "ORI",
            Self::Xori => "XORI",
        }
    }

    /// Operand layout for this mnemonic.
    pub const fn format(self) -> Format {
        match self {
            Self::J => Format::Jump,
            Self::Jr => Format::JumpRegister,
            Self::Beq => Format::BranchTwoReg,
            Self::Bltz | Self::Bgtz => Format::BranchOneReg,
            Self::Sw | Self::Lw => Format::LoadStore,
            Self::Sll | Self::Srl | Self::Sra => Format::Shift,
            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::And
            | Self::Or
            | Self::Xor
            | Self::Nor
            | Self::Slt => Format::ThreeReg,
            Self::Addi | Self::Andi | Self::Ori | Self::Xori => Format::Immediate,
            Self::Break | Self::Nop => Format::NoOperand,
        }
    }

    /// Category whose table holds this mnemonic.
    pub const fn category(self) -> Category {
        match self {
            Self::J
            | Self::Jr
            | Self::Beq
            | Self::Bltz
            | Self::Bgtz
            | Self::Break
            | Self::Sw
            | Self::Lw
            | Self::Sll
            | Self::Srl
            | Self::Sra
            | Self::Nop => Category::Control,
            _ => Category::Arithmetic,
        }
    }

    /// Index of this mnemonic in its category's table.
    pub fn opcode(self) -> u32 {
        self.category()
            .table()
            .iter()
            .position(|m| *m == Some(self))
            .map_or(0, |idx| idx as u32)
    }

    /// Instructions the fetch stage diverts to the IF Unit instead of Pre-Issue.
    pub const fn is_control_flow(self) -> bool {
        matches!(
            self,
            Self::J | Self::Jr | Self::Beq | Self::Bltz | Self::Bgtz | Self::Nop | Self::Break
        )
    }

    /// Instructions that go through the memory pipe (Pre-ALU1, ALU1, Pre-MEM).
    pub const fn is_memory(self) -> bool {
        matches!(self, Self::Lw | Self::Sw)
    }

    /// Every mnemonic, in table order (category 1 then category 2).
    pub const ALL: [Self; 24] = [
        Self::J,
        Self::Jr,
        Self::Beq,
        Self::Bltz,
        Self::Bgtz,
        Self::Break,
        Self::Sw,
        Self::Lw,
        Self::Sll,
        Self::Srl,
        Self::Sra,
        Self::Nop,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Nor,
        Self::Slt,
        Self::Addi,
        Self::Andi,
        Self::Ori,
        Self::Xori,
    ];
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
