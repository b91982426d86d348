use anyhow::{Context, Result};
use mcgb_cpu::{BitIndex, Cpu, InstrKind, Instruction, Memory, Registers, Target};

/// Built-in instruction sequences the harness can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Program {
    Alu,
    Bits,
}

impl Program {
    /// Every name `from_name` accepts, for usage messages.
    pub const NAMES: &'static [&'static str] = &["alu", "ALU", "bits", "bit", "cb"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "alu" | "ALU" => Some(Program::Alu),
            "bits" | "bit" | "cb" => Some(Program::Bits),
            _ => None,
        }
    }

    pub fn instructions(self) -> Result<Vec<Instruction>> {
        let program = match self {
            Program::Alu => vec![
                Instruction::imm_u8(InstrKind::Add, 0x3A),
                Instruction::imm_u8(InstrKind::Add, 0xC6),
                Instruction::reg(InstrKind::Inc, Target::A),
                Instruction::reg(InstrKind::Dec, Target::B),
                Instruction::reg(InstrKind::Sub, Target::B),
                Instruction::imm_u8(InstrKind::Cp, 0x02),
                Instruction::reg(InstrKind::Inc, Target::Hl),
                Instruction::reg(InstrKind::AddHl, Target::Hl),
                Instruction::implied(InstrKind::Daa),
                Instruction::implied(InstrKind::Scf),
            ],
            Program::Bits => {
                let bit7 = BitIndex::try_from(7u8).context("bit index")?;
                let bit0 = BitIndex::try_from(0u8).context("bit index")?;
                vec![
                    Instruction::imm_u8(InstrKind::Or, 0x81),
                    Instruction::implied(InstrKind::Rlca),
                    Instruction::reg(InstrKind::Swap, Target::A),
                    Instruction::bit(InstrKind::Bit, Target::A, bit7),
                    Instruction::bit(InstrKind::Set, Target::HlAddr, bit0),
                    Instruction::reg(InstrKind::Rr, Target::HlAddr),
                    Instruction::bit(InstrKind::Res, Target::A, bit7),
                    Instruction::reg(InstrKind::Xor, Target::A),
                ]
            }
        };
        Ok(program)
    }
}

/// Run a program against a fresh machine and return the final registers.
pub fn run(program: Program) -> Result<Registers> {
    let mut memory = Memory::new();
    let mut cpu = Cpu::new(&mut memory);
    cpu.regs.set_hl(0xC000);

    for (index, instr) in program.instructions()?.into_iter().enumerate() {
        cpu.execute(instr)
            .with_context(|| format!("instruction #{index} ({instr}) failed"))?;
        log::debug!("{instr} -> {}", cpu.regs);
    }

    Ok(cpu.regs)
}
