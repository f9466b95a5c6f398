//! Memory (MEM) Stage.
//!
//! Performs the access for the entry in Pre-MEM. A load moves on to Post-MEM
//! with the loaded word; a store writes its captured data and completes here.

use tracing::debug;

use crate::common::error::SimError;
use crate::core::memory::AccessFault;
use crate::core::pipeline::engine::Pipeline;
use crate::core::pipeline::latches::BufferEntry;
use crate::isa::opcodes::Mnemonic;

/// Executes the memory stage of the pipeline.
///
/// The effective address is the `value` ALU1 left in the entry.
///
/// # Errors
///
/// [`SimError::OutOfRangeAccess`] or [`SimError::MisalignedAccess`] for a bad
/// address, and [`SimError::HazardViolation`] if Pre-MEM holds anything other
/// than a load or store.
pub fn mem_stage(p: &mut Pipeline) -> Result<(), SimError> {
    let Some(mut entry) = p.pre_mem.take() else {
        return Ok(());
    };
    let address = i64::from(entry.value);

    match entry.inst.mnemonic {
        Mnemonic::Lw => {
            let word = p
                .data
                .load(address, p.addressing)
                .map_err(|fault| access_error(p.cycle, &entry, address, fault))?;
            debug!(cycle = p.cycle, pc = entry.inst.address, inst = %entry.inst, address, word, "load");
            entry.value = word;
            p.stats.loads += 1;
            p.post_mem = Some(entry);
        }
        Mnemonic::Sw => {
            p.data
                .store(address, entry.store_data, p.addressing)
                .map_err(|fault| access_error(p.cycle, &entry, address, fault))?;
            debug!(
                cycle = p.cycle,
                pc = entry.inst.address,
                inst = %entry.inst,
                address,
                word = entry.store_data,
                "store"
            );
            p.stats.stores += 1;
            p.stats.instructions_retired += 1;
        }
        _ => {
            return Err(p.violation(format!("{} reached the memory stage", entry.inst)));
        }
    }
    Ok(())
}

fn access_error(cycle: u64, entry: &BufferEntry, address: i64, fault: AccessFault) -> SimError {
    let pc = entry.inst.address;
    let mnemonic = entry.inst.mnemonic.name();
    match fault {
        AccessFault::OutOfRange => SimError::OutOfRangeAccess {
            cycle,
            pc,
            mnemonic,
            address,
        },
        AccessFault::Misaligned => SimError::MisalignedAccess {
            cycle,
            pc,
            mnemonic,
            address,
        },
    }
}
