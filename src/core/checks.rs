use solana_sdk::pubkey::Pubkey;

use crate::core::constants::{SPL_TOKEN_2022_PROGRAM_ID, SPL_TOKEN_PROGRAM_ID};
use crate::core::parser::Parser;
use crate::types::CompiledInstruction;

/// Raw bytes of a compiled instruction. Instruction data is carried base58 at
/// the wire boundary; decode failures are logged and treated as "no data".
pub(crate) fn instruction_data(instruction: &CompiledInstruction) -> Option<Vec<u8>> {
    if instruction.data.is_empty() {
        return None;
    }
    match bs58::decode(&instruction.data).into_vec() {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            tracing::debug!(%err, "instruction data is not valid base58");
            None
        }
    }
}

impl Parser {
    /// SPL-Token `Transfer` (opcode 3) with its three account slots in range.
    pub(crate) fn is_transfer(&self, instruction: &CompiledInstruction) -> bool {
        let Some(program_id) = self.program_id(instruction) else {
            return false;
        };
        if program_id != SPL_TOKEN_PROGRAM_ID {
            return false;
        }
        if instruction.accounts.len() < 3 {
            return false;
        }
        let Some(data) = instruction_data(instruction) else {
            return false;
        };
        if data.len() < 9 || data[0] != 3 {
            return false;
        }
        instruction.accounts[..3]
            .iter()
            .all(|&index| (index as usize) < self.account_keys().len())
    }

    /// SPL-Token `TransferChecked` (opcode 12), also accepted from Token-2022.
    pub(crate) fn is_transfer_checked(&self, instruction: &CompiledInstruction) -> bool {
        let Some(program_id) = self.program_id(instruction) else {
            return false;
        };
        if program_id != SPL_TOKEN_PROGRAM_ID && program_id != SPL_TOKEN_2022_PROGRAM_ID {
            return false;
        }
        if instruction.accounts.len() < 4 {
            return false;
        }
        let Some(data) = instruction_data(instruction) else {
            return false;
        };
        if data.len() < 9 || data[0] != 12 {
            return false;
        }
        instruction.accounts[..4]
            .iter()
            .all(|&index| (index as usize) < self.account_keys().len())
    }

    /// Emitted-event or typed-instruction recogniser: program match plus a
    /// leading discriminator over at least 8 bytes of payload.
    pub(crate) fn is_event_instruction(
        &self,
        instruction: &CompiledInstruction,
        program_id: &Pubkey,
        discriminator: &[u8],
    ) -> bool {
        match self.program_id(instruction) {
            Some(actual) if actual == *program_id => {}
            _ => return false,
        }
        let Some(data) = instruction_data(instruction) else {
            return false;
        };
        if data.len() < 16 {
            return false;
        }
        data.len() >= discriminator.len() && data[..discriminator.len()] == *discriminator
    }
}
