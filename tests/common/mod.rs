//! Synthetic confirmed-transaction builders shared by the integration tests.

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

use solana_swap_parser::{
    CompiledInstruction, ConfirmedTransaction, InnerInstructionSet, LoadedAddresses, Message,
    TokenBalance, Transaction, TransactionMeta,
};

pub fn key(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

pub fn encode(bytes: Vec<u8>) -> String {
    bs58::encode(bytes).into_string()
}

/// SPL-Token `Transfer`: accounts are source, destination, authority.
pub fn transfer_ix(
    program_index: u8,
    source: u8,
    destination: u8,
    authority: u8,
    amount: u64,
) -> CompiledInstruction {
    let mut data = vec![3u8];
    data.extend_from_slice(&amount.to_le_bytes());
    CompiledInstruction {
        program_id_index: program_index,
        accounts: vec![source, destination, authority],
        data: encode(data),
    }
}

/// SPL-Token `TransferChecked`: accounts are source, destination, mint,
/// authority.
pub fn transfer_checked_ix(
    program_index: u8,
    source: u8,
    destination: u8,
    mint: u8,
    authority: u8,
    amount: u64,
    decimals: u8,
) -> CompiledInstruction {
    let mut data = vec![12u8];
    data.extend_from_slice(&amount.to_le_bytes());
    data.push(decimals);
    CompiledInstruction {
        program_id_index: program_index,
        accounts: vec![source, destination, mint, authority],
        data: encode(data),
    }
}

/// Instruction carrying a discriminator-tagged payload.
pub fn payload_ix(program_index: u8, discriminator: &[u8], payload: &[u8]) -> CompiledInstruction {
    let mut data = discriminator.to_vec();
    data.extend_from_slice(payload);
    CompiledInstruction {
        program_id_index: program_index,
        accounts: vec![],
        data: encode(data),
    }
}

#[derive(Default)]
pub struct FixtureBuilder {
    account_keys: Vec<Pubkey>,
    instructions: Vec<CompiledInstruction>,
    inner_instructions: Vec<InnerInstructionSet>,
    post_token_balances: Vec<TokenBalance>,
    block_time: Option<i64>,
}

impl FixtureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account key and return its index in the flat array.
    pub fn account(&mut self, key: Pubkey) -> u8 {
        self.account_keys.push(key);
        (self.account_keys.len() - 1) as u8
    }

    pub fn outer(&mut self, instruction: CompiledInstruction) -> &mut Self {
        self.instructions.push(instruction);
        self
    }

    pub fn inner(&mut self, index: u16, instructions: Vec<CompiledInstruction>) -> &mut Self {
        self.inner_instructions.push(InnerInstructionSet {
            index,
            instructions,
        });
        self
    }

    pub fn token_balance(&mut self, account_index: u8, mint: Pubkey, decimals: u8) -> &mut Self {
        self.post_token_balances.push(TokenBalance {
            account_index: account_index as u16,
            mint,
            decimals,
        });
        self
    }

    pub fn block_time(&mut self, unix_seconds: i64) -> &mut Self {
        self.block_time = Some(unix_seconds);
        self
    }

    pub fn build(&self) -> ConfirmedTransaction {
        ConfirmedTransaction {
            slot: 1,
            block_time: self.block_time,
            transaction: Transaction {
                signatures: vec![Signature::default()],
                message: Message {
                    account_keys: self.account_keys.clone(),
                    instructions: self.instructions.clone(),
                },
            },
            meta: TransactionMeta {
                loaded_addresses: LoadedAddresses::default(),
                inner_instructions: self.inner_instructions.clone(),
                post_token_balances: self.post_token_balances.clone(),
            },
        }
    }
}
