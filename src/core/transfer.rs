use byteorder::{ByteOrder, LittleEndian};

use crate::core::checks::instruction_data;
use crate::core::parser::Parser;
use crate::types::{CompiledInstruction, SwapData, SwapPayload, SwapType, TransferRecord};

impl Parser {
    /// Decode an SPL-Token `Transfer`. Mint and decimals come from the token
    /// account index keyed by the destination account; a miss leaves the mint
    /// unknown.
    pub(crate) fn decode_transfer(
        &self,
        instruction: &CompiledInstruction,
    ) -> Option<TransferRecord> {
        let data = instruction_data(instruction)?;
        if data.len() < 9 || instruction.accounts.len() < 3 {
            return None;
        }
        let amount = LittleEndian::read_u64(&data[1..9]);

        let source = *self.account_key(instruction.accounts[0] as usize)?;
        let destination = *self.account_key(instruction.accounts[1] as usize)?;
        let authority = *self.account_key(instruction.accounts[2] as usize)?;

        let info = self.token_accounts.get(&destination);
        Some(TransferRecord {
            source,
            destination,
            authority,
            amount,
            mint: info.map(|info| info.mint),
            decimals: info.map(|info| info.decimals).unwrap_or(0),
        })
    }

    /// Decode an SPL-Token `TransferChecked`. The mint account sits at slot 2
    /// and the authority at slot 3; the instruction's own decimals byte is
    /// only a fallback, the post-balance mapping stays authoritative.
    pub(crate) fn decode_transfer_checked(
        &self,
        instruction: &CompiledInstruction,
    ) -> Option<TransferRecord> {
        let data = instruction_data(instruction)?;
        if data.len() < 9 || instruction.accounts.len() < 4 {
            return None;
        }
        let amount = LittleEndian::read_u64(&data[1..9]);
        let checked_decimals = data.get(9).copied().unwrap_or(0);

        let source = *self.account_key(instruction.accounts[0] as usize)?;
        let destination = *self.account_key(instruction.accounts[1] as usize)?;
        let mint = *self.account_key(instruction.accounts[2] as usize)?;
        let authority = *self.account_key(instruction.accounts[3] as usize)?;

        let decimals = self
            .mint_decimals
            .get(&mint)
            .copied()
            .unwrap_or(checked_decimals);
        Some(TransferRecord {
            source,
            destination,
            authority,
            amount,
            mint: Some(mint),
            decimals,
        })
    }

    /// Last-resort collection: every inner Transfer/TransferChecked under
    /// `index`, tagged with the dispatching protocol, in emission order.
    pub(crate) fn inner_transfer_swaps(&self, index: usize, swap_type: SwapType) -> Vec<SwapData> {
        let mut swaps = Vec::new();
        for instruction in self.inner_instructions(index) {
            if self.is_transfer(instruction) {
                if let Some(transfer) = self.decode_transfer(instruction) {
                    swaps.push(SwapData::new(swap_type, SwapPayload::Transfer(transfer)));
                }
            } else if self.is_transfer_checked(instruction) {
                if let Some(transfer) = self.decode_transfer_checked(instruction) {
                    swaps.push(SwapData::new(swap_type, SwapPayload::Transfer(transfer)));
                }
            }
        }
        swaps
    }

    /// Inner `TransferChecked` records under `index`, in emission order. Used
    /// by the instruction decoders to enrich amounts and mints.
    pub(crate) fn inner_checked_transfers(&self, index: usize) -> Vec<TransferRecord> {
        self.inner_instructions(index)
            .iter()
            .filter(|instruction| self.is_transfer_checked(instruction))
            .filter_map(|instruction| self.decode_transfer_checked(instruction))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{NATIVE_SOL_MINT, SPL_TOKEN_PROGRAM_ID};
    use crate::types::{
        ConfirmedTransaction, InnerInstructionSet, Message, TokenBalance, Transaction,
        TransactionMeta,
    };
    use solana_sdk::pubkey::Pubkey;
    use solana_sdk::signature::Signature;

    fn key(seed: u8) -> Pubkey {
        Pubkey::new_from_array([seed; 32])
    }

    fn encode(bytes: Vec<u8>) -> String {
        bs58::encode(bytes).into_string()
    }

    fn fixture() -> ConfirmedTransaction {
        ConfirmedTransaction {
            slot: 0,
            block_time: None,
            transaction: Transaction {
                signatures: vec![Signature::default()],
                message: Message {
                    // 0 token program, 1 source, 2 destination/mint-owner,
                    // 3 authority, 4 mint account
                    account_keys: vec![
                        SPL_TOKEN_PROGRAM_ID,
                        key(1),
                        key(2),
                        key(3),
                        key(4),
                    ],
                    instructions: vec![],
                },
            },
            meta: TransactionMeta {
                post_token_balances: vec![TokenBalance {
                    account_index: 2,
                    mint: key(40),
                    decimals: 6,
                }],
                ..TransactionMeta::default()
            },
        }
    }

    #[test]
    fn transfer_mint_is_looked_up_by_destination() {
        let parser = Parser::new(fixture()).unwrap();
        let mut data = vec![3u8];
        data.extend_from_slice(&500u64.to_le_bytes());
        let instruction = CompiledInstruction {
            program_id_index: 0,
            accounts: vec![1, 2, 3],
            data: encode(data),
        };
        let record = parser.decode_transfer(&instruction).unwrap();
        assert_eq!(record.amount, 500);
        assert_eq!(record.source, key(1));
        assert_eq!(record.destination, key(2));
        assert_eq!(record.authority, key(3));
        assert_eq!(record.mint, Some(key(40)));
        assert_eq!(record.decimals, 6);
    }

    #[test]
    fn transfer_checked_reads_mint_from_account_slot() {
        let mut tx = fixture();
        tx.meta.post_token_balances.push(TokenBalance {
            account_index: 1,
            mint: key(4),
            decimals: 9,
        });
        let parser = Parser::new(tx).unwrap();
        let mut data = vec![12u8];
        data.extend_from_slice(&750u64.to_le_bytes());
        data.push(2); // checked byte, overridden by the mint table
        let instruction = CompiledInstruction {
            program_id_index: 0,
            accounts: vec![1, 2, 4, 3],
            data: encode(data),
        };
        let record = parser.decode_transfer_checked(&instruction).unwrap();
        assert_eq!(record.amount, 750);
        assert_eq!(record.mint, Some(key(4)));
        assert_eq!(record.decimals, 9);
        assert_eq!(record.authority, key(3));
    }

    #[test]
    fn transfer_checked_falls_back_to_checked_decimals() {
        let parser = Parser::new(fixture()).unwrap();
        let mut data = vec![12u8];
        data.extend_from_slice(&1u64.to_le_bytes());
        data.push(4);
        let instruction = CompiledInstruction {
            program_id_index: 0,
            accounts: vec![1, 2, 4, 3],
            data: encode(data),
        };
        let record = parser.decode_transfer_checked(&instruction).unwrap();
        assert_eq!(record.decimals, 4);
    }

    #[test]
    fn inner_transfer_swaps_preserve_emission_order() {
        let mut tx = fixture();
        let mut first = vec![3u8];
        first.extend_from_slice(&1u64.to_le_bytes());
        let mut second = vec![3u8];
        second.extend_from_slice(&2u64.to_le_bytes());
        tx.meta.inner_instructions = vec![InnerInstructionSet {
            index: 0,
            instructions: vec![
                CompiledInstruction {
                    program_id_index: 0,
                    accounts: vec![1, 2, 3],
                    data: encode(first),
                },
                CompiledInstruction {
                    program_id_index: 0,
                    accounts: vec![2, 1, 3],
                    data: encode(second),
                },
            ],
        }];
        let parser = Parser::new(tx).unwrap();
        let swaps = parser.inner_transfer_swaps(0, SwapType::Orca);
        assert_eq!(swaps.len(), 2);
        let amounts: Vec<u64> = swaps
            .iter()
            .map(|swap| match &swap.payload {
                SwapPayload::Transfer(record) => record.amount,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(amounts, vec![1, 2]);
        // The source account of the first transfer was backfilled as SOL.
        if let SwapPayload::Transfer(record) = &swaps[1].payload {
            assert_eq!(record.mint, Some(NATIVE_SOL_MINT));
        }
    }
}
