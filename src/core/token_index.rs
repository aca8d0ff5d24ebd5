use std::collections::HashMap;

use solana_sdk::pubkey::Pubkey;

use crate::core::checks::instruction_data;
use crate::core::constants::{
    NATIVE_SOL_DECIMALS, NATIVE_SOL_MINT, SPL_TOKEN_2022_PROGRAM_ID, SPL_TOKEN_PROGRAM_ID,
};
use crate::core::parser::Parser;
use crate::types::{CompiledInstruction, TokenInfo};

impl Parser {
    /// Token-account index: post token balances first, then placeholders for
    /// every account touched by an SPL-Token transfer, finally backfilled with
    /// the native-SOL mint. Frozen before the dispatch pass.
    pub(crate) fn build_token_accounts(&self) -> HashMap<Pubkey, TokenInfo> {
        let mut accounts: HashMap<Pubkey, Option<TokenInfo>> = HashMap::new();

        for balance in self.post_token_balances() {
            if balance.mint == Pubkey::default() {
                continue;
            }
            let Some(account) = self.account_keys().get(balance.account_index as usize) else {
                continue;
            };
            accounts.insert(
                *account,
                Some(TokenInfo {
                    mint: balance.mint,
                    decimals: balance.decimals,
                }),
            );
        }

        let mut record = |instruction: &CompiledInstruction| {
            let Some(program_id) = self.program_id(instruction) else {
                return;
            };
            if program_id != SPL_TOKEN_PROGRAM_ID && program_id != SPL_TOKEN_2022_PROGRAM_ID {
                return;
            }
            let Some(data) = instruction_data(instruction) else {
                return;
            };
            if data.is_empty() || (data[0] != 3 && data[0] != 12) {
                return;
            }
            if instruction.accounts.len() < 3 {
                return;
            }
            for &index in &instruction.accounts[..2] {
                let Some(account) = self.account_keys().get(index as usize) else {
                    return;
                };
                accounts.entry(*account).or_insert(None);
            }
        };

        for instruction in self.outer_instructions() {
            record(instruction);
        }
        for set in self.inner_instruction_sets() {
            for instruction in &set.instructions {
                record(instruction);
            }
        }

        accounts
            .into_iter()
            .map(|(account, info)| {
                (
                    account,
                    info.unwrap_or(TokenInfo {
                        mint: NATIVE_SOL_MINT,
                        decimals: NATIVE_SOL_DECIMALS,
                    }),
                )
            })
            .collect()
    }

    /// Auxiliary mint -> decimals table, seeded with native SOL.
    pub(crate) fn build_mint_decimals(&self) -> HashMap<Pubkey, u8> {
        let mut decimals = HashMap::new();
        decimals.insert(NATIVE_SOL_MINT, NATIVE_SOL_DECIMALS);
        for balance in self.post_token_balances() {
            if balance.mint != Pubkey::default() {
                decimals.entry(balance.mint).or_insert(balance.decimals);
            }
        }
        decimals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        ConfirmedTransaction, InnerInstructionSet, Message, TokenBalance, Transaction,
        TransactionMeta,
    };
    use solana_sdk::signature::Signature;

    fn key(seed: u8) -> Pubkey {
        Pubkey::new_from_array([seed; 32])
    }

    fn transfer_ix(accounts: Vec<u8>) -> CompiledInstruction {
        let mut data = vec![3u8];
        data.extend_from_slice(&1u64.to_le_bytes());
        CompiledInstruction {
            program_id_index: 0,
            accounts,
            data: bs58::encode(data).into_string(),
        }
    }

    fn build(meta: TransactionMeta) -> Parser {
        Parser::new(ConfirmedTransaction {
            slot: 0,
            block_time: None,
            transaction: Transaction {
                signatures: vec![Signature::default()],
                message: Message {
                    account_keys: vec![SPL_TOKEN_PROGRAM_ID, key(1), key(2), key(3)],
                    instructions: vec![],
                },
            },
            meta,
        })
        .unwrap()
    }

    #[test]
    fn post_balances_take_priority_over_placeholders() {
        let parser = build(TransactionMeta {
            post_token_balances: vec![TokenBalance {
                account_index: 2,
                mint: key(50),
                decimals: 6,
            }],
            inner_instructions: vec![InnerInstructionSet {
                index: 0,
                instructions: vec![transfer_ix(vec![1, 2, 3])],
            }],
            ..TransactionMeta::default()
        });
        assert_eq!(
            parser.token_accounts.get(&key(2)),
            Some(&TokenInfo {
                mint: key(50),
                decimals: 6
            })
        );
        // The source side had no post balance and is backfilled as SOL.
        assert_eq!(
            parser.token_accounts.get(&key(1)),
            Some(&TokenInfo {
                mint: NATIVE_SOL_MINT,
                decimals: 9
            })
        );
    }

    #[test]
    fn zero_mint_balances_are_ignored() {
        let parser = build(TransactionMeta {
            post_token_balances: vec![TokenBalance {
                account_index: 1,
                mint: Pubkey::default(),
                decimals: 6,
            }],
            ..TransactionMeta::default()
        });
        assert!(parser.token_accounts.is_empty());
    }

    #[test]
    fn out_of_range_balance_index_is_skipped() {
        let parser = build(TransactionMeta {
            post_token_balances: vec![TokenBalance {
                account_index: 99,
                mint: key(50),
                decimals: 6,
            }],
            ..TransactionMeta::default()
        });
        assert!(parser.token_accounts.is_empty());
        // The mint still lands in the decimals table.
        assert_eq!(parser.mint_decimals.get(&key(50)), Some(&6));
    }

    #[test]
    fn mint_decimals_table_is_seeded_with_sol() {
        let parser = build(TransactionMeta::default());
        assert_eq!(parser.mint_decimals.get(&NATIVE_SOL_MINT), Some(&9));
    }
}
