use std::collections::HashMap;
use std::collections::HashSet;

use chrono::{DateTime, TimeZone, Utc};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

use crate::core::constants::{
    is_meteora_program, is_pump_fun_program, is_raydium_amm_program, is_router_wrapper_program,
    BOOPFUN_PROGRAM_ID, JUPITER_DCA_PROGRAM_ID, JUPITER_PROGRAM_ID, METEORA_DAMM_V2_PROGRAM_ID,
    METEORA_DBC_PROGRAM_ID, MOONSHOT_PROGRAM_ID, OKX_DEX_ROUTER_PROGRAM_ID,
    ORCA_WHIRLPOOL_PROGRAM_ID, PUMP_FUN_AMM_PROGRAM_ID, RAYDIUM_LAUNCHLAB_PROGRAM_ID,
};
use crate::core::error::ParserError;
use crate::types::{
    CompiledInstruction, ConfirmedTransaction, SwapData, SwapSummary, TokenInfo, Transaction,
    TransactionMeta,
};

// Dedup keys for router-wrapper re-dispatch: each family runs at most once
// per wrapper instruction.
const FAMILY_RAYDIUM: &str = "raydium";
const FAMILY_ORCA: &str = "orca";
const FAMILY_METEORA: &str = "meteora";
const FAMILY_PUMPFUN: &str = "pumpfun";

/// Single-transaction swap parser. Construction resolves the flat account-key
/// array and freezes the token-account index; the dispatch and summary passes
/// only read after that.
pub struct Parser {
    tx: ConfirmedTransaction,
    account_keys: Vec<Pubkey>,
    pub(crate) token_accounts: HashMap<Pubkey, TokenInfo>,
    pub(crate) mint_decimals: HashMap<Pubkey, u8>,
}

impl Parser {
    pub fn new(tx: ConfirmedTransaction) -> Result<Self, ParserError> {
        if tx.transaction.message.account_keys.is_empty() {
            return Err(ParserError::malformed("message carries no account keys"));
        }
        if tx.transaction.signatures.is_empty() {
            return Err(ParserError::malformed("transaction carries no signatures"));
        }

        // Flat key array: static message keys, then loaded writable, then
        // loaded readonly. Every compiled index resolves against this order.
        let mut account_keys = tx.transaction.message.account_keys.clone();
        account_keys.extend(tx.meta.loaded_addresses.writable.iter().copied());
        account_keys.extend(tx.meta.loaded_addresses.readonly.iter().copied());

        let mut parser = Self {
            tx,
            account_keys,
            token_accounts: HashMap::new(),
            mint_decimals: HashMap::new(),
        };
        parser.token_accounts = parser.build_token_accounts();
        parser.mint_decimals = parser.build_mint_decimals();
        Ok(parser)
    }

    /// Construct without a `GetTransaction` envelope. Summaries built this way
    /// have no block time and fall back to wall-clock timestamps.
    pub fn from_parts(
        transaction: Transaction,
        meta: TransactionMeta,
    ) -> Result<Self, ParserError> {
        Self::new(ConfirmedTransaction {
            slot: 0,
            block_time: None,
            transaction,
            meta,
        })
    }

    pub fn block_time(&self) -> Option<DateTime<Utc>> {
        self.tx
            .block_time
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    }

    /// Parse and summarise in one call.
    pub fn parse(&self) -> Result<SwapSummary, ParserError> {
        let swaps = self.parse_transaction();
        self.summarize(&swaps)
    }

    /// Two-pass dispatch over the outer instructions. Pass 1 handles
    /// aggregators and wrappers; any aggregator hit suppresses pass 2, because
    /// aggregators emit both their own event and the underlying AMM transfers
    /// and running both would double-count.
    pub fn parse_transaction(&self) -> Vec<SwapData> {
        let mut swaps = Vec::new();

        let mut skip = false;
        for (index, outer) in self.outer_instructions().iter().enumerate() {
            let Some(program_id) = self.program_id(outer) else {
                continue;
            };
            if program_id == JUPITER_PROGRAM_ID {
                skip = true;
                swaps.extend(self.process_jupiter_swaps(index));
            } else if program_id == MOONSHOT_PROGRAM_ID {
                skip = true;
                swaps.extend(self.process_moonshot_swaps(index));
            } else if program_id == BOOPFUN_PROGRAM_ID {
                skip = true;
                swaps.extend(self.process_boopfun_swaps(index));
            } else if is_router_wrapper_program(&program_id) {
                // Wrappers feed the same aggregate but do not preclude
                // further outer processing.
                swaps.extend(self.process_router_swaps(index));
            } else if program_id == OKX_DEX_ROUTER_PROGRAM_ID {
                skip = true;
                swaps.extend(self.process_okx_swaps(index));
            }
        }
        if skip {
            return swaps;
        }

        for (index, outer) in self.outer_instructions().iter().enumerate() {
            let Some(program_id) = self.program_id(outer) else {
                continue;
            };
            if is_raydium_amm_program(&program_id) {
                swaps.extend(self.process_raydium_swaps(index));
            } else if program_id == RAYDIUM_LAUNCHLAB_PROGRAM_ID {
                swaps.extend(self.process_raydium_launchlab_swaps(index));
            } else if program_id == ORCA_WHIRLPOOL_PROGRAM_ID {
                swaps.extend(self.process_orca_swaps(index));
            } else if program_id == METEORA_DAMM_V2_PROGRAM_ID {
                swaps.extend(self.process_meteora_damm_v2_swaps(index));
            } else if program_id == METEORA_DBC_PROGRAM_ID {
                swaps.extend(self.process_meteora_dbc_swaps(index));
            } else if is_meteora_program(&program_id) {
                swaps.extend(self.process_meteora_swaps(index));
            } else if program_id == PUMP_FUN_AMM_PROGRAM_ID {
                swaps.extend(self.process_pumpfun_amm_swaps(index));
            } else if is_pump_fun_program(&program_id) {
                swaps.extend(self.process_pumpfun_swaps(index));
            }
        }

        swaps
    }

    /// Re-dispatch the inner instructions of a router wrapper (Banana Gun,
    /// Maestro, ...) to the AMM decoders, at most once per protocol family.
    fn process_router_swaps(&self, index: usize) -> Vec<SwapData> {
        let mut swaps = Vec::new();
        let inner = self.inner_instructions(index);
        if inner.is_empty() {
            return swaps;
        }

        let mut processed: HashSet<&'static str> = HashSet::new();
        for instruction in inner {
            let Some(program_id) = self.program_id(instruction) else {
                continue;
            };
            if is_raydium_amm_program(&program_id) && processed.insert(FAMILY_RAYDIUM) {
                swaps.extend(self.process_raydium_swaps(index));
            } else if program_id == ORCA_WHIRLPOOL_PROGRAM_ID && processed.insert(FAMILY_ORCA) {
                swaps.extend(self.process_orca_swaps(index));
            } else if (is_meteora_program(&program_id)
                || program_id == METEORA_DAMM_V2_PROGRAM_ID
                || program_id == METEORA_DBC_PROGRAM_ID)
                && processed.insert(FAMILY_METEORA)
            {
                swaps.extend(self.process_meteora_swaps(index));
            } else if program_id == PUMP_FUN_AMM_PROGRAM_ID && processed.insert(FAMILY_PUMPFUN) {
                swaps.extend(self.process_pumpfun_amm_swaps(index));
            } else if is_pump_fun_program(&program_id) && processed.insert(FAMILY_PUMPFUN) {
                swaps.extend(self.process_pumpfun_swaps(index));
            }
        }

        swaps
    }

    pub(crate) fn account_keys(&self) -> &[Pubkey] {
        &self.account_keys
    }

    /// Bounds-checked account lookup. Out-of-range indices are logged and the
    /// caller skips the enclosing operation.
    pub(crate) fn account_key(&self, index: usize) -> Option<&Pubkey> {
        let key = self.account_keys.get(index);
        if key.is_none() {
            tracing::warn!(
                index,
                len = self.account_keys.len(),
                "account index out of range, skipping"
            );
        }
        key
    }

    /// Program id of a compiled instruction, or `None` (logged) when the
    /// index does not resolve.
    pub(crate) fn program_id(&self, instruction: &CompiledInstruction) -> Option<Pubkey> {
        self.account_key(instruction.program_id_index as usize)
            .copied()
    }

    pub(crate) fn outer_instructions(&self) -> &[CompiledInstruction] {
        &self.tx.transaction.message.instructions
    }

    /// Inner instructions spawned by the outer instruction at `index`. Sets
    /// are keyed by outer index but stored as a list, so this scans linearly.
    pub(crate) fn inner_instructions(&self, index: usize) -> &[CompiledInstruction] {
        self.tx
            .meta
            .inner_instructions
            .iter()
            .find(|set| set.index as usize == index)
            .map(|set| set.instructions.as_slice())
            .unwrap_or(&[])
    }

    pub(crate) fn inner_instruction_sets(&self) -> &[crate::types::InnerInstructionSet] {
        &self.tx.meta.inner_instructions
    }

    pub(crate) fn post_token_balances(&self) -> &[crate::types::TokenBalance] {
        &self.tx.meta.post_token_balances
    }

    pub(crate) fn signatures(&self) -> &[Signature] {
        &self.tx.transaction.signatures
    }

    /// Jupiter DCA fills are signed by the program; the end user sits at
    /// account index 2 in those transactions.
    pub(crate) fn contains_dca_program(&self) -> bool {
        self.outer_instructions()
            .iter()
            .filter_map(|instruction| self.program_id(instruction))
            .any(|program_id| program_id == JUPITER_DCA_PROGRAM_ID)
    }
}
