use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

/// Compiled instruction as it appears in a confirmed-transaction message.
/// `data` is kept in its base58 wire form; decoders unpack it on demand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompiledInstruction {
    pub program_id_index: u8,
    pub accounts: Vec<u8>,
    pub data: String,
}

/// Static portion of a transaction message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message {
    pub account_keys: Vec<Pubkey>,
    pub instructions: Vec<CompiledInstruction>,
}

/// A signed transaction with its compiled message.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transaction {
    pub signatures: Vec<Signature>,
    pub message: Message,
}

/// Account keys resolved through an address-lookup table, split by mutability.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadedAddresses {
    pub writable: Vec<Pubkey>,
    pub readonly: Vec<Pubkey>,
}

/// Instructions synthesised by cross-program invocation, grouped under the
/// outer instruction that spawned them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InnerInstructionSet {
    pub index: u16,
    pub instructions: Vec<CompiledInstruction>,
}

/// Post-execution token balance snapshot entry. A zero `mint` means the RPC
/// response carried no mint for this account.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenBalance {
    pub account_index: u16,
    pub mint: Pubkey,
    pub decimals: u8,
}

/// Execution metadata attached to a confirmed transaction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionMeta {
    pub loaded_addresses: LoadedAddresses,
    pub inner_instructions: Vec<InnerInstructionSet>,
    pub post_token_balances: Vec<TokenBalance>,
}

/// A fully materialised confirmed transaction, the unit one parser consumes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfirmedTransaction {
    pub slot: u64,
    pub block_time: Option<i64>,
    pub transaction: Transaction,
    pub meta: TransactionMeta,
}

/// Mint and decimals for a token account, resolved from post token balances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenInfo {
    pub mint: Pubkey,
    pub decimals: u8,
}

/// Protocol family a piece of swap data was attributed to. The string form
/// doubles as the AMM tag in the final summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwapType {
    Raydium,
    RaydiumLaunchLab,
    Orca,
    Meteora,
    PumpFun,
    PumpFunAmm,
    Jupiter,
    Moonshot,
    BoopFun,
    Okx,
}

impl SwapType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapType::Raydium => "raydium",
            SwapType::RaydiumLaunchLab => "raydium_launchlab",
            SwapType::Orca => "orca",
            SwapType::Meteora => "meteora",
            SwapType::PumpFun => "pumpfun",
            SwapType::PumpFunAmm => "pumpfun_amm",
            SwapType::Jupiter => "jupiter",
            SwapType::Moonshot => "moonshot",
            SwapType::BoopFun => "boopfun",
            SwapType::Okx => "okx",
        }
    }
}

impl std::fmt::Display for SwapType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SwapType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Uniform view of an SPL-Token `Transfer` or `TransferChecked` instruction.
/// `mint == None` is the unknown-mint sentinel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    #[serde(serialize_with = "serde_helpers::pubkey")]
    pub source: Pubkey,
    #[serde(serialize_with = "serde_helpers::pubkey")]
    pub destination: Pubkey,
    #[serde(serialize_with = "serde_helpers::pubkey")]
    pub authority: Pubkey,
    pub amount: u64,
    #[serde(serialize_with = "serde_helpers::opt_pubkey")]
    pub mint: Option<Pubkey>,
    pub decimals: u8,
}

/// Pump.fun bonding-curve trade event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PumpfunTradeEvent {
    #[serde(serialize_with = "serde_helpers::pubkey")]
    pub mint: Pubkey,
    pub sol_amount: u64,
    pub token_amount: u64,
    pub is_buy: bool,
    pub timestamp: i64,
}

/// Jupiter aggregator route event, one per AMM hop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JupiterRouteEvent {
    #[serde(serialize_with = "serde_helpers::pubkey")]
    pub amm: Pubkey,
    #[serde(serialize_with = "serde_helpers::pubkey")]
    pub input_mint: Pubkey,
    pub input_amount: u64,
    #[serde(serialize_with = "serde_helpers::pubkey")]
    pub output_mint: Pubkey,
    pub output_amount: u64,
}

/// Raydium LaunchLab buy/sell, from either the emitted trade event or the
/// outer instruction arguments enriched with transfer data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaydiumLaunchLabEvent {
    pub amount_in: u64,
    pub amount_out: u64,
    pub minimum_amount_out: u64,
    pub share_fee: u64,
    #[serde(serialize_with = "serde_helpers::pubkey")]
    pub token_mint: Pubkey,
    pub token_decimals: u8,
    pub is_buy: bool,
}

/// Meteora DAMM v2 swap reconstructed from the instruction arguments and the
/// inner transfer trace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeteoraDammV2Event {
    pub amount_in: u64,
    pub minimum_amount_out: u64,
    pub direction: u8,
    #[serde(serialize_with = "serde_helpers::pubkey")]
    pub token_in_mint: Pubkey,
    pub token_in_decimals: u8,
    #[serde(serialize_with = "serde_helpers::pubkey")]
    pub token_out_mint: Pubkey,
    pub token_out_decimals: u8,
    pub actual_amount_out: u64,
}

/// Meteora dynamic-bonding-curve swap. Shares its instruction discriminator
/// with DAMM v2; the outer program id decides which decoder runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeteoraDbcEvent {
    pub amount_in: u64,
    pub minimum_amount_out: u64,
    pub output_amount: u64,
    #[serde(serialize_with = "serde_helpers::pubkey")]
    pub token_in_mint: Pubkey,
    pub token_in_decimals: u8,
    #[serde(serialize_with = "serde_helpers::pubkey")]
    pub token_out_mint: Pubkey,
    pub token_out_decimals: u8,
}

/// Boop.fun `buy_token` swap, always SOL into the token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoopFunEvent {
    pub buy_amount: u64,
    pub amount_out_min: u64,
    pub token_out: u64,
    #[serde(serialize_with = "serde_helpers::pubkey")]
    pub token_mint: Pubkey,
    pub token_decimals: u8,
    pub is_buy: bool,
}

/// Decoded payload carried by one piece of swap data. Each variant keeps only
/// the fields its protocol actually encodes.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SwapPayload {
    Transfer(TransferRecord),
    PumpfunTrade(PumpfunTradeEvent),
    JupiterRoute(JupiterRouteEvent),
    RaydiumLaunchLab(RaydiumLaunchLabEvent),
    MeteoraDammV2(MeteoraDammV2Event),
    MeteoraDbc(MeteoraDbcEvent),
    BoopFun(BoopFunEvent),
}

/// One protocol-attributed observation extracted from a transaction.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapData {
    #[serde(rename = "type")]
    pub swap_type: SwapType,
    pub payload: SwapPayload,
}

impl SwapData {
    pub fn new(swap_type: SwapType, payload: SwapPayload) -> Self {
        Self { swap_type, payload }
    }
}

/// Canonical summary of the single net swap a transaction performed.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapSummary {
    #[serde(serialize_with = "serde_helpers::pubkeys")]
    pub signers: Vec<Pubkey>,
    #[serde(serialize_with = "serde_helpers::signatures")]
    pub signatures: Vec<Signature>,
    pub amms: Vec<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(serialize_with = "serde_helpers::pubkey")]
    pub token_in_mint: Pubkey,
    pub token_in_amount: u64,
    pub token_in_decimals: u8,
    #[serde(serialize_with = "serde_helpers::pubkey")]
    pub token_out_mint: Pubkey,
    pub token_out_amount: u64,
    pub token_out_decimals: u8,
}

mod serde_helpers {
    use super::*;

    pub fn pubkey<S: Serializer>(key: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&key.to_string())
    }

    pub fn opt_pubkey<S: Serializer>(
        key: &Option<Pubkey>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match key {
            Some(key) => serializer.serialize_str(&key.to_string()),
            None => serializer.serialize_str("Unknown"),
        }
    }

    pub fn pubkeys<S: Serializer>(keys: &[Pubkey], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(keys.iter().map(|key| key.to_string()))
    }

    pub fn signatures<S: Serializer>(
        signatures: &[Signature],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(signatures.iter().map(|signature| signature.to_string()))
    }
}
