use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use solana_client::rpc_client::RpcClient;
use solana_client::rpc_config::RpcTransactionConfig;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_transaction_status::{
    EncodedConfirmedTransactionWithStatusMeta, EncodedTransaction, UiCompiledInstruction,
    UiInnerInstructions, UiInstruction, UiLoadedAddresses, UiMessage, UiTransactionEncoding,
    UiTransactionStatusMeta, UiTransactionTokenBalance,
};

use crate::types::{
    CompiledInstruction, ConfirmedTransaction, InnerInstructionSet, LoadedAddresses, Message,
    TokenBalance, Transaction, TransactionMeta,
};

/// Fetch a confirmed transaction and materialise it into the internal
/// `ConfirmedTransaction` the parser consumes.
pub fn fetch_transaction(rpc_url: &str, signature: &str) -> Result<ConfirmedTransaction> {
    let client = RpcClient::new(rpc_url.to_string());
    let signature = Signature::from_str(signature).context("invalid signature")?;
    let config = RpcTransactionConfig {
        encoding: Some(UiTransactionEncoding::Json),
        commitment: Some(CommitmentConfig::confirmed()),
        max_supported_transaction_version: Some(0),
    };

    let encoded = client
        .get_transaction_with_config(&signature, config)
        .with_context(|| format!("failed to fetch transaction {signature}"))?;
    convert_transaction(encoded)
}

pub fn convert_transaction(
    tx: EncodedConfirmedTransactionWithStatusMeta,
) -> Result<ConfirmedTransaction> {
    let meta = tx
        .transaction
        .meta
        .as_ref()
        .context("transaction missing status meta")?;

    let ui_tx = match &tx.transaction.transaction {
        EncodedTransaction::Json(tx) => tx,
        _ => return Err(anyhow!("expected JSON encoded transaction")),
    };
    let raw = match &ui_tx.message {
        UiMessage::Raw(raw) => raw,
        UiMessage::Parsed(_) => {
            return Err(anyhow!(
                "parsed message encoding loses compiled indices, fetch with Json"
            ))
        }
    };

    let signatures = ui_tx
        .signatures
        .iter()
        .map(|signature| Signature::from_str(signature).context("invalid signature in message"))
        .collect::<Result<Vec<_>>>()?;
    let account_keys = raw
        .account_keys
        .iter()
        .map(|key| Pubkey::from_str(key).context("invalid account key"))
        .collect::<Result<Vec<_>>>()?;
    let instructions = raw
        .instructions
        .iter()
        .map(convert_compiled_instruction)
        .collect();

    Ok(ConfirmedTransaction {
        slot: tx.slot,
        block_time: tx.block_time,
        transaction: Transaction {
            signatures,
            message: Message {
                account_keys,
                instructions,
            },
        },
        meta: TransactionMeta {
            loaded_addresses: convert_loaded_addresses(meta)?,
            inner_instructions: convert_inner_instructions(
                Option::<&Vec<UiInnerInstructions>>::from(meta.inner_instructions.as_ref()),
            ),
            post_token_balances: convert_token_balances(
                Option::<&Vec<UiTransactionTokenBalance>>::from(meta.post_token_balances.as_ref()),
            )?,
        },
    })
}

fn convert_compiled_instruction(instruction: &UiCompiledInstruction) -> CompiledInstruction {
    CompiledInstruction {
        program_id_index: instruction.program_id_index,
        accounts: instruction.accounts.clone(),
        data: instruction.data.clone(),
    }
}

fn convert_inner_instructions(sets: Option<&Vec<UiInnerInstructions>>) -> Vec<InnerInstructionSet> {
    sets.map(|sets| {
        sets.iter()
            .map(|set| InnerInstructionSet {
                index: set.index as u16,
                instructions: set
                    .instructions
                    .iter()
                    .filter_map(|instruction| match instruction {
                        UiInstruction::Compiled(compiled) => {
                            Some(convert_compiled_instruction(compiled))
                        }
                        UiInstruction::Parsed(_) => {
                            tracing::debug!("skipping parsed inner instruction");
                            None
                        }
                    })
                    .collect(),
            })
            .collect()
    })
    .unwrap_or_default()
}

fn convert_token_balances(
    balances: Option<&Vec<UiTransactionTokenBalance>>,
) -> Result<Vec<TokenBalance>> {
    balances
        .map(|balances| {
            balances
                .iter()
                .map(|balance| {
                    Ok(TokenBalance {
                        account_index: balance.account_index as u16,
                        mint: Pubkey::from_str(&balance.mint)
                            .context("invalid mint in token balance")?,
                        decimals: balance.ui_token_amount.decimals,
                    })
                })
                .collect()
        })
        .unwrap_or_else(|| Ok(Vec::new()))
}

fn convert_loaded_addresses(meta: &UiTransactionStatusMeta) -> Result<LoadedAddresses> {
    let Some(loaded) = Option::<&UiLoadedAddresses>::from(meta.loaded_addresses.as_ref()) else {
        return Ok(LoadedAddresses::default());
    };
    let parse = |keys: &[String]| {
        keys.iter()
            .map(|key| Pubkey::from_str(key).context("invalid loaded address"))
            .collect::<Result<Vec<_>>>()
    };
    Ok(LoadedAddresses {
        writable: parse(&loaded.writable)?,
        readonly: parse(&loaded.readonly)?,
    })
}
