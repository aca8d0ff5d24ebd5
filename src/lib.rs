//! Core library entry point exposing the parser and public data types.

pub mod core;
pub mod protocols;
pub mod rpc;
pub mod types;

pub use crate::core::error::ParserError;
pub use crate::core::parser::Parser;
pub use crate::types::{
    CompiledInstruction, ConfirmedTransaction, InnerInstructionSet, LoadedAddresses, Message,
    SwapData, SwapPayload, SwapSummary, SwapType, TokenBalance, TokenInfo, Transaction,
    TransactionMeta, TransferRecord,
};
