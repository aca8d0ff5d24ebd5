use crate::core::checks::instruction_data;
use crate::core::constants::PUMP_FUN_PROGRAM_ID;
use crate::core::parser::Parser;
use crate::core::reader::{BinaryReader, ReaderError};
use crate::types::{PumpfunTradeEvent, SwapData, SwapPayload, SwapType};

/// Anchor event wrapper prefix followed by the bonding-curve `TradeEvent`
/// discriminator.
pub const TRADE_EVENT_DISCRIMINATOR: [u8; 16] = [
    228, 69, 165, 46, 81, 203, 154, 29, 189, 219, 127, 211, 78, 230, 97, 238,
];

impl Parser {
    /// Pump.fun bonding-curve swaps. The emitted trade event carries both leg
    /// amounts, the direction and its own timestamp; transfers are only a
    /// fallback when the event is missing or malformed.
    pub(crate) fn process_pumpfun_swaps(&self, index: usize) -> Vec<SwapData> {
        let mut swaps = Vec::new();
        for instruction in self.inner_instructions(index) {
            if !self.is_event_instruction(
                instruction,
                &PUMP_FUN_PROGRAM_ID,
                &TRADE_EVENT_DISCRIMINATOR,
            ) {
                continue;
            }
            let Some(data) = instruction_data(instruction) else {
                continue;
            };
            match decode_trade_event(&data[TRADE_EVENT_DISCRIMINATOR.len()..]) {
                Ok(event) => {
                    swaps.push(SwapData::new(
                        SwapType::PumpFun,
                        SwapPayload::PumpfunTrade(event),
                    ));
                }
                Err(err) => {
                    tracing::debug!(%err, "pumpfun trade event payload truncated, skipping");
                }
            }
        }
        if swaps.is_empty() {
            swaps = self.inner_transfer_swaps(index, SwapType::PumpFun);
        }
        swaps
    }

    /// Pump.fun AMM (Pumpswap) has no decoded event here; its swaps are
    /// reconstructed purely from the inner transfer trace.
    pub(crate) fn process_pumpfun_amm_swaps(&self, index: usize) -> Vec<SwapData> {
        self.inner_transfer_swaps(index, SwapType::PumpFunAmm)
    }
}

fn decode_trade_event(payload: &[u8]) -> Result<PumpfunTradeEvent, ReaderError> {
    let mut reader = BinaryReader::new(payload);
    let mint = reader.read_pubkey()?;
    let sol_amount = reader.read_u64()?;
    let token_amount = reader.read_u64()?;
    let is_buy = reader.read_bool()?;
    let _user = reader.read_pubkey()?;
    let timestamp = reader.read_i64()?;
    let _virtual_sol_reserves = reader.read_u64()?;
    let _virtual_token_reserves = reader.read_u64()?;
    Ok(PumpfunTradeEvent {
        mint,
        sol_amount,
        token_amount,
        is_buy,
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;

    fn payload(mint: Pubkey, is_buy: bool) -> Vec<u8> {
        let mut payload = Vec::new();
        payload.extend_from_slice(mint.as_ref());
        payload.extend_from_slice(&1_500_000u64.to_le_bytes());
        payload.extend_from_slice(&42_000u64.to_le_bytes());
        payload.push(is_buy as u8);
        payload.extend_from_slice(Pubkey::new_unique().as_ref());
        payload.extend_from_slice(&1_700_000_123i64.to_le_bytes());
        payload.extend_from_slice(&9u64.to_le_bytes());
        payload.extend_from_slice(&8u64.to_le_bytes());
        payload
    }

    #[test]
    fn trade_event_decodes_direction_and_timestamp() {
        let mint = Pubkey::new_unique();
        let event = decode_trade_event(&payload(mint, true)).unwrap();
        assert_eq!(event.mint, mint);
        assert_eq!(event.sol_amount, 1_500_000);
        assert_eq!(event.token_amount, 42_000);
        assert!(event.is_buy);
        assert_eq!(event.timestamp, 1_700_000_123);
    }

    #[test]
    fn short_event_payload_is_rejected() {
        let mut short = payload(Pubkey::new_unique(), false);
        short.truncate(60);
        assert!(decode_trade_event(&short).is_err());
    }
}
