use solana_sdk::pubkey::Pubkey;

use crate::core::checks::instruction_data;
use crate::core::constants::{NATIVE_SOL_MINT, RAYDIUM_LAUNCHLAB_PROGRAM_ID};
use crate::core::parser::Parser;
use crate::core::reader::{BinaryReader, ReaderError};
use crate::types::{CompiledInstruction, RaydiumLaunchLabEvent, SwapData, SwapPayload, SwapType};

/// `buy_exact_in` / `sell_exact_in` discriminators. The same bytes tag both
/// the outer instruction and the CPI-emitted trade event.
pub const BUY_EXACT_IN_DISCRIMINATOR: [u8; 8] = [102, 230, 103, 87, 137, 106, 134, 187];
pub const SELL_EXACT_IN_DISCRIMINATOR: [u8; 8] = [149, 39, 222, 155, 211, 124, 152, 26];

// Token mint decimals assumed when the post-balance table has no entry.
const DEFAULT_TOKEN_DECIMALS: u8 = 6;

impl Parser {
    /// Raydium LaunchLab bonding-curve swaps: emitted trade event first, then
    /// the outer instruction arguments enriched from transfers, then bare
    /// transfers.
    pub(crate) fn process_raydium_launchlab_swaps(&self, index: usize) -> Vec<SwapData> {
        let mut swaps = Vec::new();

        for instruction in self.inner_instructions(index) {
            let Some(direction) = self.launchlab_direction(instruction) else {
                continue;
            };
            let Some(data) = instruction_data(instruction) else {
                continue;
            };
            match decode_trade_event(&data[8..], direction) {
                Ok(mut event) => {
                    self.enrich_token_leg(&mut event, index);
                    swaps.push(SwapData::new(
                        SwapType::RaydiumLaunchLab,
                        SwapPayload::RaydiumLaunchLab(event),
                    ));
                }
                Err(err) => {
                    tracing::debug!(%err, "launchlab trade event payload too short, falling back");
                }
            }
        }
        if !swaps.is_empty() {
            return swaps;
        }

        if let Some(outer) = self.outer_instructions().get(index) {
            if let Some(mut event) = self.decode_launchlab_instruction(outer) {
                self.enrich_raydium_launchlab_from_transfers(&mut event, index);
                return vec![SwapData::new(
                    SwapType::RaydiumLaunchLab,
                    SwapPayload::RaydiumLaunchLab(event),
                )];
            }
        }

        self.inner_transfer_swaps(index, SwapType::RaydiumLaunchLab)
    }

    /// Buy/sell direction when the instruction is a LaunchLab trade, `None`
    /// otherwise.
    fn launchlab_direction(&self, instruction: &CompiledInstruction) -> Option<bool> {
        if self.is_event_instruction(
            instruction,
            &RAYDIUM_LAUNCHLAB_PROGRAM_ID,
            &BUY_EXACT_IN_DISCRIMINATOR,
        ) {
            return Some(true);
        }
        if self.is_event_instruction(
            instruction,
            &RAYDIUM_LAUNCHLAB_PROGRAM_ID,
            &SELL_EXACT_IN_DISCRIMINATOR,
        ) {
            return Some(false);
        }
        None
    }

    /// Outer-instruction arguments: `amount_in`, `minimum_amount_out`,
    /// `share_fee_rate`. The actual output and token identity come from the
    /// transfer trace afterwards.
    fn decode_launchlab_instruction(
        &self,
        instruction: &CompiledInstruction,
    ) -> Option<RaydiumLaunchLabEvent> {
        let is_buy = self.launchlab_direction(instruction)?;
        let data = instruction_data(instruction)?;
        let mut reader = BinaryReader::new(&data[8..]);
        let amount_in = reader.read_u64().ok()?;
        let minimum_amount_out = reader.read_u64().ok()?;
        let share_fee = reader.read_u64().ok()?;
        Some(RaydiumLaunchLabEvent {
            amount_in,
            amount_out: 0,
            minimum_amount_out,
            share_fee,
            token_mint: Pubkey::default(),
            token_decimals: 0,
            is_buy,
        })
    }

    /// Attach the token mint and decimals from the last non-SOL checked
    /// transfer under the same outer index, matching the classification in
    /// `enrich_from_transfers`.
    fn enrich_token_leg(&self, event: &mut RaydiumLaunchLabEvent, index: usize) {
        for transfer in self.inner_checked_transfers(index) {
            let Some(mint) = transfer.mint else {
                continue;
            };
            if mint == NATIVE_SOL_MINT {
                continue;
            }
            event.token_mint = mint;
            event.token_decimals = self
                .mint_decimals
                .get(&mint)
                .copied()
                .unwrap_or(DEFAULT_TOKEN_DECIMALS);
        }
    }

    /// Replace the argument amounts with the amounts actually moved: the SOL
    /// leg and the token leg are classified by mint, then assigned to
    /// input/output according to the trade direction.
    fn enrich_raydium_launchlab_from_transfers(&self, event: &mut RaydiumLaunchLabEvent, index: usize) {
        let mut sol_amount = 0u64;
        let mut token_amount = 0u64;
        let mut token_mint = Pubkey::default();
        let mut token_decimals = DEFAULT_TOKEN_DECIMALS;

        for transfer in self.inner_checked_transfers(index) {
            let Some(mint) = transfer.mint else {
                continue;
            };
            if mint == NATIVE_SOL_MINT {
                sol_amount = transfer.amount;
            } else {
                token_amount = transfer.amount;
                token_mint = mint;
                token_decimals = transfer.decimals;
            }
        }

        if event.is_buy {
            if sol_amount > 0 {
                event.amount_in = sol_amount;
            }
            if token_amount > 0 {
                event.amount_out = token_amount;
            }
        } else {
            if token_amount > 0 {
                event.amount_in = token_amount;
            }
            if sol_amount > 0 {
                event.amount_out = sol_amount;
            }
        }

        if token_mint != Pubkey::default() {
            event.token_mint = token_mint;
            event.token_decimals = token_decimals;
        }
    }
}

/// Full on-chain trade-event layout. Only the swap-relevant fields are kept;
/// the direction comes from the discriminator because the event's own
/// direction byte does not round-trip the IDL enum reliably.
fn decode_trade_event(
    payload: &[u8],
    is_buy: bool,
) -> Result<RaydiumLaunchLabEvent, ReaderError> {
    let mut reader = BinaryReader::new(payload);
    let _pool_state = reader.read_pubkey()?;
    let _total_base_sell = reader.read_u64()?;
    let _virtual_base = reader.read_u64()?;
    let _virtual_quote = reader.read_u64()?;
    let _real_base_before = reader.read_u64()?;
    let _real_quote_before = reader.read_u64()?;
    let _real_base_after = reader.read_u64()?;
    let _real_quote_after = reader.read_u64()?;
    let amount_in = reader.read_u64()?;
    let amount_out = reader.read_u64()?;
    let minimum_amount_out = reader.read_u64()?;
    let _protocol_fee = reader.read_u64()?;
    let _platform_fee = reader.read_u64()?;
    let share_fee = reader.read_u64()?;
    let _trade_direction = reader.read_u8()?;
    let _pool_status = reader.read_u8()?;
    Ok(RaydiumLaunchLabEvent {
        amount_in,
        amount_out,
        minimum_amount_out,
        share_fee,
        token_mint: Pubkey::default(),
        token_decimals: 0,
        is_buy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_payload() -> Vec<u8> {
        let mut payload = Vec::new();
        payload.extend_from_slice(Pubkey::new_unique().as_ref());
        for value in [
            10u64, 11, 12, 13, 14, 15, 16, // reserves
            5_000, 120_000, 110_000, // amount_in, amount_out, minimum_out
            7, 8, 9, // fees
        ] {
            payload.extend_from_slice(&value.to_le_bytes());
        }
        payload.push(0); // trade_direction
        payload.push(1); // pool_status
        payload
    }

    #[test]
    fn trade_event_keeps_only_swap_fields() {
        let event = decode_trade_event(&event_payload(), true).unwrap();
        assert_eq!(event.amount_in, 5_000);
        assert_eq!(event.amount_out, 120_000);
        assert_eq!(event.minimum_amount_out, 110_000);
        assert_eq!(event.share_fee, 9);
        assert!(event.is_buy);
    }

    #[test]
    fn truncated_event_is_an_error() {
        let mut payload = event_payload();
        payload.truncate(64);
        assert!(decode_trade_event(&payload, false).is_err());
    }
}
