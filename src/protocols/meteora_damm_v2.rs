use crate::core::checks::instruction_data;
use crate::core::constants::METEORA_DAMM_V2_PROGRAM_ID;
use crate::core::parser::Parser;
use crate::core::reader::BinaryReader;
use crate::types::{MeteoraDammV2Event, SwapData, SwapPayload, SwapType};

/// `swap` instruction discriminator. Identical to the Meteora DBC one; the
/// outer program id is what routes a transaction here instead.
pub const SWAP_DISCRIMINATOR: [u8; 8] = [248, 198, 158, 145, 225, 117, 135, 200];

impl Parser {
    /// Meteora DAMM v2 swaps: the instruction arguments give the input amount
    /// and threshold, the checked-transfer trace supplies mints, decimals and
    /// the realised output.
    pub(crate) fn process_meteora_damm_v2_swaps(&self, index: usize) -> Vec<SwapData> {
        if let Some(outer) = self.outer_instructions().get(index) {
            if self.is_event_instruction(outer, &METEORA_DAMM_V2_PROGRAM_ID, &SWAP_DISCRIMINATOR) {
                tracing::debug!(
                    index,
                    "swap discriminator dispatched as damm_v2 by program id"
                );
                if let Some(mut event) = decode_swap_instruction(outer) {
                    self.enrich_meteora_damm_v2_from_transfers(&mut event, index);
                    return vec![SwapData::new(
                        SwapType::Meteora,
                        SwapPayload::MeteoraDammV2(event),
                    )];
                }
            }
        }

        self.inner_transfer_swaps(index, SwapType::Meteora)
    }

    fn enrich_meteora_damm_v2_from_transfers(&self, event: &mut MeteoraDammV2Event, index: usize) {
        let transfers = self.inner_checked_transfers(index);
        if transfers.len() < 2 {
            return;
        }
        let input = &transfers[0];
        let output = &transfers[transfers.len() - 1];

        if let Some(mint) = input.mint {
            event.token_in_mint = mint;
            event.token_in_decimals = input.decimals;
        }
        if let Some(mint) = output.mint {
            event.token_out_mint = mint;
            event.token_out_decimals = output.decimals;
            event.actual_amount_out = output.amount;
        }
    }
}

fn decode_swap_instruction(
    instruction: &crate::types::CompiledInstruction,
) -> Option<MeteoraDammV2Event> {
    let data = instruction_data(instruction)?;
    let mut reader = BinaryReader::new(&data[8..]);
    let amount = reader.read_u64().ok()?;
    let other_amount_threshold = reader.read_u64().ok()?;
    Some(MeteoraDammV2Event {
        amount_in: amount,
        minimum_amount_out: other_amount_threshold,
        direction: 0,
        ..MeteoraDammV2Event::default()
    })
}
