use crate::core::checks::instruction_data;
use crate::core::constants::METEORA_DBC_PROGRAM_ID;
use crate::core::parser::Parser;
use crate::core::reader::BinaryReader;
use crate::protocols::meteora_damm_v2::SWAP_DISCRIMINATOR;
use crate::types::{MeteoraDbcEvent, SwapData, SwapPayload, SwapType};

impl Parser {
    /// Meteora dynamic-bonding-curve swaps. Same discriminator as DAMM v2;
    /// the transfer trace is trusted over the instruction arguments for the
    /// amounts actually moved.
    pub(crate) fn process_meteora_dbc_swaps(&self, index: usize) -> Vec<SwapData> {
        if let Some(outer) = self.outer_instructions().get(index) {
            if self.is_event_instruction(outer, &METEORA_DBC_PROGRAM_ID, &SWAP_DISCRIMINATOR) {
                tracing::debug!(index, "swap discriminator dispatched as dbc by program id");
                if let Some(mut event) = decode_swap_instruction(outer) {
                    self.enrich_meteora_dbc_from_transfers(&mut event, index);
                    return vec![SwapData::new(
                        SwapType::Meteora,
                        SwapPayload::MeteoraDbc(event),
                    )];
                }
            }
        }

        self.inner_transfer_swaps(index, SwapType::Meteora)
    }

    fn enrich_meteora_dbc_from_transfers(&self, event: &mut MeteoraDbcEvent, index: usize) {
        let transfers = self.inner_checked_transfers(index);
        if transfers.len() < 2 {
            return;
        }
        let input = &transfers[0];
        let output = &transfers[transfers.len() - 1];

        if let Some(mint) = input.mint {
            event.token_in_mint = mint;
            event.token_in_decimals = input.decimals;
            event.amount_in = input.amount;
        }
        if let Some(mint) = output.mint {
            event.token_out_mint = mint;
            event.token_out_decimals = output.decimals;
            event.output_amount = output.amount;
        }
    }
}

fn decode_swap_instruction(
    instruction: &crate::types::CompiledInstruction,
) -> Option<MeteoraDbcEvent> {
    let data = instruction_data(instruction)?;
    let mut reader = BinaryReader::new(&data[8..]);
    let amount_in = reader.read_u64().ok()?;
    let minimum_amount_out = reader.read_u64().ok()?;
    Some(MeteoraDbcEvent {
        amount_in,
        minimum_amount_out,
        ..MeteoraDbcEvent::default()
    })
}
