use crate::core::checks::instruction_data;
use crate::core::constants::JUPITER_PROGRAM_ID;
use crate::core::parser::Parser;
use crate::core::reader::{BinaryReader, ReaderError};
use crate::types::{JupiterRouteEvent, SwapData, SwapPayload, SwapType};

/// Anchor event wrapper prefix followed by the `SwapEvent` discriminator.
/// Jupiter emits one of these per AMM hop of the route.
pub const ROUTE_EVENT_DISCRIMINATOR: [u8; 16] = [
    228, 69, 165, 46, 81, 203, 154, 29, 64, 198, 205, 232, 41, 213, 166, 113,
];

impl Parser {
    /// Jupiter is self-describing: the route events carry the authoritative
    /// input and output of every hop, so the underlying AMM transfers are
    /// never consulted when at least one event decodes.
    pub(crate) fn process_jupiter_swaps(&self, index: usize) -> Vec<SwapData> {
        let mut swaps = Vec::new();
        for instruction in self.inner_instructions(index) {
            if !self.is_event_instruction(
                instruction,
                &JUPITER_PROGRAM_ID,
                &ROUTE_EVENT_DISCRIMINATOR,
            ) {
                continue;
            }
            let Some(data) = instruction_data(instruction) else {
                continue;
            };
            match decode_route_event(&data[ROUTE_EVENT_DISCRIMINATOR.len()..]) {
                Ok(event) => {
                    swaps.push(SwapData::new(
                        SwapType::Jupiter,
                        SwapPayload::JupiterRoute(event),
                    ));
                }
                Err(err) => {
                    tracing::debug!(%err, "jupiter route event payload truncated, skipping");
                }
            }
        }
        if swaps.is_empty() {
            swaps = self.inner_transfer_swaps(index, SwapType::Jupiter);
        }
        swaps
    }
}

fn decode_route_event(payload: &[u8]) -> Result<JupiterRouteEvent, ReaderError> {
    let mut reader = BinaryReader::new(payload);
    Ok(JupiterRouteEvent {
        amm: reader.read_pubkey()?,
        input_mint: reader.read_pubkey()?,
        input_amount: reader.read_u64()?,
        output_mint: reader.read_pubkey()?,
        output_amount: reader.read_u64()?,
    })
}
