use crate::core::checks::instruction_data;
use crate::core::constants::{BOOPFUN_PROGRAM_ID, NATIVE_SOL_MINT};
use crate::core::parser::Parser;
use crate::core::reader::BinaryReader;
use crate::types::{BoopFunEvent, SwapData, SwapPayload, SwapType};

/// `buy_token` instruction discriminator. Boop.fun swaps routed here are
/// always SOL into the token.
pub const BUY_TOKEN_DISCRIMINATOR: [u8; 8] = [138, 127, 14, 91, 38, 87, 115, 105];

impl Parser {
    pub(crate) fn process_boopfun_swaps(&self, index: usize) -> Vec<SwapData> {
        if let Some(outer) = self.outer_instructions().get(index) {
            if self.is_event_instruction(outer, &BOOPFUN_PROGRAM_ID, &BUY_TOKEN_DISCRIMINATOR) {
                if let Some(mut event) = decode_buy_token_instruction(outer) {
                    self.enrich_boopfun_from_transfers(&mut event, index);
                    return vec![SwapData::new(SwapType::BoopFun, SwapPayload::BoopFun(event))];
                }
            }
        }

        self.inner_transfer_swaps(index, SwapType::BoopFun)
    }

    /// The realised token output is the last non-SOL checked transfer under
    /// the same outer index; earlier non-SOL transfers are fee legs.
    fn enrich_boopfun_from_transfers(&self, event: &mut BoopFunEvent, index: usize) {
        for transfer in self.inner_checked_transfers(index) {
            let Some(mint) = transfer.mint else {
                continue;
            };
            if mint == NATIVE_SOL_MINT {
                continue;
            }
            event.token_mint = mint;
            event.token_decimals = transfer.decimals;
            event.token_out = transfer.amount;
        }
    }
}

fn decode_buy_token_instruction(
    instruction: &crate::types::CompiledInstruction,
) -> Option<BoopFunEvent> {
    let data = instruction_data(instruction)?;
    let mut reader = BinaryReader::new(&data[8..]);
    let buy_amount = reader.read_u64().ok()?;
    let amount_out_min = reader.read_u64().ok()?;
    Some(BoopFunEvent {
        buy_amount,
        amount_out_min,
        is_buy: true,
        ..BoopFunEvent::default()
    })
}
