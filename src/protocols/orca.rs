use crate::core::parser::Parser;
use crate::types::{SwapData, SwapPayload, SwapType};

impl Parser {
    /// Orca Whirlpools swaps move tokens with plain SPL `Transfer`
    /// instructions only; there is no event decoder for this family.
    pub(crate) fn process_orca_swaps(&self, index: usize) -> Vec<SwapData> {
        let mut swaps = Vec::new();
        for instruction in self.inner_instructions(index) {
            if !self.is_transfer(instruction) {
                continue;
            }
            if let Some(transfer) = self.decode_transfer(instruction) {
                swaps.push(SwapData::new(
                    SwapType::Orca,
                    SwapPayload::Transfer(transfer),
                ));
            }
        }
        swaps
    }
}
