use crate::core::parser::Parser;
use crate::types::{SwapData, SwapType};

impl Parser {
    /// Meteora Pools / DLMM / legacy swaps, reconstructed from the inner
    /// transfer trace. DAMM v2 and DBC have their own decoders but reuse this
    /// one when reached through a router wrapper.
    pub(crate) fn process_meteora_swaps(&self, index: usize) -> Vec<SwapData> {
        self.inner_transfer_swaps(index, SwapType::Meteora)
    }
}
