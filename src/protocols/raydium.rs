use crate::core::parser::Parser;
use crate::types::{SwapData, SwapType};

impl Parser {
    /// Raydium V4 / CPMM / routing / CLMM swaps share no usable instruction
    /// encoding across versions; all of them are reconstructed from the inner
    /// transfer trace.
    pub(crate) fn process_raydium_swaps(&self, index: usize) -> Vec<SwapData> {
        self.inner_transfer_swaps(index, SwapType::Raydium)
    }
}
