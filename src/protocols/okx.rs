use crate::core::parser::Parser;
use crate::types::{SwapData, SwapType};

impl Parser {
    /// OKX DEX router swaps. The router's own instruction data is opaque, so
    /// the inner transfer trace is authoritative for this family.
    pub(crate) fn process_okx_swaps(&self, index: usize) -> Vec<SwapData> {
        self.inner_transfer_swaps(index, SwapType::Okx)
    }
}
