use crate::core::parser::Parser;
use crate::types::{SwapData, SwapType};

impl Parser {
    /// Moonshot trades have no summariser specialisation; their inner
    /// transfers feed the generic reduction.
    pub(crate) fn process_moonshot_swaps(&self, index: usize) -> Vec<SwapData> {
        self.inner_transfer_swaps(index, SwapType::Moonshot)
    }
}
