use std::collections::HashSet;

use chrono::{DateTime, TimeZone, Utc};
use solana_sdk::pubkey::Pubkey;

use crate::core::constants::{NATIVE_SOL_DECIMALS, NATIVE_SOL_MINT};
use crate::core::error::ParserError;
use crate::core::parser::Parser;
use crate::types::{SwapData, SwapPayload, SwapSummary, SwapType};

/// One side of a swap as seen by the generic reduction.
#[derive(Clone, Copy, Debug)]
struct TokenLeg {
    mint: Pubkey,
    amount: u64,
    decimals: u8,
}

impl Parser {
    /// Fold a heterogeneous swap-data list into one canonical summary.
    /// Protocol specialisations apply in a fixed precedence; anything left
    /// over goes through the generic transfer-graph reduction. Pure over its
    /// input: summarising the same list twice yields identical values.
    pub fn summarize(&self, swaps: &[SwapData]) -> Result<SwapSummary, ParserError> {
        if swaps.is_empty() {
            return Err(ParserError::NoSwaps);
        }

        let mut jupiter = Vec::new();
        let mut pumpfun = Vec::new();
        let mut launchlab = Vec::new();
        let mut boopfun = Vec::new();
        let mut meteora_events = Vec::new();
        let mut other: Vec<&SwapData> = Vec::new();

        for swap in swaps {
            match swap.swap_type {
                SwapType::Jupiter => jupiter.push(swap),
                SwapType::PumpFun => pumpfun.push(swap),
                SwapType::RaydiumLaunchLab => launchlab.push(swap),
                SwapType::BoopFun => boopfun.push(swap),
                SwapType::Meteora => match swap.payload {
                    SwapPayload::MeteoraDammV2(_) | SwapPayload::MeteoraDbc(_) => {
                        meteora_events.push(swap)
                    }
                    _ => other.push(swap),
                },
                _ => other.push(swap),
            }
        }

        if !jupiter.is_empty() {
            match &jupiter[0].payload {
                SwapPayload::JupiterRoute(event) => {
                    let amms = dedup_first_seen(jupiter.iter().filter_map(|swap| {
                        match &swap.payload {
                            SwapPayload::JupiterRoute(event) => {
                                Some(crate::core::constants::amm_names::label(&event.amm))
                            }
                            _ => None,
                        }
                    }));
                    return Ok(self.build_summary(
                        amms,
                        self.summary_timestamp(),
                        TokenLeg {
                            mint: event.input_mint,
                            amount: event.input_amount,
                            decimals: self.mint_decimals_or_zero(&event.input_mint),
                        },
                        TokenLeg {
                            mint: event.output_mint,
                            amount: event.output_amount,
                            decimals: self.mint_decimals_or_zero(&event.output_mint),
                        },
                    ));
                }
                _ => other.extend(jupiter),
            }
        }

        if !pumpfun.is_empty() {
            match &pumpfun[0].payload {
                SwapPayload::PumpfunTrade(event) => {
                    let sol = TokenLeg {
                        mint: NATIVE_SOL_MINT,
                        amount: event.sol_amount,
                        decimals: NATIVE_SOL_DECIMALS,
                    };
                    let token = TokenLeg {
                        mint: event.mint,
                        amount: event.token_amount,
                        decimals: self.mint_decimals_or_zero(&event.mint),
                    };
                    let (input, output) = if event.is_buy { (sol, token) } else { (token, sol) };
                    let timestamp = Utc
                        .timestamp_opt(event.timestamp, 0)
                        .single()
                        .unwrap_or_else(|| self.summary_timestamp());
                    return Ok(self.build_summary(
                        vec![pumpfun[0].swap_type.as_str().to_string()],
                        timestamp,
                        input,
                        output,
                    ));
                }
                _ => other.extend(pumpfun),
            }
        }

        if !launchlab.is_empty() {
            match &launchlab[0].payload {
                SwapPayload::RaydiumLaunchLab(event) => {
                    let sol_leg = |amount| TokenLeg {
                        mint: NATIVE_SOL_MINT,
                        amount,
                        decimals: NATIVE_SOL_DECIMALS,
                    };
                    let token_leg = |amount| TokenLeg {
                        mint: event.token_mint,
                        amount,
                        decimals: event.token_decimals,
                    };
                    let (input, output) = if event.is_buy {
                        (sol_leg(event.amount_in), token_leg(event.amount_out))
                    } else {
                        (token_leg(event.amount_in), sol_leg(event.amount_out))
                    };
                    return Ok(self.build_summary(
                        vec![launchlab[0].swap_type.as_str().to_string()],
                        self.summary_timestamp(),
                        input,
                        output,
                    ));
                }
                _ => other.extend(launchlab),
            }
        }

        if !boopfun.is_empty() {
            match &boopfun[0].payload {
                SwapPayload::BoopFun(event) => {
                    // The wrapped instruction is buy_token: always SOL in.
                    return Ok(self.build_summary(
                        vec![boopfun[0].swap_type.as_str().to_string()],
                        self.summary_timestamp(),
                        TokenLeg {
                            mint: NATIVE_SOL_MINT,
                            amount: event.buy_amount,
                            decimals: NATIVE_SOL_DECIMALS,
                        },
                        TokenLeg {
                            mint: event.token_mint,
                            amount: event.token_out,
                            decimals: event.token_decimals,
                        },
                    ));
                }
                _ => other.extend(boopfun),
            }
        }

        if !meteora_events.is_empty() {
            match &meteora_events[0].payload {
                SwapPayload::MeteoraDammV2(event) => {
                    return Ok(self.build_summary(
                        vec![meteora_events[0].swap_type.as_str().to_string()],
                        self.summary_timestamp(),
                        TokenLeg {
                            mint: event.token_in_mint,
                            amount: event.amount_in,
                            decimals: event.token_in_decimals,
                        },
                        TokenLeg {
                            mint: event.token_out_mint,
                            amount: event.actual_amount_out,
                            decimals: event.token_out_decimals,
                        },
                    ));
                }
                SwapPayload::MeteoraDbc(event) => {
                    return Ok(self.build_summary(
                        vec![meteora_events[0].swap_type.as_str().to_string()],
                        self.summary_timestamp(),
                        TokenLeg {
                            mint: event.token_in_mint,
                            amount: event.amount_in,
                            decimals: event.token_in_decimals,
                        },
                        TokenLeg {
                            mint: event.token_out_mint,
                            amount: event.output_amount,
                            decimals: event.token_out_decimals,
                        },
                    ));
                }
                _ => other.extend(meteora_events),
            }
        }

        self.reduce_transfers(&other)
    }

    /// Generic reduction: first unique mint is the input, last is the output.
    /// Exact `{amount, mint}` duplicates are counted once per side, a guard
    /// against the same transfer being observed via both outer and inner
    /// tracing. Multi-hop routes inside a single non-aggregator instruction
    /// are not supported yet.
    fn reduce_transfers(&self, swaps: &[&SwapData]) -> Result<SwapSummary, ParserError> {
        let mut unique: Vec<TokenLeg> = Vec::new();
        let mut seen_mints: HashSet<Pubkey> = HashSet::new();
        for &swap in swaps {
            if let Some(leg) = transfer_view(swap) {
                if seen_mints.insert(leg.mint) {
                    unique.push(leg);
                }
            }
        }
        if unique.len() < 2 {
            return Err(ParserError::NoSwaps);
        }

        let input = unique[0];
        let output = unique[unique.len() - 1];

        let mut seen_inputs: HashSet<(u64, Pubkey)> = HashSet::new();
        let mut seen_outputs: HashSet<(u64, Pubkey)> = HashSet::new();
        let mut total_in: u64 = 0;
        let mut total_out: u64 = 0;
        for &swap in swaps {
            let Some(leg) = transfer_view(swap) else {
                continue;
            };
            if leg.mint == input.mint && seen_inputs.insert((leg.amount, leg.mint)) {
                total_in += leg.amount;
            }
            if leg.mint == output.mint && seen_outputs.insert((leg.amount, leg.mint)) {
                total_out += leg.amount;
            }
        }

        let amms = dedup_first_seen(
            swaps
                .iter()
                .map(|swap| swap.swap_type.as_str().to_string()),
        );

        Ok(self.build_summary(
            amms,
            self.summary_timestamp(),
            TokenLeg {
                amount: total_in,
                ..input
            },
            TokenLeg {
                amount: total_out,
                ..output
            },
        ))
    }

    fn build_summary(
        &self,
        amms: Vec<String>,
        timestamp: DateTime<Utc>,
        input: TokenLeg,
        output: TokenLeg,
    ) -> SwapSummary {
        SwapSummary {
            signers: self.summary_signers(),
            signatures: self.signatures().to_vec(),
            amms,
            timestamp,
            token_in_mint: input.mint,
            token_in_amount: input.amount,
            token_in_decimals: input.decimals,
            token_out_mint: output.mint,
            token_out_amount: output.amount,
            token_out_decimals: output.decimals,
        }
    }

    fn summary_signers(&self) -> Vec<Pubkey> {
        let index = if self.contains_dca_program() { 2 } else { 0 };
        match self.account_key(index) {
            Some(key) => vec![*key],
            None => Vec::new(),
        }
    }

    fn summary_timestamp(&self) -> DateTime<Utc> {
        self.block_time().unwrap_or_else(Utc::now)
    }

    fn mint_decimals_or_zero(&self, mint: &Pubkey) -> u8 {
        self.mint_decimals.get(mint).copied().unwrap_or(0)
    }
}

/// Project a swap-data entry onto the token leg the generic reduction cares
/// about. Events that describe their own input leg contribute it; route and
/// trade events without a transfer shape contribute nothing.
fn transfer_view(swap: &SwapData) -> Option<TokenLeg> {
    match &swap.payload {
        SwapPayload::Transfer(record) => record.mint.map(|mint| TokenLeg {
            mint,
            amount: record.amount,
            decimals: record.decimals,
        }),
        SwapPayload::MeteoraDammV2(event) if event.token_in_mint != Pubkey::default() => {
            Some(TokenLeg {
                mint: event.token_in_mint,
                amount: event.amount_in,
                decimals: event.token_in_decimals,
            })
        }
        SwapPayload::MeteoraDbc(event) if event.token_in_mint != Pubkey::default() => {
            Some(TokenLeg {
                mint: event.token_in_mint,
                amount: event.amount_in,
                decimals: event.token_in_decimals,
            })
        }
        SwapPayload::BoopFun(event) => Some(TokenLeg {
            mint: NATIVE_SOL_MINT,
            amount: event.buy_amount,
            decimals: NATIVE_SOL_DECIMALS,
        }),
        _ => None,
    }
}

fn dedup_first_seen<I: IntoIterator<Item = String>>(items: I) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    out
}
