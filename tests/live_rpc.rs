//! Mainnet round-trips. These hit a real RPC endpoint and are ignored by
//! default; run them with `SOLANA_RPC_URL` set and `cargo test -- --ignored`.

use anyhow::Result;
use serde_json::to_string_pretty;

use solana_swap_parser::{rpc, Parser};

const ORCA_SIGNATURE: &str =
    "2kAW5GAhPZjM3NoSrhJVHdEpwjmq9neWtckWnjopCfsmCGB27e3v2ZyMM79FdsL4VWGEtYSFi1sF1Zhs7bqdoaVT";
const PUMPFUN_SIGNATURE: &str =
    "4Cod1cNGv6RboJ7rSB79yeVCR4Lfd25rFgLY3eiPJfTJjTGyYP1r2i1upAYZHQsWDqUbGd1bhTRm1bpSQcpWMnEz";
const JUPITER_SIGNATURE: &str =
    "DBctXdTTtvn7Rr4ikeJFCBz4AtHmJRyjHGQFpE59LuY3Shb7UcRJThAXC7TGRXXskXuu9LEm9RqtU6mWxe5cjPF";
const LAUNCHLAB_SIGNATURE: &str =
    "4S9AT3Qc5auU62fYPDdUWCtNb6EDiGXEBAhMjWCRs4ESfqHuYuFyJNXiodTBEjyvPM68prij3a7YKgd1YuL26DPV";
const METEORA_DAMM_V2_SIGNATURE: &str =
    "3DBswgW6BS4iBsjA3QRJgXwUCPuv68n4HVYvh7cG5T6XA5wz71xtwo7P2XHdfyT4LPmhvWpzhzaRroWoEN81czLV";
const BOOPFUN_SIGNATURE: &str =
    "3vqyV9oQxsnojjnD2DHHsV4d3BfV2i7RvvbTostEV7Du3u4HoSXbonBZFJ2qgxGEijETsGe7x3SvEdtLWjLdBya2";
const BANANA_GUN_SIGNATURE: &str =
    "oXUd22GQ1d45a6XNzfdpHAX6NfFEfFa9o2Awn2oimY89Rms3PmXL1uBJx3CnTYjULJw6uim174b3PLBFkaAxKzK";
const OKX_SIGNATURE: &str =
    "5xaT2SXQUyvyLGsnyyoKMwsDoHrx1enCKofkdRMdNaL5MW26gjQBM3AWebwjTJ49uqEqnFu5d9nXJek6gUSGCqbL";

fn rpc_url() -> String {
    std::env::var("SOLANA_RPC_URL")
        .unwrap_or_else(|_| "https://api.mainnet-beta.solana.com".to_string())
}

fn summarise(signature: &str) -> Result<solana_swap_parser::SwapSummary> {
    let tx = rpc::fetch_transaction(&rpc_url(), signature)?;
    let parser = Parser::new(tx)?;
    let summary = parser.parse()?;
    println!("{}", to_string_pretty(&summary)?);
    Ok(summary)
}

#[test]
#[ignore]
fn orca_swap_round_trips() -> Result<()> {
    let summary = summarise(ORCA_SIGNATURE)?;
    assert_eq!(summary.amms, vec!["orca"]);
    assert_ne!(summary.token_in_mint, summary.token_out_mint);
    Ok(())
}

#[test]
#[ignore]
fn pumpfun_trade_round_trips() -> Result<()> {
    let summary = summarise(PUMPFUN_SIGNATURE)?;
    assert_eq!(summary.amms, vec!["pumpfun"]);
    // The trade event supplies its own timestamp, which is historical.
    assert!(summary.timestamp < chrono::Utc::now());
    Ok(())
}

#[test]
#[ignore]
fn jupiter_route_round_trips() -> Result<()> {
    let summary = summarise(JUPITER_SIGNATURE)?;
    assert!(!summary.amms.is_empty());
    assert!(summary.token_in_amount > 0);
    Ok(())
}

#[test]
#[ignore]
fn launchlab_buy_round_trips() -> Result<()> {
    let summary = summarise(LAUNCHLAB_SIGNATURE)?;
    assert_eq!(
        summary.token_in_mint.to_string(),
        "So11111111111111111111111111111111111111112"
    );
    assert_eq!(summary.token_in_decimals, 9);
    assert!(summary.token_out_amount > 0);
    Ok(())
}

#[test]
#[ignore]
fn meteora_damm_v2_round_trips() -> Result<()> {
    let summary = summarise(METEORA_DAMM_V2_SIGNATURE)?;
    assert_eq!(summary.amms, vec!["meteora"]);
    assert!(summary.token_in_amount > 0 && summary.token_out_amount > 0);
    Ok(())
}

#[test]
#[ignore]
fn boopfun_buy_round_trips() -> Result<()> {
    let summary = summarise(BOOPFUN_SIGNATURE)?;
    assert_eq!(
        summary.token_in_mint.to_string(),
        "So11111111111111111111111111111111111111112"
    );
    assert_ne!(summary.token_in_mint, summary.token_out_mint);
    Ok(())
}

#[test]
#[ignore]
fn banana_gun_router_round_trips() -> Result<()> {
    let summary = summarise(BANANA_GUN_SIGNATURE)?;
    assert!(!summary.amms.is_empty());
    Ok(())
}

#[test]
#[ignore]
fn okx_router_round_trips() -> Result<()> {
    let summary = summarise(OKX_SIGNATURE)?;
    assert!(!summary.amms.is_empty());
    assert_ne!(summary.token_in_mint, summary.token_out_mint);
    Ok(())
}
