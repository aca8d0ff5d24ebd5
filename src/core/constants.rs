use solana_sdk::pubkey;
use solana_sdk::pubkey::Pubkey;

pub const SPL_TOKEN_PROGRAM_ID: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
pub const SPL_TOKEN_2022_PROGRAM_ID: Pubkey =
    pubkey!("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");

/// Wrapped-SOL mint used to tag the SOL leg of a swap throughout.
pub const NATIVE_SOL_MINT: Pubkey = pubkey!("So11111111111111111111111111111111111111112");
pub const NATIVE_SOL_DECIMALS: u8 = 9;

pub const JUPITER_PROGRAM_ID: Pubkey = pubkey!("JUP6LkbZbjS1jKKwapdHNy74zcZ3tLUZoi5QNyVTaV4");
pub const JUPITER_DCA_PROGRAM_ID: Pubkey = pubkey!("DCA265Vj8a9CEuX1eb1LWRnDT7uK6q1xMipnNyatn23M");
pub const MOONSHOT_PROGRAM_ID: Pubkey = pubkey!("MoonCVVNZFSYkqNXP6bxHLPL6QQJiMagDL3qcqUQTrG");
pub const OKX_DEX_ROUTER_PROGRAM_ID: Pubkey =
    pubkey!("6m2CDdhRgxpH4WjvdzxAYbGxwdGUz5MziiL5jek2kBma");

pub const RAYDIUM_V4_PROGRAM_ID: Pubkey = pubkey!("675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8");
pub const RAYDIUM_CPMM_PROGRAM_ID: Pubkey = pubkey!("CPMMoo8L3F4NbTegBCKVNunggL7H1ZpdTHKxQB5qKP1C");
pub const RAYDIUM_AMM_ROUTING_PROGRAM_ID: Pubkey =
    pubkey!("routeUGWgWzqBWFcrCfv8tritsqukccJPu3q5GPP3xS");
pub const RAYDIUM_CLMM_PROGRAM_ID: Pubkey = pubkey!("CAMMCzo5YL8w4VFF8KVHrK22GGUsp5VTaW7grrKgrWqK");
// Legacy shadow deployment still seen routing V4-style swaps.
pub const RAYDIUM_LEGACY_PROGRAM_ID: Pubkey =
    pubkey!("AP51WLiiqTdbZfgyRMs35PsZpdmLuPDdHYmrB23pEtMU");
pub const RAYDIUM_LAUNCHLAB_PROGRAM_ID: Pubkey =
    pubkey!("LanMV9sAd7wArD4vJFi2qDdfnVhFxYSUg6eADduJ3uj");

pub const ORCA_WHIRLPOOL_PROGRAM_ID: Pubkey =
    pubkey!("whirLbMiicVdio4qvUfM5KAg6Ct8VwpYzGff3uctyCc");

pub const METEORA_PROGRAM_ID: Pubkey = pubkey!("Eo7WjKq67rjJQSZxS6z3YkapzY3eMj6Xy8X5EQVn5UaB");
pub const METEORA_POOLS_PROGRAM_ID: Pubkey =
    pubkey!("24Uqj9JCLxUeoC3hGfh5W3s9FM9uCHDS2SG3LYwBpyTi");
pub const METEORA_DLMM_PROGRAM_ID: Pubkey = pubkey!("LBUZKhRxPF3XUpBCjp4YzTKgLccjZhTSDM9YuVaPwxo");
pub const METEORA_DAMM_V2_PROGRAM_ID: Pubkey =
    pubkey!("cpamdpZCGKUy5JxQXB4dcpGPiikHawvSWAd6mEn1sGG");
pub const METEORA_DBC_PROGRAM_ID: Pubkey = pubkey!("dbcij3LWUppWqq96dh6gJWwBifmcGfLSB5D4DuSMaqN");

pub const PUMP_FUN_PROGRAM_ID: Pubkey = pubkey!("6EF8rrecthR5Dkzon8Nwu78hRvfCKubJ14M5uBEwF6P");
// Shadow deployment of the bonding-curve program.
pub const PUMP_FUN_LEGACY_PROGRAM_ID: Pubkey =
    pubkey!("BSfD6SHZigAfDWSjzD5Q41jw8LmKwtmjskPH9XW1mrRW");
pub const PUMP_FUN_AMM_PROGRAM_ID: Pubkey = pubkey!("pAMMBay6oceH9fJKBRHGP5D4bD4sWpmSwMn52FMfXEA");

pub const BOOPFUN_PROGRAM_ID: Pubkey = pubkey!("boop8hVGQGqehUK2iVEMEnMrL5RbjywRzHKBmBE7ry4");

pub const BANANA_GUN_PROGRAM_ID: Pubkey = pubkey!("BANANAjs7FJiPQqJTGFzkZJndT9o7UmKiYYGaJz6frGu");
pub const MINTECH_PROGRAM_ID: Pubkey = pubkey!("minTcHYRLVPubRK8nt6sqe2ZpWrGDLQoNLipDJCGocY");
pub const BLOOM_PROGRAM_ID: Pubkey = pubkey!("b1oomGGqPKGD6errbyfbVMBuzSC8WtAAYo8MwNafWW1");
pub const NOVA_PROGRAM_ID: Pubkey = pubkey!("NoVA1TmDUqksaj2hB1nayFkPysjJbFiU76dT4qPw2wm");
pub const MAESTRO_PROGRAM_ID: Pubkey = pubkey!("MaestroAAe9ge5HTc64VbBQZ6fP77pwvrhM8i1XWSAx");

pub fn is_raydium_amm_program(program_id: &Pubkey) -> bool {
    *program_id == RAYDIUM_V4_PROGRAM_ID
        || *program_id == RAYDIUM_CPMM_PROGRAM_ID
        || *program_id == RAYDIUM_AMM_ROUTING_PROGRAM_ID
        || *program_id == RAYDIUM_CLMM_PROGRAM_ID
        || *program_id == RAYDIUM_LEGACY_PROGRAM_ID
}

pub fn is_meteora_program(program_id: &Pubkey) -> bool {
    *program_id == METEORA_PROGRAM_ID
        || *program_id == METEORA_POOLS_PROGRAM_ID
        || *program_id == METEORA_DLMM_PROGRAM_ID
}

pub fn is_pump_fun_program(program_id: &Pubkey) -> bool {
    *program_id == PUMP_FUN_PROGRAM_ID || *program_id == PUMP_FUN_LEGACY_PROGRAM_ID
}

pub fn is_router_wrapper_program(program_id: &Pubkey) -> bool {
    *program_id == BANANA_GUN_PROGRAM_ID
        || *program_id == MINTECH_PROGRAM_ID
        || *program_id == BLOOM_PROGRAM_ID
        || *program_id == NOVA_PROGRAM_ID
        || *program_id == MAESTRO_PROGRAM_ID
}

pub mod amm_names {
    use super::*;
    use once_cell::sync::Lazy;
    use std::collections::HashMap;

    static AMM_NAME: Lazy<HashMap<Pubkey, &'static str>> = Lazy::new(|| {
        let mut map = HashMap::new();
        map.insert(RAYDIUM_V4_PROGRAM_ID, "raydium");
        map.insert(RAYDIUM_CPMM_PROGRAM_ID, "raydium");
        map.insert(RAYDIUM_AMM_ROUTING_PROGRAM_ID, "raydium");
        map.insert(RAYDIUM_CLMM_PROGRAM_ID, "raydium");
        map.insert(RAYDIUM_LEGACY_PROGRAM_ID, "raydium");
        map.insert(RAYDIUM_LAUNCHLAB_PROGRAM_ID, "raydium_launchlab");
        map.insert(ORCA_WHIRLPOOL_PROGRAM_ID, "orca");
        map.insert(METEORA_PROGRAM_ID, "meteora");
        map.insert(METEORA_POOLS_PROGRAM_ID, "meteora");
        map.insert(METEORA_DLMM_PROGRAM_ID, "meteora");
        map.insert(METEORA_DAMM_V2_PROGRAM_ID, "meteora");
        map.insert(METEORA_DBC_PROGRAM_ID, "meteora");
        map.insert(PUMP_FUN_PROGRAM_ID, "pumpfun");
        map.insert(PUMP_FUN_LEGACY_PROGRAM_ID, "pumpfun");
        map.insert(PUMP_FUN_AMM_PROGRAM_ID, "pumpfun_amm");
        map.insert(BOOPFUN_PROGRAM_ID, "boopfun");
        map.insert(MOONSHOT_PROGRAM_ID, "moonshot");
        map
    });

    /// Human tag for an AMM program reported inside a Jupiter route event.
    /// Unknown programs fall back to their base58 form.
    pub fn label(program_id: &Pubkey) -> String {
        AMM_NAME
            .get(program_id)
            .map(|name| (*name).to_string())
            .unwrap_or_else(|| program_id.to_string())
    }
}
