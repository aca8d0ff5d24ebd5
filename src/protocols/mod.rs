pub mod boopfun;
pub mod jupiter;
pub mod meteora;
pub mod meteora_damm_v2;
pub mod meteora_dbc;
pub mod moonshot;
pub mod okx;
pub mod orca;
pub mod pumpfun;
pub mod raydium;
pub mod raydium_launchlab;
