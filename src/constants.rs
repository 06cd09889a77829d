//! Constants used in the deploy scripts

/// The ABI of the LiquidityPoolManager contract
///
/// Compiled from the Rytell exchange contracts repository
pub const POOL_MANAGER_ABI: &str = include_str!("../artifacts/LiquidityPoolManager.abi");

/// The bytecode of the LiquidityPoolManager contract
///
/// Compiled from the Rytell exchange contracts repository
pub const POOL_MANAGER_BYTECODE: &str = include_str!("../artifacts/LiquidityPoolManager.bin");

/// The ABI of the TreasuryVester contract
///
/// Compiled from the Rytell exchange contracts repository
pub const TREASURY_VESTER_ABI: &str = include_str!("../artifacts/TreasuryVester.abi");

/// The bytecode of the TreasuryVester contract
///
/// Compiled from the Rytell exchange contracts repository
pub const TREASURY_VESTER_BYTECODE: &str = include_str!("../artifacts/TreasuryVester.bin");

/// The number of confirmations to wait for the contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: usize = 0;

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The liquidity pool manager contract key in the `deployments.json` file
pub const POOL_MANAGER_CONTRACT_KEY: &str = "liquidity_pool_manager_contract";

/// The treasury vester contract key in the `deployments.json` file
pub const TREASURY_VESTER_CONTRACT_KEY: &str = "treasury_vester_contract";
