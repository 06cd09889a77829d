//! Implementations of the various deploy scripts

use std::sync::Arc;

use ethers::{
    abi::Contract, contract::ContractFactory, providers::Middleware, types::Bytes,
    utils::hex::FromHex,
};

use crate::{
    constants::{
        NUM_DEPLOY_CONFIRMATIONS, POOL_MANAGER_ABI, POOL_MANAGER_BYTECODE,
        POOL_MANAGER_CONTRACT_KEY, TREASURY_VESTER_ABI, TREASURY_VESTER_BYTECODE,
        TREASURY_VESTER_CONTRACT_KEY,
    },
    errors::ScriptError,
    network::Network,
    utils::{parse_address, write_deployed_address},
};

/// Deploy the `LiquidityPoolManager` contract, passing the selected
/// network's wrapped native token, reward token, stable token, and
/// treasury vester addresses to its constructor
pub async fn deploy_pool_manager(
    network: Network,
    client: Arc<impl Middleware>,
    deployments_path: Option<&str>,
) -> Result<(), ScriptError> {
    // Get pool manager contract ABI and bytecode
    let abi: Contract = serde_json::from_str(POOL_MANAGER_ABI)
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let bytecode = Bytes::from_hex(POOL_MANAGER_BYTECODE)
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let pool_manager_factory = ContractFactory::new(abi, bytecode, client.clone());

    // Resolve constructor arguments from the selected network's constants
    let (wavax, radi, stable_token, treasury_vester) = network.pool_manager_constructor_args();

    let wavax_address = parse_address(wavax)?;
    let radi_address = parse_address(radi)?;
    let stable_token_address = parse_address(stable_token)?;
    let treasury_vester_address = parse_address(treasury_vester)?;

    // Deploy pool manager contract
    let pool_manager_contract = pool_manager_factory
        .deploy((
            wavax_address,
            radi_address,
            stable_token_address,
            treasury_vester_address,
        ))
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .confirmations(NUM_DEPLOY_CONFIRMATIONS)
        .send()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    let pool_manager_address = pool_manager_contract.address();

    println!("LiquidityPoolManager deployed to: {:#x}", pool_manager_address);

    if let Some(deployments_path) = deployments_path {
        write_deployed_address(
            deployments_path,
            POOL_MANAGER_CONTRACT_KEY,
            pool_manager_address,
        )?;
    }

    Ok(())
}

/// Deploy the `TreasuryVester` contract, passing the selected network's
/// reward token address to its constructor
pub async fn deploy_treasury_vester(
    network: Network,
    client: Arc<impl Middleware>,
    deployments_path: Option<&str>,
) -> Result<(), ScriptError> {
    // Get treasury vester contract ABI and bytecode
    let abi: Contract = serde_json::from_str(TREASURY_VESTER_ABI)
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let bytecode = Bytes::from_hex(TREASURY_VESTER_BYTECODE)
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let treasury_vester_factory = ContractFactory::new(abi, bytecode, client.clone());

    let radi_address = parse_address(network.radi().address)?;

    // Deploy treasury vester contract
    let treasury_vester_contract = treasury_vester_factory
        .deploy(radi_address)
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .confirmations(NUM_DEPLOY_CONFIRMATIONS)
        .send()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    let treasury_vester_address = treasury_vester_contract.address();

    println!("TreasuryVester deployed to: {:#x}", treasury_vester_address);

    if let Some(deployments_path) = deployments_path {
        write_deployed_address(
            deployments_path,
            TREASURY_VESTER_CONTRACT_KEY,
            treasury_vester_address,
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ethers::providers::Provider;

    use super::{deploy_pool_manager, deploy_treasury_vester};
    use crate::{errors::ScriptError, network::Network};

    #[tokio::test]
    async fn test_pool_manager_deploy_failure_propagates() {
        // A mocked provider with no queued responses fails every RPC request
        let (provider, _mock) = Provider::mocked();
        let client = Arc::new(provider);

        let res = deploy_pool_manager(Network::Fuji, client, None).await;
        assert!(matches!(res, Err(ScriptError::ContractDeployment(_))));
    }

    #[tokio::test]
    async fn test_treasury_vester_deploy_failure_propagates() {
        let (provider, _mock) = Provider::mocked();
        let client = Arc::new(provider);

        let res = deploy_treasury_vester(Network::Avalanche, client, None).await;
        assert!(matches!(res, Err(ScriptError::ContractDeployment(_))));
    }
}
