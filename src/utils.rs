//! Utilities for the deploy scripts.

use std::{fs, io::Read, path::PathBuf, str::FromStr, sync::Arc};

use ethers::{
    abi::Address,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
};
use json::JsonValue;
use tracing::log::warn;

use crate::{constants::DEPLOYMENTS_KEY, errors::ScriptError, network::Network};

/// Sets up the client with which to deploy the contracts, from the
/// deployer's private key and the RPC url of the target node.
pub async fn setup_client(
    priv_key: &str,
    rpc_url: &str,
) -> Result<Arc<impl Middleware>, ScriptError> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let wallet = LocalWallet::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let chain_id = provider
        .get_chainid()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
        .as_u64();
    let client = Arc::new(SignerMiddleware::new(
        provider,
        wallet.clone().with_chain_id(chain_id),
    ));

    Ok(client)
}

/// Warns when the chain reported by the RPC endpoint does not match the
/// network whose constants were selected on the command line.
///
/// The deployment still proceeds: the constant tables are keyed by the
/// `--network` flag alone, never derived from the connected chain.
pub async fn check_deploy_chain(
    client: &Arc<impl Middleware>,
    network: Network,
) -> Result<(), ScriptError> {
    let chain_id = client
        .get_chainid()
        .await
        .map_err(|e| ScriptError::ChainIdFetching(e.to_string()))?
        .as_u64();

    if chain_id != network.chain_id() {
        warn!(
            "Connected to chain {} but deploying with `{}` constants (chain {}) - CHECK THE NETWORK FLAG",
            chain_id,
            network,
            network.chain_id()
        );
    }

    Ok(())
}

/// Parses a hex string into an address.
///
/// No validation beyond hex parsing is performed; in particular, the
/// zero address passes through unchanged.
pub fn parse_address(address: &str) -> Result<Address, ScriptError> {
    Address::from_str(address).map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
}

/// Parses the given file's contents as JSON
pub fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let mut file_contents = String::new();
    fs::File::open(file_path)
        .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?
        .read_to_string(&mut file_contents)
        .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Parses the address deployed for the given contract from the
/// deployments file
pub fn parse_addr_from_deployments_file(
    file_path: &str,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    let parsed_json = get_json_from_file(file_path)?;

    Address::from_str(
        parsed_json[DEPLOYMENTS_KEY][contract_key]
            .as_str()
            .ok_or_else(|| {
                ScriptError::ReadDeployments(
                    "Could not parse contract address from deployments file".to_string(),
                )
            })?,
    )
    .map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Writes the deployed address for the given contract to the deployments
/// file, overwriting any previously recorded address
pub fn write_deployed_address(
    file_path: &str,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !PathBuf::from(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    }
    let mut parsed_json = get_json_from_file(file_path)?;

    parsed_json[DEPLOYMENTS_KEY][contract_key] = JsonValue::String(format!("{address:#x}"));

    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use ethers::abi::Address;

    use super::{parse_addr_from_deployments_file, parse_address, write_deployed_address};
    use crate::{constants::POOL_MANAGER_CONTRACT_KEY, errors::ScriptError, network::Network};

    /// The zero address, used as a placeholder entry in some deployments
    const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

    #[test]
    fn test_parse_address() {
        let address = parse_address(Network::Avalanche.wavax().address).unwrap();
        assert_eq!(
            format!("{:#x}", address),
            "0xb31f66aa3c1e785363f0875a1b74e27b85fd66c7"
        );
    }

    #[test]
    fn test_parse_zero_address() {
        // Resolution does not validate address non-zeroness, the zero
        // address must pass through unchanged
        let address = parse_address(ZERO_ADDRESS).unwrap();
        assert_eq!(address, Address::zero());
        assert_eq!(format!("{:#x}", address), ZERO_ADDRESS);
    }

    #[test]
    fn test_parse_invalid_address() {
        let res = parse_address("not an address");
        assert!(matches!(res, Err(ScriptError::CalldataConstruction(_))));
    }

    #[test]
    fn test_deployments_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("deployments.json");
        let file_path = file_path.to_str().unwrap();

        let address = parse_address(ZERO_ADDRESS).unwrap();
        write_deployed_address(file_path, POOL_MANAGER_CONTRACT_KEY, address).unwrap();

        let parsed = parse_addr_from_deployments_file(file_path, POOL_MANAGER_CONTRACT_KEY).unwrap();
        assert_eq!(parsed, address);
    }

    #[test]
    fn test_deployments_file_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("deployments.json");
        let file_path = file_path.to_str().unwrap();

        // Each run records whatever address the latest deployment
        // produced, there is no short-circuit on an existing entry
        let first = parse_address(Network::Fuji.wavax().address).unwrap();
        let second = parse_address(Network::Fuji.radi().address).unwrap();

        write_deployed_address(file_path, POOL_MANAGER_CONTRACT_KEY, first).unwrap();
        write_deployed_address(file_path, POOL_MANAGER_CONTRACT_KEY, second).unwrap();

        let parsed = parse_addr_from_deployments_file(file_path, POOL_MANAGER_CONTRACT_KEY).unwrap();
        assert_eq!(parsed, second);
    }

    #[test]
    fn test_missing_deployments_file() {
        let res = parse_addr_from_deployments_file(
            "nonexistent-deployments.json",
            POOL_MANAGER_CONTRACT_KEY,
        );
        assert!(matches!(res, Err(ScriptError::ReadDeployments(_))));
    }
}
