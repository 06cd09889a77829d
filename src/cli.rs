//! Definitions of CLI arguments and commands for deploy scripts

use std::sync::Arc;

use clap::{Parser, Subcommand};
use ethers::providers::Middleware;

use crate::{
    commands::{deploy_pool_manager, deploy_treasury_vester},
    errors::ScriptError,
    network::Network,
};

/// Deploy the Rytell contracts
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    // TODO: Better key management
    #[arg(short, long)]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: String,

    /// The network whose token & treasury constants are used as
    /// constructor arguments
    #[arg(short, long)]
    pub network: Network,

    /// Optional path to a JSON file in which deployed contract
    /// addresses are recorded
    #[arg(short, long)]
    pub deployments_path: Option<String>,

    /// The deploy script to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy scripts that can be run
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the `LiquidityPoolManager` contract.
    ///
    /// Its constructor takes the addresses of the wrapped native token,
    /// the RADI reward token, the stable token, and the treasury vester
    /// contract, all resolved from the selected network's constants.
    DeployPoolManager,
    /// Deploy the `TreasuryVester` contract.
    ///
    /// Its constructor takes the address of the RADI reward token,
    /// resolved from the selected network's constants.
    DeployTreasuryVester,
}

impl Command {
    /// Run the selected deploy script
    pub async fn run(
        self,
        client: Arc<impl Middleware>,
        network: Network,
        deployments_path: Option<&str>,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployPoolManager => {
                deploy_pool_manager(network, client, deployments_path).await
            }
            Command::DeployTreasuryVester => {
                deploy_treasury_vester(network, client, deployments_path).await
            }
        }
    }
}
