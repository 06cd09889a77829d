use clap::Parser;
use deploy_scripts::{
    cli::Cli,
    errors::ScriptError,
    utils::{check_deploy_chain, setup_client},
};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        priv_key,
        rpc_url,
        network,
        deployments_path,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let client = setup_client(&priv_key, &rpc_url).await?;
    check_deploy_chain(&client, network).await?;

    command
        .run(client, network, deployments_path.as_deref())
        .await
}
