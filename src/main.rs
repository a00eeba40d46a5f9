use std::{net::SocketAddr, sync::Arc};

use github_slack_relay::{server, setup::setup};

#[tokio::main]
async fn main() {
	match run().await {
		Err(error) => panic!("{}", error),
		_ => (),
	}
}

async fn run() -> anyhow::Result<()> {
	let state = setup(None, true)?;
	let addr = SocketAddr::from(([0, 0, 0, 0], state.config.webhook_port));

	server::init_server(addr, Arc::new(state)).await
}
