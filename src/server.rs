use crate::{error, webhook::*};
use anyhow::Context;
use hyper::{
	service::{make_service_fn, service_fn},
	Body, Request, Server,
};
use std::net::SocketAddr;
use std::sync::Arc;

/// Starts the HTTP server which receives webhooks on `addr`.
pub async fn init_server(
	addr: SocketAddr,
	state: Arc<AppState>,
) -> anyhow::Result<()> {
	let builder = Server::try_bind(&addr)
		.map_err(|_| error::Error::PortInUse { addr })?;

	log::info!("Listening on {}", addr);

	let service = make_service_fn(move |_| {
		let state = Arc::clone(&state);
		async move {
			Ok::<_, hyper::Error>(service_fn(move |req: Request<Body>| {
				webhook(req, Arc::clone(&state))
			}))
		}
	});

	builder
		.serve(service)
		.await
		.context(format!("Server on {} stopped", addr))
}
