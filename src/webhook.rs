use hyper::{Body, Request, Response, StatusCode};
use snafu::OptionExt;
use std::sync::Arc;

use crate::{
	asana::AsanaBot, config::MainConfig, error::*, github::Event,
	resolve::resolve, slack::SlackBot, Result,
};

/// This data gets passed along with each webhook to the webhook handler.
pub struct AppState {
	pub config: MainConfig,
	pub slack_bot: SlackBot,
	pub asana_bot: AsanaBot,
}

/// Receive a webhook. Any method and path is accepted. Responds 500 with the
/// error text when the body is not JSON and 200 otherwise, whatever happens
/// to the notifications.
pub async fn webhook(
	req: Request<Body>,
	state: Arc<AppState>,
) -> Result<Response<Body>> {
	let msg_bytes = match hyper::body::to_bytes(req.into_body()).await {
		Ok(msg_bytes) => msg_bytes,
		Err(e) => {
			log::error!("Error reading request body: {}", e);
			return respond(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
		}
	};

	let value = match serde_json::from_slice::<serde_json::Value>(&msg_bytes)
	{
		Ok(value) => value,
		Err(e) => {
			log::error!("Error parsing payload: {}", e);
			return respond(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
		}
	};

	if !value.is_object() {
		log::info!("Ignoring payload which is not a JSON object");
		return respond(StatusCode::OK, "");
	}

	match serde_json::from_value::<Event>(value) {
		Ok(event) => handle_payload(&event, &state).await,
		Err(e) => log::error!("Error decoding payload: {}", e),
	}

	respond(StatusCode::OK, "")
}

fn respond<B: Into<Body>>(status: StatusCode, body: B) -> Result<Response<Body>> {
	Response::builder()
		.status(status)
		.body(body.into())
		.ok()
		.context(Message {
			msg: format!("Error building response"),
		})
}

/// Notify everyone `event` concerns. Failed deliveries are logged and
/// skipped.
pub async fn handle_payload(event: &Event, state: &AppState) {
	log::info!("Handling {}", event.action());

	let resolution = match resolve(event, &state.config) {
		Some(resolution) => resolution,
		None => return,
	};

	if let Some(ref note) = resolution.tracker_note {
		let _ = state
			.asana_bot
			.maybe_comment(&note.body, &note.item_url)
			.await
			.map_err(|e| {
				log::error!("Error commenting on Asana task: {}", e);
			});
	}

	for notification in resolution.notifications(&state.config) {
		let _ = state
			.slack_bot
			.send(&notification.recipient, &notification.text)
			.await
			.map_err(|e| {
				log::error!(
					"Error sending Slack message to {}: {}",
					notification.recipient,
					e
				);
			});
	}
}
