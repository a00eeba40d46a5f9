use serde::Serialize;

use crate::{http, Result};

#[derive(Serialize, Debug)]
struct SlackMessage<'a> {
	channel: &'a str,
	text: &'a str,
}

/// Posts messages through a Slack incoming webhook.
pub struct SlackBot {
	client: http::Client,
	webhook_url: String,
}

impl SlackBot {
	pub fn new(webhook_url: &str) -> Self {
		Self {
			client: http::Client::new(None),
			webhook_url: webhook_url.to_owned(),
		}
	}

	/// `recipient` is `@user` for a direct message or `#channel`.
	pub async fn send(&self, recipient: &str, text: &str) -> Result<()> {
		self.client
			.post_response(
				self.webhook_url.as_str(),
				&SlackMessage {
					channel: recipient,
					text,
				},
			)
			.await?;
		log::info!("Sent {:?} to {}", text, recipient);
		Ok(())
	}
}
