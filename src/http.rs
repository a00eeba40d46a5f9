use std::borrow::Cow;

use crate::{constants::USER_AGENT, error, Result};

use serde::Serialize;
use snafu::ResultExt;

pub struct Client {
	client: reqwest::Client,
	auth_key: Option<String>,
}

/// HTTP util methods.
impl Client {
	pub fn new(auth_key: Option<String>) -> Self {
		Self {
			client: reqwest::Client::new(),
			auth_key,
		}
	}

	pub fn has_auth_key(&self) -> bool {
		self.auth_key.is_some()
	}

	/// Sends a `POST` request with a JSON body and decodes the JSON reply.
	pub async fn post<'b, I, B, T>(&self, url: I, body: &B) -> Result<T>
	where
		I: Into<Cow<'b, str>>,
		B: Serialize,
		T: serde::de::DeserializeOwned,
	{
		self.post_response(url, body)
			.await?
			.json::<T>()
			.await
			.context(error::Http)
	}

	pub async fn post_response<'b, I, B>(
		&self,
		url: I,
		body: &B,
	) -> Result<reqwest::Response>
	where
		I: Into<Cow<'b, str>>,
		B: Serialize,
	{
		self.request(self.client.post(&*url.into()).json(body))
			.await
	}

	pub async fn request(
		&self,
		builder: reqwest::RequestBuilder,
	) -> Result<reqwest::Response> {
		let builder = match self.auth_key {
			Some(ref auth_key) => builder.bearer_auth(auth_key),
			None => builder,
		};
		let request = builder
			.header(reqwest::header::USER_AGENT, USER_AGENT)
			.build()
			.context(error::Http)?;

		log::debug!("{} {}", request.method(), request.url());

		let response =
			self.client.execute(request).await.context(error::Http)?;
		let status = response.status();

		if status.is_success() {
			Ok(response)
		} else {
			let text = response.text().await.context(error::Http)?;

			// Try to decode the response error as JSON otherwise store
			// it as plain text in a JSON object.
			let body = if let Ok(value) =
				serde_json::from_str(&text).context(error::Json)
			{
				value
			} else {
				serde_json::json!({ "error_message": text })
			};

			error::Response { status, body }.fail()
		}
	}
}
