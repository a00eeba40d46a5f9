use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{http, Result};

lazy_static! {
	static ref TASK_URL: Regex =
		Regex::new(r"https://app\.asana\.com/0/[0-9]+/(?P<task_id>[0-9]+)")
			.expect("task url regex");
}

#[derive(Serialize)]
struct StoryRequest<'a> {
	data: StoryText<'a>,
}

#[derive(Serialize)]
struct StoryText<'a> {
	text: &'a str,
}

#[derive(Deserialize, Debug)]
struct StoryResponse {
	data: Option<Story>,
}

#[derive(Deserialize, Debug)]
struct Story {
	gid: Option<String>,
}

/// The task id of the first Asana task link in `body`.
pub fn find_task_id(body: &str) -> Option<&str> {
	TASK_URL
		.captures(body)
		.and_then(|captures| captures.name("task_id"))
		.map(|task_id| task_id.as_str())
}

pub struct AsanaBot {
	client: http::Client,
	api_url: String,
}

impl AsanaBot {
	pub fn new(api_url: &str, access_token: Option<String>) -> Self {
		Self {
			client: http::Client::new(access_token),
			api_url: api_url.to_owned(),
		}
	}

	/// Comment `item_url` on the task linked from `body`, if any. Returns the
	/// id of the task commented on.
	pub async fn maybe_comment(
		&self,
		body: &str,
		item_url: &str,
	) -> Result<Option<String>> {
		let task_id = match find_task_id(body) {
			Some(task_id) => task_id,
			None => return Ok(None),
		};
		if !self.client.has_auth_key() {
			log::warn!(
				"Not commenting on Asana task {}; ASANAKEY is not set",
				task_id
			);
			return Ok(None);
		}

		let url = format!("{}/tasks/{}/stories", self.api_url, task_id);
		let response: StoryResponse = self
			.client
			.post(
				url,
				&StoryRequest {
					data: StoryText { text: item_url },
				},
			)
			.await?;
		log::info!(
			"Commented {} on Asana task {} (story {})",
			item_url,
			task_id,
			response
				.data
				.and_then(|story| story.gid)
				.unwrap_or_else(|| "unknown".to_string())
		);

		Ok(Some(task_id.to_string()))
	}
}
