use snafu::OptionExt;

use crate::{constants::*, error::*, user_map::UserMap, Result};

#[derive(Debug, Clone)]
pub struct MainConfig {
	/// Github login to Slack id pairs
	pub user_map: UserMap,
	/// Slack incoming webhook all messages are posted to
	pub slack_url: String,
	/// Asana personal access token; task comments are skipped without one
	pub asana_key: Option<String>,
	pub asana_api_url: String,
	pub webhook_port: u16,
	/// events sent by this login are ignored
	pub bot_login: Option<String>,
	/// Slack channel (without `#`) that new pull requests are announced in
	pub announce_channel: Option<String>,
	/// append "by {author}" to direct messages
	pub author_suffix: bool,
	pub reviewable_url: String,
}

impl MainConfig {
	pub fn from_env() -> Result<Self> {
		dotenv::dotenv().ok();
		Self::from_vars(|var| dotenv::var(var).ok())
	}

	/// Builds the configuration from `var`, which looks up a variable by
	/// name. Unset and blank variables are treated the same.
	pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
		let optional_var = |name: &str| {
			var(name)
				.map(|value| value.trim().to_string())
				.filter(|value| !value.is_empty())
		};

		let user_map = optional_var("USERMAP")
			.unwrap_or_default()
			.parse::<UserMap>()?;

		let slack_url = optional_var("SLACKURL")
			.context(MissingVar { var: "SLACKURL" })?;
		validate_url("SLACKURL", &slack_url)?;

		let asana_key = optional_var("ASANAKEY");
		let asana_api_url = optional_var("ASANAAPIURL")
			.unwrap_or_else(|| ASANA_API_URL.into())
			.trim_end_matches('/')
			.to_string();
		validate_url("ASANAAPIURL", &asana_api_url)?;

		let webhook_port = match optional_var("PORT") {
			Some(port) => port.parse::<u16>().ok().context(InvalidVar {
				var: "PORT",
				msg: format!("{:?} is not a port number", port),
			})?,
			None => DEFAULT_PORT,
		};

		let bot_login = optional_var("BOTLOGIN");
		let announce_channel = optional_var("ANNOUNCECHANNEL")
			.map(|channel| channel.trim_start_matches('#').to_string())
			.filter(|channel| !channel.is_empty());
		let author_suffix = match optional_var("AUTHORSUFFIX") {
			Some(value) => value.parse::<bool>().ok().context(InvalidVar {
				var: "AUTHORSUFFIX",
				msg: format!("{:?} is not `true` or `false`", value),
			})?,
			None => announce_channel.is_some(),
		};

		let reviewable_url = optional_var("REVIEWABLEURL")
			.unwrap_or_else(|| REVIEWABLE_URL.into())
			.trim_end_matches('/')
			.to_string();
		validate_url("REVIEWABLEURL", &reviewable_url)?;

		Ok(Self {
			user_map,
			slack_url,
			asana_key,
			asana_api_url,
			webhook_port,
			bot_login,
			announce_channel,
			author_suffix,
			reviewable_url,
		})
	}
}

fn validate_url(var: &str, value: &str) -> Result<()> {
	url::Url::parse(value).map(|_| ()).map_err(|e| Error::InvalidVar {
		var: var.to_string(),
		msg: e.to_string(),
	})
}
