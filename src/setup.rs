use crate::{
	asana::AsanaBot, config::MainConfig, logging, slack::SlackBot, webhook::*,
};

pub fn setup(
	conf: Option<MainConfig>,
	should_init_logger: bool,
) -> anyhow::Result<AppState> {
	if should_init_logger {
		env_logger::from_env(
			env_logger::Env::default().default_filter_or("info"),
		)
		.format(logging::gke::format)
		.init();
	}

	let config = match conf {
		Some(config) => config,
		None => MainConfig::from_env()?,
	};

	log::info!(
		"Relaying to Slack for {} mapped Github users",
		config.user_map.len()
	);
	if let Some(ref channel) = config.announce_channel {
		log::info!("Announcing new pull requests in #{}", channel);
	}
	if let Some(ref bot_login) = config.bot_login {
		log::info!("Ignoring events sent by {}", bot_login);
	}

	let slack_bot = SlackBot::new(&config.slack_url);
	let asana_bot =
		AsanaBot::new(&config.asana_api_url, config.asana_key.clone());

	Ok(AppState {
		config,
		slack_bot,
		asana_bot,
	})
}
