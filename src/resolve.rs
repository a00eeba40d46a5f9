use crate::{
	config::MainConfig,
	github::{Event, Item},
	recipe::{classify, Recipe},
};

/// Who an event is delivered to.
#[derive(Debug, Clone, PartialEq)]
pub enum Audience {
	/// Github logins, in notification order.
	Users(Vec<String>),
	/// A Slack channel name without the leading `#`.
	Channel(String),
}

/// Text which may contain an Asana task link, and the Github page to link
/// back to from that task.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerNote {
	pub body: String,
	pub item_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
	pub recipe: Recipe,
	pub audience: Audience,
	pub number: String,
	pub title: String,
	pub author: String,
	pub review_url: String,
	pub tracker_note: Option<TrackerNote>,
}

/// One Slack message: `@id` for a direct message, `#name` for a channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
	pub recipient: String,
	pub text: String,
}

pub fn review_url(base: &str, repository_full_name: &str, number: &str) -> String {
	format!("{}/{}/{}", base, repository_full_name, number)
}

/// Decide who hears about `event`. `None` means nothing is sent, neither to
/// Slack nor to Asana.
pub fn resolve(event: &Event, config: &MainConfig) -> Option<Resolution> {
	let recipe = classify(event.action());
	if recipe == Recipe::Unhandled {
		return None;
	}

	let sender = event.sender_login();
	if config.bot_login.as_deref() == Some(sender) {
		log::info!("Ignoring {} event sent by {}", event.action(), sender);
		return None;
	}

	let fallback = Item::default();
	let item = event.item().unwrap_or(&fallback);
	let item_note = |body: Option<&str>| {
		body.map(|body| TrackerNote {
			body: body.to_string(),
			item_url: item.html_url().to_string(),
		})
	};

	let (audience, tracker_note) = match recipe {
		Recipe::Assigned => (
			Audience::Users(to_owned(event.assigned_logins())),
			item_note(item.body.as_deref()),
		),
		Recipe::CommentOrReview => (
			Audience::Users(comment_recipients(item, sender)),
			item_note(event.comment_body()),
		),
		Recipe::Opened => match config.announce_channel {
			Some(ref channel) => (
				Audience::Channel(channel.clone()),
				item_note(item.body.as_deref()),
			),
			None => {
				log::debug!("No announcement channel; ignoring opened event");
				return None;
			}
		},
		Recipe::Unhandled => return None,
	};

	let number = item.number().to_string();
	Some(Resolution {
		recipe,
		audience,
		review_url: review_url(
			&config.reviewable_url,
			event.repository_full_name(),
			&number,
		),
		number,
		title: item.title().to_string(),
		author: item.author_login().to_string(),
		tracker_note,
	})
}

/// Assignees other than the sender in payload order, then the author unless
/// they sent the event or are already among the assignees.
fn comment_recipients(item: &Item, sender: &str) -> Vec<String> {
	let author = item.author_login();
	let mut recipients = to_owned(
		item.assignee_logins()
			.into_iter()
			.filter(|assignee| *assignee != sender)
			.collect(),
	);
	if author != sender && !recipients.iter().any(|r| r == author) {
		recipients.push(author.to_string());
	}
	recipients
}

fn to_owned(logins: Vec<&str>) -> Vec<String> {
	logins.into_iter().map(str::to_string).collect()
}

impl Resolution {
	/// Github logins to message directly; empty for channel announcements.
	pub fn recipients(&self) -> &[String] {
		match self.audience {
			Audience::Users(ref logins) => logins.as_slice(),
			Audience::Channel(_) => &[],
		}
	}

	pub fn direct_message(&self, with_author: bool) -> String {
		let text = format!(
			"{} {} {}",
			self.recipe.verb().unwrap_or_default(),
			self.title,
			self.review_url
		);
		if with_author {
			format!("{} by {}", text, self.author)
		} else {
			text
		}
	}

	pub fn announcement(&self) -> String {
		format!("{} {} by {}", self.title, self.review_url, self.author)
	}

	/// Messages to send, in order. Unmapped logins still produce a message,
	/// addressed to a bare `@`.
	pub fn notifications(&self, config: &MainConfig) -> Vec<Notification> {
		match self.audience {
			Audience::Users(ref logins) => {
				let text = self.direct_message(config.author_suffix);
				logins
					.iter()
					.map(|login| {
						let slack_id = config.user_map.resolve(login);
						if slack_id.is_empty() {
							log::warn!(
								"No Slack id mapped for Github user {:?}",
								login
							);
						}
						Notification {
							recipient: format!("@{}", slack_id),
							text: text.clone(),
						}
					})
					.collect()
			}
			Audience::Channel(ref channel) => vec![Notification {
				recipient: format!("#{}", channel),
				text: self.announcement(),
			}],
		}
	}
}
