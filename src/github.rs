use serde::{de::DeserializeOwned, Deserialize, Deserializer};

/// The fields of a `pull_request`, `pull_request_review` or `issue_comment`
/// webhook payload which the relay reads. Every field is optional: a missing
/// or `null` value, or one of an unexpected type, reads as empty.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct Event {
	#[serde(default, deserialize_with = "lenient")]
	pub action: Option<String>,
	#[serde(default, deserialize_with = "lenient")]
	pub pull_request: Option<Item>,
	#[serde(default, deserialize_with = "lenient")]
	pub issue: Option<Item>,
	#[serde(default, deserialize_with = "lenient")]
	pub assignee: Option<User>,
	#[serde(default, deserialize_with = "lenient_list")]
	pub assignees: Option<Vec<User>>,
	#[serde(default, deserialize_with = "lenient")]
	pub sender: Option<User>,
	#[serde(default, deserialize_with = "lenient")]
	pub review: Option<Review>,
	#[serde(default, deserialize_with = "lenient")]
	pub comment: Option<Comment>,
	#[serde(default, deserialize_with = "lenient")]
	pub repository: Option<Repository>,
}

/// A pull request or an issue; both carry the same fields.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
	#[serde(default, deserialize_with = "lenient")]
	pub number: Option<i64>,
	#[serde(default, deserialize_with = "lenient")]
	pub title: Option<String>,
	#[serde(default, deserialize_with = "lenient")]
	pub body: Option<String>,
	#[serde(default, deserialize_with = "lenient")]
	pub html_url: Option<String>,
	// User might be missing when it has been deleted
	#[serde(default, deserialize_with = "lenient")]
	pub user: Option<User>,
	#[serde(default, deserialize_with = "lenient_list")]
	pub assignees: Option<Vec<User>>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct User {
	#[serde(default, deserialize_with = "lenient")]
	pub login: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
	#[serde(default, deserialize_with = "lenient")]
	pub body: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
	#[serde(default, deserialize_with = "lenient")]
	pub body: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct Repository {
	#[serde(default, deserialize_with = "lenient")]
	pub full_name: Option<String>,
}

/// Decodes an optional field, reading a value of the wrong type as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned,
{
	let value = serde_json::Value::deserialize(deserializer)?;
	Ok(serde_json::from_value(value).ok())
}

/// Like `lenient`, also dropping list entries of the wrong type.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned,
{
	Ok(match serde_json::Value::deserialize(deserializer)? {
		serde_json::Value::Array(entries) => Some(
			entries
				.into_iter()
				.filter_map(|entry| serde_json::from_value(entry).ok())
				.collect(),
		),
		_ => None,
	})
}

impl Event {
	pub fn action(&self) -> &str {
		self.action.as_deref().unwrap_or("")
	}

	/// The pull request if there is one, otherwise the issue.
	pub fn item(&self) -> Option<&Item> {
		self.pull_request.as_ref().or_else(|| self.issue.as_ref())
	}

	pub fn sender_login(&self) -> &str {
		login_of(self.sender.as_ref())
	}

	pub fn repository_full_name(&self) -> &str {
		self.repository
			.as_ref()
			.and_then(|repository| repository.full_name.as_deref())
			.unwrap_or("")
	}

	/// Logins of the assignees, the singular `assignee` taking precedence
	/// over the item's list, which in turn takes precedence over a
	/// top-level list.
	pub fn assigned_logins(&self) -> Vec<&str> {
		if let Some(assignee) = self.assignee.as_ref() {
			return vec![login_of(Some(assignee))];
		}
		match self.item().and_then(|item| item.assignees.as_ref()) {
			Some(assignees) => logins(assignees),
			None => self.assignees.as_deref().map(logins).unwrap_or_default(),
		}
	}

	/// Body of the review, or of the comment for issue comment events.
	pub fn comment_body(&self) -> Option<&str> {
		self.review
			.as_ref()
			.and_then(|review| review.body.as_deref())
			.or_else(|| {
				self.comment
					.as_ref()
					.and_then(|comment| comment.body.as_deref())
			})
	}
}

impl Item {
	/// Zero when the payload has no number, like GitHub's own zero value.
	pub fn number(&self) -> i64 {
		self.number.unwrap_or(0)
	}

	pub fn title(&self) -> &str {
		self.title.as_deref().unwrap_or("")
	}

	pub fn html_url(&self) -> &str {
		self.html_url.as_deref().unwrap_or("")
	}

	pub fn author_login(&self) -> &str {
		login_of(self.user.as_ref())
	}

	pub fn assignee_logins(&self) -> Vec<&str> {
		self.assignees.as_deref().map(logins).unwrap_or_default()
	}
}

fn login_of(user: Option<&User>) -> &str {
	user.and_then(|user| user.login.as_deref()).unwrap_or("")
}

fn logins(users: &[User]) -> Vec<&str> {
	users.iter().map(|user| login_of(Some(user))).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_missing_and_null_fields_read_as_empty() {
		let event: Event = serde_json::from_value(json!({
			"action": "submitted",
			"pull_request": { "title": null, "user": null },
			"sender": {},
		}))
		.unwrap();
		let item = event.item().unwrap();
		assert_eq!(item.number(), 0);
		assert_eq!(item.title(), "");
		assert_eq!(item.author_login(), "");
		assert_eq!(event.sender_login(), "");
		assert_eq!(event.repository_full_name(), "");
		assert_eq!(event.comment_body(), None);
	}

	#[test]
	fn test_item_prefers_pull_request_over_issue() {
		let event: Event = serde_json::from_value(json!({
			"pull_request": { "number": 1 },
			"issue": { "number": 2 },
		}))
		.unwrap();
		assert_eq!(event.item().map(Item::number), Some(1));

		let event: Event =
			serde_json::from_value(json!({ "issue": { "number": 2 } }))
				.unwrap();
		assert_eq!(event.item().map(Item::number), Some(2));
	}

	#[test]
	fn test_assigned_logins_payload_shapes() {
		let singular: Event = serde_json::from_value(json!({
			"assignee": { "login": "dave" },
			"pull_request": { "assignees": [{ "login": "erin" }] },
		}))
		.unwrap();
		assert_eq!(singular.assigned_logins(), vec!["dave"]);

		let nested: Event = serde_json::from_value(json!({
			"assignee": null,
			"pull_request": {
				"assignees": [{ "login": "erin" }, { "login": "frank" }]
			},
		}))
		.unwrap();
		assert_eq!(nested.assigned_logins(), vec!["erin", "frank"]);

		let top_level: Event = serde_json::from_value(json!({
			"assignees": [{ "login": "gina" }],
		}))
		.unwrap();
		assert_eq!(top_level.assigned_logins(), vec!["gina"]);
	}

	#[test]
	fn test_comment_body_prefers_review() {
		let event: Event = serde_json::from_value(json!({
			"review": { "body": "review" },
			"comment": { "body": "comment" },
		}))
		.unwrap();
		assert_eq!(event.comment_body(), Some("review"));

		let event: Event = serde_json::from_value(json!({
			"review": { "body": null },
			"comment": { "body": "comment" },
		}))
		.unwrap();
		assert_eq!(event.comment_body(), Some("comment"));
	}

	#[test]
	fn test_fields_of_the_wrong_type_read_as_empty() {
		let event: Event = serde_json::from_value(json!({
			"action": "assigned",
			"assignee": { "login": "dave" },
			"pull_request": {
				"number": "7",
				"title": 12,
				"body": ["not", "text"],
				"user": "alice",
				"assignees": [{ "login": "erin" }, "frank", { "login": 3 }],
			},
			"sender": 5,
			"review": "approved",
			"repository": { "full_name": false },
		}))
		.unwrap();
		let item = event.item().unwrap();
		assert_eq!(item.number(), 0);
		assert_eq!(item.title(), "");
		assert_eq!(item.body, None);
		assert_eq!(item.author_login(), "");
		assert_eq!(item.assignee_logins(), vec!["erin", ""]);
		assert_eq!(event.assigned_logins(), vec!["dave"]);
		assert_eq!(event.sender_login(), "");
		assert_eq!(event.comment_body(), None);
		assert_eq!(event.repository_full_name(), "");
	}

	#[test]
	fn test_wrong_typed_action_reads_as_missing() {
		let event: Event =
			serde_json::from_value(json!({ "action": 5 })).unwrap();
		assert_eq!(event.action(), "");
	}
}
