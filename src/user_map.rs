use std::{collections::HashMap, str::FromStr};

use crate::{error::*, Result};

/// Github login to Slack id mapping, parsed from a `login,id;login,id` list.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct UserMap(HashMap<String, String>);

impl UserMap {
	/// The Slack id for `github_login`, or an empty string when the login is
	/// not mapped.
	pub fn resolve(&self, github_login: &str) -> &str {
		self.get(github_login).unwrap_or("")
	}

	fn get(&self, github_login: &str) -> Option<&str> {
		self.0.get(github_login).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl FromStr for UserMap {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		let mut map = HashMap::new();
		for entry in s.split(';').map(str::trim).filter(|e| !e.is_empty()) {
			let (github_login, slack_id) = match entry.split_once(',') {
				Some((login, id))
					if !login.trim().is_empty()
						&& !id.trim().is_empty() && !id.contains(',') =>
				{
					(login.trim(), id.trim())
				}
				_ => {
					return MalformedUserMap {
						entry: entry.to_string(),
					}
					.fail()
				}
			};
			map.insert(github_login.to_string(), slack_id.to_string());
		}
		Ok(Self(map))
	}
}
