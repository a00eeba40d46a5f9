use crate::constants::*;

/// How an event is turned into notifications, chosen from its action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
	/// Tell the new assignees.
	Assigned,
	/// Tell the assignees and the author about a review or comment.
	CommentOrReview,
	/// Announce a new pull request in the announcement channel.
	Opened,
	Unhandled,
}

impl Recipe {
	/// Leading words of a direct message.
	pub fn verb(&self) -> Option<&'static str> {
		match self {
			Recipe::Assigned => Some(ASSIGNED_VERB),
			Recipe::CommentOrReview => Some(COMMENTS_VERB),
			Recipe::Opened | Recipe::Unhandled => None,
		}
	}
}

/// Action tags are matched exactly, so `"Assigned"` is unhandled.
pub fn classify(action: &str) -> Recipe {
	match action {
		ACTION_ASSIGNED => Recipe::Assigned,
		ACTION_SUBMITTED | ACTION_CREATED => Recipe::CommentOrReview,
		ACTION_OPENED => Recipe::Opened,
		_ => Recipe::Unhandled,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_classify() {
		assert_eq!(classify("assigned"), Recipe::Assigned);
		assert_eq!(classify("submitted"), Recipe::CommentOrReview);
		assert_eq!(classify("created"), Recipe::CommentOrReview);
		assert_eq!(classify("opened"), Recipe::Opened);
		assert_eq!(classify("Assigned"), Recipe::Unhandled);
		assert_eq!(classify("closed"), Recipe::Unhandled);
		assert_eq!(classify(""), Recipe::Unhandled);
	}
}
