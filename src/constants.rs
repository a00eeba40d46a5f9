pub const REVIEWABLE_URL: &str = "https://reviewable.io/reviews";

pub const ASANA_API_URL: &str = "https://app.asana.com/api/1.0";

pub const DEFAULT_PORT: u16 = 8080;

pub const USER_AGENT: &str = "github-slack-relay/0.1.0";

pub const ASSIGNED_VERB: &str = "You were assigned";

pub const COMMENTS_VERB: &str = "New comments on";

pub const ACTION_ASSIGNED: &str = "assigned";
pub const ACTION_SUBMITTED: &str = "submitted";
pub const ACTION_CREATED: &str = "created";
pub const ACTION_OPENED: &str = "opened";
