use github_slack_relay::{
	config::MainConfig, setup::setup, webhook::AppState,
};
use httptest::{all_of, matchers::*, responders::*, Expectation, Server};
use hyper::{Body, Request, Response};
use serde_json::{json, Value};
use std::sync::Arc;

pub const SLACK_PATH: &str = "/services/T000/B000/XXXX";
pub const ASANA_KEY: &str = "asana-secret";

pub struct SetupOutput {
	pub slack_api: Server,
	pub asana_api: Server,
	pub config: MainConfig,
}

pub fn common_setup(user_map: &str) -> SetupOutput {
	let slack_api = Server::run();
	let asana_api = Server::run();
	let config = MainConfig {
		user_map: user_map.parse().unwrap(),
		slack_url: slack_api.url(SLACK_PATH).to_string(),
		asana_key: Some(ASANA_KEY.to_string()),
		asana_api_url: asana_api.url("/api/1.0").to_string(),
		webhook_port: 0,
		bot_login: Some("relay-bot".to_string()),
		announce_channel: None,
		author_suffix: false,
		reviewable_url: "https://reviewable.io/reviews".to_string(),
	};

	SetupOutput {
		slack_api,
		asana_api,
		config,
	}
}

pub fn app_state(config: &MainConfig) -> Arc<AppState> {
	Arc::new(setup(Some(config.clone()), false).unwrap())
}

pub fn expect_slack_message(slack_api: &Server, recipient: &str, text: &str) {
	slack_api.expect(
		Expectation::matching(all_of![
			request::method_path("POST", SLACK_PATH),
			request::body(json_decoded(eq(json!({
				"channel": recipient,
				"text": text,
			})))),
		])
		.respond_with(status_code(200).body("ok")),
	);
}

pub fn expect_asana_story(asana_api: &Server, task_id: &str, text: &str) {
	asana_api.expect(
		Expectation::matching(all_of![
			request::method_path(
				"POST",
				format!("/api/1.0/tasks/{}/stories", task_id),
			),
			request::headers(contains((
				"authorization",
				"Bearer asana-secret"
			))),
			request::body(json_decoded(eq(json!({
				"data": { "text": text },
			})))),
		])
		.respond_with(json_encoded(json!({
			"data": { "gid": "1200", "resource_type": "story" },
		}))),
	);
}

pub async fn post_webhook(
	state: &Arc<AppState>,
	payload: impl Into<Body>,
) -> (u16, String) {
	let request = Request::builder()
		.method("POST")
		.uri("/")
		.header("content-type", "application/json")
		.body(payload.into())
		.unwrap();
	let response: Response<Body> =
		github_slack_relay::webhook::webhook(request, Arc::clone(state))
			.await
			.unwrap();
	let status = response.status().as_u16();
	let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
	(status, String::from_utf8(body.to_vec()).unwrap())
}

pub fn review_payload(
	action: &str,
	sender: &str,
	author: &str,
	assignees: &[&str],
	review_body: &str,
) -> Value {
	let assignees: Vec<Value> =
		assignees.iter().map(|login| json!({ "login": login })).collect();
	json!({
		"action": action,
		"review": { "body": review_body, "state": "commented" },
		"pull_request": {
			"number": 42,
			"title": "Fix the thing",
			"body": "",
			"html_url": "https://github.com/org/repo/pull/42",
			"user": { "login": author, "type": "User" },
			"assignee": null,
			"assignees": assignees,
		},
		"sender": { "login": sender, "type": "User" },
		"repository": { "full_name": "org/repo", "name": "repo" },
	})
}
