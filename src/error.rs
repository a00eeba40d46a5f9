use snafu::Snafu;
use std::net::SocketAddr;

#[derive(Debug, Snafu)]
#[snafu(visibility = "pub")]
pub enum Error {
	/// An error occurred while sending or receiving a HTTP request or response
	/// respectively.
	#[snafu(display("Source: {}", source))]
	Http { source: reqwest::Error },

	/// An error occurred while parsing or serializing JSON.
	#[snafu(display("Source: {}", source))]
	Json { source: serde_json::Error },

	/// An error occurred with an integration service (e.g. Slack).
	#[snafu(display("Status code: {}\nBody:\n{:#?}", status, body))]
	Response {
		status: reqwest::StatusCode,
		body: serde_json::Value,
	},

	#[snafu(display("{}", msg))]
	Message { msg: String },

	#[snafu(display("Missing environment variable {}", var))]
	MissingVar { var: String },

	#[snafu(display("Invalid value for {}: {}", var, msg))]
	InvalidVar { var: String, msg: String },

	/// A `USERMAP` entry did not have the `source,destination` shape.
	#[snafu(display(
		"Malformed user map entry {:?}; expected `source,destination`",
		entry
	))]
	MalformedUserMap { entry: String },

	#[snafu(display("Port in use: {}", addr))]
	PortInUse { addr: SocketAddr },
}
