//! Endpoint table plus the typed WeCom (`qy`) and official-account (`mp`) wrappers.
//!
//! Every REST operation is described by a read-only [`Endpoint`] constant in [`endpoint`].
//! Templates carry `%s` placeholders that [`Endpoint::render`] fills in order, so the table
//! holds no credential logic of its own. The wrappers borrow a [`Client`](crate::client::Client)
//! and let it inject the access token as the first argument.

macro_rules! def_api {
	($name:ident, $accessor:ident, $doc:literal) => {
		#[doc = $doc]
		pub struct $name<'a, C>
		where
			C: ?Sized + crate::http::ApiHttpClient,
		{
			client: &'a crate::client::Client<C>,
		}
		impl<C> crate::client::Client<C>
		where
			C: ?Sized + crate::http::ApiHttpClient,
		{
			#[doc = $doc]
			pub fn $accessor(&self) -> $name<'_, C> {
				$name { client: self }
			}
		}
	};
}

pub mod endpoint;
pub mod mp;
pub mod qy;

// self
use crate::{_prelude::*, config::{ApiHosts, Platform}, error::ConfigError};

const PLACEHOLDER: &str = "%s";

/// HTTP shape of an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// Plain `GET` with all parameters in the query string.
	Get,
	/// `POST` with a JSON body.
	Post,
	/// `POST` with a multipart body carrying a single file.
	Upload,
}
impl Method {
	/// Returns a stable label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
			Self::Upload => "UPLOAD",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Origin an endpoint is served from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Host {
	/// WeCom API host.
	Work,
	/// Official-account API host.
	Official,
	/// Browser-facing authorization host.
	Open,
}
impl Host {
	/// Platform whose configuration may call this host.
	pub const fn platform(self) -> Platform {
		match self {
			Self::Work => Platform::Work,
			Self::Official | Self::Open => Platform::OfficialAccount,
		}
	}

	fn origin(self, hosts: &ApiHosts) -> &str {
		match self {
			Self::Work => &hosts.work,
			Self::Official => &hosts.official,
			Self::Open => &hosts.open,
		}
	}
}

/// One REST operation: name, HTTP shape, host, and `%s` path template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint {
	/// Stable operation name used in errors and logs.
	pub name: &'static str,
	/// HTTP shape.
	pub method: Method,
	/// Serving host.
	pub host: Host,
	/// Path and query template relative to the host, e.g. `/cgi-bin/agent/get?access_token=%s`.
	pub template: &'static str,
}
impl Endpoint {
	/// Defines an endpoint.
	pub const fn new(
		name: &'static str,
		method: Method,
		host: Host,
		template: &'static str,
	) -> Self {
		Self { name, method, host, template }
	}

	/// Number of `%s` placeholders in the template.
	pub fn arity(&self) -> usize {
		self.template.matches(PLACEHOLDER).count()
	}

	/// Renders the absolute URL, form-url-encoding each argument into its placeholder.
	pub fn render(&self, hosts: &ApiHosts, args: &[&str]) -> Result<Url> {
		let expected = self.arity();

		if expected != args.len() {
			return Err(ConfigError::TemplateArity {
				endpoint: self.name,
				expected,
				actual: args.len(),
			}
			.into());
		}

		let mut rendered = String::from(self.host.origin(hosts));

		for (i, piece) in self.template.split(PLACEHOLDER).enumerate() {
			if i > 0 {
				rendered.extend(url::form_urlencoded::byte_serialize(args[i - 1].as_bytes()));
			}

			rendered.push_str(piece);
		}

		Url::parse(&rendered)
			.map_err(|source| ConfigError::InvalidUrl { endpoint: self.name, source }.into())
	}
}
impl Display for Endpoint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.name)
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashSet;
	// self
	use super::*;

	#[test]
	fn render_encodes_arguments_in_order() {
		let url = endpoint::QY_GET_TOKEN
			.render(&ApiHosts::default(), &["ww corp", "s3cr&t"])
			.expect("Token URL should render.");

		assert_eq!(
			url.as_str(),
			"https://qyapi.weixin.qq.com/cgi-bin/gettoken?corpid=ww+corp&corpsecret=s3cr%26t"
		);

		let pairs = url.query_pairs().collect::<Vec<_>>();

		assert_eq!(pairs[1].1, "s3cr&t");
	}

	#[test]
	fn render_rejects_arity_mismatch() {
		let err = endpoint::QY_AGENT_GET
			.render(&ApiHosts::default(), &["token"])
			.expect_err("Missing arguments must be rejected.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::TemplateArity { expected: 2, actual: 1, .. })
		));
	}

	#[test]
	fn render_uses_host_overrides() {
		let url = endpoint::MP_CALLBACK_IP
			.render(&ApiHosts::with_base("http://127.0.0.1:9000"), &["tok"])
			.expect("Callback URL should render.");

		assert_eq!(url.as_str(), "http://127.0.0.1:9000/cgi-bin/getcallbackip?access_token=tok");
	}

	#[test]
	fn table_is_well_formed() {
		let mut names = HashSet::new();

		for endpoint in endpoint::ALL {
			assert!(names.insert(endpoint.name), "Duplicate endpoint name {}.", endpoint.name);
			assert!(endpoint.template.starts_with('/'), "{} must be host-relative.", endpoint.name);
			assert!(endpoint.arity() >= 1, "{} must take at least one argument.", endpoint.name);

			let args = vec!["x"; endpoint.arity()];

			endpoint
				.render(&ApiHosts::default(), &args)
				.unwrap_or_else(|e| panic!("{} should render: {e}.", endpoint.name));
		}
	}
}
