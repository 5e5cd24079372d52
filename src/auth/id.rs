//! Strongly typed identifiers that make up credential scope keys.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::{_prelude::*, auth::key::SCOPE_KEY_DELIMITER};

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				validate_view($kind, view)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				validate_view($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

const IDENTIFIER_MAX_LEN: usize = 128;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Kind of identifier (application, tenant).
		kind: &'static str,
	},
	/// The identifier contains whitespace characters.
	#[error("{kind} identifier contains whitespace.")]
	ContainsWhitespace {
		/// Kind of identifier (application, tenant).
		kind: &'static str,
	},
	/// The identifier contains the scope-key delimiter.
	#[error("{kind} identifier contains the reserved `{delimiter}` character.")]
	ContainsDelimiter {
		/// Kind of identifier (application, tenant).
		kind: &'static str,
		/// Reserved delimiter.
		delimiter: char,
	},
	/// The identifier exceeded the allowed character count.
	#[error("{kind} identifier exceeds {max} characters.")]
	TooLong {
		/// Kind of identifier (application, tenant).
		kind: &'static str,
		/// Maximum permitted character count.
		max: usize,
	},
}

def_id! { AppId, "Application identifier (official account appid or WeCom app/agent id).", "App" }
def_id! { TenantId, "Tenant identifier (WeCom corp id, or the appid for official accounts).", "Tenant" }
impl From<AppId> for TenantId {
	fn from(value: AppId) -> Self {
		Self(value.0)
	}
}

fn validate_view(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if view.chars().any(char::is_whitespace) {
		return Err(IdentifierError::ContainsWhitespace { kind });
	}
	if view.contains(SCOPE_KEY_DELIMITER) {
		return Err(IdentifierError::ContainsDelimiter { kind, delimiter: SCOPE_KEY_DELIMITER });
	}
	if view.len() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { kind, max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn identifiers_reject_whitespace_and_empty() {
		assert!(AppId::new(" wx123").is_err(), "Leading whitespace must be rejected.");
		assert!(TenantId::new("ww123 ").is_err(), "Trailing whitespace must be rejected.");
		assert!(TenantId::new("").is_err());

		let app = AppId::new("wx1234567890").expect("App fixture should be considered valid.");

		assert_eq!(app.as_ref(), "wx1234567890");
	}

	#[test]
	fn identifiers_reject_scope_delimiter() {
		let err = TenantId::new("ww:corp").expect_err("Delimiter must be rejected.");

		assert_eq!(err, IdentifierError::ContainsDelimiter { kind: "Tenant", delimiter: ':' });
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let tenant: TenantId =
			serde_json::from_str("\"ww-corp-42\"").expect("Tenant should deserialize successfully.");

		assert_eq!(tenant.as_ref(), "ww-corp-42");
		assert!(serde_json::from_str::<TenantId>("\"with space\"").is_err());
		assert!(serde_json::from_str::<AppId>("\"a:b\"").is_err());
	}

	#[test]
	fn length_limit_is_inclusive() {
		AppId::new("a".repeat(IDENTIFIER_MAX_LEN)).expect("Exact length should succeed.");

		assert!(AppId::new("a".repeat(IDENTIFIER_MAX_LEN + 1)).is_err());
	}

	#[test]
	fn borrow_supports_fast_lookup() {
		let map: HashMap<AppId, u8> = HashMap::from_iter([(
			AppId::new("wx-lookup").expect("App used for lookup should be valid."),
			7_u8,
		)]);

		assert_eq!(map.get("wx-lookup"), Some(&7));
	}
}
