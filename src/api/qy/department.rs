//! Department management.

// crates.io
use serde_json::Value;
// self
use crate::{_prelude::*, api::endpoint, http::ApiHttpClient};

def_api!(DepartmentApi, qy_department, "Department management endpoints.");

/// Department to create.
#[derive(Clone, Debug, Serialize)]
pub struct NewDepartment {
	/// Display name.
	pub name: String,
	/// Parent department id.
	#[serde(rename = "parentid")]
	pub parent_id: i64,
	/// English display name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name_en: Option<String>,
	/// Order among siblings; larger sorts first.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub order: Option<i64>,
	/// Explicit id, which must be greater than 1.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
}
impl NewDepartment {
	/// Creates a department under `parent_id`.
	pub fn new(name: impl Into<String>, parent_id: i64) -> Self {
		Self { name: name.into(), parent_id, name_en: None, order: None, id: None }
	}
}

/// Changes applied by [`DepartmentApi::update`]; unset fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DepartmentUpdate {
	/// Department id.
	pub id: i64,
	/// New display name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// New English display name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name_en: Option<String>,
	/// New parent department id.
	#[serde(rename = "parentid", skip_serializing_if = "Option::is_none")]
	pub parent_id: Option<i64>,
	/// New order among siblings.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub order: Option<i64>,
}

impl<C> DepartmentApi<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a department.
	pub async fn create(&self, department: &NewDepartment) -> Result<Value> {
		self.client.post_json(&endpoint::QY_DEPARTMENT_CREATE, &[], department).await
	}

	/// Updates a department.
	pub async fn update(&self, update: &DepartmentUpdate) -> Result<Value> {
		self.client.post_json(&endpoint::QY_DEPARTMENT_UPDATE, &[], update).await
	}

	/// Deletes a department; it must have no members or children.
	pub async fn delete(&self, id: i64) -> Result<Value> {
		self.client.get_json(&endpoint::QY_DEPARTMENT_DELETE, &[&id.to_string()]).await
	}

	/// Lists the subtree rooted at `id`.
	pub async fn list(&self, id: i64) -> Result<Value> {
		self.client.get_json(&endpoint::QY_DEPARTMENT_LIST, &[&id.to_string()]).await
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn payloads_use_platform_field_names() {
		let create = NewDepartment { order: Some(3), ..NewDepartment::new("R&D", 1) };

		assert_eq!(
			serde_json::to_value(&create).expect("Department should serialize."),
			serde_json::json!({ "name": "R&D", "parentid": 1, "order": 3 })
		);

		let update = DepartmentUpdate { id: 7, parent_id: Some(2), ..Default::default() };

		assert_eq!(
			serde_json::to_value(&update).expect("Update should serialize."),
			serde_json::json!({ "id": 7, "parentid": 2 })
		);
	}
}
