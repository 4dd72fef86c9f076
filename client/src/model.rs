//! Domain records and partial-record patches
//!
//! Records mirror the JSONPlaceholder wire format. Every record has a patch
//! twin whose fields are all optional; a patch serves both as a PUT request
//! body (unset fields are skipped on serialize) and as the decoded server
//! echo (the service echoes an arbitrary subset of the record).
//!
//! Reconciliation is an explicit per-field merge, not a dynamic deep-merge
//! helper: scalar fields present in the echo overwrite, nested patches
//! recurse, and unset fields preserve local knowledge.

use serde::{Deserialize, Serialize};

/// Numeric identity of a user
pub type UserId = u64;
/// Numeric identity of a post
pub type PostId = u64;
/// Numeric identity of a todo
pub type TodoId = u64;

/// Geographic coordinates of an address, kept as the strings the wire carries
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
    /// Latitude
    pub lat: String,
    /// Longitude
    pub lng: String,
}

/// Partial [`Geo`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoPatch {
    /// Latitude, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<String>,
    /// Longitude, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<String>,
}

impl Geo {
    /// Overlay the set fields of a patch onto this record
    pub fn apply(&mut self, patch: &GeoPatch) {
        if let Some(lat) = &patch.lat {
            self.lat.clone_from(lat);
        }
        if let Some(lng) = &patch.lng {
            self.lng.clone_from(lng);
        }
    }

    /// Materialize a patch into a full record, defaulting unset fields
    #[must_use]
    pub fn from_patch(patch: &GeoPatch) -> Self {
        let mut geo = Self::default();
        geo.apply(patch);
        geo
    }
}

/// Postal address of a user
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street line
    pub street: String,
    /// Suite or apartment line
    pub suite: String,
    /// City
    pub city: String,
    /// Postal code
    pub zipcode: String,
    /// Coordinates
    pub geo: Geo,
}

/// Partial [`Address`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPatch {
    /// Street line, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// Suite line, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,
    /// City, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Postal code, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    /// Coordinates, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoPatch>,
}

impl Address {
    /// Overlay the set fields of a patch onto this record, recursing into
    /// the nested coordinates
    pub fn apply(&mut self, patch: &AddressPatch) {
        if let Some(street) = &patch.street {
            self.street.clone_from(street);
        }
        if let Some(suite) = &patch.suite {
            self.suite.clone_from(suite);
        }
        if let Some(city) = &patch.city {
            self.city.clone_from(city);
        }
        if let Some(zipcode) = &patch.zipcode {
            self.zipcode.clone_from(zipcode);
        }
        if let Some(geo) = &patch.geo {
            self.geo.apply(geo);
        }
    }

    /// Materialize a patch into a full record, defaulting unset fields
    #[must_use]
    pub fn from_patch(patch: &AddressPatch) -> Self {
        let mut address = Self::default();
        address.apply(patch);
        address
    }
}

/// Employer of a user
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Company name
    pub name: String,
    /// Marketing catch phrase
    pub catch_phrase: String,
    /// Line of business
    pub bs: String,
}

/// Partial [`Company`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPatch {
    /// Company name, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Catch phrase, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catch_phrase: Option<String>,
    /// Line of business, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bs: Option<String>,
}

impl Company {
    /// Overlay the set fields of a patch onto this record
    pub fn apply(&mut self, patch: &CompanyPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(catch_phrase) = &patch.catch_phrase {
            self.catch_phrase.clone_from(catch_phrase);
        }
        if let Some(bs) = &patch.bs {
            self.bs.clone_from(bs);
        }
    }

    /// Materialize a patch into a full record, defaulting unset fields
    #[must_use]
    pub fn from_patch(patch: &CompanyPatch) -> Self {
        let mut company = Self::default();
        company.apply(patch);
        company
    }
}

/// A user record
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Record identity
    pub id: UserId,
    /// Full name
    pub name: String,
    /// Login name
    pub username: String,
    /// Email address
    pub email: String,
    /// Postal address
    pub address: Address,
    /// Phone number
    pub phone: String,
    /// Website
    pub website: String,
    /// Employer
    pub company: Company,
}

/// Partial [`User`], used as PUT body and decoded server echo
///
/// The record identity is never part of a patch; update commands carry the
/// requested id alongside the echo instead of trusting the echo to repeat it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    /// Full name, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Login name, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Email address, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Postal address, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressPatch>,
    /// Phone number, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Website, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Employer, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyPatch>,
}

impl User {
    /// Deep-merge a server echo into this record
    ///
    /// Scalar fields present in the echo overwrite; nested patches recurse so
    /// sub-fields the edit form never touched keep their local values.
    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(username) = &patch.username {
            self.username.clone_from(username);
        }
        if let Some(email) = &patch.email {
            self.email.clone_from(email);
        }
        if let Some(address) = &patch.address {
            self.address.apply(address);
        }
        if let Some(phone) = &patch.phone {
            self.phone.clone_from(phone);
        }
        if let Some(website) = &patch.website {
            self.website.clone_from(website);
        }
        if let Some(company) = &patch.company {
            self.company.apply(company);
        }
    }

    /// Shallow-merge a server echo into this record
    ///
    /// Scalar fields behave as in [`User::apply`], but a nested patch present
    /// in the echo replaces the nested record wholesale, with unset sub-fields
    /// defaulting to empty. This mirrors a one-level object spread: the
    /// selected-user copy is treated as independently fetched, not as a view
    /// of the list entry.
    pub fn apply_shallow(&mut self, patch: &UserPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(username) = &patch.username {
            self.username.clone_from(username);
        }
        if let Some(email) = &patch.email {
            self.email.clone_from(email);
        }
        if let Some(address) = &patch.address {
            self.address = Address::from_patch(address);
        }
        if let Some(phone) = &patch.phone {
            self.phone.clone_from(phone);
        }
        if let Some(website) = &patch.website {
            self.website.clone_from(website);
        }
        if let Some(company) = &patch.company {
            self.company = Company::from_patch(company);
        }
    }
}

/// A post authored by a user
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Authoring user
    pub user_id: UserId,
    /// Record identity
    pub id: PostId,
    /// Title
    pub title: String,
    /// Body text
    pub body: String,
}

/// Partial [`Post`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    /// Authoring user, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// Title, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body text, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Post {
    /// Merge a server echo into this record; set fields overwrite
    pub fn apply(&mut self, patch: &PostPatch) {
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(body) = &patch.body {
            self.body.clone_from(body);
        }
    }
}

/// A todo owned by a user
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Owning user
    pub user_id: UserId,
    /// Record identity
    pub id: TodoId,
    /// Title
    pub title: String,
    /// Whether the todo is done
    pub completed: bool,
}

/// Partial [`Todo`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    /// Owning user, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// Title, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Completion flag, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl Todo {
    /// Merge a server echo into this record; set fields overwrite
    pub fn apply(&mut self, patch: &TodoPatch) {
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            name: "John Doe".to_string(),
            username: "johndoe".to_string(),
            email: "john@example.com".to_string(),
            address: Address {
                street: "A".to_string(),
                suite: "B".to_string(),
                city: "C".to_string(),
                zipcode: "10001".to_string(),
                geo: Geo {
                    lat: "0".to_string(),
                    lng: "0".to_string(),
                },
            },
            phone: "555-0100".to_string(),
            website: "example.com".to_string(),
            company: Company {
                name: "Acme".to_string(),
                catch_phrase: "Do things".to_string(),
                bs: "synergy".to_string(),
            },
        }
    }

    #[test]
    fn deep_merge_preserves_untouched_nested_fields() {
        let mut user = sample_user();
        let echo = UserPatch {
            email: Some("x@y.z".to_string()),
            address: Some(AddressPatch {
                street: Some("New".to_string()),
                ..AddressPatch::default()
            }),
            ..UserPatch::default()
        };

        user.apply(&echo);

        assert_eq!(user.email, "x@y.z");
        assert_eq!(user.address.street, "New");
        assert_eq!(user.address.suite, "B");
        assert_eq!(user.address.city, "C");
        assert_eq!(user.address.zipcode, "10001");
        assert_eq!(user.company, sample_user().company);
    }

    #[test]
    fn shallow_merge_replaces_nested_records_wholesale() {
        let mut user = sample_user();
        let echo = UserPatch {
            address: Some(AddressPatch {
                street: Some("New".to_string()),
                ..AddressPatch::default()
            }),
            ..UserPatch::default()
        };

        user.apply_shallow(&echo);

        assert_eq!(user.address.street, "New");
        // One-level spread semantics: the rest of the address is defaulted.
        assert_eq!(user.address.suite, "");
        assert_eq!(user.address.zipcode, "");
        // Fields absent from the echo are untouched.
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.company, sample_user().company);
    }

    #[test]
    fn empty_patch_is_identity_under_deep_merge() {
        let mut user = sample_user();
        user.apply(&UserPatch::default());
        assert_eq!(user, sample_user());
    }

    #[test]
    fn user_decodes_wire_format() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        }"#;

        let user: User = serde_json::from_str(json).expect("user should decode");
        assert_eq!(user.id, 1);
        assert_eq!(user.company.catch_phrase, "Multi-layered client-server neural-net");
        assert_eq!(user.address.geo.lat, "-37.3159");
    }

    #[test]
    fn todo_decodes_camel_case_user_id() {
        let json = r#"{ "userId": 2, "id": 21, "title": "buy bread", "completed": true }"#;
        let todo: Todo = serde_json::from_str(json).expect("todo should decode");
        assert_eq!(todo.user_id, 2);
        assert!(todo.completed);
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = TodoPatch {
            completed: Some(true),
            ..TodoPatch::default()
        };
        let body = serde_json::to_value(&patch).expect("patch should encode");
        assert_eq!(body, serde_json::json!({ "completed": true }));
    }

    #[test]
    fn echo_decode_tolerates_extra_fields() {
        // The service echoes the id back; patches ignore it.
        let json = r#"{ "id": 1, "email": "x@y.z" }"#;
        let echo: UserPatch = serde_json::from_str(json).expect("echo should decode");
        assert_eq!(echo.email.as_deref(), Some("x@y.z"));
        assert_eq!(echo.address, None);
    }

    #[test]
    fn post_merge_overwrites_set_fields_only() {
        let mut post = Post {
            user_id: 1,
            id: 10,
            title: "old".to_string(),
            body: "text".to_string(),
        };
        post.apply(&PostPatch {
            title: Some("new".to_string()),
            ..PostPatch::default()
        });
        assert_eq!(post.title, "new");
        assert_eq!(post.body, "text");
        assert_eq!(post.user_id, 1);
    }
}
