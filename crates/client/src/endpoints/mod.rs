//! REST API endpoint implementations.

mod request;
mod roles;

pub use request::send_request;
pub use roles::{AssignEndpoint, GET_ALL_ROLES_PATH, get_all_roles, post_role_change};
