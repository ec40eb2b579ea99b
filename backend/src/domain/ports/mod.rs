//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`*Command`, `*Query`) are what inbound adapters call.
//! Driven ports (`*Repository`, [`AddressLookup`]) are what outbound adapters
//! implement.

mod macros;
pub(crate) use macros::define_port_error;

mod address_lookup;
mod comment_command;
mod comment_query;
mod comment_repository;
mod connection_repository;
mod post_command;
mod post_query;
mod post_repository;
mod social_graph_command;
mod social_graph_query;
mod user_command;
mod user_query;
mod user_repository;

#[cfg(test)]
pub use address_lookup::MockAddressLookup;
pub use address_lookup::{AddressFragment, AddressLookup, AddressLookupError};
#[cfg(test)]
pub use comment_command::MockCommentCommand;
pub use comment_command::CommentCommand;
#[cfg(test)]
pub use comment_query::MockCommentQuery;
pub use comment_query::CommentQuery;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use comment_repository::{CommentRepository, CommentRepositoryError};
#[cfg(test)]
pub use connection_repository::MockConnectionRepository;
pub use connection_repository::{ConnectionRepository, ConnectionRepositoryError};
#[cfg(test)]
pub use post_command::MockPostCommand;
pub use post_command::PostCommand;
#[cfg(test)]
pub use post_query::MockPostQuery;
pub use post_query::PostQuery;
#[cfg(test)]
pub use post_repository::MockPostRepository;
pub use post_repository::{PostRepository, PostRepositoryError};
#[cfg(test)]
pub use social_graph_command::MockSocialGraphCommand;
pub use social_graph_command::SocialGraphCommand;
#[cfg(test)]
pub use social_graph_query::MockSocialGraphQuery;
pub use social_graph_query::SocialGraphQuery;
#[cfg(test)]
pub use user_command::MockUserCommand;
pub use user_command::UserCommand;
#[cfg(test)]
pub use user_query::MockUserQuery;
pub use user_query::UserQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
