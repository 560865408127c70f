use shared::models::User;
use yewdux::Store;

/// UI mirror of the signed-in user for rendering.
///
/// Durable storage stays the source of truth for authentication checks;
/// this store only feeds the navbar and greetings.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    /// The signed-in user, when known.
    pub user: Option<User>,
}
