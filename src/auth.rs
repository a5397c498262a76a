//! Ownership checks for user-curated favorites.
//!
//! The favorites store itself lives outside this crate, but the decision
//! of who may touch a favorite is business logic, expressed here as a
//! plain function over (current user, resource owner) rather than as
//! framework mixin behavior. The web layer maps the decision onto its
//! own responses (login redirect, 403, and so on).

/// Outcome of an ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The current user owns the resource.
    Allowed,
    /// Nobody is signed in; the web layer should redirect to login.
    RedirectToLogin,
    /// Signed in, but the resource belongs to someone else.
    Forbidden,
}

/// Decide whether `current_user` may act on a resource owned by `owner`.
///
/// `None` means anonymous. Only the owner is ever allowed; there is no
/// admin override at this layer.
pub fn authorize_owned_resource<Id: PartialEq>(
    current_user: Option<&Id>,
    owner: &Id,
) -> AccessDecision {
    match current_user {
        None => AccessDecision::RedirectToLogin,
        Some(user) if user == owner => AccessDecision::Allowed,
        Some(_) => AccessDecision::Forbidden,
    }
}
