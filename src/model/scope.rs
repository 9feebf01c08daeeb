//! Visibility scope resolved from a caller's role.
//!
//! Every list/read/aggregate query in the application is filtered by the
//! caller's scope. The scope is resolved once per request from the caller's
//! role and position in the hierarchy, then handed to repositories which
//! translate it into query conditions.

/// What slice of the congregation a caller may see.
///
/// Resolution per role:
/// - Bishop → `All`
/// - Governor → `Areas` of every region they govern
/// - Area_Pastor → `Areas` where they are overseer
/// - Bacenta_Leader → `Leader` (members whose leader_id is them)
/// - Ministry_Leader → `Nothing` (their access goes through ministry endpoints)
///
/// An empty `Areas` list means the caller legitimately oversees nothing yet;
/// queries then return empty results rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Unrestricted visibility over the whole congregation.
    All,
    /// Visibility limited to members and leaders of the listed areas.
    Areas(Vec<i32>),
    /// Visibility limited to the members shepherded by this user id.
    Leader(i32),
    /// No visibility into member or area data.
    Nothing,
}

impl Scope {
    /// Whether this scope covers the given area.
    ///
    /// `Leader` scopes are not area-based and never cover an area; writes by
    /// Bacenta leaders are validated against member ownership instead.
    pub fn includes_area(&self, area_id: i32) -> bool {
        match self {
            Scope::All => true,
            Scope::Areas(ids) => ids.contains(&area_id),
            Scope::Leader(_) | Scope::Nothing => false,
        }
    }

    /// Whether this scope is the unrestricted one.
    pub fn is_all(&self) -> bool {
        matches!(self, Scope::All)
    }
}
