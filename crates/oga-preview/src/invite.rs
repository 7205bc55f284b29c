//! Invite path parsing.
//!
//! Invite links look like `/invite/{code}` or `/invite/{code}/{characterId}`.
//! Anything else is not ours and must pass through untouched.

/// First path segment of every invite link.
pub const INVITE_ROUTE: &str = "invite";

/// A request path recognised as an invite link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitePath {
    /// Opaque invite code. Never empty.
    pub invite_code: String,
    /// Character id as supplied by the caller, casing preserved.
    pub character_id: Option<String>,
}

impl InvitePath {
    /// Parse a URL path. Returns `None` for anything not shaped like an invite.
    ///
    /// Empty segments are skipped, so `//invite//CODE/` still matches.
    /// Segments after the character id are ignored.
    pub fn parse(path: &str) -> Option<Self> {
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        if segments.next()? != INVITE_ROUTE {
            return None;
        }

        let invite_code = segments.next()?.to_string();
        let character_id = segments.next().map(str::to_string);

        Some(Self {
            invite_code,
            character_id,
        })
    }
}
