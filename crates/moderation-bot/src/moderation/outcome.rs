//! Classification of ban attempts.

use telegram_client::ActionError;

/// Platform description when the sender owns the chat.
pub const OWNER_DESCRIPTION: &str = "Bad Request: can't remove chat owner";
/// Platform description when the bot lacks the ban permission.
pub const NOT_ENOUGH_RIGHTS_DESCRIPTION: &str =
    "Bad Request: not enough rights to restrict/unrestrict chat member";
/// Platform description when the sender is a chat administrator.
pub const ADMIN_DESCRIPTION: &str = "Bad Request: user is an administrator of the chat";
/// Platform description for private (one-to-one) chats.
pub const PRIVATE_CHAT_DESCRIPTION: &str =
    "Bad Request: chat member status can't be changed in private chats";

/// Result of trying to ban a sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    Success,
    OwnerProtected,
    InsufficientPrivilege,
    AdminProtected,
    PrivateChatUnsupported,
    /// Any failure whose description is not recognised.
    Unknown(ActionError),
}

impl RemovalOutcome {
    /// Map a failed ban to an outcome by exact description match.
    ///
    /// Any rewording on the platform side lands in `Unknown`.
    pub fn classify(error: ActionError) -> Self {
        match error.message.as_str() {
            OWNER_DESCRIPTION => Self::OwnerProtected,
            NOT_ENOUGH_RIGHTS_DESCRIPTION => Self::InsufficientPrivilege,
            ADMIN_DESCRIPTION => Self::AdminProtected,
            PRIVATE_CHAT_DESCRIPTION => Self::PrivateChatUnsupported,
            _ => Self::Unknown(error),
        }
    }

    /// Text to post in the chat, if any.
    pub fn notice(&self, sender_name: &str) -> Option<String> {
        let text = match self {
            Self::Success => format!(
                "{} have used a forbidden word and will be banned for a day from this group.",
                sender_name
            ),
            Self::OwnerProtected => "Group Owner's can use forbidden words!".into(),
            Self::InsufficientPrivilege => "Forbidden Word used but I don't have enough permissions to kick members. Please make me an admin.".into(),
            Self::AdminProtected => "Chat Admins can also use forbidden words!".into(),
            Self::PrivateChatUnsupported => "Sorry, This doesn't work in private chats!".into(),
            Self::Unknown(_) => return None,
        };

        Some(text)
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::OwnerProtected => "owner_protected",
            Self::InsufficientPrivilege => "insufficient_privilege",
            Self::AdminProtected => "admin_protected",
            Self::PrivateChatUnsupported => "private_chat_unsupported",
            Self::Unknown(_) => "unknown",
        }
    }
}
