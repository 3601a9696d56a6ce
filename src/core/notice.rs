/// A short user-facing message raised by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Info,
    Destructive,
}

impl Notice {
    pub fn info(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: NoticeVariant::Info,
        }
    }

    pub fn destructive(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn fund_saved() -> Self {
        Self::info("Fund Saved", "Fund has been added to your saved list")
    }

    pub fn fund_removed() -> Self {
        Self::info("Fund Removed", "Fund has been removed from your saved list")
    }

    pub fn login_required() -> Self {
        Self::destructive("Please Login", "You need to be logged in to save funds")
    }
}
