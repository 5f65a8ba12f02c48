/// Fetch Profiles
///
/// Each profile is a platform with its natural default browser so the
/// User-Agent and the rest of the header set always agree:
/// - `Windows` → Chrome (what delivery sites see most)
/// - `MacOS` → Safari
/// - `Android` → Chrome Mobile (mobile pages sometimes embed a simpler menu)
/// - `Minimal` → Basic Mozilla (no platform-specific headers)
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FetchProfile {
    /// Minimal (User-Agent + Accept only)
    Minimal,

    /// Chrome on Windows
    #[default]
    Windows,

    /// Safari on macOS
    #[value(name = "macos")]
    MacOS,

    /// Chrome on Android
    Android,
}

impl FetchProfile {
    /// Fetch Profile Name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Windows => "Windows (Chrome)",
            Self::MacOS => "macOS (Safari)",
            Self::Android => "Android (Chrome)",
        }
    }
}
