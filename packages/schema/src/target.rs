use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an unrecognized target identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown target: {0}")]
pub struct UnknownTargetError(pub String);

/// One output ecosystem the engine can generate source for.
///
/// The four framework targets (`IosSwiftui`, `AndroidCompose`, `WebReact`,
/// `DesktopTauri`) have full emitter and scaffold support. The remaining
/// identifiers are accepted on the wire and generate placeholder exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    #[serde(rename = "ios-swiftui")]
    IosSwiftui,
    #[serde(rename = "ios-uikit")]
    IosUikit,
    #[serde(rename = "android-compose")]
    AndroidCompose,
    #[serde(rename = "android-xml")]
    AndroidXml,
    #[serde(rename = "web-react")]
    WebReact,
    #[serde(rename = "desktop-tauri")]
    DesktopTauri,
    #[serde(rename = "desktop-electron")]
    DesktopElectron,
}

impl Target {
    pub const ALL: [Target; 7] = [
        Target::IosSwiftui,
        Target::IosUikit,
        Target::AndroidCompose,
        Target::AndroidXml,
        Target::WebReact,
        Target::DesktopTauri,
        Target::DesktopElectron,
    ];

    /// The wire identifier used in persisted projects and API requests
    pub fn id(&self) -> &'static str {
        match self {
            Target::IosSwiftui => "ios-swiftui",
            Target::IosUikit => "ios-uikit",
            Target::AndroidCompose => "android-compose",
            Target::AndroidXml => "android-xml",
            Target::WebReact => "web-react",
            Target::DesktopTauri => "desktop-tauri",
            Target::DesktopElectron => "desktop-electron",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Target::IosSwiftui => "iOS (SwiftUI)",
            Target::IosUikit => "iOS (UIKit)",
            Target::AndroidCompose => "Android (Jetpack Compose)",
            Target::AndroidXml => "Android (XML Views)",
            Target::WebReact => "Web (React)",
            Target::DesktopTauri => "Desktop (Tauri)",
            Target::DesktopElectron => "Desktop (Electron)",
        }
    }

    /// Language of the component source units emitted for this target
    pub fn source_language(&self) -> &'static str {
        match self {
            Target::IosSwiftui | Target::IosUikit => "swift",
            Target::AndroidCompose => "kotlin",
            Target::AndroidXml => "xml",
            Target::WebReact => "javascript",
            Target::DesktopTauri | Target::DesktopElectron => "javascript",
        }
    }

    /// Whether this target has a full native backend (emitters + scaffold)
    pub fn has_backend(&self) -> bool {
        matches!(
            self,
            Target::IosSwiftui | Target::AndroidCompose | Target::WebReact | Target::DesktopTauri
        )
    }
}

impl FromStr for Target {
    type Err = UnknownTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::ALL
            .iter()
            .find(|t| t.id() == s)
            .copied()
            .ok_or_else(|| UnknownTargetError(s.to_string()))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
