//! Stable keys the computed regions are emitted under.

use crate::input::ContentKind;

/// Output region key. The string form is the wire name consumed by the
/// rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum RegionKey {
    MediaArea,
    CameraDock,
    Presentation,
    ScreenShare,
    ExternalVideo,
    GenericContent,
    SharedNotes,
    SidebarNavigation,
    SidebarContent,
    DropZones,
    ActionBar,
    NavBar,
    Captions,
}

impl RegionKey {
    /// Every region, in emission order.
    pub const ALL: [RegionKey; 13] = [
        RegionKey::MediaArea,
        RegionKey::CameraDock,
        RegionKey::Presentation,
        RegionKey::ScreenShare,
        RegionKey::ExternalVideo,
        RegionKey::GenericContent,
        RegionKey::SharedNotes,
        RegionKey::SidebarNavigation,
        RegionKey::SidebarContent,
        RegionKey::DropZones,
        RegionKey::ActionBar,
        RegionKey::NavBar,
        RegionKey::Captions,
    ];

    /// Wire name of the region.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionKey::MediaArea => "mediaArea",
            RegionKey::CameraDock => "cameraDock",
            RegionKey::Presentation => "presentation",
            RegionKey::ScreenShare => "screenShare",
            RegionKey::ExternalVideo => "externalVideo",
            RegionKey::GenericContent => "genericContent",
            RegionKey::SharedNotes => "sharedNotes",
            RegionKey::SidebarNavigation => "sidebarNavigation",
            RegionKey::SidebarContent => "sidebarContent",
            RegionKey::DropZones => "dropZones",
            RegionKey::ActionBar => "actionBar",
            RegionKey::NavBar => "navBar",
            RegionKey::Captions => "captions",
        }
    }

    /// Look up a region by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.as_str() == name)
    }
}

impl std::fmt::Display for RegionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ContentKind> for RegionKey {
    fn from(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Presentation => RegionKey::Presentation,
            ContentKind::ScreenShare => RegionKey::ScreenShare,
            ContentKind::ExternalVideo => RegionKey::ExternalVideo,
            ContentKind::GenericContent => RegionKey::GenericContent,
            ContentKind::SharedNotes => RegionKey::SharedNotes,
        }
    }
}
