//! Declarative layout input.
//!
//! The UI-state store owns these values; the engine only reads them. Each
//! group mirrors one feature whose state drives the layout.

/// Where the camera dock is docked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CameraDockPosition {
    /// Above the shared content
    #[default]
    Top,
    /// Below the shared content
    Bottom,
    /// On the text-start side of the shared content
    Left,
    /// On the text-end side of the shared content
    Right,
    /// Under the sidebar-content panel
    SidebarBottom,
}

impl CameraDockPosition {
    /// Whether the dock stacks vertically with the content (height is the
    /// resizable axis).
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::Top | Self::Bottom | Self::SidebarBottom)
    }
}

/// Panels that can be shown in the sidebar-content column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SidebarPanel {
    /// Collapsed, no panel selected
    #[default]
    None,
    Chat,
    UserList,
    Poll,
    Captions,
    SharedNotes,
    BreakoutRoom,
    Timer,
    Plugin,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SidebarNavigationInput {
    pub is_open: bool,
    /// Last user-resized width, 0 when never resized
    pub width: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SidebarContentInput {
    pub is_open: bool,
    pub active_panel: SidebarPanel,
    /// Last user-resized width, 0 when never resized
    pub width: f64,
}

impl SidebarContentInput {
    /// Whether the panel is expanded rather than showing only its header.
    pub fn is_expanded(&self) -> bool {
        self.is_open && self.active_panel != SidebarPanel::None
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct PresentationInput {
    pub is_open: bool,
    pub slide_count: u32,
    pub current_slide: u32,
    /// Intrinsic slide width, 0 when unknown
    pub slide_width: f64,
    /// Intrinsic slide height, 0 when unknown
    pub slide_height: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CameraDockInput {
    pub position: CameraDockPosition,
    pub num_cameras: u32,
    pub is_dragging: bool,
    pub is_resizing: bool,
    /// Transient width while a resize gesture is active
    pub width: f64,
    /// Transient height while a resize gesture is active
    pub height: f64,
    pub focused_id: Option<String>,
}

impl CameraDockInput {
    /// Whether a drag or resize gesture is in progress.
    pub fn gesture_active(&self) -> bool {
        self.is_dragging || self.is_resizing
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ExternalVideoInput {
    pub has_external_video: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct GenericMainContentInput {
    /// Plugin content id, empty when no generic content is shown
    pub content_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ScreenShareInput {
    pub has_screen_share: bool,
    /// Source stream width
    pub width: f64,
    /// Source stream height
    pub height: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SharedNotesInput {
    pub is_pinned: bool,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ActionBarInput {
    pub has_action_bar: bool,
}

impl Default for ActionBarInput {
    fn default() -> Self {
        Self { has_action_bar: true }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct NavBarInput {
    pub has_nav_bar: bool,
}

impl Default for NavBarInput {
    fn default() -> Self {
        Self { has_nav_bar: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct BannerBarInput {
    pub has_banner: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CaptionsInput {
    pub has_captions: bool,
}

/// The complete declarative input for one layout pass.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct LayoutInput {
    pub sidebar_navigation: SidebarNavigationInput,
    pub sidebar_content: SidebarContentInput,
    pub presentation: PresentationInput,
    pub camera_dock: CameraDockInput,
    pub external_video: ExternalVideoInput,
    pub generic_main_content: GenericMainContentInput,
    pub screen_share: ScreenShareInput,
    pub shared_notes: SharedNotesInput,
    pub action_bar: ActionBarInput,
    pub nav_bar: NavBarInput,
    pub banner_bar: BannerBarInput,
    pub captions: CaptionsInput,
}

/// The kinds of main-stage content that share one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Presentation,
    ScreenShare,
    ExternalVideo,
    GenericContent,
    SharedNotes,
}

impl ContentKind {
    /// All content kinds, in the order the rendering layer stacks them
    /// (topmost first).
    pub const BY_PRIORITY: [ContentKind; 5] = [
        ContentKind::GenericContent,
        ContentKind::ScreenShare,
        ContentKind::ExternalVideo,
        ContentKind::SharedNotes,
        ContentKind::Presentation,
    ];
}

impl LayoutInput {
    /// Whether the given content kind is currently open.
    pub fn is_content_open(&self, kind: ContentKind) -> bool {
        match kind {
            ContentKind::Presentation => self.presentation.is_open,
            ContentKind::ScreenShare => self.screen_share.has_screen_share,
            ContentKind::ExternalVideo => self.external_video.has_external_video,
            ContentKind::GenericContent => !self.generic_main_content.content_id.is_empty(),
            ContentKind::SharedNotes => self.shared_notes.is_pinned,
        }
    }

    /// Whether any shared content is open.
    pub fn has_shared_content(&self) -> bool {
        ContentKind::BY_PRIORITY.iter().any(|&kind| self.is_content_open(kind))
    }

    /// The topmost open content kind.
    pub fn primary_content(&self) -> Option<ContentKind> {
        ContentKind::BY_PRIORITY
            .iter()
            .copied()
            .find(|&kind| self.is_content_open(kind))
    }

    /// Intrinsic source size of a content kind, when known.
    pub fn content_source_size(&self, kind: ContentKind) -> Option<(f64, f64)> {
        let (width, height) = match kind {
            ContentKind::ScreenShare => (self.screen_share.width, self.screen_share.height),
            ContentKind::Presentation => (self.presentation.slide_width, self.presentation.slide_height),
            _ => return None,
        };
        (width > 0.0 && height > 0.0).then_some((width, height))
    }
}
