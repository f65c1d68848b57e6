//! Display and View management.
//!
//! OCIO organizes output transforms through displays and views:
//! - **Display**: A physical or virtual display device (monitor, projector)
//! - **View**: A viewing condition for that display (SDR, HDR, Raw, etc.)
//!
//! # Example
//!
//! ```
//! use aces_config::{Display, View};
//!
//! let mut display = Display::new("sRGB");
//! display.add_view(View::new("Output", "Output - sRGB"));
//! display.add_view(View::new("Raw", "Utility - Raw"));
//!
//! assert_eq!(display.views().len(), 2);
//! assert_eq!(display.default_view().map(View::name), Some("Output"));
//! ```

/// A view within a display.
///
/// Views name the color space that renders the working image for a given
/// viewing condition.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// View name (e.g., "Output", "Raw").
    name: String,
    /// Target color space name.
    colorspace: String,
}

impl View {
    /// Creates a new view.
    ///
    /// # Arguments
    ///
    /// * `name` - View name
    /// * `colorspace` - Target color space name
    pub fn new(name: impl Into<String>, colorspace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colorspace: colorspace.into(),
        }
    }

    /// Returns the view name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the target color space.
    #[inline]
    pub fn colorspace(&self) -> &str {
        &self.colorspace
    }
}

/// A display device configuration.
///
/// Contains multiple views for different viewing conditions. The first view
/// added is the default.
#[derive(Debug, Clone, PartialEq)]
pub struct Display {
    /// Display name (e.g., "sRGB", "Rec.709", "DCDM").
    name: String,
    /// Available views for this display.
    views: Vec<View>,
}

impl Display {
    /// Creates a new display.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            views: Vec::new(),
        }
    }

    /// Returns the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a view to this display.
    pub fn add_view(&mut self, view: View) {
        self.views.push(view);
    }

    /// Returns all views.
    #[inline]
    pub fn views(&self) -> &[View] {
        &self.views
    }

    /// Looks up a view by name.
    pub fn view(&self, name: &str) -> Option<&View> {
        self.views.iter().find(|v| v.name() == name)
    }

    /// Returns the default view, the first one added.
    #[inline]
    pub fn default_view(&self) -> Option<&View> {
        self.views.first()
    }
}

/// Ordered collection of displays.
///
/// Order matters: it is the order displays appear in the written config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayManager {
    displays: Vec<Display>,
}

impl DisplayManager {
    /// Creates an empty manager.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a display.
    pub fn add_display(&mut self, display: Display) {
        self.displays.push(display);
    }

    /// Looks up a display by name.
    pub fn display(&self, name: &str) -> Option<&Display> {
        self.displays.iter().find(|d| d.name() == name)
    }

    /// Looks up a display, creating it when missing.
    pub fn ensure_display(&mut self, name: &str) -> &mut Display {
        if let Some(index) = self.displays.iter().position(|d| d.name() == name) {
            &mut self.displays[index]
        } else {
            self.displays.push(Display::new(name));
            let end = self.displays.len() - 1;
            &mut self.displays[end]
        }
    }

    /// Returns all displays, in insertion order.
    #[inline]
    pub fn displays(&self) -> &[Display] {
        &self.displays
    }

    /// Number of displays.
    #[inline]
    pub fn len(&self) -> usize {
        self.displays.len()
    }

    /// Checks if no displays are defined.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }
}
