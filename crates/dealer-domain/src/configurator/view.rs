//! View/overlay state for the configurator preview.
//!
//! Deliberately separate from [`VehicleConfiguration`]: nothing here is
//! readable by the price calculator, so camera spins and overlay toggles
//! can never change the total.

use crate::catalog::OptionKind;
use serde::{Deserialize, Serialize};

/// Camera angle of the vehicle preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CameraAngle {
    #[default]
    Front,
    Side,
    Rear,
    Interior,
}

impl CameraAngle {
    pub fn display_name(&self) -> &'static str {
        match self {
            CameraAngle::Front => "Front",
            CameraAngle::Side => "Side",
            CameraAngle::Rear => "Rear",
            CameraAngle::Interior => "Interior",
        }
    }

    /// The next angle in the rotation cycle.
    pub fn rotate(&self) -> CameraAngle {
        match self {
            CameraAngle::Front => CameraAngle::Side,
            CameraAngle::Side => CameraAngle::Rear,
            CameraAngle::Rear => CameraAngle::Interior,
            CameraAngle::Interior => CameraAngle::Front,
        }
    }
}

/// Independent UI state of the configurator screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ViewState {
    /// Current preview camera angle.
    pub camera: CameraAngle,
    /// Option kind currently highlighted on the preview, if any.
    pub highlight: Option<OptionKind>,
    /// Whether the selected-options drawer is open.
    pub options_drawer_open: bool,
}

impl ViewState {
    /// Advance the camera to the next angle.
    pub fn rotate_camera(&mut self) {
        self.camera = self.camera.rotate();
    }

    /// Highlight one option kind on the preview.
    pub fn set_highlight(&mut self, kind: OptionKind) {
        self.highlight = Some(kind);
    }

    /// Remove any highlight overlay.
    pub fn clear_highlight(&mut self) {
        self.highlight = None;
    }

    /// Open or collapse the selected-options drawer.
    pub fn toggle_drawer(&mut self) {
        self.options_drawer_open = !self.options_drawer_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_rotation_cycles() {
        let mut view = ViewState::default();
        assert_eq!(view.camera, CameraAngle::Front);
        for _ in 0..4 {
            view.rotate_camera();
        }
        assert_eq!(view.camera, CameraAngle::Front);
    }

    #[test]
    fn test_highlight_set_and_clear() {
        let mut view = ViewState::default();
        view.set_highlight(OptionKind::Wheel);
        assert_eq!(view.highlight, Some(OptionKind::Wheel));
        view.clear_highlight();
        assert!(view.highlight.is_none());
    }

    #[test]
    fn test_drawer_toggle() {
        let mut view = ViewState::default();
        view.toggle_drawer();
        assert!(view.options_drawer_open);
        view.toggle_drawer();
        assert!(!view.options_drawer_open);
    }
}
