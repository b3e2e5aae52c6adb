//! Attribute identifiers.
//!
//! Each identifier is the exact HTML attribute name accepted by the picker
//! element. Dotted names address nested configuration, e.g.
//! `configure.licenseKey` is forwarded to the engine configuration call.

use std::{fmt, str::FromStr};

use crate::error::SchemaError;

/// A configurable attribute of the picker element.
///
/// Variants are declared in the same order as the schema table, and
/// [`Attribute::ALL`] preserves that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    AccessCamera,
    Camera,
    CameraSettings,
    CameraType,
    Configure,
    EnableCameraSwitcher,
    EnablePinchToZoom,
    EnableTapToFocus,
    EnableTorchToggle,
    GuiStyle,
    LaserArea,
    PlaySoundOnScan,
    ScanningPaused,
    SingleImageModeSettings,
    TargetScanningFps,
    VibrateOnScan,
    VideoFit,
    ViewfinderArea,
    Visible,
    ConfigureEngineLocation,
    ConfigureLicenseKey,
    ConfigurePreloadEngine,
    ConfigurePreloadBlurryRecognition,
    ScanSettingsBlurryRecognition,
    ScanSettingsCodeDirectionHint,
    ScanSettingsCodeDuplicateFilter,
    ScanSettingsEnabledSymbologies,
    ScanSettingsGpuAcceleration,
    ScanSettingsMaxNumberOfCodesPerFrame,
    ScanSettingsSearchArea,
}

impl Attribute {
    /// Number of declared attributes.
    pub const COUNT: usize = 30;

    /// Every attribute in declaration order.
    pub const ALL: [Attribute; Attribute::COUNT] = [
        Attribute::AccessCamera,
        Attribute::Camera,
        Attribute::CameraSettings,
        Attribute::CameraType,
        Attribute::Configure,
        Attribute::EnableCameraSwitcher,
        Attribute::EnablePinchToZoom,
        Attribute::EnableTapToFocus,
        Attribute::EnableTorchToggle,
        Attribute::GuiStyle,
        Attribute::LaserArea,
        Attribute::PlaySoundOnScan,
        Attribute::ScanningPaused,
        Attribute::SingleImageModeSettings,
        Attribute::TargetScanningFps,
        Attribute::VibrateOnScan,
        Attribute::VideoFit,
        Attribute::ViewfinderArea,
        Attribute::Visible,
        Attribute::ConfigureEngineLocation,
        Attribute::ConfigureLicenseKey,
        Attribute::ConfigurePreloadEngine,
        Attribute::ConfigurePreloadBlurryRecognition,
        Attribute::ScanSettingsBlurryRecognition,
        Attribute::ScanSettingsCodeDirectionHint,
        Attribute::ScanSettingsCodeDuplicateFilter,
        Attribute::ScanSettingsEnabledSymbologies,
        Attribute::ScanSettingsGpuAcceleration,
        Attribute::ScanSettingsMaxNumberOfCodesPerFrame,
        Attribute::ScanSettingsSearchArea,
    ];

    /// The HTML attribute name.
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::AccessCamera => "accessCamera",
            Attribute::Camera => "camera",
            Attribute::CameraSettings => "cameraSettings",
            Attribute::CameraType => "cameraType",
            Attribute::Configure => "configure",
            Attribute::EnableCameraSwitcher => "enableCameraSwitcher",
            Attribute::EnablePinchToZoom => "enablePinchToZoom",
            Attribute::EnableTapToFocus => "enableTapToFocus",
            Attribute::EnableTorchToggle => "enableTorchToggle",
            Attribute::GuiStyle => "guiStyle",
            Attribute::LaserArea => "laserArea",
            Attribute::PlaySoundOnScan => "playSoundOnScan",
            Attribute::ScanningPaused => "scanningPaused",
            Attribute::SingleImageModeSettings => "singleImageModeSettings",
            Attribute::TargetScanningFps => "targetScanningFPS",
            Attribute::VibrateOnScan => "vibrateOnScan",
            Attribute::VideoFit => "videoFit",
            Attribute::ViewfinderArea => "viewfinderArea",
            Attribute::Visible => "visible",
            Attribute::ConfigureEngineLocation => "configure.engineLocation",
            Attribute::ConfigureLicenseKey => "configure.licenseKey",
            Attribute::ConfigurePreloadEngine => "configure.preloadEngine",
            Attribute::ConfigurePreloadBlurryRecognition => "configure.preloadBlurryRecognition",
            Attribute::ScanSettingsBlurryRecognition => "scanSettings.blurryRecognition",
            Attribute::ScanSettingsCodeDirectionHint => "scanSettings.codeDirectionHint",
            Attribute::ScanSettingsCodeDuplicateFilter => "scanSettings.codeDuplicateFilter",
            Attribute::ScanSettingsEnabledSymbologies => "scanSettings.enabledSymbologies",
            Attribute::ScanSettingsGpuAcceleration => "scanSettings.gpuAcceleration",
            Attribute::ScanSettingsMaxNumberOfCodesPerFrame => {
                "scanSettings.maxNumberOfCodesPerFrame"
            }
            Attribute::ScanSettingsSearchArea => "scanSettings.searchArea",
        }
    }

    /// Position of this attribute in declaration order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Group prefix of a dotted name (`configure`, `scanSettings`), if any.
    pub fn group(self) -> Option<&'static str> {
        self.name().split_once('.').map(|(group, _)| group)
    }
}

/// All attribute identifiers in declaration order.
pub fn attributes() -> &'static [Attribute] {
    &Attribute::ALL
}

impl FromStr for Attribute {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .iter()
            .copied()
            .find(|a| a.name() == s)
            .ok_or_else(|| SchemaError::UnknownAttribute(s.to_string()))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
