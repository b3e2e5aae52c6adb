use std::ops::Index;

use once_cell::sync::OnceCell;

use crate::{
    attribute::{Attribute, attributes},
    data::item::{DefaultValue, SchemaEntry, TypeTag},
    sdk::{CameraType, CodeDirection, GuiStyle, VideoFit},
};

static SCHEMA: OnceCell<Schema> = OnceCell::new();

/// Get the process-wide schema table.
///
/// The table is built on first use and every later call returns the same
/// instance. Concurrent first calls block until one of them has built it.
pub fn get_schema() -> &'static Schema {
    SCHEMA.get_or_init(|| {
        let schema = Schema::build();
        debug!("attribute schema built with {} entries", schema.len());
        schema
    })
}

/// Immutable mapping from attribute to its schema entry.
///
/// Entries are stored in declaration order and indexed by
/// [`Attribute::index`], so every attribute has exactly one entry.
#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    entries: [SchemaEntry; Attribute::COUNT],
}

impl Schema {
    pub(crate) fn build() -> Self {
        Self {
            entries: Attribute::ALL.map(entry_for),
        }
    }

    /// Entry of an attribute.
    pub fn get(&self, attr: Attribute) -> &SchemaEntry {
        &self.entries[attr.index()]
    }

    /// Entry of an attribute given by name, if the name is declared.
    pub fn lookup(&self, name: &str) -> Option<&SchemaEntry> {
        name.parse::<Attribute>().ok().map(|attr| self.get(attr))
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Attribute, &SchemaEntry)> + '_ {
        attributes().iter().copied().zip(self.entries.iter())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<Attribute> for Schema {
    type Output = SchemaEntry;

    fn index(&self, attr: Attribute) -> &SchemaEntry {
        self.get(attr)
    }
}

impl Index<&str> for Schema {
    type Output = SchemaEntry;

    /// # Panics
    ///
    /// Panics if `name` is not a declared attribute; use [`Schema::lookup`]
    /// for untrusted names.
    fn index(&self, name: &str) -> &SchemaEntry {
        match self.lookup(name) {
            Some(entry) => entry,
            None => panic!("unknown attribute: {name:?}"),
        }
    }
}

fn entry_for(attr: Attribute) -> SchemaEntry {
    use DefaultValue as D;
    use TypeTag as T;

    match attr {
        Attribute::AccessCamera => SchemaEntry::new(T::Boolean, D::Boolean(true)),
        Attribute::Camera => SchemaEntry::required(T::Camera),
        Attribute::CameraSettings => SchemaEntry::required(T::CameraSettings),
        Attribute::CameraType => SchemaEntry::new(T::CameraType, D::CameraType(CameraType::Back)),
        Attribute::Configure => SchemaEntry::new(T::Boolean, D::Boolean(true)),
        Attribute::EnableCameraSwitcher => SchemaEntry::new(T::Boolean, D::Boolean(true)),
        Attribute::EnablePinchToZoom => SchemaEntry::new(T::Boolean, D::Boolean(true)),
        Attribute::EnableTapToFocus => SchemaEntry::new(T::Boolean, D::Boolean(true)),
        Attribute::EnableTorchToggle => SchemaEntry::new(T::Boolean, D::Boolean(true)),
        Attribute::GuiStyle => SchemaEntry::new(T::GuiStyle, D::GuiStyle(GuiStyle::Laser)),
        Attribute::LaserArea => SchemaEntry::required(T::SearchArea),
        Attribute::PlaySoundOnScan => SchemaEntry::new(T::Boolean, D::Boolean(true)),
        Attribute::ScanningPaused => SchemaEntry::new(T::Boolean, D::Boolean(false)),
        Attribute::SingleImageModeSettings => SchemaEntry::required(T::SingleImageModeSettings),
        Attribute::TargetScanningFps => SchemaEntry::new(T::Integer, D::Integer(30)),
        Attribute::VibrateOnScan => SchemaEntry::new(T::Boolean, D::Boolean(false)),
        Attribute::VideoFit => SchemaEntry::new(T::VideoFit, D::VideoFit(VideoFit::Contain)),
        Attribute::ViewfinderArea => SchemaEntry::required(T::SearchArea),
        Attribute::Visible => SchemaEntry::new(T::Boolean, D::Boolean(true)),
        Attribute::ConfigureEngineLocation => SchemaEntry::new(T::String, D::String("/")),
        Attribute::ConfigureLicenseKey => SchemaEntry::new(T::String, D::String("")),
        Attribute::ConfigurePreloadEngine => SchemaEntry::new(T::Boolean, D::Boolean(true)),
        Attribute::ConfigurePreloadBlurryRecognition => {
            SchemaEntry::new(T::Boolean, D::Boolean(true))
        }
        Attribute::ScanSettingsBlurryRecognition => SchemaEntry::new(T::Boolean, D::Boolean(true)),
        Attribute::ScanSettingsCodeDirectionHint => SchemaEntry::new(
            T::CodeDirection,
            D::CodeDirection(CodeDirection::LeftToRight),
        ),
        Attribute::ScanSettingsCodeDuplicateFilter => SchemaEntry::new(T::Integer, D::Integer(0)),
        Attribute::ScanSettingsEnabledSymbologies => SchemaEntry::new(T::Array, D::Array(&[])),
        Attribute::ScanSettingsGpuAcceleration => SchemaEntry::new(T::Boolean, D::Boolean(true)),
        Attribute::ScanSettingsMaxNumberOfCodesPerFrame => {
            SchemaEntry::new(T::Integer, D::Integer(1))
        }
        Attribute::ScanSettingsSearchArea => SchemaEntry::required(T::SearchArea),
    }
}
