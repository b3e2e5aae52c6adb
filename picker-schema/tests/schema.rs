use std::thread;

use picker_schema::{
    Attribute, DefaultValue, SchemaEntry, TypeTag, attributes, get_schema,
    sdk::{CameraType, CodeDirection, GuiStyle, VideoFit},
};

#[test]
fn test_get_schema_returns_same_instance() {
    let _ = env_logger::builder().is_test(true).try_init();

    let a = get_schema();
    let b = get_schema();
    assert!(std::ptr::eq(a, b));
}

#[test]
fn test_concurrent_first_access() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| get_schema() as *const _ as usize))
        .collect();
    let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(addrs[0], get_schema() as *const _ as usize);
}

#[test]
fn test_every_attribute_has_one_entry() {
    let schema = get_schema();
    assert_eq!(schema.len(), attributes().len());
    for attr in attributes() {
        assert!(schema.lookup(attr.name()).is_some(), "{attr} missing");
    }
    let iterated: Vec<_> = schema.iter().map(|(attr, _)| attr).collect();
    assert_eq!(iterated, attributes());
}

#[test]
fn test_attribute_names_in_declaration_order() {
    let names: Vec<_> = attributes().iter().map(|a| a.name()).collect();
    assert_eq!(
        names,
        [
            "accessCamera",
            "camera",
            "cameraSettings",
            "cameraType",
            "configure",
            "enableCameraSwitcher",
            "enablePinchToZoom",
            "enableTapToFocus",
            "enableTorchToggle",
            "guiStyle",
            "laserArea",
            "playSoundOnScan",
            "scanningPaused",
            "singleImageModeSettings",
            "targetScanningFPS",
            "vibrateOnScan",
            "videoFit",
            "viewfinderArea",
            "visible",
            "configure.engineLocation",
            "configure.licenseKey",
            "configure.preloadEngine",
            "configure.preloadBlurryRecognition",
            "scanSettings.blurryRecognition",
            "scanSettings.codeDirectionHint",
            "scanSettings.codeDuplicateFilter",
            "scanSettings.enabledSymbologies",
            "scanSettings.gpuAcceleration",
            "scanSettings.maxNumberOfCodesPerFrame",
            "scanSettings.searchArea",
        ]
    );
}

#[test]
fn test_full_table() {
    use DefaultValue as D;
    use TypeTag as T;

    let expected: [(&str, TypeTag, Option<DefaultValue>); 30] = [
        ("accessCamera", T::Boolean, Some(D::Boolean(true))),
        ("camera", T::Camera, None),
        ("cameraSettings", T::CameraSettings, None),
        ("cameraType", T::CameraType, Some(D::CameraType(CameraType::Back))),
        ("configure", T::Boolean, Some(D::Boolean(true))),
        ("enableCameraSwitcher", T::Boolean, Some(D::Boolean(true))),
        ("enablePinchToZoom", T::Boolean, Some(D::Boolean(true))),
        ("enableTapToFocus", T::Boolean, Some(D::Boolean(true))),
        ("enableTorchToggle", T::Boolean, Some(D::Boolean(true))),
        ("guiStyle", T::GuiStyle, Some(D::GuiStyle(GuiStyle::Laser))),
        ("laserArea", T::SearchArea, None),
        ("playSoundOnScan", T::Boolean, Some(D::Boolean(true))),
        ("scanningPaused", T::Boolean, Some(D::Boolean(false))),
        ("singleImageModeSettings", T::SingleImageModeSettings, None),
        ("targetScanningFPS", T::Integer, Some(D::Integer(30))),
        ("vibrateOnScan", T::Boolean, Some(D::Boolean(false))),
        ("videoFit", T::VideoFit, Some(D::VideoFit(VideoFit::Contain))),
        ("viewfinderArea", T::SearchArea, None),
        ("visible", T::Boolean, Some(D::Boolean(true))),
        ("configure.engineLocation", T::String, Some(D::String("/"))),
        ("configure.licenseKey", T::String, Some(D::String(""))),
        ("configure.preloadEngine", T::Boolean, Some(D::Boolean(true))),
        ("configure.preloadBlurryRecognition", T::Boolean, Some(D::Boolean(true))),
        ("scanSettings.blurryRecognition", T::Boolean, Some(D::Boolean(true))),
        (
            "scanSettings.codeDirectionHint",
            T::CodeDirection,
            Some(D::CodeDirection(CodeDirection::LeftToRight)),
        ),
        ("scanSettings.codeDuplicateFilter", T::Integer, Some(D::Integer(0))),
        ("scanSettings.enabledSymbologies", T::Array, Some(D::Array(&[]))),
        ("scanSettings.gpuAcceleration", T::Boolean, Some(D::Boolean(true))),
        ("scanSettings.maxNumberOfCodesPerFrame", T::Integer, Some(D::Integer(1))),
        ("scanSettings.searchArea", T::SearchArea, None),
    ];

    let schema = get_schema();
    for (name, ty, default) in expected {
        let entry = schema.lookup(name).unwrap_or_else(|| panic!("{name} missing"));
        assert_eq!(entry, &SchemaEntry { ty, default }, "{name}");
    }
}

#[test]
fn test_index_by_name() {
    let schema = get_schema();
    assert_eq!(
        schema["targetScanningFPS"],
        SchemaEntry {
            ty: TypeTag::Integer,
            default: Some(DefaultValue::Integer(30)),
        }
    );
    assert_eq!(
        schema["camera"],
        SchemaEntry {
            ty: TypeTag::Camera,
            default: None,
        }
    );
    assert_eq!(schema[Attribute::Camera], schema["camera"]);
}

#[test]
fn test_entries_without_default() {
    let required: Vec<_> = get_schema()
        .iter()
        .filter(|(_, entry)| entry.default.is_none())
        .map(|(attr, _)| attr.name())
        .collect();
    assert_eq!(
        required,
        [
            "camera",
            "cameraSettings",
            "laserArea",
            "singleImageModeSettings",
            "viewfinderArea",
            "scanSettings.searchArea",
        ]
    );
}

#[test]
fn test_defaults_match_their_tags() {
    for (attr, entry) in get_schema().iter() {
        if let Some(default) = entry.default {
            assert!(entry.ty.matches(&default.as_json()), "{attr}");
        }
    }
}

#[test]
fn test_copies_do_not_affect_table() {
    let schema = get_schema();
    let mut entry = *schema.get(Attribute::Visible);
    entry.default = Some(DefaultValue::Boolean(false));

    assert_ne!(&entry, schema.get(Attribute::Visible));
    assert_eq!(
        get_schema().get(Attribute::Visible).default,
        Some(DefaultValue::Boolean(true))
    );
}
