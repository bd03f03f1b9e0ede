#![no_main]

use libfuzzer_sys::fuzz_target;
use run_path_editor::{MapScene, PathEditor};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut scene = MapScene::new();
    let mut editor = PathEditor::new(&mut scene);
    if editor.import_geojson(&mut scene, text).is_ok() {
        assert!(!editor.is_drawing_open());
        if editor.route().has_segment() {
            let _ = editor.export_geojson(Some(6));
        }
    } else {
        assert!(editor.route().is_empty());
        assert!(editor.is_drawing_open());
    }
});
