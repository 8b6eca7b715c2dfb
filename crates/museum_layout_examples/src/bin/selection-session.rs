use glam::Vec3;
use museum_layout::prelude::*;
use museum_layout_examples::{init_tracing, load_catalog, manifest_path};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let catalog = load_catalog(manifest_path("assets/data.json"))?;
    let arrangement = arrange_spiral(&catalog, &ArrangeConfig::default())?;
    let mut controller = SelectionController::new(&arrangement);

    let front = CameraPose::new(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO);
    let behind = CameraPose::new(Vec3::new(0.3, -0.2, -2.0), Vec3::new(-3.0, 0.1, 3.1));

    // A visitor hovers one exhibit, inspects it, then turns round and picks another.
    let script = vec![
        SelectionInput::PointerOver("mask-02".into()),
        SelectionInput::PointerOut("mask-02".into()),
        SelectionInput::PointerOver("astrolabe-03".into()),
        SelectionInput::Pressed {
            id: "astrolabe-03".into(),
            camera: front,
        },
        SelectionInput::PointerOver("mask-02".into()),
        SelectionInput::ZoomFinished("astrolabe-03".into()),
        SelectionInput::HighResReady("astrolabe-03".into()),
        SelectionInput::Pressed {
            id: "stele-07".into(),
            camera: behind,
        },
        SelectionInput::ZoomFinished("stele-07".into()),
        SelectionInput::HighResFailed("stele-07".into()),
        SelectionInput::Dismiss,
        SelectionInput::ZoomFinished("stele-07".into()),
    ];

    let mut sink = FnSink::new(|command: Command| info!("  -> {command:?}"));
    for input in script {
        info!("{input:?}");
        controller.dispatch(input, &mut sink)?;
    }

    info!(
        "Selected: {:?}; controls enabled: {}.",
        controller.selected(),
        controller.controls_enabled()
    );
    Ok(())
}
