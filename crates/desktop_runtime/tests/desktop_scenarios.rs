use desktop_runtime::{
    AppManifest, ControlButton, DesktopConfig, DesktopRuntime, PointerPosition, PointerTarget,
    ResizeEdge, SurfaceRegion, Viewport, WindowId, WindowRect,
};
use pretty_assertions::assert_eq;

fn runtime() -> DesktopRuntime {
    DesktopRuntime::new(
        DesktopConfig::default(),
        AppManifest::builtin().expect("builtin manifest"),
        Viewport {
            width: 1366,
            height: 768,
        },
    )
}

fn rect(rt: &DesktopRuntime, id: &WindowId) -> WindowRect {
    rt.windows().window(id).expect("window").surface.rect
}

#[test]
fn opening_telegram_twice_keeps_one_window_and_raises_it() {
    let mut rt = runtime();
    let first = rt.launch("Telegram").expect("open");
    rt.launch("Settings").expect("open settings");
    let z_before = rt.windows().window(&first).expect("window").surface.z_index;

    let second = rt.launch("Telegram").expect("reopen");
    assert_eq!(first, second);
    assert_eq!(first.as_str(), "Telegram");
    let telegram_windows = rt
        .windows()
        .windows()
        .iter()
        .filter(|w| w.id == first)
        .count();
    assert_eq!(telegram_windows, 1);
    assert!(rt.windows().window(&first).expect("window").surface.z_index > z_before);
}

#[test]
fn closing_b_hands_focus_and_taskbar_mark_to_a() {
    let mut rt = runtime();
    let a = rt.launch("File Explorer").expect("a");
    let b = rt.launch("Edge Browser").expect("b");

    rt.pointer_down(
        PointerTarget::Window(&b, SurfaceRegion::Control(ControlButton::Close)),
        PointerPosition::default(),
    );

    assert_eq!(rt.windows().focused(), Some(&a));
    assert!(rt.windows().window(&a).expect("a").surface.active);
    let shell = rt.shell();
    assert!(shell.taskbar_item(&a).expect("a icon").active);
    let b_icon = shell.taskbar_item(&b).expect("pinned b icon");
    assert!(!b_icon.running && !b_icon.active);
}

#[test]
fn dragging_far_past_the_corner_clamps_to_origin() {
    let mut rt = runtime();
    let id = rt.launch("Microsoft Store").expect("open");
    assert_eq!((rect(&rt, &id).x, rect(&rt, &id).y), (100, 50));

    let grab = PointerPosition::new(400, 60);
    rt.pointer_down(PointerTarget::Window(&id, SurfaceRegion::TitleBar), grab);
    rt.pointer_move(PointerPosition::new(grab.x - 500, grab.y - 500));
    rt.pointer_up();

    assert_eq!((rect(&rt, &id).x, rect(&rt, &id).y), (0, 0));
}

#[test]
fn east_and_west_resizes_respect_the_origin_rules() {
    let mut rt = runtime();
    let id = rt.launch("VS Code").expect("open");
    let before = rect(&rt, &id);

    rt.pointer_down(
        PointerTarget::Window(&id, SurfaceRegion::ResizeHandle(ResizeEdge::East)),
        PointerPosition::new(899, 300),
    );
    for x in [700, 400, 100, 1200] {
        rt.pointer_move(PointerPosition::new(x, 300));
        let now = rect(&rt, &id);
        assert_eq!((now.x, now.y), (before.x, before.y));
    }
    rt.pointer_up();

    let before = rect(&rt, &id);
    rt.pointer_down(
        PointerTarget::Window(&id, SurfaceRegion::ResizeHandle(ResizeEdge::West)),
        PointerPosition::new(before.x, 300),
    );
    rt.pointer_move(PointerPosition::new(before.x + 100, 300));
    let shrunk = rect(&rt, &id);
    assert_eq!((shrunk.x, shrunk.w), (before.x + 100, before.w - 100));

    rt.pointer_move(PointerPosition::new(before.x + 5000, 300));
    let floored = rect(&rt, &id);
    assert_eq!(floored.w, 300);
    assert_eq!(floored.x, shrunk.x);
    rt.pointer_up();
}

#[test]
fn maximize_then_restore_is_exact() {
    let mut rt = runtime();
    let id = rt.launch("Settings").expect("open");
    rt.pointer_down(
        PointerTarget::Window(&id, SurfaceRegion::TitleBar),
        PointerPosition::new(300, 60),
    );
    rt.pointer_move(PointerPosition::new(337, 83));
    rt.pointer_up();
    let normal = rect(&rt, &id);

    rt.windows_mut().toggle_maximize(&id);
    assert_eq!(
        rect(&rt, &id),
        WindowRect {
            x: 0,
            y: 0,
            w: 1366,
            h: 720
        }
    );
    assert!(rt
        .pointer_down(
            PointerTarget::Window(&id, SurfaceRegion::TitleBar),
            PointerPosition::new(300, 10),
        )
        .is_empty());
    assert!(!rt.pointer_move(PointerPosition::new(10, 10)));

    rt.windows_mut().toggle_maximize(&id);
    assert_eq!(rect(&rt, &id), normal);
}

#[test]
fn unknown_windows_are_ignored_everywhere() {
    let mut rt = runtime();
    let ghost = WindowId::from_app_name("Nobody Home");
    assert!(rt
        .pointer_down(
            PointerTarget::Window(&ghost, SurfaceRegion::TitleBar),
            PointerPosition::default(),
        )
        .is_empty());
    assert!(!rt.windows_mut().close(&ghost));
    assert!(!rt.click_taskbar(&ghost));
    assert!(rt.interaction().is_idle());
    assert!(rt.windows().windows().is_empty());
}
