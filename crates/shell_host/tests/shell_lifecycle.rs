use pretty_assertions::assert_eq;
use shell_host::{
    AppLifecycle, ExitDecision, MemoryExternalUrlService, MemoryWindowHost, Platform, Shell,
    ShellServices, WindowConfig, WindowHost, WindowOpenResponse,
};
use std::rc::Rc;
use std::sync::Arc;

struct Harness {
    windows: MemoryWindowHost,
    urls: MemoryExternalUrlService,
    shell: Rc<Shell>,
    lifecycle: AppLifecycle,
}

fn harness(platform: Platform) -> Harness {
    let windows = MemoryWindowHost::default();
    let urls = MemoryExternalUrlService::default();
    let shell = Rc::new(Shell::new(
        ShellServices {
            windows: Rc::new(windows.clone()),
            external_urls: Arc::new(urls.clone()),
        },
        platform,
    ));
    let mut lifecycle = AppLifecycle::new(Rc::new(windows.clone()));
    shell.attach(&mut lifecycle);
    Harness {
        windows,
        urls,
        shell,
        lifecycle,
    }
}

#[test]
fn startup_creates_exactly_one_configured_window() {
    let h = harness(Platform::Linux);
    h.lifecycle.emit_ready();

    let created = h.windows.created();
    assert_eq!(created.len(), 1);
    let (label, config) = &created[0];
    assert_eq!(label.as_str(), "main");
    assert_eq!(config.width, 1200);
    assert_eq!(config.height, 800);
    assert_eq!(config.title, "MG Sender Pro");
    assert_eq!(config.entry_document, "index.html");
    assert_eq!(h.lifecycle.window_count(), 1);
}

#[test]
fn activate_with_no_windows_recreates_the_same_window() {
    let h = harness(Platform::MacOs);
    h.lifecycle.emit_ready();
    h.windows.close_all();
    assert_eq!(h.lifecycle.emit_all_windows_closed(), ExitDecision::StayResident);

    h.lifecycle.emit_activate();

    let created = h.windows.created();
    assert_eq!(created.len(), 2);
    assert_eq!(created[1].1, created[0].1);
    assert_eq!(created[1].1, WindowConfig::default());
    assert_eq!(h.windows.window_count(), 1);
}

#[test]
fn activate_with_open_windows_is_a_no_op() {
    let h = harness(Platform::MacOs);
    h.lifecycle.emit_ready();
    h.lifecycle.emit_activate();
    h.lifecycle.emit_activate();

    assert_eq!(h.windows.created().len(), 1);
    assert_eq!(h.shell.on_activate(), Ok(None));
}

#[test]
fn last_window_closing_quits_on_non_macos_platforms() {
    for platform in [Platform::Windows, Platform::Linux, Platform::Other] {
        let h = harness(platform);
        h.lifecycle.emit_ready();
        let label = h.windows.open_labels().remove(0);
        assert!(h.windows.close_window(&label));

        assert_eq!(
            h.lifecycle.emit_all_windows_closed(),
            ExitDecision::Quit,
            "platform {}",
            platform.as_str()
        );
        assert_eq!(h.windows.quit_requests(), 1);
    }
}

#[test]
fn last_window_closing_keeps_process_resident_on_macos() {
    let h = harness(Platform::MacOs);
    h.lifecycle.emit_ready();
    h.windows.close_all();

    assert_eq!(
        h.lifecycle.emit_all_windows_closed(),
        ExitDecision::StayResident
    );
    assert_eq!(h.windows.quit_requests(), 0);
}

#[test]
fn window_open_request_is_denied_and_sent_to_the_os_once() {
    let h = harness(Platform::Linux);
    h.lifecycle.emit_ready();
    let label = h.windows.open_labels().remove(0);

    let response = h.windows.request_window_open(&label, "https://example.com");

    assert_eq!(response, Some(WindowOpenResponse::Deny));
    assert_eq!(h.urls.opened(), vec!["https://example.com".to_string()]);
    assert_eq!(h.windows.window_count(), 1);
    assert_eq!(h.windows.created().len(), 1);
}

#[test]
fn reactivated_window_redirects_through_the_same_service() {
    let h = harness(Platform::MacOs);
    h.lifecycle.emit_ready();
    h.windows.close_all();
    h.lifecycle.emit_all_windows_closed();
    h.lifecycle.emit_activate();
    let label = h.windows.open_labels().remove(0);
    assert_eq!(label.as_str(), "main-2");

    assert_eq!(
        h.windows.request_window_open(&label, "https://example.com/docs"),
        Some(WindowOpenResponse::Deny)
    );
    assert_eq!(
        h.urls.opened(),
        vec!["https://example.com/docs".to_string()]
    );
}

#[test]
fn shell_window_open_request_matches_window_handler() {
    let h = harness(Platform::Linux);
    h.lifecycle.emit_ready();

    let response = h.shell.on_window_open_request("https://example.com");

    assert_eq!(response, WindowOpenResponse::Deny);
    assert_eq!(h.urls.opened(), vec!["https://example.com".to_string()]);
    assert_eq!(h.windows.window_count(), 1);
    assert_eq!(h.windows.created().len(), 1);
}

#[test]
fn failed_startup_window_leaves_shell_ready_without_windows() {
    let windows = MemoryWindowHost::default();
    windows.fail_creation("no display");
    let shell = Rc::new(Shell::new(
        ShellServices {
            windows: Rc::new(windows.clone()),
            external_urls: Arc::new(MemoryExternalUrlService::default()),
        },
        Platform::MacOs,
    ));
    let mut lifecycle = AppLifecycle::new(Rc::new(windows.clone()));
    shell.attach(&mut lifecycle);

    lifecycle.emit_ready();
    assert_eq!(windows.window_count(), 0);
    assert!(shell.is_ready());
}
