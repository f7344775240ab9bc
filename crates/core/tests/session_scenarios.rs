//! End-to-end scenarios: scan a directory, open sessions, inject into documents

use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tempfile::TempDir;
use uc_loader_core::{
    BlockList, DocumentContext, DocumentId, Host, Loader, LoaderConfig, OverlayDocument,
    RegistryPool, ScanReport, ScanRoot, Scanner, ScriptKind, Session, SessionContext,
    SessionState, TaskQueue, UnitSource, scanner::ExtensionSets, session::DocumentPhase,
};

const PRIMARY: &str = "chrome://browser/content/browser.xhtml";

#[derive(Default)]
struct RecordingHost {
    executed: RefCell<Vec<(DocumentId, String)>>,
    overlays: RefCell<Vec<(DocumentId, OverlayDocument)>>,
}

impl Host for RecordingHost {
    fn primary_url(&self) -> String {
        PRIMARY.to_string()
    }

    fn execute_in_context(&self, location: &str, document: &DocumentContext) {
        self.executed
            .borrow_mut()
            .push((document.id, location.to_string()));
    }

    fn load_overlay_document(&self, overlay: &OverlayDocument, document: &DocumentContext) {
        self.overlays
            .borrow_mut()
            .push((document.id, overlay.clone()));
    }

    fn host_version_satisfies(&self, _min_version: &str) -> bool {
        true
    }
}

/// Real scanner wrapped with a call counter
struct CountingScanner {
    inner: Scanner,
    scans: AtomicUsize,
}

impl UnitSource for CountingScanner {
    fn scan(&self) -> ScanReport {
        self.scans.fetch_add(1, Ordering::SeqCst);
        self.inner.scan()
    }
}

fn write_scripts(dir: &std::path::Path) {
    fs::write(dir.join("a.uc.js"), "(function () {})();\n").unwrap();
    fs::write(
        dir.join("b.uc.xul"),
        "<!--\n// ==UserScript==\n// @name Panel overlay\n// @include chrome://x/y.xul\n// ==/UserScript==\n-->\n<overlay/>\n",
    )
    .unwrap();
    fs::write(
        dir.join("c.uc.xul"),
        "<!--\n// ==UserScript==\n// @include *\n// @exclude about:*\n// ==/UserScript==\n-->\n",
    )
    .unwrap();
    fs::write(
        dir.join("d.uc.js"),
        "// ==UserScript==\n// @exclude main\n// ==/UserScript==\n",
    )
    .unwrap();
    fs::write(dir.join("README.md"), "not a script").unwrap();
}

fn context(
    dir: &std::path::Path,
    host: Rc<RecordingHost>,
) -> (SessionContext, Arc<CountingScanner>) {
    let scanner = Arc::new(CountingScanner {
        inner: Scanner::new(
            vec![ScanRoot::new(dir, false)],
            ExtensionSets::new(&["uc.js"], &["uc.xul"]),
        ),
        scans: AtomicUsize::new(0),
    });
    let ctx = SessionContext {
        host,
        block_policy: Rc::new(BlockList::new(&["about:blank"], PRIMARY).unwrap()),
        pool: Arc::new(RegistryPool::new(scanner.clone())),
        queue: Rc::new(TaskQueue::new()),
        loader: Rc::new(Loader::default()),
        min_host_version: None,
    };
    (ctx, scanner)
}

#[test]
fn test_scan_classifies_and_matches() {
    let temp_dir = TempDir::new().unwrap();
    write_scripts(temp_dir.path());

    let report = Scanner::new(
        vec![ScanRoot::new(temp_dir.path(), false)],
        ExtensionSets::new(&["uc.js"], &["uc.xul"]),
    )
    .scan();
    assert_eq!(report.count(ScriptKind::Executable), 2);
    assert_eq!(report.count(ScriptKind::Overlay), 2);

    let registry = uc_loader_core::Registry::from_report(report);
    let selection = Loader::default().select(&registry, "chrome://x/y.xul", PRIMARY);

    assert!(selection.to_execute.is_empty());
    let overlay_names: Vec<&str> = selection.to_overlay.iter().map(|u| u.file_name()).collect();
    assert_eq!(overlay_names, vec!["b.uc.xul", "c.uc.xul"]);
}

#[test]
fn test_primary_document_injection() {
    let temp_dir = TempDir::new().unwrap();
    write_scripts(temp_dir.path());
    let host = Rc::new(RecordingHost::default());
    let (ctx, _scanner) = context(temp_dir.path(), host.clone());

    let session = Session::open("window-1".into(), DocumentContext::new(1, PRIMARY), ctx.clone())
        .unwrap();
    assert!(host.executed.borrow().is_empty());

    ctx.queue.run_until_idle();

    // a.uc.js has no rules and applies to the primary document; d.uc.js
    // excludes it explicitly
    let executed = host.executed.borrow();
    assert_eq!(executed.len(), 1);
    assert!(executed[0].1.contains("/a.uc.js?"));

    let overlays = host.overlays.borrow();
    assert_eq!(overlays.len(), 1);
    assert_eq!(overlays[0].1.len(), 1);
    assert!(overlays[0].1.hrefs()[0].contains("/c.uc.xul?"));
    assert_eq!(session.document_phase(DocumentId(1)), Some(DocumentPhase::Idle));
}

#[test]
fn test_auxiliary_documents_share_registry() {
    let temp_dir = TempDir::new().unwrap();
    write_scripts(temp_dir.path());
    let host = Rc::new(RecordingHost::default());
    let (ctx, scanner) = context(temp_dir.path(), host.clone());

    let main = Session::open("window-1".into(), DocumentContext::new(1, PRIMARY), ctx.clone())
        .unwrap();
    let sibling = Session::open(
        "window-1".into(),
        DocumentContext::new(10, "chrome://browser/content/places/places.xhtml"),
        ctx.clone(),
    )
    .unwrap();

    assert_eq!(scanner.scans.load(Ordering::SeqCst), 1);
    assert!(main.owns_registry());
    assert!(!sibling.owns_registry());
    assert!(Arc::ptr_eq(main.registry().unwrap(), sibling.registry().unwrap()));

    assert!(main.observe_document(DocumentContext::new(2, "chrome://x/y.xul")));
    ctx.queue.run_until_idle();

    let overlays = host.overlays.borrow();
    let panel: Vec<_> = overlays.iter().filter(|(id, _)| *id == DocumentId(2)).collect();
    assert_eq!(panel.len(), 1);
    assert_eq!(panel[0].1.len(), 2);
    assert!(panel[0].1.hrefs()[0].contains("/b.uc.xul?"));
    assert!(panel[0].1.hrefs()[1].contains("/c.uc.xul?"));
    assert_eq!(scanner.scans.load(Ordering::SeqCst), 1);
}

#[test]
fn test_independent_window_groups_scan_once_each() {
    let temp_dir = TempDir::new().unwrap();
    write_scripts(temp_dir.path());
    let host = Rc::new(RecordingHost::default());
    let (ctx, scanner) = context(temp_dir.path(), host);

    let _a = Session::open("a".into(), DocumentContext::new(1, PRIMARY), ctx.clone()).unwrap();
    let _b = Session::open("b".into(), DocumentContext::new(2, PRIMARY), ctx.clone()).unwrap();
    let _a2 = Session::open("a".into(), DocumentContext::new(3, PRIMARY), ctx.clone()).unwrap();

    assert_eq!(scanner.scans.load(Ordering::SeqCst), 2);
}

#[test]
fn test_gate_failure_leaves_siblings_untouched() {
    let temp_dir = TempDir::new().unwrap();
    write_scripts(temp_dir.path());
    let host = Rc::new(RecordingHost::default());
    let (ctx, scanner) = context(temp_dir.path(), host.clone());

    let main = Session::open("w".into(), DocumentContext::new(1, PRIMARY), ctx.clone()).unwrap();
    let blocked = Session::open("w".into(), DocumentContext::new(2, "about:blank"), ctx.clone());
    assert!(blocked.is_err());

    assert_eq!(ctx.pool.holders(&"w".into()), 1);
    assert_eq!(main.state(), SessionState::Ready);
    assert_eq!(scanner.scans.load(Ordering::SeqCst), 1);

    ctx.queue.run_until_idle();
    assert!(host.executed.borrow().iter().all(|(id, _)| *id == DocumentId(1)));
}

#[test]
fn test_torn_down_session_never_injects() {
    let temp_dir = TempDir::new().unwrap();
    write_scripts(temp_dir.path());
    let host = Rc::new(RecordingHost::default());
    let (ctx, _scanner) = context(temp_dir.path(), host.clone());

    let mut session =
        Session::open("w".into(), DocumentContext::new(1, PRIMARY), ctx.clone()).unwrap();
    session.teardown();
    ctx.queue.run_until_idle();

    assert!(host.executed.borrow().is_empty());
    assert!(host.overlays.borrow().is_empty());
    assert!(!ctx.pool.contains(&"w".into()));
}

#[test]
fn test_context_from_config() {
    let temp_dir = TempDir::new().unwrap();
    write_scripts(temp_dir.path());
    let config = LoaderConfig {
        base_dir: Some(temp_dir.path().to_path_buf()),
        disabled: vec!["a.uc.js".to_string()],
        ..Default::default()
    };
    let host = Rc::new(RecordingHost::default());
    let ctx = SessionContext::from_config(&config, host.clone()).unwrap();

    let _session =
        Session::open("w".into(), DocumentContext::new(1, PRIMARY), ctx.clone()).unwrap();
    ctx.queue.run_until_idle();

    assert!(host.executed.borrow().is_empty());
    assert_eq!(host.overlays.borrow().len(), 1);
}
