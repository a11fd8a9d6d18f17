//! Minimal embedding: the shipped filesystem store and subprocess runner
//! wired to a custom surface, driven by synthetic open/save events.
//!
//! Needs `python3` on PATH (the default checker). Run with:
//! `cargo run -p lint-hook --example check_once`

use lint_hook::{
    Advisory, CheckConfig, EditorSurface, FileCheckPlugin, FileEvent, FileEventListener,
    LocalFileStore, Mark, MarkSpec, ProcessCheckRunner, path_to_uri,
};

struct StdoutMark;

impl Mark for StdoutMark {
    fn clear(&mut self) {
        println!("(mark withdrawn)");
    }
}

struct StdoutSurface;

impl EditorSurface for StdoutSurface {
    fn mark_line(&mut self, uri: &str, spec: &MarkSpec) -> Box<dyn Mark> {
        println!(
            "{uri}: mark line {} columns {:?} [{}]",
            spec.line + 1,
            spec.columns,
            spec.style_class
        );
        Box::new(StdoutMark)
    }

    fn show_advisory(&mut self, advisory: &Advisory) {
        println!("-- {} --", advisory.title);
        println!("Error on line {}: {}", advisory.line, advisory.message);
        println!("Suggested fix: {}", advisory.suggestion);
    }
}

fn main() {
    let demo = std::env::temp_dir().join("lint_hook_demo.py");
    std::fs::write(&demo, "import os\n\ndef main():\nprint('broken')\n").unwrap();
    let uri = path_to_uri(&demo);

    let mut plugin = FileCheckPlugin::new(
        CheckConfig::default(),
        Box::new(LocalFileStore::new()),
        Box::new(ProcessCheckRunner::new()),
        Box::new(StdoutSurface),
    );

    println!("== open (broken) ==");
    plugin.on_file_event(&FileEvent::open(uri.as_str()));

    std::fs::write(&demo, "import os\n\ndef main():\n    print('fixed')\n").unwrap();
    println!("== save (fixed) ==");
    plugin.on_file_event(&FileEvent::save(uri.as_str()));

    plugin.shutdown();
    let _ = std::fs::remove_file(&demo);
}
