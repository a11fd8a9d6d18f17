//! End-to-end checks with the shipped host implementations: real temp files
//! through [`LocalFileStore`], a real `sh` checker through
//! [`ProcessCheckRunner`].
#![cfg(unix)]

use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::rc::Rc;

use lint_hook::{
    Advisory, CheckCommand, CheckConfig, EditorSurface, FileCheckPlugin, FileEvent,
    FileEventListener, LocalFileStore, Mark, MarkSpec, ProcessCheckRunner, path_to_uri,
};

#[derive(Default)]
struct TerminalLog {
    specs: Vec<MarkSpec>,
    live: usize,
    advisories: Vec<Advisory>,
}

struct LiveMark(Rc<RefCell<TerminalLog>>);

impl Mark for LiveMark {
    fn clear(&mut self) {
        self.0.borrow_mut().live -= 1;
    }
}

struct TerminalSurface(Rc<RefCell<TerminalLog>>);

impl EditorSurface for TerminalSurface {
    fn mark_line(&mut self, _uri: &str, spec: &MarkSpec) -> Box<dyn Mark> {
        {
            let mut log = self.0.borrow_mut();
            log.specs.push(spec.clone());
            log.live += 1;
        }
        Box::new(LiveMark(Rc::clone(&self.0)))
    }

    fn show_advisory(&mut self, advisory: &Advisory) {
        self.0.borrow_mut().advisories.push(advisory.clone());
    }
}

/// A stand-in checker: flags line 2 whenever the input mentions `boom`.
fn boom_checker() -> CheckCommand {
    CheckCommand::new("sh").arg("-c").arg(
        r#"if grep -q boom; then printf 'File "x.py", line 2, in <module>\nSyntaxError: invalid syntax\n' >&2; fi"#,
    )
}

#[test]
fn test_checks_real_files_end_to_end() {
    let mut file = tempfile::Builder::new()
        .suffix(".py")
        .tempfile()
        .unwrap();
    writeln!(file, "print('first')").unwrap();
    writeln!(file, "boom").unwrap();
    file.flush().unwrap();

    let uri = path_to_uri(file.path());
    let config = CheckConfig {
        command: boom_checker(),
        ..CheckConfig::default()
    };

    let log = Rc::new(RefCell::new(TerminalLog::default()));
    let mut plugin = FileCheckPlugin::new(
        config,
        Box::new(LocalFileStore::new()),
        Box::new(ProcessCheckRunner::new()),
        Box::new(TerminalSurface(Rc::clone(&log))),
    );

    plugin.on_file_event(&FileEvent::save(uri.as_str()));
    {
        let log = log.borrow();
        assert_eq!(log.live, 1);
        assert_eq!(log.specs[0].line, 1);
        assert_eq!(log.specs[0].columns, 0..4);
        assert_eq!(log.advisories[0].message, "SyntaxError: invalid syntax");
    }

    // Fix the file; the next save clears the verdict.
    fs::write(file.path(), "print('first')\nprint('second')\n").unwrap();
    plugin.on_file_event(&FileEvent::save(uri.as_str()));
    assert_eq!(log.borrow().live, 0);
    assert!(!plugin.has_mark(&uri));
}

#[test]
fn test_config_file_drives_the_checker_choice() {
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        config_file,
        r#"{{ "extension": ".py", "command": {{ "program": "sh", "args": ["-c", "printf 'File \"x.py\", line 1, in <module>\nSyntaxError: empty\n' >&2"] }} }}"#
    )
    .unwrap();
    config_file.flush().unwrap();

    let config = CheckConfig::from_json_file(config_file.path()).unwrap();
    assert_eq!(config.command.program, "sh");

    let mut source = tempfile::Builder::new().suffix(".py").tempfile().unwrap();
    writeln!(source, "anything").unwrap();
    let uri = path_to_uri(source.path());

    let log = Rc::new(RefCell::new(TerminalLog::default()));
    let mut plugin = FileCheckPlugin::new(
        config,
        Box::new(LocalFileStore::new()),
        Box::new(ProcessCheckRunner::new()),
        Box::new(TerminalSurface(Rc::clone(&log))),
    );

    plugin.on_file_event(&FileEvent::open(uri.as_str()));
    assert_eq!(log.borrow().live, 1);
    assert_eq!(log.borrow().specs[0].line, 0);
}
