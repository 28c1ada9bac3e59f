//! Whole-flow tests: a dotfile maintained by repeated injections.

use inject_blocks::{InjectRequest, inject};
use inject_fs::read_lines;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ALIASES_BEGIN: &str = "# >>> aliases (managed) >>>";
const ALIASES_END: &str = "# <<< aliases (managed) <<<";
const PROMPT_BEGIN: &str = "# >>> prompt (managed) >>>";
const PROMPT_END: &str = "# <<< prompt (managed) <<<";

fn backups_of(dir: &Path, name: &str) -> usize {
    let prefix = format!("{}-", name);
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with(&prefix))
        .count()
}

#[test]
fn test_two_independent_blocks_in_one_dotfile() {
    let home = TempDir::new().unwrap();
    let bashrc = home.path().join(".bashrc");
    let aliases = home.path().join("aliases.sh");
    let prompt = home.path().join("prompt.sh");
    fs::write(&bashrc, "# user settings\nexport EDITOR=vim\n").unwrap();
    fs::write(&aliases, "alias ll='ls -l'\n").unwrap();
    fs::write(&prompt, "PS1='$ '\n").unwrap();

    let alias_req = InjectRequest::new(&bashrc, &aliases, ALIASES_BEGIN, ALIASES_END).unwrap();
    let prompt_req = InjectRequest::new(&bashrc, &prompt, PROMPT_BEGIN, PROMPT_END).unwrap();

    inject(&alias_req).unwrap();
    inject(&prompt_req).unwrap();

    fs::write(&aliases, "alias ll='ls -la'\nalias gs='git status'\n").unwrap();
    inject(&alias_req).unwrap();

    assert_eq!(
        read_lines(&bashrc).unwrap(),
        vec![
            "# user settings",
            "export EDITOR=vim",
            "",
            PROMPT_BEGIN,
            "PS1='$ '",
            PROMPT_END,
            "",
            ALIASES_BEGIN,
            "alias ll='ls -la'",
            "alias gs='git status'",
            ALIASES_END,
        ]
    );
}

#[test]
fn test_every_run_leaves_a_backup() {
    let home = TempDir::new().unwrap();
    let target = home.path().join("config");
    let source = home.path().join("snippet");
    fs::write(&target, "line\n").unwrap();
    fs::write(&source, "snippet\n").unwrap();

    let request = InjectRequest::new(&target, &source, ALIASES_BEGIN, ALIASES_END).unwrap();
    let first = inject(&request).unwrap();

    assert_eq!(backups_of(home.path(), "config"), 1);
    assert_eq!(fs::read_to_string(&first.backup).unwrap(), "line\n");
}

#[test]
fn test_crlf_target_is_normalised() {
    let home = TempDir::new().unwrap();
    let target = home.path().join("win.ini");
    let source = home.path().join("snippet");
    fs::write(&target, "a\r\nb\r\n").unwrap();
    fs::write(&source, "c\r\n").unwrap();

    let request = InjectRequest::new(&target, &source, ALIASES_BEGIN, ALIASES_END).unwrap();
    inject(&request).unwrap();

    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        format!("a\nb\n\n{}\nc\n{}\n", ALIASES_BEGIN, ALIASES_END)
    );
}
