//! Lint: key-hint labels (`[X]`) must be tappable.
//!
//! A label such as `[M] Menu` promises an action. On touch screens there is
//! no keyboard, so any line carrying one has to be registered as a click
//! target (`push_clickable` or the `action` helper), never written with a
//! plain `push`/`line`.
//!
//! Scans every source file under `src/site/`.

use std::fs;
use std::path::Path;

/// Check if a string contains a key hint like `[M]`, `[1]`, `[-]`.
fn contains_bracket_key(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() < 3 {
        return false;
    }
    for i in 0..bytes.len() - 2 {
        if bytes[i] == b'[' && bytes[i + 2] == b']' {
            let ch = bytes[i + 1];
            if ch.is_ascii_alphanumeric() || b"-=!~{}|\\".contains(&ch) {
                return true;
            }
        }
    }
    false
}

/// Lines writing a key hint through a non-clickable call.
fn find_unclickable_hints(source: &str) -> Vec<(usize, String)> {
    let mut violations = Vec::new();

    for (line_num_0, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") {
            continue;
        }
        if !contains_bracket_key(line) {
            continue;
        }

        let plain = line.contains(".push(") || line.contains(".line(") || line.contains(".wrapped(");
        let clickable = line.contains("push_clickable(") || line.contains(".action(");
        if plain && !clickable {
            violations.push((line_num_0 + 1, trimmed.to_string()));
        }
    }

    violations
}

#[test]
fn no_key_hints_in_unclickable_lines() {
    let site_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/site");
    let mut all_violations = Vec::new();

    visit_sources(&site_dir, &mut all_violations);

    if !all_violations.is_empty() {
        let mut msg = String::from(
            "Found key-hint text [X] written without a click target.\n\
             Use push_clickable() or the action() helper instead.\n\n",
        );
        for (file, line_num, line) in &all_violations {
            msg.push_str(&format!("  {}:{}: {}\n", file, line_num, line));
        }
        panic!("{}", msg);
    }
}

#[test]
fn site_sources_are_scanned() {
    let site_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/site");
    for name in ["render.rs", "sections.rs"] {
        assert!(site_dir.join(name).is_file(), "missing src/site/{}", name);
    }
}

fn visit_sources(dir: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            visit_sources(&path, violations);
        } else if path.extension().map(|e| e == "rs").unwrap_or(false) {
            let Ok(source) = fs::read_to_string(&path) else {
                continue;
            };
            let display_path = path.display().to_string();
            for (line_num, line) in find_unclickable_hints(&source) {
                violations.push((display_path.clone(), line_num, line));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_hint_in_push() {
        let source = r#"list.push(Line::from(" [M] Menu  [1] Home"));"#;
        assert_eq!(find_unclickable_hints(source).len(), 1);
    }

    #[test]
    fn detects_hint_in_doc_line() {
        let source = r#"doc.line("  [E] Enroll Now", accent());"#;
        assert_eq!(find_unclickable_hints(source).len(), 1);
    }

    #[test]
    fn allows_push_clickable() {
        let source = r#"list.push_clickable(Line::from(" [M] Menu"), MENU_TOGGLE);"#;
        assert!(find_unclickable_hints(source).is_empty());
    }

    #[test]
    fn allows_action_helper() {
        let source = r#"doc.action("[E]", "Enroll Now", ENROLL_BASE);"#;
        assert!(find_unclickable_hints(source).is_empty());
    }

    #[test]
    fn ignores_comments() {
        let source = r#"// list.push(Line::from(" [M] Menu"));"#;
        assert!(find_unclickable_hints(source).is_empty());
    }

    #[test]
    fn bracket_key_detection() {
        assert!(contains_bracket_key("[M]"));
        assert!(contains_bracket_key("[1]"));
        assert!(contains_bracket_key("[-]"));
        assert!(!contains_bracket_key("[]"));
        assert!(!contains_bracket_key("[Esc]"));
        assert!(!contains_bracket_key("plain"));
    }
}
