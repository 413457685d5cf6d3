//! Per-path-component glob/regex hybrid.
//!
//! No crate in our stack implements this hybrid, so both the translation
//! and the small anchored-match engine it drives are hand-rolled here.
//! `(...)`, `|` and `[...]` are passed through from the source pattern and
//! interpreted as ordinary regex syntax; `.`, `*` and `?` are the only
//! characters this module itself translates.

use std::path::{Path, PathBuf};

/// Expand `pattern` against the filesystem rooted at `base`, returning
/// matches as `/`-separated paths relative to `base`.
pub fn expand(pattern: &str, base: &Path) -> Vec<String> {
    let normalized = pattern.replace('\\', "/");
    let mut parts: Vec<&str> = normalized.split('/').collect();

    let start = if parts.first() == Some(&"") {
        parts.remove(0);
        PathBuf::from("/")
    } else if parts.first().map(|c| is_drive_letter(c)).unwrap_or(false) {
        let drive = parts.remove(0);
        PathBuf::from(format!("{drive}/"))
    } else {
        base.to_path_buf()
    };

    let mut out = Vec::new();
    walk(&start, &parts, base, &mut out);
    out.sort();
    out
}

fn is_drive_letter(s: &str) -> bool {
    s.len() == 2 && s.as_bytes()[0].is_ascii_alphabetic() && s.as_bytes()[1] == b':'
}

fn walk(current: &Path, remaining: &[&str], base: &Path, out: &mut Vec<String>) {
    let (comp, rest) = match remaining.split_first() {
        Some(pair) => pair,
        None => return,
    };

    if comp.is_empty() {
        walk(current, rest, base, out);
        return;
    }

    if is_fixed_literal(comp) {
        let candidate = current.join(comp);
        if rest.is_empty() {
            if candidate.exists() {
                out.push(display_relative(&candidate, base));
            }
        } else if candidate.is_dir() {
            walk(&candidate, rest, base, out);
        }
        return;
    }

    let pattern = Pattern::compile(comp);
    let entries = match std::fs::read_dir(current) {
        Ok(e) => e,
        Err(_) => return,
    };
    for entry in entries.flatten() {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name == "." || name == ".." {
            continue;
        }
        if !pattern.is_match(&name) {
            continue;
        }
        let candidate = current.join(&*name);
        if rest.is_empty() {
            out.push(display_relative(&candidate, base));
        } else if candidate.is_dir() {
            walk(&candidate, rest, base, out);
        }
    }
}

fn display_relative(path: &Path, base: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

/// A component is a fixed literal iff it contains none of the glob/regex
/// metacharacters; otherwise it is compiled and matched as a pattern.
fn is_fixed_literal(comp: &str) -> bool {
    !comp.chars().any(|c| "()[]{}*?\\".contains(c))
}

#[derive(Debug, Clone)]
enum Atom {
    Literal(char),
    AnyChar,
    Class { negate: bool, ranges: Vec<(char, char)>, chars: Vec<char> },
    Group(Vec<Vec<Unit>>),
}

#[derive(Debug, Clone, Copy)]
enum Quant {
    Opt,
    Star,
    Plus,
}

#[derive(Debug, Clone)]
struct Unit {
    atom: Atom,
    quant: Option<Quant>,
}

/// A compiled component pattern. Matching is implicitly full-string anchored
/// (equivalent to wrapping the translated form in `^...$`).
pub struct Pattern {
    units: Vec<Unit>,
}

impl Pattern {
    pub fn compile(raw: &str) -> Pattern {
        let mut chars = raw.chars().peekable();
        let alts = parse_alts(&mut chars, None);
        // A bare sequence with no top-level `|` collapses to its one branch;
        // a real top-level alternation would need wrapping in an implicit
        // group, which no caller in this module produces.
        Pattern { units: alts.into_iter().next().unwrap_or_default() }
    }

    pub fn is_match(&self, text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        matches_from(&self.units, 0, &chars, &|pos| pos == chars.len())
    }
}

fn parse_alts(chars: &mut std::iter::Peekable<std::str::Chars>, stop: Option<char>) -> Vec<Vec<Unit>> {
    let mut alts = vec![Vec::new()];
    while let Some(&c) = chars.peek() {
        if Some(c) == stop {
            chars.next();
            break;
        }
        match c {
            '|' => {
                chars.next();
                alts.push(Vec::new());
            }
            '(' => {
                chars.next();
                let inner = parse_alts(chars, Some(')'));
                let quant = parse_quant(chars);
                alts.last_mut().unwrap().push(Unit { atom: Atom::Group(inner), quant });
            }
            '[' => {
                chars.next();
                let (negate, ranges, class_chars) = parse_class(chars);
                let quant = parse_quant(chars);
                alts.last_mut().unwrap().push(Unit {
                    atom: Atom::Class { negate, ranges, chars: class_chars },
                    quant,
                });
            }
            '*' => {
                chars.next();
                alts.last_mut().unwrap().push(Unit { atom: Atom::AnyChar, quant: Some(Quant::Star) });
            }
            '?' => {
                chars.next();
                alts.last_mut().unwrap().push(Unit { atom: Atom::AnyChar, quant: Some(Quant::Opt) });
            }
            '.' => {
                chars.next();
                alts.last_mut().unwrap().push(Unit { atom: Atom::Literal('.'), quant: None });
            }
            '\\' => {
                chars.next();
                let literal = chars.next().unwrap_or('\\');
                alts.last_mut().unwrap().push(Unit { atom: Atom::Literal(literal), quant: None });
            }
            _ => {
                chars.next();
                alts.last_mut().unwrap().push(Unit { atom: Atom::Literal(c), quant: None });
            }
        }
    }
    alts
}

fn parse_quant(chars: &mut std::iter::Peekable<std::str::Chars>) -> Option<Quant> {
    match chars.peek() {
        Some('*') => {
            chars.next();
            Some(Quant::Star)
        }
        Some('?') => {
            chars.next();
            Some(Quant::Opt)
        }
        Some('+') => {
            chars.next();
            Some(Quant::Plus)
        }
        _ => None,
    }
}

fn parse_class(chars: &mut std::iter::Peekable<std::str::Chars>) -> (bool, Vec<(char, char)>, Vec<char>) {
    let mut negate = false;
    if chars.peek() == Some(&'^') {
        chars.next();
        negate = true;
    }
    let mut ranges = Vec::new();
    let mut singles = Vec::new();
    while let Some(&c) = chars.peek() {
        if c == ']' {
            chars.next();
            break;
        }
        chars.next();
        if chars.peek() == Some(&'-') {
            let mut lookahead = chars.clone();
            lookahead.next();
            if let Some(&end) = lookahead.peek() {
                if end != ']' {
                    chars.next();
                    chars.next();
                    ranges.push((c, end));
                    continue;
                }
            }
        }
        singles.push(c);
    }
    (negate, ranges, singles)
}

fn matches_from(units: &[Unit], pos: usize, s: &[char], k: &dyn Fn(usize) -> bool) -> bool {
    match units.split_first() {
        None => k(pos),
        Some((u, rest)) => match u.quant {
            None => try_atom(&u.atom, pos, s, &|np| matches_from(rest, np, s, k)),
            Some(Quant::Opt) => {
                try_atom(&u.atom, pos, s, &|np| matches_from(rest, np, s, k)) || matches_from(rest, pos, s, k)
            }
            Some(Quant::Star) => match_greedy_star(&u.atom, pos, s, rest, k),
            Some(Quant::Plus) => try_atom(&u.atom, pos, s, &|np| match_greedy_star(&u.atom, np, s, rest, k)),
        },
    }
}

fn try_atom(atom: &Atom, pos: usize, s: &[char], k: &dyn Fn(usize) -> bool) -> bool {
    match atom {
        Atom::Literal(c) => pos < s.len() && s[pos] == *c && k(pos + 1),
        Atom::AnyChar => pos < s.len() && k(pos + 1),
        Atom::Class { negate, ranges, chars } => {
            if pos >= s.len() {
                return false;
            }
            let ch = s[pos];
            let mut inside = chars.contains(&ch) || ranges.iter().any(|&(a, b)| ch >= a && ch <= b);
            if *negate {
                inside = !inside;
            }
            inside && k(pos + 1)
        }
        Atom::Group(alts) => alts.iter().any(|alt| matches_from(alt, pos, s, k)),
    }
}

fn match_greedy_star(atom: &Atom, pos: usize, s: &[char], rest: &[Unit], k: &dyn Fn(usize) -> bool) -> bool {
    if try_atom(atom, pos, s, &|np| match_greedy_star(atom, np, s, rest, k)) {
        return true;
    }
    matches_from(rest, pos, s, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("sushi-xcode-globre-test-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("src")).unwrap();
        fs::write(dir.join("src/a.c"), b"").unwrap();
        fs::write(dir.join("src/b.cc"), b"").unwrap();
        fs::write(dir.join("src/c.h"), b"").unwrap();
        dir
    }

    #[test]
    fn fixed_literal_has_no_metachars() {
        assert!(is_fixed_literal("src"));
        assert!(!is_fixed_literal("*.c"));
        assert!(!is_fixed_literal("a(b)"));
    }

    #[test]
    fn alternation_group_matches_either_branch() {
        let p = Pattern::compile("*.(c|cc)");
        assert!(p.is_match("a.c"));
        assert!(p.is_match("b.cc"));
        assert!(!p.is_match("c.h"));
    }

    #[test]
    fn star_and_literal_dot() {
        let p = Pattern::compile("*.h");
        assert!(p.is_match("c.h"));
        assert!(!p.is_match("c.hh"));
    }

    #[test]
    fn expand_matches_only_c_and_cc_files() {
        let dir = scratch_dir("alt");
        let mut got = expand("src/*.(c|cc)", &dir);
        got.sort();
        assert_eq!(got, vec!["src/a.c".to_string(), "src/b.cc".to_string()]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn expand_single_extension() {
        let dir = scratch_dir("single");
        let got = expand("src/*.h", &dir);
        assert_eq!(got, vec!["src/c.h".to_string()]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn expand_missing_directory_yields_nothing() {
        let dir = scratch_dir("missing");
        let got = expand("missing/*", &dir);
        assert!(got.is_empty());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn char_class_matches_range() {
        let p = Pattern::compile("[a-c].txt");
        assert!(p.is_match("a.txt"));
        assert!(p.is_match("c.txt"));
        assert!(!p.is_match("d.txt"));
    }
}
