use glob::{MatchOptions, Pattern};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Expand CLI path arguments into the list of skill files to check.
///
/// With no arguments every `<root>/*/<file_name>` is used. Each argument is
/// treated as a glob; directories map to the skill file inside them and
/// arguments matching nothing are kept as-is so they surface as missing files.
pub fn resolve_skill_files(args: &[String], root: &Path, file_name: &str) -> Vec<PathBuf> {
    if args.is_empty() {
        let root_pattern = Pattern::escape(&root.to_string_lossy());
        let pattern = format!("{root_pattern}/*/{file_name}");
        debug!(%pattern, "no paths given; using default pattern");
        return dedupe(expand(&pattern));
    }

    let mut resolved = vec![];
    for raw in args {
        let matches = expand(raw);
        if matches.is_empty() {
            debug!(path = %raw, "pattern matched nothing; keeping literal path");
            resolved.push(skill_file_for(PathBuf::from(raw), file_name));
            continue;
        }
        resolved.extend(
            matches
                .into_iter()
                .map(|path| skill_file_for(path, file_name)),
        );
    }
    dedupe(resolved)
}

fn skill_file_for(path: PathBuf, file_name: &str) -> PathBuf {
    if path.is_dir() {
        path.join(file_name)
    } else {
        path
    }
}

fn expand(pattern: &str) -> Vec<PathBuf> {
    let paths = match glob::glob_with(pattern, MATCH_OPTIONS) {
        Ok(paths) => paths,
        Err(err) => {
            warn!(%pattern, error = %err, "invalid glob pattern");
            return vec![];
        }
    };
    let mut matches: Vec<PathBuf> = paths
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(err) => {
                warn!(error = %err, "skipping unreadable glob match");
                None
            }
        })
        .collect();
    matches.sort();
    matches
}

fn dedupe(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .map(|p| normalize_lexically(&p))
        .filter(|p| seen.insert(p.clone()))
        .collect()
}

/// Collapse `.` and `..` components without touching the filesystem.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = vec![];
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.last(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !matches!(out.last(), Some(Component::RootDir | Component::Prefix(_))) {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    if out.is_empty() {
        PathBuf::from(".")
    } else {
        out.iter().collect()
    }
}
