use std::cmp::Ordering;

use crate::{
    error::{TraitforgeError, TraitforgeResult},
    store::AssetStore,
};

/// Immutable reference to a stored image asset.
///
/// Identity is the store-relative `path`; instances live for the duration of
/// one generation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Asset {
    /// Store-relative path, `/` separated.
    pub path: String,
    /// Directory the asset was listed under.
    pub category_dir: String,
}

impl Asset {
    /// File name without directory or extension.
    pub fn stem(&self) -> &str {
        file_stem(&self.path)
    }
}

/// List all assets directly under `category_path`, in natural sort order.
///
/// The ordering is deterministic and stable across repeated calls on an
/// unchanged store; label resolution relies on it.
pub fn list_assets<S: AssetStore>(
    store: &S,
    category_path: &str,
) -> TraitforgeResult<Vec<Asset>> {
    let mut names = store.list_entries(category_path)?;
    names.sort_by(|a, b| natural_cmp(a, b));

    Ok(names
        .into_iter()
        .map(|name| Asset {
            path: format!("{category_path}/{name}"),
            category_dir: category_path.to_string(),
        })
        .collect())
}

/// Return the first asset whose display-formatted stem equals `chosen_label`.
///
/// Fatal for the generation if nothing matches.
pub fn resolve<'a>(options: &'a [Asset], chosen_label: &str) -> TraitforgeResult<&'a Asset> {
    options
        .iter()
        .find(|asset| format_label(asset.stem()) == chosen_label)
        .ok_or_else(|| {
            TraitforgeError::asset_not_found(format!(
                "no asset matches label '{chosen_label}' among {} candidates",
                options.len()
            ))
        })
}

/// Display-format a raw file stem into a chooser label.
///
/// The literal token `2D` is left unchanged; otherwise hyphens become
/// spaces, the string is lowercased, and each whitespace-separated word is
/// title-cased. Pure and idempotent.
pub fn format_label(raw: &str) -> String {
    if raw == "2D" {
        return raw.to_string();
    }

    let lowered = raw.replace('-', " ").to_lowercase();
    lowered
        .split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip directory and extension from `path`, then display-format the stem.
pub fn display_label(path: &str) -> String {
    format_label(file_stem(path))
}

pub(crate) fn file_stem(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(0) | None => name,
        Some(dot) => &name[..dot],
    }
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Natural-order comparison: embedded digit runs compare by numeric value,
/// not lexically.
///
/// Names split into alternating maximal digit / non-digit runs. Digit runs
/// compare numerically after stripping leading zeros; when the stripped
/// values are equal, the longer zero-padded original sorts later ("1" before
/// "01"). A digit run sorts before a non-digit run at the same position.
/// Whole-string lexical order is the final tiebreak.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let runs_a = split_runs(a);
    let runs_b = split_runs(b);

    for (ra, rb) in runs_a.iter().zip(runs_b.iter()) {
        let ord = match (ra, rb) {
            (Run::Digits(da), Run::Digits(db)) => cmp_digit_runs(da, db),
            (Run::Digits(_), Run::Text(_)) => Ordering::Less,
            (Run::Text(_), Run::Digits(_)) => Ordering::Greater,
            (Run::Text(ta), Run::Text(tb)) => ta.cmp(tb),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    a.cmp(b)
}

#[derive(Debug, PartialEq, Eq)]
enum Run<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn split_runs(s: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let bytes = s.as_bytes();
    let mut start = 0;

    while start < bytes.len() {
        let is_digit = bytes[start].is_ascii_digit();
        let mut end = start + 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() == is_digit {
            end += 1;
        }
        let run = &s[start..end];
        runs.push(if is_digit {
            Run::Digits(run)
        } else {
            Run::Text(run)
        });
        start = end;
    }

    runs
}

fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let sa = a.trim_start_matches('0');
    let sb = b.trim_start_matches('0');

    // Equal-length zero-stripped runs compare digit-by-digit; a shorter
    // stripped run is a smaller number. Equal values fall through to the
    // padding tiebreak: more zero padding sorts later.
    sa.len()
        .cmp(&sb.len())
        .then_with(|| sa.cmp(sb))
        .then_with(|| a.len().cmp(&b.len()))
}
