//! Search index + ranker: fuzzy filter for the model dropdown.

use std::collections::BTreeMap;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::state::ModelInfo;

/// One searchable entry derived from the catalog. Rebuilt whenever the
/// model map changes; always recomputable, never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchItem {
    pub id: String,
    pub label: String,
    /// "label id" — what the fuzzy matcher runs against.
    pub haystack: String,
}

/// A display label split into runs, so highlighting is data, not markup.
#[derive(Clone, Debug, PartialEq)]
pub enum LabelSegment {
    Plain(String),
    Hit(String),
}

/// One dropdown row, favorites pinned ahead of fuzzy matches.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedModel {
    pub id: String,
    pub label: String,
    pub segments: Vec<LabelSegment>,
    pub favorite: bool,
}

/// Derive the searchable list from the catalog, ascending by id.
pub fn build_index(models: &BTreeMap<String, ModelInfo>) -> Vec<SearchItem> {
    models
        .iter()
        .map(|(id, info)| {
            let label = info.label_or(id).to_string();
            let haystack = format!("{} {}", label, id);
            SearchItem {
                id: id.clone(),
                label,
                haystack,
            }
        })
        .collect()
}

/// Rank the index for display: favorited ids first (builder order, unfiltered
/// by the query, never highlighted), then the non-favorited items — all of
/// them when the query is empty, otherwise fuzzy matches best-first with
/// matched label characters marked for highlighting. An id that is favorited
/// never reappears in the matched set.
pub fn rank(items: &[SearchItem], query: &str, favorites: &[String]) -> Vec<RankedModel> {
    let is_favorite = |id: &str| favorites.iter().any(|f| f == id);

    let mut out: Vec<RankedModel> = items
        .iter()
        .filter(|item| is_favorite(&item.id))
        .map(|item| RankedModel {
            id: item.id.clone(),
            label: item.label.clone(),
            segments: vec![LabelSegment::Plain(item.label.clone())],
            favorite: true,
        })
        .collect();

    let query = query.trim().to_lowercase();
    if query.is_empty() {
        out.extend(
            items
                .iter()
                .filter(|item| !is_favorite(&item.id))
                .map(|item| RankedModel {
                    id: item.id.clone(),
                    label: item.label.clone(),
                    segments: vec![LabelSegment::Plain(item.label.clone())],
                    favorite: false,
                }),
        );
        return out;
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, RankedModel)> = items
        .iter()
        .filter(|item| !is_favorite(&item.id))
        .filter_map(|item| {
            // Lowercased query keeps the matcher case-insensitive on both
            // label and id portions of the haystack.
            let (score, indices) = matcher.fuzzy_indices(&item.haystack, &query)?;
            Some((
                score,
                RankedModel {
                    id: item.id.clone(),
                    label: item.label.clone(),
                    segments: split_label(&item.label, &indices),
                    favorite: false,
                },
            ))
        })
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    out.extend(scored.into_iter().map(|(_, m)| m));
    out
}

/// Split a label into Plain/Hit runs given matched char positions in the
/// haystack. Positions past the label belong to the id suffix and produce
/// no visible highlight.
fn split_label(label: &str, indices: &[usize]) -> Vec<LabelSegment> {
    let mut segments: Vec<LabelSegment> = Vec::new();
    let mut run = String::new();
    let mut run_hit = false;

    for (i, c) in label.chars().enumerate() {
        let hit = indices.contains(&i);
        if hit != run_hit && !run.is_empty() {
            segments.push(seal(std::mem::take(&mut run), run_hit));
        }
        run_hit = hit;
        run.push(c);
    }
    if !run.is_empty() {
        segments.push(seal(run, run_hit));
    }
    if segments.is_empty() {
        segments.push(LabelSegment::Plain(String::new()));
    }
    segments
}

fn seal(text: String, hit: bool) -> LabelSegment {
    if hit {
        LabelSegment::Hit(text)
    } else {
        LabelSegment::Plain(text)
    }
}
