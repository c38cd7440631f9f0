//! End-to-end curation pipeline
//!
//! Clusters the input, picks one representative per group, scores the
//! representatives, and keeps the top K.

use serde::Serialize;

use crate::cache::ScoreCache;
use crate::cluster::{cluster, Group};
use crate::config::CurateConfig;
use crate::note::Note;
use crate::quality::quality_score;

/// A group representative with its ranking signals
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRepresentative {
    /// The note standing in for its whole group
    #[serde(flatten)]
    pub note: Note,
    /// Heuristic quality score of the note's content
    pub score: u32,
    /// Number of notes in the group it represents
    pub group_size: usize,
}

/// Curation service owning its configuration and score cache.
///
/// Reusing one curator across runs lets repeated content hit the cache
/// instead of being rescored.
pub struct Curator {
    config: CurateConfig,
    cache: ScoreCache,
}

impl Curator {
    /// Create a curator; the cache is sized per the config
    pub fn new(config: CurateConfig) -> Self {
        let cache = config.build_cache();
        Curator { config, cache }
    }

    /// The active configuration
    pub fn config(&self) -> &CurateConfig {
        &self.config
    }

    /// The owned score cache
    pub fn cache(&self) -> &ScoreCache {
        &self.cache
    }

    /// Run the full pipeline: cluster, rank, truncate to the limit.
    pub fn curate(&mut self, notes: &[Note]) -> Vec<ScoredRepresentative> {
        let groups = cluster(notes, self.config.threshold);
        let mut ranked = self.rank(&groups);
        ranked.truncate(self.config.limit);
        tracing::debug!(
            input = notes.len(),
            groups = groups.len(),
            curated = ranked.len(),
            cache_hits = self.cache.hits(),
            cache_misses = self.cache.misses(),
            "curated"
        );
        ranked
    }

    /// Score every group representative, ordered by score descending.
    ///
    /// The sort is stable, so equal scores keep group discovery order.
    /// Empty groups never occur out of clustering and are skipped here.
    pub fn rank(&mut self, groups: &[Group]) -> Vec<ScoredRepresentative> {
        let mut reps: Vec<ScoredRepresentative> = groups
            .iter()
            .filter_map(|group| {
                group.best_note().map(|note| ScoredRepresentative {
                    score: self
                        .cache
                        .get_or_insert_with(&note.content, || quality_score(&note.content)),
                    group_size: group.len(),
                    note: note.clone(),
                })
            })
            .collect();
        reps.sort_by(|a, b| b.score.cmp(&a.score));
        reps
    }
}

/// One-shot curation with a throwaway cache
pub fn curate(notes: &[Note], config: &CurateConfig) -> Vec<ScoredRepresentative> {
    Curator::new(config.clone()).curate(notes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str, content: &str) -> Note {
        Note::new(title, content, "Lesson", "l-1")
    }

    fn group_of(title: &str, content: String) -> Group {
        Group {
            key: title.into(),
            notes: vec![note(title, &content)],
        }
    }

    // Contents engineered to hit exact scores through the quality heuristic.
    // The filler letter varies per note so keyword sets never overlap.
    fn content_scoring(score: u32, filler: char) -> String {
        let pad = filler.to_string().repeat(1200);
        match score {
            9 => format!("1. An example function\n{}", pad),
            7 => format!("1. An example\n{}", pad),
            5 => format!("1. item\n{}", pad),
            3 => pad,
            1 => filler.to_string().repeat(300),
            _ => String::new(),
        }
    }

    #[test]
    fn test_rank_orders_by_score_descending() {
        let groups = vec![
            group_of("alpha topic", content_scoring(9, 'v')),
            group_of("beta topic", content_scoring(3, 'w')),
            group_of("gamma topic", content_scoring(7, 'x')),
            group_of("delta topic", content_scoring(1, 'y')),
            group_of("epsilon topic", content_scoring(5, 'z')),
        ];
        let mut curator = Curator::new(CurateConfig::default());
        let ranked = curator.rank(&groups);
        let scores: Vec<u32> = ranked.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![9, 7, 5, 3, 1]);
    }

    #[test]
    fn test_curate_truncates_to_limit() {
        let notes = vec![
            note("alpha topic", &content_scoring(9, 'v')),
            note("beta topic", &content_scoring(3, 'w')),
            note("gamma topic", &content_scoring(7, 'x')),
            note("delta topic", &content_scoring(1, 'y')),
            note("epsilon topic", &content_scoring(5, 'z')),
        ];
        let config = CurateConfig {
            limit: 3,
            ..Default::default()
        };
        let curated = curate(&notes, &config);
        let scores: Vec<u32> = curated.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![9, 7, 5]);
    }

    #[test]
    fn test_fewer_groups_than_limit_returns_all() {
        let notes = vec![
            note("alpha topic", "short one"),
            note("beta topic", "other short"),
        ];
        let curated = curate(&notes, &CurateConfig::default());
        assert_eq!(curated.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let curated = curate(&[], &CurateConfig::default());
        assert!(curated.is_empty());
    }

    #[test]
    fn test_ties_keep_group_discovery_order() {
        let groups = vec![
            group_of("first key", "same".into()),
            group_of("second key", "also".into()),
            group_of("third key", "tied".into()),
        ];
        let mut curator = Curator::new(CurateConfig::default());
        let ranked = curator.rank(&groups);
        // all score 0; stable sort keeps discovery order
        let keys: Vec<&str> = ranked.iter().map(|r| r.note.title.as_str()).collect();
        assert_eq!(keys, vec!["first key", "second key", "third key"]);
    }

    #[test]
    fn test_representative_is_group_member_with_longest_content() {
        // duplicates by exact title; the longest body must survive
        let notes = vec![
            note("Retry Logic", &"a".repeat(50)),
            note("retry logic", &"b".repeat(500)),
            note("RETRY LOGIC", &"c".repeat(120)),
        ];
        let curated = curate(&notes, &CurateConfig::default());
        assert_eq!(curated.len(), 1);
        assert_eq!(curated[0].group_size, 3);
        assert_eq!(curated[0].note.content_len(), 500);
    }

    #[test]
    fn test_cache_reused_across_runs() {
        let notes = vec![note("alpha topic", &content_scoring(5, 'z'))];
        let mut curator = Curator::new(CurateConfig::default());
        curator.curate(&notes);
        curator.curate(&notes);
        assert_eq!(curator.cache().misses(), 1);
        assert_eq!(curator.cache().hits(), 1);
    }
}
