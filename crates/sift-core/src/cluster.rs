//! Greedy anchor-based clustering of notes
//!
//! Membership is tested against the group's anchor only, never between two
//! non-anchor members, so two members of the same group are not necessarily
//! similar to each other. The output is sensitive to input order, which is
//! why the pass never sorts or reorders its input.

use crate::note::Note;
use crate::similarity::{self, NoteProfile};

/// Default similarity threshold for grouping
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// One cluster of notes
#[derive(Debug, Clone)]
pub struct Group {
    /// Normalized title of the anchor note that opened the group.
    /// A clustering artifact, not a semantic label.
    pub key: String,
    /// Member notes in input order; the anchor is always first
    pub notes: Vec<Note>,
}

impl Group {
    /// Number of member notes
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// True when the group has no members
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The member with the longest content, in characters.
    ///
    /// Ties keep the first-encountered maximum in group order.
    pub fn best_note(&self) -> Option<&Note> {
        let mut best: Option<(&Note, usize)> = None;
        for note in &self.notes {
            let len = note.content_len();
            match best {
                Some((_, max)) if len <= max => {}
                _ => best = Some((note, len)),
            }
        }
        best.map(|(note, _)| note)
    }
}

/// Partition notes into groups with a single left-to-right pass.
///
/// Every note lands in exactly one group, and a group's members keep their
/// relative input order. O(n²) in the number of notes.
pub fn cluster(notes: &[Note], threshold: f64) -> Vec<Group> {
    let profiles: Vec<NoteProfile> = notes.iter().map(NoteProfile::build).collect();
    let mut processed = vec![false; notes.len()];
    let mut groups = Vec::new();

    for i in 0..notes.len() {
        if processed[i] {
            continue;
        }
        processed[i] = true;

        let mut members = vec![notes[i].clone()];
        for j in i + 1..notes.len() {
            if processed[j] {
                continue;
            }
            if similarity::score(&profiles[i], &profiles[j]) >= threshold {
                processed[j] = true;
                members.push(notes[j].clone());
            }
        }

        groups.push(Group {
            key: profiles[i].norm_title.clone(),
            notes: members,
        });
    }

    tracing::debug!(notes = notes.len(), groups = groups.len(), threshold, "clustered");
    groups
}
