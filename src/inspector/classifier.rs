// src/inspector/classifier.rs

use indexmap::IndexMap;

use super::attribute_index::{group_of, Grouping};
use super::member::Member;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Box,
    Foldout,
}

/// Members sharing one grouping annotation, in first-seen order.
#[derive(Debug, Clone)]
pub struct Group {
    pub key: &'static str,
    pub kind: GroupKind,
    pub members: Vec<Member>,
}

/// Classified members of one redraw. Built, drawn and dropped every frame.
#[derive(Debug, Clone, Default)]
pub struct RenderPlan {
    pub ungrouped: Vec<Member>,
    pub box_groups: Vec<Group>,
    pub foldout_groups: Vec<Group>,
}

impl RenderPlan {
    /// Drops members failing `visible` and any group left without members.
    pub fn retain_visible(mut self, mut visible: impl FnMut(&Member) -> bool) -> Self {
        self.ungrouped.retain(|m| visible(m));
        for group in self
            .box_groups
            .iter_mut()
            .chain(self.foldout_groups.iter_mut())
        {
            group.members.retain(|m| visible(m));
        }
        self.box_groups.retain(|g| !g.members.is_empty());
        self.foldout_groups.retain(|g| !g.members.is_empty());
        self
    }

    pub fn member_count(&self) -> usize {
        self.ungrouped.len()
            + self
                .box_groups
                .iter()
                .chain(self.foldout_groups.iter())
                .map(|g| g.members.len())
                .sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.member_count() == 0
    }
}

/// Single pass: each member lands in exactly one bucket. Groups keep the order in
/// which their names first appear.
pub fn classify(members: impl IntoIterator<Item = Member>) -> RenderPlan {
    let mut ungrouped = Vec::new();
    let mut boxes: IndexMap<&'static str, Vec<Member>> = IndexMap::new();
    let mut foldouts: IndexMap<&'static str, Vec<Member>> = IndexMap::new();

    for member in members {
        match group_of(&member) {
            Grouping::Ungrouped => ungrouped.push(member),
            Grouping::Box(key) => boxes.entry(key).or_default().push(member),
            Grouping::Foldout(key) => foldouts.entry(key).or_default().push(member),
        }
    }

    RenderPlan {
        ungrouped,
        box_groups: into_groups(boxes, GroupKind::Box),
        foldout_groups: into_groups(foldouts, GroupKind::Foldout),
    }
}

fn into_groups(groups: IndexMap<&'static str, Vec<Member>>, kind: GroupKind) -> Vec<Group> {
    groups
        .into_iter()
        .map(|(key, members)| Group { key, kind, members })
        .collect()
}
