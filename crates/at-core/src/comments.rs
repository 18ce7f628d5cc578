//! Threaded comments with bounded display depth.
//!
//! Reels show comments at most one level deep. Deeper replies are re-parented
//! to their top-level comment and prefixed with `@<author>` of the comment they
//! answered, so the conversation stays readable in a two-level list.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::ids::CommentId;

/// Flat comment with explicit parent link and depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub parent_id: Option<CommentId>,
    pub author: String,
    pub text: String,
    pub depth: u32,
}

/// Nested comment as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentNode {
    #[serde(alias = "_id")]
    pub id: CommentId,
    #[serde(default, alias = "username")]
    pub author: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub replies: Vec<CommentNode>,
}

/// Flatten a nested comment tree in pre-order, recording parent and depth.
pub fn flatten_tree(nodes: Vec<CommentNode>) -> Vec<Comment> {
    let mut out = Vec::new();
    let mut stack: Vec<(CommentNode, Option<CommentId>, u32)> =
        nodes.into_iter().rev().map(|node| (node, None, 0)).collect();

    while let Some((node, parent_id, depth)) = stack.pop() {
        let CommentNode {
            id,
            author,
            text,
            replies,
        } = node;
        for reply in replies.into_iter().rev() {
            stack.push((reply, Some(id.clone()), depth + 1));
        }
        out.push(Comment {
            id,
            parent_id,
            author,
            text,
            depth,
        });
    }

    out
}

/// Collapse comments to at most one reply level.
///
/// Depth is recomputed from the parent chain; the incoming `depth` field is
/// not trusted. Comments whose parent is missing or that sit on a parent
/// cycle become top-level comments. Output order is every top-level comment
/// followed by its descendants, both in input order.
pub fn normalize_comments(comments: Vec<Comment>) -> Vec<Comment> {
    let index: HashMap<&CommentId, usize> = comments
        .iter()
        .enumerate()
        .map(|(i, comment)| (&comment.id, i))
        .collect();
    let parent_of = |i: usize| -> Option<usize> {
        comments[i]
            .parent_id
            .as_ref()
            .and_then(|parent| index.get(parent).copied())
    };

    let is_root: Vec<bool> = (0..comments.len())
        .map(|i| parent_of(i).is_none() || on_cycle(i, &parent_of))
        .collect();

    // (top-level ancestor, depth below it) per comment.
    let mut placement = Vec::with_capacity(comments.len());
    for i in 0..comments.len() {
        let mut current = i;
        let mut depth = 0u32;
        while !is_root[current] {
            // Non-roots always have a resolvable parent.
            current = parent_of(current).unwrap_or(current);
            depth += 1;
        }
        placement.push((current, depth));
    }

    let mut children: HashMap<usize, Vec<usize>> = HashMap::new();
    for (i, (root, depth)) in placement.iter().enumerate() {
        if *depth > 0 {
            children.entry(*root).or_default().push(i);
        }
    }

    let mut out = Vec::with_capacity(comments.len());
    for root in (0..comments.len()).filter(|i| is_root[*i]) {
        let mut top = comments[root].clone();
        top.parent_id = None;
        top.depth = 0;
        out.push(top);

        for &child in children.get(&root).map(Vec::as_slice).unwrap_or_default() {
            let (_, depth) = placement[child];
            let mut reply = comments[child].clone();
            if depth > 1 {
                if let Some(direct_parent) = parent_of(child) {
                    reply.text = format!("@{} {}", comments[direct_parent].author, reply.text);
                }
            }
            reply.parent_id = Some(comments[root].id.clone());
            reply.depth = 1;
            out.push(reply);
        }
    }

    out
}

fn on_cycle(start: usize, parent_of: &impl Fn(usize) -> Option<usize>) -> bool {
    let mut seen = HashSet::new();
    let mut current = start;
    while let Some(parent) = parent_of(current) {
        if parent == start {
            return true;
        }
        if !seen.insert(parent) {
            // Entered a cycle that does not contain `start`.
            return false;
        }
        current = parent;
    }
    false
}
