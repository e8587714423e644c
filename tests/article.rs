// Copyright (c) 2022, MaidSafe.
// All rights reserved.
//
// This SAFE Network Software is licensed under the BSD-3-Clause license.
// Please see the LICENSE file for more details.

/// tests for the wiki article layer
use crdt_treedoc::{Article, Error, LogOp, Paragraph, Result, SiteId, Snapshot, State, Transport};
use std::collections::HashMap;

// An in-memory peer holding articles.  Pushed edits are replayed in
// order; at most `budget` edits are taken per push, if set.
#[derive(Default)]
struct MemoryPeer {
    articles: HashMap<String, State<Paragraph, SiteId>>,
    budget: Option<usize>,
    offline: bool,
}

impl MemoryPeer {
    fn check_online(&self) -> Result<()> {
        if self.offline {
            return Err(Error::Transport {
                reason: "peer offline".to_string(),
            });
        }
        Ok(())
    }
}

impl Transport for MemoryPeer {
    fn pull(&mut self, title: &str) -> Result<Option<Snapshot<Paragraph, SiteId>>> {
        self.check_online()?;
        Ok(self.articles.get(title).map(|s| Snapshot {
            records: s.treedoc().flatten(),
            log: Vec::new(),
        }))
    }

    fn push(&mut self, title: &str, log: &[LogOp<Paragraph, SiteId>]) -> Result<usize> {
        self.check_online()?;
        let budget = self.budget.unwrap_or(log.len());
        let state = self.articles.entry(title.to_string()).or_default();
        let mut replayed = 0;
        for entry in log.iter().take(budget) {
            if state.apply_op(entry.op().clone()).is_err() {
                break;
            }
            replayed += 1;
        }
        Ok(replayed)
    }
}

fn site(name: &str) -> SiteId {
    name.to_string()
}

#[test]
fn pulling_a_missing_article_starts_empty() {
    let mut peer = MemoryPeer::default();
    let article = Article::pull("Rust", site("alice"), &mut peer).unwrap();
    assert_eq!(article.title(), "Rust");
    assert!(article.view().is_empty());
    assert_eq!(article.render(), "");
}

#[test]
fn concurrent_editors_converge_through_a_peer() {
    let mut peer = MemoryPeer::default();

    let mut alice = Article::pull("Rust", site("alice"), &mut peer).unwrap();
    alice.insert(1, "Intro").unwrap();
    alice.insert(2, "Body").unwrap();
    assert_eq!(alice.push(&mut peer).unwrap(), 2);
    assert!(alice.replica().log().is_empty());

    // bob starts from the pushed article, then both edit concurrently.
    let mut bob = Article::pull("Rust", site("bob"), &mut peer).unwrap();
    assert_eq!(bob.view(), vec!["Intro", "Body"]);
    bob.insert(2, "Middle").unwrap();
    alice.delete(1).unwrap();

    assert_eq!(bob.push(&mut peer).unwrap(), 1);
    assert_eq!(alice.push(&mut peer).unwrap(), 1);

    let carol = Article::pull("Rust", site("carol"), &mut peer).unwrap();
    assert_eq!(carol.view(), vec!["Middle", "Body"]);
    assert_eq!(carol.render(), "Middle\n\nBody");
}

#[test]
fn remote_edits_applied_directly_converge() {
    let mut alice = Article::new("Rust", site("alice"));
    let mut bob = Article::new("Rust", site("bob"));

    let op = alice.insert(1, "Intro").unwrap();
    bob.apply_op(op).unwrap();

    let a = alice.insert(2, "from alice").unwrap();
    let b = bob.insert(2, "from bob").unwrap();
    alice.apply_op(b).unwrap();
    bob.apply_op(a).unwrap();

    assert_eq!(alice.view(), bob.view());
    assert_eq!(alice.view(), vec!["Intro", "from alice", "from bob"]);
}

#[test]
fn failed_push_keeps_the_log() {
    let mut peer = MemoryPeer::default();
    let mut alice = Article::new("Rust", site("alice"));
    alice.insert(1, "Intro").unwrap();

    peer.offline = true;
    assert!(matches!(alice.push(&mut peer), Err(Error::Transport { .. })));
    assert_eq!(alice.replica().log().len(), 1);

    peer.offline = false;
    assert_eq!(alice.push(&mut peer).unwrap(), 1);
    assert!(alice.replica().log().is_empty());
}

#[test]
fn partial_push_acknowledges_only_replayed_edits() {
    let mut peer = MemoryPeer {
        budget: Some(2),
        ..Default::default()
    };
    let mut alice = Article::new("Rust", site("alice"));
    for (i, text) in ["one", "two", "three"].iter().enumerate() {
        alice.insert(i + 1, text).unwrap();
    }

    assert_eq!(alice.push(&mut peer).unwrap(), 2);
    assert_eq!(alice.replica().log().len(), 1);
    assert_eq!(alice.replica().log()[0].value().map(String::as_str), Some("three"));

    assert_eq!(alice.push(&mut peer).unwrap(), 1);
    assert!(alice.replica().log().is_empty());

    let bob = Article::pull("Rust", site("bob"), &mut peer).unwrap();
    assert_eq!(bob.view(), alice.view());
}

#[test]
fn invalid_positions_are_reported() {
    let mut alice = Article::new("Rust", site("alice"));
    assert!(matches!(
        alice.delete(1),
        Err(Error::InvalidPosition { position: 1, visible: 0 })
    ));
    alice.insert(1, "Intro").unwrap();
    assert!(matches!(
        alice.delete(0),
        Err(Error::InvalidPosition { position: 0, visible: 1 })
    ));
}

#[test]
fn snapshot_survives_the_wire() {
    let mut alice = Article::new("Rust", site("alice"));
    alice.insert(1, "Intro").unwrap();
    alice.insert(2, "Body").unwrap();
    alice.delete(1).unwrap();

    let json = serde_json::to_string(&alice.snapshot()).unwrap();
    let snapshot: Snapshot<Paragraph, SiteId> = serde_json::from_str(&json).unwrap();
    let mut restored = Article::from_snapshot("Rust", site("alice"), snapshot).unwrap();

    assert_eq!(restored.view(), vec!["Body"]);
    assert_eq!(restored.replica().log().len(), 3);
    assert_eq!(restored.replica().treedoc().num_nodes(), 2);

    restored.insert(1, "New intro").unwrap();
    assert_eq!(restored.view(), vec!["New intro", "Body"]);
}
