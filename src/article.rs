// Copyright (c) 2022, MaidSafe.
// All rights reserved.
//
// This SAFE Network Software is licensed under the BSD-3-Clause license.
// Please see the LICENSE file for more details.

//! Implements Article, the wiki command surface over a Treedoc replica.
//!
//! Positions are always 1-based indexes into the visible paragraphs.
//! Moving articles between peers is left to a `Transport`.

use log::{debug, warn};

use super::{LogOp, Op, Replica, Result, Snapshot};

/// One paragraph of an article.
pub type Paragraph = String;

/// Identifies the peer editing an article.
pub type SiteId = String;

/// What an Article needs from the peer-to-peer layer.
pub trait Transport {
    /// fetches the whole article `title`, or None if no peer has it
    fn pull(&mut self, title: &str) -> Result<Option<Snapshot<Paragraph, SiteId>>>;

    /// sends local edits of `title`, oldest first.  returns how many
    /// leading entries of `log` were replayed by the receiver.
    fn push(&mut self, title: &str, log: &[LogOp<Paragraph, SiteId>]) -> Result<usize>;
}

/// A wiki article being edited at one site.
#[derive(Debug, Clone)]
pub struct Article {
    title: String,
    replica: Replica<Paragraph, SiteId>,
}

impl Article {
    /// creates a new, empty article
    pub fn new(title: &str, site: SiteId) -> Self {
        Self {
            title: title.to_string(),
            replica: Replica::new(site),
        }
    }

    /// restores an article from a snapshot, eg one kept in local storage
    pub fn from_snapshot(title: &str, site: SiteId, snapshot: Snapshot<Paragraph, SiteId>) -> Result<Self> {
        Ok(Self {
            title: title.to_string(),
            replica: Replica::from_snapshot(site, snapshot)?,
        })
    }

    /// fetches `title` through `transport`.  An article no peer has yet
    /// starts out empty.
    pub fn pull<T: Transport>(title: &str, site: SiteId, transport: &mut T) -> Result<Self> {
        match transport.pull(title)? {
            Some(snapshot) => Self::from_snapshot(title, site, snapshot),
            None => {
                warn!("article {:?} not found, creating new article", title);
                Ok(Self::new(title, site))
            }
        }
    }

    /// returns the title
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// returns the underlying replica
    #[inline]
    pub fn replica(&self) -> &Replica<Paragraph, SiteId> {
        &self.replica
    }

    /// inserts `text` as the paragraph at `position`
    pub fn insert(&mut self, position: usize, text: &str) -> Result<Op<Paragraph, SiteId>> {
        self.replica.insert(text.to_string(), position)
    }

    /// deletes the paragraph at `position`
    pub fn delete(&mut self, position: usize) -> Result<Op<Paragraph, SiteId>> {
        self.replica.delete(position)
    }

    /// applies an edit made elsewhere
    pub fn apply_op(&mut self, op: Op<Paragraph, SiteId>) -> Result<()> {
        self.replica.apply_op(op)
    }

    /// returns the visible paragraphs
    pub fn view(&self) -> Vec<Paragraph> {
        self.replica.contents()
    }

    /// returns the article text, paragraphs separated by blank lines
    pub fn render(&self) -> String {
        self.view().join("\n\n")
    }

    /// sends pending edits through `transport` and drops the ones it
    /// replayed from the log.  returns the number replayed.
    pub fn push<T: Transport>(&mut self, transport: &mut T) -> Result<usize> {
        let replayed = transport.push(&self.title, self.replica.log())?;
        self.replica.acknowledge(replayed);
        debug!("article {:?}: pushed {} edits", self.title, replayed);
        Ok(replayed)
    }

    /// flattens the article for storage
    pub fn snapshot(&self) -> Snapshot<Paragraph, SiteId> {
        self.replica.snapshot()
    }
}
