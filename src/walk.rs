//! Streams the in-order sequence of a tree onto a channel.
//!
//! Channels are rendezvous channels (`sync_channel(0)`): every send blocks until
//! the consumer takes the value. The walker owns the sending half and the
//! channel closes when it is dropped, which is the only end-of-sequence signal
//! a consumer gets.

use crate::error::{Error, Result};
use crate::treenodes::{InOrder, Tree, TreeNode};
use crate::types::*;
use log::{debug, trace};
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Sends every value of the tree rooted at `root` on `ch`, left subtree first,
/// then the node, then the right subtree.
///
/// Returns how many values were delivered. The channel is closed on return,
/// also for an empty tree. If the receiver goes away the walk stops at the
/// next send with `Error::Disconnected`.
pub fn walk<N: TreeNode>(root: Option<&N>, ch: SyncSender<Value>) -> Result<usize> {
    let mut sent = 0;
    for value in InOrder::new(root) {
        if ch.send(value).is_err() {
            debug!("walk: receiver hung up after {} values", sent);
            return Err(Error::Disconnected { sent });
        }
        trace!("walk: sent {}", value);
        sent += 1;
    }

    debug!("walk: done, {} values", sent);
    Ok(sent)
}

/// Opens a sequence channel. Zero capacity, so producer and consumer meet on
/// every value.
pub fn sequence_channel() -> (SyncSender<Value>, Receiver<Value>) {
    mpsc::sync_channel(0)
}

/// Walks a shared tree on a thread of its own and hands back the receiving end.
pub fn spawn_walk(tree: Arc<Tree>) -> (Receiver<Value>, JoinHandle<Result<usize>>) {
    let (tx, rx) = sequence_channel();
    let handle = thread::spawn(move || walk(tree.root(), tx));
    (rx, handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_in_order() {
        let tree = Tree::from_values(vec![4, 2, 6, 1, 3, 5, 7]);
        let (rx, handle) = spawn_walk(Arc::new(tree));
        let seen: Sequence = rx.iter().collect();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(handle.join().unwrap(), Ok(7));
    }

    #[test]
    fn empty_tree_closes_immediately() {
        let (tx, rx) = sequence_channel();
        let empty = Tree::new();
        assert_eq!(walk(empty.root(), tx), Ok(0));
        assert!(rx.recv().is_err());
    }

    #[test]
    fn stops_when_receiver_drops() {
        let tree = Tree::from_sorted(&[1, 2, 3, 4, 5]);
        let (rx, handle) = spawn_walk(Arc::new(tree));
        assert_eq!(rx.recv(), Ok(1));
        assert_eq!(rx.recv(), Ok(2));
        drop(rx);
        assert_eq!(
            handle.join().unwrap(),
            Err(Error::Disconnected { sent: 2 })
        );
    }
}
