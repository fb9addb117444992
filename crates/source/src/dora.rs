use crate::{decode, SourceEvent};
use dora_node_api::{DoraNode, Event};
use std::thread;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Subscribe to the dora dataflow this process was launched under.
///
/// Spawns a dedicated OS thread that blocks on the node's event stream,
/// filters for data inputs on `input_id`, decodes each payload, and
/// forwards readings through the returned channel.
///
/// The thread stops when the receiver is dropped or when dora closes the
/// event stream (dataflow stop); the latter is signalled with
/// [`SourceEvent::Closed`] so the UI can mark the chart as frozen.
pub fn spawn_listener(input_id: String) -> mpsc::Receiver<SourceEvent> {
    let (tx, rx) = mpsc::channel(64);
    thread::spawn(move || listen(input_id, tx));
    rx
}

fn listen(input_id: String, tx: mpsc::Sender<SourceEvent>) {
    let (node, mut events) = match DoraNode::init_from_env() {
        Ok(pair) => pair,
        Err(e) => {
            warn!("dora runtime unavailable (not launched by a dataflow?): {e}");
            let _ = tx.blocking_send(SourceEvent::Closed);
            return;
        }
    };
    // The node handle must outlive the event stream.
    let _node = node;

    info!("Subscribed to dora input `{input_id}`");

    while let Some(event) = events.recv() {
        match event {
            Event::Input {
                id,
                metadata: _,
                data,
            } if id.as_str() == input_id => match decode::scalar_reading(&**data) {
                Ok(value) => {
                    if tx.blocking_send(SourceEvent::Reading(value)).is_err() {
                        debug!("Reading channel closed; stopping listener");
                        return;
                    }
                }
                Err(e) => warn!("Skipping malformed payload on `{input_id}`: {e}"),
            },
            Event::Input { id, .. } => debug!("Ignoring input `{}`", id.as_str()),
            other => debug!("Unhandled dora event: {other:?}"),
        }
    }

    info!("dora event stream closed");
    let _ = tx.blocking_send(SourceEvent::Closed);
}
